use vitrine_config::{ConfigLoad, ConfigLoader, ConfigSource};
use web_sys::Document;

/// Id of the inline JSON block holding behavior overrides.
pub const CONFIG_ELEMENT_ID: &str = "vitrine-config";

/// Loads overrides from the page, falling back to defaults.
pub fn load(document: &Document) -> ConfigLoad {
    let inline = document
        .get_element_by_id(CONFIG_ELEMENT_ID)
        .and_then(|element| element.text_content());
    let load = ConfigLoader::new().load_or_default(inline.as_deref());
    match load.source {
        ConfigSource::Inline => log::info!("using inline behavior config"),
        ConfigSource::Default => log::debug!("using default behavior config"),
        ConfigSource::Fallback => {}
    }
    load
}
