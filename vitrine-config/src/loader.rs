//! Parse and validate page-supplied configuration.

use thiserror::Error;

use crate::models::BehaviorConfig;
use crate::validation::ConfigGuardRailError;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid config JSON: {0}")]
    Parse(#[from] serde_json::Error),
    #[error(transparent)]
    GuardRail(#[from] ConfigGuardRailError),
}

/// Where the active configuration came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ConfigSource {
    /// No override present; built-in defaults.
    #[default]
    Default,
    /// Parsed from an inline JSON block on the page.
    Inline,
    /// An override was present but rejected; built-in defaults.
    Fallback,
}

/// Result of a load: the configuration plus its provenance.
#[derive(Debug, Clone)]
pub struct ConfigLoad {
    pub config: BehaviorConfig,
    pub source: ConfigSource,
}

#[derive(Debug, Default, Clone, Copy)]
pub struct ConfigLoader;

impl ConfigLoader {
    pub fn new() -> Self {
        Self
    }

    /// Strictly load an optional inline override. Blank or missing input
    /// yields the defaults.
    pub fn load(
        &self,
        inline: Option<&str>,
    ) -> Result<ConfigLoad, ConfigError> {
        match inline.map(str::trim).filter(|s| !s.is_empty()) {
            None => Ok(ConfigLoad {
                config: BehaviorConfig::default(),
                source: ConfigSource::Default,
            }),
            Some(json) => Ok(ConfigLoad {
                config: BehaviorConfig::from_json(json)?,
                source: ConfigSource::Inline,
            }),
        }
    }

    /// Like [`ConfigLoader::load`] but never fails: a rejected override is
    /// logged and replaced by the defaults.
    pub fn load_or_default(&self, inline: Option<&str>) -> ConfigLoad {
        self.load(inline).unwrap_or_else(|err| {
            log::warn!("ignoring page config override: {err}");
            ConfigLoad {
                config: BehaviorConfig::default(),
                source: ConfigSource::Fallback,
            }
        })
    }
}

impl BehaviorConfig {
    /// Parse a (possibly partial) JSON document and validate the result.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let cfg: BehaviorConfig = serde_json::from_str(json)?;
        cfg.validate()?;
        Ok(cfg)
    }
}
