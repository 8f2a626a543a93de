//! # Vitrine Web
//!
//! Browser host for `vitrine-core`. [`WebDom`] implements the host traits
//! over `web-sys`; the runtime installs listeners, animation frames,
//! timeouts and intersection observers through `gloo` and forwards every
//! event to the core [`vitrine_core::Page`].
//!
//! The wasm start function initialises logging, reads the optional inline
//! `<script type="application/json" id="vitrine-config">` block and boots the
//! page once the document has been parsed.

mod config;
mod dom;
mod observer;
mod runtime;

pub use dom::WebDom;
pub use runtime::Runtime;

use wasm_bindgen::prelude::*;

#[wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    wasm_logger::init(wasm_logger::Config::default());

    if let Err(err) = runtime::boot() {
        log::error!("vitrine failed to start: {err:#}");
    }
}
