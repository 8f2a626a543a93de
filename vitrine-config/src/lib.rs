//! Configuration for the Vitrine page behavior layer.
//!
//! Every tunable constant (scroll thresholds, throttle and debounce windows,
//! breakpoints, observer options, colours) lives in [`BehaviorConfig`], along
//! with the selectors and class names the behaviors bind to. Defaults match
//! the stock marketing page; a page can override any subset through an inline
//! JSON block which is parsed with [`ConfigLoader`].

pub mod constants;
pub mod loader;
pub mod models;
pub mod validation;

pub use loader::{ConfigError, ConfigLoad, ConfigLoader, ConfigSource};
pub use models::selectors::{ClassNames, Selectors};
pub use models::{
    AwardsConfig, BehaviorConfig, MenuConfig, ObserverConfig, ResizeConfig,
    RevealConfig, ScrollConfig, WordColorConfig,
};
pub use validation::ConfigGuardRailError;
