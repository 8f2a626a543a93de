//! Binding errors for page features.

use thiserror::Error;

/// A behavior could not find the elements it drives.
///
/// Every page feature is optional: the page wiring logs this at debug level
/// and leaves the feature inert instead of failing the whole page.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum BindError {
    #[error("{component}: no element matches `{selector}`")]
    MissingElement {
        component: &'static str,
        selector: String,
    },

    #[error("{component}: `{selector}` matched no items")]
    NoItems {
        component: &'static str,
        selector: String,
    },
}

impl BindError {
    pub fn missing(component: &'static str, selector: &str) -> Self {
        Self::MissingElement {
            component,
            selector: selector.to_string(),
        }
    }

    pub fn no_items(component: &'static str, selector: &str) -> Self {
        Self::NoItems {
            component,
            selector: selector.to_string(),
        }
    }

    pub fn component(&self) -> &'static str {
        match self {
            Self::MissingElement { component, .. }
            | Self::NoItems { component, .. } => component,
        }
    }
}

pub type Result<T> = std::result::Result<T, BindError>;
