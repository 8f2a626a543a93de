//! Host capabilities the behaviors are written against.
//!
//! The browser implementation lives in `vitrine-web`; this crate's tests use
//! an in-memory `FakeDom`. Methods take `&self` because browser DOM
//! handles are shared references with interior mutability.

use std::fmt;

use vitrine_model::{Rect, ViewportSize};

/// Read and write access to the document.
pub trait Dom: 'static {
    /// Opaque element handle. Equality means "same node".
    type Element: Clone + PartialEq + fmt::Debug;

    /// First element matching `selector`, or `None` (also for a selector the
    /// host cannot parse).
    fn query(&self, selector: &str) -> Option<Self::Element>;

    /// All elements matching `selector`, in document order.
    fn query_all(&self, selector: &str) -> Vec<Self::Element>;

    fn body(&self) -> Option<Self::Element>;

    fn viewport(&self) -> ViewportSize;

    /// Vertical scroll offset of the window in CSS pixels.
    fn scroll_y(&self) -> f64;

    /// Bounding box relative to the viewport.
    fn rect(&self, element: &Self::Element) -> Rect;

    fn client_width(&self, element: &Self::Element) -> f64;

    /// Computed value of a CSS property, `None` when empty or unavailable.
    fn computed_style(
        &self,
        element: &Self::Element,
        property: &str,
    ) -> Option<String>;

    fn add_class(&self, element: &Self::Element, class: &str);

    fn remove_class(&self, element: &Self::Element, class: &str);

    fn has_class(&self, element: &Self::Element, class: &str) -> bool;

    /// Sets an inline style property (`kebab-case` name).
    fn set_style(&self, element: &Self::Element, property: &str, value: &str);

    fn set_attribute(&self, element: &Self::Element, name: &str, value: &str);

    fn set_disabled(&self, element: &Self::Element, disabled: bool);

    fn text(&self, element: &Self::Element) -> String;

    /// Creates an element from `spec` and appends it to the body.
    fn append_to_body(&self, spec: &ElementSpec) -> Option<Self::Element>;

    /// Replaces the children of `element` with one `<span>` per word,
    /// separated by single spaces, and returns the spans in order.
    fn replace_with_word_spans(
        &self,
        element: &Self::Element,
        words: &[String],
    ) -> Vec<Self::Element>;

    /// Smoothly scrolls the window back to the top.
    fn scroll_to_top(&self);

    /// Smoothly scrolls `element` to the start of the viewport.
    fn scroll_into_view(&self, element: &Self::Element);
}

/// Monotonic milliseconds, comparable with animation frame timestamps.
#[cfg_attr(test, mockall::automock)]
pub trait Clock {
    fn now_ms(&self) -> f64;
}

/// Everything a [`crate::page::Page`] needs from its environment.
pub trait Host: Dom + Clock {}

impl<T: Dom + Clock> Host for T {}

/// Description of an element created by the page itself.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ElementSpec {
    pub tag: &'static str,
    pub id: Option<String>,
    pub class: String,
    pub text: Option<String>,
    pub attributes: Vec<(String, String)>,
}

impl ElementSpec {
    pub fn new(tag: &'static str, class: impl Into<String>) -> Self {
        Self {
            tag,
            class: class.into(),
            ..Self::default()
        }
    }

    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }

    pub fn with_text(mut self, text: impl Into<String>) -> Self {
        self.text = Some(text.into());
        self
    }

    pub fn with_attribute(
        mut self,
        name: impl Into<String>,
        value: impl Into<String>,
    ) -> Self {
        self.attributes.push((name.into(), value.into()));
        self
    }
}

/// Formats a pixel length the way CSS expects it, without a `-0`.
pub(crate) fn px(value: f64) -> String {
    let value = if value == 0.0 || !value.is_finite() {
        0.0
    } else {
        value
    };
    format!("{value}px")
}
