//! Value types shared across Vitrine crates.
//!
//! Nothing in here touches the host environment: colours, rectangles and the
//! viewport snapshot are plain data so that both the configuration layer and
//! the behavior core can depend on them without pulling in browser bindings.

pub mod color;
pub mod geometry;

pub use color::Rgb;
pub use geometry::{Rect, ViewportSize};
