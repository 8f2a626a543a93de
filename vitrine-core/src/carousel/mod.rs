//! Paged horizontal carousels.
//!
//! [`CarouselState`] is pure index arithmetic. [`GalleryCarousel`] and
//! [`AwardsCarousel`] bind it to elements and render it.

mod awards;
mod gallery;
mod metrics;
mod state;

pub use awards::{AwardsCarousel, AwardsMode};
pub use gallery::GalleryCarousel;
pub use metrics::{TrackMetrics, measure_track, parse_gap};
pub use state::{CarouselState, WrapMode};
