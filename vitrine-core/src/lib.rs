//! # Vitrine Core
//!
//! Page behaviors for the Vitrine marketing site, written against a small
//! host abstraction so they run the same in the browser and in tests.
//!
//! ## Overview
//!
//! - **Carousels**: a clamped gallery and a wrapping awards strip that share
//!   one [`carousel::CarouselState`] with different [`carousel::WrapMode`]s
//! - **Scroll effects**: a registry of [`effects::ScrollEffect`]s driven by a
//!   single [`dispatcher::ScrollDispatcher`] that coalesces scroll events to
//!   one frame and throttles the expensive tier
//! - **Menu**: an explicit open/closed machine with staged activation
//! - **Fade-ins**: one-shot section reveals and lazy image fades fed by
//!   intersection notifications
//!
//! The host supplies a [`host::Dom`] and a [`host::Clock`]. Event listeners,
//! animation frames, timeouts and observers live on the host side; it calls
//! the `on_*` entry points of [`page::Page`] and honors the tickets those
//! entry points hand back.

pub mod carousel;
pub mod decor;
pub mod dispatcher;
pub mod effects;
pub mod error;
pub mod fade_in;
pub mod host;
pub mod menu;
pub mod navigation;
pub mod page;
pub mod timing;

#[cfg(test)]
pub mod testing;

pub use carousel::{
    AwardsCarousel, AwardsMode, CarouselState, GalleryCarousel, TrackMetrics,
    WrapMode,
};
pub use dispatcher::{FrameReport, ScrollDecision, ScrollDispatcher};
pub use effects::{EffectRegistry, ScrollEffect, Tier};
pub use error::{BindError, Result};
pub use host::{Clock, Dom, ElementSpec, Host};
pub use menu::{Menu, MenuMachine, MenuState, OpenTicket};
pub use page::Page;
pub use timing::{Debouncer, FrameGate, Throttle, Ticket};

pub use vitrine_config::BehaviorConfig;
pub use vitrine_model::{Rect, Rgb, ViewportSize};
