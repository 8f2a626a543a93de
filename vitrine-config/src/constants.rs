//! Default values for every tunable in [`crate::BehaviorConfig`].

/// Scroll offset (px) above which the hamburger hides and the scroll-to-top
/// button shows.
pub const SCROLL_HIDE_THRESHOLD_PX: f64 = 300.0;

/// Minimum spacing (ms) between runs of the heavy scroll effects.
pub const HEAVY_EFFECT_THROTTLE_MS: f64 = 150.0;

/// Quiet period (ms) after the last resize before carousel metrics are
/// recomputed.
pub const RESIZE_DEBOUNCE_MS: u32 = 100;

/// Viewport width (px) at or below which the awards carousel shows one card.
pub const AWARDS_MOBILE_BREAKPOINT_PX: f64 = 700.0;

/// Distance (px) an element must clear above the viewport bottom before it is
/// revealed.
pub const REVEAL_MARGIN_PX: f64 = 150.0;

/// Visible fraction that counts as an intersection for fade-in observers.
pub const INTERSECTION_THRESHOLD: f64 = 0.1;

/// Root margin for the section fade-in observer.
pub const SECTION_ROOT_MARGIN: &str = "0px 0px -100px 0px";

/// Root margin for the lazy gallery image observer.
pub const IMAGE_ROOT_MARGIN: &str = "50px";

/// Word colour interpolation starts when the section top crosses this
/// fraction of the viewport height.
pub const WORD_START_TRIGGER: f64 = 0.9;

/// Word colour interpolation completes at this fraction of the viewport
/// height.
pub const WORD_END_TRIGGER: f64 = 0.3;

/// Delay (ms) between activating the backdrop and sliding the menu panel in.
pub const MENU_PANEL_DELAY_MS: u32 = 10;

/// Delay (ms) before the body fades in after window load.
pub const PAGE_FADE_DELAY_MS: u32 = 100;

/// Per-item stagger (s) for gallery transitions and social icon animations.
pub const STAGGER_STEP_S: f64 = 0.1;
