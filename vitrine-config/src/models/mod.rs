pub mod selectors;

use serde::{Deserialize, Serialize};
use vitrine_model::Rgb;

use crate::constants;
use selectors::{ClassNames, Selectors};

/// Full behavior configuration for one page.
///
/// Every section is `#[serde(default)]`, so a page override only has to name
/// the values it changes:
///
/// ```json
/// { "scroll": { "hide_threshold_px": 420 }, "awards": { "mobile_breakpoint_px": 640 } }
/// ```
#[derive(Debug, Clone, PartialEq, Default, Deserialize, Serialize)]
#[serde(default)]
pub struct BehaviorConfig {
    pub scroll: ScrollConfig,
    pub resize: ResizeConfig,
    pub awards: AwardsConfig,
    pub reveal: RevealConfig,
    pub observer: ObserverConfig,
    pub words: WordColorConfig,
    pub menu: MenuConfig,
    pub selectors: Selectors,
    pub classes: ClassNames,
}

/// Unified scroll dispatcher tuning.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct ScrollConfig {
    /// Scroll offset (px) past which the hamburger hides and the scroll-to-top
    /// button appears. At or below it the two swap back.
    pub hide_threshold_px: f64,
    /// Minimum interval (ms) between runs of the heavy, geometry-reading
    /// effects (gallery fade, word colouring). Lower values track the scroll
    /// more closely at the cost of layout reads per frame.
    pub throttle_ms: f64,
}

impl Default for ScrollConfig {
    fn default() -> Self {
        Self {
            hide_threshold_px: constants::SCROLL_HIDE_THRESHOLD_PX,
            throttle_ms: constants::HEAVY_EFFECT_THROTTLE_MS,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct ResizeConfig {
    /// Quiet period (ms) after the last resize notification before the
    /// gallery re-measures. Every new notification restarts the wait.
    pub debounce_ms: u32,
}

impl Default for ResizeConfig {
    fn default() -> Self {
        Self {
            debounce_ms: constants::RESIZE_DEBOUNCE_MS,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct AwardsConfig {
    /// Viewport width (px) at or below which the awards carousel switches to
    /// single-card mode.
    pub mobile_breakpoint_px: f64,
}

impl Default for AwardsConfig {
    fn default() -> Self {
        Self {
            mobile_breakpoint_px: constants::AWARDS_MOBILE_BREAKPOINT_PX,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct RevealConfig {
    /// An element is revealed once its top is this many px above the bottom
    /// of the viewport.
    pub margin_px: f64,
}

impl Default for RevealConfig {
    fn default() -> Self {
        Self {
            margin_px: constants::REVEAL_MARGIN_PX,
        }
    }
}

/// Options handed to the host's intersection observers.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct ObserverConfig {
    pub threshold: f64,
    pub section_root_margin: String,
    pub image_root_margin: String,
}

impl Default for ObserverConfig {
    fn default() -> Self {
        Self {
            threshold: constants::INTERSECTION_THRESHOLD,
            section_root_margin: constants::SECTION_ROOT_MARGIN.to_string(),
            image_root_margin: constants::IMAGE_ROOT_MARGIN.to_string(),
        }
    }
}

/// Scroll-linked word colouring for the about section.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct WordColorConfig {
    /// Fraction of the viewport height where progress is 0.
    pub start_trigger: f64,
    /// Fraction of the viewport height where progress reaches 1. Must sit
    /// above `start_trigger`, i.e. be a smaller fraction.
    pub end_trigger: f64,
    pub start_color: Rgb,
    pub end_color: Rgb,
}

impl Default for WordColorConfig {
    fn default() -> Self {
        Self {
            start_trigger: constants::WORD_START_TRIGGER,
            end_trigger: constants::WORD_END_TRIGGER,
            start_color: Rgb::ASHLITE,
            end_color: Rgb::NERO,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct MenuConfig {
    /// Delay (ms) between the backdrop activating and the panel sliding in.
    pub panel_delay_ms: u32,
}

impl Default for MenuConfig {
    fn default() -> Self {
        Self {
            panel_delay_ms: constants::MENU_PANEL_DELAY_MS,
        }
    }
}
