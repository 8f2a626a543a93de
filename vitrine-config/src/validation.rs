//! Guard rails applied after parsing.
//!
//! Values that would make a behavior divide by zero, never fire, or run
//! backwards are rejected outright; the loader then falls back to defaults.

use thiserror::Error;

use crate::models::BehaviorConfig;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigGuardRailError {
    #[error("scroll.throttle_ms must be positive and finite (got {0})")]
    ThrottleInterval(f64),
    #[error("scroll.hide_threshold_px must be finite and >= 0 (got {0})")]
    HideThreshold(f64),
    #[error("awards.mobile_breakpoint_px must be positive and finite (got {0})")]
    Breakpoint(f64),
    #[error("reveal.margin_px must be finite (got {0})")]
    RevealMargin(f64),
    #[error("observer.threshold must lie in [0, 1] (got {0})")]
    ObserverThreshold(f64),
    #[error(
        "observer.{field} must be one to four px or % lengths (got `{value}`)"
    )]
    RootMargin { field: &'static str, value: String },
    #[error(
        "words triggers must lie in [0, 1] with start above end (got start={start}, end={end})"
    )]
    WordTriggers { start: f64, end: f64 },
}

impl BehaviorConfig {
    /// Check every numeric tunable, reporting the first violation.
    pub fn validate(&self) -> Result<(), ConfigGuardRailError> {
        let scroll = &self.scroll;
        if !(scroll.throttle_ms.is_finite() && scroll.throttle_ms > 0.0) {
            return Err(ConfigGuardRailError::ThrottleInterval(
                scroll.throttle_ms,
            ));
        }
        if !(scroll.hide_threshold_px.is_finite()
            && scroll.hide_threshold_px >= 0.0)
        {
            return Err(ConfigGuardRailError::HideThreshold(
                scroll.hide_threshold_px,
            ));
        }

        let bp = self.awards.mobile_breakpoint_px;
        if !(bp.is_finite() && bp > 0.0) {
            return Err(ConfigGuardRailError::Breakpoint(bp));
        }

        if !self.reveal.margin_px.is_finite() {
            return Err(ConfigGuardRailError::RevealMargin(
                self.reveal.margin_px,
            ));
        }

        let threshold = self.observer.threshold;
        if !(0.0..=1.0).contains(&threshold) {
            return Err(ConfigGuardRailError::ObserverThreshold(threshold));
        }
        for (field, value) in [
            ("section_root_margin", &self.observer.section_root_margin),
            ("image_root_margin", &self.observer.image_root_margin),
        ] {
            if !is_root_margin(value) {
                return Err(ConfigGuardRailError::RootMargin {
                    field,
                    value: value.clone(),
                });
            }
        }

        let (start, end) = (self.words.start_trigger, self.words.end_trigger);
        let unit = 0.0..=1.0;
        if !(unit.contains(&start) && unit.contains(&end) && start > end) {
            return Err(ConfigGuardRailError::WordTriggers { start, end });
        }

        Ok(())
    }
}

/// Mirrors the `rootMargin` grammar the browser accepts: one to four
/// whitespace-separated lengths, each in `px` or `%`.
fn is_root_margin(value: &str) -> bool {
    let tokens: Vec<&str> = value.split_whitespace().collect();
    if tokens.is_empty() || tokens.len() > 4 {
        return false;
    }
    tokens.iter().all(|token| {
        let number = token
            .strip_suffix("px")
            .or_else(|| token.strip_suffix('%'));
        matches!(number.map(str::parse::<f64>), Some(Ok(n)) if n.is_finite())
    })
}
