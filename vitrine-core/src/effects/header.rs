//! Header swap between the hamburger and the scroll-to-top button.

use vitrine_config::{ClassNames, ScrollConfig};

use super::{ScrollEffect, Tier};
use crate::host::Dom;

/// Swaps the hamburger for the scroll-to-top button once the page has
/// scrolled past the threshold.
#[derive(Debug)]
pub struct HeaderVisibility<D: Dom> {
    hamburger: Option<D::Element>,
    scroll_button: Option<D::Element>,
    threshold_px: f64,
    hide_class: String,
    show_class: String,
}

impl<D: Dom> HeaderVisibility<D> {
    pub const NAME: &'static str = "header";

    /// Either element may be absent; the effect then only drives the other.
    pub fn new(
        hamburger: Option<D::Element>,
        scroll_button: Option<D::Element>,
        scroll: &ScrollConfig,
        classes: &ClassNames,
    ) -> Self {
        Self {
            hamburger,
            scroll_button,
            threshold_px: scroll.hide_threshold_px,
            hide_class: classes.hide_on_scroll.clone(),
            show_class: classes.show_on_scroll.clone(),
        }
    }
}

impl<D: Dom> ScrollEffect<D> for HeaderVisibility<D> {
    fn name(&self) -> &'static str {
        Self::NAME
    }

    fn tier(&self) -> Tier {
        Tier::EveryFrame
    }

    fn apply(&mut self, dom: &D) {
        let scrolled = dom.scroll_y() > self.threshold_px;
        if let Some(hamburger) = &self.hamburger {
            if scrolled {
                dom.add_class(hamburger, &self.hide_class);
            } else {
                dom.remove_class(hamburger, &self.hide_class);
            }
        }
        if let Some(button) = &self.scroll_button {
            if scrolled {
                dom.add_class(button, &self.show_class);
            } else {
                dom.remove_class(button, &self.show_class);
            }
        }
    }
}
