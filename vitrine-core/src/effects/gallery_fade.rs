//! Throttled settle-in for gallery items.

use super::{RevealRegistry, ScrollEffect, Tier};
use crate::host::Dom;

/// Settles gallery items (opacity 1, no offset) once they enter the
/// viewport. Never reverts.
#[derive(Debug)]
pub struct GalleryFade<D: Dom> {
    items: Vec<D::Element>,
    shown: RevealRegistry,
}

impl<D: Dom> GalleryFade<D> {
    pub const NAME: &'static str = "gallery-fade";

    pub fn new(items: Vec<D::Element>) -> Self {
        let shown = RevealRegistry::with_len(items.len());
        Self { items, shown }
    }

    pub fn shown(&self) -> usize {
        self.shown.len()
    }
}

impl<D: Dom> ScrollEffect<D> for GalleryFade<D> {
    fn name(&self) -> &'static str {
        Self::NAME
    }

    fn tier(&self) -> Tier {
        Tier::Throttled
    }

    fn apply(&mut self, dom: &D) {
        if self.shown.is_complete() {
            return;
        }
        let height = dom.viewport().height;
        for (i, item) in self.items.iter().enumerate() {
            if self.shown.contains(i) {
                continue;
            }
            let visible = dom.rect(item).intersects_viewport(height);
            if visible && self.shown.insert(i) {
                dom.set_style(item, "opacity", "1");
                dom.set_style(item, "transform", "translateY(0)");
            }
        }
    }
}
