//! One-way `.scroll-reveal` reveals, checked every frame.
//!
//! An element is revealed once its top rises above the viewport bottom
//! minus the reveal margin. Revealed elements are never hidden again.

use vitrine_config::{ClassNames, RevealConfig};

use super::{ScrollEffect, Tier};
use crate::host::Dom;

/// Positions in a fixed element list that have already been revealed.
///
/// Membership only grows.
#[derive(Debug, Clone, Default)]
pub struct RevealRegistry {
    revealed: Vec<bool>,
    count: usize,
}

impl RevealRegistry {
    pub fn with_len(len: usize) -> Self {
        Self {
            revealed: vec![false; len],
            count: 0,
        }
    }

    /// Marks `index` revealed. Returns `true` the first time only.
    pub fn insert(&mut self, index: usize) -> bool {
        match self.revealed.get_mut(index) {
            Some(slot) if !*slot => {
                *slot = true;
                self.count += 1;
                true
            }
            _ => false,
        }
    }

    pub fn contains(&self, index: usize) -> bool {
        self.revealed.get(index).copied().unwrap_or(false)
    }

    pub fn len(&self) -> usize {
        self.count
    }

    pub fn is_empty(&self) -> bool {
        self.count == 0
    }

    pub fn is_complete(&self) -> bool {
        self.count == self.revealed.len()
    }
}

/// Adds the revealed class to elements whose top has risen above
/// `viewport_height - margin`.
#[derive(Debug)]
pub struct RevealOnScroll<D: Dom> {
    elements: Vec<D::Element>,
    revealed: RevealRegistry,
    margin_px: f64,
    class: String,
}

impl<D: Dom> RevealOnScroll<D> {
    pub const NAME: &'static str = "reveal";

    pub fn new(
        elements: Vec<D::Element>,
        reveal: &RevealConfig,
        classes: &ClassNames,
    ) -> Self {
        let revealed = RevealRegistry::with_len(elements.len());
        Self {
            elements,
            revealed,
            margin_px: reveal.margin_px,
            class: classes.revealed.clone(),
        }
    }

    pub fn registry(&self) -> &RevealRegistry {
        &self.revealed
    }
}

impl<D: Dom> ScrollEffect<D> for RevealOnScroll<D> {
    fn name(&self) -> &'static str {
        Self::NAME
    }

    fn tier(&self) -> Tier {
        Tier::EveryFrame
    }

    fn apply(&mut self, dom: &D) {
        if self.revealed.is_complete() {
            return;
        }
        let line = dom.viewport().height - self.margin_px;
        for (i, element) in self.elements.iter().enumerate() {
            if self.revealed.contains(i) {
                continue;
            }
            if dom.rect(element).top < line && self.revealed.insert(i) {
                dom.add_class(element, &self.class);
            }
        }
    }
}
