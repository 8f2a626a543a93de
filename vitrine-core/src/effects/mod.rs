//! Scroll-driven effects and the registry the dispatcher runs them from.

mod gallery_fade;
mod header;
mod reveal;
mod word_color;

pub use gallery_fade::GalleryFade;
pub use header::HeaderVisibility;
pub use reveal::{RevealOnScroll, RevealRegistry};
pub use word_color::{WordColor, scroll_progress, split_words};

use crate::host::Dom;

/// How often the dispatcher runs an effect.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tier {
    /// Cheap work that runs on every scheduled frame.
    EveryFrame,
    /// Per-element geometry work, rate limited by the dispatcher's throttle.
    Throttled,
}

/// A side effect recomputed from the current scroll position.
///
/// `apply` must be idempotent: running it twice for the same layout leaves
/// the document as running it once.
#[cfg_attr(test, mockall::automock)]
pub trait ScrollEffect<D: Dom> {
    fn name(&self) -> &'static str;

    fn tier(&self) -> Tier;

    fn apply(&mut self, dom: &D);
}

/// Effects in registration order.
pub struct EffectRegistry<D: Dom> {
    effects: Vec<Box<dyn ScrollEffect<D>>>,
}

impl<D: Dom> EffectRegistry<D> {
    pub fn new() -> Self {
        Self {
            effects: Vec::new(),
        }
    }

    pub fn register(&mut self, effect: impl ScrollEffect<D> + 'static) {
        log::debug!(
            "registered scroll effect `{}` ({:?})",
            effect.name(),
            effect.tier()
        );
        self.effects.push(Box::new(effect));
    }

    pub fn len(&self) -> usize {
        self.effects.len()
    }

    pub fn is_empty(&self) -> bool {
        self.effects.is_empty()
    }

    pub fn names(&self) -> Vec<&'static str> {
        self.effects.iter().map(|effect| effect.name()).collect()
    }

    /// Runs every effect of `tier`; returns how many ran.
    pub fn run_tier(&mut self, tier: Tier, dom: &D) -> usize {
        let mut ran = 0;
        for effect in self.effects.iter_mut().filter(|e| e.tier() == tier) {
            effect.apply(dom);
            ran += 1;
        }
        ran
    }

    /// Runs the effect registered under `name`, if any.
    pub fn run_named(&mut self, name: &str, dom: &D) -> bool {
        match self.effects.iter_mut().find(|e| e.name() == name) {
            Some(effect) => {
                effect.apply(dom);
                true
            }
            None => false,
        }
    }

    pub fn run_all(&mut self, dom: &D) -> usize {
        let every_frame = self.run_tier(Tier::EveryFrame, dom);
        every_frame + self.run_tier(Tier::Throttled, dom)
    }
}

impl<D: Dom> Default for EffectRegistry<D> {
    fn default() -> Self {
        Self::new()
    }
}

impl<D: Dom> std::fmt::Debug for EffectRegistry<D> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("EffectRegistry")
            .field("effects", &self.names())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::FakeDom;
    use vitrine_model::ViewportSize;

    fn mock(
        name: &'static str,
        tier: Tier,
        runs: usize,
    ) -> MockScrollEffect<FakeDom> {
        let mut effect = MockScrollEffect::new();
        effect.expect_name().return_const(name);
        effect.expect_tier().return_const(tier);
        effect.expect_apply().times(runs).return_const(());
        effect
    }

    #[test]
    fn run_tier_only_touches_matching_effects() {
        let dom = FakeDom::new(ViewportSize::new(1280.0, 800.0));
        let mut registry = EffectRegistry::new();
        registry.register(mock("header", Tier::EveryFrame, 2));
        registry.register(mock("words", Tier::Throttled, 1));

        assert_eq!(registry.run_tier(Tier::EveryFrame, &dom), 1);
        assert_eq!(registry.run_all(&dom), 2);
        assert_eq!(registry.names(), vec!["header", "words"]);
    }

    #[test]
    fn run_named_targets_a_single_effect() {
        let dom = FakeDom::new(ViewportSize::new(1280.0, 800.0));
        let mut registry = EffectRegistry::new();
        registry.register(mock("header", Tier::EveryFrame, 1));
        registry.register(mock("reveal", Tier::EveryFrame, 0));

        assert!(registry.run_named("header", &dom));
        assert!(!registry.run_named("parallax", &dom));
    }
}
