//! Hover lifts and staggered entrance delays.

use vitrine_config::Selectors;

use crate::host::Dom;

/// Pointer crossing into or out of an element.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Hover {
    Enter,
    Leave,
}

/// An inline style toggled by hover.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HoverStyle {
    pub property: &'static str,
    pub enter: &'static str,
    pub leave: &'static str,
}

impl HoverStyle {
    /// Raises cards above their neighbours.
    pub const LIFT: Self = Self {
        property: "z-index",
        enter: "10",
        leave: "1",
    };

    pub const TILT: Self = Self {
        property: "transform",
        enter: "scale(1.2) rotate(5deg)",
        leave: "scale(1) rotate(0deg)",
    };

    pub fn apply<D: Dom>(&self, dom: &D, element: &D::Element, hover: Hover) {
        let value = match hover {
            Hover::Enter => self.enter,
            Hover::Leave => self.leave,
        };
        dom.set_style(element, self.property, value);
    }
}

/// `index × step` seconds, rounded to the millisecond.
pub fn stagger_delay(index: usize, step_s: f64) -> String {
    let seconds = (index as f64 * step_s * 1_000.0).round() / 1_000.0;
    format!("{seconds}s")
}

/// Every element that reacts to hover, grouped by style.
#[derive(Debug)]
pub struct HoverTargets<D: Dom> {
    gallery_items: Vec<D::Element>,
    cards: Vec<D::Element>,
    social_icons: Vec<D::Element>,
}

impl<D: Dom> HoverTargets<D> {
    pub fn bind(dom: &D, selectors: &Selectors) -> Self {
        Self {
            gallery_items: dom.query_all(&selectors.gallery_item),
            cards: dom.query_all(&selectors.hover_card),
            social_icons: dom.query_all(&selectors.social_icon),
        }
    }

    pub fn gallery_items(&self) -> &[D::Element] {
        &self.gallery_items
    }

    /// Elements paired with the style they toggle.
    pub fn targets(&self) -> impl Iterator<Item = (&D::Element, HoverStyle)> {
        let lifts = self
            .gallery_items
            .iter()
            .chain(&self.cards)
            .map(|el| (el, HoverStyle::LIFT));
        let tilts = self.social_icons.iter().map(|el| (el, HoverStyle::TILT));
        lifts.chain(tilts)
    }

    pub fn style_for(&self, element: &D::Element) -> Option<HoverStyle> {
        self.targets()
            .find(|(candidate, _)| *candidate == element)
            .map(|(_, style)| style)
    }

    /// Entrance state for gallery items, staggered by position.
    pub fn prepare_gallery_items(&self, dom: &D, step_s: f64) {
        for (i, item) in self.gallery_items.iter().enumerate() {
            dom.set_style(item, "opacity", "1");
            dom.set_style(item, "transform", "translateY(0)");
            dom.set_style(
                item,
                "transition",
                "opacity 0.6s ease, transform 0.6s ease",
            );
            dom.set_style(item, "transition-delay", &stagger_delay(i, step_s));
        }
    }

    pub fn stagger_social_icons(&self, dom: &D, step_s: f64) {
        for (i, icon) in self.social_icons.iter().enumerate() {
            dom.set_style(icon, "animation-delay", &stagger_delay(i, step_s));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{FakeDom, FakeNode};
    use vitrine_model::ViewportSize;

    #[test]
    fn stagger_has_no_float_noise() {
        assert_eq!(stagger_delay(0, 0.1), "0s");
        assert_eq!(stagger_delay(3, 0.1), "0.3s");
        assert_eq!(stagger_delay(7, 0.1), "0.7s");
        assert_eq!(stagger_delay(12, 0.1), "1.2s");
    }

    #[test]
    fn hover_styles_by_target_kind() {
        let dom = FakeDom::new(ViewportSize::new(1280.0, 800.0));
        let item = dom.insert(FakeNode::new("div").matching(".gallery-item"));
        let card = dom.insert(FakeNode::new("div").matching(
            ".feature-card, .benefit-card, .team-section .card",
        ));
        let icon = dom.insert(FakeNode::new("a").matching(".socials a"));
        let award = dom.insert(FakeNode::new("div").matching(".award-card"));
        let targets = HoverTargets::<FakeDom>::bind(&dom, &Selectors::default());

        assert_eq!(targets.style_for(&item), Some(HoverStyle::LIFT));
        assert_eq!(targets.style_for(&card), Some(HoverStyle::LIFT));
        assert_eq!(targets.style_for(&icon), Some(HoverStyle::TILT));
        assert_eq!(targets.style_for(&award), None);

        HoverStyle::TILT.apply(&dom, &icon, Hover::Enter);
        assert_eq!(
            dom.style(icon, "transform").as_deref(),
            Some("scale(1.2) rotate(5deg)")
        );
        HoverStyle::LIFT.apply(&dom, &card, Hover::Leave);
        assert_eq!(dom.style(card, "z-index").as_deref(), Some("1"));
    }

    #[test]
    fn gallery_items_get_increasing_delays() {
        let dom = FakeDom::new(ViewportSize::new(1280.0, 800.0));
        let items: Vec<_> = (0..3)
            .map(|_| dom.insert(FakeNode::new("div").matching(".gallery-item")))
            .collect();
        let targets = HoverTargets::<FakeDom>::bind(&dom, &Selectors::default());
        targets.prepare_gallery_items(&dom, 0.1);

        let delays: Vec<_> = items
            .iter()
            .map(|i| dom.style(*i, "transition-delay").unwrap_or_default())
            .collect();
        assert_eq!(delays, vec!["0s", "0.1s", "0.2s"]);
    }
}
