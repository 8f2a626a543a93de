//! Intersection-driven fade-ins.
//!
//! The host owns the observers. It observes the elements listed here with
//! the matching [`ObserverOptions`] and forwards every intersecting entry;
//! a `true` return means the element is done and may be unobserved.

use vitrine_config::{ObserverConfig, Selectors};

use crate::effects::RevealRegistry;
use crate::host::Dom;

/// Options for one intersection observer.
#[derive(Debug, Clone, PartialEq)]
pub struct ObserverOptions {
    pub threshold: f64,
    pub root_margin: String,
}

/// Sections start hidden and slide up the first time they intersect.
#[derive(Debug)]
pub struct SectionFade<D: Dom> {
    sections: Vec<D::Element>,
    hero: Option<D::Element>,
    revealed: RevealRegistry,
    options: ObserverOptions,
}

impl<D: Dom> SectionFade<D> {
    pub fn bind(
        dom: &D,
        selectors: &Selectors,
        observer: &ObserverConfig,
    ) -> Self {
        let sections = dom.query_all(&selectors.section);
        Self {
            revealed: RevealRegistry::with_len(sections.len()),
            sections,
            hero: dom.query(&selectors.hero),
            options: ObserverOptions {
                threshold: observer.threshold,
                root_margin: observer.section_root_margin.clone(),
            },
        }
    }

    pub fn sections(&self) -> &[D::Element] {
        &self.sections
    }

    pub fn options(&self) -> &ObserverOptions {
        &self.options
    }

    pub fn revealed(&self) -> usize {
        self.revealed.len()
    }

    /// Applies the hidden start state. The hero is left visible.
    pub fn prepare(&self, dom: &D) {
        for section in &self.sections {
            dom.set_style(section, "opacity", "0");
            dom.set_style(section, "transform", "translateY(30px)");
            dom.set_style(
                section,
                "transition",
                "opacity 0.8s ease, transform 0.8s ease",
            );
        }
        if let Some(hero) = &self.hero {
            show(dom, hero);
        }
    }

    pub fn on_intersect(&mut self, dom: &D, element: &D::Element) -> bool {
        let Some(index) = self.sections.iter().position(|s| s == element) else {
            return false;
        };
        if self.revealed.insert(index) {
            show(dom, element);
        }
        true
    }

    /// Shows every section at once, for hosts that cannot observe them.
    pub fn reveal_all(&mut self, dom: &D) {
        for (index, section) in self.sections.iter().enumerate() {
            if self.revealed.insert(index) {
                show(dom, section);
            }
        }
    }
}

fn show<D: Dom>(dom: &D, element: &D::Element) {
    dom.set_style(element, "opacity", "1");
    dom.set_style(element, "transform", "translateY(0)");
}

/// Gallery images fade in once their pixels arrive.
#[derive(Debug)]
pub struct LazyImages<D: Dom> {
    images: Vec<D::Element>,
    armed: RevealRegistry,
    options: ObserverOptions,
}

impl<D: Dom> LazyImages<D> {
    pub fn bind(
        dom: &D,
        selectors: &Selectors,
        observer: &ObserverConfig,
    ) -> Self {
        let images = dom.query_all(&selectors.gallery_image);
        Self {
            armed: RevealRegistry::with_len(images.len()),
            images,
            options: ObserverOptions {
                threshold: observer.threshold,
                root_margin: observer.image_root_margin.clone(),
            },
        }
    }

    pub fn images(&self) -> &[D::Element] {
        &self.images
    }

    pub fn options(&self) -> &ObserverOptions {
        &self.options
    }

    /// Hides the image behind a transition on first intersection. An image
    /// that has already finished loading is shown straight away, since its
    /// load event will not fire again.
    pub fn on_intersect(
        &mut self,
        dom: &D,
        image: &D::Element,
        already_loaded: bool,
    ) -> bool {
        let Some(index) = self.images.iter().position(|i| i == image) else {
            return false;
        };
        if self.armed.insert(index) {
            dom.set_style(image, "opacity", "0");
            dom.set_style(image, "transition", "opacity 0.5s ease");
            if already_loaded {
                dom.set_style(image, "opacity", "1");
            }
        }
        true
    }

    /// Load completion. Ignored for images that never intersected.
    pub fn on_loaded(&self, dom: &D, image: &D::Element) {
        let armed = self
            .images
            .iter()
            .position(|i| i == image)
            .is_some_and(|index| self.armed.contains(index));
        if armed {
            dom.set_style(image, "opacity", "1");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{FakeDom, FakeNode};
    use vitrine_model::ViewportSize;

    fn dom() -> FakeDom {
        FakeDom::new(ViewportSize::new(1280.0, 800.0))
    }

    #[test]
    fn prepare_hides_sections_but_not_hero() {
        let dom = dom();
        let hero = dom.insert(
            FakeNode::new("section").matching("section").with_class("hero"),
        );
        let about = dom.insert(FakeNode::new("section").matching("section"));
        let fade = SectionFade::<FakeDom>::bind(
            &dom,
            &Selectors::default(),
            &ObserverConfig::default(),
        );
        fade.prepare(&dom);

        assert_eq!(dom.style(hero, "opacity").as_deref(), Some("1"));
        assert_eq!(dom.style(about, "opacity").as_deref(), Some("0"));
        assert_eq!(
            dom.style(about, "transform").as_deref(),
            Some("translateY(30px)")
        );
        assert_eq!(fade.options().root_margin, "0px 0px -100px 0px");
    }

    #[test]
    fn section_reveal_is_one_shot() {
        let dom = dom();
        let about = dom.insert(FakeNode::new("section").matching("section"));
        let mut fade = SectionFade::<FakeDom>::bind(
            &dom,
            &Selectors::default(),
            &ObserverConfig::default(),
        );
        fade.prepare(&dom);

        assert!(fade.on_intersect(&dom, &about));
        let writes = dom.write_count();
        assert!(fade.on_intersect(&dom, &about));
        assert_eq!(dom.write_count(), writes);
        assert_eq!(dom.style(about, "opacity").as_deref(), Some("1"));
        assert_eq!(fade.revealed(), 1);
    }

    #[test]
    fn reveal_all_skips_sections_already_shown() {
        let dom = dom();
        let about = dom.insert(FakeNode::new("section").matching("section"));
        let team = dom.insert(FakeNode::new("section").matching("section"));
        let mut fade = SectionFade::<FakeDom>::bind(
            &dom,
            &Selectors::default(),
            &ObserverConfig::default(),
        );
        fade.prepare(&dom);
        fade.on_intersect(&dom, &about);

        let writes = dom.write_count();
        fade.reveal_all(&dom);
        assert_eq!(dom.write_count(), writes + 2);
        assert_eq!(dom.style(team, "opacity").as_deref(), Some("1"));
        assert_eq!(fade.revealed(), 2);
    }

    #[test]
    fn unknown_elements_are_not_unobserved() {
        let dom = dom();
        let stray = dom.insert(FakeNode::new("div"));
        let mut fade = SectionFade::<FakeDom>::bind(
            &dom,
            &Selectors::default(),
            &ObserverConfig::default(),
        );
        assert!(!fade.on_intersect(&dom, &stray));
    }

    #[test]
    fn image_fades_in_after_load() {
        let dom = dom();
        let image =
            dom.insert(FakeNode::new("img").matching(".gallery-item img"));
        let mut images = LazyImages::<FakeDom>::bind(
            &dom,
            &Selectors::default(),
            &ObserverConfig::default(),
        );
        assert_eq!(images.options().root_margin, "50px");

        images.on_loaded(&dom, &image);
        assert_eq!(dom.style(image, "opacity"), None);

        assert!(images.on_intersect(&dom, &image, false));
        assert_eq!(dom.style(image, "opacity").as_deref(), Some("0"));
        images.on_loaded(&dom, &image);
        assert_eq!(dom.style(image, "opacity").as_deref(), Some("1"));
    }

    #[test]
    fn cached_image_is_not_left_hidden() {
        let dom = dom();
        let image =
            dom.insert(FakeNode::new("img").matching(".gallery-item img"));
        let mut images = LazyImages::<FakeDom>::bind(
            &dom,
            &Selectors::default(),
            &ObserverConfig::default(),
        );
        images.on_intersect(&dom, &image, true);
        assert_eq!(dom.style(image, "opacity").as_deref(), Some("1"));
        assert_eq!(
            dom.style(image, "transition").as_deref(),
            Some("opacity 0.5s ease")
        );
    }
}
