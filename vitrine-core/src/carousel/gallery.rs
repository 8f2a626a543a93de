//! Gallery carousel: clamped paging with arrow buttons.

use vitrine_config::Selectors;

use super::{CarouselState, WrapMode, measure_track};
use crate::error::{BindError, Result};
use crate::host::{Dom, px};

const COMPONENT: &str = "gallery carousel";

#[derive(Debug)]
pub struct GalleryCarousel<D: Dom> {
    viewport: D::Element,
    track: D::Element,
    cards: Vec<D::Element>,
    prev_button: D::Element,
    next_button: D::Element,
    state: CarouselState,
}

impl<D: Dom> GalleryCarousel<D> {
    /// Finds the gallery elements. The carousel is not rendered until the
    /// first [`GalleryCarousel::relayout`].
    pub fn bind(dom: &D, selectors: &Selectors) -> Result<Self> {
        let find = |selector: &str| {
            dom.query(selector)
                .ok_or_else(|| BindError::missing(COMPONENT, selector))
        };

        let viewport = find(&selectors.gallery_viewport)?;
        let track = find(&selectors.gallery_track)?;
        let cards = dom.query_all(&selectors.gallery_card);
        if cards.is_empty() {
            return Err(BindError::no_items(COMPONENT, &selectors.gallery_card));
        }
        let prev_button = find(&selectors.gallery_prev)?;
        let next_button = find(&selectors.gallery_next)?;

        let state = CarouselState::new(cards.len(), WrapMode::Finite);
        Ok(Self {
            viewport,
            track,
            cards,
            prev_button,
            next_button,
            state,
        })
    }

    pub fn state(&self) -> &CarouselState {
        &self.state
    }

    pub fn prev_button(&self) -> &D::Element {
        &self.prev_button
    }

    pub fn next_button(&self) -> &D::Element {
        &self.next_button
    }

    /// Re-measures the track, clamps the index and renders.
    pub fn relayout(&mut self, dom: &D) {
        let metrics =
            measure_track(dom, &self.viewport, &self.track, &self.cards);
        self.state.recompute(metrics);
        self.render(dom);
    }

    pub fn prev(&mut self, dom: &D) -> bool {
        let moved = self.state.prev();
        if moved {
            self.render(dom);
        }
        moved
    }

    pub fn next(&mut self, dom: &D) -> bool {
        let moved = self.state.next();
        if moved {
            self.render(dom);
        }
        moved
    }

    fn render(&self, dom: &D) {
        dom.set_style(
            &self.track,
            "transform",
            &format!("translateX({})", px(self.state.offset_px())),
        );
        dom.set_disabled(&self.prev_button, !self.state.can_prev());
        dom.set_disabled(&self.next_button, !self.state.can_next());
    }
}
