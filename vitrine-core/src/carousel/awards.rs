//! Awards carousel: wraps around, shows one card on narrow viewports and
//! every card otherwise.

use vitrine_config::{ClassNames, Selectors};

use super::{CarouselState, WrapMode};
use crate::error::{BindError, Result};
use crate::host::Dom;

const COMPONENT: &str = "awards carousel";

/// Presentation chosen from the viewport width at render time.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AwardsMode {
    /// Only the current card carries the active class.
    SingleCard,
    /// Every card is shown and none is active.
    ShowAll,
}

impl AwardsMode {
    /// `viewport_width <= breakpoint` selects [`AwardsMode::SingleCard`].
    pub fn for_width(viewport_width: f64, breakpoint: f64) -> Self {
        if viewport_width <= breakpoint {
            Self::SingleCard
        } else {
            Self::ShowAll
        }
    }
}

#[derive(Debug)]
pub struct AwardsCarousel<D: Dom> {
    track: D::Element,
    cards: Vec<D::Element>,
    prev_button: D::Element,
    next_button: D::Element,
    state: CarouselState,
    breakpoint: f64,
    active_class: String,
    mode: Option<AwardsMode>,
}

impl<D: Dom> AwardsCarousel<D> {
    pub fn bind(
        dom: &D,
        selectors: &Selectors,
        classes: &ClassNames,
        breakpoint: f64,
    ) -> Result<Self> {
        let find = |selector: &str| {
            dom.query(selector)
                .ok_or_else(|| BindError::missing(COMPONENT, selector))
        };
        let track = find(&selectors.awards_track)?;
        let prev_button = find(&selectors.awards_prev)?;
        let next_button = find(&selectors.awards_next)?;
        let cards = dom.query_all(&selectors.award_card);
        if cards.is_empty() {
            return Err(BindError::no_items(COMPONENT, &selectors.award_card));
        }

        let state = CarouselState::new(cards.len(), WrapMode::Infinite);
        Ok(Self {
            track,
            cards,
            prev_button,
            next_button,
            state,
            breakpoint,
            active_class: classes.active.clone(),
            mode: None,
        })
    }

    pub fn state(&self) -> &CarouselState {
        &self.state
    }

    /// Mode used by the most recent render.
    pub fn mode(&self) -> Option<AwardsMode> {
        self.mode
    }

    pub fn prev_button(&self) -> &D::Element {
        &self.prev_button
    }

    pub fn next_button(&self) -> &D::Element {
        &self.next_button
    }

    pub fn prev(&mut self, dom: &D) {
        self.state.prev();
        self.render(dom);
    }

    pub fn next(&mut self, dom: &D) {
        self.state.next();
        self.render(dom);
    }

    /// Re-evaluates the mode against the current viewport and applies it.
    pub fn render(&mut self, dom: &D) {
        let mode = AwardsMode::for_width(dom.viewport().width, self.breakpoint);
        if self.mode != Some(mode) {
            log::debug!("{COMPONENT}: switching to {mode:?}");
            self.mode = Some(mode);
        }

        dom.set_style(&self.track, "transform", "none");
        let single = mode == AwardsMode::SingleCard;
        for (i, card) in self.cards.iter().enumerate() {
            let active = single && i == self.state.index();
            if active {
                dom.add_class(card, &self.active_class);
            } else {
                dom.remove_class(card, &self.active_class);
            }
        }
    }
}
