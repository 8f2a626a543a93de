//! Page wiring: builds every behavior at document-ready and routes host
//! events to them.
//!
//! A missing element never fails the page. Each feature binds on its own
//! and a [`BindError`] only leaves that feature inert.

use vitrine_config::BehaviorConfig;
use vitrine_config::constants::{PAGE_FADE_DELAY_MS, STAGGER_STEP_S};

use crate::carousel::{AwardsCarousel, GalleryCarousel};
use crate::decor::{Hover, HoverTargets};
use crate::dispatcher::{FrameReport, ScrollDecision, ScrollDispatcher};
use crate::effects::{
    EffectRegistry, GalleryFade, HeaderVisibility, RevealOnScroll, WordColor,
};
use crate::error::BindError;
use crate::fade_in::{LazyImages, SectionFade};
use crate::host::{ElementSpec, Host};
use crate::menu::{Menu, OpenTicket};
use crate::navigation;
use crate::timing::{Debouncer, Ticket};

/// Which features found their elements.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct BindSummary {
    pub menu: bool,
    pub gallery: bool,
    pub awards: bool,
    pub words: bool,
    pub sections: usize,
    pub images: usize,
}

pub struct Page<H: Host> {
    config: BehaviorConfig,
    dispatcher: ScrollDispatcher,
    effects: EffectRegistry<H>,
    resize: Debouncer,
    menu: Option<Menu<H>>,
    gallery: Option<GalleryCarousel<H>>,
    awards: Option<AwardsCarousel<H>>,
    sections: SectionFade<H>,
    images: LazyImages<H>,
    hover: HoverTargets<H>,
    scroll_top: Option<H::Element>,
    anchors: Vec<H::Element>,
    summary: BindSummary,
}

fn inert<T>(result: Result<T, BindError>) -> Option<T> {
    match result {
        Ok(feature) => Some(feature),
        Err(err) => {
            log::debug!("{err}; feature disabled");
            None
        }
    }
}

impl<H: Host> Page<H> {
    /// Document-ready setup.
    pub fn ready(host: &H, config: BehaviorConfig) -> Self {
        let selectors = &config.selectors;
        let classes = &config.classes;

        if let Some(body) = host.body() {
            host.set_style(&body, "overflow", "visible");
            host.set_style(&body, "overflow-x", "hidden");
            host.set_style(&body, "overflow-y", "auto");
        }

        let scroll_top = host.append_to_body(
            &ElementSpec::new("button", classes.scroll_top.as_str())
                .with_id(classes.scroll_top_id.as_str())
                .with_text("↑")
                .with_attribute("aria-label", "Scroll to top"),
        );
        let backdrop = host
            .append_to_body(&ElementSpec::new("div", classes.backdrop.as_str()));

        let menu = backdrop.and_then(|backdrop| {
            inert(Menu::bind(host, selectors, classes, backdrop))
        });

        let mut gallery = inert(GalleryCarousel::bind(host, selectors));
        if let Some(gallery) = gallery.as_mut() {
            gallery.relayout(host);
        }

        let mut awards = inert(AwardsCarousel::bind(
            host,
            selectors,
            classes,
            config.awards.mobile_breakpoint_px,
        ));
        if let Some(awards) = awards.as_mut() {
            awards.render(host);
        }

        let words =
            inert(WordColor::bind(host, selectors, classes, &config.words));

        let hover = HoverTargets::bind(host, selectors);
        hover.prepare_gallery_items(host, STAGGER_STEP_S);

        let sections = SectionFade::bind(host, selectors, &config.observer);
        sections.prepare(host);
        hover.stagger_social_icons(host, STAGGER_STEP_S);

        let images = LazyImages::bind(host, selectors, &config.observer);

        let mut effects = EffectRegistry::new();
        effects.register(HeaderVisibility::<H>::new(
            host.query(&selectors.hamburger),
            scroll_top.clone(),
            &config.scroll,
            classes,
        ));
        effects.register(RevealOnScroll::<H>::new(
            host.query_all(&selectors.scroll_reveal),
            &config.reveal,
            classes,
        ));
        effects.register(GalleryFade::<H>::new(
            hover.gallery_items().to_vec(),
        ));
        let words_bound = words.is_some();
        if let Some(words) = words {
            effects.register(words);
        }
        effects.run_named(HeaderVisibility::<H>::NAME, host);

        let summary = BindSummary {
            menu: menu.is_some(),
            gallery: gallery.is_some(),
            awards: awards.is_some(),
            words: words_bound,
            sections: sections.sections().len(),
            images: images.images().len(),
        };
        log::info!("page ready: {summary:?}");

        Self {
            dispatcher: ScrollDispatcher::new(config.scroll.throttle_ms),
            resize: Debouncer::new(config.resize.debounce_ms),
            anchors: host.query_all(&selectors.anchor),
            config,
            effects,
            menu,
            gallery,
            awards,
            sections,
            images,
            hover,
            scroll_top,
            summary,
        }
    }

    pub fn config(&self) -> &BehaviorConfig {
        &self.config
    }

    pub fn summary(&self) -> BindSummary {
        self.summary
    }

    pub fn dispatcher(&self) -> &ScrollDispatcher {
        &self.dispatcher
    }

    pub fn effects(&self) -> &EffectRegistry<H> {
        &self.effects
    }

    pub fn menu(&self) -> Option<&Menu<H>> {
        self.menu.as_ref()
    }

    pub fn gallery(&self) -> Option<&GalleryCarousel<H>> {
        self.gallery.as_ref()
    }

    pub fn awards(&self) -> Option<&AwardsCarousel<H>> {
        self.awards.as_ref()
    }

    pub fn sections(&self) -> &SectionFade<H> {
        &self.sections
    }

    pub fn images(&self) -> &LazyImages<H> {
        &self.images
    }

    pub fn hover(&self) -> &HoverTargets<H> {
        &self.hover
    }

    pub fn scroll_top_button(&self) -> Option<&H::Element> {
        self.scroll_top.as_ref()
    }

    pub fn anchors(&self) -> &[H::Element] {
        &self.anchors
    }

    /// Window load: every effect runs once and the body starts hidden.
    /// The host calls [`Page::finish_page_fade`] after
    /// [`Page::page_fade_delay_ms`].
    pub fn on_load(&mut self, host: &H) {
        self.dispatcher.prime(host, &mut self.effects);
        if let Some(body) = host.body() {
            host.set_style(&body, "opacity", "0");
        }
    }

    pub fn finish_page_fade(&self, host: &H) {
        if let Some(body) = host.body() {
            host.set_style(&body, "transition", "opacity 0.5s ease");
            host.set_style(&body, "opacity", "1");
        }
    }

    pub fn on_scroll(&mut self) -> ScrollDecision {
        self.dispatcher.on_scroll()
    }

    pub fn on_frame(&mut self, host: &H) -> FrameReport {
        self.dispatcher.on_frame(host, host, &mut self.effects)
    }

    /// Awards follow the viewport at once; the gallery waits for the
    /// returned ticket to settle.
    pub fn on_resize(&mut self, host: &H) -> Ticket {
        if let Some(awards) = self.awards.as_mut() {
            awards.render(host);
        }
        self.resize.notify()
    }

    /// Returns whether the gallery was re-measured.
    pub fn on_resize_settled(&mut self, host: &H, ticket: Ticket) -> bool {
        if !self.resize.fire(ticket) {
            return false;
        }
        match self.gallery.as_mut() {
            Some(gallery) => {
                gallery.relayout(host);
                true
            }
            None => false,
        }
    }

    pub fn resize_delay_ms(&self) -> u32 {
        self.resize.delay_ms()
    }

    pub fn menu_panel_delay_ms(&self) -> u32 {
        self.config.menu.panel_delay_ms
    }

    pub fn page_fade_delay_ms(&self) -> u32 {
        PAGE_FADE_DELAY_MS
    }

    pub fn on_hamburger_click(&mut self, host: &H) -> Option<OpenTicket> {
        self.menu.as_mut()?.toggle(host)
    }

    /// Backdrop and menu-link clicks.
    pub fn close_menu(&mut self, host: &H) -> bool {
        self.menu.as_mut().is_some_and(|menu| menu.close(host))
    }

    pub fn on_menu_frame(&self, host: &H, ticket: OpenTicket) -> bool {
        self.menu
            .as_ref()
            .is_some_and(|menu| menu.activate_chrome(host, ticket))
    }

    pub fn on_menu_panel_delay(&self, host: &H, ticket: OpenTicket) -> bool {
        self.menu
            .as_ref()
            .is_some_and(|menu| menu.activate_panel(host, ticket))
    }

    pub fn on_gallery_prev(&mut self, host: &H) -> bool {
        self.gallery.as_mut().is_some_and(|g| g.prev(host))
    }

    pub fn on_gallery_next(&mut self, host: &H) -> bool {
        self.gallery.as_mut().is_some_and(|g| g.next(host))
    }

    pub fn on_awards_prev(&mut self, host: &H) {
        if let Some(awards) = self.awards.as_mut() {
            awards.prev(host);
        }
    }

    pub fn on_awards_next(&mut self, host: &H) {
        if let Some(awards) = self.awards.as_mut() {
            awards.next(host);
        }
    }

    pub fn on_scroll_top_click(&self, host: &H) {
        host.scroll_to_top();
    }

    /// Returns whether the click's default action must be prevented.
    pub fn on_anchor_click(&self, host: &H, href: &str) -> bool {
        navigation::follow_anchor(host, href)
    }

    /// Returns whether the element may be unobserved.
    /// Fallback when the host could not observe sections: show them all.
    pub fn reveal_all_sections(&mut self, host: &H) {
        self.sections.reveal_all(host);
    }

    pub fn on_section_intersect(
        &mut self,
        host: &H,
        element: &H::Element,
    ) -> bool {
        self.sections.on_intersect(host, element)
    }

    pub fn on_image_intersect(
        &mut self,
        host: &H,
        image: &H::Element,
        already_loaded: bool,
    ) -> bool {
        self.images.on_intersect(host, image, already_loaded)
    }

    pub fn on_image_loaded(&self, host: &H, image: &H::Element) {
        self.images.on_loaded(host, image);
    }

    pub fn on_hover(&self, host: &H, element: &H::Element, hover: Hover) {
        if let Some(style) = self.hover.style_for(element) {
            style.apply(host, element, hover);
        }
    }
}

impl<H: Host> std::fmt::Debug for Page<H> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Page")
            .field("summary", &self.summary)
            .field("effects", &self.effects)
            .field("dispatcher", &self.dispatcher)
            .finish_non_exhaustive()
    }
}
