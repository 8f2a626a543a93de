//! CSS selectors and class names the behaviors bind to.
//!
//! Kept in configuration so a page with different markup can reuse the
//! behaviors without touching code.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct Selectors {
    // Gallery carousel
    pub gallery_viewport: String,
    pub gallery_track: String,
    pub gallery_card: String,
    pub gallery_prev: String,
    pub gallery_next: String,
    /// Gallery tiles faded in by scroll and lifted on hover.
    pub gallery_item: String,
    /// Images inside gallery tiles, lazily faded in.
    pub gallery_image: String,

    // Awards carousel
    pub awards_track: String,
    pub award_card: String,
    pub awards_prev: String,
    pub awards_next: String,

    // Word colouring
    pub word_paragraph: String,
    pub word_section: String,

    // Menu
    pub hamburger: String,
    pub mobile_menu: String,
    pub main_content: String,
    pub menu_link: String,

    // Reveals and fades
    pub scroll_reveal: String,
    pub section: String,
    pub hero: String,

    // Decoration
    pub hover_card: String,
    pub social_icon: String,

    pub anchor: String,
}

impl Default for Selectors {
    fn default() -> Self {
        Self {
            gallery_viewport: ".gallery-viewport".into(),
            gallery_track: ".gallery-track".into(),
            gallery_card: ".gallery-card".into(),
            gallery_prev: ".gallery-arrow-left".into(),
            gallery_next: ".gallery-arrow-right".into(),
            gallery_item: ".gallery-item".into(),
            gallery_image: ".gallery-item img".into(),
            awards_track: ".awards-carousel".into(),
            award_card: ".award-card".into(),
            awards_prev: ".awards-arrow-left".into(),
            awards_next: ".awards-arrow-right".into(),
            word_paragraph: ".scroll-fade-words".into(),
            word_section: ".about-section".into(),
            hamburger: "#hamburger".into(),
            mobile_menu: "#mobileMenu".into(),
            main_content: "#mainContent".into(),
            menu_link: ".mobile-menu a".into(),
            scroll_reveal: ".scroll-reveal".into(),
            section: "section".into(),
            hero: ".hero".into(),
            // Award cards are deliberately absent: they get no hover lift.
            hover_card: ".feature-card, .benefit-card, .team-section .card"
                .into(),
            social_icon: ".socials a".into(),
            anchor: "a[href^=\"#\"]".into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct ClassNames {
    /// Added to `<body>` while the menu is open.
    pub menu_open: String,
    /// Shared "active" marker for backdrop, trigger, panel and award cards.
    pub active: String,
    /// Pushes the main content aside while the menu is open.
    pub shift: String,
    pub backdrop: String,
    pub hide_on_scroll: String,
    pub show_on_scroll: String,
    pub revealed: String,
    pub word_visible: String,
    pub scroll_top: String,
    /// Element id given to the generated scroll-to-top button.
    pub scroll_top_id: String,
}

impl Default for ClassNames {
    fn default() -> Self {
        Self {
            menu_open: "menu-open".into(),
            active: "active".into(),
            shift: "shift".into(),
            backdrop: "menu-backdrop".into(),
            hide_on_scroll: "hide-on-scroll".into(),
            show_on_scroll: "show-on-scroll".into(),
            revealed: "revealed".into(),
            word_visible: "visible".into(),
            scroll_top: "scroll-to-top".into(),
            scroll_top_id: "scrollTopBtn".into(),
        }
    }
}
