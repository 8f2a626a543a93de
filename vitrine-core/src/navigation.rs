//! In-page anchors and the scroll-to-top button.

use crate::host::Dom;

/// How a click on a `#` link should be handled.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AnchorAction<'a> {
    /// Leave the click to the browser.
    Default,
    /// Prevent default navigation and scroll to `selector` if it exists.
    SmoothScroll { selector: &'a str },
}

/// `href` values that start with `#`, are not `#` alone and are longer than
/// one character are handled in-page.
pub fn classify_anchor(href: &str) -> AnchorAction<'_> {
    if href.starts_with('#') && href != "#" && href.len() > 1 {
        AnchorAction::SmoothScroll { selector: href }
    } else {
        AnchorAction::Default
    }
}

/// Handles an anchor click. Returns whether default navigation must be
/// prevented.
pub fn follow_anchor<D: Dom>(dom: &D, href: &str) -> bool {
    match classify_anchor(href) {
        AnchorAction::Default => false,
        AnchorAction::SmoothScroll { selector } => {
            match dom.query(selector) {
                Some(target) => dom.scroll_into_view(&target),
                None => log::debug!("anchor target `{selector}` not found"),
            }
            true
        }
    }
}
