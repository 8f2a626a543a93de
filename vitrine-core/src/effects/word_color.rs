//! Word-by-word colour fade for the about paragraph.

use vitrine_config::{ClassNames, Selectors, WordColorConfig};
use vitrine_model::Rgb;

use super::{ScrollEffect, Tier};
use crate::error::{BindError, Result};
use crate::host::Dom;

const COMPONENT: &str = "word colour";

/// Splits paragraph text into words on any run of whitespace.
pub fn split_words(text: &str) -> Vec<String> {
    text.split_whitespace().map(str::to_owned).collect()
}

/// How far the section has travelled from the start line to the end line,
/// in `[0, 1]`.
///
/// Both lines are fractions of the viewport height measured from the top.
/// A section whose top sits at the start line gives `0`; at or above the
/// end line gives `1`.
pub fn scroll_progress(
    section_top: f64,
    viewport_height: f64,
    start_trigger: f64,
    end_trigger: f64,
) -> f64 {
    let start = viewport_height * start_trigger;
    let end = viewport_height * end_trigger;
    let span = start - end;
    if span.is_nan() || span <= 0.0 {
        return if section_top <= end { 1.0 } else { 0.0 };
    }
    let progress = 1.0 - (section_top - end) / span;
    if progress.is_nan() {
        0.0
    } else {
        progress.clamp(0.0, 1.0)
    }
}

#[derive(Debug)]
pub struct WordColor<D: Dom> {
    section: D::Element,
    words: Vec<D::Element>,
    start_trigger: f64,
    end_trigger: f64,
    start_color: Rgb,
    end_color: Rgb,
    visible_class: String,
}

impl<D: Dom> WordColor<D> {
    pub const NAME: &'static str = "word-color";

    /// Splits the paragraph into word spans and binds the section whose
    /// position drives the colour.
    ///
    /// The paragraph is split even when the section is missing.
    pub fn bind(
        dom: &D,
        selectors: &Selectors,
        classes: &ClassNames,
        config: &WordColorConfig,
    ) -> Result<Self> {
        let paragraph = dom.query(&selectors.word_paragraph).ok_or_else(|| {
            BindError::missing(COMPONENT, &selectors.word_paragraph)
        })?;
        let words = split_words(&dom.text(&paragraph));
        let spans = dom.replace_with_word_spans(&paragraph, &words);

        let section = dom.query(&selectors.word_section).ok_or_else(|| {
            BindError::missing(COMPONENT, &selectors.word_section)
        })?;
        if spans.is_empty() {
            return Err(BindError::no_items(
                COMPONENT,
                &selectors.word_paragraph,
            ));
        }

        Ok(Self {
            section,
            words: spans,
            start_trigger: config.start_trigger,
            end_trigger: config.end_trigger,
            start_color: config.start_color,
            end_color: config.end_color,
            visible_class: classes.word_visible.clone(),
        })
    }

    pub fn words(&self) -> &[D::Element] {
        &self.words
    }

    /// Colour for the current section position.
    pub fn current_color(&self, dom: &D) -> Rgb {
        let progress = scroll_progress(
            dom.rect(&self.section).top,
            dom.viewport().height,
            self.start_trigger,
            self.end_trigger,
        );
        self.start_color.lerp(self.end_color, progress)
    }
}

impl<D: Dom> ScrollEffect<D> for WordColor<D> {
    fn name(&self) -> &'static str {
        Self::NAME
    }

    fn tier(&self) -> Tier {
        Tier::Throttled
    }

    fn apply(&mut self, dom: &D) {
        let color = self.current_color(dom).to_css();
        let height = dom.viewport().height;
        for word in &self.words {
            if dom.rect(word).intersects_viewport(height) {
                dom.add_class(word, &self.visible_class);
                dom.set_style(word, "color", &color);
            }
        }
    }
}
