//! `web-sys` implementation of the host traits.

use vitrine_core::{Clock, Dom, ElementSpec};
use vitrine_model::{Rect, ViewportSize};
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{
    Document, Element, HtmlButtonElement, HtmlElement, Performance,
    ScrollBehavior, ScrollIntoViewOptions, ScrollLogicalPosition,
    ScrollToOptions, Window,
};

/// The live document. Cloning shares the same window.
#[derive(Debug, Clone)]
pub struct WebDom {
    window: Window,
    document: Document,
    performance: Option<Performance>,
}

impl WebDom {
    pub fn new(window: Window) -> anyhow::Result<Self> {
        let document = window
            .document()
            .ok_or_else(|| anyhow::anyhow!("window has no document"))?;
        let performance = window.performance();
        Ok(Self {
            window,
            document,
            performance,
        })
    }

    pub fn window(&self) -> &Window {
        &self.window
    }

    pub fn document(&self) -> &Document {
        &self.document
    }
}

/// DOM mutations only fail on detached or exotic nodes; the effect is
/// skipped.
fn ignore(result: Result<(), JsValue>, what: &str) {
    if let Err(err) = result {
        log::debug!("{what} failed: {err:?}");
    }
}

impl Dom for WebDom {
    type Element = Element;

    fn query(&self, selector: &str) -> Option<Element> {
        self.document.query_selector(selector).ok().flatten()
    }

    fn query_all(&self, selector: &str) -> Vec<Element> {
        let Ok(list) = self.document.query_selector_all(selector) else {
            return Vec::new();
        };
        (0..list.length())
            .filter_map(|i| list.get(i))
            .filter_map(|node| node.dyn_into::<Element>().ok())
            .collect()
    }

    fn body(&self) -> Option<Element> {
        self.document.body().map(Element::from)
    }

    fn viewport(&self) -> ViewportSize {
        let dimension = |value: Result<JsValue, JsValue>| {
            value.ok().and_then(|v| v.as_f64()).unwrap_or(0.0)
        };
        ViewportSize::new(
            dimension(self.window.inner_width()),
            dimension(self.window.inner_height()),
        )
    }

    fn scroll_y(&self) -> f64 {
        self.window.scroll_y().unwrap_or(0.0)
    }

    fn rect(&self, element: &Element) -> Rect {
        let rect = element.get_bounding_client_rect();
        Rect::new(rect.left(), rect.top(), rect.width(), rect.height())
    }

    fn client_width(&self, element: &Element) -> f64 {
        f64::from(element.client_width())
    }

    fn computed_style(
        &self,
        element: &Element,
        property: &str,
    ) -> Option<String> {
        self.window
            .get_computed_style(element)
            .ok()
            .flatten()
            .and_then(|style| style.get_property_value(property).ok())
            .filter(|value| !value.trim().is_empty())
    }

    fn add_class(&self, element: &Element, class: &str) {
        ignore(element.class_list().add_1(class), "classList.add");
    }

    fn remove_class(&self, element: &Element, class: &str) {
        ignore(element.class_list().remove_1(class), "classList.remove");
    }

    fn has_class(&self, element: &Element, class: &str) -> bool {
        element.class_list().contains(class)
    }

    fn set_style(&self, element: &Element, property: &str, value: &str) {
        if let Some(html) = element.dyn_ref::<HtmlElement>() {
            let result = html.style().set_property(property, value);
            ignore(result, "style.setProperty");
        }
    }

    fn set_attribute(&self, element: &Element, name: &str, value: &str) {
        ignore(element.set_attribute(name, value), "setAttribute");
    }

    fn set_disabled(&self, element: &Element, disabled: bool) {
        if let Some(button) = element.dyn_ref::<HtmlButtonElement>() {
            button.set_disabled(disabled);
        } else if disabled {
            ignore(element.set_attribute("disabled", ""), "setAttribute");
        } else {
            ignore(element.remove_attribute("disabled"), "removeAttribute");
        }
    }

    fn text(&self, element: &Element) -> String {
        match element.dyn_ref::<HtmlElement>() {
            Some(html) => html.inner_text(),
            None => element.text_content().unwrap_or_default(),
        }
    }

    fn append_to_body(&self, spec: &ElementSpec) -> Option<Element> {
        let body = self.document.body()?;
        let element = self.document.create_element(spec.tag).ok()?;
        if let Some(id) = &spec.id {
            element.set_id(id);
        }
        element.set_class_name(&spec.class);
        if let Some(text) = &spec.text {
            element.set_text_content(Some(text));
        }
        for (name, value) in &spec.attributes {
            ignore(element.set_attribute(name, value), "setAttribute");
        }
        body.append_child(&element).ok()?;
        Some(element)
    }

    fn replace_with_word_spans(
        &self,
        element: &Element,
        words: &[String],
    ) -> Vec<Element> {
        element.set_text_content(None);
        let mut spans = Vec::with_capacity(words.len());
        for (i, word) in words.iter().enumerate() {
            if i > 0 {
                let space = self.document.create_text_node(" ");
                ignore(element.append_child(&space).map(drop), "appendChild");
            }
            let Ok(span) = self.document.create_element("span") else {
                continue;
            };
            span.set_text_content(Some(word));
            if element.append_child(&span).is_ok() {
                spans.push(span);
            }
        }
        spans
    }

    fn scroll_to_top(&self) {
        let options = ScrollToOptions::new();
        options.set_top(0.0);
        options.set_behavior(ScrollBehavior::Smooth);
        self.window.scroll_to_with_scroll_to_options(&options);
    }

    fn scroll_into_view(&self, element: &Element) {
        let options = ScrollIntoViewOptions::new();
        options.set_behavior(ScrollBehavior::Smooth);
        options.set_block(ScrollLogicalPosition::Start);
        element.scroll_into_view_with_scroll_into_view_options(&options);
    }
}

impl Clock for WebDom {
    fn now_ms(&self) -> f64 {
        match &self.performance {
            Some(performance) => performance.now(),
            None => js_sys::Date::now(),
        }
    }
}
