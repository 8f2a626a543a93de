//! In-memory document.
//!
//! Selectors are not parsed. A node answers a selector when it equals the
//! node's tag, `#id`, `.class` for one of its current classes, or one of the
//! selectors registered with [`FakeNode::matching`].

use std::cell::RefCell;
use std::collections::{BTreeMap, BTreeSet};

use vitrine_model::{Rect, ViewportSize};

use super::ManualClock;
use crate::host::{Clock, Dom, ElementSpec};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(usize);

/// Smooth-scroll requests, in call order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScrollCall {
    Top,
    IntoView(NodeId),
}

/// Builder and storage for one element.
#[derive(Debug, Clone, Default)]
pub struct FakeNode {
    tag: String,
    id: Option<String>,
    classes: BTreeSet<String>,
    selectors: Vec<String>,
    styles: BTreeMap<String, String>,
    computed: BTreeMap<String, String>,
    attributes: BTreeMap<String, String>,
    rect: Rect,
    client_width: f64,
    text: String,
    disabled: bool,
    children: Vec<NodeId>,
}

impl FakeNode {
    pub fn new(tag: &str) -> Self {
        Self {
            tag: tag.to_string(),
            ..Self::default()
        }
    }

    pub fn matching(mut self, selector: &str) -> Self {
        self.selectors.push(selector.to_string());
        self
    }

    pub fn with_id(mut self, id: &str) -> Self {
        self.id = Some(id.to_string());
        self
    }

    pub fn with_class(mut self, class: &str) -> Self {
        self.classes.insert(class.to_string());
        self
    }

    pub fn rect(mut self, rect: Rect) -> Self {
        self.rect = rect;
        self
    }

    pub fn client_width(mut self, width: f64) -> Self {
        self.client_width = width;
        self
    }

    pub fn computed(mut self, property: &str, value: &str) -> Self {
        self.computed.insert(property.to_string(), value.to_string());
        self
    }

    pub fn text(mut self, text: &str) -> Self {
        self.text = text.to_string();
        self
    }

    fn answers(&self, selector: &str) -> bool {
        selector == self.tag
            || self.selectors.iter().any(|s| s == selector)
            || selector
                .strip_prefix('#')
                .is_some_and(|id| self.id.as_deref() == Some(id))
            || selector
                .strip_prefix('.')
                .is_some_and(|class| self.classes.contains(class))
    }
}

#[derive(Debug)]
struct Tree {
    nodes: Vec<FakeNode>,
    viewport: ViewportSize,
    scroll_y: f64,
    scroll_calls: Vec<ScrollCall>,
    writes: u64,
}

const BODY: NodeId = NodeId(0);

/// A [`Dom`] and [`Clock`] backed by plain collections.
#[derive(Debug)]
pub struct FakeDom {
    tree: RefCell<Tree>,
    clock: ManualClock,
}

impl FakeDom {
    pub fn new(viewport: ViewportSize) -> Self {
        Self {
            tree: RefCell::new(Tree {
                nodes: vec![FakeNode::new("body")],
                viewport,
                scroll_y: 0.0,
                scroll_calls: Vec::new(),
                writes: 0,
            }),
            clock: ManualClock::default(),
        }
    }

    /// Appends `node` to the body.
    pub fn insert(&self, node: FakeNode) -> NodeId {
        let mut tree = self.tree.borrow_mut();
        let id = NodeId(tree.nodes.len());
        tree.nodes.push(node);
        tree.nodes[BODY.0].children.push(id);
        id
    }

    pub fn body_node(&self) -> NodeId {
        BODY
    }

    pub fn clock(&self) -> &ManualClock {
        &self.clock
    }

    pub fn advance(&self, ms: f64) {
        self.clock.advance(ms);
    }

    pub fn set_viewport(&self, viewport: ViewportSize) {
        self.tree.borrow_mut().viewport = viewport;
    }

    pub fn set_scroll_y(&self, scroll_y: f64) {
        self.tree.borrow_mut().scroll_y = scroll_y;
    }

    pub fn set_rect(&self, node: NodeId, rect: Rect) {
        self.tree.borrow_mut().nodes[node.0].rect = rect;
    }

    pub fn set_client_width(&self, node: NodeId, width: f64) {
        self.tree.borrow_mut().nodes[node.0].client_width = width;
    }

    pub fn style(&self, node: NodeId, property: &str) -> Option<String> {
        self.tree.borrow().nodes[node.0].styles.get(property).cloned()
    }

    pub fn attr(&self, node: NodeId, name: &str) -> Option<String> {
        self.tree.borrow().nodes[node.0].attributes.get(name).cloned()
    }

    pub fn is_disabled(&self, node: NodeId) -> bool {
        self.tree.borrow().nodes[node.0].disabled
    }

    pub fn classes(&self, node: NodeId) -> Vec<String> {
        self.tree.borrow().nodes[node.0]
            .classes
            .iter()
            .cloned()
            .collect()
    }

    pub fn children(&self, node: NodeId) -> Vec<NodeId> {
        self.tree.borrow().nodes[node.0].children.clone()
    }

    pub fn scroll_calls(&self) -> Vec<ScrollCall> {
        self.tree.borrow().scroll_calls.clone()
    }

    /// Mutating calls made through [`Dom`] so far.
    pub fn write_count(&self) -> u64 {
        self.tree.borrow().writes
    }

    fn write(&self, node: &NodeId, change: impl FnOnce(&mut FakeNode)) {
        let mut tree = self.tree.borrow_mut();
        tree.writes += 1;
        change(&mut tree.nodes[node.0]);
    }

    fn push_node(tree: &mut Tree, parent: NodeId, node: FakeNode) -> NodeId {
        let id = NodeId(tree.nodes.len());
        tree.nodes.push(node);
        tree.nodes[parent.0].children.push(id);
        id
    }
}

impl Dom for FakeDom {
    type Element = NodeId;

    fn query(&self, selector: &str) -> Option<NodeId> {
        let tree = self.tree.borrow();
        tree.nodes
            .iter()
            .position(|node| node.answers(selector))
            .map(NodeId)
    }

    fn query_all(&self, selector: &str) -> Vec<NodeId> {
        let tree = self.tree.borrow();
        tree.nodes
            .iter()
            .enumerate()
            .filter(|(_, node)| node.answers(selector))
            .map(|(i, _)| NodeId(i))
            .collect()
    }

    fn body(&self) -> Option<NodeId> {
        Some(BODY)
    }

    fn viewport(&self) -> ViewportSize {
        self.tree.borrow().viewport
    }

    fn scroll_y(&self) -> f64 {
        self.tree.borrow().scroll_y
    }

    fn rect(&self, element: &NodeId) -> Rect {
        self.tree.borrow().nodes[element.0].rect
    }

    fn client_width(&self, element: &NodeId) -> f64 {
        self.tree.borrow().nodes[element.0].client_width
    }

    fn computed_style(
        &self,
        element: &NodeId,
        property: &str,
    ) -> Option<String> {
        self.tree.borrow().nodes[element.0]
            .computed
            .get(property)
            .filter(|value| !value.is_empty())
            .cloned()
    }

    fn add_class(&self, element: &NodeId, class: &str) {
        self.write(element, |node| {
            node.classes.insert(class.to_string());
        });
    }

    fn remove_class(&self, element: &NodeId, class: &str) {
        self.write(element, |node| {
            node.classes.remove(class);
        });
    }

    fn has_class(&self, element: &NodeId, class: &str) -> bool {
        self.tree.borrow().nodes[element.0].classes.contains(class)
    }

    fn set_style(&self, element: &NodeId, property: &str, value: &str) {
        self.write(element, |node| {
            node.styles.insert(property.to_string(), value.to_string());
        });
    }

    fn set_attribute(&self, element: &NodeId, name: &str, value: &str) {
        self.write(element, |node| {
            node.attributes.insert(name.to_string(), value.to_string());
        });
    }

    fn set_disabled(&self, element: &NodeId, disabled: bool) {
        self.write(element, |node| node.disabled = disabled);
    }

    fn text(&self, element: &NodeId) -> String {
        self.tree.borrow().nodes[element.0].text.clone()
    }

    fn append_to_body(&self, spec: &ElementSpec) -> Option<NodeId> {
        let mut node = FakeNode::new(spec.tag);
        node.id = spec.id.clone();
        node.classes =
            spec.class.split_whitespace().map(str::to_owned).collect();
        node.text = spec.text.clone().unwrap_or_default();
        node.attributes = spec.attributes.iter().cloned().collect();

        let mut tree = self.tree.borrow_mut();
        tree.writes += 1;
        Some(Self::push_node(&mut tree, BODY, node))
    }

    fn replace_with_word_spans(
        &self,
        element: &NodeId,
        words: &[String],
    ) -> Vec<NodeId> {
        let mut tree = self.tree.borrow_mut();
        tree.writes += 1;
        let paragraph = &mut tree.nodes[element.0];
        paragraph.children.clear();
        paragraph.text = words.join(" ");
        words
            .iter()
            .map(|word| {
                let span = FakeNode::new("span").text(word);
                Self::push_node(&mut tree, *element, span)
            })
            .collect()
    }

    fn scroll_to_top(&self) {
        self.tree.borrow_mut().scroll_calls.push(ScrollCall::Top);
    }

    fn scroll_into_view(&self, element: &NodeId) {
        self.tree
            .borrow_mut()
            .scroll_calls
            .push(ScrollCall::IntoView(*element));
    }
}

impl Clock for FakeDom {
    fn now_ms(&self) -> f64 {
        self.clock.now_ms()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn selectors_resolve_by_tag_id_class_and_registration() {
        let dom = FakeDom::new(ViewportSize::new(800.0, 600.0));
        let nav = dom.insert(FakeNode::new("nav").with_id("mobileMenu"));
        let card = dom.insert(
            FakeNode::new("div").with_class("award-card").matching(".socials a"),
        );

        assert_eq!(dom.query("#mobileMenu"), Some(nav));
        assert_eq!(dom.query(".award-card"), Some(card));
        assert_eq!(dom.query(".socials a"), Some(card));
        assert_eq!(dom.query_all("div"), vec![card]);
        assert_eq!(dom.query("#missing"), None);
    }

    #[test]
    fn classes_added_later_are_queryable() {
        let dom = FakeDom::new(ViewportSize::new(800.0, 600.0));
        let node = dom.insert(FakeNode::new("div"));
        assert_eq!(dom.query(".active"), None);
        dom.add_class(&node, "active");
        assert_eq!(dom.query(".active"), Some(node));
        assert_eq!(dom.write_count(), 1);
    }

    #[test]
    fn appended_elements_land_in_the_body() {
        let dom = FakeDom::new(ViewportSize::new(800.0, 600.0));
        let button = dom
            .append_to_body(
                &ElementSpec::new("button", "scroll-to-top").with_id("scrollTopBtn"),
            )
            .unwrap();
        assert_eq!(dom.children(dom.body_node()), vec![button]);
        assert_eq!(dom.query("#scrollTopBtn"), Some(button));
        assert_eq!(dom.classes(button), vec!["scroll-to-top"]);
    }
}
