//! Arena-based in-memory document implementing [`Page`].
//!
//! Nodes are stored in a flat `Vec` arena and linked by index. Every
//! element carries a precomputed layout box (in unscrolled document
//! coordinates) and the computed style the navigator reads, so the whole
//! navigation stack can run headless: hit-testing, clipping by scroll
//! containers, page and container scrolling, and fixed/sticky subtrees are
//! all modelled here.

use spatial_types::geometry::{ScreenRect, Viewport};

use crate::page::{ComputedStyle, Display, NodeId, Page, ScrollTarget};
use crate::scroll::ScrollMetrics;

// ------------------------------------------------------------------
// Node types
// ------------------------------------------------------------------

/// An in-memory rendered document.
#[derive(Debug, Clone)]
pub struct Document {
    pub nodes: Vec<Node>,
    pub root: NodeId,
    html: NodeId,
    body: NodeId,
    viewport: Viewport,
    window_scroll_y: f32,
    focused: Option<NodeId>,
}

/// A single node in the tree.
#[derive(Debug, Clone)]
pub struct Node {
    pub kind: NodeKind,
    pub parent: Option<NodeId>,
    pub children: Vec<NodeId>,
}

/// The kind of node.
#[derive(Debug, Clone)]
pub enum NodeKind {
    Document,
    Element(ElementData),
    Text(String),
}

/// Data associated with an element node.
#[derive(Debug, Clone)]
pub struct ElementData {
    pub tag: TagName,
    pub attributes: Vec<Attribute>,
    /// Border box in unscrolled document coordinates.
    pub rect: ScreenRect,
    pub style: ComputedStyle,
    pub scroll_top: f32,
    pub tab_index: Option<i32>,
}

/// An element attribute.
#[derive(Debug, Clone, PartialEq)]
pub struct Attribute {
    pub name: String,
    pub value: String,
}

// ------------------------------------------------------------------
// TagName
// ------------------------------------------------------------------

/// Tag names the navigator dispatches on.
///
/// Anything else is stored as `Unknown(String)`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum TagName {
    Html,
    Body,
    // Containers
    Div,
    Section,
    Article,
    Main,
    Nav,
    Header,
    Footer,
    Aside,
    Ul,
    Ol,
    Li,
    // Text
    P,
    Span,
    Strong,
    B,
    Em,
    I,
    U,
    Small,
    Mark,
    Code,
    Sub,
    Sup,
    Br,
    Label,
    // Headings
    H1,
    H2,
    H3,
    H4,
    H5,
    H6,
    // Interactive
    A,
    Button,
    Input,
    Textarea,
    // Media
    Img,
    Svg,
    G,
    Path,
    Unknown(String),
}

impl TagName {
    /// Parse a tag name, case-insensitively.
    #[allow(clippy::should_implement_trait)]
    pub fn from_str(s: &str) -> Self {
        match s.to_ascii_lowercase().as_str() {
            "html" => Self::Html,
            "body" => Self::Body,
            "div" => Self::Div,
            "section" => Self::Section,
            "article" => Self::Article,
            "main" => Self::Main,
            "nav" => Self::Nav,
            "header" => Self::Header,
            "footer" => Self::Footer,
            "aside" => Self::Aside,
            "ul" => Self::Ul,
            "ol" => Self::Ol,
            "li" => Self::Li,
            "p" => Self::P,
            "span" => Self::Span,
            "strong" => Self::Strong,
            "b" => Self::B,
            "em" => Self::Em,
            "i" => Self::I,
            "u" => Self::U,
            "small" => Self::Small,
            "mark" => Self::Mark,
            "code" => Self::Code,
            "sub" => Self::Sub,
            "sup" => Self::Sup,
            "br" => Self::Br,
            "label" => Self::Label,
            "h1" => Self::H1,
            "h2" => Self::H2,
            "h3" => Self::H3,
            "h4" => Self::H4,
            "h5" => Self::H5,
            "h6" => Self::H6,
            "a" => Self::A,
            "button" => Self::Button,
            "input" => Self::Input,
            "textarea" => Self::Textarea,
            "img" => Self::Img,
            "svg" => Self::Svg,
            "g" => Self::G,
            "path" => Self::Path,
            other => Self::Unknown(other.to_string()),
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            Self::Html => "html",
            Self::Body => "body",
            Self::Div => "div",
            Self::Section => "section",
            Self::Article => "article",
            Self::Main => "main",
            Self::Nav => "nav",
            Self::Header => "header",
            Self::Footer => "footer",
            Self::Aside => "aside",
            Self::Ul => "ul",
            Self::Ol => "ol",
            Self::Li => "li",
            Self::P => "p",
            Self::Span => "span",
            Self::Strong => "strong",
            Self::B => "b",
            Self::Em => "em",
            Self::I => "i",
            Self::U => "u",
            Self::Small => "small",
            Self::Mark => "mark",
            Self::Code => "code",
            Self::Sub => "sub",
            Self::Sup => "sup",
            Self::Br => "br",
            Self::Label => "label",
            Self::H1 => "h1",
            Self::H2 => "h2",
            Self::H3 => "h3",
            Self::H4 => "h4",
            Self::H5 => "h5",
            Self::H6 => "h6",
            Self::A => "a",
            Self::Button => "button",
            Self::Input => "input",
            Self::Textarea => "textarea",
            Self::Img => "img",
            Self::Svg => "svg",
            Self::G => "g",
            Self::Path => "path",
            Self::Unknown(s) => s.as_str(),
        }
    }

    /// Heading level for `h1`..`h6`.
    pub fn heading_level(&self) -> Option<u8> {
        match self {
            Self::H1 => Some(1),
            Self::H2 => Some(2),
            Self::H3 => Some(3),
            Self::H4 => Some(4),
            Self::H5 => Some(5),
            Self::H6 => Some(6),
            _ => None,
        }
    }

    /// Phrasing elements that only wrap text (`<b>`, `<span>`, ...).
    pub fn is_inline_text_wrapper(&self) -> bool {
        matches!(
            self,
            Self::Span
                | Self::Strong
                | Self::B
                | Self::Em
                | Self::I
                | Self::U
                | Self::Small
                | Self::Mark
                | Self::Code
                | Self::Sub
                | Self::Sup
                | Self::Br
        )
    }
}

// ------------------------------------------------------------------
// ElementData
// ------------------------------------------------------------------

impl ElementData {
    /// Create an element with the given tag and layout box.
    pub fn new(tag: TagName, rect: ScreenRect) -> Self {
        Self {
            tag,
            attributes: Vec::new(),
            rect,
            style: ComputedStyle::default(),
            scroll_top: 0.0,
            tab_index: None,
        }
    }

    pub fn get_attribute(&self, name: &str) -> Option<&str> {
        self.attributes
            .iter()
            .find(|a| a.name == name)
            .map(|a| a.value.as_str())
    }

    /// Check if this element has a given CSS class.
    pub fn has_class(&self, class: &str) -> bool {
        self.get_attribute("class")
            .map(|v| v.split_ascii_whitespace().any(|c| c == class))
            .unwrap_or(false)
    }

    pub fn id(&self) -> Option<&str> {
        self.get_attribute("id")
    }
}

// ------------------------------------------------------------------
// Document
// ------------------------------------------------------------------

impl Document {
    /// Create a document with `<html>` and `<body>` covering the viewport.
    pub fn new(viewport: Viewport) -> Self {
        let mut doc = Self {
            nodes: vec![Node {
                kind: NodeKind::Document,
                parent: None,
                children: Vec::new(),
            }],
            root: 0,
            html: 0,
            body: 0,
            viewport,
            window_scroll_y: 0.0,
            focused: None,
        };
        doc.html = doc.add_element(doc.root, TagName::Html, viewport.rect());
        doc.body = doc.add_element(doc.html, TagName::Body, viewport.rect());
        doc
    }

    pub fn html(&self) -> NodeId {
        self.html
    }

    pub fn body(&self) -> NodeId {
        self.body
    }

    /// Append a new element under `parent` and return its id.
    pub fn add_element(&mut self, parent: NodeId, tag: TagName, rect: ScreenRect) -> NodeId {
        let id = self.add_node(NodeKind::Element(ElementData::new(tag, rect)));
        self.append_child(parent, id);
        id
    }

    /// Append a text node under `parent`.
    pub fn add_text(&mut self, parent: NodeId, text: &str) -> NodeId {
        let id = self.add_node(NodeKind::Text(text.to_string()));
        self.append_child(parent, id);
        id
    }

    fn add_node(&mut self, kind: NodeKind) -> NodeId {
        let id = self.nodes.len();
        self.nodes.push(Node {
            kind,
            parent: None,
            children: Vec::new(),
        });
        id
    }

    fn append_child(&mut self, parent_id: NodeId, child_id: NodeId) {
        self.nodes[parent_id].children.push(child_id);
        self.nodes[child_id].parent = Some(parent_id);
    }

    /// Detach a node from its parent. Its layout collapses to nothing.
    pub fn detach(&mut self, id: NodeId) {
        if let Some(parent) = self.nodes.get(id).and_then(|n| n.parent) {
            self.nodes[parent].children.retain(|&c| c != id);
            self.nodes[id].parent = None;
        }
    }

    /// Set (or replace) an attribute.
    pub fn set_attribute(&mut self, id: NodeId, name: &str, value: &str) {
        if let Some(data) = self.element_mut(id) {
            match data.attributes.iter_mut().find(|a| a.name == name) {
                Some(attr) => attr.value = value.to_string(),
                None => data.attributes.push(Attribute {
                    name: name.to_string(),
                    value: value.to_string(),
                }),
            }
        }
    }

    /// Replace the computed style of an element.
    pub fn set_style(&mut self, id: NodeId, style: ComputedStyle) {
        if let Some(data) = self.element_mut(id) {
            data.style = style;
        }
    }

    pub fn get(&self, id: NodeId) -> Option<&Node> {
        self.nodes.get(id)
    }

    pub fn element(&self, id: NodeId) -> Option<&ElementData> {
        match self.nodes.get(id).map(|n| &n.kind) {
            Some(NodeKind::Element(data)) => Some(data),
            _ => None,
        }
    }

    pub fn element_mut(&mut self, id: NodeId) -> Option<&mut ElementData> {
        match self.nodes.get_mut(id).map(|n| &mut n.kind) {
            Some(NodeKind::Element(data)) => Some(data),
            _ => None,
        }
    }

    /// Element that last received focus.
    pub fn focused(&self) -> Option<NodeId> {
        self.focused
    }

    pub fn tab_index(&self, id: NodeId) -> Option<i32> {
        self.element(id).and_then(|e| e.tab_index)
    }

    /// Top-level vertical scroll offset (`window.scrollY`).
    pub fn window_scroll_y(&self) -> f32 {
        self.window_scroll_y
    }

    /// True if the node hangs off the document root.
    fn is_attached(&self, id: NodeId) -> bool {
        let mut cur = Some(id);
        while let Some(n) = cur {
            if n == self.root {
                return true;
            }
            cur = self.nodes.get(n).and_then(|node| node.parent);
        }
        false
    }

    /// Attached elements in document (paint) order.
    fn elements_in_order(&self) -> Vec<NodeId> {
        let mut out = Vec::new();
        let mut stack = vec![self.root];
        while let Some(id) = stack.pop() {
            if self.element(id).is_some() {
                out.push(id);
            }
            stack.extend(self.nodes[id].children.iter().rev());
        }
        out
    }

    /// Strict element ancestors, nearest first.
    fn element_ancestors(&self, id: NodeId) -> impl Iterator<Item = &ElementData> + '_ {
        std::iter::successors(self.nodes.get(id).and_then(|n| n.parent), |&p| {
            self.nodes[p].parent
        })
        .filter_map(|p| self.element(p))
    }

    /// Rendered unless the element or an ancestor is `display: none`.
    fn is_rendered(&self, id: NodeId) -> bool {
        match self.element(id) {
            Some(e) if e.style.display != Display::None => self
                .element_ancestors(id)
                .all(|a| a.style.display != Display::None),
            _ => false,
        }
    }

    /// Fixed and sticky subtrees stay put when the page scrolls.
    fn is_pinned(&self, id: NodeId) -> bool {
        self.element(id).is_some_and(|e| e.style.position.is_pinned())
            || self.element_ancestors(id).any(|a| a.style.position.is_pinned())
    }

    /// Layout rect translated into viewport space.
    fn viewport_rect(&self, id: NodeId) -> ScreenRect {
        let Some(data) = self.element(id) else {
            return ScreenRect::default();
        };
        if !self.is_attached(id) {
            return ScreenRect::default();
        }
        let container_scroll: f32 = self.element_ancestors(id).map(|a| a.scroll_top).sum();
        let page_scroll = if self.is_pinned(id) {
            0.0
        } else {
            self.window_scroll_y
        };
        data.rect.offset(0.0, -(container_scroll + page_scroll))
    }

    /// Is the point inside every clipping ancestor of `id`?
    fn visible_through_clips(&self, id: NodeId, x: f32, y: f32) -> bool {
        std::iter::successors(self.nodes.get(id).and_then(|n| n.parent), |&p| {
            self.nodes[p].parent
        })
        .filter(|&p| self.element(p).is_some_and(|e| e.style.overflow_y.clips()))
        .all(|p| self.viewport_rect(p).contains(x, y))
    }

    /// Bottom-most layout edge among the descendants of `id`.
    fn content_bottom(&self, id: NodeId) -> f32 {
        let mut bottom = f32::MIN;
        let mut stack: Vec<NodeId> = self.nodes[id].children.clone();
        while let Some(n) = stack.pop() {
            if let Some(e) = self.element(n) {
                if e.style.display == Display::None {
                    continue;
                }
                bottom = bottom.max(e.rect.bottom);
            }
            stack.extend(self.nodes[n].children.iter().copied());
        }
        bottom
    }

    fn collect_text(&self, id: NodeId, out: &mut Vec<String>) {
        match &self.nodes[id].kind {
            NodeKind::Text(s) => out.extend(s.split_whitespace().map(str::to_string)),
            NodeKind::Element(e) if e.style.display == Display::None => {},
            _ => {
                for &child in &self.nodes[id].children {
                    self.collect_text(child, out);
                }
            },
        }
    }

    fn find_element(&self, pred: impl Fn(&ElementData) -> bool) -> Option<NodeId> {
        self.elements_in_order()
            .into_iter()
            .find(|&id| self.element(id).is_some_and(&pred))
    }
}

impl Page for Document {
    fn viewport(&self) -> Viewport {
        self.viewport
    }

    fn parent(&self, node: NodeId) -> Option<NodeId> {
        let parent = self.nodes.get(node)?.parent?;
        self.element(parent).map(|_| parent)
    }

    fn children(&self, node: NodeId) -> Vec<NodeId> {
        self.nodes
            .get(node)
            .map(|n| {
                n.children
                    .iter()
                    .copied()
                    .filter(|&c| self.element(c).is_some())
                    .collect()
            })
            .unwrap_or_default()
    }

    fn tag(&self, node: NodeId) -> Option<&TagName> {
        self.element(node).map(|e| &e.tag)
    }

    fn attribute(&self, node: NodeId, name: &str) -> Option<&str> {
        self.element(node).and_then(|e| e.get_attribute(name))
    }

    fn inner_text(&self, node: NodeId) -> String {
        if node >= self.nodes.len() {
            return String::new();
        }
        let mut words = Vec::new();
        self.collect_text(node, &mut words);
        words.join(" ")
    }

    fn has_direct_text(&self, node: NodeId) -> bool {
        self.nodes.get(node).is_some_and(|n| {
            n.children.iter().any(|&c| {
                matches!(&self.nodes[c].kind, NodeKind::Text(t) if !t.trim().is_empty())
            })
        })
    }

    fn bounding_rect(&self, node: NodeId) -> ScreenRect {
        if self.is_rendered(node) {
            self.viewport_rect(node)
        } else {
            ScreenRect::default()
        }
    }

    fn computed_style(&self, node: NodeId) -> ComputedStyle {
        self.element(node).map(|e| e.style).unwrap_or_default()
    }

    fn element_at_point(&self, x: f32, y: f32) -> Option<NodeId> {
        if !self.viewport.rect().contains(x, y) {
            return None;
        }
        // Later elements paint over earlier ones; pinned subtrees paint last.
        self.elements_in_order()
            .into_iter()
            .enumerate()
            .filter(|&(_, id)| {
                self.is_rendered(id)
                    && self.viewport_rect(id).contains(x, y)
                    && self.visible_through_clips(id, x, y)
            })
            .max_by_key(|&(order, id)| (self.is_pinned(id), order))
            .map(|(_, id)| id)
    }

    fn scroll_metrics(&self, node: NodeId) -> ScrollMetrics {
        let Some(data) = self.element(node) else {
            return ScrollMetrics::default();
        };
        let client_height = data.rect.height();
        let content = self.content_bottom(node) - data.rect.top;
        ScrollMetrics {
            scroll_top: data.scroll_top,
            scroll_height: content.max(client_height),
            client_height,
        }
    }

    fn set_scroll_top(&mut self, node: NodeId, top: f32) {
        let metrics = self.scroll_metrics(node);
        if let Some(data) = self.element_mut(node) {
            // Only clipping boxes have a scroll offset to move.
            if data.style.overflow_y.clips() {
                data.scroll_top = top.clamp(0.0, metrics.max_scroll());
            }
        }
    }

    fn page_scroll(&self) -> ScrollMetrics {
        let bottom = self
            .elements_in_order()
            .into_iter()
            .filter(|&id| self.is_rendered(id) && !self.is_pinned(id))
            .filter_map(|id| self.element(id).map(|e| e.rect.bottom))
            .fold(self.viewport.height, f32::max);
        ScrollMetrics {
            scroll_top: self.window_scroll_y,
            scroll_height: bottom,
            client_height: self.viewport.height,
        }
    }

    fn scroll_by(&mut self, target: ScrollTarget, dy: f32) {
        match target {
            ScrollTarget::Page => {
                let max = self.page_scroll().max_scroll();
                self.window_scroll_y = (self.window_scroll_y + dy).clamp(0.0, max);
            },
            ScrollTarget::Element(id) => {
                let top = self.element(id).map(|e| e.scroll_top).unwrap_or(0.0);
                self.set_scroll_top(id, top + dy);
            },
        }
    }

    fn focus(&mut self, node: NodeId) {
        if self.element(node).is_some() {
            self.focused = Some(node);
        }
    }

    fn set_tab_index(&mut self, node: NodeId, index: i32) {
        if let Some(data) = self.element_mut(node) {
            data.tab_index = Some(index);
        }
    }

    fn element_by_id(&self, id: &str) -> Option<NodeId> {
        self.find_element(|e| e.id() == Some(id))
    }

    fn element_by_class(&self, class: &str) -> Option<NodeId> {
        self.find_element(|e| e.has_class(class))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::page::{Overflow, Position};

    fn doc() -> Document {
        Document::new(Viewport::new(800.0, 600.0))
    }

    #[test]
    fn new_document_has_html_and_body() {
        let d = doc();
        assert_eq!(d.tag(d.html()), Some(&TagName::Html));
        assert_eq!(d.tag(d.body()), Some(&TagName::Body));
        assert_eq!(d.parent(d.body()), Some(d.html()));
        assert_eq!(d.parent(d.html()), None);
    }

    #[test]
    fn tag_name_roundtrip() {
        for name in ["div", "span", "h3", "a", "svg", "path", "button", "input"] {
            assert_eq!(TagName::from_str(name).as_str(), name);
        }
        assert_eq!(TagName::from_str("DIV"), TagName::Div);
        assert_eq!(
            TagName::from_str("custom-widget"),
            TagName::Unknown("custom-widget".into())
        );
    }

    #[test]
    fn heading_levels() {
        assert_eq!(TagName::H1.heading_level(), Some(1));
        assert_eq!(TagName::H6.heading_level(), Some(6));
        assert_eq!(TagName::P.heading_level(), None);
    }

    #[test]
    fn attributes_set_and_replace() {
        let mut d = doc();
        let body = d.body();
        let a = d.add_element(body, TagName::A, ScreenRect::from_xywh(0.0, 0.0, 10.0, 10.0));
        d.set_attribute(a, "class", "nav primary");
        d.set_attribute(a, "id", "home");
        d.set_attribute(a, "id", "start");
        assert_eq!(d.attribute(a, "id"), Some("start"));
        assert_eq!(d.element_by_id("start"), Some(a));
        assert_eq!(d.element_by_class("primary"), Some(a));
        assert_eq!(d.element_by_class("prim"), None);
    }

    #[test]
    fn inner_text_collapses_whitespace_and_skips_hidden() {
        let mut d = doc();
        let body = d.body();
        let p = d.add_element(body, TagName::P, ScreenRect::from_xywh(0.0, 0.0, 100.0, 20.0));
        d.add_text(p, "  Hello\n   ");
        let b = d.add_element(p, TagName::B, ScreenRect::from_xywh(0.0, 0.0, 10.0, 10.0));
        d.add_text(b, "world ");
        let hidden = d.add_element(p, TagName::Span, ScreenRect::default());
        d.add_text(hidden, "secret");
        d.set_style(
            hidden,
            ComputedStyle {
                display: Display::None,
                ..Default::default()
            },
        );
        assert_eq!(d.inner_text(p), "Hello world");
        assert!(d.has_direct_text(p));
        assert!(!d.has_direct_text(body));
    }

    #[test]
    fn hit_test_prefers_deepest_then_latest() {
        let mut d = doc();
        let body = d.body();
        let outer = d.add_element(body, TagName::Div, ScreenRect::from_xywh(0.0, 0.0, 200.0, 200.0));
        let inner = d.add_element(outer, TagName::P, ScreenRect::from_xywh(10.0, 10.0, 50.0, 20.0));
        assert_eq!(d.element_at_point(20.0, 15.0), Some(inner));
        assert_eq!(d.element_at_point(150.0, 150.0), Some(outer));
        assert_eq!(d.element_at_point(500.0, 500.0), Some(body));
        assert_eq!(d.element_at_point(-1.0, 10.0), None);
    }

    #[test]
    fn hit_test_skips_display_none() {
        let mut d = doc();
        let body = d.body();
        let p = d.add_element(body, TagName::P, ScreenRect::from_xywh(0.0, 0.0, 100.0, 20.0));
        d.set_style(
            p,
            ComputedStyle {
                display: Display::None,
                ..Default::default()
            },
        );
        assert_eq!(d.element_at_point(10.0, 10.0), Some(body));
        assert!(d.bounding_rect(p).is_empty());
    }

    #[test]
    fn container_scroll_moves_and_clips_children() {
        let mut d = doc();
        let body = d.body();
        let list = d.add_element(body, TagName::Div, ScreenRect::from_xywh(0.0, 0.0, 200.0, 100.0));
        d.set_style(
            list,
            ComputedStyle {
                overflow_y: Overflow::Auto,
                ..Default::default()
            },
        );
        let below = d.add_element(list, TagName::P, ScreenRect::from_xywh(0.0, 150.0, 200.0, 20.0));
        // Clipped by the container.
        assert_eq!(d.element_at_point(10.0, 155.0), Some(body));

        let m = d.scroll_metrics(list);
        assert_eq!(m.client_height, 100.0);
        assert_eq!(m.scroll_height, 170.0);

        d.scroll_by(ScrollTarget::Element(list), 100.0);
        assert_eq!(d.scroll_metrics(list).scroll_top, 70.0);
        assert_eq!(d.bounding_rect(below).top, 80.0);
        assert_eq!(d.element_at_point(10.0, 85.0), Some(below));
    }

    #[test]
    fn visible_overflow_ignores_scroll_writes() {
        let mut d = doc();
        let body = d.body();
        let div = d.add_element(body, TagName::Div, ScreenRect::from_xywh(0.0, 0.0, 100.0, 50.0));
        d.add_element(div, TagName::P, ScreenRect::from_xywh(0.0, 0.0, 100.0, 500.0));
        d.set_scroll_top(div, 10.0);
        assert_eq!(d.scroll_metrics(div).scroll_top, 0.0);
    }

    #[test]
    fn page_scroll_leaves_fixed_elements_in_place() {
        let mut d = doc();
        let body = d.body();
        let header = d.add_element(body, TagName::Header, ScreenRect::from_xywh(0.0, 0.0, 800.0, 50.0));
        d.set_style(
            header,
            ComputedStyle {
                position: Position::Fixed,
                ..Default::default()
            },
        );
        let tall = d.add_element(body, TagName::Div, ScreenRect::from_xywh(0.0, 0.0, 800.0, 2000.0));
        let p = d.add_element(tall, TagName::P, ScreenRect::from_xywh(0.0, 1000.0, 800.0, 20.0));

        let m = d.page_scroll();
        assert_eq!(m.scroll_height, 2000.0);
        d.scroll_by(ScrollTarget::Page, 900.0);
        assert_eq!(d.window_scroll_y(), 900.0);
        assert_eq!(d.bounding_rect(p).top, 100.0);
        assert_eq!(d.bounding_rect(header).top, 0.0);
        // Fixed header paints over the scrolled content.
        assert_eq!(d.element_at_point(10.0, 10.0), Some(header));

        d.scroll_by(ScrollTarget::Page, 10_000.0);
        assert_eq!(d.window_scroll_y(), 1400.0);
    }

    #[test]
    fn detached_node_degenerates() {
        let mut d = doc();
        let body = d.body();
        let p = d.add_element(body, TagName::P, ScreenRect::from_xywh(0.0, 0.0, 100.0, 20.0));
        d.detach(p);
        assert!(d.bounding_rect(p).is_empty());
        assert_eq!(d.parent(p), None);
        assert_eq!(d.element_at_point(10.0, 10.0), Some(body));
    }

    #[test]
    fn unknown_node_ids_are_harmless() {
        let d = doc();
        assert!(d.bounding_rect(999).is_empty());
        assert_eq!(d.inner_text(999), "");
        assert!(d.children(999).is_empty());
        assert_eq!(d.tag(999), None);
    }

    #[test]
    fn contains_is_inclusive() {
        let mut d = doc();
        let body = d.body();
        let div = d.add_element(body, TagName::Div, ScreenRect::from_xywh(0.0, 0.0, 100.0, 50.0));
        assert!(d.contains(body, div));
        assert!(d.contains(div, div));
        assert!(!d.contains(div, body));
    }
}
