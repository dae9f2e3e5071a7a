//! The page the navigator runs against.
//!
//! Everything the engine needs from a rendered document goes through the
//! [`Page`] trait: tree structure, attributes, visible text, layout boxes,
//! computed style, hit-testing, scroll metrics, and focus. A browser host
//! implements it over the live DOM; [`crate::dom::Document`] implements it
//! over an in-memory arena for tests and demos.

use spatial_types::geometry::{ScreenRect, Viewport};

use crate::dom::TagName;
use crate::scroll::ScrollMetrics;

/// Handle to an element of a [`Page`].
///
/// The page owns its elements; the navigator only keeps these handles as
/// back-pointers ("which element did we last move to").
pub type NodeId = usize;

/// CSS `display`, reduced to what navigation cares about.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Display {
    #[default]
    Block,
    Inline,
    None,
}

/// CSS `position`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Position {
    #[default]
    Static,
    Relative,
    Absolute,
    Fixed,
    Sticky,
}

impl Position {
    /// Fixed and sticky boxes do not move with page scroll.
    pub fn is_pinned(self) -> bool {
        matches!(self, Self::Fixed | Self::Sticky)
    }
}

/// CSS `overflow-y`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Overflow {
    #[default]
    Visible,
    Hidden,
    Auto,
    Scroll,
}

impl Overflow {
    /// True for any value that clips the box's content.
    pub fn clips(self) -> bool {
        !matches!(self, Self::Visible)
    }
}

/// The slice of computed style the navigator reads.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ComputedStyle {
    pub display: Display,
    pub position: Position,
    pub overflow_y: Overflow,
}

/// What a programmatic scroll applies to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScrollTarget {
    /// The top-level document (`window.scrollBy`).
    Page,
    /// A nested scroll container (`element.scrollBy`).
    Element(NodeId),
}

/// A rendered document.
///
/// Queries are cheap reads of current layout. Implementations must never
/// panic on a detached or unknown node: return empty values (a zero rect,
/// no parent, no text) instead.
pub trait Page {
    /// Visible viewport size.
    fn viewport(&self) -> Viewport;

    /// Parent element, `None` at the root element.
    fn parent(&self, node: NodeId) -> Option<NodeId>;

    /// Element children in document order.
    fn children(&self, node: NodeId) -> Vec<NodeId>;

    /// Tag name, `None` for nodes that are not elements.
    fn tag(&self, node: NodeId) -> Option<&TagName>;

    /// Attribute value by name.
    fn attribute(&self, node: NodeId, name: &str) -> Option<&str>;

    /// Rendered text of the node and its visible descendants, whitespace
    /// collapsed and trimmed.
    fn inner_text(&self, node: NodeId) -> String;

    /// True if the node has a non-blank text node as a direct child.
    fn has_direct_text(&self, node: NodeId) -> bool;

    /// Border box in viewport coordinates.
    fn bounding_rect(&self, node: NodeId) -> ScreenRect;

    fn computed_style(&self, node: NodeId) -> ComputedStyle;

    /// Topmost rendered element at a viewport coordinate.
    fn element_at_point(&self, x: f32, y: f32) -> Option<NodeId>;

    /// Scroll offset and extents of an element.
    fn scroll_metrics(&self, node: NodeId) -> ScrollMetrics;

    /// Set an element's vertical scroll offset. The page clamps or ignores
    /// the write exactly like a browser would.
    fn set_scroll_top(&mut self, node: NodeId, top: f32);

    /// Non-mutating "does this element really scroll" query, when the
    /// platform has one. `None` makes the resolver fall back to a probe.
    fn scrollable_hint(&self, _node: NodeId) -> Option<bool> {
        None
    }

    /// Top-level document scroll: `scrollY`, document scroll height and
    /// viewport height.
    fn page_scroll(&self) -> ScrollMetrics;

    /// Scroll the page or a container vertically by `dy` pixels.
    fn scroll_by(&mut self, target: ScrollTarget, dy: f32);

    fn focus(&mut self, node: NodeId);

    fn set_tab_index(&mut self, node: NodeId, index: i32);

    fn element_by_id(&self, id: &str) -> Option<NodeId>;

    /// First element carrying `class` in its class list.
    fn element_by_class(&self, class: &str) -> Option<NodeId>;

    /// Inclusive containment: true if `node` is `ancestor` or lies below it.
    fn contains(&self, ancestor: NodeId, node: NodeId) -> bool {
        let mut cur = Some(node);
        while let Some(n) = cur {
            if n == ancestor {
                return true;
            }
            cur = self.parent(n);
        }
        false
    }
}

/// Iterator over the strict ancestors of a node, nearest first.
pub struct Ancestors<'a, P: Page + ?Sized> {
    page: &'a P,
    next: Option<NodeId>,
}

impl<P: Page + ?Sized> Iterator for Ancestors<'_, P> {
    type Item = NodeId;

    fn next(&mut self) -> Option<NodeId> {
        let cur = self.next?;
        self.next = self.page.parent(cur);
        Some(cur)
    }
}

/// Walk the ancestors of `node`, excluding `node` itself.
pub fn ancestors<P: Page + ?Sized>(page: &P, node: NodeId) -> Ancestors<'_, P> {
    Ancestors {
        page,
        next: page.parent(node),
    }
}

/// Walk `node` and then its ancestors.
pub fn self_and_ancestors<P: Page + ?Sized>(page: &P, node: NodeId) -> Ancestors<'_, P> {
    Ancestors {
        page,
        next: Some(node),
    }
}
