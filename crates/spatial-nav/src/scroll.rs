//! Scroll views: which container scrolls an element, and how far.

use spatial_types::input::Direction;

use crate::page::{NodeId, Overflow, Page, ancestors, self_and_ancestors};

/// Scroll offset and extents of an element or of the page.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct ScrollMetrics {
    /// Current vertical scroll offset in pixels.
    pub scroll_top: f32,
    /// Total content height.
    pub scroll_height: f32,
    /// Visible height.
    pub client_height: f32,
}

impl ScrollMetrics {
    /// Get the maximum scroll offset.
    pub fn max_scroll(&self) -> f32 {
        (self.scroll_height - self.client_height).max(0.0)
    }

    /// Content taller than the visible box?
    pub fn overflows(&self) -> bool {
        self.scroll_height > self.client_height
    }

    pub fn at_top(&self) -> bool {
        self.scroll_top == 0.0
    }

    pub fn at_bottom(&self) -> bool {
        self.scroll_top >= self.max_scroll()
    }
}

/// Where the top-level document sits in its scroll range.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScrollStatus {
    /// Document fits the viewport.
    NoScroll,
    Top,
    Bottom,
    Neither,
}

impl ScrollStatus {
    pub fn of(metrics: &ScrollMetrics) -> Self {
        if !metrics.overflows() {
            Self::NoScroll
        } else if metrics.at_top() {
            Self::Top
        } else if metrics.at_bottom() {
            Self::Bottom
        } else {
            Self::Neither
        }
    }

    /// Is there room to scroll further in `dir`?
    pub fn can_scroll(self, dir: Direction) -> bool {
        match (self, dir) {
            (Self::NoScroll, _) => false,
            (Self::Top, Direction::Up) | (Self::Bottom, Direction::Down) => false,
            (_, Direction::Up | Direction::Down) => true,
            _ => false,
        }
    }
}

/// Temporarily nudges an element's scroll offset to see whether it really
/// moves. The original offset is written back when the probe is dropped,
/// whichever way the caller leaves.
struct ScrollProbe<'a, P: Page + ?Sized> {
    page: &'a mut P,
    node: NodeId,
    original: f32,
}

impl<'a, P: Page + ?Sized> ScrollProbe<'a, P> {
    fn start(page: &'a mut P, node: NodeId) -> Self {
        let original = page.scroll_metrics(node).scroll_top;
        page.set_scroll_top(node, original + 1.0);
        Self {
            page,
            node,
            original,
        }
    }

    fn moved(&self) -> bool {
        self.page.scroll_metrics(self.node).scroll_top != self.original
    }
}

impl<P: Page + ?Sized> Drop for ScrollProbe<'_, P> {
    fn drop(&mut self) {
        self.page.set_scroll_top(self.node, self.original);
    }
}

/// True if `node` is an actual scroll container: content overflows,
/// `overflow-y` is not `hidden`, and the offset really moves.
pub fn is_scroll_view<P: Page + ?Sized>(page: &mut P, node: NodeId) -> bool {
    if page.computed_style(node).overflow_y == Overflow::Hidden {
        return false;
    }
    let metrics = page.scroll_metrics(node);
    if !metrics.overflows() {
        return false;
    }
    if let Some(hint) = page.scrollable_hint(node) {
        return hint;
    }
    if metrics.scroll_top > 0.0 {
        return true;
    }
    ScrollProbe::start(page, node).moved()
}

/// Nearest ancestor of `node` that actually scrolls. `None` means the
/// element only moves with the page itself.
pub fn first_scroll_view<P: Page + ?Sized>(page: &mut P, node: NodeId) -> Option<NodeId> {
    let chain: Vec<NodeId> = ancestors(page, node).collect();
    chain.into_iter().find(|&a| is_scroll_view(page, a))
}

/// Nearest element, starting with `node` itself, whose position is `fixed`
/// or `sticky`.
pub fn fixed_parent<P: Page + ?Sized>(page: &P, node: NodeId) -> Option<NodeId> {
    self_and_ancestors(page, node).find(|&n| page.computed_style(n).position.is_pinned())
}

pub fn scrolled_to_top<P: Page + ?Sized>(page: &P, view: NodeId) -> bool {
    page.scroll_metrics(view).at_top()
}

pub fn scrolled_to_bottom<P: Page + ?Sized>(page: &P, view: NodeId) -> bool {
    page.scroll_metrics(view).at_bottom()
}

/// Has `view` reached its boundary in the vertical direction `dir`?
/// Horizontal directions never count as a boundary.
pub fn boundary_reached<P: Page + ?Sized>(page: &P, view: NodeId, dir: Direction) -> bool {
    match dir {
        Direction::Up => scrolled_to_top(page, view),
        Direction::Down => scrolled_to_bottom(page, view),
        _ => false,
    }
}

/// Scroll status of the top-level document.
pub fn page_scroll_status<P: Page + ?Sized>(page: &P) -> ScrollStatus {
    ScrollStatus::of(&page.page_scroll())
}
