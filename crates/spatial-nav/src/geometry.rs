//! Element geometry helpers over a live [`Page`].

use spatial_types::geometry::{Bias, Point, ScreenRect};

use crate::page::{NodeId, Page};

/// Current viewport rect of an element.
pub fn rect<P: Page + ?Sized>(page: &P, node: NodeId) -> ScreenRect {
    page.bounding_rect(node)
}

/// Midpoint of an element's box, measured up from its bottom edge.
pub fn midpoint<P: Page + ?Sized>(page: &P, node: NodeId) -> Point {
    rect(page, node).midpoint()
}

/// Normalized on-screen position of an element.
///
/// Elements scrolled off-screen saturate to `±1`. Nothing here errors: a
/// detached element has a zero rect and maps to the top-left corner.
pub fn bias<P: Page + ?Sized>(page: &P, node: NodeId, round_to_tenth: bool) -> Bias {
    Bias::from_point(midpoint(page, node), page.viewport(), round_to_tenth)
}
