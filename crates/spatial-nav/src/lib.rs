//! Spatial navigation: move focus by direction instead of tab order.
//!
//! Given the focused element and an arrow (or WASD) key, the engine scans
//! the rendered page beyond the element's edge and moves focus to the first
//! element that has something to say. Vertical moves scroll nested
//! containers and the page when nothing is left on screen. Every focus
//! change is announced through a [`FeedbackSink`] as speech panned to the
//! element's on-screen position.
//!
//! The page itself is reached through the [`Page`] trait; [`Document`] is
//! an in-memory implementation for headless use.

pub mod dom;
pub mod feedback;
pub mod geometry;
pub mod interaction;
pub mod nav;
pub mod page;
pub mod readout;
pub mod scroll;
pub mod search;

#[cfg(test)]
pub(crate) mod test_utils;

// -----------------------------------------------------------------------
// Public re-exports
// -----------------------------------------------------------------------

pub use dom::{Document, TagName};
pub use feedback::{Cue, CueKind, FeedbackSink, SilentSink};
pub use interaction::InteractionEvent;
pub use nav::{NavOutcome, NavigationController, NavigationSession, PendingRetry};
pub use page::{ComputedStyle, Display, NodeId, Overflow, Page, Position, ScrollTarget};
pub use readout::{ReadoutOracle, readout};
pub use scroll::{ScrollMetrics, ScrollStatus, first_scroll_view, fixed_parent};
pub use search::{SearchEngine, element_in_direction};
