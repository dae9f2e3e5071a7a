//! Directional element search.
//!
//! Given the focused element and a direction, rasterize the part of the
//! viewport that lies beyond the element's edge, hit-test every sample, and
//! return the first hit worth moving focus to. "First" is in scan order:
//! rows nearest the edge come first, so the result is the nearest element
//! along the direction of travel, not the Euclidean nearest.

use std::collections::HashSet;

use spatial_types::config::SearchTuning;
use spatial_types::geometry::{ScreenRect, Viewport};
use spatial_types::input::Direction;

use crate::page::{Display, NodeId, Page};
use crate::readout::ReadoutOracle;
use crate::scroll::{boundary_reached, first_scroll_view, fixed_parent};

/// Which substitutes an unreadable candidate may fall back to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Alternates {
    Any,
    ParentsOnly,
    ChildrenOnly,
    None,
}

impl Alternates {
    fn parents(self) -> bool {
        matches!(self, Self::Any | Self::ParentsOnly)
    }

    fn children(self) -> bool {
        matches!(self, Self::Any | Self::ChildrenOnly)
    }
}

/// Finds the next element in a direction.
#[derive(Debug, Clone)]
pub struct SearchEngine {
    tuning: SearchTuning,
    oracle: ReadoutOracle,
}

impl Default for SearchEngine {
    fn default() -> Self {
        Self::new(SearchTuning::default())
    }
}

impl SearchEngine {
    pub fn new(tuning: SearchTuning) -> Self {
        let oracle = ReadoutOracle::new(tuning.max_depth);
        Self { tuning, oracle }
    }

    pub fn tuning(&self) -> &SearchTuning {
        &self.tuning
    }

    pub fn oracle(&self) -> &ReadoutOracle {
        &self.oracle
    }

    /// Find the next element from `start` in `dir`.
    ///
    /// The hit is given tab index `-1` so the host can focus it. Returns
    /// `None` when nothing readable lies in that direction, when `dir` is
    /// [`Direction::None`], or when `start` has no layout box.
    pub fn find<P: Page + ?Sized>(
        &self,
        page: &mut P,
        start: NodeId,
        dir: Direction,
    ) -> Option<NodeId> {
        if dir == Direction::None {
            return None;
        }
        let start_rect = page.bounding_rect(start);
        if start_rect.is_empty() {
            log::debug!("Search from node {start} skipped: no layout box");
            return None;
        }

        let mut rejected: HashSet<NodeId> = HashSet::new();
        for (x, y) in scan_points(&self.tuning, start_rect, page.viewport(), dir) {
            let Some(hit) = page.element_at_point(x, y) else {
                continue;
            };
            if rejected.contains(&hit) {
                continue;
            }
            match self.resolve(page, start, hit, dir, Alternates::Any, 0) {
                Some(found) => {
                    log::debug!(
                        "Found node {found} {dir:?} of node {start} (sample {x:.1},{y:.1}, {} rejected)",
                        rejected.len()
                    );
                    page.set_tab_index(found, -1);
                    return Some(found);
                },
                None => {
                    rejected.insert(hit);
                },
            }
        }
        log::debug!("No element {dir:?} of node {start}");
        None
    }

    /// Decide whether `candidate` is a valid destination from `start`.
    ///
    /// Returns the element focus should actually move to: the candidate
    /// itself, or with `allow_alternates` a readable parent or child that
    /// stands in for an unreadable candidate.
    pub fn worth_navigating_to<P: Page + ?Sized>(
        &self,
        page: &mut P,
        start: NodeId,
        candidate: Option<NodeId>,
        dir: Direction,
        allow_alternates: bool,
    ) -> Option<NodeId> {
        let mode = if allow_alternates {
            Alternates::Any
        } else {
            Alternates::None
        };
        self.resolve(page, start, candidate?, dir, mode, 0)
    }

    fn resolve<P: Page + ?Sized>(
        &self,
        page: &mut P,
        start: NodeId,
        cand: NodeId,
        dir: Direction,
        mode: Alternates,
        depth: u8,
    ) -> Option<NodeId> {
        if depth >= self.tuning.max_depth {
            return None;
        }
        if page.contains(cand, start) || page.contains(start, cand) {
            log::trace!("Reject node {cand}: related to start {start}");
            return None;
        }
        if page.computed_style(cand).display == Display::None {
            return None;
        }

        if !self.oracle.is_readable(page, cand) {
            if mode.parents() {
                if let Some(parent) = page.parent(cand) {
                    let found =
                        self.resolve(page, start, parent, dir, Alternates::ParentsOnly, depth + 1);
                    if found.is_some() {
                        return found;
                    }
                }
            }
            if mode.children() {
                for child in children_nearest_first(page, cand, dir) {
                    if let Some(found) =
                        self.resolve(page, start, child, dir, Alternates::ChildrenOnly, depth + 1)
                    {
                        return Some(found);
                    }
                }
            }
            log::trace!("Reject node {cand}: unreadable");
            return None;
        }

        if !passes_edge(page.bounding_rect(start), page.bounding_rect(cand), dir) {
            log::trace!("Reject node {cand}: does not pass the {dir:?} edge");
            return None;
        }

        if dir.is_vertical() && !scroll_gate(page, start, cand, dir) {
            log::trace!("Reject node {cand}: outside the start's scroll view");
            return None;
        }

        Some(cand)
    }
}

/// Search with default tuning.
pub fn element_in_direction<P: Page + ?Sized>(
    page: &mut P,
    start: NodeId,
    dir: Direction,
) -> Option<NodeId> {
    SearchEngine::default().find(page, start, dir)
}

// ------------------------------------------------------------------
// Candidate filters
// ------------------------------------------------------------------

/// The candidate's leading edge must strictly pass the start's.
fn passes_edge(start: ScreenRect, cand: ScreenRect, dir: Direction) -> bool {
    match dir {
        Direction::Down => cand.bottom > start.bottom,
        Direction::Up => cand.top < start.top,
        Direction::Right => cand.right > start.right,
        Direction::Left => cand.left < start.left,
        Direction::None => false,
    }
}

/// Vertical moves out of a scroll container are only allowed once the
/// container has run out of content in that direction.
fn scroll_gate<P: Page + ?Sized>(page: &mut P, start: NodeId, cand: NodeId, dir: Direction) -> bool {
    let Some(view) = first_scroll_view(page, start) else {
        return true;
    };
    if fixed_parent(page, start).is_some() {
        return true;
    }
    if boundary_reached(page, view, dir) {
        return true;
    }
    match first_scroll_view(page, cand) {
        Some(cand_view) if cand_view == view => fixed_parent(page, cand).is_none(),
        // A sibling or nested view, not one enclosing the start.
        Some(cand_view) if !page.contains(cand_view, view) => true,
        // An enclosing view: only when moving down into what follows.
        Some(_) => dir == Direction::Down,
        None => false,
    }
}

/// Element children ordered by how close their leading edge sits to the
/// start in the direction of travel.
fn children_nearest_first<P: Page + ?Sized>(page: &P, node: NodeId, dir: Direction) -> Vec<NodeId> {
    let mut keyed: Vec<(f32, NodeId)> = page
        .children(node)
        .into_iter()
        .map(|c| {
            let r = page.bounding_rect(c);
            let key = match dir {
                Direction::Up => -r.bottom,
                Direction::Down => r.top,
                Direction::Left => -r.right,
                Direction::Right | Direction::None => r.left,
            };
            (key, c)
        })
        .collect();
    keyed.sort_by(|a, b| a.0.total_cmp(&b.0));
    keyed.into_iter().map(|(_, c)| c).collect()
}

// ------------------------------------------------------------------
// Scan raster
// ------------------------------------------------------------------

/// Sample spacing for a span: the configured interval, halved until the
/// span holds `min_samples` samples, never below one pixel.
fn interval_for(tuning: &SearchTuning, span: f32) -> f32 {
    let mut step = tuning.scan_interval.max(1.0);
    while step > 1.0 && span / step < tuning.min_samples as f32 {
        step /= 2.0;
    }
    step.max(1.0)
}

/// Clamp `[lo, hi]` into `[0, extent]`, or the whole extent if that leaves
/// nothing.
fn clamp_span(lo: f32, hi: f32, extent: f32) -> (f32, f32) {
    let lo = lo.clamp(0.0, extent);
    let hi = hi.clamp(0.0, extent);
    if hi - lo < 1.0 { (0.0, extent) } else { (lo, hi) }
}

/// Samples along the direction of travel, starting at the edge.
fn primary_samples(lo: f32, hi: f32, step: f32, decreasing: bool) -> Vec<f32> {
    let count = ((hi - lo) / step).ceil().max(0.0) as usize;
    (0..count)
        .map(|i| {
            let d = i as f32 * step;
            if decreasing { hi - 0.5 - d } else { lo + d }
        })
        .filter(|v| *v >= lo && *v < hi)
        .collect()
}

/// Samples across the direction of travel, centred in each cell. A
/// trailing partial cell is sampled half a pixel inside `hi`.
fn cross_samples(lo: f32, hi: f32, step: f32) -> Vec<f32> {
    let count = ((hi - lo) / step).ceil().max(1.0) as usize;
    let mut samples: Vec<f32> = (0..count)
        .map(|i| (lo + step / 2.0 + i as f32 * step).min(hi - 0.5))
        .filter(|v| *v >= lo)
        .collect();
    samples.dedup();
    samples
}

/// Every sample point of the scan region, in scan order.
fn scan_points(
    tuning: &SearchTuning,
    start: ScreenRect,
    viewport: Viewport,
    dir: Direction,
) -> Vec<(f32, f32)> {
    let (vw, vh) = (viewport.width, viewport.height);
    match dir {
        Direction::Up | Direction::Down => {
            let (y0, y1) = if dir == Direction::Down {
                clamp_span(start.bottom, vh, vh)
            } else {
                clamp_span(0.0, start.top, vh)
            };
            let (x0, x1) = clamp_span(start.left, start.right, vw);
            let ys = primary_samples(y0, y1, interval_for(tuning, y1 - y0), dir == Direction::Up);
            let xs = cross_samples(x0, x1, interval_for(tuning, x1 - x0));
            ys.iter()
                .flat_map(|&y| xs.iter().map(move |&x| (x, y)))
                .collect()
        },
        Direction::Left | Direction::Right => {
            let (x0, x1) = if dir == Direction::Right {
                clamp_span(start.right, vw, vw)
            } else {
                clamp_span(0.0, start.left, vw)
            };
            let (y0, y1) = clamp_span(start.top, start.bottom, vh);
            let xs = primary_samples(x0, x1, interval_for(tuning, x1 - x0), dir == Direction::Left);
            let ys = cross_samples(y0, y1, interval_for(tuning, y1 - y0));
            xs.iter()
                .flat_map(|&x| ys.iter().map(move |&y| (x, y)))
                .collect()
        },
        Direction::None => Vec::new(),
    }
}
