//! Screen geometry: viewport rectangles, points and position bias.

use serde::{Deserialize, Serialize};

/// An axis-aligned rectangle in viewport pixel coordinates.
///
/// Always derived fresh from the current layout; never cache one across
/// frames.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct ScreenRect {
    pub left: f32,
    pub top: f32,
    pub right: f32,
    pub bottom: f32,
}

impl ScreenRect {
    pub fn new(left: f32, top: f32, right: f32, bottom: f32) -> Self {
        Self {
            left,
            top,
            right,
            bottom,
        }
    }

    /// Build a rect from an origin and a size.
    pub fn from_xywh(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self::new(x, y, x + width, y + height)
    }

    pub fn width(&self) -> f32 {
        self.right - self.left
    }

    pub fn height(&self) -> f32 {
        self.bottom - self.top
    }

    /// True for zero-area rects, e.g. detached or collapsed elements.
    pub fn is_empty(&self) -> bool {
        self.width() <= 0.0 || self.height() <= 0.0
    }

    /// Check if a point is inside this rectangle (right/bottom exclusive).
    pub fn contains(&self, x: f32, y: f32) -> bool {
        x >= self.left && x < self.right && y >= self.top && y < self.bottom
    }

    /// Translate by `(dx, dy)`.
    pub fn offset(&self, dx: f32, dy: f32) -> ScreenRect {
        ScreenRect::new(
            self.left + dx,
            self.top + dy,
            self.right + dx,
            self.bottom + dy,
        )
    }

    /// Midpoint of the rect. The vertical centre is measured up from the
    /// bottom edge, which keeps it consistent with the bias sign convention.
    pub fn midpoint(&self) -> Point {
        Point {
            x: self.left + self.width() / 2.0,
            y: self.bottom - self.height() / 2.0,
        }
    }
}

/// A point in viewport pixel coordinates.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub x: f32,
    pub y: f32,
}

/// Visible viewport size (`innerWidth` x `innerHeight`).
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Viewport {
    pub width: f32,
    pub height: f32,
}

impl Viewport {
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    pub fn rect(&self) -> ScreenRect {
        ScreenRect::new(0.0, 0.0, self.width, self.height)
    }
}

/// Normalized screen position in `[-1, 1]` on both axes.
///
/// `x = -1` is the left edge, `x = 1` the right edge. The vertical axis is
/// inverted from pixel space: `y = 1` is the top of the viewport.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Bias {
    pub x: f32,
    pub y: f32,
}

impl Bias {
    pub const CENTER: Bias = Bias { x: 0.0, y: 0.0 };

    /// Map a viewport point to a bias. Points outside the viewport saturate
    /// to the nearest edge.
    pub fn from_point(point: Point, viewport: Viewport, round_to_tenth: bool) -> Self {
        let x = normalize(point.x, viewport.width);
        let y = -normalize(point.y, viewport.height);
        if round_to_tenth {
            Self {
                x: round_tenth(x),
                y: round_tenth(y),
            }
        } else {
            Self { x, y }
        }
    }

    /// Clamp the horizontal component into `[left, right]`.
    pub fn with_x_cutoffs(self, left: f32, right: f32) -> Self {
        Self {
            x: self.x.clamp(left, right),
            y: self.y,
        }
    }
}

/// `-1 + 2 * (v / extent)` clamped to `[-1, 1]`. A degenerate extent maps
/// to the centre.
fn normalize(v: f32, extent: f32) -> f32 {
    if extent <= 0.0 || !v.is_finite() {
        return 0.0;
    }
    (-1.0 + 2.0 * (v / extent)).clamp(-1.0, 1.0)
}

fn round_tenth(v: f32) -> f32 {
    (v * 10.0).round() / 10.0
}
