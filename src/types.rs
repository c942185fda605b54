//! Core types for the Pillboard canvas.
//!
//! Pills are plain values: the interaction state machine owns the list and the
//! partition engine produces new pills from old ones. Nothing here mutates
//! shared state.

use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

// ============================================================================
// Identifiers
// ============================================================================

/// Opaque, never-reused pill identifier.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PillId(Uuid);

impl PillId {
    pub fn from_uuid(uuid: Uuid) -> Self {
        Self(uuid)
    }
}

impl fmt::Display for PillId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

// ============================================================================
// Geometry
// ============================================================================

/// A position on the canvas.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct CanvasPoint {
    pub x: f32,
    pub y: f32,
}

impl CanvasPoint {
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    /// Both coordinates are finite (not NaN, not infinite)
    pub fn is_finite(&self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }

    /// True if the point moved more than `threshold` from `origin` on either axis.
    pub fn exceeds(&self, origin: CanvasPoint, threshold: f32) -> bool {
        (self.x - origin.x).abs() > threshold || (self.y - origin.y).abs() > threshold
    }
}

/// Per-corner radii, clockwise from the top-left corner.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CornerRadii {
    pub top_left: f32,
    pub top_right: f32,
    pub bottom_right: f32,
    pub bottom_left: f32,
}

impl CornerRadii {
    pub const fn new(top_left: f32, top_right: f32, bottom_right: f32, bottom_left: f32) -> Self {
        Self {
            top_left,
            top_right,
            bottom_right,
            bottom_left,
        }
    }

    /// Same radius on all four corners.
    pub const fn uniform(radius: f32) -> Self {
        Self::new(radius, radius, radius, radius)
    }

    pub const fn zero() -> Self {
        Self::uniform(0.0)
    }

    /// Keep only the top-left corner.
    pub const fn only_top_left(&self) -> Self {
        Self::new(self.top_left, 0.0, 0.0, 0.0)
    }

    /// Keep only the top-right corner.
    pub const fn only_top_right(&self) -> Self {
        Self::new(0.0, self.top_right, 0.0, 0.0)
    }

    /// Keep only the bottom-right corner.
    pub const fn only_bottom_right(&self) -> Self {
        Self::new(0.0, 0.0, self.bottom_right, 0.0)
    }

    /// Keep only the bottom-left corner.
    pub const fn only_bottom_left(&self) -> Self {
        Self::new(0.0, 0.0, 0.0, self.bottom_left)
    }

    /// Keep the two left corners (the part left of a vertical cut).
    pub const fn left_side(&self) -> Self {
        Self::new(self.top_left, 0.0, 0.0, self.bottom_left)
    }

    /// Keep the two right corners (the part right of a vertical cut).
    pub const fn right_side(&self) -> Self {
        Self::new(0.0, self.top_right, self.bottom_right, 0.0)
    }

    /// Keep the two top corners (the part above a horizontal cut).
    pub const fn top_side(&self) -> Self {
        Self::new(self.top_left, self.top_right, 0.0, 0.0)
    }

    /// Keep the two bottom corners (the part below a horizontal cut).
    pub const fn bottom_side(&self) -> Self {
        Self::new(0.0, 0.0, self.bottom_right, self.bottom_left)
    }

    /// Corners in clockwise order starting top-left.
    pub fn to_array(&self) -> [f32; 4] {
        [self.top_left, self.top_right, self.bottom_right, self.bottom_left]
    }
}

// ============================================================================
// Color
// ============================================================================

/// An HSL color. Hue in degrees, saturation and lightness in percent.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct PillColor {
    pub hue: f32,
    pub saturation: f32,
    pub lightness: f32,
}

impl PillColor {
    pub const fn hsl(hue: f32, saturation: f32, lightness: f32) -> Self {
        Self {
            hue,
            saturation,
            lightness,
        }
    }
}

impl fmt::Display for PillColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "hsl({}, {}%, {}%)",
            self.hue, self.saturation, self.lightness
        )
    }
}

// ============================================================================
// Pill
// ============================================================================

/// A rounded rectangle on the canvas.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Pill {
    pub id: PillId,
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
    pub color: PillColor,
    pub border_radius: CornerRadii,
}

impl Pill {
    pub fn position(&self) -> CanvasPoint {
        CanvasPoint::new(self.x, self.y)
    }

    pub fn right(&self) -> f32 {
        self.x + self.width
    }

    pub fn bottom(&self) -> f32 {
        self.y + self.height
    }

    pub fn area(&self) -> f32 {
        self.width * self.height
    }

    /// The vertical line `x` passes strictly through the pill's interior.
    #[inline]
    pub fn intersects_vertical(&self, x: f32) -> bool {
        x > self.x && x < self.right()
    }

    /// The horizontal line `y` passes strictly through the pill's interior.
    #[inline]
    pub fn intersects_horizontal(&self, y: f32) -> bool {
        y > self.y && y < self.bottom()
    }

    /// Point lies within the pill's bounds, edges included (hit testing).
    #[inline]
    pub fn contains(&self, point: CanvasPoint) -> bool {
        point.x >= self.x
            && point.x <= self.right()
            && point.y >= self.y
            && point.y <= self.bottom()
    }
}

/// Live preview geometry for an in-progress creation drag.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct PreviewRect {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
    pub color: PillColor,
    pub corner_radius: f32,
}

impl PreviewRect {
    /// Normalized rectangle spanning two corner points.
    pub fn spanning(a: CanvasPoint, b: CanvasPoint, color: PillColor, corner_radius: f32) -> Self {
        Self {
            x: a.x.min(b.x),
            y: a.y.min(b.y),
            width: (b.x - a.x).abs(),
            height: (b.y - a.y).abs(),
            color,
            corner_radius,
        }
    }
}
