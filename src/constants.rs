//! Application-wide constants.
//!
//! Centralizes the geometric policy numbers so the partition engine, the
//! interaction state machine and the settings defaults agree on them.

// ============================================================================
// Partition Policy
// ============================================================================

/// Minimum width and height of any part produced by a split
pub const MIN_PART_SIZE: f32 = 20.0;

// ============================================================================
// Gesture Classification
// ============================================================================

/// Pointer travel (per axis) above which a gesture counts as a drag, not a click
pub const CLICK_THRESHOLD: f32 = 5.0;

/// Minimum width and height of a pill drawn by a creation drag
pub const MIN_PILL_SIZE: f32 = 40.0;

// ============================================================================
// Pill Defaults
// ============================================================================

/// Corner radius applied uniformly to freshly created pills and the preview
pub const DEFAULT_CORNER_RADIUS: f32 = 20.0;

/// Saturation (percent) of generated pastel colors
pub const PASTEL_SATURATION: f32 = 70.0;

/// Lightness (percent) of generated pastel colors
pub const PASTEL_LIGHTNESS: f32 = 70.0;

// ============================================================================
// Canvas Chrome
// ============================================================================

/// Thickness of the crosshair guide lines in pixels
pub const CROSSHAIR_WIDTH: f32 = 2.0;

/// Border width drawn around pills and the preview
pub const PILL_BORDER_WIDTH: f32 = 1.0;

/// Pixels panned per scroll line
pub const SCROLL_LINE_PIXELS: f32 = 20.0;

// ============================================================================
// Window
// ============================================================================

/// Initial window size
pub const DEFAULT_WINDOW_SIZE: (f32, f32) = (1200.0, 800.0);

// ============================================================================
// Rendering
// ============================================================================

/// Extra margin around the viewport before a pill is culled (prevents pop-in at edges)
pub const CULLING_MARGIN: f32 = 50.0;
