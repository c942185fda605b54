//! Window/canvas coordinate conversion.
//!
//! The canvas has no zoom; the only transform is the view offset that scroll
//! panning accumulates. Canvas coordinates are what the board stores.

use crate::types::CanvasPoint;
use gpui::{Pixels, Point, point, px};

pub struct CoordinateConverter;

impl CoordinateConverter {
    /// Convert a window position to canvas coordinates.
    #[inline]
    pub fn screen_to_canvas(screen_pos: Point<Pixels>, view_offset: Point<Pixels>) -> CanvasPoint {
        CanvasPoint::new(
            f32::from(screen_pos.x) - f32::from(view_offset.x),
            f32::from(screen_pos.y) - f32::from(view_offset.y),
        )
    }

    /// Convert canvas coordinates to a window position.
    #[inline]
    pub fn canvas_to_screen(canvas_pos: CanvasPoint, view_offset: Point<Pixels>) -> Point<Pixels> {
        point(
            px(canvas_pos.x + f32::from(view_offset.x)),
            px(canvas_pos.y + f32::from(view_offset.y)),
        )
    }
}
