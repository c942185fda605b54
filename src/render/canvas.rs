//! Canvas painting - pills, the creation preview and the crosshair.
//!
//! ## Performance Notes
//!
//! This is a hot path - painting happens every frame and the pointer moves
//! trigger a frame on every sample. Key optimizations:
//! - Early culling of off-screen pills (viewport culling)
//! - Direct GPU quads, no per-pill elements
//!
//! Enable profiling with `cargo build --features profiling` to see timing.

use crate::board::Board;
use crate::constants::{CROSSHAIR_WIDTH, CULLING_MARGIN, PILL_BORDER_WIDTH};
use crate::input::coords::CoordinateConverter;
use crate::profile_scope;
use crate::types::{CanvasPoint, CornerRadii, Pill, PillColor, PreviewRect};
use gpui::*;

/// Everything the paint pass needs, copied out of the board so the canvas
/// closure owns its data.
#[derive(Clone, Debug)]
pub struct CanvasScene {
    pub pills: Vec<Pill>,
    pub preview: Option<PreviewRect>,
    pub cursor: CanvasPoint,
    pub show_crosshair: bool,
    pub view_offset: Point<Pixels>,
}

impl CanvasScene {
    pub fn capture(board: &Board, view_offset: Point<Pixels>) -> Self {
        Self {
            pills: board.pills().to_vec(),
            preview: board.preview(),
            cursor: board.cursor(),
            show_crosshair: board.settings().show_crosshair,
            view_offset,
        }
    }
}

/// Convert a pill color (degrees / percent) to gpui's unit-range HSLA.
pub fn pill_color(color: PillColor) -> Hsla {
    hsla(
        color.hue / 360.0,
        color.saturation / 100.0,
        color.lightness / 100.0,
        1.0,
    )
}

fn border_color() -> Hsla {
    hsla(0.0, 0.0, 0.0, 0.15)
}

fn crosshair_color() -> Hsla {
    hsla(0.0, 0.0, 0.2, 0.5)
}

fn corners(radii: &CornerRadii) -> Corners<Pixels> {
    Corners {
        top_left: px(radii.top_left),
        top_right: px(radii.top_right),
        bottom_right: px(radii.bottom_right),
        bottom_left: px(radii.bottom_left),
    }
}

/// Render the canvas layer. Paint order: pills (list order), preview, crosshair.
pub fn render_pill_canvas(scene: CanvasScene) -> impl IntoElement {
    canvas(
        move |_bounds, _window, _cx| (),
        move |bounds, _data, window, _cx| {
            paint_pills(bounds, window, &scene);
            if let Some(preview) = scene.preview {
                paint_preview(bounds, window, &preview, scene.view_offset);
            }
            if scene.show_crosshair {
                paint_crosshair(bounds, window, scene.cursor, scene.view_offset);
            }
        },
    )
    .absolute()
    .size_full()
}

fn screen_bounds(
    bounds: Bounds<Pixels>,
    view_offset: Point<Pixels>,
    x: f32,
    y: f32,
    width: f32,
    height: f32,
) -> Bounds<Pixels> {
    let origin = CoordinateConverter::canvas_to_screen(CanvasPoint::new(x, y), view_offset);
    Bounds {
        origin: point(bounds.origin.x + origin.x, bounds.origin.y + origin.y),
        size: size(px(width), px(height)),
    }
}

fn paint_pills(bounds: Bounds<Pixels>, window: &mut Window, scene: &CanvasScene) {
    profile_scope!("paint_pills");

    if scene.pills.is_empty() {
        return;
    }

    // Viewport in canvas coordinates, padded so edge pills don't pop in
    let vp_left = -f32::from(scene.view_offset.x) - CULLING_MARGIN;
    let vp_top = -f32::from(scene.view_offset.y) - CULLING_MARGIN;
    let vp_right = vp_left + f32::from(bounds.size.width) + 2.0 * CULLING_MARGIN;
    let vp_bottom = vp_top + f32::from(bounds.size.height) + 2.0 * CULLING_MARGIN;

    #[cfg(feature = "profiling")]
    let mut culled_count = 0usize;

    for pill in &scene.pills {
        if pill.right() < vp_left
            || pill.x > vp_right
            || pill.bottom() < vp_top
            || pill.y > vp_bottom
        {
            #[cfg(feature = "profiling")]
            {
                culled_count += 1;
            }
            continue;
        }

        window.paint_quad(quad(
            screen_bounds(bounds, scene.view_offset, pill.x, pill.y, pill.width, pill.height),
            corners(&pill.border_radius),
            pill_color(pill.color),
            px(PILL_BORDER_WIDTH),
            border_color(),
            Default::default(),
        ));
    }

    #[cfg(feature = "profiling")]
    tracing::trace!(total = scene.pills.len(), culled = culled_count, "Pills painted");
}

fn paint_preview(
    bounds: Bounds<Pixels>,
    window: &mut Window,
    preview: &PreviewRect,
    view_offset: Point<Pixels>,
) {
    let tint = pill_color(preview.color).opacity(0.6);
    window.paint_quad(quad(
        screen_bounds(
            bounds,
            view_offset,
            preview.x,
            preview.y,
            preview.width,
            preview.height,
        ),
        px(preview.corner_radius),
        tint,
        px(PILL_BORDER_WIDTH),
        border_color(),
        Default::default(),
    ));
}

/// Full-height vertical and full-width horizontal guide through the cursor.
fn paint_crosshair(
    bounds: Bounds<Pixels>,
    window: &mut Window,
    cursor: CanvasPoint,
    view_offset: Point<Pixels>,
) {
    let half = CROSSHAIR_WIDTH / 2.0;
    let guide = CanvasPoint::new(cursor.x - half, cursor.y - half);
    let at = CoordinateConverter::canvas_to_screen(guide, view_offset);
    let x = bounds.origin.x + at.x;
    let y = bounds.origin.y + at.y;

    window.paint_quad(fill(
        Bounds {
            origin: point(x, bounds.origin.y),
            size: size(px(CROSSHAIR_WIDTH), bounds.size.height),
        },
        crosshair_color(),
    ));
    window.paint_quad(fill(
        Bounds {
            origin: point(bounds.origin.x, y),
            size: size(bounds.size.width, px(CROSSHAIR_WIDTH)),
        },
        crosshair_color(),
    ));
}
