//! Window event handlers - convert gpui pointer events to canvas gestures.
//!
//! Every handler converts window coordinates with the current pan offset,
//! forwards to the board, and requests a repaint.

use super::PillboardApp;
use crate::constants::SCROLL_LINE_PIXELS;
use crate::input::GestureOutcome;
use crate::input::coords::CoordinateConverter;
use crate::profile_scope;
use gpui::*;
use tracing::trace;

impl PillboardApp {
    pub fn handle_mouse_down(
        &mut self,
        event: &MouseDownEvent,
        _window: &mut Window,
        cx: &mut Context<Self>,
    ) {
        profile_scope!("handle_mouse_down");
        self.check_settings_reload(cx);

        let pos = CoordinateConverter::screen_to_canvas(event.position, self.view_offset);
        let target = self.board.hit_test(pos.x, pos.y);
        self.board.pointer_down(pos.x, pos.y, target);
        cx.notify();
    }

    pub fn handle_mouse_move(
        &mut self,
        event: &MouseMoveEvent,
        _window: &mut Window,
        cx: &mut Context<Self>,
    ) {
        profile_scope!("handle_mouse_move");

        let pos = CoordinateConverter::screen_to_canvas(event.position, self.view_offset);
        if self.board.pointer_move(pos.x, pos.y) {
            cx.notify();
        }
    }

    pub fn handle_mouse_up(
        &mut self,
        event: &MouseUpEvent,
        _window: &mut Window,
        cx: &mut Context<Self>,
    ) {
        profile_scope!("handle_mouse_up");

        let pos = CoordinateConverter::screen_to_canvas(event.position, self.view_offset);
        let board = &mut self.board;
        let outcome = self.perf.time("pointer_up", || board.pointer_up(pos.x, pos.y));
        if self
            .perf
            .get_operation_stats("pointer_up")
            .is_some_and(|stats| stats.count() % 100 == 0)
        {
            self.perf.log_summary();
        }
        if !matches!(outcome, GestureOutcome::Ignored) {
            trace!(?outcome, "Gesture resolved");
            cx.notify();
        }
    }

    /// Pan the view. Pills keep their canvas coordinates.
    pub fn handle_scroll(
        &mut self,
        event: &ScrollWheelEvent,
        _window: &mut Window,
        cx: &mut Context<Self>,
    ) {
        let (dx, dy) = match event.delta {
            ScrollDelta::Pixels(delta) => (f32::from(delta.x), f32::from(delta.y)),
            ScrollDelta::Lines(delta) => {
                (delta.x * SCROLL_LINE_PIXELS, delta.y * SCROLL_LINE_PIXELS)
            }
        };
        if dx == 0.0 && dy == 0.0 {
            return;
        }

        self.view_offset = point(self.view_offset.x + px(dx), self.view_offset.y + px(dy));

        // Keep the crosshair under the pointer after the canvas slides
        let pos = CoordinateConverter::screen_to_canvas(event.position, self.view_offset);
        self.board.pointer_move(pos.x, pos.y);
        cx.notify();
    }
}
