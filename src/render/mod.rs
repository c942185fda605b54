//! Rendering - the root view and the painted canvas layer.

pub mod canvas;

use crate::app::PillboardApp;
use gpui::*;

pub use canvas::{CanvasScene, pill_color, render_pill_canvas};

/// Canvas background
fn background() -> Hsla {
    hsla(0.0, 0.0, 0.98, 1.0)
}

impl Render for PillboardApp {
    fn render(&mut self, _window: &mut Window, cx: &mut Context<Self>) -> impl IntoElement {
        let scene = CanvasScene::capture(&self.board, self.view_offset);

        div()
            .size_full()
            .relative()
            .overflow_hidden()
            .bg(background())
            .cursor(CursorStyle::Crosshair)
            .on_mouse_down(MouseButton::Left, cx.listener(Self::handle_mouse_down))
            .on_mouse_move(cx.listener(Self::handle_mouse_move))
            .on_mouse_up(MouseButton::Left, cx.listener(Self::handle_mouse_up))
            .on_mouse_up_out(MouseButton::Left, cx.listener(Self::handle_mouse_up))
            .on_scroll_wheel(cx.listener(Self::handle_scroll))
            .child(render_pill_canvas(scene))
    }
}
