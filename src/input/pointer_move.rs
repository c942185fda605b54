//! Pointer move - cursor tracking, drag promotion, and pill relocation.
//!
//! Move is the hot path (every raw sample), so non-drag states only update
//! the cursor and return.

use crate::board::Board;
use crate::input::InputState;
use crate::profile_scope;
use crate::types::{CanvasPoint, PillId};
use tracing::{debug, warn};

impl Board {
    /// Feed one pointer sample. Returns false if the sample was rejected.
    pub fn pointer_move(&mut self, x: f32, y: f32) -> bool {
        profile_scope!("pointer_move");

        let point = CanvasPoint::new(x, y);
        if !point.is_finite() {
            warn!(x, y, "Ignoring pointer move with non-finite coordinates");
            return false;
        }
        self.cursor = point;

        match self.input_state {
            InputState::PendingPillAction {
                pill_id,
                start,
                pill_origin,
            } => {
                if point.exceeds(start, self.settings.click_threshold) {
                    let drag_offset =
                        CanvasPoint::new(start.x - pill_origin.x, start.y - pill_origin.y);
                    debug!(
                        pill = %pill_id,
                        offset_x = drag_offset.x,
                        offset_y = drag_offset.y,
                        "Drag started"
                    );
                    self.input_state.start_dragging(pill_id, drag_offset);
                    self.move_dragged_pill(pill_id, point, drag_offset);
                }
            }
            InputState::DraggingPill {
                pill_id,
                drag_offset,
            } => {
                profile_scope!("pill_drag");
                self.move_dragged_pill(pill_id, point, drag_offset);
            }
            InputState::Idle | InputState::CreatingPill { .. } => {}
        }

        true
    }

    /// Place the dragged pill so the grab point stays under the pointer.
    fn move_dragged_pill(&mut self, pill_id: PillId, pointer: CanvasPoint, offset: CanvasPoint) {
        if let Some(pill) = self.get_pill_mut(pill_id) {
            pill.x = pointer.x - offset.x;
            pill.y = pointer.y - offset.y;
        }
    }
}
