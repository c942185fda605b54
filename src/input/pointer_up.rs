//! Pointer up - resolve the gesture: create, split, or commit a drag.

use crate::board::Board;
use crate::input::{GestureOutcome, InputState};
use crate::partition::split_with_report;
use crate::profile_scope;
use crate::types::{CanvasPoint, CornerRadii, Pill, PillColor, PreviewRect};
use tracing::{debug, info, warn};

impl Board {
    /// Finish the current gesture at `(x, y)` and return to Idle.
    ///
    /// A non-finite release point falls back to the last cursor position so
    /// the gesture still resolves.
    pub fn pointer_up(&mut self, x: f32, y: f32) -> GestureOutcome {
        profile_scope!("pointer_up");

        let point = CanvasPoint::new(x, y);
        let end = if point.is_finite() {
            self.cursor = point;
            point
        } else {
            warn!(x, y, "Pointer up with non-finite coordinates, using last cursor");
            self.cursor
        };

        let state = std::mem::take(&mut self.input_state);
        match state {
            InputState::Idle => GestureOutcome::Ignored,
            InputState::CreatingPill { start, color } => {
                if end.exceeds(start, self.settings.click_threshold) {
                    self.finish_creation(start, end, color)
                } else {
                    self.split_at_cursor()
                }
            }
            InputState::PendingPillAction { .. } => self.split_at_cursor(),
            InputState::DraggingPill { pill_id, .. } => {
                self.reindex_pill(pill_id);
                let position = self
                    .get_pill(pill_id)
                    .map(Pill::position)
                    .unwrap_or(end);
                debug!(pill = %pill_id, x = position.x, y = position.y, "Drag committed");
                GestureOutcome::Dragged { pill_id, position }
            }
        }
    }

    /// Commit a drawn pill if the box is big enough.
    fn finish_creation(
        &mut self,
        start: CanvasPoint,
        end: CanvasPoint,
        color: PillColor,
    ) -> GestureOutcome {
        let min = self.settings.min_pill_size;
        let rect = PreviewRect::spanning(start, end, color, self.settings.corner_radius);

        if rect.width < min || rect.height < min {
            debug!(
                width = rect.width,
                height = rect.height,
                min,
                "Creation drag too small, discarded"
            );
            return GestureOutcome::Discarded;
        }

        let pill = Pill {
            id: self.ids.new_id(),
            x: rect.x,
            y: rect.y,
            width: rect.width,
            height: rect.height,
            color,
            border_radius: CornerRadii::uniform(rect.corner_radius),
        };
        let id = pill.id;
        info!(
            pill = %id,
            x = pill.x,
            y = pill.y,
            width = pill.width,
            height = pill.height,
            "Pill created"
        );
        self.push_pill(pill);
        GestureOutcome::Created(id)
    }

    /// Split every pill crossed by the cursor lines; the result replaces the list.
    fn split_at_cursor(&mut self) -> GestureOutcome {
        let (pills, report) = split_with_report(
            &self.pills,
            self.cursor,
            self.settings.min_part_size,
            self.ids.as_mut(),
        );
        if report.changed() {
            info!(
                halved = report.halved,
                quartered = report.quartered,
                total = pills.len(),
                "Pills split"
            );
            self.replace_pills(pills);
        }
        GestureOutcome::Split(report)
    }
}
