//! Pointer down - start a gesture on empty canvas or on a pill.

use crate::board::Board;
use crate::color::random_pastel;
use crate::profile_scope;
use crate::types::{CanvasPoint, PillId};
use tracing::{debug, warn};

impl Board {
    /// Begin a gesture at `(x, y)`.
    ///
    /// `target` is the pill under the pointer as resolved by the front-end
    /// (usually via [`Board::hit_test`]); `None` means empty canvas. Only one
    /// of the two branches runs per press.
    pub fn pointer_down(&mut self, x: f32, y: f32, target: Option<PillId>) {
        profile_scope!("pointer_down");

        let point = CanvasPoint::new(x, y);
        if !point.is_finite() {
            warn!(x, y, "Ignoring pointer down with non-finite coordinates");
            return;
        }

        if !self.input_state.is_idle() {
            debug!(state = ?self.input_state, "Pointer down during active gesture ignored");
            return;
        }

        self.cursor = point;

        let pressed = target.and_then(|id| match self.get_pill(id) {
            Some(pill) => Some((id, pill.position())),
            None => {
                warn!(pill = %id, "Pointer down target not on board, treating as empty canvas");
                None
            }
        });

        match pressed {
            Some((pill_id, pill_origin)) => {
                debug!(pill = %pill_id, x, y, "Pointer down on pill");
                self.input_state.start_pending(pill_id, point, pill_origin);
            }
            None => {
                let color = random_pastel(&mut self.rng);
                debug!(x, y, %color, "Pointer down on empty canvas");
                self.input_state.start_creating(point, color);
            }
        }
    }
}
