//! Input state machine - one tagged value for the gesture in progress.
//!
//! ## State Transitions
//!
//! ```text
//! Idle -> CreatingPill        (pointer down on empty canvas)
//! Idle -> PendingPillAction   (pointer down on a pill)
//! PendingPillAction -> DraggingPill  (pointer moves past the click threshold)
//!
//! CreatingPill -> Idle        (pointer up: create pill, or split if it was a click)
//! PendingPillAction -> Idle   (pointer up: split at the cursor)
//! DraggingPill -> Idle        (pointer up: commit position)
//! ```
//!
//! An empty-canvas press is a creation gesture from the moment the pointer goes
//! down; whether it was really a click is only decided at pointer up.
//! [`GesturePhase`] exposes the finer-grained view for renderers.

use crate::partition::SplitReport;
use crate::types::{CanvasPoint, PillColor, PillId};
use serde::Serialize;

/// Unified input state for all pointer interactions.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum InputState {
    /// No pointer button held
    #[default]
    Idle,

    /// Pointer went down on empty canvas
    CreatingPill {
        /// Pointer position at pointer down
        start: CanvasPoint,
        /// Color the new pill will get
        color: PillColor,
    },

    /// Pointer went down on a pill; click or drag not decided yet
    PendingPillAction {
        pill_id: PillId,
        /// Pointer position at pointer down
        start: CanvasPoint,
        /// Pill's top-left at pointer down
        pill_origin: CanvasPoint,
    },

    /// Relocating a pill
    DraggingPill {
        pill_id: PillId,
        /// Pointer position minus pill position, fixed for the whole drag
        drag_offset: CanvasPoint,
    },
}

/// Observable phase of the current gesture.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum GesturePhase {
    Idle,
    /// Empty-canvas press that has not moved past the click threshold
    PendingClickOrDrag,
    /// Empty-canvas press that has moved past the click threshold
    CreatingPill,
    PendingPillAction,
    DraggingPill,
}

/// How a gesture resolved at pointer up.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub enum GestureOutcome {
    /// A creation drag produced a new pill
    Created(PillId),
    /// A creation drag was too small; nothing was created
    Discarded,
    /// A click split the pills crossed by the cursor lines (possibly none)
    Split(SplitReport),
    /// A drag finished with the pill at `position`
    Dragged { pill_id: PillId, position: CanvasPoint },
    /// There was no gesture to resolve
    Ignored,
}

impl InputState {
    /// Returns true if the state is Idle
    pub fn is_idle(&self) -> bool {
        matches!(self, Self::Idle)
    }

    /// Returns true while an empty-canvas press is active
    pub fn is_creating(&self) -> bool {
        matches!(self, Self::CreatingPill { .. })
    }

    pub fn start_creating(&mut self, start: CanvasPoint, color: PillColor) {
        *self = Self::CreatingPill { start, color };
    }

    pub fn start_pending(&mut self, pill_id: PillId, start: CanvasPoint, pill_origin: CanvasPoint) {
        *self = Self::PendingPillAction {
            pill_id,
            start,
            pill_origin,
        };
    }

    pub fn start_dragging(&mut self, pill_id: PillId, drag_offset: CanvasPoint) {
        *self = Self::DraggingPill {
            pill_id,
            drag_offset,
        };
    }

    /// Drag offset, only while dragging
    pub fn drag_offset(&self) -> Option<CanvasPoint> {
        match self {
            Self::DraggingPill { drag_offset, .. } => Some(*drag_offset),
            _ => None,
        }
    }

    /// Phase given the current cursor and click threshold.
    pub fn phase(&self, cursor: CanvasPoint, click_threshold: f32) -> GesturePhase {
        match self {
            Self::Idle => GesturePhase::Idle,
            Self::CreatingPill { start, .. } => {
                if cursor.exceeds(*start, click_threshold) {
                    GesturePhase::CreatingPill
                } else {
                    GesturePhase::PendingClickOrDrag
                }
            }
            Self::PendingPillAction { .. } => GesturePhase::PendingPillAction,
            Self::DraggingPill { .. } => GesturePhase::DraggingPill,
        }
    }
}
