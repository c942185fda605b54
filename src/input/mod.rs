//! Pointer input handling for the canvas.
//!
//! This module turns the raw pointer stream into gestures against the
//! [`Board`](crate::board::Board): drawing new pills, splitting pills with a
//! click, and dragging pills around.
//!
//! ## Architecture
//!
//! The input system uses an explicit state machine (`InputState`) to track
//! the current gesture. Exactly one gesture is active at a time and pointer up
//! always resolves it.
//!
//! ## Modules
//!
//! - `state` - Input state machine enum and helper methods
//! - `pointer_down` - Gesture start (empty canvas vs. pill)
//! - `pointer_move` - Cursor tracking, drag promotion and relocation
//! - `pointer_up` - Gesture resolution (create, split, drag commit)
//! - `coords` - Window/canvas coordinate conversion for the front-end

pub mod coords;
mod pointer_down;
mod pointer_move;
mod pointer_up;
mod state;

pub use state::{GestureOutcome, GesturePhase, InputState};
