//! Pillboard - draw rounded rectangles ("pills") on a canvas, split them
//! with crosshair clicks, and drag them around.
//!
//! The geometry lives in [`partition`] and the gesture state machine in
//! [`input`] operating on a [`board::Board`]; both are UI-independent. The
//! [`app`] and [`render`] modules host the board in a gpui window.

pub mod app;
pub mod board;
pub mod color;
pub mod constants;
pub mod error;
pub mod ids;
pub mod input;
pub mod logging;
pub mod partition;
pub mod perf;
pub mod render;
pub mod settings;
pub mod settings_watcher;
pub mod spatial_index;
pub mod types;
