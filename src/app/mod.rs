//! Application module - the gpui view that hosts the board.
//!
//! - `state` - The PillboardApp struct
//! - `lifecycle` - Construction, window opening and settings hot-reload
//! - `handlers` - Window pointer events translated into board gestures

mod handlers;
mod lifecycle;
mod state;

pub use lifecycle::open_main_window;
pub use state::PillboardApp;
