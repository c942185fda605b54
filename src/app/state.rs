//! Application state struct.

use crate::board::Board;
use crate::perf::PerfMonitor;
use crate::settings_watcher::SettingsWatcher;
use gpui::{Pixels, Point};

/// Root view of the window.
pub struct PillboardApp {
    /// Pills and the gesture state machine
    pub board: Board,
    /// Pan offset added to canvas coordinates when painting
    pub view_offset: Point<Pixels>,
    /// Hot-reload source; `None` if the config dir could not be watched
    pub settings_watcher: Option<SettingsWatcher>,
    pub perf: PerfMonitor,
}
