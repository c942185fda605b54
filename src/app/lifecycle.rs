//! Application lifecycle - window creation and settings hot-reload.

use super::PillboardApp;
use crate::board::Board;
use crate::constants::DEFAULT_WINDOW_SIZE;
use crate::perf::PerfMonitor;
use crate::settings::Settings;
use crate::settings_watcher::{SettingsEvent, SettingsWatcher, default_settings_path};
use anyhow::{Context as _, Result};
use gpui::*;
use tracing::{debug, error, info, warn};

impl PillboardApp {
    pub fn new(settings: Settings, _cx: &mut Context<Self>) -> Self {
        Self {
            board: Board::new(settings),
            view_offset: Point::default(),
            settings_watcher: start_settings_watcher(),
            perf: PerfMonitor::new(),
        }
    }

    /// Check for settings file changes and apply them to the board.
    ///
    /// Called at the start of each pointer event, so a reload never lands in
    /// the middle of a state transition.
    pub fn check_settings_reload(&mut self, cx: &mut Context<Self>) {
        let Some(ref mut watcher) = self.settings_watcher else {
            return;
        };
        let Some(event) = watcher.poll() else {
            return;
        };

        match event {
            SettingsEvent::Modified | SettingsEvent::Created => {
                match Settings::load_from(watcher.path()) {
                    Ok(settings) => {
                        info!("Settings file changed, reloading");
                        self.board.set_settings(settings);
                        cx.notify();
                    }
                    Err(e) => {
                        warn!(error = %e, "Ignoring invalid settings file, keeping current values");
                    }
                }
            }
            SettingsEvent::Deleted => {
                warn!("Settings file deleted, reverting to defaults");
                self.board.set_settings(Settings::default());
                cx.notify();
            }
            SettingsEvent::Error(e) => {
                error!("Settings watch error: {}", e);
            }
        }
    }
}

/// Watch the default settings file, writing the defaults there on first run.
fn start_settings_watcher() -> Option<SettingsWatcher> {
    let path = default_settings_path()?;
    if !path.exists() {
        if let Err(e) = Settings::default().save_to(&path) {
            warn!(error = %e, "Cannot write default settings, settings hot-reload disabled");
            return None;
        }
        info!(path = %path.display(), "Wrote default settings");
    }
    match SettingsWatcher::new(path) {
        Ok(watcher) => Some(watcher),
        Err(e) => {
            debug!(error = %e, "Settings hot-reload disabled");
            None
        }
    }
}

/// Open the main canvas window.
pub fn open_main_window(cx: &mut App, settings: Settings) -> Result<WindowHandle<PillboardApp>> {
    let (width, height) = DEFAULT_WINDOW_SIZE;
    let bounds = Bounds::centered(None, size(px(width), px(height)), cx);

    cx.open_window(
        WindowOptions {
            window_bounds: Some(WindowBounds::Windowed(bounds)),
            titlebar: Some(TitlebarOptions {
                title: Some("Pillboard".into()),
                ..Default::default()
            }),
            ..Default::default()
        },
        |_window, cx| cx.new(|cx| PillboardApp::new(settings, cx)),
    )
    .context("failed to open main window")
}
