//! Unit tests for settings_watcher module.

use pillboard::settings_watcher::{SettingsWatcher, default_settings_path};
use std::fs;
use std::io::Write;
use tempfile::tempdir;

#[test]
fn test_watcher_creation() {
    let dir = tempdir().unwrap();
    let settings_path = dir.path().join("settings.json");
    fs::write(&settings_path, "{}").unwrap();

    let watcher = SettingsWatcher::new(settings_path.clone()).unwrap();
    assert_eq!(watcher.path(), settings_path.as_path());
}

#[test]
fn test_watcher_allows_missing_file() {
    let dir = tempdir().unwrap();
    let watcher = SettingsWatcher::new(dir.path().join("settings.json"));
    assert!(watcher.is_ok());
}

#[test]
fn test_watcher_requires_parent_dir() {
    let dir = tempdir().unwrap();
    let watcher = SettingsWatcher::new(dir.path().join("missing").join("settings.json"));
    assert!(watcher.is_err());
}

#[test]
fn test_poll_without_changes() {
    let dir = tempdir().unwrap();
    let mut watcher = SettingsWatcher::new(dir.path().join("settings.json")).unwrap();
    // Nothing has touched the file since the watch started
    assert_eq!(watcher.poll(), None);
}

#[test]
fn test_default_path_ends_in_app_dir() {
    if let Some(path) = default_settings_path() {
        assert!(path.ends_with("pillboard/settings.json"));
    }
}

/// File watcher event delivery is timing-dependent and platform-specific, so
/// this only checks that polling after a write doesn't fail.
#[test]
#[ignore]
fn test_file_modification_detection() {
    let dir = tempdir().unwrap();
    let settings_path = dir.path().join("settings.json");
    fs::write(&settings_path, "{}").unwrap();

    let mut watcher = SettingsWatcher::new(settings_path.clone()).unwrap();

    let mut file = fs::OpenOptions::new()
        .write(true)
        .truncate(true)
        .open(&settings_path)
        .unwrap();
    writeln!(file, "{{\"corner_radius\": 8}}").unwrap();
    file.sync_all().unwrap();

    std::thread::sleep(std::time::Duration::from_millis(200));
    let _event = watcher.poll();
}
