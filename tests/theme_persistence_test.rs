//! Theme preference persistence across app instances.

use tempfile::TempDir;

use doctruth::app::App;
use doctruth::models::ThemePreference;
use doctruth::storage;

#[test]
fn test_defaults_to_dark_when_nothing_persisted() {
    let dir = TempDir::new().unwrap();
    let app = App::new(dir.path().to_path_buf());
    assert_eq!(app.theme, ThemePreference::Dark);
}

#[test]
fn test_toggle_persists_across_instances() {
    let dir = TempDir::new().unwrap();

    let mut app = App::new(dir.path().to_path_buf());
    app.toggle_theme();
    assert_eq!(app.theme, ThemePreference::Light);
    drop(app);

    let app = App::new(dir.path().to_path_buf());
    assert_eq!(app.theme, ThemePreference::Light);
}

#[test]
fn test_toggle_twice_restores_and_persists_original() {
    let dir = TempDir::new().unwrap();

    let mut app = App::new(dir.path().to_path_buf());
    let original = app.theme;
    app.toggle_theme();
    app.toggle_theme();
    assert_eq!(app.theme, original);

    // The persisted value matches the restored one
    assert_eq!(storage::load_theme(dir.path()), original);
}

#[test]
fn test_corrupt_persisted_value_falls_back_to_dark() {
    let dir = TempDir::new().unwrap();
    std::fs::write(dir.path().join("theme"), "neon").unwrap();

    let app = App::new(dir.path().to_path_buf());
    assert_eq!(app.theme, ThemePreference::Dark);
}
