//! Persistence for the theme preference.
//!
//! The only state this client keeps across sessions is a single key-value
//! pair: the theme name under a `theme` file in the platform data directory.

use crate::models::ThemePreference;
use color_eyre::{eyre::WrapErr, Result};
use std::fs;
use std::path::{Path, PathBuf};

const THEME_KEY: &str = "theme";

/// Get the base data directory for the application.
pub fn get_data_dir() -> Result<PathBuf> {
    let base = dirs::data_dir().unwrap_or_else(|| PathBuf::from("."));
    let data_dir = base.join("doctruth");
    if !data_dir.exists() {
        fs::create_dir_all(&data_dir).wrap_err("Failed to create data directory")?;
    }
    Ok(data_dir)
}

/// Load the theme preference from the given directory.
///
/// Missing or unreadable values fall back to the default (dark); a corrupt
/// file is not an error the user can act on.
pub fn load_theme(dir: &Path) -> ThemePreference {
    match fs::read_to_string(dir.join(THEME_KEY)) {
        Ok(value) => ThemePreference::parse(&value),
        Err(_) => ThemePreference::default(),
    }
}

/// Persist the theme preference to the given directory.
pub fn save_theme(dir: &Path, theme: ThemePreference) -> Result<()> {
    let file_path = dir.join(THEME_KEY);
    fs::write(&file_path, theme.as_str())
        .wrap_err(format!("Failed to write theme to {:?}", file_path))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_missing_key_defaults_to_dark() {
        let dir = TempDir::new().unwrap();
        assert_eq!(load_theme(dir.path()), ThemePreference::Dark);
    }

    #[test]
    fn test_round_trip() {
        let dir = TempDir::new().unwrap();
        save_theme(dir.path(), ThemePreference::Light).unwrap();
        assert_eq!(load_theme(dir.path()), ThemePreference::Light);

        save_theme(dir.path(), ThemePreference::Dark).unwrap();
        assert_eq!(load_theme(dir.path()), ThemePreference::Dark);
    }

    #[test]
    fn test_corrupt_value_defaults_to_dark() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join(THEME_KEY), "mauve").unwrap();
        assert_eq!(load_theme(dir.path()), ThemePreference::Dark);
    }
}
