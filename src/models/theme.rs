use serde::{Deserialize, Serialize};

/// The persisted theme preference.
///
/// Stored as the plain text `dark` or `light` under a single key; anything
/// else (including a missing key) falls back to [`ThemePreference::Dark`].
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum ThemePreference {
    #[default]
    Dark,
    Light,
}

impl ThemePreference {
    pub fn as_str(&self) -> &'static str {
        match self {
            ThemePreference::Dark => "dark",
            ThemePreference::Light => "light",
        }
    }

    /// Parse a persisted value, defaulting to dark on anything unexpected.
    pub fn parse(value: &str) -> Self {
        match value.trim() {
            "light" => ThemePreference::Light,
            _ => ThemePreference::Dark,
        }
    }

    pub fn toggled(&self) -> Self {
        match self {
            ThemePreference::Dark => ThemePreference::Light,
            ThemePreference::Light => ThemePreference::Dark,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_known_values() {
        assert_eq!(ThemePreference::parse("dark"), ThemePreference::Dark);
        assert_eq!(ThemePreference::parse("light"), ThemePreference::Light);
        assert_eq!(ThemePreference::parse(" light\n"), ThemePreference::Light);
    }

    #[test]
    fn test_parse_garbage_defaults_to_dark() {
        assert_eq!(ThemePreference::parse(""), ThemePreference::Dark);
        assert_eq!(ThemePreference::parse("solarized"), ThemePreference::Dark);
    }

    #[test]
    fn test_toggle_twice_is_identity() {
        let theme = ThemePreference::Light;
        assert_eq!(theme.toggled().toggled(), theme);
        assert_eq!(ThemePreference::Dark.toggled(), ThemePreference::Light);
    }

    #[test]
    fn test_as_str_round_trips() {
        for theme in [ThemePreference::Dark, ThemePreference::Light] {
            assert_eq!(ThemePreference::parse(theme.as_str()), theme);
        }
    }
}
