//! Color palettes for the two supported themes.
//!
//! The palette in use follows the persisted [`ThemePreference`] and is
//! resolved once per frame; individual render functions never branch on the
//! theme themselves.

use ratatui::style::Color;

use crate::models::ThemePreference;

/// Resolved colors for the active theme.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    /// Screen background
    pub bg: Color,
    /// Default text
    pub text: Color,
    /// Borders and separators
    pub border: Color,
    /// Highlights, focused borders, cursor block
    pub accent: Color,
    /// App title
    pub header: Color,
    /// Secondary text (hints, placeholders, dates)
    pub dim: Color,
    /// User message prefix
    pub user: Color,
    /// Assistant message prefix
    pub assistant: Color,
    /// Error notices
    pub error: Color,
    /// Info notices and confirmations
    pub success: Color,
}

impl Palette {
    pub const fn dark() -> Self {
        Self {
            bg: Color::Rgb(12, 12, 18),
            text: Color::White,
            border: Color::DarkGray,
            accent: Color::LightBlue,
            header: Color::LightBlue,
            dim: Color::DarkGray,
            user: Color::LightBlue,
            assistant: Color::LightGreen,
            error: Color::LightRed,
            success: Color::LightGreen,
        }
    }

    pub const fn light() -> Self {
        Self {
            bg: Color::Rgb(245, 245, 240),
            text: Color::Black,
            border: Color::Gray,
            accent: Color::Blue,
            header: Color::Blue,
            dim: Color::Gray,
            user: Color::Blue,
            assistant: Color::Rgb(0, 110, 60),
            error: Color::Red,
            success: Color::Rgb(0, 110, 60),
        }
    }

    pub fn for_preference(theme: ThemePreference) -> Self {
        match theme {
            ThemePreference::Dark => Self::dark(),
            ThemePreference::Light => Self::light(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_palettes_differ() {
        assert_ne!(Palette::dark(), Palette::light());
    }

    #[test]
    fn test_for_preference_matches() {
        assert_eq!(
            Palette::for_preference(ThemePreference::Dark),
            Palette::dark()
        );
        assert_eq!(
            Palette::for_preference(ThemePreference::Light),
            Palette::light()
        );
    }
}
