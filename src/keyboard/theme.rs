// SPDX-License-Identifier: GPL-3.0-only

//! Theme table for the keyboard popup.
//!
//! Each theme is a fixed palette of semi-transparent colors applied uniformly
//! to the popup background, the keys, their labels and glow, and the buffer
//! field.

use cosmic::iced::Color;

/// Named keyboard themes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ThemeName {
    #[default]
    Light,
    Dark,
}

impl ThemeName {
    /// Returns the other theme.
    #[must_use]
    pub fn toggled(self) -> Self {
        match self {
            ThemeName::Light => ThemeName::Dark,
            ThemeName::Dark => ThemeName::Light,
        }
    }

    /// Returns the lowercase theme name.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            ThemeName::Light => "light",
            ThemeName::Dark => "dark",
        }
    }

    /// Returns the fixed palette for this theme.
    #[must_use]
    pub fn palette(self) -> Palette {
        match self {
            ThemeName::Light => Palette {
                background: Color::from_rgba(1.0, 1.0, 1.0, 0.3),
                button_bg: Color::from_rgba(0.9, 0.9, 0.9, 0.5),
                button_text: Color::from_rgba(0.0, 0.0, 0.0, 1.0),
                input_bg: Color::from_rgba(0.95, 0.95, 0.95, 0.7),
                glow: Color::from_rgba(0.8, 0.8, 1.0, 0.3),
            },
            ThemeName::Dark => Palette {
                background: Color::from_rgba(0.2, 0.2, 0.2, 0.3),
                button_bg: Color::from_rgba(0.3, 0.3, 0.3, 0.5),
                button_text: Color::from_rgba(1.0, 1.0, 1.0, 1.0),
                input_bg: Color::from_rgba(0.25, 0.25, 0.25, 0.7),
                glow: Color::from_rgba(0.4, 0.4, 0.8, 0.3),
            },
        }
    }
}

/// Colors used to draw the keyboard.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Palette {
    /// Popup background.
    pub background: Color,
    /// Key background.
    pub button_bg: Color,
    /// Key label color, also used for the buffer text.
    pub button_text: Color,
    /// Buffer field background.
    pub input_bg: Color,
    /// Halo drawn around each key.
    pub glow: Color,
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn brightness(color: Color) -> f32 {
        (color.r + color.g + color.b) / 3.0
    }

    #[test]
    fn test_toggle_is_an_involution() {
        for theme in [ThemeName::Light, ThemeName::Dark] {
            assert_eq!(theme.toggled().toggled(), theme);
            assert_ne!(theme.toggled(), theme);
        }
        assert_eq!(ThemeName::default(), ThemeName::Light);
    }

    #[test]
    fn test_light_palette_values() {
        let palette = ThemeName::Light.palette();
        assert_eq!(palette.background, Color::from_rgba(1.0, 1.0, 1.0, 0.3));
        assert_eq!(palette.button_text, Color::BLACK);
        assert_eq!(palette.input_bg.a, 0.7);
    }

    #[test]
    fn test_dark_palette_is_darker_with_light_text() {
        let light = ThemeName::Light.palette();
        let dark = ThemeName::Dark.palette();

        assert!(
            brightness(dark.button_bg) < brightness(light.button_bg),
            "Dark keys should be darker than light keys"
        );
        assert_eq!(dark.button_text, Color::WHITE);
    }

    #[test]
    fn test_backgrounds_are_translucent() {
        for theme in [ThemeName::Light, ThemeName::Dark] {
            let palette = theme.palette();
            assert!(
                palette.background.a < 1.0 && palette.button_bg.a < 1.0,
                "{} theme backgrounds should be semi-transparent",
                theme.as_str()
            );
        }
    }
}
