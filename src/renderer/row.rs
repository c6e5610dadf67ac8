// SPDX-License-Identifier: GPL-3.0-only

//! Row rendering for the keyboard popup.

use cosmic::Element;
use cosmic::iced::{Font, Length};
use cosmic::widget;

use crate::app_settings::{KEY_HEIGHT, KEY_SPACING};
use crate::keyboard::{Control, Key, KeyboardEvent, Palette};
use crate::renderer::key::{render_control, render_key};

/// Renders a row of character keys, each key taking an equal share of the width.
pub fn render_row<'a>(keys: &[Key], palette: Palette, font: Font) -> Element<'a, KeyboardEvent> {
    let mut row_widget = widget::row::row()
        .spacing(KEY_SPACING)
        .width(Length::Fill)
        .height(Length::Fixed(KEY_HEIGHT));

    for key in keys {
        row_widget = row_widget.push(render_key(*key, palette, font));
    }

    row_widget.into()
}

/// Renders the control row (delete, space, language, case, theme, enter).
pub fn render_control_row<'a>(
    controls: &[Control],
    palette: Palette,
    font: Font,
) -> Element<'a, KeyboardEvent> {
    let mut row_widget = widget::row::row()
        .spacing(KEY_SPACING)
        .width(Length::Fill)
        .height(Length::Fixed(KEY_HEIGHT));

    for control in controls {
        row_widget = row_widget.push(render_control(control, palette, font));
    }

    row_widget.into()
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::keyboard::{CONTROL_ROW, Language, ThemeName, key_rows};

    #[test]
    fn test_rows_render_for_all_languages() {
        let palette = ThemeName::Light.palette();
        for language in Language::ALL {
            for row in key_rows(language, true) {
                let _element = render_row(&row, palette, Font::DEFAULT);
            }
        }
    }

    #[test]
    fn test_empty_row_renders() {
        let _element = render_row(&[], ThemeName::Dark.palette(), Font::DEFAULT);
    }

    #[test]
    fn test_control_row_renders() {
        let _element = render_control_row(&CONTROL_ROW, ThemeName::Dark.palette(), Font::DEFAULT);
    }
}
