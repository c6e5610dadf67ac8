// SPDX-License-Identifier: GPL-3.0-only

//! Popup rendering for the keyboard.
//!
//! The popup is a vertical stack:
//!
//! ```text
//! +--------------------------------+
//! |          buffer field          |
//! +--------------------------------+
//! |  key row 0                     |
//! |  key row 1                     |
//! |  key row 2                     |
//! |  key row 3                     |
//! |  del  space  lang case theme ⏎ |
//! +--------------------------------+
//! |            [Close]             |
//! +--------------------------------+
//! ```
//!
//! The whole tree is rebuilt from a [`KeyboardView`] on every change.

use cosmic::Element;
use cosmic::iced::{Alignment, Font, Length, Padding};
use cosmic::widget::{self, container};

use crate::app_settings::{
    CLOSE_BUTTON_SIZE, CONTROL_FONT_SIZE, INPUT_HEIGHT, KEY_FONT_SIZE, POPUP_HEIGHT,
    POPUP_PADDING,
};
use crate::keyboard::{KeyboardEvent, KeyboardView, Palette};
use crate::renderer::key::glow_button;
use crate::renderer::row::{render_control_row, render_row};
use crate::renderer::theme;

/// Renders the field showing the text typed so far.
pub fn render_input<'a>(buffer: &str, palette: Palette, font: Font) -> Element<'a, KeyboardEvent> {
    let text = widget::text::body(buffer.to_string())
        .font(font)
        .size(KEY_FONT_SIZE);

    container(text)
        .width(Length::Fill)
        .height(Length::Fixed(INPUT_HEIGHT))
        .padding(Padding::from(10.0_f32))
        .align_x(Alignment::Center)
        .align_y(Alignment::Center)
        .class(theme::input_field(palette))
        .into()
}

/// Renders the key rows followed by the control row.
pub fn render_keys<'a>(view: &KeyboardView, font: Font) -> Element<'a, KeyboardEvent> {
    let mut column = widget::column::column()
        .spacing(POPUP_PADDING)
        .padding(Padding::from(f32::from(POPUP_PADDING)));

    for row in &view.rows {
        column = column.push(render_row(row, view.palette, font));
    }

    column
        .push(render_control_row(view.controls, view.palette, font))
        .into()
}

/// Renders the complete popup.
///
/// # Arguments
///
/// * `view` - Snapshot of the keyboard state
/// * `close_label` - Localized label for the close button
/// * `font` - Font for all keyboard text
/// * `width` - Popup width in pixels
pub fn render_popup<'a>(
    view: &KeyboardView,
    close_label: String,
    font: Font,
    width: f32,
) -> Element<'a, KeyboardEvent> {
    let (close_width, close_height) = CLOSE_BUTTON_SIZE;
    let close_button = glow_button(
        close_label,
        font,
        CONTROL_FONT_SIZE,
        view.palette,
        Length::Fixed(close_width),
        Length::Fixed(close_height),
        KeyboardEvent::Close,
    );

    let content = widget::column::column()
        .push(render_input(&view.buffer, view.palette, font))
        .push(render_keys(view, font))
        .push(container(close_button).center_x(Length::Fill))
        .spacing(POPUP_PADDING)
        .padding(Padding::from(f32::from(POPUP_PADDING)));

    container(content)
        .width(Length::Fixed(width))
        .height(Length::Fixed(POPUP_HEIGHT))
        .class(theme::popup_background(view.palette))
        .into()
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::keyboard::{KeyboardState, Language};

    #[test]
    fn test_popup_renders_for_every_language_and_theme() {
        let mut state = KeyboardState::new();
        for _ in Language::ALL {
            for _ in 0..2 {
                let _element = render_popup(&state.view(), "Close".to_string(), Font::DEFAULT, 720.0);
                state.toggle_theme();
            }
            state.toggle_language();
        }
    }

    #[test]
    fn test_input_renders_full_buffer() {
        let mut state = KeyboardState::new();
        for c in "ضصثقفغعهخحشسیبلاتنمظ".chars() {
            state.press_key(c);
        }
        let _element = render_input(state.buffer(), state.palette(), Font::DEFAULT);
    }
}
