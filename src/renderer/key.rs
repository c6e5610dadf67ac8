// SPDX-License-Identifier: GPL-3.0-only

//! Key rendering for the keyboard popup.
//!
//! Every pressable element (character keys, controls, the close and open
//! buttons) is a glow button: a rounded container painted from the palette
//! and wrapped in a mouse area that emits a message on press.

use cosmic::Element;
use cosmic::iced::{Alignment, Font, Length};
use cosmic::widget::{self, container, mouse_area};

use crate::app_settings::{CONTROL_FONT_SIZE, KEY_FONT_SIZE, KEY_HEIGHT};
use crate::keyboard::{Control, Key, KeyboardEvent, Palette};
use crate::renderer::theme;

/// Renders a rounded, glowing button that emits `on_press` when clicked.
///
/// # Arguments
///
/// * `label` - Text shown centered on the button
/// * `font` - Font used for the label
/// * `font_size` - Label size in pixels
/// * `palette` - Colors for the face, label and glow
/// * `width` / `height` - Button size
/// * `on_press` - Message emitted on press
pub fn glow_button<'a, Message: Clone + 'a>(
    label: impl Into<String>,
    font: Font,
    font_size: u16,
    palette: Palette,
    width: Length,
    height: Length,
    on_press: Message,
) -> Element<'a, Message> {
    let text = widget::text::body(label.into()).font(font).size(font_size);

    let face = container(text)
        .width(width)
        .height(height)
        .align_x(Alignment::Center)
        .align_y(Alignment::Center)
        .class(theme::glow_key(palette));

    mouse_area(face).on_press(on_press).into()
}

/// Renders a character key. Pressing it inserts its label.
pub fn render_key<'a>(key: Key, palette: Palette, font: Font) -> Element<'a, KeyboardEvent> {
    glow_button(
        key.label.to_string(),
        font,
        KEY_FONT_SIZE,
        palette,
        Length::Fill,
        Length::Fixed(KEY_HEIGHT),
        KeyboardEvent::Key(key.label),
    )
}

/// Renders a control key, sized by its relative width.
pub fn render_control<'a>(
    control: &Control,
    palette: Palette,
    font: Font,
) -> Element<'a, KeyboardEvent> {
    glow_button(
        control.label,
        font,
        CONTROL_FONT_SIZE,
        palette,
        Length::FillPortion(control.stretch),
        Length::Fixed(KEY_HEIGHT),
        control.event,
    )
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::keyboard::{CONTROL_ROW, ThemeName};

    #[test]
    fn test_render_key_builds_for_every_script() {
        let palette = ThemeName::Light.palette();
        for label in ['Q', '۱', 'ض', '{'] {
            let _element = render_key(Key { label }, palette, Font::DEFAULT);
        }
    }

    #[test]
    fn test_render_every_control() {
        let palette = ThemeName::Dark.palette();
        for control in &CONTROL_ROW {
            let _element = render_control(control, palette, Font::DEFAULT);
        }
    }

    #[test]
    fn test_glow_button_with_custom_message() {
        #[derive(Debug, Clone)]
        enum HostMessage {
            Open,
        }

        let _element: Element<'_, HostMessage> = glow_button(
            "Open",
            Font::DEFAULT,
            KEY_FONT_SIZE,
            ThemeName::Light.palette(),
            Length::Fixed(200.0),
            Length::Fixed(50.0),
            HostMessage::Open,
        );
    }
}
