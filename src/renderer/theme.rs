// SPDX-License-Identifier: GPL-3.0-only

//! Container styles built from the keyboard palette.
//!
//! The popup ignores the desktop theme and paints itself from the active
//! [`Palette`], so every style here is a custom container class capturing
//! the palette by value.

use cosmic::iced::{Background, Border, Color};
use cosmic::widget::container;

use crate::app_settings::{GLOW_WIDTH, KEY_RADIUS};
use crate::keyboard::Palette;

/// Style for a key face: button background, label color, and a glow halo.
pub fn glow_key(palette: Palette) -> cosmic::style::Container {
    cosmic::style::Container::custom(move |_theme| container::Style {
        background: Some(Background::Color(palette.button_bg)),
        text_color: Some(palette.button_text),
        border: Border {
            color: palette.glow,
            width: GLOW_WIDTH,
            radius: KEY_RADIUS.into(),
        },
        ..Default::default()
    })
}

/// Style for the text field showing the buffer.
pub fn input_field(palette: Palette) -> cosmic::style::Container {
    cosmic::style::Container::custom(move |_theme| container::Style {
        background: Some(Background::Color(palette.input_bg)),
        text_color: Some(palette.button_text),
        border: Border {
            color: Color::TRANSPARENT,
            width: 0.0,
            radius: KEY_RADIUS.into(),
        },
        ..Default::default()
    })
}

/// Style for the popup surface behind the keys.
pub fn popup_background(palette: Palette) -> cosmic::style::Container {
    cosmic::style::Container::custom(move |_theme| container::Style {
        background: Some(Background::Color(palette.background)),
        border: Border {
            color: Color::TRANSPARENT,
            width: 0.0,
            radius: (KEY_RADIUS * 2.0).into(),
        },
        ..Default::default()
    })
}

/// Style for the host window behind the open button.
pub fn host_background() -> cosmic::style::Container {
    cosmic::style::Container::custom(|_theme| container::Style {
        background: Some(Background::Color(Color::from_rgba(1.0, 1.0, 1.0, 0.1))),
        ..Default::default()
    })
}
