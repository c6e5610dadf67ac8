// SPDX-License-Identifier: GPL-3.0-only

//! Centralized application settings and constants.

/// Application ID in RDNN (reverse domain name notation) format.
pub const APP_ID: &str = "io.github.popboard.Popboard";

/// Maximum number of characters the keyboard buffer accepts.
pub const MAX_LENGTH: usize = 20;

/// Default host window width in pixels.
pub const DEFAULT_WIDTH: f32 = 800.0;

/// Default host window height in pixels.
pub const DEFAULT_HEIGHT: f32 = 600.0;

/// Minimum host window width in pixels.
pub const MIN_WIDTH: f32 = 400.0;

/// Minimum host window height in pixels.
pub const MIN_HEIGHT: f32 = 300.0;

/// Fraction of the host window width taken by the keyboard popup.
pub const POPUP_WIDTH_RATIO: f32 = 0.9;

/// Keyboard popup height in pixels.
pub const POPUP_HEIGHT: f32 = 450.0;

/// Outer padding and row spacing inside the popup.
pub const POPUP_PADDING: u16 = 5;

/// Height of a key row (character keys and the control row).
pub const KEY_HEIGHT: f32 = 40.0;

/// Spacing between keys in a row.
pub const KEY_SPACING: u16 = 2;

/// Corner radius of keys and of the buffer field.
pub const KEY_RADIUS: f32 = 5.0;

/// Width of the glow halo drawn around each key.
pub const GLOW_WIDTH: f32 = 2.0;

/// Font size for character keys.
pub const KEY_FONT_SIZE: u16 = 16;

/// Font size for control-row labels.
pub const CONTROL_FONT_SIZE: u16 = 14;

/// Height of the buffer field.
pub const INPUT_HEIGHT: f32 = 50.0;

/// Size of the host window's open button.
pub const OPEN_BUTTON_SIZE: (f32, f32) = (200.0, 50.0);

/// Size of the popup's close button.
pub const CLOSE_BUTTON_SIZE: (f32, f32) = (120.0, 50.0);

/// Directory (relative to the executable) searched for the bundled font.
pub const FONT_DIR: &str = "fonts";

/// File name of the bundled font covering Persian and Arabic glyphs.
pub const FONT_FILE: &str = "Vazir.ttf";

/// Family name of the bundled font once loaded.
pub const FONT_FAMILY: &str = "Vazir";
