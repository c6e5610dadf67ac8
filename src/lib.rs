// SPDX-License-Identifier: GPL-3.0-only

//! Popboard - A multi-language popup soft keyboard for COSMIC
//!
//! A host window with a single button opens a keyboard popup offering Latin,
//! Persian, Arabic and numeric/symbol layouts, light and dark themes, case
//! toggling, and a text field limited to 20 characters.
//!
//! # Architecture
//!
//! The crate is split into a toolkit-independent core and a libcosmic display
//! layer:
//!
//! 1. **Keyboard core** (`keyboard`): layout and theme tables, the control row,
//!    and `KeyboardState`, which applies every gesture synchronously and
//!    reports what needs redrawing.
//!
//! 2. **Display layer** (`renderer`, `app`): widgets built from the state's
//!    rendering snapshot, and the COSMIC application hosting the popup.
//!
//! # Modules
//!
//! - `app`: Host application model and COSMIC Application trait implementation
//! - `app_settings`: Centralized application constants
//! - `config`: Startup options passed to the host application
//! - `font`: Bundled font lookup with system-default fallback
//! - `i18n`: Localization support using fluent translations
//! - `keyboard`: Layouts, themes, controls and keyboard state
//! - `renderer`: Popup rendering with libcosmic widgets

pub mod app;
pub mod app_settings;
pub mod config;
pub mod font;
pub mod i18n;
pub mod keyboard;
pub mod renderer;

// Re-export the fl! macro for localization
pub use crate::i18n::LANGUAGE_LOADER;

// ============================================================================
// Integration Tests
// ============================================================================
