// SPDX-License-Identifier: GPL-3.0-only

//! Keyboard popup renderer for Popboard.
//!
//! This module turns a [`KeyboardView`](crate::keyboard::KeyboardView) snapshot
//! into libcosmic widgets. Every rendered element emits
//! [`KeyboardEvent`](crate::keyboard::KeyboardEvent) messages, which the host
//! application maps into its own message type and dispatches to the
//! keyboard state.
//!
//! # Architecture
//!
//! - **theme**: Container styles painted from the keyboard palette.
//! - **key**: Glow buttons for character keys and controls.
//! - **row**: Horizontal rows of keys and the control row.
//! - **panel**: The popup: buffer field, key rows, control row, close button.
//!
//! # Usage
//!
//! ```rust,ignore
//! use popboard::keyboard::KeyboardState;
//! use popboard::renderer::render_popup;
//!
//! let state = KeyboardState::new();
//! let element = render_popup(&state.view(), "Close".into(), font, 720.0)
//!     .map(Message::Keyboard);
//! ```

pub mod key;
pub mod panel;
pub mod row;
pub mod theme;

pub use key::{glow_button, render_control, render_key};
pub use panel::{render_input, render_keys, render_popup};
pub use row::{render_control_row, render_row};
