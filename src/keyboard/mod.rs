// SPDX-License-Identifier: GPL-3.0-only

//! Toolkit-independent keyboard core.
//!
//! This module holds the static tables (layouts, themes, control row) and the
//! single mutable [`KeyboardState`]. The display layer forwards each user
//! gesture as a [`KeyboardEvent`] and redraws from [`KeyboardView`].
//!
//! ```rust,ignore
//! use popboard::keyboard::{KeyboardEvent, KeyboardState, Transition};
//!
//! let mut state = KeyboardState::new();
//! state.dispatch(KeyboardEvent::Key('Q'));
//! state.dispatch(KeyboardEvent::CycleLanguage);
//!
//! if let Transition::Submitted(text) = state.dispatch(KeyboardEvent::Submit) {
//!     println!("Submitted: {}", text);
//! }
//! ```

pub mod controls;
pub mod layout;
pub mod message;
pub mod state;
pub mod theme;

pub use controls::{CONTROL_ROW, Control};
pub use layout::{Key, Language, ROW_COUNT, key_rows};
pub use message::{KeyboardEvent, Transition};
pub use state::{KeyboardState, KeyboardView};
pub use theme::{Palette, ThemeName};
