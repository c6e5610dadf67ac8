// SPDX-License-Identifier: GPL-3.0-only

//! Keyboard state: language, case mode, theme and the text buffer.
//!
//! One `KeyboardState` lives for as long as the popup is open. Every gesture
//! is applied synchronously through [`KeyboardState::dispatch`], which reports
//! what the display layer has to refresh.

use crate::app_settings::MAX_LENGTH;

use super::controls::{CONTROL_ROW, Control};
use super::layout::{Key, Language, key_rows};
use super::message::{KeyboardEvent, Transition};
use super::theme::{Palette, ThemeName};

/// Mutable state of an open keyboard popup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeyboardState {
    language: Language,
    uppercase: bool,
    theme: ThemeName,
    buffer: String,
}

impl Default for KeyboardState {
    fn default() -> Self {
        Self {
            language: Language::default(),
            uppercase: true,
            theme: ThemeName::default(),
            buffer: String::new(),
        }
    }
}

/// Everything the display layer needs to draw the popup.
#[derive(Debug, Clone, PartialEq)]
pub struct KeyboardView {
    pub language: Language,
    pub rows: Vec<Vec<Key>>,
    pub buffer: String,
    pub palette: Palette,
    pub controls: &'static [Control],
}

impl KeyboardState {
    /// Creates the state for a freshly opened popup.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn language(&self) -> Language {
        self.language
    }

    #[must_use]
    pub fn uppercase(&self) -> bool {
        self.uppercase
    }

    #[must_use]
    pub fn theme(&self) -> ThemeName {
        self.theme
    }

    #[must_use]
    pub fn buffer(&self) -> &str {
        &self.buffer
    }

    /// Number of characters in the buffer.
    #[must_use]
    pub fn len(&self) -> usize {
        self.buffer.chars().count()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.buffer.is_empty()
    }

    /// Returns `true` once the buffer holds `MAX_LENGTH` characters.
    #[must_use]
    pub fn is_full(&self) -> bool {
        self.len() >= MAX_LENGTH
    }

    /// Appends `c` unless the buffer is full. The caller passes the character
    /// already in the case shown on the key.
    pub fn press_key(&mut self, c: char) -> &str {
        if !self.is_full() {
            self.buffer.push(c);
        }
        &self.buffer
    }

    /// Appends a space, subject to the same capacity limit as any key.
    pub fn press_space(&mut self) -> &str {
        self.press_key(' ')
    }

    /// Removes the last character, if any.
    pub fn press_backspace(&mut self) -> &str {
        self.buffer.pop();
        &self.buffer
    }

    /// Advances to the next language: EN, FA, AR, NUM, then back to EN.
    pub fn toggle_language(&mut self) -> Language {
        self.language = self.language.next();
        self.language
    }

    /// Flips between uppercase and lowercase key labels.
    pub fn toggle_case(&mut self) -> bool {
        self.uppercase = !self.uppercase;
        self.uppercase
    }

    /// Flips between the light and dark themes.
    pub fn toggle_theme(&mut self) -> ThemeName {
        self.theme = self.theme.toggled();
        self.theme
    }

    /// Returns the trimmed buffer and clears it.
    pub fn submit(&mut self) -> String {
        let value = self.buffer.trim().to_string();
        self.buffer.clear();
        value
    }

    /// Rows of keys for the current language and case mode.
    #[must_use]
    pub fn key_rows(&self) -> Vec<Vec<Key>> {
        key_rows(self.language, self.uppercase)
    }

    #[must_use]
    pub fn palette(&self) -> Palette {
        self.theme.palette()
    }

    /// Builds the rendering snapshot for the current state.
    #[must_use]
    pub fn view(&self) -> KeyboardView {
        KeyboardView {
            language: self.language,
            rows: self.key_rows(),
            buffer: self.buffer.clone(),
            palette: self.palette(),
            controls: &CONTROL_ROW,
        }
    }

    /// Applies a gesture and reports what must be refreshed.
    pub fn dispatch(&mut self, event: KeyboardEvent) -> Transition {
        tracing::debug!("Keyboard event: {:?}", event);

        match event {
            KeyboardEvent::Key(c) => self.edit(|state| {
                state.press_key(c);
            }),
            KeyboardEvent::Space => self.edit(|state| {
                state.press_space();
            }),
            KeyboardEvent::Backspace => self.edit(|state| {
                state.press_backspace();
            }),
            KeyboardEvent::CycleLanguage => {
                let language = self.toggle_language();
                tracing::debug!("Switched layout to {}", language);
                Transition::Rebuild
            }
            KeyboardEvent::ToggleCase => {
                // Rebuild even for layouts without case.
                self.toggle_case();
                Transition::Rebuild
            }
            KeyboardEvent::CycleTheme => {
                let theme = self.toggle_theme();
                tracing::debug!("Switched theme to {}", theme.as_str());
                Transition::Restyle
            }
            KeyboardEvent::Submit => Transition::Submitted(self.submit()),
            KeyboardEvent::Close => Transition::Dismissed,
        }
    }

    fn edit(&mut self, f: impl FnOnce(&mut Self)) -> Transition {
        let before = self.buffer.clone();
        f(self);
        if self.buffer == before {
            Transition::Ignored
        } else {
            Transition::Edited
        }
    }
}

// ============================================================================
// Tests
// ============================================================================
