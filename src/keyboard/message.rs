// SPDX-License-Identifier: GPL-3.0-only

//! Gesture and outcome types exchanged between the keyboard core and the
//! display layer.

/// Gestures the display layer delivers to [`KeyboardState`](super::KeyboardState).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyboardEvent {
    /// A character key was pressed. Carries the rendered label.
    Key(char),
    /// The space control was pressed.
    Space,
    /// The delete control was pressed.
    Backspace,
    /// Cycle to the next layout language.
    CycleLanguage,
    /// Flip between uppercase and lowercase labels.
    ToggleCase,
    /// Flip between the light and dark themes.
    CycleTheme,
    /// Submit the buffer and close the popup.
    Submit,
    /// Close the popup without submitting.
    Close,
}

/// What the display layer has to do after an event was dispatched.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Transition {
    /// The buffer changed; only the text field needs refreshing.
    Edited,
    /// The event had no effect (full buffer, or backspace on empty).
    Ignored,
    /// Key labels changed; rebuild every row.
    Rebuild,
    /// The theme changed; re-apply colors to every element.
    Restyle,
    /// The buffer was submitted. Carries the trimmed value; the popup closes.
    Submitted(String),
    /// The popup should close without submitting.
    Dismissed,
}

impl Transition {
    /// Returns `true` if the popup must close after this transition.
    #[must_use]
    pub fn closes_popup(&self) -> bool {
        matches!(self, Transition::Submitted(_) | Transition::Dismissed)
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_only_submit_and_dismiss_close() {
        assert!(Transition::Submitted("hi".to_string()).closes_popup());
        assert!(Transition::Dismissed.closes_popup());

        for transition in [
            Transition::Edited,
            Transition::Ignored,
            Transition::Rebuild,
            Transition::Restyle,
        ] {
            assert!(
                !transition.closes_popup(),
                "{:?} should keep the popup open",
                transition
            );
        }
    }

    #[test]
    fn test_event_clone_and_eq() {
        let key = KeyboardEvent::Key('Q');
        assert_eq!(key, key.clone());
        assert_ne!(key, KeyboardEvent::Key('q'));
        assert_ne!(KeyboardEvent::Submit, KeyboardEvent::Close);
    }
}
