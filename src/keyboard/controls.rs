// SPDX-License-Identifier: GPL-3.0-only

//! The fixed row of non-character controls shown under the key rows.

use super::message::KeyboardEvent;

/// A control key: its label, the event it sends, and its relative width.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Control {
    pub label: &'static str,
    pub event: KeyboardEvent,
    pub stretch: u16,
}

/// Controls in display order.
pub const CONTROL_ROW: [Control; 6] = [
    Control {
        label: "del",
        event: KeyboardEvent::Backspace,
        stretch: 1,
    },
    Control {
        label: "space",
        event: KeyboardEvent::Space,
        stretch: 2,
    },
    Control {
        label: "EN/FA/AR/NUM",
        event: KeyboardEvent::CycleLanguage,
        stretch: 1,
    },
    Control {
        label: "ABC/abc",
        event: KeyboardEvent::ToggleCase,
        stretch: 1,
    },
    Control {
        label: "Theme",
        event: KeyboardEvent::CycleTheme,
        stretch: 1,
    },
    Control {
        label: "Enter",
        event: KeyboardEvent::Submit,
        stretch: 1,
    },
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_control_row_order() {
        let labels: Vec<&str> = CONTROL_ROW.iter().map(|c| c.label).collect();
        assert_eq!(
            labels,
            vec!["del", "space", "EN/FA/AR/NUM", "ABC/abc", "Theme", "Enter"]
        );
    }

    #[test]
    fn test_control_row_events() {
        let events: Vec<KeyboardEvent> = CONTROL_ROW.iter().map(|c| c.event).collect();
        assert_eq!(
            events,
            vec![
                KeyboardEvent::Backspace,
                KeyboardEvent::Space,
                KeyboardEvent::CycleLanguage,
                KeyboardEvent::ToggleCase,
                KeyboardEvent::CycleTheme,
                KeyboardEvent::Submit,
            ]
        );
    }

    #[test]
    fn test_space_is_double_width() {
        for control in CONTROL_ROW {
            let expected = if control.event == KeyboardEvent::Space { 2 } else { 1 };
            assert_eq!(control.stretch, expected, "Unexpected width for {}", control.label);
        }
    }
}
