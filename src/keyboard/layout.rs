// SPDX-License-Identifier: GPL-3.0-only

//! Layout table and key-set derivation.
//!
//! Every language carries exactly four rows of single-character keys. The
//! characters stored here are the canonical (lowercase) forms; the rendered
//! label is derived from them by [`key_rows`] according to the case mode.

use std::fmt;

/// Number of character rows every layout defines.
pub const ROW_COUNT: usize = 4;

/// Languages offered by the keyboard, in cycling order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Language {
    /// Latin QWERTY.
    #[default]
    En,
    /// Persian.
    Fa,
    /// Arabic.
    Ar,
    /// Digits and symbols.
    Num,
}

impl Language {
    /// All languages in the order `toggle_language` walks them.
    pub const ALL: [Language; 4] = [Language::En, Language::Fa, Language::Ar, Language::Num];

    /// Returns the short code shown to users (`EN`, `FA`, `AR`, `NUM`).
    #[must_use]
    pub fn code(self) -> &'static str {
        match self {
            Language::En => "EN",
            Language::Fa => "FA",
            Language::Ar => "AR",
            Language::Num => "NUM",
        }
    }

    /// Returns the four key rows of this layout.
    #[must_use]
    pub fn rows(self) -> &'static [&'static str; ROW_COUNT] {
        match self {
            Language::En => &["1234567890", "qwertyuiop", "asdfghjkl", "zxcvbnm"],
            Language::Fa => &["۱۲۳۴۵۶۷۸۹۰", "ضصثقفغعهخح", "شسیبلاتنم", "ظطزرذدپو"],
            Language::Ar => &["١٢٣٤٥٦٧٨٩٠", "ضصثقفغعهخح", "شسیبلاتنم", "ظطزرذدپو"],
            Language::Num => &["1234567890", "!@#$%^&*()", "+-*/=.,", "<>[]{}"],
        }
    }

    /// Whether the case toggle changes how this layout's keys are rendered.
    ///
    /// Persian and Arabic have no letter case. The numeric layout is treated
    /// as case-aware, but its characters are all case-invariant.
    #[must_use]
    pub fn has_case(self) -> bool {
        matches!(self, Language::En | Language::Num)
    }

    /// Returns the language following this one, wrapping after `NUM`.
    #[must_use]
    pub fn next(self) -> Self {
        let idx = Self::ALL.iter().position(|l| *l == self).unwrap_or(0);
        Self::ALL[(idx + 1) % Self::ALL.len()]
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

/// A single character key as the display layer renders it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Key {
    /// The character shown on the key and inserted when it is pressed.
    pub label: char,
}

/// Applies the case mode to a canonical layout character.
fn apply_case(c: char, uppercase: bool, has_case: bool) -> char {
    if uppercase && has_case {
        // All layout characters have single-character uppercase forms.
        c.to_uppercase().next().unwrap_or(c)
    } else {
        c
    }
}

/// Derives the rows of keys to render for a language and case mode.
///
/// Called after every language or case toggle; keeps no state of its own.
#[must_use]
pub fn key_rows(language: Language, uppercase: bool) -> Vec<Vec<Key>> {
    let has_case = language.has_case();
    language
        .rows()
        .iter()
        .map(|row| {
            row.chars()
                .map(|c| Key {
                    label: apply_case(c, uppercase, has_case),
                })
                .collect()
        })
        .collect()
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn labels(rows: &[Vec<Key>]) -> Vec<String> {
        rows.iter()
            .map(|row| row.iter().map(|k| k.label).collect())
            .collect()
    }

    #[test]
    fn test_every_language_has_four_rows() {
        for language in Language::ALL {
            assert_eq!(
                language.rows().len(),
                ROW_COUNT,
                "{} should define exactly four rows",
                language
            );
            assert_eq!(key_rows(language, true).len(), ROW_COUNT);
        }
    }

    #[test]
    fn test_language_cycle_order() {
        assert_eq!(Language::En.next(), Language::Fa);
        assert_eq!(Language::Fa.next(), Language::Ar);
        assert_eq!(Language::Ar.next(), Language::Num);
        assert_eq!(Language::Num.next(), Language::En);
    }

    #[test]
    fn test_language_codes() {
        let codes: Vec<&str> = Language::ALL.iter().map(|l| l.code()).collect();
        assert_eq!(codes, vec!["EN", "FA", "AR", "NUM"]);
        assert_eq!(Language::default(), Language::En);
    }

    #[test]
    fn test_latin_rows_follow_case_mode() {
        let upper = labels(&key_rows(Language::En, true));
        let lower = labels(&key_rows(Language::En, false));

        assert_eq!(upper[1], "QWERTYUIOP");
        assert_eq!(lower[1], "qwertyuiop");
        assert_eq!(upper[0], lower[0], "Digits have no case");
    }

    #[test]
    fn test_numeric_layout_is_case_invariant() {
        assert_eq!(
            labels(&key_rows(Language::Num, false)),
            labels(&key_rows(Language::Num, true)),
            "Digits and symbols should render the same in both case modes"
        );
    }

    #[test]
    fn test_persian_and_arabic_ignore_case() {
        for language in [Language::Fa, Language::Ar] {
            assert!(!language.has_case());
            assert_eq!(
                labels(&key_rows(language, true)),
                labels(&key_rows(language, false))
            );
        }
    }

    #[test]
    fn test_persian_first_row_is_persian_digits() {
        let rows = labels(&key_rows(Language::Fa, true));
        assert_eq!(rows[0], "۱۲۳۴۵۶۷۸۹۰");
        assert_eq!(rows[3].chars().count(), 8);
    }

    #[test]
    fn test_arabic_uses_arabic_indic_digits() {
        let rows = labels(&key_rows(Language::Ar, true));
        assert_eq!(rows[0], "١٢٣٤٥٦٧٨٩٠");
        assert_eq!(rows[1], Language::Fa.rows()[1]);
    }
}
