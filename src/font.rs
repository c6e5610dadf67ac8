// SPDX-License-Identifier: GPL-3.0-only

//! Bundled font lookup.
//!
//! Persian and Arabic labels render best with the bundled Vazir typeface. The
//! font is optional: when `fonts/Vazir.ttf` is missing next to the executable,
//! a warning is logged and the system default font is used instead.

use std::io;
use std::path::{Path, PathBuf};

use cosmic::iced::Font;

use crate::app_settings::{FONT_DIR, FONT_FAMILY, FONT_FILE};

/// Where keyboard text gets its glyphs from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FontSource {
    /// The bundled font file was found at this path.
    Bundled(PathBuf),
    /// No bundled font; use the system default.
    SystemDefault,
}

impl FontSource {
    /// Looks for the bundled font inside `font_dir` and logs the outcome.
    pub fn resolve(font_dir: &Path) -> Self {
        let path = font_dir.join(FONT_FILE);
        if path.is_file() {
            tracing::info!("Font: Found {} at {}", FONT_FILE, path.display());
            FontSource::Bundled(path)
        } else {
            tracing::warn!(
                "Font: {} not found at {}, falling back to the system default font",
                FONT_FILE,
                path.display()
            );
            FontSource::SystemDefault
        }
    }

    /// Reads the font bytes, or `None` for the system default.
    pub fn read(&self) -> io::Result<Option<Vec<u8>>> {
        match self {
            FontSource::Bundled(path) => std::fs::read(path).map(Some),
            FontSource::SystemDefault => Ok(None),
        }
    }

    /// The iced font to request for keyboard text.
    #[must_use]
    pub fn font(&self) -> Font {
        match self {
            FontSource::Bundled(_) => Font::with_name(FONT_FAMILY),
            FontSource::SystemDefault => Font::DEFAULT,
        }
    }

    #[must_use]
    pub fn is_bundled(&self) -> bool {
        matches!(self, FontSource::Bundled(_))
    }
}

/// The `fonts/` directory next to the running executable.
///
/// Falls back to a relative `fonts/` path if the executable location is
/// unknown.
#[must_use]
pub fn default_font_dir() -> PathBuf {
    std::env::current_exe()
        .ok()
        .and_then(|exe| exe.parent().map(|dir| dir.join(FONT_DIR)))
        .unwrap_or_else(|| PathBuf::from(FONT_DIR))
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_resolve_finds_bundled_font() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join(FONT_FILE);
        fs::write(&path, b"not really a font").unwrap();

        let source = FontSource::resolve(dir.path());
        assert_eq!(source, FontSource::Bundled(path));
        assert!(source.is_bundled());
        assert_eq!(source.font(), Font::with_name(FONT_FAMILY));
    }

    #[test]
    fn test_resolve_falls_back_when_missing() {
        let dir = TempDir::new().unwrap();

        let source = FontSource::resolve(dir.path());
        assert_eq!(source, FontSource::SystemDefault);
        assert_eq!(source.font(), Font::DEFAULT);
    }

    #[test]
    fn test_resolve_ignores_directory_with_font_name() {
        let dir = TempDir::new().unwrap();
        fs::create_dir(dir.path().join(FONT_FILE)).unwrap();

        assert_eq!(FontSource::resolve(dir.path()), FontSource::SystemDefault);
    }

    #[test]
    fn test_read_returns_file_bytes() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join(FONT_FILE), [1u8, 2, 3]).unwrap();

        let bytes = FontSource::resolve(dir.path()).read().unwrap();
        assert_eq!(bytes, Some(vec![1, 2, 3]));
        assert_eq!(FontSource::SystemDefault.read().unwrap(), None);
    }

    #[test]
    fn test_read_reports_vanished_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join(FONT_FILE);
        fs::write(&path, b"x").unwrap();
        let source = FontSource::resolve(dir.path());
        fs::remove_file(&path).unwrap();

        assert!(source.read().is_err(), "Reading a removed font should fail");
    }

    #[test]
    fn test_default_font_dir_ends_with_fonts() {
        assert!(default_font_dir().ends_with(FONT_DIR));
    }
}
