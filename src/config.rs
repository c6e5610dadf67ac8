// SPDX-License-Identifier: GPL-3.0-only

use std::path::PathBuf;

use crate::font::default_font_dir;

/// Startup options handed to the host application as its flags.
///
/// Nothing here is persisted; the shell builds the defaults at launch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShellOptions {
    /// Whether the host window is created with a transparent surface.
    pub transparent: bool,
    /// Directory searched for the bundled keyboard font.
    pub font_dir: PathBuf,
}

impl Default for ShellOptions {
    fn default() -> Self {
        Self {
            transparent: true,
            font_dir: default_font_dir(),
        }
    }
}

impl ShellOptions {
    /// Sets the directory searched for the bundled font.
    #[must_use]
    pub fn with_font_dir(mut self, font_dir: impl Into<PathBuf>) -> Self {
        self.font_dir = font_dir.into();
        self
    }

    /// Sets whether the host window is transparent.
    #[must_use]
    pub fn with_transparency(mut self, transparent: bool) -> Self {
        self.transparent = transparent;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_are_transparent() {
        let options = ShellOptions::default();
        assert!(options.transparent, "Host window should be transparent by default");
        assert_eq!(options.font_dir, default_font_dir());
    }

    #[test]
    fn test_builder_overrides() {
        let options = ShellOptions::default()
            .with_font_dir("/opt/popboard/fonts")
            .with_transparency(false);

        assert!(!options.transparent);
        assert_eq!(options.font_dir, PathBuf::from("/opt/popboard/fonts"));
    }
}
