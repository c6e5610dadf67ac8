// SPDX-License-Identifier: GPL-3.0-only

//! Popboard Main Application
//!
//! Opens a small host window with a single button that pops up the
//! multi-language virtual keyboard. Submitted text is printed to stdout.

use popboard::config::ShellOptions;
use popboard::{app, app_settings, i18n};

fn main() -> cosmic::iced::Result {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("popboard=info".parse().unwrap()),
        )
        .init();

    // Get the system's preferred languages.
    let requested_languages = i18n_embed::DesktopLanguageRequester::requested_languages();

    // Enable localizations to be applied.
    i18n::init(&requested_languages);

    let options = ShellOptions::default();

    tracing::info!(
        "Starting Popboard (transparent: {}, fonts: {})",
        options.transparent,
        options.font_dir.display()
    );

    // Settings for configuring the application window and iced runtime.
    let settings = cosmic::app::Settings::default()
        .size(cosmic::iced::Size::new(
            app_settings::DEFAULT_WIDTH,
            app_settings::DEFAULT_HEIGHT,
        ))
        .size_limits(
            cosmic::iced::Limits::NONE
                .min_width(app_settings::MIN_WIDTH)
                .min_height(app_settings::MIN_HEIGHT),
        )
        .transparent(options.transparent);

    // Starts the application's event loop with the startup options as flags.
    cosmic::app::run::<app::AppModel>(settings, options)
}
