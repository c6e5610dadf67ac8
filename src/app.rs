// SPDX-License-Identifier: GPL-3.0-only

use crate::app_settings::{self, KEY_FONT_SIZE, OPEN_BUTTON_SIZE, POPUP_WIDTH_RATIO};
use crate::config::ShellOptions;
use crate::fl;
use crate::font::FontSource;
use crate::keyboard::{KeyboardEvent, KeyboardState, ThemeName, Transition};
use crate::renderer::{self, glow_button};
use cosmic::iced::{Font, Length, window};
use cosmic::prelude::*;
use cosmic::widget::container;

/// The host application: a single button that opens the keyboard popup.
pub struct AppModel {
    /// Application state which is managed by the COSMIC runtime.
    core: cosmic::Core,
    /// Where keyboard text gets its glyphs from.
    font_source: FontSource,
    /// Whether the bundled font bytes were registered with the font system.
    font_loaded: bool,
    /// State of the open keyboard popup, `None` while closed.
    keyboard: Option<KeyboardState>,
    /// Current window width, used to size the popup.
    window_width: f32,
}

/// Messages emitted by the application and its widgets.
#[derive(Debug, Clone)]
pub enum Message {
    /// The open button was pressed.
    OpenKeyboard,
    /// A gesture inside the keyboard popup.
    Keyboard(KeyboardEvent),
    /// The bundled font finished loading.
    FontLoaded(bool),
}

/// Create a COSMIC application from the app model
impl cosmic::Application for AppModel {
    /// The async executor that will be used to run your application's commands.
    type Executor = cosmic::executor::Default;

    /// Startup options passed in from `main`.
    type Flags = ShellOptions;

    /// Messages which the application and its widgets will emit.
    type Message = Message;

    /// Unique identifier in RDNN (reverse domain name notation) format.
    const APP_ID: &'static str = app_settings::APP_ID;

    fn core(&self) -> &cosmic::Core {
        &self.core
    }

    fn core_mut(&mut self) -> &mut cosmic::Core {
        &mut self.core
    }

    /// Resolves the keyboard font and starts loading it.
    fn init(
        core: cosmic::Core,
        flags: Self::Flags,
    ) -> (Self, Task<cosmic::Action<Self::Message>>) {
        let app = AppModel::new(core, &flags);

        let load_font = match app.font_source.read() {
            Ok(Some(bytes)) => cosmic::iced::font::load(bytes)
                .map(|result| cosmic::Action::App(Message::FontLoaded(result.is_ok()))),
            Ok(None) => Task::none(),
            Err(err) => {
                tracing::warn!("Font: failed to read bundled font: {}", err);
                Task::none()
            }
        };

        (app, load_font)
    }

    /// Shows the open button, or the keyboard popup while it is open.
    fn view(&self) -> Element<'_, Self::Message> {
        let font = self.font();

        let content = match &self.keyboard {
            Some(state) => {
                renderer::render_popup(&state.view(), fl!("close"), font, self.popup_width())
                    .map(Message::Keyboard)
            }
            None => {
                let (width, height) = OPEN_BUTTON_SIZE;
                glow_button(
                    fl!("open-keyboard"),
                    font,
                    KEY_FONT_SIZE,
                    ThemeName::Light.palette(),
                    Length::Fixed(width),
                    Length::Fixed(height),
                    Message::OpenKeyboard,
                )
            }
        };

        container(content)
            .width(Length::Fill)
            .height(Length::Fill)
            .center_x(Length::Fill)
            .center_y(Length::Fill)
            .class(renderer::theme::host_background())
            .into()
    }

    /// Handles messages emitted by the application and its widgets.
    fn update(&mut self, message: Self::Message) -> Task<cosmic::Action<Self::Message>> {
        match message {
            Message::OpenKeyboard => self.open_keyboard(),
            Message::Keyboard(event) => {
                if let Some(submitted) = self.handle_keyboard_event(event) {
                    println!("Submitted: {}", submitted);
                }
            }
            Message::FontLoaded(true) => {
                tracing::info!("Font: Using {} for keyboard text", app_settings::FONT_FAMILY);
                self.font_loaded = true;
            }
            Message::FontLoaded(false) => {
                tracing::warn!("Font: bundled font could not be loaded, using the system default");
                self.font_loaded = false;
            }
        }

        Task::none()
    }

    /// Called when a window is resized.
    fn on_window_resize(&mut self, _id: window::Id, width: f32, _height: f32) {
        self.window_width = width;
        tracing::debug!("on_window_resize: width {}", width);
    }
}

impl AppModel {
    fn new(core: cosmic::Core, options: &ShellOptions) -> Self {
        AppModel {
            core,
            font_source: FontSource::resolve(&options.font_dir),
            font_loaded: false,
            keyboard: None,
            window_width: app_settings::DEFAULT_WIDTH,
        }
    }

    /// Font for all keyboard text; the system default until the bundled font loads.
    fn font(&self) -> Font {
        if self.font_loaded {
            self.font_source.font()
        } else {
            Font::DEFAULT
        }
    }

    fn popup_width(&self) -> f32 {
        self.window_width * POPUP_WIDTH_RATIO
    }

    /// Creates a fresh keyboard state unless the popup is already open.
    fn open_keyboard(&mut self) {
        if self.keyboard.is_none() {
            tracing::info!("Opening virtual keyboard");
            self.keyboard = Some(KeyboardState::new());
        }
    }

    /// Dispatches a popup gesture. Returns the submitted text when the user
    /// pressed enter; the popup and its state are dropped on submit or close.
    fn handle_keyboard_event(&mut self, event: KeyboardEvent) -> Option<String> {
        let Some(state) = self.keyboard.as_mut() else {
            tracing::warn!("Keyboard event {:?} with no open keyboard", event);
            return None;
        };

        let transition = state.dispatch(event);
        if !transition.closes_popup() {
            return None;
        }

        self.keyboard = None;
        match transition {
            Transition::Submitted(value) => {
                tracing::info!("Keyboard submitted {} characters", value.chars().count());
                Some(value)
            }
            _ => {
                tracing::info!("Keyboard closed without submitting");
                None
            }
        }
    }

    /// Check if the popup is open (for testing).
    #[cfg(test)]
    pub fn is_keyboard_open(&self) -> bool {
        self.keyboard.is_some()
    }
}
