// SPDX-License-Identifier: MPL-2.0
//! The runtime that owns the event loop.
//!
//! [`Host`] is the seam between the startup sequence and the windowing
//! system: it answers the locale query and runs the loop. [`IcedHost`] is
//! the real one; tests substitute their own.

use super::{ApplicationContext, Message};
use crate::config::{Config, MIN_WINDOW_HEIGHT, MIN_WINDOW_WIDTH};
use crate::i18n::locale;
use crate::ui::address_book::AddressBook;
use crate::ui::theming::ThemeMode;
use iced::{event, window, Element, Size, Subscription, Task, Theme};
use std::cell::RefCell;

/// Exit code returned when the run loop could not start or failed.
pub const EXIT_FAILURE: i32 = 1;

/// Windowing runtime the application runs inside.
pub trait Host {
    /// Preferred UI languages, most preferred first. May be empty.
    fn ui_languages(&self) -> Vec<String>;

    /// Runs the event loop until the user quits and returns the exit code.
    ///
    /// `context` and `window` live exactly as long as the loop does.
    fn exec(self, context: ApplicationContext, window: AddressBook) -> i32;
}

/// Host backed by iced.
#[derive(Debug, Clone)]
pub struct IcedHost {
    language_override: Option<String>,
    theme_mode: ThemeMode,
    window_size: (u32, u32),
}

impl Default for IcedHost {
    fn default() -> Self {
        Self::from_config(&Config::default())
    }
}

impl IcedHost {
    #[must_use]
    pub fn from_config(config: &Config) -> Self {
        Self {
            language_override: config.general.language.clone(),
            theme_mode: config.general.theme_mode,
            window_size: config.window.size(),
        }
    }

    /// Builds the main window settings.
    fn window_settings(&self, visible: bool) -> window::Settings {
        let (width, height) = self.window_size;
        window::Settings {
            size: Size::new(width as f32, height as f32),
            min_size: Some(Size::new(
                MIN_WINDOW_WIDTH as f32,
                MIN_WINDOW_HEIGHT as f32,
            )),
            visible,
            exit_on_close_request: false,
            ..window::Settings::default()
        }
    }
}

impl Host for IcedHost {
    fn ui_languages(&self) -> Vec<String> {
        let mut languages: Vec<String> = self.language_override.iter().cloned().collect();
        for language in locale::system_ui_languages() {
            if !languages.contains(&language) {
                languages.push(language);
            }
        }
        languages
    }

    fn exec(self, context: ApplicationContext, window: AddressBook) -> i32 {
        let settings = self.window_settings(window.is_visible());

        // Wrap the session in RefCell<Option<_>> to satisfy the Fn trait
        // requirement while only consuming it once.
        let boot_state = RefCell::new(Some(Session::new(context, window, self.theme_mode)));
        let boot = move || {
            let session = boot_state
                .borrow_mut()
                .take()
                .expect("Boot function called more than once");
            (session, Task::none())
        };

        let result = iced::application(boot, Session::update, Session::view)
            .title(Session::title)
            .theme(Session::theme)
            .window(settings)
            .subscription(Session::subscription)
            .run();

        match result {
            Ok(()) => 0,
            Err(err) => {
                tracing::error!(error = %err, "run loop failed");
                EXIT_FAILURE
            }
        }
    }
}

/// Run loop state: everything the bootstrap built, owned for the loop's
/// lifetime.
#[derive(Debug)]
pub struct Session {
    context: ApplicationContext,
    window: AddressBook,
    theme_mode: ThemeMode,
}

impl Session {
    #[must_use]
    pub fn new(context: ApplicationContext, window: AddressBook, theme_mode: ThemeMode) -> Self {
        Self {
            context,
            window,
            theme_mode,
        }
    }

    pub fn title(&self) -> String {
        self.window.title().to_string()
    }

    pub fn theme(&self) -> Theme {
        self.theme_mode.theme()
    }

    pub fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::WindowCloseRequested(_) => {
                tracing::debug!(
                    translators = self.context.translators().len(),
                    "window close requested, leaving run loop"
                );
                iced::exit()
            }
        }
    }

    pub fn view(&self) -> Element<'_, Message> {
        self.window.view()
    }

    pub fn subscription(&self) -> Subscription<Message> {
        event::listen_with(|event, _status, window_id| {
            if let event::Event::Window(window::Event::CloseRequested) = event {
                Some(Message::WindowCloseRequested(window_id))
            } else {
                None
            }
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{WindowConfig, DEFAULT_WINDOW_HEIGHT, DEFAULT_WINDOW_WIDTH};

    #[test]
    fn language_override_comes_first() {
        let mut config = Config::default();
        config.general.language = Some("de-DE".to_string());
        let host = IcedHost::from_config(&config);

        let languages = host.ui_languages();

        assert_eq!(languages.first().map(String::as_str), Some("de-DE"));
        assert_eq!(
            languages.iter().filter(|l| l.as_str() == "de-DE").count(),
            1
        );
    }

    #[test]
    fn without_override_languages_are_the_system_ones() {
        let host = IcedHost::default();
        assert_eq!(host.ui_languages(), locale::system_ui_languages());
    }

    #[test]
    fn window_settings_follow_config_and_visibility() {
        let host = IcedHost::default();

        let settings = host.window_settings(true);

        assert_eq!(
            settings.size,
            Size::new(DEFAULT_WINDOW_WIDTH as f32, DEFAULT_WINDOW_HEIGHT as f32)
        );
        assert!(settings.visible);
        assert!(!settings.exit_on_close_request);
        assert!(!host.window_settings(false).visible);
    }

    #[test]
    fn window_settings_use_clamped_size() {
        let mut config = Config::default();
        config.window = WindowConfig {
            width: Some(1),
            height: Some(1),
        };
        let host = IcedHost::from_config(&config);

        let settings = host.window_settings(true);

        assert_eq!(
            settings.size,
            Size::new(MIN_WINDOW_WIDTH as f32, MIN_WINDOW_HEIGHT as f32)
        );
    }

    #[test]
    fn session_title_and_theme_come_from_window_and_config() {
        let context = ApplicationContext::default();
        let window = AddressBook::new(&context);
        let session = Session::new(context, window, ThemeMode::Light);

        assert_eq!(session.title(), "Address Book");
        assert_eq!(session.theme(), Theme::Light);
        assert!(session.context.translators().is_empty());
        assert!(!session.window.is_visible());
    }
}
