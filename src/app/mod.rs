// SPDX-License-Identifier: MPL-2.0
//! Application root state and orchestration between the three screens.
//!
//! The `App` struct owns the theme store, the mounted screen and the link
//! dispatcher. Screens never reach any of those directly: they report events
//! and `update` turns those into navigation, theme changes or dispatches.

pub mod config;
mod message;
pub mod paths;
pub mod screen;
mod subscription;
mod update;
mod view;

pub use message::{Flags, Message};
pub use screen::{MountedScreen, Screen};

use crate::application::port::LinkDispatcher;
use crate::i18n::fluent::I18n;
use crate::infrastructure::SystemLinkDispatcher;
use crate::ui::theming::{ThemeState, ThemeStore};
use config::defaults::{MIN_WINDOW_HEIGHT, MIN_WINDOW_WIDTH};
use iced::{window, Element, Subscription, Task, Theme};
use std::fmt;

/// Root Iced application state.
pub struct App {
    pub i18n: I18n,
    theme: ThemeStore,
    screen: MountedScreen,
    dispatcher: Box<dyn LinkDispatcher>,
}

impl fmt::Debug for App {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("App")
            .field("screen", &self.screen.route())
            .field("theme", &self.theme.state())
            .finish_non_exhaustive()
    }
}

/// Builds the window settings from the configured size.
pub fn window_settings(config: &config::Config) -> window::Settings {
    let (width, height) = config.window.clamped_size();
    window::Settings {
        size: iced::Size::new(width as f32, height as f32),
        min_size: Some(iced::Size::new(
            MIN_WINDOW_WIDTH as f32,
            MIN_WINDOW_HEIGHT as f32,
        )),
        ..window::Settings::default()
    }
}

/// Entry point used by `main.rs` to launch the Iced application loop.
pub fn run(flags: Flags) -> iced::Result {
    use std::cell::RefCell;

    paths::init_cli_overrides(flags.config_dir.clone());
    let (config, config_warning) = config::load();
    if let Some(warning) = &config_warning {
        tracing::warn!("{warning}");
    }
    let settings = window_settings(&config);

    // iced 0.14 wants an Fn boot closure; the state is consumed on the first call
    let boot_state = RefCell::new(Some((flags, config)));
    let boot = move || {
        let (flags, config) = boot_state.borrow_mut().take().unwrap_or_default();
        App::new(flags, &config)
    };

    iced::application(boot, App::update, App::view)
        .title(App::title)
        .theme(App::theme)
        .window(settings)
        .subscription(App::subscription)
        .run()
}

impl App {
    /// Builds the root state from CLI flags and the loaded configuration.
    /// The CLI theme wins over the config file.
    fn new(flags: Flags, config: &config::Config) -> (Self, Task<Message>) {
        let i18n = I18n::new(flags.lang, config);
        let mode = flags.theme.unwrap_or(config.general.theme_mode);
        let theme = ThemeStore::new(mode);
        tracing::info!(
            locale = %i18n.current_locale(),
            %mode,
            is_dark_mode = theme.state().is_dark_mode,
            "portfolio started"
        );

        let app = Self::with_dispatcher(i18n, theme, Box::new(SystemLinkDispatcher));
        (app, Task::none())
    }

    /// Assembles an app on the home screen around an explicit dispatcher.
    #[must_use]
    pub fn with_dispatcher(
        i18n: I18n,
        theme: ThemeStore,
        dispatcher: Box<dyn LinkDispatcher>,
    ) -> Self {
        let screen = MountedScreen::mount(Screen::default(), &theme);
        Self {
            i18n,
            theme,
            screen,
            dispatcher,
        }
    }

    #[must_use]
    pub fn screen(&self) -> &MountedScreen {
        &self.screen
    }

    #[must_use]
    pub fn theme_state(&self) -> ThemeState {
        self.theme.state()
    }

    /// Window title: the screen name followed by the application name.
    #[must_use]
    pub fn title(&self) -> String {
        let app_name = self.i18n.tr("window-title");
        let screen_name = self.i18n.tr(self.screen.route().title_key());
        format!("{screen_name} - {app_name}")
    }

    #[must_use]
    pub fn theme(&self) -> Theme {
        self.theme.state().iced_theme()
    }

    fn subscription(&self) -> Subscription<Message> {
        subscription::create_event_subscription()
    }

    pub fn update(&mut self, message: Message) -> Task<Message> {
        let mut ctx = update::UpdateContext {
            theme: &mut self.theme,
            screen: &mut self.screen,
            dispatcher: self.dispatcher.as_ref(),
        };
        update::update(&mut ctx, message)
    }

    pub fn view(&self) -> Element<'_, Message> {
        view::view(view::ViewContext {
            i18n: &self.i18n,
            screen: &self.screen,
            theme: self.theme.state(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::RecordingDispatcher;
    use crate::ui::{home, projects};

    fn app_with(dispatcher: &RecordingDispatcher) -> App {
        App::with_dispatcher(
            I18n::default(),
            ThemeStore::with_state(ThemeState::light()),
            Box::new(dispatcher.clone()),
        )
    }

    #[test]
    fn starts_on_home() {
        let app = app_with(&RecordingDispatcher::new());
        assert_eq!(app.screen().route(), Screen::Home);
    }

    #[test]
    fn title_names_the_screen() {
        let mut app = app_with(&RecordingDispatcher::new());
        assert!(app.title().starts_with("Home - "));
        let _ = app.update(Message::SwitchScreen(Screen::Projects));
        assert!(app.title().starts_with("Projects - "));
    }

    #[test]
    fn iced_theme_follows_the_store() {
        let mut app = app_with(&RecordingDispatcher::new());
        assert_eq!(app.theme(), Theme::Light);
        let _ = app.update(Message::ToggleTheme);
        assert_eq!(app.theme(), Theme::Dark);
    }

    #[test]
    fn stale_screen_messages_are_ignored() {
        let dispatcher = RecordingDispatcher::new();
        let mut app = app_with(&dispatcher);
        let _ = app.update(Message::Projects(projects::Message::OpenOnGitHub));
        assert_eq!(app.screen().route(), Screen::Home);
        assert!(dispatcher.dispatched().is_empty());
    }

    #[test]
    fn escape_closes_home_dialog() {
        let mut app = app_with(&RecordingDispatcher::new());
        let _ = app.update(Message::Home(home::Message::OpenGitHubModal));
        let _ = app.update(Message::DismissModal);
        let MountedScreen::Home(state) = app.screen() else {
            panic!("expected home screen");
        };
        assert_eq!(state.modal(), None);
    }
}
