// SPDX-License-Identifier: MPL-2.0
//! Update logic and message handlers for the application.
//!
//! Screen controllers only mutate their own state and report an event.
//! Everything that reaches outside a screen (switching screens, flipping the
//! theme, opening links) is resolved here.

use super::screen::MountedScreen;
use super::{Message, Screen};
use crate::application::port::{ExternalLink, LinkDispatcher};
use crate::error::Result;
use crate::ui::contact::{self, Event as ContactEvent};
use crate::ui::home::{self, Event as HomeEvent};
use crate::ui::navbar::{self, Event as NavbarEvent};
use crate::ui::projects::{self, Event as ProjectsEvent};
use crate::ui::theming::ThemeStore;
use iced::Task;

/// Mutable view of the application state handed to the handlers.
pub struct UpdateContext<'a> {
    pub theme: &'a mut ThemeStore,
    pub screen: &'a mut MountedScreen,
    pub dispatcher: &'a dyn LinkDispatcher,
}

/// Routes a top-level message to its handler.
pub fn update(ctx: &mut UpdateContext<'_>, message: Message) -> Task<Message> {
    match message {
        Message::Home(message) => handle_home_message(ctx, message),
        Message::Projects(message) => handle_projects_message(ctx, message),
        Message::Contact(message) => handle_contact_message(ctx, message),
        Message::Navbar(message) => handle_navbar_message(ctx, &message),
        Message::SwitchScreen(target) => handle_screen_switch(ctx, target),
        Message::ToggleTheme => handle_theme_toggle(ctx),
        Message::DismissModal => {
            ctx.screen.dismiss_modal();
            Task::none()
        }
    }
}

pub fn handle_home_message(ctx: &mut UpdateContext<'_>, message: home::Message) -> Task<Message> {
    let MountedScreen::Home(state) = ctx.screen else {
        tracing::debug!(?message, "home message arrived after navigation");
        return Task::none();
    };

    match state.update(message) {
        HomeEvent::None => Task::none(),
        HomeEvent::ToggleTheme => handle_theme_toggle(ctx),
        HomeEvent::OpenLink(uri) => {
            open_or_warn(ctx.dispatcher, uri);
            Task::none()
        }
        HomeEvent::ShowProjects => handle_screen_switch(ctx, Screen::Projects),
    }
}

pub fn handle_projects_message(
    ctx: &mut UpdateContext<'_>,
    message: projects::Message,
) -> Task<Message> {
    let MountedScreen::Projects(state) = ctx.screen else {
        tracing::debug!(?message, "projects message arrived after navigation");
        return Task::none();
    };

    match state.update(message) {
        ProjectsEvent::None => Task::none(),
        ProjectsEvent::OpenLink(uri) => {
            open_or_warn(ctx.dispatcher, uri);
            Task::none()
        }
    }
}

pub fn handle_contact_message(
    ctx: &mut UpdateContext<'_>,
    message: contact::Message,
) -> Task<Message> {
    let MountedScreen::Contact(state) = ctx.screen else {
        tracing::debug!(?message, "contact message arrived after navigation");
        return Task::none();
    };

    match state.update(message) {
        ContactEvent::None => Task::none(),
        ContactEvent::OpenLink(uri) => {
            open_or_warn(ctx.dispatcher, uri);
            Task::none()
        }
    }
}

pub fn handle_navbar_message(
    ctx: &mut UpdateContext<'_>,
    message: &navbar::Message,
) -> Task<Message> {
    match navbar::update(message, ctx.screen.route()) {
        NavbarEvent::None => Task::none(),
        NavbarEvent::Navigate(target) => handle_screen_switch(ctx, target),
    }
}

/// Unmounts the current screen and mounts a fresh `target`.
///
/// Switching to the screen already shown keeps its state.
pub fn handle_screen_switch(ctx: &mut UpdateContext<'_>, target: Screen) -> Task<Message> {
    let current = ctx.screen.route();
    if current == target {
        return Task::none();
    }
    tracing::debug!(from = %current, to = %target, "switching screen");
    *ctx.screen = MountedScreen::mount(target, ctx.theme);
    Task::none()
}

/// Flips the theme and restyles the mounted screen before returning.
pub fn handle_theme_toggle(ctx: &mut UpdateContext<'_>) -> Task<Message> {
    ctx.theme.toggle([ctx.screen.as_subscriber()]);
    Task::none()
}

/// Validates `uri` and hands it to the dispatcher.
fn open_link(dispatcher: &dyn LinkDispatcher, uri: String) -> Result<()> {
    let link = ExternalLink::parse(uri)?;
    dispatcher.dispatch(&link);
    Ok(())
}

/// Invalid links are logged and dropped; the app keeps running either way.
fn open_or_warn(dispatcher: &dyn LinkDispatcher, uri: String) {
    if let Err(err) = open_link(dispatcher, uri) {
        tracing::warn!("refusing to open link: {err}");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::{Error, LinkError};
    use crate::test_utils::RecordingDispatcher;

    #[test]
    fn open_link_dispatches_valid_links() {
        let dispatcher = RecordingDispatcher::new();
        assert!(open_link(&dispatcher, "https://github.com/YacoMuriel".into()).is_ok());
        assert_eq!(dispatcher.dispatched(), vec!["https://github.com/YacoMuriel".to_string()]);
    }

    #[test]
    fn open_link_reports_rejected_scheme_as_link_error() {
        let dispatcher = RecordingDispatcher::new();
        let result = open_link(&dispatcher, "ftp://example.com".into());
        assert!(matches!(result, Err(Error::Link(LinkError::UnsupportedScheme(_)))));
        assert!(dispatcher.dispatched().is_empty());
    }

    #[test]
    fn open_link_reports_empty_uri() {
        let dispatcher = RecordingDispatcher::new();
        let result = open_link(&dispatcher, String::new());
        assert!(matches!(result, Err(Error::Link(LinkError::Empty))));
        assert!(dispatcher.dispatched().is_empty());
    }
}
