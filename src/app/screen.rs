// SPDX-License-Identifier: MPL-2.0
//! Screen enumeration and the state of the screen currently mounted.

use crate::ui::theming::{ThemeStore, ThemeSubscriber};
use crate::ui::{contact, home, projects};
use std::fmt;

/// Screens the user can navigate between.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Screen {
    #[default]
    Home,
    Projects,
    Contact,
}

impl Screen {
    pub const ALL: [Screen; 3] = [Screen::Home, Screen::Projects, Screen::Contact];

    /// Translation key of the screen name shown in the window title.
    #[must_use]
    pub fn title_key(self) -> &'static str {
        match self {
            Screen::Home => "nav-home",
            Screen::Projects => "nav-projects",
            Screen::Contact => "nav-contact",
        }
    }
}

impl fmt::Display for Screen {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Screen::Home => "home",
            Screen::Projects => "projects",
            Screen::Contact => "contact",
        };
        f.write_str(name)
    }
}

/// Controller state of the one screen on display.
///
/// Only the visible screen owns state. Leaving a screen drops it, so the
/// projects tab and any open dialog start fresh on the next visit.
#[derive(Debug, Clone)]
pub enum MountedScreen {
    Home(home::State),
    Projects(projects::State),
    Contact(contact::State),
}

impl MountedScreen {
    /// Builds fresh controller state for `screen`, styled from `theme`.
    #[must_use]
    pub fn mount(screen: Screen, theme: &ThemeStore) -> Self {
        match screen {
            Screen::Home => MountedScreen::Home(home::State::new(theme)),
            Screen::Projects => MountedScreen::Projects(projects::State::new(theme)),
            Screen::Contact => MountedScreen::Contact(contact::State::new(theme)),
        }
    }

    #[must_use]
    pub fn route(&self) -> Screen {
        match self {
            MountedScreen::Home(_) => Screen::Home,
            MountedScreen::Projects(_) => Screen::Projects,
            MountedScreen::Contact(_) => Screen::Contact,
        }
    }

    /// Closes whatever dialog the screen has open.
    pub fn dismiss_modal(&mut self) {
        match self {
            MountedScreen::Home(state) => state.dismiss_modal(),
            MountedScreen::Projects(state) => state.dismiss_modal(),
            MountedScreen::Contact(state) => state.dismiss_modal(),
        }
    }

    pub fn as_subscriber(&mut self) -> &mut dyn ThemeSubscriber {
        match self {
            MountedScreen::Home(state) => state,
            MountedScreen::Projects(state) => state,
            MountedScreen::Contact(state) => state,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::theming::ThemeState;

    #[test]
    fn mount_matches_route() {
        let store = ThemeStore::with_state(ThemeState::light());
        for screen in Screen::ALL {
            assert_eq!(MountedScreen::mount(screen, &store).route(), screen);
        }
    }

    #[test]
    fn home_is_the_default_screen() {
        assert_eq!(Screen::default(), Screen::Home);
    }
}
