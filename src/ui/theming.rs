// SPDX-License-Identifier: MPL-2.0
//! Theme mode selection and the process-wide theme store.
//!
//! [`ThemeStore`] owns the single dark/light flag. It is created once by the
//! application root and handed by reference to every screen when it renders.
//! Toggling notifies each mounted screen through [`ThemeSubscriber`] before
//! the toggle returns, so the next frame is drawn with the new style set.

use dark_light;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Initial theme choice, as read from configuration or the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemeMode {
    Light,
    Dark,
    #[default]
    System,
}

impl ThemeMode {
    /// Returns true if the effective theme is dark.
    /// For System mode, detects the actual system theme.
    #[must_use]
    pub fn is_dark(self) -> bool {
        match self {
            ThemeMode::Light => false,
            ThemeMode::Dark => true,
            // Light is the fallback when detection fails or reports no preference
            ThemeMode::System => matches!(dark_light::detect(), Ok(dark_light::Mode::Dark)),
        }
    }
}

impl FromStr for ThemeMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "light" => Ok(ThemeMode::Light),
            "dark" => Ok(ThemeMode::Dark),
            "system" => Ok(ThemeMode::System),
            other => Err(format!("invalid theme mode: {other}")),
        }
    }
}

impl fmt::Display for ThemeMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ThemeMode::Light => "light",
            ThemeMode::Dark => "dark",
            ThemeMode::System => "system",
        };
        f.write_str(name)
    }
}

/// Snapshot of the theme flag that screens read when rendering.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ThemeState {
    pub is_dark_mode: bool,
}

impl ThemeState {
    #[must_use]
    pub const fn light() -> Self {
        Self {
            is_dark_mode: false,
        }
    }

    #[must_use]
    pub const fn dark() -> Self {
        Self { is_dark_mode: true }
    }

    /// The Iced built-in theme matching this state, used for widgets that
    /// are not styled explicitly (scrollbars, default text).
    #[must_use]
    pub fn iced_theme(self) -> iced::Theme {
        if self.is_dark_mode {
            iced::Theme::Dark
        } else {
            iced::Theme::Light
        }
    }
}

/// Receives theme changes. Implemented by every screen controller.
pub trait ThemeSubscriber {
    fn theme_changed(&mut self, theme: ThemeState);
}

/// Single owner of the dark-mode flag.
#[derive(Debug, Clone, Default)]
pub struct ThemeStore {
    state: ThemeState,
}

impl ThemeStore {
    #[must_use]
    pub fn new(mode: ThemeMode) -> Self {
        Self {
            state: ThemeState {
                is_dark_mode: mode.is_dark(),
            },
        }
    }

    #[must_use]
    pub fn with_state(state: ThemeState) -> Self {
        Self { state }
    }

    #[must_use]
    pub fn state(&self) -> ThemeState {
        self.state
    }

    /// Flips the flag and notifies `subscribers` in order before returning
    /// the new state.
    pub fn toggle<'a, I>(&mut self, subscribers: I) -> ThemeState
    where
        I: IntoIterator<Item = &'a mut dyn ThemeSubscriber>,
    {
        self.state.is_dark_mode = !self.state.is_dark_mode;
        for subscriber in subscribers {
            subscriber.theme_changed(self.state);
        }
        tracing::debug!(is_dark_mode = self.state.is_dark_mode, "theme toggled");
        self.state
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Default)]
    struct Probe {
        seen: Vec<ThemeState>,
    }

    impl ThemeSubscriber for Probe {
        fn theme_changed(&mut self, theme: ThemeState) {
            self.seen.push(theme);
        }
    }

    #[test]
    fn theme_mode_is_dark_returns_correct_values() {
        assert!(!ThemeMode::Light.is_dark());
        assert!(ThemeMode::Dark.is_dark());
        // System mode depends on actual system theme, so we just verify it doesn't panic
        let _ = ThemeMode::System.is_dark();
    }

    #[test]
    fn theme_mode_parses_case_insensitively() {
        assert_eq!("Dark".parse::<ThemeMode>(), Ok(ThemeMode::Dark));
        assert_eq!("light".parse::<ThemeMode>(), Ok(ThemeMode::Light));
        assert_eq!("SYSTEM".parse::<ThemeMode>(), Ok(ThemeMode::System));
        assert!("sepia".parse::<ThemeMode>().is_err());
    }

    #[test]
    fn toggling_twice_restores_original_state() {
        let mut store = ThemeStore::with_state(ThemeState::light());
        store.toggle(std::iter::empty());
        assert!(store.state().is_dark_mode);
        store.toggle(std::iter::empty());
        assert_eq!(store.state(), ThemeState::light());
    }

    #[test]
    fn toggle_notifies_every_subscriber_with_new_state() {
        let mut store = ThemeStore::with_state(ThemeState::dark());
        let mut first = Probe::default();
        let mut second = Probe::default();

        let returned = store.toggle([
            &mut first as &mut dyn ThemeSubscriber,
            &mut second as &mut dyn ThemeSubscriber,
        ]);

        assert_eq!(returned, ThemeState::light());
        assert_eq!(first.seen, vec![ThemeState::light()]);
        assert_eq!(second.seen, vec![ThemeState::light()]);
    }

    #[test]
    fn iced_theme_follows_flag() {
        assert_eq!(ThemeState::dark().iced_theme(), iced::Theme::Dark);
        assert_eq!(ThemeState::light().iced_theme(), iced::Theme::Light);
    }
}
