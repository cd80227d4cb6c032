// SPDX-License-Identifier: MPL-2.0
//! Top-level messages and runtime flags for the application.

use crate::ui::theming::ThemeMode;
use crate::ui::{contact, home, navbar, projects};

use super::Screen;

/// Top-level messages consumed by `App::update`. The variants forward
/// screen messages while keeping a single update entrypoint.
#[derive(Debug, Clone)]
pub enum Message {
    Home(home::Message),
    Projects(projects::Message),
    Contact(contact::Message),
    Navbar(navbar::Message),
    SwitchScreen(Screen),
    /// Keyboard shortcut for the theme toggle.
    ToggleTheme,
    /// Keyboard shortcut closing the open dialog.
    DismissModal,
}

/// Runtime flags passed in from the command line.
#[derive(Debug, Clone, Default)]
pub struct Flags {
    /// Optional locale override in BCP-47 form (e.g. `en-US`, `fr`).
    pub lang: Option<String>,
    /// Initial theme, overriding the config file.
    pub theme: Option<ThemeMode>,
    /// Optional config directory override (for settings.toml).
    pub config_dir: Option<String>,
}
