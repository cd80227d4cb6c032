// SPDX-License-Identifier: MPL-2.0
//! Event subscriptions for the application.
//!
//! Keyboard shortcuts are the only native events the portfolio listens to:
//! `Escape` closes the open dialog and `Ctrl+T` (`Cmd+T` on macOS) flips
//! the theme.

use super::Message;
use iced::keyboard::{self, key::Named, Key, Modifiers};
use iced::{event, Subscription};

pub fn create_event_subscription() -> Subscription<Message> {
    event::listen_with(|event, status, _window_id| {
        // Widgets such as focused text inputs get first refusal on keys
        if status == event::Status::Captured {
            return None;
        }
        match event {
            event::Event::Keyboard(keyboard::Event::KeyPressed { key, modifiers, .. }) => {
                message_for_key(&key, modifiers)
            }
            _ => None,
        }
    })
}

/// Maps a key press to the shortcut it triggers, if any.
fn message_for_key(key: &Key, modifiers: Modifiers) -> Option<Message> {
    match key.as_ref() {
        Key::Named(Named::Escape) => Some(Message::DismissModal),
        Key::Character("t" | "T") if modifiers.command() => Some(Message::ToggleTheme),
        _ => None,
    }
}
