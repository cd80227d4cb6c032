// SPDX-License-Identifier: MPL-2.0
//! Bottom navigation bar switching between the three screens.

use crate::app::screen::Screen;
use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{spacing, typography};
use crate::ui::styles;
use crate::ui::theme::StyleSet;
use iced::alignment::Horizontal;
use iced::widget::{button, text, Container, Row};
use iced::{Element, Length};

/// Contextual data needed to render the navbar.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub active: Screen,
    pub styles: StyleSet,
}

/// Messages emitted by the navbar.
#[derive(Debug, Clone)]
pub enum Message {
    Select(Screen),
}

/// Events propagated to the parent application.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    None,
    Navigate(Screen),
}

/// Process a navbar message. Selecting the active tab is a no-op.
#[must_use]
pub fn update(message: &Message, active: Screen) -> Event {
    match message {
        Message::Select(screen) if *screen == active => Event::None,
        Message::Select(screen) => Event::Navigate(*screen),
    }
}

fn glyph(screen: Screen) -> &'static str {
    match screen {
        Screen::Home => "⌂",
        Screen::Projects => "▦",
        Screen::Contact => "✉",
    }
}

/// Render the navigation bar.
#[must_use]
#[allow(clippy::needless_pass_by_value)] // ViewContext is small and consumed
pub fn view(ctx: ViewContext<'_>) -> Element<'_, Message> {
    let styles = ctx.styles;

    let row = Screen::ALL.iter().fold(
        Row::new().spacing(spacing::XS).padding(spacing::XS),
        |row, &screen| {
            let active = screen == ctx.active;
            let label = iced::widget::column![
                text(glyph(screen))
                    .size(typography::TITLE_SM)
                    .width(Length::Fill)
                    .align_x(Horizontal::Center),
                text(ctx.i18n.tr(screen.title_key()))
                    .size(typography::CAPTION)
                    .width(Length::Fill)
                    .align_x(Horizontal::Center),
            ];
            row.push(
                button(label)
                    .width(Length::Fill)
                    .padding(spacing::XS)
                    .style(styles::button::tab(styles, active))
                    .on_press(Message::Select(screen)),
            )
        },
    );

    Container::new(row)
        .width(Length::Fill)
        .style(styles::container::navbar(styles))
        .into()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn selecting_another_screen_navigates() {
        let event = update(&Message::Select(Screen::Contact), Screen::Home);
        assert_eq!(event, Event::Navigate(Screen::Contact));
    }

    #[test]
    fn selecting_active_screen_is_a_no_op() {
        let event = update(&Message::Select(Screen::Projects), Screen::Projects);
        assert_eq!(event, Event::None);
    }

    #[test]
    fn every_screen_has_a_label() {
        let i18n = I18n::default();
        for screen in Screen::ALL {
            assert!(!i18n.tr(screen.title_key()).starts_with("MISSING"));
        }
    }
}
