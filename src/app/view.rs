// SPDX-License-Identifier: MPL-2.0
//! View rendering for the application.
//!
//! Renders the mounted screen above the bottom navigation bar.

use super::screen::MountedScreen;
use super::Message;
use crate::i18n::fluent::I18n;
use crate::ui::navbar::{self, ViewContext as NavbarViewContext};
use crate::ui::theming::ThemeState;
use crate::ui::theme::StyleSet;
use crate::ui::{contact, home, projects};
use iced::{
    widget::{Column, Container},
    Element, Length,
};

/// Context required to render the application view.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub screen: &'a MountedScreen,
    pub theme: ThemeState,
}

/// Renders the current application view based on the active screen.
pub fn view(ctx: ViewContext<'_>) -> Element<'_, Message> {
    let i18n = ctx.i18n;
    let current_view: Element<'_, Message> = match ctx.screen {
        MountedScreen::Home(state) => state
            .view(home::ViewContext { i18n })
            .map(Message::Home),
        MountedScreen::Projects(state) => state
            .view(projects::ViewContext { i18n })
            .map(Message::Projects),
        MountedScreen::Contact(state) => state
            .view(contact::ViewContext { i18n })
            .map(Message::Contact),
    };

    let navbar = navbar::view(NavbarViewContext {
        i18n,
        active: ctx.screen.route(),
        styles: StyleSet::compute(ctx.theme),
    })
    .map(Message::Navbar);

    let column = Column::new()
        .push(
            Container::new(current_view)
                .width(Length::Fill)
                .height(Length::Fill),
        )
        .push(navbar);

    Container::new(column.width(Length::Fill).height(Length::Fill))
        .width(Length::Fill)
        .height(Length::Fill)
        .into()
}
