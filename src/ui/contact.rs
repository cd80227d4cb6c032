// SPDX-License-Identifier: MPL-2.0
//! Contact screen listing the social links.
//!
//! Links open immediately, except the email entry which first asks for
//! confirmation.

use crate::catalog::{self, SocialLink};
use crate::i18n::fluent::I18n;
use crate::ui::components::{modal, modal::ModalState, section};
use crate::ui::design_tokens::{sizing, spacing, typography};
use crate::ui::styles;
use crate::ui::theme::{self, StyleSet};
use crate::ui::theming::{ThemeState, ThemeStore, ThemeSubscriber};
use iced::alignment::{Horizontal, Vertical};
use iced::widget::{button, scrollable, text, Column, Container, Row, Space};
use iced::{Element, Length};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContactModal {
    Email,
}

#[derive(Debug, Clone)]
pub enum Message {
    /// A social link row was pressed, identified by its catalog id.
    LinkPressed(&'static str),
    SendEmail,
    Dismiss,
}

/// Events propagated to the parent application.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    None,
    OpenLink(String),
}

/// Contextual data needed to render the contact screen.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
}

#[derive(Debug, Clone)]
pub struct State {
    modal: ModalState<ContactModal>,
    styles: StyleSet,
}

impl State {
    #[must_use]
    pub fn new(theme: &ThemeStore) -> Self {
        Self {
            modal: ModalState::closed(),
            styles: StyleSet::compute(theme.state()),
        }
    }

    #[must_use]
    pub fn modal(&self) -> Option<ContactModal> {
        self.modal.current()
    }

    #[must_use]
    pub fn styles(&self) -> StyleSet {
        self.styles
    }

    pub fn dismiss_modal(&mut self) {
        self.modal.close();
    }

    pub fn update(&mut self, message: Message) -> Event {
        match message {
            Message::LinkPressed(id) => match catalog::social_link_by_id(id) {
                Some(link) if link.is_email() => {
                    self.modal.open(ContactModal::Email);
                    Event::None
                }
                Some(link) => Event::OpenLink(link.url.to_string()),
                None => {
                    tracing::warn!(id, "unknown social link pressed");
                    Event::None
                }
            },
            Message::SendEmail => {
                if self.modal.close().is_none() {
                    return Event::None;
                }
                Event::OpenLink(catalog::profile().personal_email.mailto())
            }
            Message::Dismiss => {
                self.modal.close();
                Event::None
            }
        }
    }

    pub fn view<'a>(&'a self, ctx: ViewContext<'a>) -> Element<'a, Message> {
        let styles = self.styles;

        let links = catalog::social_links()
            .iter()
            .fold(Column::new().spacing(spacing::SM), |column, link| {
                column.push(self.link_row(link))
            });

        let intro = Column::new()
            .spacing(spacing::MD)
            .push(
                text(ctx.i18n.tr("contact-card-description"))
                    .size(typography::BODY)
                    .color(styles.text_body),
            )
            .push(links);

        let header = Container::new(
            Column::new()
                .width(Length::Fill)
                .spacing(spacing::SM)
                .align_x(Horizontal::Center)
                .push(
                    text(ctx.i18n.tr("contact-title"))
                        .size(typography::TITLE_LG)
                        .color(styles.text_title),
                )
                .push(
                    text(ctx.i18n.tr("contact-subtitle"))
                        .size(typography::BODY_SM)
                        .color(styles.text_subtitle)
                        .align_x(Horizontal::Center),
                ),
        )
        .width(Length::Fill)
        .padding(spacing::LG)
        .style(styles::container::header(styles));

        let content = Column::new()
            .width(Length::Fill)
            .spacing(spacing::LG)
            .push(header)
            .push(
                Column::new()
                    .padding([0.0, spacing::LG])
                    .push(section::card(
                        ctx.i18n.tr("contact-card-title"),
                        intro,
                        styles,
                    ))
                    .push(Space::new().height(spacing::LG)),
            );

        let page = Container::new(scrollable(
            Container::new(content)
                .width(Length::Fill)
                .max_width(sizing::CONTENT_MAX_WIDTH),
        ))
        .width(Length::Fill)
        .height(Length::Fill)
        .align_x(Horizontal::Center)
        .style(styles::container::page(styles));

        match self.modal.current() {
            None => page.into(),
            Some(ContactModal::Email) => {
                modal::overlay(page, self.email_dialog(&ctx), styles, Message::Dismiss)
            }
        }
    }

    fn link_row<'a>(&self, link: &'static SocialLink) -> Element<'a, Message> {
        let styles = self.styles;

        let glyph = Container::new(
            text(link.name.chars().next().unwrap_or('?').to_string())
                .size(typography::TITLE_SM)
                .color(styles.on_accent),
        )
        .width(sizing::SOCIAL_BADGE)
        .height(sizing::SOCIAL_BADGE)
        .align_x(Horizontal::Center)
        .align_y(Vertical::Center)
        .style(styles::container::badge(theme::rgb(link.color), None));

        let row = Row::new()
            .spacing(spacing::MD)
            .align_y(Vertical::Center)
            .push(glyph)
            .push(
                Column::new()
                    .width(Length::Fill)
                    .spacing(spacing::XXS)
                    .push(
                        text(link.name)
                            .size(typography::BODY_LG)
                            .color(styles.text_title),
                    )
                    .push(
                        text(link.description)
                            .size(typography::BODY_SM)
                            .color(styles.text_subtitle),
                    ),
            )
            .push(text("›").size(typography::TITLE_MD).color(styles.text_subtitle));

        button(row)
            .width(Length::Fill)
            .padding(spacing::MD)
            .style(styles::button::list_item(styles))
            .on_press(Message::LinkPressed(link.id))
            .into()
    }

    fn email_dialog<'a>(&self, ctx: &ViewContext<'a>) -> Element<'a, Message> {
        let styles = self.styles;

        let actions = Row::new()
            .spacing(spacing::SM)
            .push(
                button(
                    text(ctx.i18n.tr("modal-cancel"))
                        .width(Length::Fill)
                        .align_x(Horizontal::Center),
                )
                .width(Length::Fill)
                .padding(spacing::SM)
                .style(styles::button::muted(styles))
                .on_press(Message::Dismiss),
            )
            .push(
                button(
                    text(ctx.i18n.tr("contact-email-modal-confirm"))
                        .width(Length::Fill)
                        .align_x(Horizontal::Center),
                )
                .width(Length::Fill)
                .padding(spacing::SM)
                .style(styles::button::accent(styles))
                .on_press(Message::SendEmail),
            );

        modal::heading(
            ctx.i18n.tr("contact-email-modal-title"),
            Some(ctx.i18n.tr("contact-email-modal-text")),
            styles,
        )
        .push(actions)
        .into()
    }
}

impl ThemeSubscriber for State {
    fn theme_changed(&mut self, theme: ThemeState) {
        self.styles = StyleSet::compute(theme);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fresh() -> State {
        State::new(&ThemeStore::with_state(ThemeState::dark()))
    }

    #[test]
    fn non_email_links_open_immediately() {
        let mut state = fresh();
        let event = state.update(Message::LinkPressed("instagram"));
        assert_eq!(
            event,
            Event::OpenLink("https://www.instagram.com/a.xgelo/".to_string())
        );
        assert_eq!(state.modal(), None);
    }

    #[test]
    fn email_link_asks_first() {
        let mut state = fresh();
        assert_eq!(state.update(Message::LinkPressed("email")), Event::None);
        assert_eq!(state.modal(), Some(ContactModal::Email));
    }

    #[test]
    fn send_email_closes_and_dispatches_personal_address() {
        let mut state = fresh();
        state.update(Message::LinkPressed("email"));
        let event = state.update(Message::SendEmail);
        assert_eq!(state.modal(), None);
        assert_eq!(
            event,
            Event::OpenLink("mailto:yacomurielangelo@gmail.com".to_string())
        );
    }

    #[test]
    fn send_email_without_dialog_is_ignored() {
        let mut state = fresh();
        assert_eq!(state.update(Message::SendEmail), Event::None);
    }

    #[test]
    fn cancel_dispatches_nothing() {
        let mut state = fresh();
        state.update(Message::LinkPressed("email"));
        assert_eq!(state.update(Message::Dismiss), Event::None);
        assert_eq!(state.modal(), None);
    }

    #[test]
    fn unknown_link_is_ignored() {
        let mut state = fresh();
        assert_eq!(state.update(Message::LinkPressed("myspace")), Event::None);
    }
}
