// SPDX-License-Identifier: MPL-2.0
//! Home screen: profile header, about section, skills and calls to action.
//!
//! The header carries the theme toggle and two shortcuts. "GitHub" asks for
//! confirmation before opening the profile; "Email" lets the visitor pick the
//! personal or the university address. Both dialogs share one
//! [`ModalState`], so at most one is ever shown.

use crate::catalog::{self, Profile};
use crate::i18n::fluent::I18n;
use crate::ui::components::{badge, modal, modal::ModalState, section};
use crate::ui::design_tokens::{sizing, spacing, typography};
use crate::ui::styles;
use crate::ui::theme::StyleSet;
use crate::ui::theming::{ThemeState, ThemeStore, ThemeSubscriber};
use iced::alignment::{Horizontal, Vertical};
use iced::widget::{button, scrollable, text, Column, Container, Row, Space};
use iced::{Element, Length};

/// Dialogs the home screen can show.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HomeModal {
    GitHub,
    Email,
}

/// Address offered by the email chooser.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EmailChoice {
    Personal,
    University,
}

impl EmailChoice {
    #[must_use]
    pub fn mailto(self, profile: &Profile) -> String {
        match self {
            EmailChoice::Personal => profile.personal_email.mailto(),
            EmailChoice::University => profile.university_email.mailto(),
        }
    }
}

#[derive(Debug, Clone)]
pub enum Message {
    ToggleTheme,
    OpenGitHubModal,
    OpenEmailModal,
    ConfirmGitHub,
    ChooseEmail(EmailChoice),
    Dismiss,
    ViewProjects,
    /// Secondary call to action; opens the email chooser.
    GetInTouch,
}

/// Events propagated to the parent application.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    None,
    ToggleTheme,
    OpenLink(String),
    ShowProjects,
}

/// Contextual data needed to render the home screen.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
}

#[derive(Debug, Clone)]
pub struct State {
    modal: ModalState<HomeModal>,
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
    pub fn modal(&self) -> Option<HomeModal> {
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
        let profile = catalog::profile();
        match message {
            Message::ToggleTheme => Event::ToggleTheme,
            Message::OpenGitHubModal => {
                self.modal.open(HomeModal::GitHub);
                Event::None
            }
            Message::OpenEmailModal | Message::GetInTouch => {
                self.modal.open(HomeModal::Email);
                Event::None
            }
            Message::ConfirmGitHub => {
                if !self.modal.is_open(HomeModal::GitHub) {
                    return Event::None;
                }
                self.modal.close();
                Event::OpenLink(profile.github_url.to_string())
            }
            Message::ChooseEmail(choice) => {
                if !self.modal.is_open(HomeModal::Email) {
                    return Event::None;
                }
                self.modal.close();
                Event::OpenLink(choice.mailto(profile))
            }
            Message::Dismiss => {
                self.modal.close();
                Event::None
            }
            Message::ViewProjects => Event::ShowProjects,
        }
    }

    pub fn view<'a>(&'a self, ctx: ViewContext<'a>) -> Element<'a, Message> {
        let profile = catalog::profile();
        let styles = self.styles;

        let content = Column::new()
            .width(Length::Fill)
            .spacing(spacing::LG)
            .push(self.header(profile, &ctx))
            .push(
                Column::new()
                    .spacing(spacing::LG)
                    .padding([0.0, spacing::LG])
                    .push(section::card(
                        ctx.i18n.tr("home-about-title"),
                        text(profile.about)
                            .size(typography::BODY)
                            .color(styles.text_body),
                        styles,
                    ))
                    .push(section::card(
                        ctx.i18n.tr("home-skills-title"),
                        skills(profile),
                        styles,
                    ))
                    .push(self.calls_to_action(&ctx))
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
            Some(kind) => modal::overlay(
                page,
                self.dialog(kind, profile, &ctx),
                styles,
                Message::Dismiss,
            ),
        }
    }

    fn header<'a>(&self, profile: &'static Profile, ctx: &ViewContext<'a>) -> Element<'a, Message> {
        let styles = self.styles;

        let (glyph, hint_key) = if styles.theme.is_dark_mode {
            ("☀", "home-theme-toggle-to-light")
        } else {
            ("☾", "home-theme-toggle-to-dark")
        };
        let toggle = button(
            text(glyph)
                .size(typography::TITLE_SM)
                .align_x(Horizontal::Center),
        )
        .width(sizing::ICON_MD + spacing::MD)
        .height(sizing::ICON_MD + spacing::MD)
        .style(styles::button::icon(styles))
        .on_press(Message::ToggleTheme);
        let toggle_row = Row::new()
            .push(Space::new().width(Length::Fill))
            .push(styles::tooltip::styled(
                toggle,
                ctx.i18n.tr(hint_key),
                styles::tooltip::Position::Left,
                styles,
            ));

        let avatar = Container::new(
            text(initials(profile.name))
                .size(typography::TITLE_LG)
                .color(styles.on_accent),
        )
        .width(sizing::AVATAR)
        .height(sizing::AVATAR)
        .align_x(Horizontal::Center)
        .align_y(Vertical::Center)
        .style(styles::container::badge(styles.accent, Some(styles.surface)));

        let chips = Row::new()
            .spacing(spacing::SM)
            .push(
                button(text(ctx.i18n.tr("home-github-button")).size(typography::BODY_SM))
                    .padding([spacing::XS, spacing::MD])
                    .style(styles::button::chip(styles))
                    .on_press(Message::OpenGitHubModal),
            )
            .push(
                button(text(ctx.i18n.tr("home-email-button")).size(typography::BODY_SM))
                    .padding([spacing::XS, spacing::MD])
                    .style(styles::button::chip(styles))
                    .on_press(Message::OpenEmailModal),
            );

        let column = Column::new()
            .width(Length::Fill)
            .spacing(spacing::SM)
            .align_x(Horizontal::Center)
            .push(toggle_row)
            .push(avatar)
            .push(
                text(profile.name)
                    .size(typography::TITLE_LG)
                    .color(styles.text_title)
                    .align_x(Horizontal::Center),
            )
            .push(
                text(profile.title)
                    .size(typography::BODY_LG)
                    .color(styles.accent),
            )
            .push(
                text(profile.subtitle)
                    .size(typography::BODY_SM)
                    .color(styles.text_subtitle),
            )
            .push(chips);

        Container::new(column)
            .width(Length::Fill)
            .padding([spacing::LG, spacing::LG])
            .style(styles::container::header(styles))
            .into()
    }

    fn calls_to_action<'a>(&self, ctx: &ViewContext<'a>) -> Element<'a, Message> {
        let styles = self.styles;
        Column::new()
            .spacing(spacing::SM)
            .push(
                button(
                    text(ctx.i18n.tr("home-cta-projects"))
                        .size(typography::BODY_LG)
                        .width(Length::Fill)
                        .align_x(Horizontal::Center),
                )
                .width(Length::Fill)
                .padding(spacing::MD)
                .style(styles::button::call_to_action(styles))
                .on_press(Message::ViewProjects),
            )
            .push(
                button(
                    text(ctx.i18n.tr("home-cta-contact"))
                        .size(typography::BODY_LG)
                        .width(Length::Fill)
                        .align_x(Horizontal::Center),
                )
                .width(Length::Fill)
                .padding(spacing::MD)
                .style(styles::button::outline(styles))
                .on_press(Message::GetInTouch),
            )
            .into()
    }

    fn dialog<'a>(
        &self,
        kind: HomeModal,
        profile: &'static Profile,
        ctx: &ViewContext<'a>,
    ) -> Element<'a, Message> {
        let styles = self.styles;
        let cancel = button(
            text(ctx.i18n.tr("modal-cancel"))
                .width(Length::Fill)
                .align_x(Horizontal::Center),
        )
        .width(Length::Fill)
        .padding(spacing::SM)
        .style(styles::button::muted(styles))
        .on_press(Message::Dismiss);

        match kind {
            HomeModal::GitHub => {
                let confirm = button(
                    text(ctx.i18n.tr("home-github-modal-confirm"))
                        .width(Length::Fill)
                        .align_x(Horizontal::Center),
                )
                .width(Length::Fill)
                .padding(spacing::SM)
                .style(styles::button::accent(styles))
                .on_press(Message::ConfirmGitHub);

                modal::heading(
                    ctx.i18n.tr("home-github-modal-title"),
                    Some(ctx.i18n.tr("home-github-modal-text")),
                    styles,
                )
                .push(
                    Row::new()
                        .spacing(spacing::SM)
                        .padding([spacing::SM, 0.0])
                        .push(cancel)
                        .push(confirm),
                )
                .into()
            }
            HomeModal::Email => {
                let choice = |label: String, address: &'static str, pick: EmailChoice| {
                    button(
                        Column::new()
                            .spacing(spacing::XXS)
                            .push(text(label).size(typography::BODY).color(styles.text_title))
                            .push(
                                text(address)
                                    .size(typography::CAPTION)
                                    .color(styles.text_subtitle),
                            ),
                    )
                    .width(Length::Fill)
                    .padding(spacing::MD)
                    .style(styles::button::list_item(styles))
                    .on_press(Message::ChooseEmail(pick))
                };

                modal::heading(
                    ctx.i18n.tr("home-email-modal-title"),
                    Some(ctx.i18n.tr("home-email-modal-text")),
                    styles,
                )
                .push(choice(
                    ctx.i18n.tr("home-email-personal"),
                    profile.personal_email.address,
                    EmailChoice::Personal,
                ))
                .push(choice(
                    ctx.i18n.tr("home-email-university"),
                    profile.university_email.address,
                    EmailChoice::University,
                ))
                .push(cancel)
                .into()
            }
        }
    }
}

impl ThemeSubscriber for State {
    fn theme_changed(&mut self, theme: ThemeState) {
        self.styles = StyleSet::compute(theme);
    }
}

fn skills<'a>(profile: &'static Profile) -> Element<'a, Message> {
    profile
        .skills
        .iter()
        .flat_map(|group| group.skills.iter().map(move |name| (*name, group.tier)))
        .fold(Row::new().spacing(spacing::XS), |row, (name, tier)| {
            row.push(badge::skill(name, tier))
        })
        .wrap()
        .vertical_spacing(spacing::XS)
        .into()
}

/// Up to two uppercase initials drawn in place of the profile picture.
fn initials(name: &str) -> String {
    let words: Vec<&str> = name
        .split_whitespace()
        .filter(|word| word.chars().next().is_some_and(char::is_alphabetic))
        .collect();
    let picked = match words.as_slice() {
        [] => Vec::new(),
        [only] => vec![*only],
        [first, .., last] => vec![*first, *last],
    };
    picked
        .iter()
        .filter_map(|word| word.chars().next())
        .flat_map(char::to_uppercase)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn light_state() -> State {
        State::new(&ThemeStore::with_state(ThemeState::light()))
    }

    #[test]
    fn starts_without_dialog() {
        assert_eq!(light_state().modal(), None);
    }

    #[test]
    fn github_confirmation_closes_dialog_and_opens_profile() {
        let mut state = light_state();
        assert_eq!(state.update(Message::OpenGitHubModal), Event::None);
        assert_eq!(state.modal(), Some(HomeModal::GitHub));

        let event = state.update(Message::ConfirmGitHub);
        assert_eq!(state.modal(), None);
        assert_eq!(
            event,
            Event::OpenLink("https://github.com/geloyaco".to_string())
        );
    }

    #[test]
    fn choosing_personal_email_dispatches_its_mailto() {
        let mut state = light_state();
        state.update(Message::OpenEmailModal);
        assert_eq!(state.modal(), Some(HomeModal::Email));
        let event = state.update(Message::ChooseEmail(EmailChoice::Personal));
        assert_eq!(state.modal(), None);
        assert_eq!(
            event,
            Event::OpenLink("mailto:yacomurielangelo@gmail.com".to_string())
        );
    }

    #[test]
    fn choosing_university_email_dispatches_its_mailto() {
        let mut state = light_state();
        state.update(Message::OpenEmailModal);
        let event = state.update(Message::ChooseEmail(EmailChoice::University));
        assert_eq!(state.modal(), None);
        assert_eq!(
            event,
            Event::OpenLink("mailto:myaco_220000000228@uic.edu.ph".to_string())
        );
    }

    #[test]
    fn cancel_closes_without_dispatch() {
        let mut state = light_state();
        state.update(Message::OpenEmailModal);
        assert_eq!(state.update(Message::Dismiss), Event::None);
        assert_eq!(state.modal(), None);
    }

    #[test]
    fn dismiss_without_dialog_is_a_no_op() {
        let mut state = light_state();
        assert_eq!(state.update(Message::Dismiss), Event::None);
        assert_eq!(state.modal(), None);
    }

    #[test]
    fn opening_email_replaces_github_dialog() {
        let mut state = light_state();
        state.update(Message::OpenGitHubModal);
        state.update(Message::OpenEmailModal);
        assert_eq!(state.modal(), Some(HomeModal::Email));
        // GitHub confirmation is stale once its dialog is gone
        assert_eq!(state.update(Message::ConfirmGitHub), Event::None);
        assert_eq!(state.modal(), Some(HomeModal::Email));
    }

    #[test]
    fn toggle_is_forwarded_and_leaves_dialog_alone() {
        let mut state = light_state();
        state.update(Message::OpenGitHubModal);
        assert_eq!(state.update(Message::ToggleTheme), Event::ToggleTheme);
        assert_eq!(state.modal(), Some(HomeModal::GitHub));
    }

    #[test]
    fn theme_notification_recomputes_styles() {
        let mut state = light_state();
        let before = state.styles();
        state.theme_changed(ThemeState::dark());
        assert_ne!(state.styles().background, before.background);
        assert_eq!(state.styles(), StyleSet::compute(ThemeState::dark()));
    }

    #[test]
    fn calls_to_action() {
        let mut state = light_state();
        assert_eq!(state.update(Message::ViewProjects), Event::ShowProjects);
        assert_eq!(state.update(Message::GetInTouch), Event::None);
        assert_eq!(state.modal(), Some(HomeModal::Email));
    }

    #[test]
    fn initials_use_first_and_last_word() {
        assert_eq!(initials("Muriel Angelo M. Yaco"), "MY");
        assert_eq!(initials("cher"), "C");
        assert_eq!(initials(""), "");
    }
}
