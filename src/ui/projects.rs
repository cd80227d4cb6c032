// SPDX-License-Identifier: MPL-2.0
//! Projects screen: GitHub repositories and school documents.
//!
//! A two-segment tab control switches between the listings. Each GitHub
//! project card opens a detail dialog that can hand the repository URL to
//! the link dispatcher.

use crate::catalog::{self, Document, Project};
use crate::i18n::fluent::I18n;
use crate::ui::components::{badge, modal};
use crate::ui::design_tokens::{sizing, spacing, typography};
use crate::ui::styles;
use crate::ui::theme::StyleSet;
use crate::ui::theming::{ThemeState, ThemeStore, ThemeSubscriber};
use iced::alignment::{Horizontal, Vertical};
use iced::widget::{button, scrollable, text, Column, Container, Row, Space};
use iced::{Element, Length};

/// Listing shown by the projects screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Tab {
    #[default]
    Github,
    School,
}

impl Tab {
    pub const ALL: [Tab; 2] = [Tab::Github, Tab::School];

    fn label_key(self) -> &'static str {
        match self {
            Tab::Github => "projects-tab-github",
            Tab::School => "projects-tab-school",
        }
    }

    fn subtitle_key(self) -> &'static str {
        match self {
            Tab::Github => "projects-subtitle-github",
            Tab::School => "projects-subtitle-school",
        }
    }
}

/// Catalog entries visible under a tab.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Listing {
    Projects(&'static [Project]),
    Documents(&'static [Document]),
}

impl Listing {
    #[must_use]
    pub fn len(self) -> usize {
        match self {
            Listing::Projects(items) => items.len(),
            Listing::Documents(items) => items.len(),
        }
    }

    #[must_use]
    pub fn is_empty(self) -> bool {
        self.len() == 0
    }
}

#[derive(Debug, Clone)]
pub enum Message {
    SelectTab(Tab),
    ViewDetails(u32),
    CloseDetails,
    OpenOnGitHub,
}

/// Events propagated to the parent application.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    None,
    OpenLink(String),
}

/// Contextual data needed to render the projects screen.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
}

#[derive(Debug, Clone)]
pub struct State {
    active_tab: Tab,
    selected_project: Option<&'static Project>,
    styles: StyleSet,
}

impl State {
    #[must_use]
    pub fn new(theme: &ThemeStore) -> Self {
        Self {
            active_tab: Tab::default(),
            selected_project: None,
            styles: StyleSet::compute(theme.state()),
        }
    }

    #[must_use]
    pub fn active_tab(&self) -> Tab {
        self.active_tab
    }

    #[must_use]
    pub fn selected_project(&self) -> Option<&'static Project> {
        self.selected_project
    }

    #[must_use]
    pub fn styles(&self) -> StyleSet {
        self.styles
    }

    #[must_use]
    pub fn listing(&self) -> Listing {
        match self.active_tab {
            Tab::Github => Listing::Projects(catalog::projects()),
            Tab::School => Listing::Documents(catalog::documents()),
        }
    }

    pub fn dismiss_modal(&mut self) {
        self.selected_project = None;
    }

    pub fn update(&mut self, message: Message) -> Event {
        match message {
            Message::SelectTab(tab) => {
                self.active_tab = tab;
                Event::None
            }
            Message::ViewDetails(id) => {
                match catalog::project_by_id(id) {
                    Some(project) => self.selected_project = Some(project),
                    None => tracing::warn!(id, "details requested for unknown project"),
                }
                Event::None
            }
            Message::CloseDetails => {
                self.selected_project = None;
                Event::None
            }
            Message::OpenOnGitHub => match self.selected_project.take() {
                Some(project) => Event::OpenLink(project.github.to_string()),
                None => Event::None,
            },
        }
    }

    pub fn view<'a>(&'a self, ctx: ViewContext<'a>) -> Element<'a, Message> {
        let styles = self.styles;

        let cards: Column<'a, Message> = match self.listing() {
            Listing::Projects(projects) => projects.iter().fold(
                Column::new().spacing(spacing::MD),
                |column, project| column.push(self.project_card(project, &ctx)),
            ),
            Listing::Documents(documents) => documents.iter().fold(
                Column::new().spacing(spacing::MD),
                |column, document| column.push(self.document_card(document, &ctx)),
            ),
        };

        let content = Column::new()
            .width(Length::Fill)
            .spacing(spacing::LG)
            .push(self.header(&ctx))
            .push(
                Column::new()
                    .padding([0.0, spacing::LG])
                    .push(cards)
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

        match self.selected_project {
            None => page.into(),
            Some(project) => modal::overlay(
                page,
                self.details(project, &ctx),
                styles,
                Message::CloseDetails,
            ),
        }
    }

    fn header<'a>(&self, ctx: &ViewContext<'a>) -> Element<'a, Message> {
        let styles = self.styles;

        let tabs = Tab::ALL.iter().fold(
            Row::new().spacing(spacing::XXS),
            |row, &tab| {
                let active = tab == self.active_tab;
                row.push(
                    button(
                        text(ctx.i18n.tr(tab.label_key()))
                            .size(typography::BODY_SM)
                            .width(Length::Fill)
                            .align_x(Horizontal::Center),
                    )
                    .width(Length::Fill)
                    .padding(spacing::XS)
                    .style(styles::button::tab(styles, active))
                    .on_press(Message::SelectTab(tab)),
                )
            },
        );

        let column = Column::new()
            .width(Length::Fill)
            .spacing(spacing::SM)
            .align_x(Horizontal::Center)
            .push(
                text(ctx.i18n.tr("projects-title"))
                    .size(typography::TITLE_LG)
                    .color(styles.text_title),
            )
            .push(
                text(ctx.i18n.tr(self.active_tab.subtitle_key()))
                    .size(typography::BODY_SM)
                    .color(styles.text_subtitle)
                    .align_x(Horizontal::Center),
            )
            .push(
                Container::new(tabs)
                    .width(Length::Fill)
                    .padding(spacing::XXS)
                    .style(styles::container::tab_bar(styles)),
            );

        Container::new(column)
            .width(Length::Fill)
            .padding(spacing::LG)
            .style(styles::container::header(styles))
            .into()
    }

    fn project_card<'a>(&self, project: &'static Project, ctx: &ViewContext<'a>) -> Element<'a, Message> {
        let styles = self.styles;

        let heading = Row::new()
            .spacing(spacing::MD)
            .align_y(Vertical::Center)
            .push(text(project.image).size(sizing::EMOJI))
            .push(
                Column::new()
                    .width(Length::Fill)
                    .spacing(spacing::XXS)
                    .push(
                        text(project.title)
                            .size(typography::TITLE_SM)
                            .color(styles.text_title),
                    )
                    .push(
                        text(project.category)
                            .size(typography::BODY_SM)
                            .color(styles.accent),
                    ),
            )
            .push(badge::status(project.status, ctx.i18n));

        let body = Column::new()
            .spacing(spacing::SM)
            .push(heading)
            .push(
                text(project.description)
                    .size(typography::BODY_SM)
                    .color(styles.text_body),
            )
            .push(badge::technologies(project.technologies, styles))
            .push(
                button(
                    text(ctx.i18n.tr("projects-view-details"))
                        .size(typography::BODY_SM)
                        .width(Length::Fill)
                        .align_x(Horizontal::Center),
                )
                .width(Length::Fill)
                .padding(spacing::SM)
                .style(styles::button::accent(styles))
                .on_press(Message::ViewDetails(project.id)),
            );

        Container::new(body)
            .width(Length::Fill)
            .padding(spacing::LG)
            .style(styles::container::card(styles))
            .into()
    }

    fn document_card<'a>(
        &self,
        document: &'static Document,
        ctx: &ViewContext<'a>,
    ) -> Element<'a, Message> {
        let styles = self.styles;

        // Cover art is not bundled; the placeholder keeps the card's proportions.
        let cover = Container::new(
            Column::new()
                .spacing(spacing::XS)
                .align_x(Horizontal::Center)
                .push(text("📄").size(sizing::EMOJI_LG))
                .push(text(document.kind).size(typography::CAPTION)),
        )
        .width(Length::Fill)
        .height(sizing::COVER_HEIGHT)
        .align_x(Horizontal::Center)
        .align_y(Vertical::Center)
        .style(styles::container::cover(styles));

        let meta = Row::new()
            .spacing(spacing::SM)
            .align_y(Vertical::Center)
            .push(
                text(format!("{} • {}", document.subject, document.semester))
                    .size(typography::BODY_SM)
                    .color(styles.accent)
                    .width(Length::Fill),
            )
            .push(badge::status(document.status, ctx.i18n));

        let body = Column::new()
            .spacing(spacing::SM)
            .push(cover)
            .push(
                text(document.title)
                    .size(typography::TITLE_SM)
                    .color(styles.text_title),
            )
            .push(meta)
            .push(
                text(document.description)
                    .size(typography::BODY_SM)
                    .color(styles.text_body),
            );

        Container::new(body)
            .width(Length::Fill)
            .padding(spacing::LG)
            .style(styles::container::card(styles))
            .into()
    }

    fn details<'a>(&self, project: &'static Project, ctx: &ViewContext<'a>) -> Element<'a, Message> {
        let styles = self.styles;

        let actions = Row::new()
            .spacing(spacing::SM)
            .push(
                button(
                    text(ctx.i18n.tr("projects-modal-close"))
                        .width(Length::Fill)
                        .align_x(Horizontal::Center),
                )
                .width(Length::Fill)
                .padding(spacing::SM)
                .style(styles::button::muted(styles))
                .on_press(Message::CloseDetails),
            )
            .push(
                button(
                    text(ctx.i18n.tr("projects-modal-github"))
                        .width(Length::Fill)
                        .align_x(Horizontal::Center),
                )
                .width(Length::Fill)
                .padding(spacing::SM)
                .style(styles::button::accent(styles))
                .on_press(Message::OpenOnGitHub),
            );

        Column::new()
            .spacing(spacing::MD)
            .align_x(Horizontal::Center)
            .push(text(project.image).size(sizing::EMOJI_LG))
            .push(
                text(project.title)
                    .size(typography::TITLE_MD)
                    .color(styles.text_title)
                    .align_x(Horizontal::Center),
            )
            .push(
                text(project.category)
                    .size(typography::BODY_SM)
                    .color(styles.accent),
            )
            .push(badge::status(project.status, ctx.i18n))
            .push(
                text(project.description)
                    .size(typography::BODY_SM)
                    .color(styles.text_body),
            )
            .push(
                Column::new()
                    .width(Length::Fill)
                    .spacing(spacing::XS)
                    .push(
                        text(ctx.i18n.tr("projects-technologies"))
                            .size(typography::BODY_SM)
                            .color(styles.text_title),
                    )
                    .push(badge::technologies(project.technologies, styles)),
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
        State::new(&ThemeStore::with_state(ThemeState::light()))
    }

    #[test]
    fn starts_on_github_tab_without_selection() {
        let state = fresh();
        assert_eq!(state.active_tab(), Tab::Github);
        assert!(state.selected_project().is_none());
        assert_eq!(state.listing(), Listing::Projects(catalog::projects()));
    }

    #[test]
    fn school_tab_lists_documents() {
        let mut state = fresh();
        state.update(Message::SelectTab(Tab::School));
        assert_eq!(state.listing(), Listing::Documents(catalog::documents()));
        assert_eq!(state.listing().len(), 3);
    }

    #[test]
    fn reselecting_active_tab_changes_nothing() {
        let mut state = fresh();
        state.update(Message::SelectTab(Tab::Github));
        assert_eq!(state.active_tab(), Tab::Github);
        assert_eq!(state.listing().len(), 5);
    }

    #[test]
    fn view_details_selects_catalog_entry() {
        let mut state = fresh();
        state.update(Message::ViewDetails(3));
        let selected = state.selected_project().map(|p| p.title);
        assert_eq!(selected, Some("KaffeHaus Coffee Shop"));
        assert!(std::ptr::eq(
            state.selected_project().unwrap(),
            catalog::project_by_id(3).unwrap()
        ));
    }

    #[test]
    fn unknown_project_leaves_dialog_closed() {
        let mut state = fresh();
        assert_eq!(state.update(Message::ViewDetails(999)), Event::None);
        assert!(state.selected_project().is_none());
    }

    #[test]
    fn open_on_github_closes_dialog_and_emits_repository() {
        let mut state = fresh();
        state.update(Message::ViewDetails(3));
        let event = state.update(Message::OpenOnGitHub);
        assert_eq!(
            event,
            Event::OpenLink("https://github.com/geloyaco/KaffeHaus".to_string())
        );
        assert!(state.selected_project().is_none());
    }

    #[test]
    fn open_on_github_without_selection_is_ignored() {
        let mut state = fresh();
        assert_eq!(state.update(Message::OpenOnGitHub), Event::None);
    }

    #[test]
    fn close_details_keeps_tab() {
        let mut state = fresh();
        state.update(Message::ViewDetails(1));
        state.update(Message::CloseDetails);
        assert!(state.selected_project().is_none());
        assert_eq!(state.active_tab(), Tab::Github);
    }

    #[test]
    fn theme_notification_keeps_selection() {
        let mut state = fresh();
        state.update(Message::ViewDetails(2));
        state.theme_changed(ThemeState::dark());
        assert_eq!(state.styles(), StyleSet::compute(ThemeState::dark()));
        assert_eq!(state.selected_project().map(|p| p.id), Some(2));
    }
}
