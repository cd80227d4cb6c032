// SPDX-License-Identifier: MPL-2.0
//! Modal dialogs.
//!
//! [`ModalState`] tracks which dialog of a screen is visible. Holding an
//! `Option` rather than one flag per dialog means two dialogs can never be
//! open together. [`overlay`] draws a dialog above the screen content with a
//! backdrop that reports clicks as a dismissal.

use crate::ui::design_tokens::{sizing, spacing, typography};
use crate::ui::styles;
use crate::ui::theme::StyleSet;
use iced::alignment::Horizontal;
use iced::widget::{center, mouse_area, opaque, text, Column, Container, Stack};
use iced::{Element, Length};

/// Which dialog of kind `K` is open, if any.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ModalState<K> {
    open: Option<K>,
}

impl<K> Default for ModalState<K> {
    fn default() -> Self {
        Self { open: None }
    }
}

impl<K: Copy + PartialEq> ModalState<K> {
    #[must_use]
    pub fn closed() -> Self {
        Self::default()
    }

    /// Shows `kind`, replacing any dialog already open.
    pub fn open(&mut self, kind: K) {
        self.open = Some(kind);
    }

    /// Hides the current dialog. Returns what was open; closing an already
    /// closed state is a no-op.
    pub fn close(&mut self) -> Option<K> {
        self.open.take()
    }

    #[must_use]
    pub fn current(&self) -> Option<K> {
        self.open
    }

    #[must_use]
    pub fn is_open(&self, kind: K) -> bool {
        self.open == Some(kind)
    }
}

/// Layers `dialog` over `base`. Clicking outside the dialog emits
/// `on_dismiss`; clicks never reach `base` while the dialog is shown.
pub fn overlay<'a, Message>(
    base: impl Into<Element<'a, Message>>,
    dialog: impl Into<Element<'a, Message>>,
    styles: StyleSet,
    on_dismiss: Message,
) -> Element<'a, Message>
where
    Message: Clone + 'a,
{
    let body = Container::new(dialog)
        .padding(spacing::LG)
        .width(Length::Fill)
        .max_width(sizing::MODAL_MAX_WIDTH)
        .style(styles::container::dialog(styles));

    let backdrop = mouse_area(
        center(opaque(body))
            .padding(spacing::LG)
            .style(styles::container::backdrop(styles)),
    )
    .on_press(on_dismiss);

    Stack::new()
        .width(Length::Fill)
        .height(Length::Fill)
        .push(base)
        .push(opaque(backdrop))
        .into()
}

/// Title and explanatory paragraph shared by every dialog.
pub fn heading<'a, Message: 'a>(
    title: String,
    body: Option<String>,
    styles: StyleSet,
) -> Column<'a, Message> {
    let mut column = Column::new()
        .width(Length::Fill)
        .spacing(spacing::SM)
        .align_x(Horizontal::Center)
        .push(
            text(title)
                .size(typography::TITLE_MD)
                .color(styles.text_title)
                .align_x(Horizontal::Center),
        );

    if let Some(body) = body {
        column = column.push(
            text(body)
                .size(typography::BODY)
                .color(styles.text_body)
                .align_x(Horizontal::Center),
        );
    }

    column
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    enum Kind {
        First,
        Second,
    }

    #[test]
    fn starts_closed() {
        let state: ModalState<Kind> = ModalState::closed();
        assert_eq!(state.current(), None);
    }

    #[test]
    fn opening_another_dialog_replaces_the_first() {
        let mut state = ModalState::closed();
        state.open(Kind::First);
        state.open(Kind::Second);
        assert!(state.is_open(Kind::Second));
        assert!(!state.is_open(Kind::First));
    }

    #[test]
    fn close_is_idempotent() {
        let mut state = ModalState::closed();
        state.open(Kind::First);
        assert_eq!(state.close(), Some(Kind::First));
        assert_eq!(state.close(), None);
        assert_eq!(state, ModalState::closed());
    }
}
