// SPDX-License-Identifier: MPL-2.0
//! Titled card used for the home and contact sections.

use crate::ui::design_tokens::{spacing, typography};
use crate::ui::styles;
use crate::ui::theme::StyleSet;
use iced::widget::{text, Column, Container};
use iced::{Element, Length};

pub fn card<'a, Message: 'a>(
    title: String,
    body: impl Into<Element<'a, Message>>,
    styles: StyleSet,
) -> Element<'a, Message> {
    let content = Column::new()
        .spacing(spacing::MD)
        .push(
            text(title)
                .size(typography::TITLE_MD)
                .color(styles.text_title),
        )
        .push(body);

    Container::new(content)
        .padding(spacing::LG)
        .width(Length::Fill)
        .style(styles::container::card(styles))
        .into()
}
