// SPDX-License-Identifier: MPL-2.0
//! Small labelled pills: status badges, technology tags and skill tags.

use crate::catalog::{SkillTier, Status};
use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{palette, spacing, typography};
use crate::ui::styles;
use crate::ui::theme::{self, StyleSet};
use iced::widget::{text, Container, Row};
use iced::Element;

/// Colored badge showing a localized status label.
pub fn status<'a, Message: 'a>(status: Status, i18n: &I18n) -> Element<'a, Message> {
    let (background, foreground) = theme::status_badge_colors(status);
    Container::new(
        text(i18n.tr(status.i18n_key()))
            .size(typography::CAPTION)
            .color(foreground),
    )
    .padding([spacing::XXS, spacing::SM])
    .style(styles::container::pill(background, None))
    .into()
}

/// Row of technology tags wrapping onto new lines when narrow.
pub fn technologies<'a, Message: 'a>(
    names: &'static [&'static str],
    styles: StyleSet,
) -> Element<'a, Message> {
    names
        .iter()
        .fold(Row::new().spacing(spacing::XS), |row, name| {
            row.push(
                Container::new(text(*name).size(typography::CAPTION))
                    .padding([spacing::XXS, spacing::XS])
                    .style(styles::container::tag(styles)),
            )
        })
        .wrap()
        .vertical_spacing(spacing::XS)
        .into()
}

/// Skill pill tinted by its tier.
pub fn skill<'a, Message: 'a>(name: &'static str, tier: SkillTier) -> Element<'a, Message> {
    let (background, outline) = theme::skill_tier_colors(tier);
    Container::new(
        text(name)
            .size(typography::BODY_SM)
            .color(palette::INDIGO_950),
    )
    .padding([spacing::XS, spacing::MD])
    .style(styles::container::pill(background, Some(outline)))
    .into()
}
