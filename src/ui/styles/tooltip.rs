// SPDX-License-Identifier: MPL-2.0
//! Tooltip styles.
//!
//! Tooltips invert the page contrast: dark bubbles on the light theme and
//! light bubbles on the dark theme.

use crate::ui::design_tokens::{border, palette, radius, shadow, spacing, typography};
use crate::ui::theme::StyleSet;
use iced::widget::{container, tooltip, Container, Text};
use iced::{Background, Border, Color, Element, Shadow, Theme};

pub use iced::widget::tooltip::Position;

pub fn bubble(styles: StyleSet) -> impl Fn(&Theme) -> container::Style {
    move |_theme: &Theme| {
        let (background, text_color) = if styles.theme.is_dark_mode {
            (palette::GRAY_100, palette::NEUTRAL_950)
        } else {
            (palette::INDIGO_950, palette::WHITE)
        };
        container::Style {
            background: Some(Background::Color(background)),
            text_color: Some(text_color),
            border: Border {
                radius: radius::SM.into(),
                width: border::WIDTH_SM,
                color: styles.border,
            },
            shadow: Shadow {
                color: Color::from_rgba(0.0, 0.0, 0.0, 0.25),
                offset: shadow::CARD_OFFSET,
                blur_radius: shadow::CARD_BLUR,
            },
            ..Default::default()
        }
    }
}

/// Wraps `content` in a tooltip showing `tip`.
pub fn styled<'a, Message: 'a>(
    content: impl Into<Element<'a, Message>>,
    tip: impl Into<String>,
    position: Position,
    styles: StyleSet,
) -> tooltip::Tooltip<'a, Message, Theme, iced::Renderer> {
    let tip_container = Container::new(Text::new(tip.into()).size(typography::CAPTION))
        .padding(spacing::XS)
        .style(bubble(styles));

    tooltip(content, tip_container, position).gap(spacing::XS)
}
