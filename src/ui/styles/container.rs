// SPDX-License-Identifier: MPL-2.0
//! Container styles.
//!
//! Each function takes the screen's [`StyleSet`] by value and returns a
//! closure suitable for `Container::style`, so views never branch on the
//! theme flag themselves.

use crate::ui::design_tokens::{border, radius, shadow};
use crate::ui::theme::StyleSet;
use iced::widget::container;
use iced::{Background, Border, Color, Shadow, Theme};

/// Full-screen page background.
pub fn page(styles: StyleSet) -> impl Fn(&Theme) -> container::Style {
    move |_theme: &Theme| container::Style {
        background: Some(Background::Color(styles.background)),
        text_color: Some(styles.text_body),
        ..Default::default()
    }
}

/// Screen header with rounded bottom corners.
pub fn header(styles: StyleSet) -> impl Fn(&Theme) -> container::Style {
    move |_theme: &Theme| container::Style {
        background: Some(Background::Color(styles.surface)),
        border: Border {
            radius: iced::border::Radius::default()
                .bottom_left(radius::XXL)
                .bottom_right(radius::XXL),
            ..Default::default()
        },
        shadow: Shadow {
            color: styles.shadow,
            offset: shadow::HEADER_OFFSET,
            blur_radius: shadow::HEADER_BLUR,
        },
        ..Default::default()
    }
}

/// Content card (sections, project and document cards).
pub fn card(styles: StyleSet) -> impl Fn(&Theme) -> container::Style {
    move |_theme: &Theme| container::Style {
        background: Some(Background::Color(styles.surface)),
        border: Border {
            radius: radius::LG.into(),
            ..Default::default()
        },
        shadow: Shadow {
            color: styles.shadow,
            offset: shadow::CARD_OFFSET,
            blur_radius: shadow::CARD_BLUR,
        },
        ..Default::default()
    }
}

/// Dialog body floating over the backdrop.
pub fn dialog(styles: StyleSet) -> impl Fn(&Theme) -> container::Style {
    move |_theme: &Theme| container::Style {
        background: Some(Background::Color(styles.surface)),
        text_color: Some(styles.text_body),
        border: Border {
            radius: radius::LG.into(),
            ..Default::default()
        },
        shadow: Shadow {
            color: Color {
                a: 0.25,
                ..styles.accent
            },
            offset: shadow::MODAL_OFFSET,
            blur_radius: shadow::MODAL_BLUR,
        },
        ..Default::default()
    }
}

/// Dimmed layer behind a dialog.
pub fn backdrop(styles: StyleSet) -> impl Fn(&Theme) -> container::Style {
    move |_theme: &Theme| container::Style {
        background: Some(Background::Color(styles.backdrop)),
        ..Default::default()
    }
}

/// Segmented control holding the projects tabs.
pub fn tab_bar(styles: StyleSet) -> impl Fn(&Theme) -> container::Style {
    move |_theme: &Theme| container::Style {
        background: Some(Background::Color(styles.surface_muted)),
        border: Border {
            radius: radius::MD.into(),
            ..Default::default()
        },
        ..Default::default()
    }
}

/// Technology tag on project cards.
pub fn tag(styles: StyleSet) -> impl Fn(&Theme) -> container::Style {
    move |_theme: &Theme| container::Style {
        background: Some(Background::Color(styles.tag_background)),
        text_color: Some(styles.tag_text),
        border: Border {
            radius: radius::SM.into(),
            ..Default::default()
        },
        ..Default::default()
    }
}

/// Pill with a fixed fill and outline (skill tags, status badges).
pub fn pill(background: Color, outline: Option<Color>) -> impl Fn(&Theme) -> container::Style {
    move |_theme: &Theme| container::Style {
        background: Some(Background::Color(background)),
        border: Border {
            radius: radius::FULL.into(),
            width: if outline.is_some() {
                border::WIDTH_SM
            } else {
                0.0
            },
            color: outline.unwrap_or(Color::TRANSPARENT),
        },
        ..Default::default()
    }
}

/// Round badge carrying a brand color (social links, profile picture).
pub fn badge(color: Color, ring: Option<Color>) -> impl Fn(&Theme) -> container::Style {
    move |_theme: &Theme| container::Style {
        background: Some(Background::Color(color)),
        text_color: Some(Color::WHITE),
        border: Border {
            radius: radius::FULL.into(),
            width: if ring.is_some() { border::WIDTH_MD } else { 0.0 },
            color: ring.unwrap_or(Color::TRANSPARENT),
        },
        ..Default::default()
    }
}

/// Placeholder drawn where a document cover would go.
pub fn cover(styles: StyleSet) -> impl Fn(&Theme) -> container::Style {
    move |_theme: &Theme| container::Style {
        background: Some(Background::Color(styles.surface_muted)),
        text_color: Some(styles.text_subtitle),
        border: Border {
            radius: radius::SM.into(),
            ..Default::default()
        },
        ..Default::default()
    }
}

/// Bottom navigation strip.
pub fn navbar(styles: StyleSet) -> impl Fn(&Theme) -> container::Style {
    move |_theme: &Theme| container::Style {
        background: Some(Background::Color(styles.surface)),
        border: Border {
            width: border::WIDTH_SM,
            color: styles.border,
            ..Default::default()
        },
        ..Default::default()
    }
}
