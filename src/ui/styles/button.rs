// SPDX-License-Identifier: MPL-2.0
//! Centralized button styles.

use crate::ui::design_tokens::{border, radius, shadow};
use crate::ui::theme::StyleSet;
use iced::widget::button;
use iced::{Background, Border, Color, Shadow, Theme};

/// Darkens the fill slightly while hovered or pressed.
fn interaction_tint(color: Color, status: button::Status) -> Color {
    let factor = match status {
        button::Status::Hovered => 0.92,
        button::Status::Pressed => 0.85,
        _ => 1.0,
    };
    Color {
        r: color.r * factor,
        g: color.g * factor,
        b: color.b * factor,
        a: color.a,
    }
}

fn filled(background: Color, text_color: Color, corner: f32, status: button::Status) -> button::Style {
    button::Style {
        background: Some(Background::Color(interaction_tint(background, status))),
        text_color,
        border: Border {
            radius: corner.into(),
            ..Default::default()
        },
        shadow: shadow::NONE,
        ..Default::default()
    }
}

/// Brand-colored action (confirm buttons, "View Details", main CTA).
pub fn accent(styles: StyleSet) -> impl Fn(&Theme, button::Status) -> button::Style {
    move |_theme: &Theme, status: button::Status| {
        filled(styles.accent, styles.on_accent, radius::MD, status)
    }
}

/// Large call-to-action with a soft brand glow.
pub fn call_to_action(styles: StyleSet) -> impl Fn(&Theme, button::Status) -> button::Style {
    move |_theme: &Theme, status: button::Status| button::Style {
        shadow: Shadow {
            color: Color {
                a: 0.3,
                ..styles.accent
            },
            offset: shadow::HEADER_OFFSET,
            blur_radius: shadow::CARD_BLUR,
        },
        ..filled(styles.accent, styles.on_accent, radius::XL, status)
    }
}

/// Brand outline on a transparent fill ("Get In Touch").
pub fn outline(styles: StyleSet) -> impl Fn(&Theme, button::Status) -> button::Style {
    move |_theme: &Theme, status: button::Status| button::Style {
        background: match status {
            button::Status::Hovered | button::Status::Pressed => Some(Background::Color(Color {
                a: 0.08,
                ..styles.accent
            })),
            _ => None,
        },
        text_color: styles.accent,
        border: Border {
            radius: radius::XL.into(),
            width: border::WIDTH_MD,
            color: styles.accent,
        },
        ..Default::default()
    }
}

/// Neutral dismiss action (Cancel, Close).
pub fn muted(styles: StyleSet) -> impl Fn(&Theme, button::Status) -> button::Style {
    move |_theme: &Theme, status: button::Status| {
        filled(styles.surface_muted, styles.text_subtitle, radius::MD, status)
    }
}

/// Bordered row on a raised surface (contact links, email choices).
pub fn list_item(styles: StyleSet) -> impl Fn(&Theme, button::Status) -> button::Style {
    move |_theme: &Theme, status: button::Status| button::Style {
        border: Border {
            radius: radius::MD.into(),
            width: border::WIDTH_SM,
            color: styles.border,
        },
        ..filled(styles.surface_raised, styles.text_title, radius::MD, status)
    }
}

/// Small rounded chip (home header social buttons).
pub fn chip(styles: StyleSet) -> impl Fn(&Theme, button::Status) -> button::Style {
    move |_theme: &Theme, status: button::Status| button::Style {
        border: Border {
            radius: radius::LG.into(),
            width: border::WIDTH_SM,
            color: styles.border,
        },
        ..filled(styles.surface_muted, styles.text_body, radius::LG, status)
    }
}

/// Segment of a tab control; `active` fills it with the brand color.
pub fn tab(styles: StyleSet, active: bool) -> impl Fn(&Theme, button::Status) -> button::Style {
    move |_theme: &Theme, status: button::Status| {
        if active {
            filled(styles.accent, styles.on_accent, radius::SM, status)
        } else {
            button::Style {
                background: match status {
                    button::Status::Hovered | button::Status::Pressed => {
                        Some(Background::Color(styles.surface))
                    }
                    _ => None,
                },
                text_color: styles.text_subtitle,
                border: Border {
                    radius: radius::SM.into(),
                    ..Default::default()
                },
                ..Default::default()
            }
        }
    }
}

/// Round icon button in the header corner (theme toggle).
pub fn icon(styles: StyleSet) -> impl Fn(&Theme, button::Status) -> button::Style {
    move |_theme: &Theme, status: button::Status| button::Style {
        shadow: Shadow {
            color: styles.shadow,
            offset: shadow::CARD_OFFSET,
            blur_radius: shadow::CARD_BLUR,
        },
        ..filled(styles.surface_muted, styles.toggle_icon, radius::FULL, status)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::theming::ThemeState;

    #[test]
    fn accent_button_uses_brand_color() {
        let styles = StyleSet::compute(ThemeState::light());
        let style = accent(styles)(&Theme::Light, button::Status::Active);
        assert_eq!(style.background, Some(Background::Color(styles.accent)));
        assert_eq!(style.text_color, styles.on_accent);
    }

    #[test]
    fn hover_darkens_fill() {
        let styles = StyleSet::compute(ThemeState::dark());
        let active = accent(styles)(&Theme::Dark, button::Status::Active);
        let hovered = accent(styles)(&Theme::Dark, button::Status::Hovered);
        assert_ne!(active.background, hovered.background);
    }

    #[test]
    fn muted_button_uses_subtitle_text() {
        for theme in [ThemeState::light(), ThemeState::dark()] {
            let styles = StyleSet::compute(theme);
            let style = muted(styles)(&Theme::Light, button::Status::Active);
            assert_eq!(style.text_color, styles.text_subtitle);
            assert_eq!(style.background, Some(Background::Color(styles.surface_muted)));
        }
    }

    #[test]
    fn inactive_tab_is_transparent_until_hovered() {
        let styles = StyleSet::compute(ThemeState::light());
        let idle = tab(styles, false)(&Theme::Light, button::Status::Active);
        assert!(idle.background.is_none());
        let active = tab(styles, true)(&Theme::Light, button::Status::Active);
        assert!(active.background.is_some());
    }
}
