// SPDX-License-Identifier: MPL-2.0
//! Style set derived from the theme flag.
//!
//! [`StyleSet::compute`] is the only place where the dark-mode flag turns into
//! colors. It is pure, so screens can call it whenever they are notified of a
//! theme change and get the same answer every time.

use crate::catalog::{Rgb, SkillTier, Status};
use crate::ui::design_tokens::{opacity, palette};
use crate::ui::theming::ThemeState;
use iced::Color;

/// Color tokens consumed by screen views.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StyleSet {
    pub theme: ThemeState,

    // Surfaces
    pub background: Color,
    pub surface: Color,
    pub surface_muted: Color,
    pub surface_raised: Color,
    pub border: Color,

    // Text
    pub text_title: Color,
    pub text_subtitle: Color,
    pub text_body: Color,

    // Tags
    pub tag_background: Color,
    pub tag_text: Color,

    // Brand
    pub accent: Color,
    pub on_accent: Color,
    pub toggle_icon: Color,

    // Elevation
    pub shadow: Color,
    pub backdrop: Color,
}

impl StyleSet {
    #[must_use]
    pub fn compute(theme: ThemeState) -> Self {
        if theme.is_dark_mode {
            Self {
                theme,
                background: palette::NEUTRAL_950,
                surface: palette::NEUTRAL_900,
                surface_muted: palette::NEUTRAL_800,
                surface_raised: palette::NEUTRAL_800,
                border: palette::NEUTRAL_700,
                text_title: palette::WHITE,
                text_subtitle: palette::NEUTRAL_400,
                text_body: palette::NEUTRAL_300,
                tag_background: palette::NEUTRAL_800,
                tag_text: palette::WHITE,
                accent: palette::VIOLET_500,
                on_accent: palette::WHITE,
                toggle_icon: palette::AMBER_400,
                shadow: Color {
                    a: opacity::SHADOW_DARK,
                    ..palette::BLACK
                },
                backdrop: Color {
                    a: opacity::BACKDROP,
                    ..palette::BLACK
                },
            }
        } else {
            Self {
                theme,
                background: palette::LAVENDER_50,
                surface: palette::WHITE,
                surface_muted: palette::GRAY_100,
                surface_raised: palette::SLATE_50,
                border: palette::SLATE_200,
                text_title: palette::INDIGO_950,
                text_subtitle: palette::GRAY_500,
                text_body: palette::GRAY_600,
                tag_background: palette::VIOLET_100,
                tag_text: palette::INDIGO_950,
                accent: palette::VIOLET_500,
                on_accent: palette::WHITE,
                toggle_icon: palette::INDIGO_950,
                shadow: Color {
                    a: opacity::SHADOW_LIGHT,
                    ..palette::VIOLET_500
                },
                backdrop: Color {
                    a: opacity::BACKDROP,
                    ..palette::BLACK
                },
            }
        }
    }
}

impl Default for StyleSet {
    fn default() -> Self {
        Self::compute(ThemeState::default())
    }
}

/// Converts a catalog color into an Iced color.
#[must_use]
pub fn rgb(color: Rgb) -> Color {
    Color::from_rgb8(color.r, color.g, color.b)
}

/// Background and text color of a status badge. Identical in both themes.
#[must_use]
pub fn status_badge_colors(status: Status) -> (Color, Color) {
    (rgb(status.badge_color()), palette::WHITE)
}

/// Background and border color of a skill tag.
#[must_use]
pub fn skill_tier_colors(tier: SkillTier) -> (Color, Color) {
    match tier {
        SkillTier::Primary => (palette::VIOLET_100, palette::VIOLET_500),
        SkillTier::Secondary => (palette::GREEN_50, palette::EMERALD_500),
        SkillTier::Tertiary => (palette::AMBER_100, palette::AMBER_500),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn light_theme_has_light_background() {
        let styles = StyleSet::compute(ThemeState::light());
        assert!(styles.background.r > 0.9);
        assert_eq!(styles.surface, palette::WHITE);
    }

    #[test]
    fn dark_theme_has_dark_background() {
        let styles = StyleSet::compute(ThemeState::dark());
        assert!(styles.background.r < 0.2);
        assert_eq!(styles.text_title, palette::WHITE);
    }

    #[test]
    fn compute_is_deterministic() {
        for theme in [ThemeState::light(), ThemeState::dark()] {
            assert_eq!(StyleSet::compute(theme), StyleSet::compute(theme));
        }
    }

    #[test]
    fn accent_is_shared_across_themes() {
        let light = StyleSet::compute(ThemeState::light());
        let dark = StyleSet::compute(ThemeState::dark());
        assert_eq!(light.accent, dark.accent);
        assert_ne!(light.background, dark.background);
    }

    #[test]
    fn raised_surface_and_toggle_icon_follow_the_theme() {
        let light = StyleSet::compute(ThemeState::light());
        let dark = StyleSet::compute(ThemeState::dark());
        assert_ne!(light.surface_raised, light.surface_muted);
        assert_eq!(dark.surface_raised, dark.surface_muted);
        assert_eq!(light.toggle_icon, palette::INDIGO_950);
        assert_eq!(dark.toggle_icon, palette::AMBER_400);
    }

    #[test]
    fn status_badges_use_catalog_colors() {
        let (background, text) = status_badge_colors(Status::Completed);
        assert_eq!(background, palette::EMERALD_500);
        assert_eq!(text, palette::WHITE);

        let (background, _) = status_badge_colors(Status::InProgress);
        assert_eq!(background, palette::AMBER_500);
    }

    #[test]
    fn skill_tiers_have_distinct_borders() {
        let borders = [
            skill_tier_colors(SkillTier::Primary).1,
            skill_tier_colors(SkillTier::Secondary).1,
            skill_tier_colors(SkillTier::Tertiary).1,
        ];
        assert_ne!(borders[0], borders[1]);
        assert_ne!(borders[1], borders[2]);
    }
}
