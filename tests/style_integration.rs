// SPDX-License-Identifier: MPL-2.0
//! Integration tests to validate style and design token coherence.

#[cfg(test)]
mod tests {
    use iced::widget::button::Status;
    use iced::{Background, Theme};
    use portfolio::catalog::{self, Status as ProjectStatus};
    use portfolio::ui::design_tokens::{palette, sizing, spacing};
    use portfolio::ui::styles::{button, container};
    use portfolio::ui::theme::{self, StyleSet};
    use portfolio::ui::theming::ThemeState;

    #[test]
    fn all_button_styles_are_callable_in_both_themes() {
        for state in [ThemeState::light(), ThemeState::dark()] {
            let styles = StyleSet::compute(state);
            let theme = state.iced_theme();
            let _ = button::accent(styles)(&theme, Status::Active);
            let _ = button::call_to_action(styles)(&theme, Status::Hovered);
            let _ = button::outline(styles)(&theme, Status::Pressed);
            let _ = button::muted(styles)(&theme, Status::Active);
            let _ = button::list_item(styles)(&theme, Status::Active);
            let _ = button::chip(styles)(&theme, Status::Active);
            let _ = button::tab(styles, true)(&theme, Status::Active);
            let _ = button::icon(styles)(&theme, Status::Active);
        }
    }

    #[test]
    fn containers_pick_up_theme_surfaces() {
        let light = StyleSet::compute(ThemeState::light());
        let dark = StyleSet::compute(ThemeState::dark());

        let light_card = container::card(light)(&Theme::Light);
        let dark_card = container::card(dark)(&Theme::Dark);
        assert_eq!(light_card.background, Some(Background::Color(palette::WHITE)));
        assert_ne!(light_card.background, dark_card.background);

        // Backdrop is the same dim layer in both themes
        assert_eq!(
            container::backdrop(light)(&Theme::Light).background,
            container::backdrop(dark)(&Theme::Dark).background
        );
    }

    #[test]
    fn every_status_in_the_catalog_has_a_badge() {
        let statuses = catalog::projects()
            .iter()
            .map(|p| p.status)
            .chain(catalog::documents().iter().map(|d| d.status));
        for status in statuses {
            let (background, _) = theme::status_badge_colors(status);
            assert_eq!(background, theme::rgb(status.badge_color()));
        }
        assert_ne!(
            theme::status_badge_colors(ProjectStatus::Completed),
            theme::status_badge_colors(ProjectStatus::Archived)
        );
    }

    #[test]
    fn layout_tokens_are_consistent() {
        assert!(sizing::MODAL_MAX_WIDTH < sizing::CONTENT_MAX_WIDTH);
        assert!(spacing::XS < spacing::LG);
    }
}
