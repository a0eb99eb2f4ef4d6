// SPDX-License-Identifier: MPL-2.0
//! Integration tests to validate style and design token coherence.

#[cfg(test)]
mod tests {
    use avatar_gallery::config::{DEFAULT_TILE_SIZE, MAX_TILE_SIZE, MIN_TILE_SIZE};
    use avatar_gallery::ui::design_tokens::{opacity, palette, sizing, spacing};
    use avatar_gallery::ui::gallery::grid;
    use avatar_gallery::ui::styles::{button, container, overlay};
    use avatar_gallery::ui::theming::ThemeMode;
    use iced::Theme;

    #[test]
    fn all_button_styles_compile() {
        let theme = Theme::Dark;

        // Smoke-test all button styles compile and are callable
        let _ = button::tile_action(false)(&theme, iced::widget::button::Status::Active);
        let _ = button::tile_action(true)(&theme, iced::widget::button::Status::Pressed);
        let _ = button::preview_action(false)(&theme, iced::widget::button::Status::Hovered);
        let _ = button::overlay(palette::WHITE, 0.5, 0.8);
    }

    #[test]
    fn container_styles_follow_theme() {
        let light = container::tile(&Theme::Light);
        let dark = container::tile(&Theme::Dark);
        assert_ne!(light.background, dark.background);

        let _ = container::placeholder(&Theme::Dark);
        let _ = container::preview_card(&Theme::Light);
        let _ = overlay::backdrop(&Theme::Dark);
    }

    #[test]
    fn design_tokens_are_accessible() {
        let _ = palette::PRIMARY_500;
        let _ = spacing::MD;
        let _ = opacity::OVERLAY_STRONG;
        let _ = sizing::ICON_LG;
    }

    #[test]
    fn action_buttons_fit_inside_smallest_tile() {
        // Copy and download side by side, plus the corner padding.
        let needed = 2.0 * sizing::ACTION_BUTTON + spacing::XXS + 2.0 * spacing::XS;
        assert!(needed < MIN_TILE_SIZE);
        assert!(sizing::PREVIEW_IMAGE > MAX_TILE_SIZE);
    }

    #[test]
    fn default_tile_packs_several_columns_on_default_window() {
        let tile = grid::tile_outer_width(DEFAULT_TILE_SIZE);
        let columns = grid::column_count(1024.0 - 2.0 * spacing::LG, tile, grid::TILE_GAP);
        assert!(columns >= 4);
    }

    #[test]
    fn theming_switches_correctly() {
        assert_eq!(ThemeMode::Light.theme(), Theme::Light);
        assert_eq!(ThemeMode::Dark.theme(), Theme::Dark);
        assert!(ThemeMode::Dark.is_dark());
        assert!(!ThemeMode::Light.is_dark());
    }
}
