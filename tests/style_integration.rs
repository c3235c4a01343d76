// SPDX-License-Identifier: MPL-2.0
//! Integration tests to validate style and design token coherence.

#[cfg(test)]
mod tests {
    use iced::Theme;
    use iced_banner::ui::banner::BackgroundTreatment;
    use iced_banner::ui::design_tokens::{opacity, palette, radius, sizing, spacing};
    use iced_banner::ui::theming::ThemeMode;

    #[test]
    fn card_styles_compile_for_both_themes() {
        for theme in [Theme::Light, Theme::Dark] {
            let _ = BackgroundTreatment::Glass.card_style(&theme);
            let _ = BackgroundTreatment::Legacy.card_style(&theme);
        }
    }

    #[test]
    fn design_tokens_are_accessible() {
        // Palette
        let _ = palette::INFO_500;
        let _ = palette::WHITE;

        // Spacing
        let _ = spacing::MD;

        // Opacity
        let _ = opacity::GLASS;

        // Sizing
        let _ = sizing::ICON_SLOT;

        // Radius
        let _ = radius::LG;
    }

    #[test]
    fn card_radius_matches_the_banner_token() {
        let style = BackgroundTreatment::Legacy.card_style(&Theme::Light);
        assert_eq!(style.border.radius, radius::LG.into());
    }

    #[test]
    fn theming_switches_correctly() {
        assert_ne!(ThemeMode::Light.theme(), ThemeMode::Dark.theme());
    }
}
