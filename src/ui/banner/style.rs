// SPDX-License-Identifier: MPL-2.0
//! Action button presentation variants.

use crate::ui::design_tokens::palette;
use iced::Color;

/// How the banner's trailing action button is colored.
///
/// A closed variant set: each case resolves deterministically to a
/// `(background, text)` color pair via [`background_color`] and
/// [`text_color`]. `Primary` and `Secondary` are parameterized variants
/// with sensible defaults (use [`BannerStyle::primary`] /
/// [`BannerStyle::secondary`]), not fixed constants.
///
/// `Close` is the marker used by dismiss-only banners. Its color pair
/// resolves to fully transparent and is never consulted when rendering:
/// the dismiss glyph takes its color from the ambient secondary text
/// style of the active theme instead.
///
/// [`background_color`]: BannerStyle::background_color
/// [`text_color`]: BannerStyle::text_color
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum BannerStyle {
    /// Bare dismiss glyph, no button chrome.
    Close,
    /// Main call to action.
    Primary { background: Color, text: Color },
    /// Less prominent alternative action.
    Secondary { background: Color, text: Color },
    /// Fully caller-specified colors.
    Custom { background: Color, text: Color },
}

impl BannerStyle {
    /// `Primary` with the default black-on-white pair.
    #[must_use]
    pub fn primary() -> Self {
        Self::Primary {
            background: palette::BLACK,
            text: palette::WHITE,
        }
    }

    /// `Secondary` with the default blue-on-white pair.
    #[must_use]
    pub fn secondary() -> Self {
        Self::Secondary {
            background: palette::INFO_500,
            text: palette::WHITE,
        }
    }

    /// `Custom` with caller-supplied colors.
    #[must_use]
    pub fn custom(background: Color, text: Color) -> Self {
        Self::Custom { background, text }
    }

    /// Resolved button fill color.
    #[must_use]
    pub fn background_color(&self) -> Color {
        match self {
            Self::Close => Color::TRANSPARENT,
            Self::Primary { background, .. }
            | Self::Secondary { background, .. }
            | Self::Custom { background, .. } => *background,
        }
    }

    /// Resolved button label color.
    #[must_use]
    pub fn text_color(&self) -> Color {
        match self {
            Self::Close => Color::TRANSPARENT,
            Self::Primary { text, .. }
            | Self::Secondary { text, .. }
            | Self::Custom { text, .. } => *text,
        }
    }
}

impl Default for BannerStyle {
    fn default() -> Self {
        Self::primary()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn primary_defaults_to_black_on_white() {
        let style = BannerStyle::primary();
        assert_eq!(style.background_color(), palette::BLACK);
        assert_eq!(style.text_color(), palette::WHITE);
    }

    #[test]
    fn secondary_defaults_to_blue_on_white() {
        let style = BannerStyle::secondary();
        assert_eq!(style.background_color(), palette::INFO_500);
        assert_eq!(style.text_color(), palette::WHITE);
    }

    #[test]
    fn parameterized_variants_accept_overrides() {
        let red = Color::from_rgb(1.0, 0.0, 0.0);
        let green = Color::from_rgb(0.0, 1.0, 0.0);

        let primary = BannerStyle::Primary {
            background: red,
            text: green,
        };
        assert_eq!(primary.background_color(), red);
        assert_eq!(primary.text_color(), green);

        let secondary = BannerStyle::Secondary {
            background: green,
            text: red,
        };
        assert_eq!(secondary.background_color(), green);
        assert_eq!(secondary.text_color(), red);
    }

    #[test]
    fn custom_passes_colors_through() {
        let style = BannerStyle::custom(palette::WARNING_500, palette::BLACK);
        assert_eq!(style.background_color(), palette::WARNING_500);
        assert_eq!(style.text_color(), palette::BLACK);
    }

    #[test]
    fn close_resolves_to_transparent_pair() {
        assert_eq!(BannerStyle::Close.background_color(), Color::TRANSPARENT);
        assert_eq!(BannerStyle::Close.text_color(), Color::TRANSPARENT);
    }

    #[test]
    fn default_is_primary() {
        assert_eq!(BannerStyle::default(), BannerStyle::primary());
    }
}
