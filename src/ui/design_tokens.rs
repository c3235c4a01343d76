// SPDX-License-Identifier: MPL-2.0
//! Centralized design tokens for the banner component and demo screen.
//!
//! Organized as small constant modules (palette, opacity, spacing, sizing,
//! typography, radius, shadow) so component code never hard-codes
//! magic values. Tokens are designed to stay consistent as a scale; keep the
//! ratios intact when adjusting them.

use iced::Color;

// ============================================================================
// Color Palette
// ============================================================================

pub mod palette {
    use super::Color;

    // Grayscale
    pub const BLACK: Color = Color::BLACK;
    pub const WHITE: Color = Color::WHITE;
    pub const GRAY_400: Color = Color::from_rgb(0.4, 0.4, 0.4);

    // Semantic accents used by the banner factories and demo controls
    pub const INFO_500: Color = Color::from_rgb(0.0, 0.478, 1.0);
    pub const WARNING_500: Color = Color::from_rgb(1.0, 0.584, 0.0);
    pub const SUCCESS_500: Color = Color::from_rgb(0.263, 0.702, 0.404);
    pub const ACCENT_PURPLE: Color = Color::from_rgb(0.686, 0.322, 0.871);
    pub const ACCENT_YELLOW: Color = Color::from_rgb(0.9, 0.72, 0.05);
}

// ============================================================================
// Opacity Scale
// ============================================================================

pub mod opacity {
    pub const TRANSPARENT: f32 = 0.0;
    pub const SHADOW: f32 = 0.1;
    pub const OVERLAY_SUBTLE: f32 = 0.2;
    pub const OVERLAY_MEDIUM: f32 = 0.5;
    /// Translucent card fill for the glass treatment (top edge).
    pub const GLASS: f32 = 0.55;
    /// Translucent card fill for the glass treatment (bottom edge).
    pub const GLASS_DEEP: f32 = 0.75;
    /// Near-opaque card fill for the legacy treatment ("thick material").
    pub const SURFACE: f32 = 0.95;
    pub const OPAQUE: f32 = 1.0;
}

// ============================================================================
// Spacing Scale (4px baseline grid)
// ============================================================================

pub mod spacing {
    pub const XXS: f32 = 4.0;
    pub const XS: f32 = 8.0;
    pub const SM: f32 = 12.0;
    pub const MD: f32 = 16.0;
    pub const LG: f32 = 24.0;
}

// ============================================================================
// Sizing Scale
// ============================================================================

pub mod sizing {
    // Icon sizes
    /// Dismiss glyph footprint.
    pub const ICON_SM: f32 = 12.0;
    /// Leading banner icon glyph.
    pub const ICON_MD: f32 = 20.0;
    /// Fixed square slot the leading icon is centered in.
    pub const ICON_SLOT: f32 = 32.0;

    // Banner trailing action button
    pub const ACTION_HEIGHT: f32 = 32.0;
    pub const ACTION_MIN_WIDTH: f32 = 60.0;

    /// Clip height for the subtitle column (two lines of body text).
    pub const SUBTITLE_MAX_HEIGHT: f32 = 40.0;

    // Banner card padding (horizontal / vertical)
    pub const BANNER_PADDING_X: f32 = 14.0;
    pub const BANNER_PADDING_Y: f32 = 10.0;

    // Demo controls
    pub const CONTROL_ICON: f32 = 16.0;
}

// ============================================================================
// Typography Scale
// ============================================================================

pub mod typography {
    /// Banner title line.
    pub const HEADLINE: f32 = 16.0;
    /// Banner subtitle and action button label.
    pub const BODY: f32 = 14.0;
    /// Demo filler text.
    pub const TITLE_SM: f32 = 20.0;
}

// ============================================================================
// Border Radius Scale
// ============================================================================

pub mod radius {
    pub const SM: f32 = 8.0;
    pub const MD: f32 = 12.0;
    /// Banner card corner radius.
    pub const LG: f32 = 16.0;
}

// ============================================================================
// Shadow Definitions
// ============================================================================

pub mod shadow {
    use super::{opacity, Color};
    use iced::{Shadow, Vector};

    pub const NONE: Shadow = Shadow {
        color: Color::BLACK,
        offset: Vector::ZERO,
        blur_radius: 0.0,
    };

    /// Soft drop shadow under the banner card.
    pub const CARD: Shadow = Shadow {
        color: Color {
            a: opacity::SHADOW,
            ..Color::BLACK
        },
        offset: Vector { x: 0.0, y: 4.0 },
        blur_radius: 10.0,
    };
}

// ============================================================================
// Compile-time Validation
// ============================================================================

const _: () = {
    // Spacing validation
    assert!(spacing::XXS > 0.0);
    assert!(spacing::XS > spacing::XXS);
    assert!(spacing::SM > spacing::XS);
    assert!(spacing::MD > spacing::SM);
    assert!(spacing::LG > spacing::MD);

    // Opacity validation
    assert!(opacity::TRANSPARENT == 0.0);
    assert!(opacity::OPAQUE == 1.0);
    assert!(opacity::GLASS > 0.0 && opacity::GLASS < opacity::GLASS_DEEP);
    assert!(opacity::GLASS_DEEP < opacity::SURFACE);
    assert!(opacity::SURFACE < 1.0);

    // Sizing validation
    assert!(sizing::ICON_SM < sizing::ICON_MD);
    assert!(sizing::ICON_MD < sizing::ICON_SLOT);
    assert!(sizing::ACTION_MIN_WIDTH > sizing::ACTION_HEIGHT);

    // Typography validation
    assert!(typography::BODY < typography::HEADLINE);
    assert!(typography::HEADLINE < typography::TITLE_SM);

    // Radius validation
    assert!(radius::SM < radius::MD);
    assert!(radius::MD < radius::LG);
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn spacing_scale_is_consistent() {
        assert_eq!(spacing::XS, spacing::XXS * 2.0);
        assert_eq!(spacing::MD, spacing::XS * 2.0);
    }

    #[test]
    fn card_shadow_is_translucent_black() {
        assert_eq!(shadow::CARD.color.a, opacity::SHADOW);
        assert_eq!(shadow::CARD.color.r, 0.0);
        assert!(shadow::CARD.blur_radius > 0.0);
    }

    #[test]
    fn semantic_accents_are_distinct() {
        assert_ne!(palette::INFO_500, palette::WARNING_500);
        assert_ne!(palette::INFO_500, palette::SUCCESS_500);
        assert_ne!(palette::WARNING_500, palette::SUCCESS_500);
    }
}
