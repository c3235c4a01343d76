// SPDX-License-Identifier: MPL-2.0
//! Capability-fallback resolution for the banner card background.
//!
//! The preferred visual is a translucent "glass" fill; rendering it only
//! makes sense when the surrounding compositor/backend supports
//! translucency, so the capability is injected as a plain boolean rather
//! than probed behind a compile-time conditional. Callers can also force
//! the legacy treatment outright, and that override wins before the
//! capability is even consulted.

use crate::ui::design_tokens::{opacity, radius, shadow};
use iced::widget::container;
use iced::{gradient, Background, Border, Color, Radians, Theme};

/// The two visual treatments a banner card can fall back between.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BackgroundTreatment {
    /// Translucent vertical gradient clipped to the rounded card shape.
    Glass,
    /// Near-opaque thick-material fill, same rounded card shape.
    Legacy,
}

impl BackgroundTreatment {
    /// Resolves the treatment from the legacy override and the platform
    /// capability, in that order. The explicit override short-circuits
    /// the capability probe.
    #[must_use]
    pub fn resolve(use_legacy: bool, supports_glass: bool) -> Self {
        if use_legacy {
            Self::Legacy
        } else if supports_glass {
            Self::Glass
        } else {
            Self::Legacy
        }
    }

    /// Container style for the banner card under this treatment.
    ///
    /// Both treatments share the corner radius and drop shadow; they
    /// differ only in the fill.
    #[must_use]
    pub fn card_style(self, theme: &Theme) -> container::Style {
        let base = theme.extended_palette().background.base.color;

        let background = match self {
            Self::Glass => {
                let fill = gradient::Linear::new(Radians(std::f32::consts::PI))
                    .add_stop(
                        0.0,
                        Color {
                            a: opacity::GLASS,
                            ..base
                        },
                    )
                    .add_stop(
                        1.0,
                        Color {
                            a: opacity::GLASS_DEEP,
                            ..base
                        },
                    );
                Background::Gradient(fill.into())
            }
            Self::Legacy => Background::Color(Color {
                a: opacity::SURFACE,
                ..base
            }),
        };

        container::Style {
            background: Some(background),
            border: Border {
                radius: radius::LG.into(),
                ..Default::default()
            },
            shadow: shadow::CARD,
            text_color: Some(theme.palette().text),
            ..Default::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn legacy_override_wins_over_capability() {
        assert_eq!(
            BackgroundTreatment::resolve(true, true),
            BackgroundTreatment::Legacy
        );
        assert_eq!(
            BackgroundTreatment::resolve(true, false),
            BackgroundTreatment::Legacy
        );
    }

    #[test]
    fn capable_platform_gets_glass() {
        assert_eq!(
            BackgroundTreatment::resolve(false, true),
            BackgroundTreatment::Glass
        );
    }

    #[test]
    fn incapable_platform_falls_back_to_legacy() {
        assert_eq!(
            BackgroundTreatment::resolve(false, false),
            BackgroundTreatment::Legacy
        );
    }

    #[test]
    fn glass_card_uses_gradient_fill() {
        let style = BackgroundTreatment::Glass.card_style(&Theme::Light);
        assert!(matches!(style.background, Some(Background::Gradient(_))));
    }

    #[test]
    fn legacy_card_uses_translucent_solid_fill() {
        let style = BackgroundTreatment::Legacy.card_style(&Theme::Dark);
        match style.background {
            Some(Background::Color(color)) => assert_eq!(color.a, opacity::SURFACE),
            other => panic!("expected solid fill, got {other:?}"),
        }
    }

    #[test]
    fn both_treatments_share_card_chrome() {
        let theme = Theme::Light;
        let glass = BackgroundTreatment::Glass.card_style(&theme);
        let legacy = BackgroundTreatment::Legacy.card_style(&theme);

        assert_eq!(glass.border.radius, legacy.border.radius);
        assert_eq!(glass.shadow.blur_radius, legacy.shadow.blur_radius);
        assert_eq!(glass.shadow.offset, legacy.shadow.offset);
    }
}
