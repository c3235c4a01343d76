// SPDX-License-Identifier: MPL-2.0
//! Banner rendering.
//!
//! A pure function from content descriptor and capability flag to an
//! Iced element. Rendering has no side effects and can be re-invoked on
//! every state change upstream; the only observable effect of the
//! resulting widget tree is the `on_action` message the runtime emits
//! when the trailing control is pressed.

use super::background::BackgroundTreatment;
use super::content::{BannerContent, TrailingControl};
use crate::ui::design_tokens::{opacity, palette, radius, shadow, sizing, spacing, typography};
use crate::ui::icons;
use iced::font::{Font, Weight};
use iced::widget::svg::{self, Svg};
use iced::widget::{button, text, Column, Container, Row, Text};
use iced::{alignment, Background, Border, Color, Element, Length, Theme};

/// The banner widget.
pub struct Banner;

impl Banner {
    /// Renders a banner from its content descriptor.
    ///
    /// `supports_glass` is the injected platform capability consumed by
    /// the background fallback policy; everything else comes from
    /// `content`. Layout, left to right: optional icon slot, flexible
    /// text column, trailing control.
    pub fn view<'a, Message: Clone + 'a>(
        content: BannerContent<Message>,
        supports_glass: bool,
    ) -> Element<'a, Message> {
        let treatment = BackgroundTreatment::resolve(content.legacy_visual(), supports_glass);
        let on_action = content.on_action().clone();

        let mut row = Row::new()
            .spacing(spacing::SM)
            .align_y(alignment::Vertical::Center);

        // Icon slot: fixed square footprint, glyph tinted with the
        // caller's color. Unknown keys fall back to a neutral glyph so
        // the layout stays stable.
        if let Some(key) = content.icon() {
            let handle = icons::named(key).unwrap_or_else(icons::circle);
            let glyph = icons::tinted(handle, sizing::ICON_MD, content.icon_color_value());
            row = row.push(
                Container::new(glyph)
                    .center_x(Length::Fixed(sizing::ICON_SLOT))
                    .center_y(Length::Fixed(sizing::ICON_SLOT)),
            );
        }

        // Text column: title always, subtitle only when non-empty.
        let title = Text::new(content.title().to_string())
            .size(typography::HEADLINE)
            .font(Font {
                weight: Weight::Semibold,
                ..Font::DEFAULT
            })
            .wrapping(text::Wrapping::None);

        let mut column = Column::new().spacing(spacing::XXS).push(title);

        if content.shows_subtitle() {
            let subtitle = Text::new(content.subtitle_text().unwrap_or_default().to_string())
                .size(typography::BODY)
                .style(|theme: &Theme| text::Style {
                    color: Some(theme.extended_palette().secondary.base.text),
                });
            column = column.push(
                Container::new(subtitle)
                    .max_height(sizing::SUBTITLE_MAX_HEIGHT)
                    .clip(true),
            );
        }

        row = row.push(
            Container::new(column)
                .width(Length::Fill)
                .align_x(alignment::Horizontal::Left),
        );

        // Trailing control: labeled action button or bare dismiss glyph,
        // never both.
        let trailing: Element<'a, Message> = match content.trailing_control() {
            TrailingControl::Action { label, style } => {
                let background = style.background_color();
                let text_color = style.text_color();
                let label_text = Text::new(label.to_string())
                    .size(typography::BODY)
                    .font(Font {
                        weight: Weight::Semibold,
                        ..Font::DEFAULT
                    });

                button(
                    Container::new(label_text)
                        .center_x(Length::Fixed(sizing::ACTION_MIN_WIDTH))
                        .center_y(Length::Fixed(sizing::ACTION_HEIGHT)),
                )
                .on_press(on_action)
                .padding(0.0)
                .style(move |_theme: &Theme, status| {
                    action_button_style(background, text_color, status)
                })
                .into()
            }
            TrailingControl::Dismiss => {
                // The glyph derives its color from the ambient secondary
                // text style, not from the Close color pair.
                let glyph = Svg::new(icons::cross())
                    .width(Length::Fixed(sizing::ICON_SM))
                    .height(Length::Fixed(sizing::ICON_SM))
                    .style(|theme: &Theme, _status| svg::Style {
                        color: Some(theme.extended_palette().secondary.base.text),
                    });

                button(glyph)
                    .on_press(on_action)
                    .padding(spacing::XS)
                    .style(dismiss_button_style)
                    .into()
            }
        };
        row = row.push(trailing);

        Container::new(row)
            .width(Length::Fill)
            .padding([sizing::BANNER_PADDING_Y, sizing::BANNER_PADDING_X])
            .style(move |theme: &Theme| treatment.card_style(theme))
            .into()
    }
}

/// Style function for the trailing action button.
fn action_button_style(
    background: Color,
    text_color: Color,
    status: button::Status,
) -> button::Style {
    let fill = match status {
        button::Status::Pressed => Color {
            a: background.a * 0.8,
            ..background
        },
        _ => background,
    };

    button::Style {
        background: Some(Background::Color(fill)),
        text_color,
        border: Border {
            radius: radius::SM.into(),
            ..Default::default()
        },
        shadow: shadow::NONE,
        snap: true,
    }
}

/// Style function for the dismiss glyph button.
fn dismiss_button_style(theme: &Theme, status: button::Status) -> button::Style {
    let base = theme.extended_palette().background.base;

    let background = match status {
        button::Status::Hovered => Some(Background::Color(Color {
            a: opacity::OVERLAY_SUBTLE,
            ..palette::GRAY_400
        })),
        button::Status::Pressed => Some(Background::Color(Color {
            a: opacity::OVERLAY_MEDIUM,
            ..palette::GRAY_400
        })),
        _ => None,
    };

    button::Style {
        background,
        text_color: base.text,
        border: Border {
            radius: radius::SM.into(),
            ..Default::default()
        },
        shadow: shadow::NONE,
        snap: true,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::banner::BannerStyle;

    #[derive(Debug, Clone, PartialEq)]
    enum TestMessage {
        Tapped,
    }

    #[test]
    fn action_button_style_uses_resolved_pair() {
        let style = BannerStyle::primary();
        let rendered = action_button_style(
            style.background_color(),
            style.text_color(),
            button::Status::Active,
        );

        assert_eq!(
            rendered.background,
            Some(Background::Color(palette::BLACK))
        );
        assert_eq!(rendered.text_color, palette::WHITE);
        assert_eq!(rendered.border.radius, radius::SM.into());
    }

    #[test]
    fn action_button_dims_when_pressed() {
        let pressed = action_button_style(palette::BLACK, palette::WHITE, button::Status::Pressed);
        match pressed.background {
            Some(Background::Color(color)) => assert!(color.a < 1.0),
            other => panic!("expected solid fill, got {other:?}"),
        }
    }

    #[test]
    fn dismiss_button_is_chromeless_at_rest() {
        let style = dismiss_button_style(&Theme::Light, button::Status::Active);
        assert!(style.background.is_none());
        assert_eq!(style.shadow.blur_radius, 0.0);
    }

    #[test]
    fn dismiss_button_shows_hover_overlay() {
        let style = dismiss_button_style(&Theme::Dark, button::Status::Hovered);
        assert!(style.background.is_some());
    }

    #[test]
    fn view_builds_for_both_banner_kinds() {
        // Smoke-test that the element tree assembles for every
        // combination of trailing control and background treatment.
        for supports_glass in [true, false] {
            let notification =
                BannerContent::notification("bell", "Saved", TestMessage::Tapped)
                    .subtitle("Your changes have been synced");
            let _: Element<'_, TestMessage> = Banner::view(notification, supports_glass);

            let action = BannerContent::action("play", "Skip ads?", TestMessage::Tapped)
                .action_label("Skip")
                .use_legacy_visual(true);
            let _: Element<'_, TestMessage> = Banner::view(action, supports_glass);
        }
    }
}
