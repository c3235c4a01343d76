// SPDX-License-Identifier: MPL-2.0
//! Banner content descriptor and its factory constructors.

use super::style::BannerStyle;
use crate::ui::design_tokens::palette;
use iced::Color;

/// Which interactive element occupies the banner's trailing slot.
///
/// Derived from [`BannerContent::action_label`]: exactly one of the two
/// is rendered, never both and never neither.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum TrailingControl<'a> {
    /// Muted cross glyph, colored by the ambient secondary text style.
    Dismiss,
    /// Labeled button colored by the resolved [`BannerStyle`] pair.
    Action {
        label: &'a str,
        style: BannerStyle,
    },
}

/// Everything a banner renders, constructed fresh per render pass.
///
/// Immutable once built; the only behavior it carries is `on_action`,
/// the message the Iced runtime delivers exactly once per tap on the
/// trailing control. Prefer the [`notification`] and [`action`]
/// factories over filling every field by hand.
///
/// [`notification`]: BannerContent::notification
/// [`action`]: BannerContent::action
#[derive(Debug, Clone)]
pub struct BannerContent<Message> {
    icon: Option<String>,
    icon_color: Color,
    title: String,
    subtitle: Option<String>,
    action_label: Option<String>,
    action_style: BannerStyle,
    use_legacy_visual: bool,
    on_action: Message,
}

impl<Message> BannerContent<Message> {
    /// Creates an informational, dismiss-only banner.
    ///
    /// The trailing slot shows the cross glyph; tapping it emits
    /// `on_close`. The icon defaults to the blue informational accent.
    pub fn notification(
        icon: impl Into<String>,
        title: impl Into<String>,
        on_close: Message,
    ) -> Self {
        Self {
            icon: Some(icon.into()),
            icon_color: palette::INFO_500,
            title: title.into(),
            subtitle: None,
            action_label: None,
            action_style: BannerStyle::Close,
            use_legacy_visual: false,
            on_action: on_close,
        }
    }

    /// Creates a banner prompting a user decision.
    ///
    /// The trailing slot shows a labeled button (default label
    /// `"Action"`, default primary style); tapping it emits
    /// `on_action`. The icon defaults to the orange warning accent.
    pub fn action(icon: impl Into<String>, title: impl Into<String>, on_action: Message) -> Self {
        Self {
            icon: Some(icon.into()),
            icon_color: palette::WARNING_500,
            title: title.into(),
            subtitle: None,
            action_label: Some("Action".to_string()),
            action_style: BannerStyle::primary(),
            use_legacy_visual: false,
            on_action,
        }
    }

    /// Suppresses the leading icon slot entirely.
    #[must_use]
    pub fn without_icon(mut self) -> Self {
        self.icon = None;
        self
    }

    /// Overrides the icon tint color.
    #[must_use]
    pub fn icon_color(mut self, color: Color) -> Self {
        self.icon_color = color;
        self
    }

    /// Sets the subtitle line (at most two rendered lines).
    #[must_use]
    pub fn subtitle(mut self, subtitle: impl Into<String>) -> Self {
        self.subtitle = Some(subtitle.into());
        self
    }

    /// Replaces the action button label.
    ///
    /// Only meaningful for banners built with [`BannerContent::action`];
    /// on a notification banner this turns the dismiss glyph into a
    /// labeled button.
    #[must_use]
    pub fn action_label(mut self, label: impl Into<String>) -> Self {
        self.action_label = Some(label.into());
        self
    }

    /// Replaces the action button style.
    #[must_use]
    pub fn action_style(mut self, style: BannerStyle) -> Self {
        self.action_style = style;
        self
    }

    /// Forces the legacy background treatment regardless of platform
    /// capability.
    #[must_use]
    pub fn use_legacy_visual(mut self, legacy: bool) -> Self {
        self.use_legacy_visual = legacy;
        self
    }

    /// Icon key into the embedded icon set, if any.
    #[must_use]
    pub fn icon(&self) -> Option<&str> {
        self.icon.as_deref()
    }

    /// Tint color for the leading icon.
    #[must_use]
    pub fn icon_color_value(&self) -> Color {
        self.icon_color
    }

    /// Title line, rendered clipped to a single line.
    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Subtitle, if one was supplied.
    #[must_use]
    pub fn subtitle_text(&self) -> Option<&str> {
        self.subtitle.as_deref()
    }

    /// Whether the subtitle line appears in the render tree.
    ///
    /// Empty strings are suppressed the same as an absent subtitle.
    #[must_use]
    pub fn shows_subtitle(&self) -> bool {
        self.subtitle.as_deref().is_some_and(|s| !s.is_empty())
    }

    /// Whether the legacy background treatment is forced.
    #[must_use]
    pub fn legacy_visual(&self) -> bool {
        self.use_legacy_visual
    }

    /// The message emitted when the trailing control is tapped.
    #[must_use]
    pub fn on_action(&self) -> &Message {
        &self.on_action
    }

    /// Resolves which trailing control this content renders.
    #[must_use]
    pub fn trailing_control(&self) -> TrailingControl<'_> {
        match self.action_label.as_deref() {
            Some(label) => TrailingControl::Action {
                label,
                style: self.action_style,
            },
            None => TrailingControl::Dismiss,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Clone, PartialEq)]
    enum TestMessage {
        Close,
        Skip,
    }

    #[test]
    fn notification_renders_dismiss_glyph() {
        let content = BannerContent::notification("bell", "Saved", TestMessage::Close);
        assert_eq!(content.trailing_control(), TrailingControl::Dismiss);
        assert_eq!(content.on_action(), &TestMessage::Close);
    }

    #[test]
    fn action_renders_labeled_button() {
        let content = BannerContent::action("play", "Skip ads?", TestMessage::Skip)
            .action_label("Skip")
            .action_style(BannerStyle::primary());

        match content.trailing_control() {
            TrailingControl::Action { label, style } => {
                assert_eq!(label, "Skip");
                assert_eq!(style, BannerStyle::primary());
            }
            TrailingControl::Dismiss => panic!("expected action button"),
        }
        assert_eq!(content.on_action(), &TestMessage::Skip);
    }

    #[test]
    fn action_label_defaults_to_action() {
        let content = BannerContent::action("play", "Skip ads?", TestMessage::Skip);
        assert_eq!(
            content.trailing_control(),
            TrailingControl::Action {
                label: "Action",
                style: BannerStyle::primary(),
            }
        );
    }

    #[test]
    fn factory_icon_color_defaults() {
        let notification = BannerContent::notification("bell", "Saved", TestMessage::Close);
        assert_eq!(notification.icon_color_value(), palette::INFO_500);

        let action = BannerContent::action("play", "Skip ads?", TestMessage::Skip);
        assert_eq!(action.icon_color_value(), palette::WARNING_500);
    }

    #[test]
    fn subtitle_is_suppressed_when_absent_or_empty() {
        let absent = BannerContent::notification("bell", "Saved", TestMessage::Close);
        assert!(!absent.shows_subtitle());

        let empty = BannerContent::notification("bell", "Saved", TestMessage::Close).subtitle("");
        assert!(!empty.shows_subtitle());

        let present = BannerContent::notification("bell", "Saved", TestMessage::Close)
            .subtitle("Your changes have been synced");
        assert!(present.shows_subtitle());
    }

    #[test]
    fn empty_title_is_accepted() {
        // Presentation primitive, not a validating API
        let content = BannerContent::notification("bell", "", TestMessage::Close);
        assert_eq!(content.title(), "");
    }

    #[test]
    fn icon_slot_can_be_suppressed() {
        let content =
            BannerContent::notification("bell", "Saved", TestMessage::Close).without_icon();
        assert!(content.icon().is_none());
    }

    #[test]
    fn legacy_visual_defaults_off() {
        let content = BannerContent::notification("bell", "Saved", TestMessage::Close);
        assert!(!content.legacy_visual());

        let forced = content.use_legacy_visual(true);
        assert!(forced.legacy_visual());
    }
}
