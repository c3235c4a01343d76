// SPDX-License-Identifier: MPL-2.0
//! Embedded SVG icon set.
//!
//! Icon sources are inlined as static SVG strings and handles are cached
//! using `OnceLock`, so no asset files or build-time rasterization are
//! needed. All glyphs are single-color and get tinted at render time via
//! [`tinted`], which keeps one source per icon working across light and
//! dark themes.
//!
//! Banner callers reference icons by string key (see [`named`]); the demo
//! controls use the typed functions directly.
//!
//! # Naming Convention
//!
//! Icons use generic visual names describing the icon's appearance,
//! not the action context (e.g., `cross` not `dismiss`).

use iced::widget::svg::{self, Handle, Svg};
use iced::{Color, Length};
use std::sync::OnceLock;

/// Defines an icon function with a cached handle.
/// The handle is created once on first access and reused thereafter.
macro_rules! define_icon {
    ($name:ident, $source:ident, $doc:literal) => {
        #[doc = $doc]
        pub fn $name() -> Handle {
            static HANDLE: OnceLock<Handle> = OnceLock::new();
            HANDLE
                .get_or_init(|| Handle::from_memory($source.as_bytes()))
                .clone()
        }
    };
}

const BELL_SVG: &str = r#"<svg xmlns="http://www.w3.org/2000/svg" viewBox="0 0 24 24"><path d="M12 2a6 6 0 0 0-6 6v4.6L4 17h16l-2-4.4V8a6 6 0 0 0-6-6zm-2 16.5a2 2 0 0 0 4 0z"/></svg>"#;
const BELL_SLASH_SVG: &str = r#"<svg xmlns="http://www.w3.org/2000/svg" viewBox="0 0 24 24"><path d="M6.3 8.7 16.9 17H4l2-4.4zm11.7 2.9V8a6 6 0 0 0-9.7-4.7l9.6 9.6zM10 18.5a2 2 0 0 0 4 0zM3.4 2.6 21.4 20.6l-1.4 1.4L2 4z"/></svg>"#;
const PLAY_SVG: &str = r#"<svg xmlns="http://www.w3.org/2000/svg" viewBox="0 0 24 24"><path d="M12 2a10 10 0 1 0 0 20 10 10 0 0 0 0-20zm-2.5 5.5 7.5 4.5-7.5 4.5z" fill-rule="evenodd"/></svg>"#;
const EYE_SVG: &str = r#"<svg xmlns="http://www.w3.org/2000/svg" viewBox="0 0 24 24"><path d="M12 5C6 5 2.4 10.2 2 12c.4 1.8 4 7 10 7s9.6-5.2 10-7c-.4-1.8-4-7-10-7zm0 11a4 4 0 1 1 0-8 4 4 0 0 1 0 8z"/></svg>"#;
const EYE_SLASH_SVG: &str = r#"<svg xmlns="http://www.w3.org/2000/svg" viewBox="0 0 24 24"><path d="M12 5c-1.2 0-2.3.2-3.3.6l2 2A4 4 0 0 1 16 12c0 .5-.1.9-.2 1.3l3.2 3.2c1.7-1.7 2.7-3.6 3-4.5-.4-1.8-4-7-10-7zM4.3 6.9C2.7 8.5 1.8 10.2 2 12c.4 1.8 4 7 10 7 1.5 0 2.9-.3 4.1-.9l-2.3-2.3A4 4 0 0 1 8.2 10.8zM3.4 2.6 21.4 20.6l-1.4 1.4L2 4z"/></svg>"#;
const CROSS_SVG: &str = r#"<svg xmlns="http://www.w3.org/2000/svg" viewBox="0 0 24 24"><path d="M6.2 4.8 12 10.6l5.8-5.8 1.4 1.4L13.4 12l5.8 5.8-1.4 1.4L12 13.4l-5.8 5.8-1.4-1.4L10.6 12 4.8 6.2z"/></svg>"#;
const CHECK_CIRCLE_SVG: &str = r#"<svg xmlns="http://www.w3.org/2000/svg" viewBox="0 0 24 24"><path d="M12 2a10 10 0 1 0 0 20 10 10 0 0 0 0-20zm-1.4 14.6-4.2-4.2 1.4-1.4 2.8 2.8 5.6-5.6 1.4 1.4z" fill-rule="evenodd"/></svg>"#;
const CIRCLE_SVG: &str = r#"<svg xmlns="http://www.w3.org/2000/svg" viewBox="0 0 24 24"><path d="M12 2a10 10 0 1 0 0 20 10 10 0 0 0 0-20zm0 2a8 8 0 1 1 0 16 8 8 0 0 1 0-16z"/></svg>"#;
const MOON_SVG: &str = r#"<svg xmlns="http://www.w3.org/2000/svg" viewBox="0 0 24 24"><path d="M20.5 14.1A8.5 8.5 0 0 1 9.9 3.5 8.5 8.5 0 1 0 20.5 14.1z"/></svg>"#;
const SUN_SVG: &str = r#"<svg xmlns="http://www.w3.org/2000/svg" viewBox="0 0 24 24"><path d="M12 7a5 5 0 1 0 0 10 5 5 0 0 0 0-10zM11 1h2v3h-2zm0 19h2v3h-2zM1 11h3v2H1zm19 0h3v2h-3zM4.2 5.6 5.6 4.2l2.1 2.1-1.4 1.4zm12.1 12.1 1.4-1.4 2.1 2.1-1.4 1.4zM4.2 18.4l2.1-2.1 1.4 1.4-2.1 2.1zM16.3 6.3l2.1-2.1 1.4 1.4-2.1 2.1z"/></svg>"#;
const INFO_SVG: &str = r#"<svg xmlns="http://www.w3.org/2000/svg" viewBox="0 0 24 24"><path d="M12 2a10 10 0 1 0 0 20 10 10 0 0 0 0-20zm-1 5h2v2h-2zm0 4h2v6h-2z"/></svg>"#;

define_icon!(bell, BELL_SVG, "Bell icon: notification source.");
define_icon!(bell_slash, BELL_SLASH_SVG, "Bell icon with a slash.");
define_icon!(play, PLAY_SVG, "Play icon: triangle in a circle.");
define_icon!(eye, EYE_SVG, "Eye icon: visibility on.");
define_icon!(eye_slash, EYE_SLASH_SVG, "Eye icon with a slash.");
define_icon!(cross, CROSS_SVG, "Cross icon: dismiss glyph.");
define_icon!(
    check_circle,
    CHECK_CIRCLE_SVG,
    "Checkmark in a filled circle."
);
define_icon!(circle, CIRCLE_SVG, "Circle outline. Placeholder glyph.");
define_icon!(moon, MOON_SVG, "Crescent moon: dark mode.");
define_icon!(sun, SUN_SVG, "Sun with rays: light mode.");
define_icon!(info, INFO_SVG, "Letter i in a filled circle.");

/// Resolves a string icon key to a handle.
///
/// Returns `None` for unknown keys; callers decide whether to fall back
/// to [`circle`] or suppress the icon slot.
pub fn named(key: &str) -> Option<Handle> {
    match key {
        "bell" => Some(bell()),
        "bell.slash" => Some(bell_slash()),
        "play" => Some(play()),
        "eye" => Some(eye()),
        "eye.slash" => Some(eye_slash()),
        "cross" => Some(cross()),
        "check" => Some(check_circle()),
        "circle" => Some(circle()),
        "moon" => Some(moon()),
        "sun" => Some(sun()),
        "info" => Some(info()),
        _ => None,
    }
}

/// Returns a square `Svg` widget for the handle, tinted with `color`.
pub fn tinted<'a>(handle: Handle, size: f32, color: Color) -> Svg<'a> {
    Svg::new(handle)
        .width(Length::Fixed(size))
        .height(Length::Fixed(size))
        .style(move |_theme, _status| svg::Style { color: Some(color) })
}
