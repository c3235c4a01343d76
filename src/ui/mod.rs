// SPDX-License-Identifier: MPL-2.0
//! User interface components, following a component-based architecture
//! with the Elm-style "state down, messages up" pattern.
//!
//! - [`banner`] - the notification/action banner component
//! - [`design_tokens`] - design system constants (colors, spacing, sizing)
//! - [`icons`] - embedded SVG icon set with string-keyed lookup
//! - [`theming`] - Light/Dark/System theme mode management

pub mod banner;
pub mod design_tokens;
pub mod icons;
pub mod theming;
