// SPDX-License-Identifier: MPL-2.0
//! Toggleable notification/action banner component.
//!
//! A single presentational widget parameterized over icon, title,
//! subtitle, an optional action button with style variants, and a
//! capability fallback for its background visual effect.
//!
//! # Components
//!
//! - [`content`] - `BannerContent` descriptor and the `notification` /
//!   `action` factory constructors
//! - [`style`] - `BannerStyle` variant set resolving to color pairs
//! - [`background`] - capability-fallback background resolution
//! - [`view`] - the render function
//!
//! # Usage
//!
//! ```ignore
//! use crate::ui::banner::{Banner, BannerContent};
//!
//! let content = BannerContent::notification("bell", "Saved", Message::BannerClosed)
//!     .subtitle("Your changes have been synced");
//!
//! // In your view function, with the platform capability injected:
//! let element = Banner::view(content, supports_glass);
//! ```
//!
//! The banner holds no state of its own: the host owns the visibility
//! flag, clears it when the `on_action` message arrives, and rebuilds
//! the banner stack on every render pass.

mod background;
mod content;
mod style;
mod view;

pub use background::BackgroundTreatment;
pub use content::{BannerContent, TrailingControl};
pub use style::BannerStyle;
pub use view::Banner;
