// SPDX-License-Identifier: MPL-2.0
//! `iced_banner` is a dismissible notification/action banner component
//! for the Iced GUI framework, plus a small demo screen exercising it.
//!
//! The component is a pure function from a content descriptor and a
//! platform-capability flag to a rendered element; the host screen owns
//! all visibility state and reacts to the banner's dismiss/action
//! messages.

pub mod app;
pub mod ui;
