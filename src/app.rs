// SPDX-License-Identifier: MPL-2.0
//! Demo host screen for the banner component.
//!
//! Plays the role of the "external caller" in the component contract:
//! it owns one visibility flag per banner, rebuilds the banner stack on
//! every render pass, and clears the matching flag when a banner's
//! dismiss or action message arrives. The banners themselves never
//! manage their own visibility.

use crate::ui::banner::{Banner, BannerContent, BannerStyle};
use crate::ui::design_tokens::{palette, radius, shadow, sizing, spacing, typography};
use crate::ui::icons;
use crate::ui::theming::ThemeMode;
use iced::font::{Font, Weight};
use iced::widget::svg::Handle;
use iced::widget::{button, scrollable, Column, Container, Row, Stack, Text};
use iced::{alignment, window, Background, Border, Color, Element, Length, Task, Theme};

/// Launcher options parsed from the command line.
#[derive(Debug, Clone, Default)]
pub struct Flags {
    /// Start with the legacy background treatment forced on.
    pub use_legacy: bool,
    /// Pretend the platform cannot render the glass effect.
    pub no_glass: bool,
    /// Initial theme preference; defaults to following the system.
    pub theme: Option<ThemeMode>,
}

impl Flags {
    /// Parses the launcher options.
    ///
    /// Malformed values (e.g. `--theme sepia`) are surfaced as errors
    /// rather than silently falling back to defaults.
    pub fn from_args(mut args: pico_args::Arguments) -> Result<Self, pico_args::Error> {
        Ok(Self {
            use_legacy: args.contains("--legacy"),
            no_glass: args.contains("--no-glass"),
            theme: args.opt_value_from_fn("--theme", ThemeMode::from_arg)?,
        })
    }
}

/// Messages produced by the demo controls and the banners.
#[derive(Debug, Clone, PartialEq)]
pub enum Message {
    ToggleNotificationBanner,
    ToggleAdBanner,
    ToggleLegacyVisual,
    ToggleThemeMode,
    NotificationClosed,
    AdSkipped,
}

/// Demo screen state: per-banner visibility flags plus the two knobs
/// the banner component is parameterized over.
#[derive(Debug)]
pub struct App {
    show_notification: bool,
    show_skip_ad: bool,
    use_legacy: bool,
    supports_glass: bool,
    theme_mode: ThemeMode,
}

pub const WINDOW_DEFAULT_WIDTH: f32 = 420.0;
pub const WINDOW_DEFAULT_HEIGHT: f32 = 700.0;

/// Entry point used by `main.rs` to launch the Iced application loop.
pub fn run(flags: Flags) -> iced::Result {
    use std::cell::RefCell;

    // Wrap flags in RefCell<Option<_>> to satisfy Fn trait requirement
    // while only consuming flags once (iced 0.14 requires Fn, not FnOnce)
    let boot_state = RefCell::new(Some(flags));
    let boot = move || {
        let flags = boot_state
            .borrow_mut()
            .take()
            .expect("Boot function called more than once");
        App::new(flags)
    };

    iced::application(boot, App::update, App::view)
        .title(App::title)
        .theme(App::theme)
        .window(window::Settings {
            size: iced::Size::new(WINDOW_DEFAULT_WIDTH, WINDOW_DEFAULT_HEIGHT),
            min_size: Some(iced::Size::new(360.0, 560.0)),
            ..window::Settings::default()
        })
        .run()
}

impl Default for App {
    fn default() -> Self {
        Self {
            show_notification: true,
            show_skip_ad: true,
            use_legacy: false,
            supports_glass: true,
            theme_mode: ThemeMode::System,
        }
    }
}

impl App {
    fn new(flags: Flags) -> (Self, Task<Message>) {
        let app = Self {
            use_legacy: flags.use_legacy,
            supports_glass: !flags.no_glass,
            theme_mode: flags.theme.unwrap_or_default(),
            ..Self::default()
        };

        (app, Task::none())
    }

    fn title(&self) -> String {
        String::from("Banner Demo")
    }

    fn theme(&self) -> Theme {
        self.theme_mode.theme()
    }

    fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::ToggleNotificationBanner => {
                self.show_notification = !self.show_notification;
            }
            Message::ToggleAdBanner => {
                self.show_skip_ad = !self.show_skip_ad;
            }
            Message::ToggleLegacyVisual => {
                self.use_legacy = !self.use_legacy;
            }
            Message::ToggleThemeMode => {
                self.theme_mode = self.theme_mode.toggled();
            }
            Message::NotificationClosed => {
                self.show_notification = false;
            }
            Message::AdSkipped => {
                self.show_skip_ad = false;
            }
        }

        Task::none()
    }

    fn view(&self) -> Element<'_, Message> {
        let base = Column::new()
            .push(
                Container::new(filler_content())
                    .width(Length::Fill)
                    .height(Length::Fill),
            )
            .push(self.controls());

        let overlay = Container::new(self.banner_stack())
            .width(Length::Fill)
            .align_y(alignment::Vertical::Top)
            .padding([spacing::XS, spacing::MD]);

        Stack::new().push(base).push(overlay).into()
    }

    /// The banner stack overlaid at the top of the screen, rebuilt from
    /// the visibility flags on every render pass.
    fn banner_stack(&self) -> Element<'_, Message> {
        let mut stack = Column::new().spacing(spacing::XS);

        if self.show_notification {
            let content =
                BannerContent::notification("bell", "Saved", Message::NotificationClosed)
                    .subtitle("Your changes have been synced")
                    .use_legacy_visual(self.use_legacy);
            stack = stack.push(Banner::view(content, self.supports_glass));
        }

        if self.show_skip_ad {
            let content = BannerContent::action("play", "Skip ads?", Message::AdSkipped)
                .subtitle("Don't waste your time")
                .action_label("Skip")
                .action_style(BannerStyle::primary())
                .use_legacy_visual(self.use_legacy);
            stack = stack.push(Banner::view(content, self.supports_glass));
        }

        stack.into()
    }

    fn controls(&self) -> Element<'_, Message> {
        let notification_control = if self.show_notification {
            control_button(
                icons::bell_slash(),
                "Hide Banner",
                palette::INFO_500,
                Message::ToggleNotificationBanner,
            )
        } else {
            control_button(
                icons::bell(),
                "Show Banner",
                palette::INFO_500,
                Message::ToggleNotificationBanner,
            )
        };

        let ad_control = if self.show_skip_ad {
            control_button(
                icons::eye_slash(),
                "Hide Ad Banner",
                palette::WARNING_500,
                Message::ToggleAdBanner,
            )
        } else {
            control_button(
                icons::eye(),
                "Show Ad Banner",
                palette::WARNING_500,
                Message::ToggleAdBanner,
            )
        };

        let legacy_control = if self.use_legacy {
            control_button(
                icons::check_circle(),
                "Use Glass Effect",
                palette::ACCENT_PURPLE,
                Message::ToggleLegacyVisual,
            )
        } else {
            control_button(
                icons::circle(),
                "Use Legacy Effect",
                palette::ACCENT_PURPLE,
                Message::ToggleLegacyVisual,
            )
        };

        let theme_control = if self.theme_mode.is_dark() {
            control_button(
                icons::sun(),
                "Light Mode",
                palette::ACCENT_YELLOW,
                Message::ToggleThemeMode,
            )
        } else {
            control_button(
                icons::moon(),
                "Dark Mode",
                palette::ACCENT_YELLOW,
                Message::ToggleThemeMode,
            )
        };

        Container::new(
            Column::new()
                .spacing(spacing::XS)
                .push(notification_control)
                .push(ad_control)
                .push(legacy_control)
                .push(theme_control),
        )
        .width(Length::Fill)
        .padding(spacing::MD)
        .into()
    }
}

/// Scrollable filler representing the page content the banners overlay.
fn filler_content<'a>() -> Element<'a, Message> {
    let mut lines = Column::new()
        .spacing(spacing::SM)
        .padding(spacing::MD)
        .align_x(alignment::Horizontal::Center);

    for _ in 0..12 {
        lines = lines.push(
            Text::new("Hello, world! Hello, world! Hello, world!")
                .size(typography::TITLE_SM)
                .font(Font {
                    weight: Weight::Bold,
                    ..Font::DEFAULT
                }),
        );
    }

    scrollable(lines).width(Length::Fill).into()
}

/// Full-width demo control button with a leading icon and accent fill.
fn control_button<'a>(
    icon: Handle,
    label: &'a str,
    accent: Color,
    message: Message,
) -> Element<'a, Message> {
    let row = Row::new()
        .spacing(spacing::XS)
        .align_y(alignment::Vertical::Center)
        .push(icons::tinted(icon, sizing::CONTROL_ICON, palette::WHITE))
        .push(Text::new(label).size(typography::BODY).font(Font {
            weight: Weight::Semibold,
            ..Font::DEFAULT
        }));

    button(
        Container::new(row)
            .width(Length::Fill)
            .align_x(alignment::Horizontal::Center),
    )
    .on_press(message)
    .width(Length::Fill)
    .padding(spacing::SM)
    .style(move |_theme: &Theme, status| control_button_style(accent, status))
    .into()
}

/// Style function for the demo control buttons.
fn control_button_style(accent: Color, status: button::Status) -> button::Style {
    use iced::widget::button::{Status, Style};

    let fill = match status {
        Status::Hovered => Color {
            a: 0.9,
            ..accent
        },
        Status::Pressed => Color {
            a: 0.8,
            ..accent
        },
        _ => accent,
    };

    Style {
        background: Some(Background::Color(fill)),
        text_color: palette::WHITE,
        border: Border {
            radius: radius::MD.into(),
            ..Default::default()
        },
        shadow: shadow::NONE,
        snap: true,
    }
}
