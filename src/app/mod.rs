// SPDX-License-Identifier: MPL-2.0
//! Demo application hosting a single segmented control.
//!
//! The host builds the control from the loaded configuration, forwards
//! control messages, and reacts to [`Event::TabSelected`] by showing a
//! short-lived notice. Swatch buttons restyle the control live.

mod glyphs;
mod message;
pub mod notice;

pub use glyphs::demo_icons;
pub use message::{Flags, Message};

use crate::config::{self, paths, Config};
use crate::error::{Error, Result};
use crate::ui::design_tokens::{palette, spacing, typography};
use crate::ui::segmented_control::{self, Colors, Event, SegmentedControl, Settings};
use crate::ui::styles;
use crate::ui::theming::ThemeMode;
use iced::widget::{button, text, Column, Container, Row, Text};
use iced::{time, window, Alignment, Color, Element, Length, Subscription, Task, Theme};
use notice::Notice;
use std::fmt;
use std::time::Instant;

pub const WINDOW_DEFAULT_WIDTH: f32 = 520.0;
pub const WINDOW_DEFAULT_HEIGHT: f32 = 320.0;

/// Colors offered for the control background.
const CONTROL_SWATCHES: [Color; 4] = [
    palette::ORANGE,
    palette::PRIMARY_500,
    palette::SUCCESS_500,
    palette::ERROR_500,
];

/// Colors offered for the unselected icons.
const TINT_SWATCHES: [Color; 3] = [palette::WHITE, palette::GRAY_100, palette::GRAY_900];

/// Colors offered for the indicator.
const INDICATOR_SWATCHES: [Color; 3] = [palette::WHITE, palette::GRAY_100, palette::BLACK];

/// Root application state.
pub struct App {
    control: SegmentedControl,
    notice: Option<Notice>,
    warning: Option<String>,
    theme_mode: ThemeMode,
    now: Instant,
}

impl fmt::Debug for App {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("App")
            .field("selected_index", &self.control.selected_index())
            .field("notice", &self.notice.as_ref().map(Notice::text))
            .finish()
    }
}

/// Builds the window settings.
pub fn window_settings() -> window::Settings {
    window::Settings {
        size: iced::Size::new(WINDOW_DEFAULT_WIDTH, WINDOW_DEFAULT_HEIGHT),
        ..window::Settings::default()
    }
}

/// Entry point used by `main.rs` to launch the Iced application loop.
pub fn run(app: App) -> iced::Result {
    use std::cell::RefCell;

    // iced requires an Fn boot closure; the state is only moved out once.
    let boot_state = RefCell::new(Some(app));
    let boot = move || {
        let app = boot_state
            .borrow_mut()
            .take()
            .expect("Boot function called more than once");
        (app, Task::none())
    };

    iced::application(boot, App::update, App::view)
        .title(App::title)
        .theme(App::theme)
        .window(window_settings())
        .subscription(App::subscription)
        .run()
}

impl App {
    /// Loads the configuration and builds the hosted control.
    pub fn new(flags: Flags) -> Result<Self> {
        paths::init_cli_override(flags.config_dir);
        let (config, warning) = config::load();
        Self::from_config(&config, warning, flags.starting_index)
    }

    /// Builds the hosted control from an already loaded configuration.
    ///
    /// Invalid configured values fall back to defaults and surface as the
    /// warning line. An out-of-range `starting_index` passed explicitly is
    /// an error.
    pub fn from_config(
        config: &Config,
        mut warning: Option<String>,
        starting_index: Option<usize>,
    ) -> Result<Self> {
        let colors = match config.control.colors() {
            Ok(colors) => colors,
            Err(err) => {
                tracing::warn!(error = %err, "invalid control colors, using defaults");
                warning = warning.or_else(|| Some(err.to_string()));
                Colors::default()
            }
        };

        let icons = demo_icons();
        let starting_index = match (starting_index, config.control.starting_index) {
            (Some(index), _) => index,
            (None, Some(index)) if index >= icons.len() => {
                let err = Error::StartingIndexOutOfRange {
                    index,
                    count: icons.len(),
                };
                tracing::warn!(error = %err, "invalid starting tab, using the first one");
                warning = warning.or_else(|| Some(err.to_string()));
                0
            }
            (None, configured) => configured.unwrap_or(0),
        };

        let control = SegmentedControl::new(Settings {
            bounds: config.control.bounds(),
            icons,
            colors,
            starting_index,
        })?
        .with_animation_duration(config.control.animation_duration());

        tracing::info!(
            tabs = control.tab_count(),
            selected = control.selected_index(),
            width = control.bounds().width,
            "segmented control ready"
        );

        Ok(Self::with_control(control, config.general.theme_mode, warning))
    }

    /// Wraps an already built control.
    #[must_use]
    pub fn with_control(
        control: SegmentedControl,
        theme_mode: ThemeMode,
        warning: Option<String>,
    ) -> Self {
        Self {
            control,
            notice: None,
            warning,
            theme_mode,
            now: Instant::now(),
        }
    }

    #[must_use]
    pub fn control(&self) -> &SegmentedControl {
        &self.control
    }

    #[must_use]
    pub fn notice(&self) -> Option<&Notice> {
        self.notice.as_ref()
    }

    /// Configuration problem shown under the control, if any.
    #[must_use]
    pub fn warning(&self) -> Option<&str> {
        self.warning.as_deref()
    }

    fn title(&self) -> String {
        String::from("Pill Tabs")
    }

    fn theme(&self) -> Theme {
        self.theme_mode.iced_theme()
    }

    pub fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::Control(message) => {
                let now = Instant::now();
                if let Event::TabSelected(index) = self.control.update_at(message, now) {
                    self.notice = Some(Notice::tab_selected(index, now));
                    self.now = now;
                }
            }
            Message::Tick(now) => {
                self.now = now;
                if self
                    .notice
                    .as_ref()
                    .is_some_and(|notice| notice.is_expired(now))
                {
                    self.notice = None;
                }
            }
        }
        Task::none()
    }

    fn subscription(&self) -> Subscription<Message> {
        let control = self.control.subscription().map(Message::Control);
        let fade = if self.notice.is_some() {
            time::every(segmented_control::FRAME_INTERVAL).map(Message::Tick)
        } else {
            Subscription::none()
        };
        Subscription::batch([control, fade])
    }

    fn view(&self) -> Element<'_, Message> {
        let control = self.control.view().map(Message::Control);

        let notice: Element<'_, Message> = match &self.notice {
            Some(notice) => {
                let alpha = notice.opacity(self.now);
                Text::new(notice.text())
                    .size(typography::TITLE_SM)
                    .style(move |theme: &Theme| text::Style {
                        color: Some(Color {
                            a: alpha,
                            ..theme.palette().text
                        }),
                    })
                    .into()
            }
            None => Text::new(" ").size(typography::TITLE_SM).into(),
        };

        let mut content = Column::new()
            .spacing(spacing::LG)
            .align_x(Alignment::Center)
            .push(control)
            .push(notice)
            .push(swatch_row(
                "Control",
                &CONTROL_SWATCHES,
                segmented_control::Message::SetControlColor,
            ))
            .push(swatch_row(
                "Icons",
                &TINT_SWATCHES,
                segmented_control::Message::SetTabTintColor,
            ))
            .push(swatch_row(
                "Indicator",
                &INDICATOR_SWATCHES,
                segmented_control::Message::SetSelectedTabColor,
            ));

        if let Some(warning) = &self.warning {
            content = content.push(
                Text::new(warning.as_str())
                    .size(typography::CAPTION)
                    .color(palette::ERROR_500),
            );
        }

        Container::new(content)
            .center(Length::Fill)
            .padding(spacing::LG)
            .style(styles::container::screen)
            .into()
    }
}

fn swatch_row<'a>(
    label: &'a str,
    swatches: &[Color],
    to_message: fn(Color) -> segmented_control::Message,
) -> Element<'a, Message> {
    swatches
        .iter()
        .fold(
            Row::new()
                .spacing(spacing::XS)
                .align_y(Alignment::Center)
                .push(Text::new(label).size(typography::BODY).width(Length::Fixed(80.0))),
            |row, &color| {
                row.push(
                    button(Text::new(" ").size(typography::BODY))
                        .width(Length::Fixed(spacing::XL))
                        .style(styles::button::swatch(color))
                        .on_press(Message::Control(to_message(color))),
                )
            },
        )
        .into()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::segmented_control::animation::DEFAULT_DURATION;

    fn app(starting_index: usize) -> App {
        let control = SegmentedControl::new(Settings {
            icons: demo_icons(),
            starting_index,
            ..Settings::default()
        })
        .expect("demo icons are not empty");
        App::with_control(control, ThemeMode::Light, None)
    }

    fn config_starting_at(index: usize) -> Config {
        let mut config = Config::default();
        config.control.starting_index = Some(index);
        config
    }

    #[test]
    fn configured_start_out_of_range_falls_back_to_first_tab() {
        let app = App::from_config(&config_starting_at(9), None, None)
            .expect("config values never fail construction");

        assert_eq!(app.control().selected_index(), 0);
        let warning = app.warning().expect("fallback is reported");
        assert!(warning.contains('9'));
    }

    #[test]
    fn configured_start_in_range_is_used_silently() {
        let app = App::from_config(&config_starting_at(3), None, None).expect("valid config");

        assert_eq!(app.control().selected_index(), 3);
        assert!(app.warning().is_none());
    }

    #[test]
    fn explicit_start_out_of_range_is_an_error() {
        let result = App::from_config(&config_starting_at(1), None, Some(9));

        assert!(matches!(
            result,
            Err(Error::StartingIndexOutOfRange { index: 9, count: 4 })
        ));
    }

    #[test]
    fn explicit_start_overrides_configured_one() {
        let app = App::from_config(&config_starting_at(9), None, Some(1)).expect("valid flag");

        assert_eq!(app.control().selected_index(), 1);
        assert!(app.warning().is_none());
    }

    #[test]
    fn invalid_colors_fall_back_with_warning() {
        let mut config = Config::default();
        config.control.control_color = Some("orange".to_string());

        let app = App::from_config(&config, None, None).expect("colors never fail construction");

        assert_eq!(app.control().colors(), &Colors::default());
        assert!(app.warning().is_some());
    }

    #[test]
    fn selecting_a_tab_shows_notice() {
        let mut app = app(2);
        let _ = app.update(Message::Control(
            segmented_control::Message::TabPressed(0),
        ));

        assert_eq!(app.control().selected_index(), 0);
        assert_eq!(
            app.notice().map(Notice::text),
            Some("You selected tab number 1")
        );
    }

    #[test]
    fn pressing_selected_tab_shows_nothing() {
        let mut app = app(2);
        let _ = app.update(Message::Control(
            segmented_control::Message::TabPressed(2),
        ));
        assert!(app.notice().is_none());
    }

    #[test]
    fn tick_clears_expired_notice() {
        let mut app = app(0);
        let _ = app.update(Message::Control(
            segmented_control::Message::TabPressed(1),
        ));
        let later = Instant::now() + notice::HOLD + notice::FADE + DEFAULT_DURATION;

        let _ = app.update(Message::Tick(later));

        assert!(app.notice().is_none());
    }

    #[test]
    fn swatch_message_restyles_control() {
        let mut app = app(0);
        let _ = app.update(Message::Control(
            segmented_control::Message::SetTabTintColor(palette::GRAY_900),
        ));

        assert_eq!(app.control().tab_tint(1), Some(palette::GRAY_900));
        assert_eq!(app.control().tab_tint(0), Some(app.control().colors().control));
    }
}
