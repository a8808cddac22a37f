// SPDX-License-Identifier: MPL-2.0
//! Segmented tab control with a sliding "pill" indicator.
//!
//! The control owns a fixed list of icon tabs. Pressing a tab retints the
//! icons, slides the indicator under the new tab and reports
//! [`Event::TabSelected`] to the host, which is the only outbound
//! notification. The host keeps the control in its state, forwards
//! [`Message`]s to [`SegmentedControl::update`] and renders it with
//! [`SegmentedControl::view`].
//!
//! ```no_run
//! use iced::widget::svg;
//! use pill_tabs::ui::segmented_control::{Event, SegmentedControl, Settings};
//!
//! let icons = vec![
//!     svg::Handle::from_path("home.svg"),
//!     svg::Handle::from_path("search.svg"),
//! ];
//! let mut control = SegmentedControl::new(Settings {
//!     icons,
//!     ..Settings::default()
//! })
//! .expect("at least one icon");
//!
//! let event = control.update(pill_tabs::ui::segmented_control::Message::TabPressed(1));
//! assert_eq!(event, Event::TabSelected(1));
//! ```

pub mod animation;
pub mod colors;
pub mod layout;
pub mod selection;
mod view;

pub use colors::Colors;
pub use layout::{Layout, Metrics};
pub use selection::{Selection, Transition};

use crate::error::{Error, Result};
use animation::Slide;
use iced::widget::svg;
use iced::{time, Color, Element, Point, Rectangle, Size, Subscription};
use std::time::{Duration, Instant};

/// Interval between animation frames while the indicator is moving.
pub const FRAME_INTERVAL: Duration = Duration::from_millis(16);

/// Construction parameters.
#[derive(Debug, Clone)]
pub struct Settings {
    /// Requested frame. Widened if too narrow for the tabs.
    pub bounds: Rectangle,
    /// One glyph per tab. Rendered as a single-color template.
    pub icons: Vec<svg::Handle>,
    pub colors: Colors,
    pub starting_index: usize,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            bounds: Rectangle::new(Point::ORIGIN, Size::new(200.0, 40.0)),
            icons: Vec::new(),
            colors: Colors::default(),
            starting_index: 0,
        }
    }
}

/// Messages handled by the control.
#[derive(Debug, Clone)]
pub enum Message {
    /// The hit region of a tab was pressed.
    TabPressed(usize),
    /// Animation frame.
    Tick(Instant),
    SetControlColor(Color),
    SetTabTintColor(Color),
    SetSelectedTabColor(Color),
}

/// Events propagated to the host.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Event {
    None,
    /// Emitted once per committed selection change.
    TabSelected(usize),
}

/// A tab visual: its glyph and current tint.
#[derive(Debug, Clone)]
pub struct Tab {
    icon: svg::Handle,
    tint: Color,
}

impl Tab {
    #[must_use]
    pub fn icon(&self) -> &svg::Handle {
        &self.icon
    }

    #[must_use]
    pub fn tint(&self) -> Color {
        self.tint
    }
}

#[derive(Debug, Clone)]
pub struct SegmentedControl {
    bounds: Rectangle,
    tabs: Vec<Tab>,
    selection: Selection,
    colors: Colors,
    metrics: Metrics,
    animation_duration: Duration,
    slide: Option<Slide>,
    /// Indicator x offset as of the last processed frame.
    indicator_x: f32,
}

impl SegmentedControl {
    /// Builds the control, widening `settings.bounds` if the tabs would not
    /// fit at a square aspect ratio.
    ///
    /// Fails without icons, with a starting index past the last tab, or
    /// when the height is at most [`layout::minimum_height`].
    pub fn new(settings: Settings) -> Result<Self> {
        let Settings {
            bounds,
            icons,
            colors,
            starting_index,
        } = settings;

        let count = icons.len();
        if count == 0 {
            return Err(Error::NoTabs);
        }
        let selection =
            Selection::new(starting_index, count).ok_or(Error::StartingIndexOutOfRange {
                index: starting_index,
                count,
            })?;

        let metrics = Metrics::DEFAULT;
        let minimum_height = layout::minimum_height(metrics);
        if bounds.height.is_nan() || bounds.height <= minimum_height {
            return Err(Error::ControlTooShort {
                height: bounds.height,
                minimum: minimum_height,
            });
        }

        let fitted = layout::fit_bounds(bounds, count, metrics);
        if fitted.width > bounds.width {
            tracing::debug!(
                requested = bounds.width,
                minimum = fitted.width,
                tabs = count,
                "widening segmented control to fit square tabs"
            );
        }

        let tabs = icons
            .into_iter()
            .enumerate()
            .map(|(index, icon)| Tab {
                icon,
                tint: colors.tint_for(selection.is_selected(index)),
            })
            .collect();

        let mut control = Self {
            bounds: fitted,
            tabs,
            selection,
            colors,
            metrics,
            animation_duration: animation::DEFAULT_DURATION,
            slide: None,
            indicator_x: 0.0,
        };
        control.indicator_x = control.layout().tab_x(starting_index);
        Ok(control)
    }

    /// Sets how long the indicator takes to slide to a new tab.
    #[must_use]
    pub fn with_animation_duration(mut self, duration: Duration) -> Self {
        self.animation_duration = duration;
        self
    }

    #[must_use]
    pub fn bounds(&self) -> Rectangle {
        self.bounds
    }

    #[must_use]
    pub fn layout(&self) -> Layout {
        Layout::with_metrics(self.bounds.size(), self.tabs.len(), self.metrics)
    }

    #[must_use]
    pub fn tabs(&self) -> &[Tab] {
        &self.tabs
    }

    #[must_use]
    pub fn tab_count(&self) -> usize {
        self.tabs.len()
    }

    #[must_use]
    pub fn selected_index(&self) -> usize {
        self.selection.index()
    }

    /// Tint of the tab at `index`, if it exists.
    #[must_use]
    pub fn tab_tint(&self, index: usize) -> Option<Color> {
        self.tabs.get(index).map(Tab::tint)
    }

    #[must_use]
    pub fn colors(&self) -> &Colors {
        &self.colors
    }

    #[must_use]
    pub fn animation_duration(&self) -> Duration {
        self.animation_duration
    }

    /// Indicator x offset as last rendered.
    #[must_use]
    pub fn indicator_x(&self) -> f32 {
        self.indicator_x
    }

    /// Indicator x offset the current selection rests at.
    #[must_use]
    pub fn resting_indicator_x(&self) -> f32 {
        self.layout().tab_x(self.selection.index())
    }

    #[must_use]
    pub fn is_animating(&self) -> bool {
        self.slide.is_some()
    }

    pub fn set_control_color(&mut self, color: Color) {
        self.colors.control = color;
        let selected = self.selection.index();
        if let Some(tab) = self.tabs.get_mut(selected) {
            tab.tint = color;
        }
    }

    pub fn set_tab_tint_color(&mut self, color: Color) {
        self.colors.tab_tint = color;
        let selection = self.selection;
        for (index, tab) in self.tabs.iter_mut().enumerate() {
            if !selection.is_selected(index) {
                tab.tint = color;
            }
        }
    }

    pub fn set_selected_tab_color(&mut self, color: Color) {
        self.colors.selected_tab = color;
    }

    pub fn update(&mut self, message: Message) -> Event {
        self.update_at(message, Instant::now())
    }

    /// Like [`update`](Self::update) with an explicit clock reading.
    ///
    /// `Tick` messages carry their own instant and ignore `now`.
    pub fn update_at(&mut self, message: Message, now: Instant) -> Event {
        match message {
            Message::TabPressed(index) => self.select_at(index, now),
            Message::Tick(frame) => {
                self.advance(frame);
                Event::None
            }
            Message::SetControlColor(color) => {
                self.set_control_color(color);
                Event::None
            }
            Message::SetTabTintColor(color) => {
                self.set_tab_tint_color(color);
                Event::None
            }
            Message::SetSelectedTabColor(color) => {
                self.set_selected_tab_color(color);
                Event::None
            }
        }
    }

    fn select_at(&mut self, index: usize, now: Instant) -> Event {
        match self.selection.select(index) {
            Transition::Unchanged => Event::None,
            Transition::Rejected { index } => {
                tracing::warn!(
                    index,
                    tabs = self.selection.count(),
                    "ignoring press on unknown tab"
                );
                Event::None
            }
            Transition::Changed { from, to } => {
                self.retint();
                self.slide_to(to, now);
                tracing::debug!(from, to, "tab selected");
                Event::TabSelected(to)
            }
        }
    }

    fn retint(&mut self) {
        let selection = self.selection;
        let colors = self.colors;
        for (index, tab) in self.tabs.iter_mut().enumerate() {
            tab.tint = colors.tint_for(selection.is_selected(index));
        }
    }

    fn slide_to(&mut self, index: usize, now: Instant) {
        let target = self.layout().tab_x(index);
        let slide = match self.slide {
            Some(current) => current.retarget(target, now),
            None => Slide::new(self.indicator_x, target, now, self.animation_duration),
        };
        self.slide = Some(slide);
        self.advance(now);
    }

    fn advance(&mut self, now: Instant) {
        if let Some(slide) = self.slide {
            self.indicator_x = slide.position(now);
            if slide.is_finished(now) {
                self.slide = None;
            }
        }
    }

    /// Frame ticks while the indicator is moving; nothing otherwise.
    pub fn subscription(&self) -> Subscription<Message> {
        if self.is_animating() {
            time::every(FRAME_INTERVAL).map(Message::Tick)
        } else {
            Subscription::none()
        }
    }

    pub fn view(&self) -> Element<'_, Message> {
        view::view(self)
    }
}
