// SPDX-License-Identifier: MPL-2.0
use iced::widget::svg;
use iced::{Point, Rectangle, Size};
use pill_tabs::config::{self, DEFAULT_CONTROL_HEIGHT};
use pill_tabs::error::Error;
use pill_tabs::ui::design_tokens::palette;
use pill_tabs::ui::segmented_control::animation::DEFAULT_DURATION;
use pill_tabs::ui::segmented_control::layout::{minimum_width, Metrics};
use pill_tabs::ui::segmented_control::{Colors, Event, Message, SegmentedControl, Settings};
use std::time::{Duration, Instant};
use tempfile::tempdir;

const GLYPH: &str = r#"<svg xmlns="http://www.w3.org/2000/svg" viewBox="0 0 1 1"/>"#;

fn icons(count: usize) -> Vec<svg::Handle> {
    (0..count)
        .map(|_| svg::Handle::from_memory(GLYPH.as_bytes()))
        .collect()
}

fn colors() -> Colors {
    Colors {
        control: palette::ORANGE,
        tab_tint: palette::WHITE,
        selected_tab: palette::WHITE,
    }
}

fn control_with(bounds: Rectangle, count: usize, starting_index: usize) -> SegmentedControl {
    SegmentedControl::new(Settings {
        bounds,
        icons: icons(count),
        colors: colors(),
        starting_index,
    })
    .expect("valid settings")
}

#[test]
fn four_tabs_starting_at_two() {
    let control = control_with(
        Rectangle::new(Point::ORIGIN, Size::new(300.0, 40.0)),
        4,
        2,
    );

    assert_eq!(control.selected_index(), 2);
    assert_eq!(control.indicator_x(), control.layout().indicator(2).x);
    assert_eq!(control.tab_tint(2), Some(palette::ORANGE));
    for index in [0, 1, 3] {
        assert_eq!(control.tab_tint(index), Some(palette::WHITE));
    }
}

#[test]
fn narrow_request_is_widened_to_square_tab_floor() {
    let minimum = minimum_width(40.0, 4, Metrics::DEFAULT);
    let requested = Rectangle::new(Point::new(15.0, 30.0), Size::new(minimum * 0.5, 40.0));

    let control = control_with(requested, 4, 0);

    assert_eq!(control.bounds().width, minimum);
    assert_eq!(control.bounds().x, 15.0);
    assert_eq!(control.bounds().y, 30.0);
    assert_eq!(control.bounds().height, 40.0);
}

#[test]
fn every_valid_target_commits_and_notifies_once() {
    for from in 0..4 {
        for to in (0..4).filter(|&to| to != from) {
            let mut control = control_with(
                Rectangle::new(Point::ORIGIN, Size::new(240.0, 44.0)),
                4,
                from,
            );

            assert_eq!(
                control.update(Message::TabPressed(to)),
                Event::TabSelected(to)
            );
            assert_eq!(control.selected_index(), to);
            for index in 0..4 {
                let expected = if index == to {
                    palette::ORANGE
                } else {
                    palette::WHITE
                };
                assert_eq!(control.tab_tint(index), Some(expected));
            }
        }
    }
}

#[test]
fn rapid_taps_settle_on_last_selection() {
    let mut control = control_with(Rectangle::new(Point::ORIGIN, Size::new(300.0, 40.0)), 4, 0);
    let start = Instant::now();
    let mut notified = Vec::new();

    notified.push(control.update_at(Message::TabPressed(1), start));
    control.update_at(Message::Tick(start + Duration::from_millis(50)), start);
    notified.push(control.update_at(
        Message::TabPressed(3),
        start + Duration::from_millis(80),
    ));

    let settled = start + Duration::from_millis(80) + DEFAULT_DURATION;
    control.update_at(Message::Tick(settled), settled);

    assert_eq!(notified, vec![Event::TabSelected(1), Event::TabSelected(3)]);
    assert!(!control.is_animating());
    assert_eq!(control.selected_index(), 3);
    assert_eq!(control.indicator_x(), control.layout().tab_x(3));
}

#[test]
fn pressing_current_tab_keeps_everything() {
    let mut control = control_with(Rectangle::new(Point::ORIGIN, Size::new(300.0, 40.0)), 3, 1);
    let before_x = control.indicator_x();

    assert_eq!(control.update(Message::TabPressed(1)), Event::None);
    assert_eq!(control.selected_index(), 1);
    assert_eq!(control.indicator_x(), before_x);
    assert!(!control.is_animating());
}

#[test]
fn tint_change_repaints_unselected_tabs_only() {
    let mut control = control_with(Rectangle::new(Point::ORIGIN, Size::new(300.0, 40.0)), 4, 2);
    let before_x = control.indicator_x();

    control.update(Message::SetTabTintColor(palette::GRAY_400));

    for index in [0, 1, 3] {
        assert_eq!(control.tab_tint(index), Some(palette::GRAY_400));
    }
    assert_eq!(control.tab_tint(2), Some(palette::ORANGE));
    assert_eq!(control.selected_index(), 2);
    assert_eq!(control.indicator_x(), before_x);
}

#[test]
fn empty_icon_list_is_rejected() {
    let result = SegmentedControl::new(Settings::default());
    assert!(matches!(result, Err(Error::NoTabs)));
}

#[test]
fn degenerate_height_is_rejected_instead_of_inverting_tabs() {
    let result = SegmentedControl::new(Settings {
        bounds: Rectangle::new(Point::ORIGIN, Size::new(0.0, 4.0)),
        icons: icons(4),
        colors: colors(),
        starting_index: 0,
    });

    assert!(matches!(
        result,
        Err(Error::ControlTooShort { height, .. }) if height == 4.0
    ));
}

#[test]
fn indicator_keeps_full_width_through_the_bounce() {
    let mut control = control_with(Rectangle::new(Point::ORIGIN, Size::new(1200.0, 40.0)), 4, 0);
    let layout = control.layout();
    let start = Instant::now();
    control.update_at(Message::TabPressed(3), start);

    for frame in 1..=16 {
        let tick = start + Duration::from_millis(frame * 16);
        control.update_at(Message::Tick(tick), tick);
        let offset = layout.indicator_offset(control.indicator_x());
        assert!(offset >= 0.0);
        assert!(offset + layout.tab_width() <= control.bounds().width + 1e-3);
    }
}

#[test]
fn config_drives_control_construction() {
    let dir = tempdir().expect("Failed to create temporary directory");
    std::fs::write(
        dir.path().join("settings.toml"),
        r##"
[control]
width = 10.0
starting_index = 3
animation_ms = 0
tab_tint_color = "#1a1a1a"
"##,
    )
    .expect("Failed to write config file");

    let (config, warning) = config::load_with_override(Some(dir.path().to_path_buf()));
    assert!(warning.is_none());

    let control = SegmentedControl::new(Settings {
        bounds: config.control.bounds(),
        icons: icons(4),
        colors: config.control.colors().expect("colors parse"),
        starting_index: config.control.starting_index.unwrap_or(0),
    })
    .expect("valid settings")
    .with_animation_duration(config.control.animation_duration());

    assert_eq!(
        control.bounds().width,
        minimum_width(DEFAULT_CONTROL_HEIGHT, 4, Metrics::DEFAULT)
    );
    assert_eq!(control.selected_index(), 3);
    assert_eq!(control.animation_duration(), Duration::ZERO);
    assert_eq!(control.tab_tint(0), Some(iced::Color::from_rgb8(0x1a, 0x1a, 0x1a)));

    dir.close().expect("Failed to close temporary directory");
}
