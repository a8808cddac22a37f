// SPDX-License-Identifier: MPL-2.0
//! Container styles.

use iced::widget::container;
use iced::{Background, Border, Color, Shadow, Theme};

/// Solid rounded surface used for the control background and its indicator.
pub fn pill(color: Color, radius: f32, shadow: Shadow) -> impl Fn(&Theme) -> container::Style {
    move |_theme: &Theme| container::Style {
        background: Some(Background::Color(color)),
        border: Border {
            radius: radius.into(),
            ..Default::default()
        },
        shadow,
        ..Default::default()
    }
}

/// Surface of the demo screen, following the active theme background.
pub fn screen(theme: &Theme) -> container::Style {
    let palette = theme.extended_palette();

    container::Style {
        background: Some(Background::Color(palette.background.base.color)),
        text_color: Some(palette.background.base.text),
        ..Default::default()
    }
}
