// SPDX-License-Identifier: MPL-2.0
//! Button styles for the demo screen.

use crate::ui::design_tokens::{opacity, palette, radius, shadow};
use iced::widget::button;
use iced::{Background, Border, Color, Theme};

/// Button filled with `color`, used to pick theme colors.
///
/// Text switches to black or white depending on the swatch brightness.
pub fn swatch(color: Color) -> impl Fn(&Theme, button::Status) -> button::Style {
    move |_theme: &Theme, status: button::Status| {
        let fill = match status {
            button::Status::Hovered => Color {
                a: opacity::SHADOW_STRONG,
                ..color
            },
            _ => color,
        };

        button::Style {
            background: Some(Background::Color(fill)),
            text_color: contrasting_text(color),
            border: Border {
                color: palette::GRAY_400,
                width: 1.0,
                radius: radius::MD.into(),
            },
            shadow: match status {
                button::Status::Pressed => shadow::NONE,
                _ => shadow::CONTROL,
            },
            snap: true,
        }
    }
}

fn contrasting_text(background: Color) -> Color {
    let luminance = 0.2126 * background.r + 0.7152 * background.g + 0.0722 * background.b;
    if luminance > 0.5 {
        palette::BLACK
    } else {
        palette::WHITE
    }
}
