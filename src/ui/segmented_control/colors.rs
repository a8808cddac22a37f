// SPDX-License-Identifier: MPL-2.0
//! Color theme of the segmented control.

use crate::error::{Error, Result};
use crate::ui::design_tokens::palette;
use iced::Color;

/// Externally configurable colors.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Colors {
    /// Background of the control. Also used as the tint of the selected icon,
    /// so the glyph looks cut out of the indicator.
    pub control: Color,
    /// Tint of every icon except the selected one.
    pub tab_tint: Color,
    /// Fill of the sliding indicator.
    pub selected_tab: Color,
}

impl Default for Colors {
    fn default() -> Self {
        Self {
            control: palette::ORANGE,
            tab_tint: palette::ORANGE,
            selected_tab: palette::WHITE,
        }
    }
}

impl Colors {
    /// Tint of the icon at `index` given whether it is selected.
    #[must_use]
    pub fn tint_for(&self, selected: bool) -> Color {
        if selected {
            self.control
        } else {
            self.tab_tint
        }
    }
}

/// Parses a `#rrggbb` (or `rrggbb`) hex string.
pub fn parse_hex(raw: &str) -> Result<Color> {
    let digits = raw.trim().trim_start_matches('#');
    if digits.len() != 6 || !digits.is_ascii() {
        return Err(Error::InvalidColor(raw.to_string()));
    }

    let channel = |range: std::ops::Range<usize>| {
        u8::from_str_radix(&digits[range], 16).map_err(|_| Error::InvalidColor(raw.to_string()))
    };

    Ok(Color::from_rgb8(channel(0..2)?, channel(2..4)?, channel(4..6)?))
}
