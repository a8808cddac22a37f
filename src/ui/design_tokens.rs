// SPDX-License-Identifier: MPL-2.0
#![doc = r#"
# Design Tokens

Shared constants for colors, spacing, typography, radii and shadows.

## Organization

- **Palette**: Base colors
- **Opacity**: Standardized opacity levels
- **Spacing**: Spacing scale (4px grid)
- **Typography**: Font size scale
- **Radius**: Border radii
- **Shadow**: Shadow definitions

## Examples

```
use pill_tabs::ui::design_tokens::{palette, spacing};
use iced::Color;

let faded = Color { a: 0.5, ..palette::ORANGE };
let padding = spacing::LG; // 24px
```
"#]

use iced::Color;

// ============================================================================
// Color Palette
// ============================================================================

pub mod palette {
    use super::Color;

    // Grayscale
    pub const BLACK: Color = Color::BLACK;
    pub const WHITE: Color = Color::WHITE;
    pub const GRAY_900: Color = Color::from_rgb(0.1, 0.1, 0.1);
    pub const GRAY_400: Color = Color::from_rgb(0.4, 0.4, 0.4);
    pub const GRAY_100: Color = Color::from_rgb(0.85, 0.85, 0.85);

    /// Shadow tint behind the control and the indicator.
    pub const DARK_GRAY: Color = Color::from_rgb(1.0 / 3.0, 1.0 / 3.0, 1.0 / 3.0);

    // Accent colors
    pub const ORANGE: Color = Color::from_rgb(1.0, 0.5, 0.0);
    pub const PRIMARY_500: Color = Color::from_rgb(0.3, 0.6, 0.9);
    pub const SUCCESS_500: Color = Color::from_rgb(0.263, 0.702, 0.404);
    pub const ERROR_500: Color = Color::from_rgb(0.898, 0.224, 0.208);
}

// ============================================================================
// Opacity Scale
// ============================================================================

pub mod opacity {
    pub const SHADOW_SOFT: f32 = 0.5;
    pub const SHADOW_STRONG: f32 = 0.8;
}

// ============================================================================
// Spacing Scale
// ============================================================================

pub mod spacing {
    pub const XS: f32 = 8.0;
    pub const LG: f32 = 24.0;
    pub const XL: f32 = 32.0;
}

// ============================================================================
// Typography Scale
// ============================================================================

pub mod typography {
    /// Section headers
    pub const TITLE_SM: f32 = 18.0;

    /// Standard body text
    pub const BODY: f32 = 14.0;

    /// Hints and secondary labels
    pub const CAPTION: f32 = 12.0;
}

// ============================================================================
// Border Radius Scale
// ============================================================================

pub mod radius {
    pub const MD: f32 = 8.0;
}

// ============================================================================
// Shadow Definitions
// ============================================================================

pub mod shadow {
    use super::{opacity, palette, Color};
    use iced::{Shadow, Vector};

    pub const NONE: Shadow = Shadow {
        color: palette::BLACK,
        offset: Vector::ZERO,
        blur_radius: 0.0,
    };

    /// Drop shadow under the control background.
    pub const CONTROL: Shadow = Shadow {
        color: Color {
            a: opacity::SHADOW_STRONG,
            ..palette::DARK_GRAY
        },
        offset: Vector { x: 0.0, y: 1.0 },
        blur_radius: 1.0,
    };

    /// Drop shadow under the selection indicator.
    pub const INDICATOR: Shadow = Shadow {
        color: Color {
            a: opacity::SHADOW_SOFT,
            ..palette::DARK_GRAY
        },
        offset: Vector { x: 0.0, y: 1.0 },
        blur_radius: 1.0,
    };
}

// ============================================================================
// Compile-time Validation
// ============================================================================

const _: () = {
    assert!(spacing::LG > spacing::XS);
    assert!(spacing::XL > spacing::LG);

    assert!(opacity::SHADOW_SOFT < opacity::SHADOW_STRONG);

    assert!(typography::TITLE_SM > typography::BODY);
    assert!(typography::BODY > typography::CAPTION);
};
