// SPDX-License-Identifier: MPL-2.0
//! Centralized default values for configuration constants.

// ==========================================================================
// Control Size Defaults
// ==========================================================================

/// Default requested width of the demo control.
pub const DEFAULT_CONTROL_WIDTH: f32 = 320.0;

/// Default height of the demo control.
pub const DEFAULT_CONTROL_HEIGHT: f32 = 48.0;

/// Smallest height that leaves room for margins and icon padding.
pub const MIN_CONTROL_HEIGHT: f32 = 24.0;

/// Default tab selected at startup.
pub const DEFAULT_STARTING_INDEX: usize = 2;

// ==========================================================================
// Animation Defaults
// ==========================================================================

/// Default indicator slide duration (milliseconds).
pub const DEFAULT_ANIMATION_MS: u64 = 250;

/// Minimum indicator slide duration (0 disables the animation).
pub const MIN_ANIMATION_MS: u64 = 0;

/// Maximum indicator slide duration.
pub const MAX_ANIMATION_MS: u64 = 2000;

// ==========================================================================
// Color Defaults
// ==========================================================================

pub const DEFAULT_CONTROL_COLOR: &str = "#ff8000";
pub const DEFAULT_SELECTED_TAB_COLOR: &str = "#ffffff";
pub const DEFAULT_TAB_TINT_COLOR: &str = "#ffffff";

const _: () = {
    assert!(DEFAULT_CONTROL_HEIGHT >= MIN_CONTROL_HEIGHT);
    assert!(DEFAULT_ANIMATION_MS >= MIN_ANIMATION_MS);
    assert!(DEFAULT_ANIMATION_MS <= MAX_ANIMATION_MS);
};
