// SPDX-License-Identifier: MPL-2.0
//! User interface components, following the Elm-style "state down, messages
//! up" pattern.
//!
//! - [`segmented_control`] - Icon tab bar with a sliding selection indicator
//! - [`styles`] - Centralized styling (buttons, containers)
//! - [`design_tokens`] - Design system constants (colors, spacing, shadows)
//! - [`theming`] - Light/Dark/System theme mode

pub mod design_tokens;
pub mod segmented_control;
pub mod styles;
pub mod theming;
