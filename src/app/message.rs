// SPDX-License-Identifier: MPL-2.0
//! Top-level messages and runtime flags for the demo application.

use crate::ui::segmented_control;
use std::time::Instant;

/// Top-level messages consumed by `App::update`.
#[derive(Debug, Clone)]
pub enum Message {
    /// Forwarded to the hosted segmented control.
    Control(segmented_control::Message),
    /// Frame tick driving the notice fade-out.
    Tick(Instant),
}

/// Runtime flags parsed from the command line.
#[derive(Debug, Clone, Default)]
pub struct Flags {
    /// Optional config directory override (for settings.toml).
    /// Takes precedence over `PILL_TABS_CONFIG_DIR` environment variable.
    pub config_dir: Option<String>,
    /// Optional starting tab, overriding the configured one.
    pub starting_index: Option<usize>,
}
