// SPDX-License-Identifier: MPL-2.0
//! Fading "you selected tab N" notice.

use std::time::{Duration, Instant};

/// How long the notice stays fully opaque.
pub const HOLD: Duration = Duration::from_secs(1);

/// How long the fade-out takes after the hold.
pub const FADE: Duration = Duration::from_secs(1);

#[derive(Debug, Clone, PartialEq)]
pub struct Notice {
    text: String,
    shown_at: Instant,
}

impl Notice {
    /// Notice for a zero-based tab index.
    #[must_use]
    pub fn tab_selected(index: usize, now: Instant) -> Self {
        Self {
            text: format!("You selected tab number {}", index + 1),
            shown_at: now,
        }
    }

    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    #[must_use]
    pub fn opacity(&self, now: Instant) -> f32 {
        let elapsed = now.saturating_duration_since(self.shown_at);
        if elapsed <= HOLD {
            return 1.0;
        }
        let fading = (elapsed - HOLD).as_secs_f32() / FADE.as_secs_f32();
        (1.0 - fading).clamp(0.0, 1.0)
    }

    #[must_use]
    pub fn is_expired(&self, now: Instant) -> bool {
        now.saturating_duration_since(self.shown_at) >= HOLD + FADE
    }
}
