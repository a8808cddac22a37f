// SPDX-License-Identifier: MPL-2.0
//! Spring-eased slide of the selection indicator.
//!
//! Only the indicator's horizontal offset is animated. Colors switch
//! instantly. Time is always passed in explicitly so the animation can be
//! stepped deterministically.

use std::time::{Duration, Instant};

/// Default duration of the indicator slide.
pub const DEFAULT_DURATION: Duration = Duration::from_millis(250);

/// Damping ratio of the spring. Below 1.0 the indicator settles with a small
/// bounce past its target.
pub const DAMPING_RATIO: f32 = 0.8;

/// Initial velocity, in travelled distances per animation duration.
pub const INITIAL_VELOCITY: f32 = 1.0;

/// Residual amplitude left when the duration elapses.
const SETTLE_THRESHOLD: f32 = 1e-3;

/// Spring easing curve mapping normalized time `[0, 1]` to progress.
///
/// Starts at 0, overshoots 1 slightly and returns exactly 1 from `t >= 1`.
#[must_use]
pub fn spring(t: f32) -> f32 {
    if t <= 0.0 {
        return 0.0;
    }
    if t >= 1.0 {
        return 1.0;
    }

    // Natural frequency chosen so the envelope decays to the threshold at t = 1.
    let omega = -SETTLE_THRESHOLD.ln() / DAMPING_RATIO;
    let decay = DAMPING_RATIO * omega;
    let damped = omega * (1.0 - DAMPING_RATIO * DAMPING_RATIO).sqrt();
    let sine_weight = (decay - INITIAL_VELOCITY) / damped;

    let envelope = (-decay * t).exp();
    1.0 - envelope * ((damped * t).cos() + sine_weight * (damped * t).sin())
}

/// An in-flight move of the indicator between two x offsets.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Slide {
    from: f32,
    to: f32,
    started: Instant,
    duration: Duration,
}

impl Slide {
    #[must_use]
    pub fn new(from: f32, to: f32, started: Instant, duration: Duration) -> Self {
        Self {
            from,
            to,
            started,
            duration,
        }
    }

    /// Normalized elapsed time, clamped to `[0, 1]`.
    #[must_use]
    pub fn progress(&self, now: Instant) -> f32 {
        if self.duration.is_zero() {
            return 1.0;
        }
        let elapsed = now.saturating_duration_since(self.started);
        (elapsed.as_secs_f32() / self.duration.as_secs_f32()).clamp(0.0, 1.0)
    }

    /// Indicator x offset at `now`.
    #[must_use]
    pub fn position(&self, now: Instant) -> f32 {
        self.from + (self.to - self.from) * spring(self.progress(now))
    }

    #[must_use]
    pub fn is_finished(&self, now: Instant) -> bool {
        self.progress(now) >= 1.0
    }

    /// Starts a new slide towards `to` from wherever this one is at `now`.
    ///
    /// The previous slide is dropped; slides never queue.
    #[must_use]
    pub fn retarget(&self, to: f32, now: Instant) -> Self {
        Self::new(self.position(now), to, now, self.duration)
    }
}
