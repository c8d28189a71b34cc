//! Animated values
//!
//! An [`Animated`] remembers where it started, where it is heading and when
//! the current tween began. Sampling is a pure function of the sample time,
//! so the same instant always yields the same value.

use super::easing::Easing;
use super::DEFAULT_DURATION_MS;
use std::time::{Duration, Instant};

/// Linear blend between two values of the same type
pub trait Lerp: Copy + PartialEq {
    /// Blend from `self` toward `to`; `t = 0` is `self`, `t = 1` is `to`
    fn lerp(self, to: Self, t: f32) -> Self;
}

impl Lerp for f32 {
    fn lerp(self, to: Self, t: f32) -> Self {
        self + (to - self) * t
    }
}

/// How long a tween runs and along which curve
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Tween {
    pub duration: Duration,
    pub easing: Easing,
}

impl Default for Tween {
    fn default() -> Self {
        Self {
            duration: Duration::from_millis(DEFAULT_DURATION_MS),
            easing: Easing::default(),
        }
    }
}

impl Tween {
    pub fn new(duration: Duration, easing: Easing) -> Self {
        Self { duration, easing }
    }
}

/// Value of a tween from `from` to `to` after `elapsed`.
///
/// Returns exactly `to` once `elapsed >= duration`, and for a zero duration.
pub fn interpolate<T: Lerp>(
    from: T,
    to: T,
    elapsed: Duration,
    duration: Duration,
    easing: Easing,
) -> T {
    if duration.is_zero() || elapsed >= duration {
        return to;
    }
    let progress = elapsed.as_secs_f32() / duration.as_secs_f32();
    from.lerp(to, easing.apply(progress))
}

/// A value that eases toward its most recent target
#[derive(Debug, Clone)]
pub struct Animated<T: Lerp> {
    from: T,
    target: T,
    started_at: Instant,
    tween: Tween,
}

impl<T: Lerp> Animated<T> {
    /// Create a value at rest
    pub fn new(initial: T, tween: Tween, now: Instant) -> Self {
        Self {
            from: initial,
            target: initial,
            started_at: now,
            tween,
        }
    }

    /// The value the animation is heading to (its rest value)
    pub fn target(&self) -> T {
        self.target
    }

    /// Displayed value at `now`
    pub fn value_at(&self, now: Instant) -> T {
        interpolate(
            self.from,
            self.target,
            now.saturating_duration_since(self.started_at),
            self.tween.duration,
            self.tween.easing,
        )
    }

    /// Retarget. The new tween starts from whatever is displayed at `now`,
    /// so an interrupted animation turns around without a jump.
    /// Setting the current target again is a no-op.
    pub fn animate_to(&mut self, target: T, now: Instant) {
        if target == self.target {
            return;
        }
        self.from = self.value_at(now);
        self.target = target;
        self.started_at = now;
    }

    /// Whether the displayed value is still moving at `now`
    pub fn is_running(&self, now: Instant) -> bool {
        self.from != self.target
            && now.saturating_duration_since(self.started_at) < self.tween.duration
    }
}
