//! Time-based interpolation of visual attributes.
//!
//! A [`Transition`] never runs on its own: the value is computed from the
//! clock whenever the frame is drawn. Re-targeting mid-flight starts the new
//! transition from the current interpolated value, so the latest target always
//! wins and nothing queues.

use std::time::{Duration, Instant};

/// Values that can be interpolated.
pub trait Interpolate: Copy {
    /// Value at fraction `t` between `self` (t = 0) and `other` (t = 1).
    fn lerp(self, other: Self, t: f64) -> Self;
}

impl Interpolate for f64 {
    fn lerp(self, other: Self, t: f64) -> Self {
        self + (other - self) * t
    }
}

impl Interpolate for (f64, f64) {
    fn lerp(self, other: Self, t: f64) -> Self {
        (self.0.lerp(other.0, t), self.1.lerp(other.1, t))
    }
}

/// Symmetric cubic easing; slow at both ends.
pub fn ease_cubic_in_out(t: f64) -> f64 {
    let t = t.clamp(0.0, 1.0);
    if t < 0.5 {
        4.0 * t * t * t
    } else {
        let u = -2.0 * t + 2.0;
        1.0 - u * u * u / 2.0
    }
}

/// An animated attribute.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Transition<T> {
    from: T,
    to: T,
    start: Instant,
    duration: Duration,
}

impl<T: Interpolate> Transition<T> {
    /// An attribute already at rest on `value`.
    pub fn settled(value: T, now: Instant) -> Self {
        Self {
            from: value,
            to: value,
            start: now,
            duration: Duration::ZERO,
        }
    }

    /// Value at `now`.
    pub fn value_at(&self, now: Instant) -> T {
        let t = self.progress(now);
        if t >= 1.0 {
            return self.to;
        }
        self.from.lerp(self.to, ease_cubic_in_out(t))
    }

    /// Linear progress in `[0, 1]`.
    pub fn progress(&self, now: Instant) -> f64 {
        if self.duration.is_zero() {
            return 1.0;
        }
        let elapsed = now.saturating_duration_since(self.start);
        (elapsed.as_secs_f64() / self.duration.as_secs_f64()).min(1.0)
    }

    /// Whether the value is still moving at `now`.
    pub fn is_running(&self, now: Instant) -> bool {
        self.progress(now) < 1.0
    }

    /// Final value.
    pub fn target(&self) -> T {
        self.to
    }

    /// Head for `to` starting from wherever the attribute is at `now`.
    pub fn retarget(&mut self, to: T, now: Instant, duration: Duration) {
        self.from = self.value_at(now);
        self.to = to;
        self.start = now;
        self.duration = duration;
    }
}
