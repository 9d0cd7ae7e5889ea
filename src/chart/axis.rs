//! Axis rulers.

use super::scale::LinearScale;
use super::transition::Transition;
use crate::ui::formatters::format_axis_label;
use std::time::{Duration, Instant};

/// A tick on a ruler.
#[derive(Debug, Clone, PartialEq)]
pub struct Tick {
    /// Domain value.
    pub value: f64,
    /// Pixel position along the axis.
    pub position: f64,
    /// Formatted label.
    pub label: String,
}

/// A drawn axis whose domain can be animated.
#[derive(Debug, Clone)]
pub struct AxisHandle {
    domain: Transition<(f64, f64)>,
    range: (f64, f64),
    tick_count: usize,
}

impl AxisHandle {
    /// Create a ruler already showing `scale`.
    pub fn new(scale: &LinearScale, tick_count: usize, now: Instant) -> Self {
        Self {
            domain: Transition::settled(scale.domain(), now),
            range: scale.range(),
            tick_count,
        }
    }

    /// The scale the ruler shows at `now`, mid-animation included.
    pub fn scale_at(&self, now: Instant) -> LinearScale {
        LinearScale::new(self.domain.value_at(now), self.range)
    }

    /// The scale the ruler is heading for.
    pub fn target_scale(&self) -> LinearScale {
        LinearScale::new(self.domain.target(), self.range)
    }

    /// Whether the ruler is still moving.
    pub fn is_animating(&self, now: Instant) -> bool {
        self.domain.is_running(now)
    }

    /// Ticks as they appear at `now`.
    pub fn ticks_at(&self, now: Instant) -> Vec<Tick> {
        let scale = self.scale_at(now);
        scale
            .ticks(self.tick_count)
            .into_iter()
            .map(|value| Tick {
                value,
                position: scale.apply(value),
                label: format_axis_label(value),
            })
            .collect()
    }
}

/// Re-targets axis rulers.
#[derive(Debug, Clone, Copy)]
pub struct AxisRenderer {
    duration: Duration,
}

impl AxisRenderer {
    /// Create a renderer animating over `duration`.
    pub fn new(duration: Duration) -> Self {
        Self { duration }
    }

    /// Point `axis` at `scale`, animating from whatever it shows at `now`.
    pub fn render_axis<'a>(
        &self,
        axis: &'a mut AxisHandle,
        scale: &LinearScale,
        now: Instant,
    ) -> &'a mut AxisHandle {
        axis.range = scale.range();
        axis.domain.retarget(scale.domain(), now, self.duration);
        axis
    }
}
