//! Scatter marks, one per record.

use super::scale::LinearScale;
use super::tooltip::TooltipBinding;
use super::transition::Transition;
use crate::config::MarkConfig;
use crate::data::{DataSet, Record, XField};
use std::time::{Duration, Instant};

/// A plotted point bound to one record.
#[derive(Debug, Clone)]
pub struct Mark {
    datum: Record,
    cx: Transition<f64>,
    cy: f64,
    tooltip: Option<TooltipBinding>,
}

impl Mark {
    /// The bound record.
    pub fn datum(&self) -> &Record {
        &self.datum
    }

    /// Horizontal position at `now`.
    pub fn cx_at(&self, now: Instant) -> f64 {
        self.cx.value_at(now)
    }

    /// Horizontal position once the current transition settles.
    pub fn target_cx(&self) -> f64 {
        self.cx.target()
    }

    /// Vertical position; fixed at creation.
    pub fn cy(&self) -> f64 {
        self.cy
    }

    /// The attached hover binding, if any.
    pub fn tooltip(&self) -> Option<&TooltipBinding> {
        self.tooltip.as_ref()
    }

    pub(crate) fn detach_tooltip(&mut self) {
        self.tooltip = None;
    }

    pub(crate) fn attach_tooltip(&mut self, binding: TooltipBinding) {
        self.tooltip = Some(binding);
    }
}

/// All marks of the chart plus their shared style.
#[derive(Debug, Clone)]
pub struct MarkSet {
    marks: Vec<Mark>,
    /// Circle radius in pixels.
    pub radius: f64,
    /// Fill colour.
    pub fill: (u8, u8, u8),
    /// Fill opacity.
    pub opacity: f64,
}

impl MarkSet {
    /// Create one mark per record, placed at `(x(record[field]), y(record.healthcare))`.
    pub fn create(
        dataset: &DataSet,
        x: &LinearScale,
        y: &LinearScale,
        field: XField,
        style: &MarkConfig,
        now: Instant,
    ) -> Self {
        let marks = dataset
            .records()
            .iter()
            .map(|record| Mark {
                cx: Transition::settled(x.apply(record.value(field)), now),
                cy: y.apply(record.healthcare),
                datum: record.clone(),
                tooltip: None,
            })
            .collect();
        Self {
            marks,
            radius: style.radius,
            fill: style.fill,
            opacity: style.opacity,
        }
    }

    /// Number of marks.
    pub fn len(&self) -> usize {
        self.marks.len()
    }

    /// Whether there are no marks.
    pub fn is_empty(&self) -> bool {
        self.marks.is_empty()
    }

    /// Mark at `index`.
    pub fn get(&self, index: usize) -> Option<&Mark> {
        self.marks.get(index)
    }

    /// Iterate marks in draw order.
    pub fn iter(&self) -> std::slice::Iter<'_, Mark> {
        self.marks.iter()
    }

    pub(crate) fn iter_mut(&mut self) -> std::slice::IterMut<'_, Mark> {
        self.marks.iter_mut()
    }

    /// Whether any mark is still moving.
    pub fn is_animating(&self, now: Instant) -> bool {
        self.marks.iter().any(|m| m.cx.is_running(now))
    }

    /// Topmost mark whose centre lies within the ellipse of radii `reach`
    /// around `point`.
    ///
    /// Later marks draw over earlier ones, so the search runs backwards.
    pub fn hit_area(&self, point: (f64, f64), reach: (f64, f64), now: Instant) -> Option<usize> {
        if reach.0 <= 0.0 || reach.1 <= 0.0 {
            return None;
        }
        self.marks.iter().rposition(|m| {
            let dx = (m.cx_at(now) - point.0) / reach.0;
            let dy = (m.cy - point.1) / reach.1;
            dx * dx + dy * dy <= 1.0
        })
    }
}

/// Re-targets mark positions.
#[derive(Debug, Clone, Copy)]
pub struct MarkRenderer {
    duration: Duration,
}

impl MarkRenderer {
    /// Create a renderer animating over `duration`.
    pub fn new(duration: Duration) -> Self {
        Self { duration }
    }

    /// Move every mark toward `scale(record[field])`. Vertical positions are untouched.
    pub fn render_marks<'a>(
        &self,
        marks: &'a mut MarkSet,
        scale: &LinearScale,
        field: XField,
        now: Instant,
    ) -> &'a mut MarkSet {
        for mark in marks.iter_mut() {
            let target = scale.apply(mark.datum.value(field));
            mark.cx.retarget(target, now, self.duration);
        }
        marks
    }
}
