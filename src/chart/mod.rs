//! Interactive scatter chart.
//!
//! [`Chart`] is the session object: it owns the [`SelectionController`] and
//! the [`ChartView`], feeds events to the former and executes the resulting
//! [`RenderCommand`]s on the latter. Every method that can change what is on
//! screen takes the current `Instant`, so animations are driven entirely by
//! the caller's clock.

pub mod axis;
pub mod labels;
pub mod marks;
pub mod scale;
pub mod selection;
pub mod tooltip;
pub mod transition;

use std::time::Instant;

use crate::config::ChartConfig;
use crate::data::{DataSet, XField};
use crate::error::Result;
use axis::{AxisHandle, AxisRenderer};
use labels::LabelSet;
use marks::{MarkRenderer, MarkSet};
use scale::{LinearScale, ScaleFactory};
pub use selection::{ChartEvent, RenderCommand, SelectionController, SelectionState};
use tooltip::{Tooltip, TooltipController};

/// Everything drawn on screen, one field per render channel.
#[derive(Debug, Clone)]
pub struct ChartView {
    /// Switchable horizontal ruler.
    pub x_axis: AxisHandle,
    /// Fixed vertical ruler.
    pub y_axis: AxisHandle,
    /// Fixed vertical scale.
    pub y_scale: LinearScale,
    /// The marks.
    pub marks: MarkSet,
    /// Clickable labels.
    pub labels: LabelSet,
    /// Tooltip binder.
    pub tooltips: TooltipController,
    /// Tooltip currently shown, if any.
    pub tooltip: Option<Tooltip>,
    /// Hover tolerance around the cursor as `(x, y)` radii in pixels.
    pub hover_reach: (f64, f64),
    hover: Option<(usize, (f64, f64))>,
    axis_renderer: AxisRenderer,
    mark_renderer: MarkRenderer,
}

impl ChartView {
    fn new(controller: &SelectionController, config: &ChartConfig, now: Instant) -> Self {
        let dataset = controller.dataset();
        let state = controller.state();
        let y_scale = controller.factory().vertical_scale(dataset);
        let tick_count = config.scale.tick_count;

        let mut view = Self {
            x_axis: AxisHandle::new(&state.scale, tick_count, now),
            y_axis: AxisHandle::new(&y_scale, tick_count, now),
            y_scale,
            marks: MarkSet::create(
                dataset,
                &state.scale,
                &y_scale,
                state.active,
                &config.marks,
                now,
            ),
            labels: LabelSet::new(state.active),
            tooltips: TooltipController::new(config.tooltip_offset),
            tooltip: None,
            hover_reach: (config.marks.radius, config.marks.radius),
            hover: None,
            axis_renderer: AxisRenderer::new(config.transition),
            mark_renderer: MarkRenderer::new(config.transition),
        };
        view.tooltips.rebind(state.active, &mut view.marks);
        view
    }

    /// Execute render commands.
    pub fn apply(&mut self, commands: &[RenderCommand], now: Instant) {
        for command in commands {
            match command {
                RenderCommand::RenderAxis(scale) => {
                    self.axis_renderer.render_axis(&mut self.x_axis, scale, now);
                }
                RenderCommand::RenderMarks { scale, field } => {
                    self.mark_renderer
                        .render_marks(&mut self.marks, scale, *field, now);
                }
                RenderCommand::RebindTooltips(field) => {
                    self.tooltips.rebind(*field, &mut self.marks);
                    // A visible tooltip must show the new field straight away.
                    if let Some((index, cursor)) = self.hover {
                        self.tooltip = self.tooltips.show(&self.marks, index, cursor);
                    }
                }
                RenderCommand::ActivateLabel(field) => self.labels.activate(*field),
            }
        }
    }

    /// Whether the axis or any mark is still moving.
    pub fn is_animating(&self, now: Instant) -> bool {
        self.x_axis.is_animating(now) || self.marks.is_animating(now)
    }

    /// Update hover state for a cursor at `point` (plot pixels), or `None` when
    /// the cursor left the plot.
    pub fn hover(&mut self, point: Option<(f64, f64)>, now: Instant) {
        let hit = point.and_then(|p| {
            self.marks
                .hit_area(p, self.hover_reach, now)
                .map(|index| (index, p))
        });
        match (self.hover, hit) {
            // Same mark: the tooltip stays where it first appeared.
            (Some((old, _)), Some((new, _))) if old == new => {}
            (_, Some((index, cursor))) => {
                self.tooltip = self.tooltips.show(&self.marks, index, cursor);
                tracing::debug!("Tooltip shown for mark {}", index);
            }
            (Some((index, _)), None) => {
                self.tooltip = None;
                tracing::debug!("Tooltip hidden for mark {}", index);
            }
            (None, None) => {}
        }
        self.hover = hit;
    }
}

/// A running chart session.
#[derive(Debug, Clone)]
pub struct Chart {
    controller: SelectionController,
    view: ChartView,
    config: ChartConfig,
}

impl Chart {
    /// Build the chart with `initial` driving the x axis.
    ///
    /// Fails on invalid configuration; nothing is rendered in that case.
    pub fn new(
        dataset: DataSet,
        config: ChartConfig,
        initial: XField,
        now: Instant,
    ) -> Result<Self> {
        config.validate()?;
        let controller = SelectionController::new(dataset, ScaleFactory::new(&config), initial);
        let view = ChartView::new(&controller, &config, now);
        Ok(Self {
            controller,
            view,
            config,
        })
    }

    /// Feed an event through the state machine and run its commands.
    ///
    /// Returns whether anything changed.
    pub fn dispatch(&mut self, event: &ChartEvent, now: Instant) -> bool {
        let commands = self.controller.handle(event);
        self.view.apply(&commands, now);
        !commands.is_empty()
    }

    /// Convenience for clicking the label of `field`.
    pub fn select(&mut self, field: XField, now: Instant) -> bool {
        self.dispatch(&ChartEvent::click(field), now)
    }

    /// Active field.
    pub fn active(&self) -> XField {
        self.controller.active()
    }

    /// Current x scale.
    pub fn scale(&self) -> LinearScale {
        self.controller.state().scale
    }

    /// Selection controller.
    pub fn controller(&self) -> &SelectionController {
        &self.controller
    }

    /// Rendered state.
    pub fn view(&self) -> &ChartView {
        &self.view
    }

    /// Chart configuration.
    pub fn config(&self) -> &ChartConfig {
        &self.config
    }

    /// Widen (never narrow below the mark radius) the hover tolerance.
    pub fn set_hover_reach(&mut self, reach: (f64, f64)) {
        let r = self.config.marks.radius;
        self.view.hover_reach = (reach.0.max(r), reach.1.max(r));
    }

    /// Forward a cursor position (plot pixels) to the hover channel.
    pub fn hover(&mut self, point: Option<(f64, f64)>, now: Instant) {
        self.view.hover(point, now);
    }

    /// Whether a transition is still in flight.
    pub fn is_animating(&self, now: Instant) -> bool {
        self.view.is_animating(now)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::fixtures::two_states;
    use std::time::Duration;

    const SECOND: Duration = Duration::from_secs(1);

    fn chart(now: Instant) -> Chart {
        Chart::new(two_states(), ChartConfig::default(), XField::Poverty, now).unwrap()
    }

    #[test]
    fn test_initial_view_is_bound() {
        let now = Instant::now();
        let chart = chart(now);
        assert_eq!(chart.view().labels.active(), Some(XField::Poverty));
        assert!(chart.view().marks.iter().all(|m| m.tooltip().is_some()));
        assert!(chart.view().tooltip.is_none());
        assert!(!chart.is_animating(now));
    }

    #[test]
    fn test_invalid_config_rejected() {
        let mut config = ChartConfig::default();
        config.canvas_height = 10.0;
        assert!(Chart::new(two_states(), config, XField::Poverty, Instant::now()).is_err());
    }

    #[test]
    fn test_hover_show_and_hide() {
        let now = Instant::now();
        let mut chart = chart(now);
        let a = chart.view().marks.get(0).unwrap();
        let center = (a.cx_at(now), a.cy());

        chart.hover(Some(center), now);
        let tip = chart.view().tooltip.clone().unwrap();
        assert_eq!(tip.mark, 0);
        assert_eq!(tip.html, "A<br>Poverty: 10");

        chart.hover(Some((-100.0, -100.0)), now);
        assert!(chart.view().tooltip.is_none());

        chart.hover(Some(center), now);
        chart.hover(None, now);
        assert!(chart.view().tooltip.is_none());
    }

    #[test]
    fn test_visible_tooltip_follows_rebind() {
        let now = Instant::now();
        let mut chart = chart(now);
        let a = chart.view().marks.get(0).unwrap();
        let center = (a.cx_at(now), a.cy());

        chart.hover(Some(center), now);
        chart.select(XField::Age, now);
        assert_eq!(chart.view().tooltip.as_ref().unwrap().html, "A<br>Age: 30");
    }

    #[test]
    fn test_click_during_transition_retargets() {
        let now = Instant::now();
        let mut chart = chart(now);
        chart.select(XField::Age, now);
        let midway = now + SECOND / 2;
        assert!(chart.is_animating(midway));

        chart.select(XField::Income, midway);
        let settled = midway + SECOND;
        let income = chart.scale();
        assert_eq!(chart.view().x_axis.scale_at(settled), income);
        for mark in chart.view().marks.iter() {
            assert_eq!(mark.cx_at(settled), income.apply(mark.datum().income));
        }
        assert_eq!(chart.view().labels.active(), Some(XField::Income));
    }
}
