//! Selection state machine for the switchable x axis.
//!
//! The transition function is pure: given the current state and an event it
//! returns the next state and the render commands to execute. Executing the
//! commands is the chart view's job.

use super::scale::{LinearScale, ScaleFactory};
use crate::data::{DataSet, XField};

/// Input the state machine reacts to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ChartEvent {
    /// A label was clicked; carries the label's field identifier as received.
    LabelClicked(String),
}

impl ChartEvent {
    /// Click on the label for `field`.
    pub fn click(field: XField) -> Self {
        Self::LabelClicked(field.id().to_string())
    }
}

/// Side effect requested by a transition. Each variant drives one channel.
#[derive(Debug, Clone, PartialEq)]
pub enum RenderCommand {
    /// Animate the x-axis ruler to `scale`.
    RenderAxis(LinearScale),
    /// Animate every mark's x position.
    RenderMarks {
        /// New x scale.
        scale: LinearScale,
        /// Field to read from each record.
        field: XField,
    },
    /// Replace the tooltip binding on every mark.
    RebindTooltips(XField),
    /// Highlight the label for this field and dim the rest.
    ActivateLabel(XField),
}

/// Active field and the scale derived from it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SelectionState {
    /// The field driving the x axis.
    pub active: XField,
    /// `compute_scale(dataset, active)`.
    pub scale: LinearScale,
}

/// Owns the dataset and the current selection.
#[derive(Debug, Clone)]
pub struct SelectionController {
    dataset: DataSet,
    factory: ScaleFactory,
    state: SelectionState,
}

impl SelectionController {
    /// Start in `initial`.
    pub fn new(dataset: DataSet, factory: ScaleFactory, initial: XField) -> Self {
        let state = SelectionState {
            active: initial,
            scale: factory.compute_scale(&dataset, initial),
        };
        Self {
            dataset,
            factory,
            state,
        }
    }

    /// The dataset being plotted.
    pub fn dataset(&self) -> &DataSet {
        &self.dataset
    }

    /// The scale factory.
    pub fn factory(&self) -> &ScaleFactory {
        &self.factory
    }

    /// Current state.
    pub fn state(&self) -> &SelectionState {
        &self.state
    }

    /// Active field.
    pub fn active(&self) -> XField {
        self.state.active
    }

    /// Next state and commands for `event`, without mutating anything.
    ///
    /// Clicking the active label, or a label whose identifier is not a known
    /// field, leaves the state unchanged and yields no commands.
    pub fn next(
        &self,
        state: &SelectionState,
        event: &ChartEvent,
    ) -> (SelectionState, Vec<RenderCommand>) {
        let ChartEvent::LabelClicked(id) = event;
        let field = match id.parse::<XField>() {
            Ok(field) => field,
            Err(err) => {
                tracing::debug!("Ignoring click: {}", err);
                return (*state, Vec::new());
            }
        };
        if field == state.active {
            tracing::debug!("Ignoring click on active label {}", field);
            return (*state, Vec::new());
        }

        let scale = self.factory.compute_scale(&self.dataset, field);
        let commands = vec![
            RenderCommand::RenderAxis(scale),
            RenderCommand::RenderMarks { scale, field },
            RenderCommand::RebindTooltips(field),
            RenderCommand::ActivateLabel(field),
        ];
        (SelectionState { active: field, scale }, commands)
    }

    /// Apply `event` to the current state and return the commands to run.
    pub fn handle(&mut self, event: &ChartEvent) -> Vec<RenderCommand> {
        let (state, commands) = self.next(&self.state, event);
        if !commands.is_empty() {
            tracing::info!(
                "X axis {} -> {}, domain [{}, {}]",
                self.state.active,
                state.active,
                state.scale.domain().0,
                state.scale.domain().1
            );
        }
        self.state = state;
        commands
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ChartConfig;
    use crate::data::fixtures::two_states;

    fn controller() -> SelectionController {
        SelectionController::new(
            two_states(),
            ScaleFactory::new(&ChartConfig::default()),
            XField::Poverty,
        )
    }

    #[test]
    fn test_initial_state() {
        let c = controller();
        assert_eq!(c.active(), XField::Poverty);
        let (lo, hi) = c.state().scale.domain();
        assert!((lo - 8.0).abs() < 1e-9 && (hi - 24.0).abs() < 1e-9);
    }

    #[test]
    fn test_transition_emits_all_channels_in_order() {
        let mut c = controller();
        let commands = c.handle(&ChartEvent::click(XField::Age));
        let scale = c.state().scale;

        assert_eq!(c.active(), XField::Age);
        assert_eq!(
            commands,
            vec![
                RenderCommand::RenderAxis(scale),
                RenderCommand::RenderMarks {
                    scale,
                    field: XField::Age
                },
                RenderCommand::RebindTooltips(XField::Age),
                RenderCommand::ActivateLabel(XField::Age),
            ]
        );
        let (lo, hi) = scale.domain();
        assert!((lo - 24.0).abs() < 1e-9 && (hi - 48.0).abs() < 1e-9);
    }

    #[test]
    fn test_click_on_active_label_is_noop() {
        let mut c = controller();
        let before = *c.state();
        assert!(c.handle(&ChartEvent::click(XField::Poverty)).is_empty());
        assert_eq!(*c.state(), before);
    }

    #[test]
    fn test_unknown_field_is_noop() {
        let mut c = controller();
        let before = *c.state();
        let commands = c.handle(&ChartEvent::LabelClicked("obesity".to_string()));
        assert!(commands.is_empty());
        assert_eq!(*c.state(), before);
    }

    #[test]
    fn test_next_is_pure() {
        let c = controller();
        let state = *c.state();
        let (next, _) = c.next(&state, &ChartEvent::click(XField::Income));
        assert_eq!(next.active, XField::Income);
        assert_eq!(c.active(), XField::Poverty);
    }

    #[test]
    fn test_round_trip_restores_scale() {
        let mut c = controller();
        let initial = c.state().scale;
        c.handle(&ChartEvent::click(XField::Age));
        c.handle(&ChartEvent::click(XField::Poverty));
        assert_eq!(c.state().scale, initial);
    }
}
