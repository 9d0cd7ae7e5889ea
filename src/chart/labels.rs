//! Clickable x-axis labels.

use crate::data::XField;

/// Vertical spacing between stacked labels.
const LABEL_SPACING: f64 = 15.0;
/// Offset of the first label below the label group origin.
const FIRST_LABEL_Y: f64 = 20.0;

/// One clickable label.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Label {
    /// Field the label selects.
    pub field: XField,
    /// Displayed text.
    pub text: &'static str,
    /// Styling flag.
    pub active: bool,
}

impl Label {
    /// Offset below the label group origin, in pixels.
    pub fn offset_y(&self) -> f64 {
        FIRST_LABEL_Y + LABEL_SPACING * self.field.index() as f64
    }
}

/// The label group; exactly one label is active at a time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LabelSet {
    labels: Vec<Label>,
}

impl LabelSet {
    /// One label per candidate field with `active` highlighted.
    pub fn new(active: XField) -> Self {
        let labels = XField::ALL
            .into_iter()
            .map(|field| Label {
                field,
                text: field.axis_title(),
                active: field == active,
            })
            .collect();
        Self { labels }
    }

    /// Highlight `field`, dim the rest.
    pub fn activate(&mut self, field: XField) {
        for label in &mut self.labels {
            label.active = label.field == field;
        }
    }

    /// The highlighted field.
    pub fn active(&self) -> Option<XField> {
        self.labels.iter().find(|l| l.active).map(|l| l.field)
    }

    /// Labels in display order.
    pub fn iter(&self) -> std::slice::Iter<'_, Label> {
        self.labels.iter()
    }
}
