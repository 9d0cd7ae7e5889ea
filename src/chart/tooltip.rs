//! Hover tooltips bound to marks.

use super::marks::MarkSet;
use crate::data::{Record, XField};

/// Separator between the tooltip heading and the value line.
pub const LINE_BREAK: &str = "<br>";

/// Label text for each candidate field.
pub fn label_for(field: XField) -> &'static str {
    match field {
        XField::Poverty => "Poverty:",
        XField::Age => "Age:",
        XField::Income => "Income:",
    }
}

/// Hover behaviour attached to one mark.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TooltipBinding {
    /// Field whose value the tooltip shows.
    pub field: XField,
    /// Rebind counter at attach time; identifies stale bindings.
    pub generation: u64,
}

impl TooltipBinding {
    /// Tooltip markup for `record`: `"{name}<br>{label} {value}"`.
    pub fn html(&self, record: &Record) -> String {
        format!(
            "{}{}{} {}",
            record.display_label(),
            LINE_BREAK,
            label_for(self.field),
            record.value(self.field)
        )
    }
}

/// A visible tooltip.
#[derive(Debug, Clone, PartialEq)]
pub struct Tooltip {
    /// Index of the hovered mark.
    pub mark: usize,
    /// Markup, lines separated by [`LINE_BREAK`].
    pub html: String,
    /// Top-left corner in plot pixels.
    pub anchor: (f64, f64),
}

impl Tooltip {
    /// Text lines of the tooltip.
    pub fn lines(&self) -> impl Iterator<Item = &str> {
        self.html.split(LINE_BREAK)
    }
}

/// Attaches tooltips to marks and resolves hovers.
#[derive(Debug, Clone)]
pub struct TooltipController {
    generation: u64,
    offset: (f64, f64),
}

impl TooltipController {
    /// Create a controller placing tooltips at `offset` `(down, right)` from the cursor.
    pub fn new(offset: (f64, f64)) -> Self {
        Self {
            generation: 0,
            offset,
        }
    }

    /// Number of rebinds so far.
    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Detach every mark's binding, then attach one for `field`.
    pub fn rebind<'a>(&mut self, field: XField, marks: &'a mut MarkSet) -> &'a mut MarkSet {
        self.generation += 1;
        let binding = TooltipBinding {
            field,
            generation: self.generation,
        };
        for mark in marks.iter_mut() {
            mark.detach_tooltip();
            mark.attach_tooltip(binding);
        }
        marks
    }

    /// Hover-show: tooltip for mark `index` with the cursor at `cursor`.
    ///
    /// `None` if the mark does not exist or carries no binding.
    pub fn show(&self, marks: &MarkSet, index: usize, cursor: (f64, f64)) -> Option<Tooltip> {
        let mark = marks.get(index)?;
        let binding = mark.tooltip()?;
        Some(Tooltip {
            mark: index,
            html: binding.html(mark.datum()),
            anchor: (cursor.0 + self.offset.1, cursor.1 + self.offset.0),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::chart::marks::MarkSet;
    use crate::chart::scale::ScaleFactory;
    use crate::config::ChartConfig;
    use crate::data::fixtures::two_states;
    use std::time::Instant;

    fn marks() -> MarkSet {
        let ds = two_states();
        let config = ChartConfig::default();
        let factory = ScaleFactory::new(&config);
        MarkSet::create(
            &ds,
            &factory.compute_scale(&ds, XField::Poverty),
            &factory.vertical_scale(&ds),
            XField::Poverty,
            &config.marks,
            Instant::now(),
        )
    }

    #[test]
    fn test_label_per_field() {
        assert_eq!(label_for(XField::Poverty), "Poverty:");
        assert_eq!(label_for(XField::Age), "Age:");
        assert_eq!(label_for(XField::Income), "Income:");
    }

    #[test]
    fn test_unbound_marks_show_nothing() {
        let marks = marks();
        let controller = TooltipController::new((50.0, -50.0));
        assert_eq!(controller.show(&marks, 0, (0.0, 0.0)), None);
    }

    #[test]
    fn test_tooltip_text_and_offset() {
        let mut marks = marks();
        let mut controller = TooltipController::new((50.0, -50.0));
        controller.rebind(XField::Poverty, &mut marks);

        let tip = controller.show(&marks, 0, (100.0, 200.0)).unwrap();
        assert_eq!(tip.html, "A<br>Poverty: 10");
        assert_eq!(tip.lines().collect::<Vec<_>>(), vec!["A", "Poverty: 10"]);
        assert_eq!(tip.anchor, (50.0, 250.0));
    }

    #[test]
    fn test_rebind_replaces_binding() {
        let mut marks = marks();
        let mut controller = TooltipController::new((0.0, 0.0));
        controller.rebind(XField::Poverty, &mut marks);
        controller.rebind(XField::Age, &mut marks);

        for mark in marks.iter() {
            let binding = mark.tooltip().unwrap();
            assert_eq!(binding.field, XField::Age);
            assert_eq!(binding.generation, controller.generation());
        }
        let tip = controller.show(&marks, 1, (0.0, 0.0)).unwrap();
        assert_eq!(tip.html, "B<br>Age: 40");
    }

    #[test]
    fn test_show_out_of_range() {
        let mut marks = marks();
        let mut controller = TooltipController::new((0.0, 0.0));
        controller.rebind(XField::Income, &mut marks);
        assert_eq!(controller.show(&marks, 9, (0.0, 0.0)), None);
    }
}
