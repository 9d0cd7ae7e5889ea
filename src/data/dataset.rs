//! Parsed records and the dataset that holds them.

use super::XField;
use crate::error::{Result, ScatterError};
use std::path::{Path, PathBuf};

/// One row of the input table, with every numeric column coerced.
#[derive(Debug, Clone, PartialEq)]
pub struct Record {
    /// Entity name, shown in tooltips.
    pub state: String,
    /// Short label.
    pub abbr: String,
    /// Poverty rate (%).
    pub poverty: f64,
    /// Median age.
    pub age: f64,
    /// Median household income.
    pub income: f64,
    /// Share lacking health coverage (%), the fixed vertical field.
    pub healthcare: f64,
    /// Obesity rate (%). Optional column, unused by the switchable axis.
    pub obesity: f64,
    /// Smoking rate (%). Optional column, unused by the switchable axis.
    pub smokes: f64,
}

impl Record {
    /// Value of a candidate x field.
    pub fn value(&self, field: XField) -> f64 {
        match field {
            XField::Poverty => self.poverty,
            XField::Age => self.age,
            XField::Income => self.income,
        }
    }

    /// Label used as the tooltip heading.
    pub fn display_label(&self) -> &str {
        &self.state
    }
}

/// A non-empty, numerically coerced collection of records.
#[derive(Debug, Clone)]
pub struct DataSet {
    source: Option<PathBuf>,
    records: Vec<Record>,
}

impl DataSet {
    /// Build a dataset. Fails if there are no records.
    pub fn new(records: Vec<Record>) -> Result<Self> {
        if records.is_empty() {
            return Err(ScatterError::EmptyDataset);
        }
        Ok(Self {
            source: None,
            records,
        })
    }

    /// Attach the file the records came from.
    pub fn with_source(mut self, path: PathBuf) -> Self {
        self.source = Some(path);
        self
    }

    /// The file the records came from, if loaded from disk.
    pub fn source(&self) -> Option<&Path> {
        self.source.as_deref()
    }

    /// All records, in file order. Mark `i` is bound to record `i`.
    pub fn records(&self) -> &[Record] {
        &self.records
    }

    /// Number of records.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Always false; kept for the `len` pairing.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Record at `index`.
    pub fn get(&self, index: usize) -> Option<&Record> {
        self.records.get(index)
    }

    /// Minimum and maximum of a candidate field.
    pub fn extent(&self, field: XField) -> (f64, f64) {
        self.fold_extent(|r| r.value(field))
    }

    /// Maximum of the fixed vertical field.
    pub fn max_healthcare(&self) -> f64 {
        self.fold_extent(|r| r.healthcare).1
    }

    fn fold_extent(&self, value: impl Fn(&Record) -> f64) -> (f64, f64) {
        self.records
            .iter()
            .map(value)
            .fold((f64::INFINITY, f64::NEG_INFINITY), |(min, max), v| {
                (min.min(v), max.max(v))
            })
    }
}

#[cfg(test)]
pub(crate) mod fixtures {
    use super::*;

    pub(crate) fn record(
        state: &str,
        poverty: f64,
        age: f64,
        income: f64,
        healthcare: f64,
    ) -> Record {
        Record {
            state: state.to_string(),
            abbr: state.chars().take(2).collect(),
            poverty,
            age,
            income,
            healthcare,
            obesity: 0.0,
            smokes: 0.0,
        }
    }

    /// Two records, A and B, shared by the unit tests.
    pub(crate) fn two_states() -> DataSet {
        DataSet::new(vec![
            record("A", 10.0, 30.0, 50000.0, 5.0),
            record("B", 20.0, 40.0, 70000.0, 15.0),
        ])
        .unwrap()
    }
}
