//! Plot fields: the switchable x-axis candidates and the fixed y field.

use std::fmt;
use std::str::FromStr;

use crate::error::ScatterError;

/// A candidate field for the horizontal axis.
///
/// Declaration order matters: the first variant is the default selection and
/// the order of the clickable labels below the axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum XField {
    /// Share of the population in poverty (%).
    #[default]
    Poverty,
    /// Median age.
    Age,
    /// Median household income.
    Income,
}

impl XField {
    /// All candidate fields in label order.
    pub const ALL: [XField; 3] = [XField::Poverty, XField::Age, XField::Income];

    /// Column / event identifier.
    pub fn id(self) -> &'static str {
        match self {
            XField::Poverty => "poverty",
            XField::Age => "age",
            XField::Income => "income",
        }
    }

    /// Axis label text shown below the x axis.
    pub fn axis_title(self) -> &'static str {
        match self {
            XField::Poverty => "In Poverty (%)",
            XField::Age => "Age (Median)",
            XField::Income => "Household Income (Median)",
        }
    }

    /// Position in label order.
    pub fn index(self) -> usize {
        match self {
            XField::Poverty => 0,
            XField::Age => 1,
            XField::Income => 2,
        }
    }

    /// Field at a label position, if any.
    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }

    /// The next field in label order, wrapping around.
    pub fn next(self) -> Self {
        Self::ALL[(self.index() + 1) % Self::ALL.len()]
    }
}

impl fmt::Display for XField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

impl FromStr for XField {
    type Err = ScatterError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|field| field.id() == s)
            .ok_or_else(|| ScatterError::unknown_field(s))
    }
}

/// Column holding the fixed vertical-axis value.
pub const Y_FIELD: &str = "healthcare";

/// Title of the fixed vertical axis.
pub const Y_TITLE: &str = "Lacks Healthcare (%)";
