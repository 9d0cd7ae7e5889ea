//! Data reading and representation.
//!
//! This module handles reading the tabular input and representing it as a
//! non-empty set of numerically coerced records.

mod dataset;
mod field;
mod reader;

pub use dataset::{DataSet, Record};
pub use field::{XField, Y_FIELD, Y_TITLE};
pub use reader::DataReader;

#[cfg(test)]
pub(crate) use dataset::fixtures;
