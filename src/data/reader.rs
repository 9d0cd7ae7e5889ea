//! CSV data reader.

use super::{DataSet, Record, Y_FIELD};
use crate::error::{Result, ScatterError};
use serde::Deserialize;
use std::fs::File;
use std::io::Read;
use std::path::Path;

/// Columns every input file must carry.
const REQUIRED_COLUMNS: [&str; 5] = ["state", "poverty", "age", "income", Y_FIELD];

/// One CSV row before numeric coercion.
#[derive(Debug, Deserialize)]
struct RawRow {
    state: String,
    #[serde(default)]
    abbr: String,
    poverty: String,
    age: String,
    income: String,
    healthcare: String,
    #[serde(default)]
    obesity: String,
    #[serde(default)]
    smokes: String,
}

/// Tabular data reader.
#[derive(Debug)]
pub struct DataReader;

impl DataReader {
    /// Read a CSV file into a dataset.
    pub fn read_file(path: &Path) -> Result<DataSet> {
        let file = File::open(path).map_err(|e| ScatterError::file_open(path.to_path_buf(), e))?;
        let dataset = Self::from_reader(file)?.with_source(path.to_path_buf());
        tracing::info!("Loaded {} records from {}", dataset.len(), path.display());
        Ok(dataset)
    }

    /// Read CSV text from any reader.
    pub fn from_reader<R: Read>(reader: R) -> Result<DataSet> {
        let mut rdr = csv::ReaderBuilder::new()
            .trim(csv::Trim::Headers)
            .from_reader(reader);

        let headers = rdr.headers()?.clone();
        if headers.is_empty() {
            return Err(ScatterError::EmptyDataset);
        }
        for column in REQUIRED_COLUMNS {
            if !headers.iter().any(|h| h == column) {
                return Err(ScatterError::missing_column(column));
            }
        }

        let mut records = Vec::new();
        for (i, row) in rdr.deserialize::<RawRow>().enumerate() {
            records.push(Self::coerce(i + 1, row?)?);
        }

        DataSet::new(records)
    }

    fn coerce(row: usize, raw: RawRow) -> Result<Record> {
        Ok(Record {
            poverty: required(row, "poverty", &raw.poverty)?,
            age: required(row, "age", &raw.age)?,
            income: required(row, "income", &raw.income)?,
            healthcare: required(row, Y_FIELD, &raw.healthcare)?,
            obesity: optional(row, "obesity", &raw.obesity),
            smokes: optional(row, "smokes", &raw.smokes),
            state: raw.state.trim().to_string(),
            abbr: raw.abbr.trim().to_string(),
        })
    }
}

fn required(row: usize, column: &str, text: &str) -> Result<f64> {
    text.trim()
        .parse::<f64>()
        .ok()
        .filter(|v| v.is_finite())
        .ok_or_else(|| ScatterError::non_numeric(row, column, text))
}

// Blank optional cells read as zero; anything else unparsable becomes NaN.
fn optional(row: usize, column: &str, text: &str) -> f64 {
    let text = text.trim();
    if text.is_empty() {
        return 0.0;
    }
    text.parse().unwrap_or_else(|_| {
        tracing::warn!("Row {}: ignoring non-numeric {} value {:?}", row, column, text);
        f64::NAN
    })
}
