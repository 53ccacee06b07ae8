//! CSV import: a header row of `name (unit)` cells followed by readings.

use std::io::Read;

use serde_json::Value;

use crate::data::dataset::{check_unique_names, DataPoint, MeasurementDataset, Variable};
use crate::error::{Result, ViewerError};

/// Parse a header cell such as `temp (C)` into a [`Variable`].
///
/// Parentheses are dropped and the rest must split on a single space into
/// exactly a name and a unit.
pub fn parse_variable_field(field: &str) -> Result<Variable> {
    let cleaned: String = field
        .trim()
        .chars()
        .filter(|c| *c != '(' && *c != ')')
        .collect();
    let mut parts = cleaned.split(' ');
    match (parts.next(), parts.next(), parts.next()) {
        (Some(name), Some(unit), None) if !name.is_empty() && !unit.is_empty() => {
            Ok(Variable::new(name, unit))
        }
        _ => Err(ViewerError::CsvField(field.to_string())),
    }
}

fn cell_value(cell: &str) -> Value {
    match cell.trim().parse::<f64>() {
        Ok(v) => serde_json::Number::from_f64(v)
            .map(Value::Number)
            .unwrap_or_else(|| Value::String(cell.to_string())),
        Err(_) => Value::String(cell.to_string()),
    }
}

impl MeasurementDataset {
    /// Read a dataset from CSV.
    ///
    /// Cells that parse as numbers are stored as numbers, everything else is
    /// kept verbatim. Short rows simply lack the trailing variables. Two
    /// header cells naming the same variable are rejected.
    pub fn from_csv_reader<R: Read>(name: impl Into<String>, reader: R) -> Result<Self> {
        let mut rdr = csv::ReaderBuilder::new()
            .has_headers(true)
            .flexible(true)
            .from_reader(reader);

        let variables = rdr
            .headers()?
            .iter()
            .map(parse_variable_field)
            .collect::<Result<Vec<_>>>()?;
        check_unique_names(&variables)?;

        let mut data_points = Vec::new();
        for record in rdr.records() {
            let record = record?;
            let point: DataPoint = variables
                .iter()
                .zip(record.iter())
                .map(|(var, cell)| (var.name.clone(), cell_value(cell)))
                .collect();
            data_points.push(point);
        }

        Ok(Self {
            name: Some(name.into()),
            variables,
            data_points,
        })
    }
}
