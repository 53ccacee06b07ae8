//! Measurement datasets as served by the backend (`{variables, data_points}`).

use std::collections::{HashMap, HashSet};

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::data::selection::AxisSelection;
use crate::error::{Result, ViewerError};

/// A named, unit-tagged measurable quantity.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Variable {
    pub name: String,
    pub unit: String,
}

impl Variable {
    pub fn new(name: impl Into<String>, unit: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            unit: unit.into(),
        }
    }

    /// Label used in the axis dropdowns, e.g. `temp (C)`.
    pub fn label(&self) -> String {
        format!("{} ({})", self.name, self.unit)
    }
}

/// One record mapping variable names to readings.
///
/// Values are kept as raw JSON: the backend stores CSV cells as strings, so a
/// reading may arrive either as a number or as a numeric string.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DataPoint(pub HashMap<String, Value>);

impl DataPoint {
    /// Raw value for `variable`, if present.
    pub fn get(&self, variable: &str) -> Option<&Value> {
        self.0.get(variable)
    }

    /// Numeric reading for `variable`.
    ///
    /// Returns `None` when the key is missing or the value is not numeric.
    pub fn value(&self, variable: &str) -> Option<f64> {
        match self.0.get(variable)? {
            Value::Number(n) => n.as_f64(),
            Value::String(s) => s.trim().parse().ok(),
            _ => None,
        }
    }

    pub fn insert(&mut self, variable: impl Into<String>, value: impl Into<Value>) {
        self.0.insert(variable.into(), value.into());
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl<K: Into<String>, V: Into<Value>> FromIterator<(K, V)> for DataPoint {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self(
            iter.into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        )
    }
}

/// A single point on the chart.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlotPoint {
    pub x: f64,
    pub y: f64,
}

impl PlotPoint {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Both coordinates are finite (a missing reading projects to `NaN`).
    pub fn is_finite(&self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }

    pub fn to_array(self) -> [f64; 2] {
        [self.x, self.y]
    }
}

/// The dataset loaded once per session. Never mutated after loading.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MeasurementDataset {
    /// Display name of the measurement, when the source provides one.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    pub variables: Vec<Variable>,
    pub data_points: Vec<DataPoint>,
}

impl MeasurementDataset {
    /// Parse a JSON payload. No schema checks beyond the shape itself.
    pub fn from_json(text: &str) -> Result<Self> {
        let dataset: Self = serde_json::from_str(text)?;
        check_unique_names(&dataset.variables)?;
        Ok(dataset)
    }

    pub fn variable(&self, name: &str) -> Option<&Variable> {
        self.variables.iter().find(|v| v.name == name)
    }

    /// Project every data point onto the selected axes.
    ///
    /// Point `i` is `{x: data_points[i][x], y: data_points[i][y]}`; a missing or
    /// non-numeric reading becomes `NaN`.
    pub fn project(&self, selection: &AxisSelection) -> Vec<PlotPoint> {
        self.data_points
            .iter()
            .map(|p| {
                PlotPoint::new(
                    p.value(&selection.x).unwrap_or(f64::NAN),
                    p.value(&selection.y).unwrap_or(f64::NAN),
                )
            })
            .collect()
    }
}

/// Variable names key the readings of every data point and must be unique.
pub(crate) fn check_unique_names(variables: &[Variable]) -> Result<()> {
    let mut seen = HashSet::new();
    match variables.iter().find(|v| !seen.insert(v.name.as_str())) {
        Some(dup) => Err(ViewerError::DuplicateVariable(dup.name.clone())),
        None => Ok(()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn numeric_strings_are_read_as_numbers() {
        let p: DataPoint = [("a", json!("1.5")), ("b", json!(2)), ("c", json!("n/a"))]
            .into_iter()
            .collect();
        assert_eq!(p.value("a"), Some(1.5));
        assert_eq!(p.value("b"), Some(2.0));
        assert_eq!(p.value("c"), None);
        assert_eq!(p.value("missing"), None);
    }

    #[test]
    fn unknown_fields_are_ignored() {
        let ds = MeasurementDataset::from_json(
            r#"{"id": 3, "name": "run 1", "user_id": 7,
                "variables": [{"name": "t", "unit": "s"}],
                "data_points": [{"t": 0}]}"#,
        )
        .unwrap();
        assert_eq!(ds.name.as_deref(), Some("run 1"));
        assert_eq!(ds.variables.len(), 1);
        assert_eq!(ds.data_points.len(), 1);
    }
}
