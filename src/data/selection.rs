//! Axis selectors: the two dropdowns choosing which variables go on X and Y.

use crate::data::dataset::MeasurementDataset;

/// Widget id of the X axis selector.
pub const X_AXIS_ID: &str = "xAxis";
/// Widget id of the Y axis selector.
pub const Y_AXIS_ID: &str = "yAxis";

/// The pair of variable names currently chosen for the chart axes.
///
/// Either side may be empty (nothing loaded yet); `x == y` is allowed.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AxisSelection {
    pub x: String,
    pub y: String,
}

impl AxisSelection {
    pub fn new(x: impl Into<String>, y: impl Into<String>) -> Self {
        Self {
            x: x.into(),
            y: y.into(),
        }
    }

    pub fn is_complete(&self) -> bool {
        !self.x.is_empty() && !self.y.is_empty()
    }

    /// Dataset label shown in the legend.
    pub fn label(&self) -> String {
        format!("{} vs {}", self.x, self.y)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Axis {
    X,
    Y,
}

/// One entry of a selector.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AxisOption {
    pub value: String,
    pub label: String,
}

/// A single dropdown. Behaves like an HTML `<select>`: once options exist the
/// value is always one of them, defaulting to the first.
#[derive(Debug, Clone)]
pub struct AxisSelector {
    id: &'static str,
    options: Vec<AxisOption>,
    value: String,
}

impl AxisSelector {
    pub fn new(id: &'static str) -> Self {
        Self {
            id,
            options: Vec::new(),
            value: String::new(),
        }
    }

    pub fn id(&self) -> &'static str {
        self.id
    }

    pub fn options(&self) -> &[AxisOption] {
        &self.options
    }

    pub fn value(&self) -> &str {
        &self.value
    }

    /// Label of the selected option (empty when nothing is selected).
    pub fn selected_label(&self) -> &str {
        self.options
            .iter()
            .find(|o| o.value == self.value)
            .map(|o| o.label.as_str())
            .unwrap_or("")
    }

    pub fn clear(&mut self) {
        self.options.clear();
        self.value.clear();
    }

    pub fn append(&mut self, option: AxisOption) {
        if self.options.is_empty() {
            self.value = option.value.clone();
        }
        self.options.push(option);
    }

    /// Select `value` if it is one of the options. Returns `true` if the
    /// selection changed.
    pub fn select(&mut self, value: &str) -> bool {
        if self.value == value || !self.options.iter().any(|o| o.value == value) {
            return false;
        }
        self.value = value.to_string();
        true
    }
}

/// Both axis selectors.
#[derive(Debug, Clone)]
pub struct AxisSelectors {
    pub x: AxisSelector,
    pub y: AxisSelector,
}

impl Default for AxisSelectors {
    fn default() -> Self {
        Self {
            x: AxisSelector::new(X_AXIS_ID),
            y: AxisSelector::new(Y_AXIS_ID),
        }
    }
}

impl AxisSelectors {
    /// Rebuild both option lists from the dataset's variables, in order.
    pub fn populate(&mut self, dataset: &MeasurementDataset) {
        self.x.clear();
        self.y.clear();
        for var in &dataset.variables {
            let option = AxisOption {
                value: var.name.clone(),
                label: var.label(),
            };
            self.x.append(option.clone());
            self.y.append(option);
        }
    }

    pub fn get(&self, axis: Axis) -> &AxisSelector {
        match axis {
            Axis::X => &self.x,
            Axis::Y => &self.y,
        }
    }

    pub fn get_mut(&mut self, axis: Axis) -> &mut AxisSelector {
        match axis {
            Axis::X => &mut self.x,
            Axis::Y => &mut self.y,
        }
    }

    pub fn selection(&self) -> AxisSelection {
        AxisSelection::new(self.x.value(), self.y.value())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn select_rejects_unknown_values() {
        let mut sel = AxisSelector::new(X_AXIS_ID);
        sel.append(AxisOption {
            value: "a".into(),
            label: "a (m)".into(),
        });
        assert_eq!(sel.value(), "a");
        assert!(!sel.select("b"));
        assert!(!sel.select("a"));
        assert_eq!(sel.selected_label(), "a (m)");
    }
}
