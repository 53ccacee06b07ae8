//! The chart session: loaded dataset, axis selectors and the live chart.
//!
//! All state that a browser page would keep in globals lives here, owned by
//! the app and mutated only from the UI thread.

use crate::data::chart::{ChartConfig, ChartInstance, ChartStyle};
use crate::data::dataset::{MeasurementDataset, PlotPoint};
use crate::data::selection::{Axis, AxisSelection, AxisSelectors};
use crate::error::Result;
use crate::loader::LoadOutcome;

#[derive(Debug, Default)]
pub struct ChartSession {
    dataset: Option<MeasurementDataset>,
    pub selectors: AxisSelectors,
    chart: Option<ChartInstance>,
    style: ChartStyle,
}

impl ChartSession {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn dataset(&self) -> Option<&MeasurementDataset> {
        self.dataset.as_ref()
    }

    pub fn chart(&self) -> Option<&ChartInstance> {
        self.chart.as_ref()
    }

    pub fn style(&self) -> ChartStyle {
        self.style
    }

    pub fn selection(&self) -> AxisSelection {
        self.selectors.selection()
    }

    /// Points currently on the chart (empty without a chart).
    pub fn plotted_points(&self) -> &[PlotPoint] {
        self.chart
            .as_ref()
            .map(|c| c.config.dataset.data.as_slice())
            .unwrap_or(&[])
    }

    /// Apply the result of a load.
    ///
    /// Failures are logged and returned; the session is left untouched.
    pub fn handle_outcome(&mut self, outcome: LoadOutcome) -> Result<()> {
        match outcome {
            Ok(dataset) => {
                self.apply_dataset(dataset);
                Ok(())
            }
            Err(err) => {
                log::error!("There was a problem loading the measurement data: {err}");
                Err(err)
            }
        }
    }

    /// Store a freshly loaded dataset, then populate the dropdowns,
    /// initialise the chart and render it.
    pub fn apply_dataset(&mut self, dataset: MeasurementDataset) {
        log::info!(
            "loaded dataset {:?}: {} variables, {} data points",
            dataset.name.as_deref().unwrap_or("<unnamed>"),
            dataset.variables.len(),
            dataset.data_points.len()
        );
        self.dataset = Some(dataset);
        self.populate_dropdowns();
        self.initialise_plot();
        self.update_chart();
    }

    /// Rebuild both axis selectors from the dataset's variables.
    pub fn populate_dropdowns(&mut self) {
        match &self.dataset {
            Some(dataset) => self.selectors.populate(dataset),
            None => self.selectors.populate(&MeasurementDataset::default()),
        }
    }

    /// Replace the chart with a fresh scatter chart for the current selection.
    ///
    /// The initial points are projected from the current selection (empty if
    /// it is incomplete) and the style resets to scatter.
    pub fn initialise_plot(&mut self) {
        if let Some(old) = self.chart.take() {
            old.destroy();
        }
        let selection = self.selection();
        let data = self.project(&selection);
        self.chart = Some(ChartInstance::new(ChartConfig::scatter(&selection, data)));
        self.style = ChartStyle::Scatter;
    }

    /// Re-project the data onto the current selection and redraw.
    ///
    /// No-op (returns `false`) if either axis is unselected or there is no
    /// chart yet.
    pub fn update_chart(&mut self) -> bool {
        let selection = self.selection();
        if !selection.is_complete() {
            return false;
        }
        let data = self.project(&selection);
        let Some(chart) = self.chart.as_mut() else {
            log::debug!("update_chart called before the chart was initialised");
            return false;
        };
        chart.config.dataset.data = data;
        chart.config.dataset.label = selection.label();
        chart.config.x_axis.title = selection.x;
        chart.config.y_axis.title = selection.y;
        chart.update();
        true
    }

    /// Change one axis and redraw if the selection actually changed.
    pub fn select_axis(&mut self, axis: Axis, value: &str) -> bool {
        if !self.selectors.get_mut(axis).select(value) {
            return false;
        }
        self.update_chart()
    }

    /// Handle a `chartType` radio value. Unknown values are ignored.
    pub fn on_chart_line_type_change(&mut self, value: &str) -> bool {
        match ChartStyle::from_value(value) {
            Some(style) => self.set_chart_style(style),
            None => {
                log::debug!("ignoring unknown chart type '{value}'");
                false
            }
        }
    }

    /// Restyle the live chart in place and redraw.
    pub fn set_chart_style(&mut self, style: ChartStyle) -> bool {
        self.style = style;
        let Some(chart) = self.chart.as_mut() else {
            return false;
        };
        chart.config.apply_style(style);
        chart.update();
        true
    }

    fn project(&self, selection: &AxisSelection) -> Vec<PlotPoint> {
        match &self.dataset {
            Some(dataset) if selection.is_complete() => dataset.project(selection),
            _ => Vec::new(),
        }
    }
}
