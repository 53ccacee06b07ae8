//! Chart configuration and the live chart handle.
//!
//! The rendering side ([`crate::panels::chart_ui`]) draws whatever the current
//! [`ChartInstance`] describes; mutating the config and calling
//! [`ChartInstance::update`] is all it takes to redraw.

use eframe::egui;

use crate::data::dataset::PlotPoint;
use crate::data::selection::AxisSelection;

/// Marker radius for styles that show points.
pub const POINT_RADIUS: f32 = 8.0;
/// Marker radius of the point under the pointer.
pub const HOVER_RADIUS: f32 = 10.0;

/// How the dataset is drawn.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChartKind {
    Scatter,
    Line,
}

/// The user-facing chart style choice (radio group `chartType`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ChartStyle {
    #[default]
    Scatter,
    Line,
    LineWithPoints,
}

impl ChartStyle {
    pub const ALL: [ChartStyle; 3] = [
        ChartStyle::Scatter,
        ChartStyle::Line,
        ChartStyle::LineWithPoints,
    ];

    /// Parse a radio value. Unknown values yield `None`.
    pub fn from_value(value: &str) -> Option<Self> {
        match value {
            "scatter" => Some(ChartStyle::Scatter),
            "line" => Some(ChartStyle::Line),
            "lineWithPoints" => Some(ChartStyle::LineWithPoints),
            _ => None,
        }
    }

    pub fn value(self) -> &'static str {
        match self {
            ChartStyle::Scatter => "scatter",
            ChartStyle::Line => "line",
            ChartStyle::LineWithPoints => "lineWithPoints",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            ChartStyle::Scatter => "Scatter",
            ChartStyle::Line => "Line",
            ChartStyle::LineWithPoints => "Line with points",
        }
    }

    pub fn kind(self) -> ChartKind {
        match self {
            ChartStyle::Scatter => ChartKind::Scatter,
            ChartStyle::Line | ChartStyle::LineWithPoints => ChartKind::Line,
        }
    }

    /// `0.0` hides the points.
    pub fn point_radius(self) -> f32 {
        match self {
            ChartStyle::Line => 0.0,
            ChartStyle::Scatter | ChartStyle::LineWithPoints => POINT_RADIUS,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AxisPosition {
    Bottom,
    Left,
}

/// A linear axis.
#[derive(Debug, Clone, PartialEq)]
pub struct AxisScale {
    pub position: AxisPosition,
    pub title: String,
    pub show_title: bool,
}

impl AxisScale {
    pub fn new(position: AxisPosition, title: impl Into<String>) -> Self {
        Self {
            position,
            title: title.into(),
            show_title: true,
        }
    }
}

/// The single plotted dataset.
#[derive(Debug, Clone, PartialEq)]
pub struct ChartDataset {
    pub label: String,
    pub data: Vec<PlotPoint>,
    pub color: egui::Color32,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ChartConfig {
    pub kind: ChartKind,
    pub dataset: ChartDataset,
    pub x_axis: AxisScale,
    pub y_axis: AxisScale,
    pub point_radius: f32,
    pub hover_radius: f32,
}

impl ChartConfig {
    /// Scatter configuration for `selection`, with axes titled by the selected
    /// variable names.
    pub fn scatter(selection: &AxisSelection, data: Vec<PlotPoint>) -> Self {
        Self {
            kind: ChartKind::Scatter,
            dataset: ChartDataset {
                label: selection.label(),
                data,
                color: dataset_color(0),
            },
            x_axis: AxisScale::new(AxisPosition::Bottom, selection.x.clone()),
            y_axis: AxisScale::new(AxisPosition::Left, selection.y.clone()),
            point_radius: POINT_RADIUS,
            hover_radius: HOVER_RADIUS,
        }
    }

    /// The style that produces this config's kind and radius, if any.
    pub fn style(&self) -> Option<ChartStyle> {
        ChartStyle::ALL
            .into_iter()
            .find(|s| s.kind() == self.kind && s.point_radius() == self.point_radius)
    }

    pub fn apply_style(&mut self, style: ChartStyle) {
        self.kind = style.kind();
        self.point_radius = style.point_radius();
    }
}

/// Distinct color for the dataset at `index`.
pub fn dataset_color(index: usize) -> egui::Color32 {
    const PALETTE: [egui::Color32; 4] = [
        egui::Color32::from_rgb(31, 119, 180),
        egui::Color32::from_rgb(255, 127, 14),
        egui::Color32::from_rgb(44, 160, 44),
        egui::Color32::from_rgb(214, 39, 40),
    ];
    PALETTE[index % PALETTE.len()]
}

/// Handle to the rendered chart.
///
/// `revision` counts redraw requests; the chart panel refits its view whenever
/// it observes a new revision.
#[derive(Debug)]
pub struct ChartInstance {
    pub config: ChartConfig,
    revision: u64,
}

impl ChartInstance {
    pub fn new(config: ChartConfig) -> Self {
        log::debug!(
            "chart created: '{}' with {} points",
            config.dataset.label,
            config.dataset.data.len()
        );
        Self {
            config,
            revision: 0,
        }
    }

    /// Request a redraw with the current config.
    pub fn update(&mut self) {
        self.revision += 1;
    }

    pub fn revision(&self) -> u64 {
        self.revision
    }

    pub fn destroy(self) {
        log::debug!("chart destroyed: '{}'", self.config.dataset.label);
    }
}
