use egui::Ui;
use egui_plot::{Legend, Line, Plot, Points};

use crate::data::chart::{ChartConfig, ChartInstance, ChartKind, ChartStyle};
use crate::data::selection::Axis;
use crate::session::ChartSession;

/// Id of the plot area.
pub const CHART_ID: &str = "chartSpace";
/// Id of the chart style radio group.
pub const CHART_TYPE_ID: &str = "chartType";

/// Axis dropdowns, chart-style radios and the plot itself.
#[derive(Default)]
pub struct ChartPanel {
    // Revision of the chart drawn last frame; a new one refits the view.
    drawn_revision: Option<u64>,
}

impl ChartPanel {
    pub fn render_panel(&mut self, ui: &mut Ui, session: &mut ChartSession) {
        self.render_controls(ui, session);
        ui.separator();
        self.render_plot(ui, session);
    }

    fn render_controls(&mut self, ui: &mut Ui, session: &mut ChartSession) {
        ui.horizontal(|ui| {
            axis_combo(ui, session, Axis::X, "X-Axis");
            ui.separator();
            axis_combo(ui, session, Axis::Y, "Y-Axis");
            ui.separator();

            ui.push_id(CHART_TYPE_ID, |ui| {
                ui.strong("Chart:");
                let mut style = session.style();
                for s in ChartStyle::ALL {
                    if ui.radio_value(&mut style, s, s.label()).changed() {
                        session.on_chart_line_type_change(s.value());
                    }
                }
            });
        });
    }

    fn render_plot(&mut self, ui: &mut Ui, session: &ChartSession) {
        let Some(chart) = session.chart() else {
            ui.centered_and_justified(|ui| {
                ui.label("No measurement data loaded");
            });
            return;
        };

        let cfg = &chart.config;
        let mut plot = Plot::new(CHART_ID)
            .legend(Legend::default())
            .x_axis_label(axis_title(cfg.x_axis.show_title, &cfg.x_axis.title))
            .y_axis_label(axis_title(cfg.y_axis.show_title, &cfg.y_axis.title));
        if self.take_revision(chart.revision()) {
            plot = plot.reset();
        }

        plot.show(ui, |plot_ui| draw_chart(plot_ui, chart));
    }

    /// Record `revision` as drawn. Returns `true` when it differs from the
    /// last one, i.e. the view must be refitted.
    fn take_revision(&mut self, revision: u64) -> bool {
        let changed = self.drawn_revision != Some(revision);
        self.drawn_revision = Some(revision);
        changed
    }
}

fn axis_title(show: bool, title: &str) -> String {
    if show {
        title.to_string()
    } else {
        String::new()
    }
}

fn axis_combo(ui: &mut Ui, session: &mut ChartSession, axis: Axis, label: &str) {
    let selector = session.selectors.get(axis);
    let mut value = selector.value().to_string();
    let options = selector.options().to_vec();
    let selected_text = selector.selected_label().to_string();

    ui.strong(label);
    egui::ComboBox::from_id_salt(selector.id())
        .selected_text(selected_text)
        .show_ui(ui, |ui| {
            for opt in &options {
                ui.selectable_value(&mut value, opt.value.clone(), &opt.label);
            }
        });
    if value != session.selectors.get(axis).value() {
        session.select_axis(axis, &value);
    }
}

/// What a chart config puts on the plot. Points with a missing reading are
/// left out.
#[derive(Debug, Default, PartialEq)]
pub struct ChartSeries {
    pub line: Option<Vec<[f64; 2]>>,
    pub points: Option<Vec<[f64; 2]>>,
}

impl ChartSeries {
    pub fn from_config(cfg: &ChartConfig) -> Self {
        let pts: Vec<[f64; 2]> = cfg
            .dataset
            .data
            .iter()
            .filter(|p| p.is_finite())
            .map(|p| p.to_array())
            .collect();
        if pts.is_empty() {
            return Self::default();
        }
        let line = (cfg.kind == ChartKind::Line).then(|| pts.clone());
        let points = (cfg.point_radius > 0.0).then_some(pts);
        Self { line, points }
    }
}

fn draw_chart(plot_ui: &mut egui_plot::PlotUi, chart: &ChartInstance) {
    let cfg = &chart.config;
    let series = ChartSeries::from_config(cfg);
    let label = cfg.dataset.label.clone();
    let color = cfg.dataset.color;

    if let Some(line) = series.line {
        plot_ui.line(Line::new(label.clone(), line).color(color).width(2.0));
    }
    if let Some(pts) = series.points {
        plot_ui.points(
            Points::new(label.clone(), pts.clone())
                .radius(cfg.point_radius)
                .color(color)
                .filled(true),
        );

        // Enlarge the point under the pointer.
        if let Some(pointer) = plot_ui.response().hover_pos() {
            let nearest = pts
                .iter()
                .map(|p| {
                    let screen = plot_ui.screen_from_plot(egui_plot::PlotPoint::new(p[0], p[1]));
                    (*p, screen.distance(pointer))
                })
                .min_by(|a, b| a.1.total_cmp(&b.1));
            if let Some((p, dist)) = nearest {
                if dist <= cfg.hover_radius {
                    plot_ui.points(
                        Points::new(label, vec![p])
                            .radius(cfg.hover_radius)
                            .color(color)
                            .filled(true),
                    );
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::dataset::PlotPoint;
    use crate::data::selection::AxisSelection;

    fn config(style: ChartStyle, data: Vec<PlotPoint>) -> ChartConfig {
        let mut cfg = ChartConfig::scatter(&AxisSelection::new("x", "y"), data);
        cfg.apply_style(style);
        cfg
    }

    fn two_points() -> Vec<PlotPoint> {
        vec![PlotPoint::new(0.0, 1.0), PlotPoint::new(2.0, 3.0)]
    }

    #[test]
    fn scatter_draws_points_only() {
        let s = ChartSeries::from_config(&config(ChartStyle::Scatter, two_points()));
        assert_eq!(s.line, None);
        assert_eq!(s.points, Some(vec![[0.0, 1.0], [2.0, 3.0]]));
    }

    #[test]
    fn line_draws_line_only() {
        let s = ChartSeries::from_config(&config(ChartStyle::Line, two_points()));
        assert_eq!(s.line, Some(vec![[0.0, 1.0], [2.0, 3.0]]));
        assert_eq!(s.points, None);
    }

    #[test]
    fn line_with_points_draws_both() {
        let s = ChartSeries::from_config(&config(ChartStyle::LineWithPoints, two_points()));
        assert_eq!(s.line, s.points);
        assert!(s.line.is_some());
    }

    #[test]
    fn missing_readings_are_skipped() {
        let data = vec![
            PlotPoint::new(0.0, 1.0),
            PlotPoint::new(f64::NAN, 2.0),
            PlotPoint::new(3.0, f64::NAN),
            PlotPoint::new(4.0, 5.0),
        ];
        let s = ChartSeries::from_config(&config(ChartStyle::LineWithPoints, data));
        assert_eq!(s.points, Some(vec![[0.0, 1.0], [4.0, 5.0]]));

        let all_nan = vec![PlotPoint::new(f64::NAN, f64::NAN)];
        let s = ChartSeries::from_config(&config(ChartStyle::Line, all_nan));
        assert_eq!(s, ChartSeries::default());
    }

    #[test]
    fn new_revision_refits_view_once() {
        let mut panel = ChartPanel::default();
        assert!(panel.take_revision(0));
        assert!(!panel.take_revision(0));
        assert!(panel.take_revision(1));
        assert!(!panel.take_revision(1));
    }
}
