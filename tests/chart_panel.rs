use eframe::egui;
use measplot::panels::ChartPanel;
use measplot::{Axis, ChartSession, MeasurementDataset};

fn run_frame(panel: &mut ChartPanel, session: &mut ChartSession) {
    let ctx = egui::Context::default();
    let _ = ctx.run(Default::default(), |ctx| {
        egui::CentralPanel::default().show(ctx, |ui| {
            panel.render_panel(ui, session);
        });
    });
}

#[test]
fn renders_without_data() {
    let mut panel = ChartPanel::default();
    let mut session = ChartSession::new();
    run_frame(&mut panel, &mut session);
    assert!(session.chart().is_none());
}

#[test]
fn renders_every_style_with_missing_readings() {
    let mut session = ChartSession::new();
    session.apply_dataset(
        MeasurementDataset::from_json(
            r#"{"variables": [{"name": "t", "unit": "s"}, {"name": "v", "unit": "V"}],
                "data_points": [{"t": 0, "v": 1}, {"t": 1}, {"t": 2, "v": "n/a"}, {"t": 3, "v": 4}]}"#,
        )
        .unwrap(),
    );
    session.select_axis(Axis::Y, "v");

    let mut panel = ChartPanel::default();
    for style in ["scatter", "line", "lineWithPoints"] {
        session.on_chart_line_type_change(style);
        let revision = session.chart().unwrap().revision();
        run_frame(&mut panel, &mut session);
        // Drawing never touches the chart itself.
        assert_eq!(session.chart().unwrap().revision(), revision);
    }
    assert_eq!(session.plotted_points().len(), 4);
}
