use egui::Ui;
use egui_phosphor::regular as icons;
use serde_json::Value;

use super::panel_trait::{Panel, PanelState};
use crate::session::ChartSession;

/// Side panel listing the dataset's variables and raw data points.
pub struct DatasetPanel {
    pub state: PanelState,
}

impl Default for DatasetPanel {
    fn default() -> Self {
        Self {
            state: PanelState::new("Dataset", icons::TABLE),
        }
    }
}

impl Panel for DatasetPanel {
    fn state(&self) -> &PanelState {
        &self.state
    }
    fn state_mut(&mut self) -> &mut PanelState {
        &mut self.state
    }

    fn render_panel(&mut self, ui: &mut Ui, session: &mut ChartSession) {
        let Some(dataset) = session.dataset() else {
            ui.label("Nothing loaded.");
            return;
        };

        if let Some(name) = &dataset.name {
            ui.strong(name);
        }
        ui.label(format!(
            "{} variables, {} data points",
            dataset.variables.len(),
            dataset.data_points.len()
        ));
        ui.separator();

        let row_height = ui.text_style_height(&egui::TextStyle::Body);
        egui::ScrollArea::both()
            .auto_shrink([false, false])
            .show_rows(ui, row_height, dataset.data_points.len() + 1, |ui, rows| {
                egui::Grid::new("dataset_grid")
                    .striped(true)
                    .show(ui, |ui| {
                        for row in rows {
                            if row == 0 {
                                for var in &dataset.variables {
                                    ui.strong(var.label());
                                }
                            } else {
                                let point = &dataset.data_points[row - 1];
                                for var in &dataset.variables {
                                    ui.label(cell_text(point.get(&var.name)));
                                }
                            }
                            ui.end_row();
                        }
                    });
            });
    }
}

fn cell_text(value: Option<&Value>) -> String {
    match value {
        None | Some(Value::Null) => "-".to_string(),
        Some(Value::String(s)) => s.clone(),
        Some(v) => v.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cell_text_formats_readings() {
        assert_eq!(cell_text(None), "-");
        assert_eq!(cell_text(Some(&Value::Null)), "-");
        assert_eq!(cell_text(Some(&Value::String("A1".into()))), "A1");
        assert_eq!(cell_text(Some(&serde_json::json!(2.5))), "2.5");
        assert!(cell_text(Some(&serde_json::json!(3))).is_ascii());
    }
}
