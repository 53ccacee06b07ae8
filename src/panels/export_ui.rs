use super::panel_trait::{Panel, PanelState};
use crate::session::ChartSession;
use egui::Ui;
use egui_phosphor::regular as icons;

/// Menu-only panel saving the plotted points.
pub struct ExportPanel {
    pub state: PanelState,
}

impl Default for ExportPanel {
    fn default() -> Self {
        Self {
            state: PanelState::new("Export", icons::EXPORT),
        }
    }
}

impl Panel for ExportPanel {
    fn state(&self) -> &PanelState {
        &self.state
    }
    fn state_mut(&mut self) -> &mut PanelState {
        &mut self.state
    }

    fn has_side_view(&self) -> bool {
        false
    }

    #[cfg(not(target_arch = "wasm32"))]
    fn render_menu(&mut self, ui: &mut Ui, session: &mut ChartSession) {
        ui.menu_button(format!("{} Export", icons::EXPORT), |ui| {
            let enabled = !session.plotted_points().is_empty();
            if ui
                .add_enabled(enabled, egui::Button::new("Plotted points as CSV"))
                .clicked()
            {
                if let Some(path) = rfd::FileDialog::new()
                    .set_file_name("points.csv")
                    .add_filter("CSV", &["csv"])
                    .save_file()
                {
                    let selection = session.selection();
                    match crate::data::export::write_points_csv_path(
                        &path,
                        &selection,
                        session.plotted_points(),
                    ) {
                        Ok(()) => log::info!("exported points to {}", path.display()),
                        Err(e) => log::error!("Failed to export points CSV: {e}"),
                    }
                }
                ui.close();
            }
        });
    }
}
