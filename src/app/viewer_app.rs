//! [`ViewerApp`]: the eframe application tying loader, session and panels
//! together.

use eframe::egui;
use egui_phosphor::regular as icons;

use crate::config::{DataSource, ViewerConfig};
use crate::loader::{DataLoader, Origin};
use crate::mobile_alert::MobileAlert;
#[cfg(not(target_arch = "wasm32"))]
use crate::panels::ExportPanel;
use crate::panels::{ChartPanel, DatasetPanel, Panel};
use crate::session::ChartSession;

pub struct ViewerApp {
    /// Dataset, selectors and chart.
    pub session: ChartSession,
    loader: DataLoader,
    mobile_alert: MobileAlert,
    chart_panel: ChartPanel,
    /// Optional panels; visible ones are docked on the right.
    panels: Vec<Box<dyn Panel>>,
    source: Option<DataSource>,
    origin: Option<Origin>,
}

impl ViewerApp {
    /// Build the app without an egui context (no repaint wakeups, no storage).
    pub fn new(cfg: &ViewerConfig, origin: Option<Origin>) -> Self {
        let mut dataset_panel = DatasetPanel::default();
        dataset_panel.state.visible = cfg.show_dataset_panel;
        #[allow(unused_mut)]
        let mut panels: Vec<Box<dyn Panel>> = vec![Box::new(dataset_panel)];
        #[cfg(not(target_arch = "wasm32"))]
        panels.push(Box::new(ExportPanel::default()));

        Self {
            session: ChartSession::new(),
            loader: DataLoader::new(),
            mobile_alert: MobileAlert::new(),
            chart_panel: ChartPanel::default(),
            panels,
            source: cfg.source.clone(),
            origin,
        }
    }

    /// Build the app at startup: installs icon fonts, shows the mobile notice
    /// if due, and requests the configured dataset.
    pub fn from_creation_context(
        cc: &eframe::CreationContext<'_>,
        cfg: &ViewerConfig,
        origin: Option<Origin>,
    ) -> Self {
        let mut fonts = egui::FontDefinitions::default();
        egui_phosphor::add_to_fonts(&mut fonts, egui_phosphor::Variant::Regular);
        cc.egui_ctx.set_fonts(fonts);

        let mut app = Self::new(cfg, origin);
        app.loader = DataLoader::new().with_repaint(cc.egui_ctx.clone());
        app.mobile_alert.on_ready(cfg.user_agent.as_deref(), cc.storage);
        app.request_load();
        app
    }

    /// Load the configured source. Each call is a single fresh request.
    pub fn request_load(&mut self) {
        let Some(source) = self.source.clone() else {
            log::info!("no data source configured");
            return;
        };
        match &source {
            #[cfg(not(target_arch = "wasm32"))]
            DataSource::File(path) => self.loader.load_path(path.clone()),
            #[cfg(target_arch = "wasm32")]
            DataSource::File(path) => {
                log::warn!("cannot read local file {} in the browser", path.display())
            }
            DataSource::Endpoint(_) | DataSource::Url(_) => {
                match source.url(self.origin.as_ref()) {
                    Some(url) => self.loader.fetch(url),
                    None => log::error!("cannot resolve {source:?}: no origin configured"),
                }
            }
        }
    }

    /// Apply every finished load to the session.
    pub fn drain_loader(&mut self) {
        while let Some(outcome) = self.loader.poll() {
            // Failures are logged by the session and leave it untouched.
            self.session.handle_outcome(outcome).ok();
        }
    }

    fn render_menu(&mut self, ui: &mut egui::Ui) {
        egui::MenuBar::new().ui(ui, |ui| {
            ui.menu_button(format!("{} Data", icons::DATABASE), |ui| {
                #[cfg(not(target_arch = "wasm32"))]
                if ui
                    .button(format!("{} Open file…", icons::FOLDER_OPEN))
                    .clicked()
                {
                    if let Some(path) = rfd::FileDialog::new()
                        .add_filter("Measurements", &["json", "csv"])
                        .pick_file()
                    {
                        self.source = Some(DataSource::File(path));
                        self.request_load();
                    }
                    ui.close();
                }
                if ui
                    .add_enabled(
                        self.source.is_some(),
                        egui::Button::new(format!("{} Reload", icons::ARROW_CLOCKWISE)),
                    )
                    .clicked()
                {
                    self.request_load();
                    ui.close();
                }
            });

            for panel in self.panels.iter_mut() {
                panel.render_menu(ui, &mut self.session);
            }

            ui.menu_button(format!("{} View", icons::EYE), |ui| {
                for panel in self.panels.iter_mut() {
                    if !panel.has_side_view() {
                        continue;
                    }
                    let st = panel.state_mut();
                    ui.checkbox(&mut st.visible, format!("{} {}", st.icon, st.title));
                }
            });

            if self.loader.is_loading() {
                ui.spinner();
            }
        });
    }
}

impl eframe::App for ViewerApp {
    fn update(&mut self, ctx: &egui::Context, frame: &mut eframe::Frame) {
        self.drain_loader();

        egui::TopBottomPanel::top("measplot_menu").show(ctx, |ui| {
            self.render_menu(ui);
            if let Some(name) = self.session.dataset().and_then(|d| d.name.clone()) {
                ui.heading(name);
            }
        });

        let mut panels = std::mem::take(&mut self.panels);
        if panels.iter().any(|p| p.state().visible) {
            egui::SidePanel::right("measplot_right")
                .resizable(true)
                .default_width(320.0)
                .show(ctx, |ui| {
                    for panel in panels.iter_mut().filter(|p| p.state().visible) {
                        ui.heading(format!("{} {}", panel.state().icon, panel.title()));
                        panel.render_panel(ui, &mut self.session);
                        ui.separator();
                    }
                });
        }
        self.panels = panels;

        egui::CentralPanel::default().show(ctx, |ui| {
            self.chart_panel.render_panel(ui, &mut self.session);
        });

        if self.mobile_alert.show(ctx) {
            self.mobile_alert.dismiss(frame.storage_mut());
        }
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod tests {
    use super::*;
    use std::time::Duration;

    fn app_for(path: std::path::PathBuf) -> ViewerApp {
        let cfg = ViewerConfig {
            source: Some(DataSource::File(path)),
            ..ViewerConfig::default()
        };
        ViewerApp::new(&cfg, None)
    }

    fn drain_until_idle(app: &mut ViewerApp) {
        for _ in 0..500 {
            app.drain_loader();
            if !app.loader.is_loading() {
                return;
            }
            std::thread::sleep(Duration::from_millis(10));
        }
        panic!("load did not finish");
    }

    #[test]
    fn failed_load_is_absorbed_by_session() {
        let mut app = app_for(std::env::temp_dir().join("measplot_app_missing.json"));
        app.request_load();
        drain_until_idle(&mut app);
        assert!(app.session.dataset().is_none());
        assert!(app.session.chart().is_none());
    }

    #[test]
    fn successful_load_reaches_session() {
        let path = std::env::temp_dir().join(format!("measplot_app_{}.csv", std::process::id()));
        std::fs::write(&path, "t (s),v (V)\n0,1\n1,2\n").unwrap();
        let mut app = app_for(path.clone());
        app.request_load();
        drain_until_idle(&mut app);
        std::fs::remove_file(&path).ok();
        assert_eq!(app.session.plotted_points().len(), 2);
    }
}
