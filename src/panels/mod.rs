pub mod chart_ui;
pub mod dataset_ui;
pub mod export_ui;
pub mod panel_trait;

pub use chart_ui::{ChartPanel, ChartSeries};
pub use dataset_ui::DatasetPanel;
pub use export_ui::ExportPanel;
pub use panel_trait::{Panel, PanelState};
