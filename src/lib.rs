//! measplot crate root: re-exports and module wiring.
//!
//! An egui/eframe viewer for measurement datasets: load `{variables,
//! data_points}` from an HTTP endpoint or a local file, pick the variables for
//! the X and Y axes, and view them as a scatter or line chart. Runs natively
//! ([`run_viewer`]) and in the browser (`start`, WebAssembly).
//!
//! - `data`: dataset model, axis selectors, chart config, CSV import/export
//! - `session`: the chart session (dataset + selectors + live chart)
//! - `loader`: HTTP/file loading delivered over a channel
//! - `mobile_alert`: one-time notice for mobile user agents
//! - `panels`, `app`: the egui UI

pub mod app;
pub mod config;
pub mod data;
pub mod error;
pub mod loader;
pub mod mobile_alert;
pub mod panels;
pub mod session;

// Public re-exports for a compact external API
pub use app::ViewerApp;
#[cfg(not(target_arch = "wasm32"))]
pub use app::run_viewer;
pub use config::{DataSource, ViewerConfig};
pub use data::chart::{ChartInstance, ChartKind, ChartStyle};
pub use data::dataset::{DataPoint, MeasurementDataset, PlotPoint, Variable};
pub use data::selection::{Axis, AxisSelection};
pub use error::ViewerError;
pub use loader::{DataLoader, LoadOutcome, Origin};
pub use session::ChartSession;
