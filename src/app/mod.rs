//! The eframe application.
//!
//! | Sub-module      | Responsibility |
//! | --------------- | -------------- |
//! | `viewer_app`    | [`ViewerApp`]: drains loads, renders menu, side panels, chart and mobile notice |
//! | `run`           | Native entry point [`run_viewer`] and window icon |
//! | `web`           | WebAssembly entry point `start` |

mod viewer_app;

#[cfg(not(target_arch = "wasm32"))]
mod run;
#[cfg(target_arch = "wasm32")]
mod web;

pub use viewer_app::ViewerApp;

#[cfg(not(target_arch = "wasm32"))]
pub use run::run_viewer;
#[cfg(target_arch = "wasm32")]
pub use web::{start, start_with_config};
