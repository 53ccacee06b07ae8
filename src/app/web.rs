//! Browser entry point (WebAssembly).
//!
//! The host page provides a `<canvas id="chartSpace">` and calls
//! `start("measurements/3/data/")` from JavaScript.

use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;

use crate::config::{DataSource, ViewerConfig};
use crate::error::{Result, ViewerError};
use crate::loader::Origin;

use super::ViewerApp;

/// Start the viewer on the page's canvas and load `endpoint` relative to the
/// page origin.
#[wasm_bindgen]
pub async fn start(endpoint: String) -> std::result::Result<(), JsValue> {
    let mut cfg = ViewerConfig::default();
    if !endpoint.is_empty() {
        cfg.source = Some(DataSource::Endpoint(endpoint));
    }
    start_with_config(cfg).await.map_err(|e| {
        log::error!("{e}");
        JsValue::from_str(&e.to_string())
    })
}

/// Look up the canvas and run the app on it. Missing host elements are
/// reported here rather than failing later inside the UI.
pub async fn start_with_config(mut cfg: ViewerConfig) -> Result<()> {
    // Errs only when a logger is already installed.
    eframe::WebLogger::init(cfg.log_level).ok();

    let window =
        web_sys::window().ok_or_else(|| ViewerError::ElementNotFound { id: "window".into() })?;
    let document = window
        .document()
        .ok_or_else(|| ViewerError::ElementNotFound { id: "document".into() })?;
    let canvas = document
        .get_element_by_id(&cfg.canvas_id)
        .ok_or_else(|| ViewerError::ElementNotFound {
            id: cfg.canvas_id.clone(),
        })?
        .dyn_into::<web_sys::HtmlCanvasElement>()
        .map_err(|_| ViewerError::ElementNotFound {
            id: cfg.canvas_id.clone(),
        })?;

    if cfg.user_agent.is_none() {
        cfg.user_agent = window.navigator().user_agent().ok();
    }
    let origin = Origin::from_location()?;

    eframe::WebRunner::new()
        .start(
            canvas,
            eframe::WebOptions::default(),
            Box::new(move |cc| {
                Ok(Box::new(ViewerApp::from_creation_context(
                    cc,
                    &cfg,
                    Some(origin),
                )))
            }),
        )
        .await
        .map_err(|e| ViewerError::Startup(format!("{e:?}")))
}
