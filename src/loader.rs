//! Fetching measurement datasets.
//!
//! Requests run off the UI thread (a worker thread natively, a spawned future
//! on the web) and hand their [`LoadOutcome`] back over an mpsc channel, which
//! the app drains once per frame.

use std::sync::mpsc::{Receiver, Sender};

use eframe::egui;

use crate::data::dataset::MeasurementDataset;
use crate::error::{Result, ViewerError};

/// Result of one load request.
pub type LoadOutcome = Result<MeasurementDataset>;

/// Protocol and host the viewer was served from; endpoints are resolved
/// against it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Origin {
    /// Scheme including the trailing colon, e.g. `https:`.
    pub protocol: String,
    /// Host with optional port, e.g. `localhost:8000`.
    pub host: String,
}

impl Origin {
    pub fn new(protocol: impl Into<String>, host: impl Into<String>) -> Self {
        Self {
            protocol: protocol.into(),
            host: host.into(),
        }
    }

    /// Split a base URL like `http://127.0.0.1:8000/some/path` into its
    /// origin. Returns `None` if there is no `scheme://host` prefix.
    pub fn parse(base_url: &str) -> Option<Self> {
        let (scheme, rest) = base_url.trim().split_once("://")?;
        let host = rest.split(['/', '?', '#']).next().unwrap_or("");
        if scheme.is_empty() || host.is_empty() {
            return None;
        }
        Some(Self::new(format!("{scheme}:"), host))
    }

    /// Origin of the page hosting the viewer.
    #[cfg(target_arch = "wasm32")]
    pub fn from_location() -> Result<Self> {
        let location = web_sys::window()
            .ok_or_else(|| ViewerError::ElementNotFound { id: "window".into() })?
            .location();
        let protocol = location
            .protocol()
            .map_err(|e| ViewerError::Startup(format!("{e:?}")))?;
        let host = location
            .host()
            .map_err(|e| ViewerError::Startup(format!("{e:?}")))?;
        Ok(Self::new(protocol, host))
    }

    /// `{protocol}//{host}/{endpoint}`.
    pub fn url_for(&self, endpoint: &str) -> String {
        format!("{}//{}/{}", self.protocol, self.host, endpoint)
    }
}

/// Turn an HTTP status and body into a dataset.
///
/// Non-2xx statuses fail with [`ViewerError::Network`] carrying the body text.
pub fn interpret_response(status: u16, body: String) -> LoadOutcome {
    if !(200..300).contains(&status) {
        return Err(ViewerError::Network { status, body });
    }
    MeasurementDataset::from_json(&body)
}

/// Read a dataset from a local `.json` or `.csv` file.
#[cfg(not(target_arch = "wasm32"))]
pub fn read_path(path: &std::path::Path) -> LoadOutcome {
    let is_csv = path
        .extension()
        .and_then(|e| e.to_str())
        .is_some_and(|e| e.eq_ignore_ascii_case("csv"));
    if is_csv {
        let name = path
            .file_stem()
            .map(|s| s.to_string_lossy().into_owned())
            .unwrap_or_default();
        let file = std::fs::File::open(path)?;
        MeasurementDataset::from_csv_reader(name, file)
    } else {
        let text = std::fs::read_to_string(path)?;
        MeasurementDataset::from_json(&text)
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn fetch_blocking(url: &str) -> LoadOutcome {
    let response =
        reqwest::blocking::get(url).map_err(|e| ViewerError::Transport(e.to_string()))?;
    let status = response.status().as_u16();
    let body = response
        .text()
        .map_err(|e| ViewerError::Transport(e.to_string()))?;
    interpret_response(status, body)
}

#[cfg(target_arch = "wasm32")]
async fn fetch_async(url: &str) -> LoadOutcome {
    let response = gloo_net::http::Request::get(url)
        .send()
        .await
        .map_err(|e| ViewerError::Transport(e.to_string()))?;
    let status = response.status();
    let body = response
        .text()
        .await
        .map_err(|e| ViewerError::Transport(e.to_string()))?;
    interpret_response(status, body)
}

/// Issues load requests and collects their outcomes.
pub struct DataLoader {
    tx: Sender<LoadOutcome>,
    rx: Receiver<LoadOutcome>,
    repaint: Option<egui::Context>,
    pending: usize,
}

impl Default for DataLoader {
    fn default() -> Self {
        Self::new()
    }
}

impl DataLoader {
    pub fn new() -> Self {
        let (tx, rx) = std::sync::mpsc::channel();
        Self {
            tx,
            rx,
            repaint: None,
            pending: 0,
        }
    }

    /// Wake the UI whenever an outcome arrives.
    pub fn with_repaint(mut self, ctx: egui::Context) -> Self {
        self.repaint = Some(ctx);
        self
    }

    pub fn is_loading(&self) -> bool {
        self.pending > 0
    }

    /// Issue a single GET request for `url`. No retries.
    pub fn fetch(&mut self, url: String) {
        log::info!("fetching measurement data from {url}");
        self.pending += 1;
        let tx = self.tx.clone();
        let repaint = self.repaint.clone();

        #[cfg(not(target_arch = "wasm32"))]
        std::thread::spawn(move || {
            let outcome = fetch_blocking(&url);
            deliver(&tx, repaint.as_ref(), outcome);
        });

        #[cfg(target_arch = "wasm32")]
        wasm_bindgen_futures::spawn_local(async move {
            let outcome = fetch_async(&url).await;
            deliver(&tx, repaint.as_ref(), outcome);
        });
    }

    /// Load a local file on a worker thread.
    #[cfg(not(target_arch = "wasm32"))]
    pub fn load_path(&mut self, path: std::path::PathBuf) {
        log::info!("loading measurement data from {}", path.display());
        self.pending += 1;
        let tx = self.tx.clone();
        let repaint = self.repaint.clone();
        std::thread::spawn(move || {
            let outcome = read_path(&path);
            deliver(&tx, repaint.as_ref(), outcome);
        });
    }

    /// Next finished outcome, if any. Never blocks.
    pub fn poll(&mut self) -> Option<LoadOutcome> {
        let outcome = self.rx.try_recv().ok()?;
        self.pending = self.pending.saturating_sub(1);
        Some(outcome)
    }

    /// Block until the next outcome arrives. Returns `None` at once when no
    /// request is pending.
    #[cfg(not(target_arch = "wasm32"))]
    pub fn wait(&mut self) -> Option<LoadOutcome> {
        if self.pending == 0 {
            return None;
        }
        let outcome = self.rx.recv().ok()?;
        self.pending = self.pending.saturating_sub(1);
        Some(outcome)
    }
}

fn deliver(tx: &Sender<LoadOutcome>, repaint: Option<&egui::Context>, outcome: LoadOutcome) {
    // The receiver is gone once the window has closed.
    let _ = tx.send(outcome);
    if let Some(ctx) = repaint {
        ctx.request_repaint();
    }
}
