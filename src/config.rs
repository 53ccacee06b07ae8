//! Viewer configuration.
//!
//! Built from defaults, an optional YAML file (`--config viewer.yaml`) and the
//! command line (a single positional data source).

use std::path::{Path, PathBuf};
use std::str::FromStr;

use serde::Deserialize;

use crate::error::{Result, ViewerError};
use crate::loader::Origin;

/// Where the dataset comes from.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum DataSource {
    /// Path relative to the origin, e.g. `measurements/3/data/`.
    Endpoint(String),
    /// Absolute URL, used as-is.
    Url(String),
    /// Local `.json` or `.csv` file (native only).
    File(PathBuf),
}

impl DataSource {
    /// Interpret a command-line argument.
    pub fn from_arg(arg: &str) -> Self {
        let lower = arg.to_ascii_lowercase();
        if lower.starts_with("http://") || lower.starts_with("https://") {
            DataSource::Url(arg.to_string())
        } else if lower.ends_with(".json") || lower.ends_with(".csv") || Path::new(arg).is_file()
        {
            DataSource::File(PathBuf::from(arg))
        } else {
            DataSource::Endpoint(arg.trim_start_matches('/').to_string())
        }
    }

    /// Absolute URL for network sources. `None` for files, or for endpoints
    /// without an origin.
    pub fn url(&self, origin: Option<&Origin>) -> Option<String> {
        match self {
            DataSource::Url(url) => Some(url.clone()),
            DataSource::Endpoint(endpoint) => origin.map(|o| o.url_for(endpoint)),
            DataSource::File(_) => None,
        }
    }
}

/// On-disk form of [`ViewerConfig`]; every field is optional.
#[derive(Debug, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ConfigFile {
    pub title: Option<String>,
    pub origin: Option<String>,
    pub endpoint: Option<String>,
    pub url: Option<String>,
    pub file: Option<PathBuf>,
    pub user_agent: Option<String>,
    pub canvas_id: Option<String>,
    pub show_dataset_panel: Option<bool>,
    pub log_level: Option<String>,
}

/// Top-level configuration for the viewer.
pub struct ViewerConfig {
    /// Native window title.
    pub title: String,
    /// Base URL endpoints are resolved against when running natively.
    /// On the web the page's own origin is used instead.
    pub origin: String,
    /// Dataset to load at startup.
    pub source: Option<DataSource>,
    /// User agent used for the mobile notice. Natively there is none unless
    /// configured; on the web it is read from the browser.
    pub user_agent: Option<String>,
    /// Id of the host canvas element (web only).
    pub canvas_id: String,
    /// Open the dataset side panel at startup.
    pub show_dataset_panel: bool,
    /// Default log filter; natively `RUST_LOG` still takes precedence.
    pub log_level: log::LevelFilter,
    /// Optional eframe native-window options.
    pub native_options: Option<eframe::NativeOptions>,
}

// Manual impl: `eframe::NativeOptions` does not implement `Debug`.
impl std::fmt::Debug for ViewerConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ViewerConfig")
            .field("title", &self.title)
            .field("origin", &self.origin)
            .field("source", &self.source)
            .field("user_agent", &self.user_agent)
            .field("canvas_id", &self.canvas_id)
            .field("show_dataset_panel", &self.show_dataset_panel)
            .field("log_level", &self.log_level)
            .field("native_options", &self.native_options.as_ref().map(|_| ".."))
            .finish()
    }
}

impl Default for ViewerConfig {
    fn default() -> Self {
        Self {
            title: "Measurement Plot".to_string(),
            origin: "http://127.0.0.1:8000".to_string(),
            source: None,
            user_agent: None,
            canvas_id: "chartSpace".to_string(),
            show_dataset_panel: false,
            log_level: log::LevelFilter::Info,
            native_options: None,
        }
    }
}

impl ViewerConfig {
    pub fn from_yaml_str(text: &str) -> Result<Self> {
        let file: ConfigFile = serde_yaml::from_str(text)?;
        let mut cfg = Self::default();
        cfg.apply_file(file)?;
        Ok(cfg)
    }

    pub fn from_yaml_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let text = std::fs::read_to_string(path)?;
        Self::from_yaml_str(&text)
    }

    /// Overlay the values present in `file`.
    pub fn apply_file(&mut self, file: ConfigFile) -> Result<()> {
        if let Some(title) = file.title {
            self.title = title;
        }
        if let Some(origin) = file.origin {
            self.origin = origin;
        }
        // Most specific source wins.
        if let Some(path) = file.file {
            self.source = Some(DataSource::File(path));
        } else if let Some(url) = file.url {
            self.source = Some(DataSource::Url(url));
        } else if let Some(endpoint) = file.endpoint {
            self.source = Some(DataSource::Endpoint(endpoint));
        }
        if file.user_agent.is_some() {
            self.user_agent = file.user_agent;
        }
        if let Some(id) = file.canvas_id {
            self.canvas_id = id;
        }
        if let Some(show) = file.show_dataset_panel {
            self.show_dataset_panel = show;
        }
        if let Some(level) = file.log_level {
            self.log_level = log::LevelFilter::from_str(&level)
                .map_err(|_| ViewerError::Startup(format!("invalid log level '{level}'")))?;
        }
        Ok(())
    }

    /// Build a config from command-line arguments (program name excluded):
    /// `[--config FILE] [SOURCE]`.
    pub fn from_args<I, S>(args: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut config_path: Option<String> = None;
        let mut source: Option<String> = None;
        let mut args = args.into_iter().map(Into::into);
        while let Some(arg) = args.next() {
            if arg == "-c" || arg == "--config" {
                let path = args.next().ok_or_else(|| {
                    ViewerError::Startup(format!("{arg} requires a file argument"))
                })?;
                config_path = Some(path);
            } else if source.is_none() {
                source = Some(arg);
            } else {
                return Err(ViewerError::Startup(format!("unexpected argument '{arg}'")));
            }
        }

        let mut cfg = match config_path {
            Some(path) => Self::from_yaml_file(path)?,
            None => Self::default(),
        };
        if let Some(src) = source {
            cfg.source = Some(DataSource::from_arg(&src));
        }
        Ok(cfg)
    }
}
