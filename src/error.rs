//! Error type shared by the loader, importers and startup code.

use thiserror::Error;

/// Everything that can go wrong while loading data or starting the viewer.
#[derive(Debug, Error)]
pub enum ViewerError {
    /// The server answered with a non-success HTTP status.
    #[error("Network response was not ok: {status} - {body}")]
    Network { status: u16, body: String },

    /// The response body (or file) is not a valid measurement dataset.
    #[error("failed to parse measurement data: {0}")]
    Parse(#[from] serde_json::Error),

    /// The request never produced a response (DNS, connection, TLS, ...).
    #[error("request failed: {0}")]
    Transport(String),

    /// A required host element (window, document, canvas) could not be found.
    #[error("no element with id '{id}' found")]
    ElementNotFound { id: String },

    /// A CSV header cell is not of the form `name (unit)`.
    #[error("invalid CSV header field '{0}', expected \"name (unit)\"")]
    CsvField(String),

    /// Two variables share a name, so their readings would collide.
    #[error("Duplicate variable names! '{0}' appears more than once")]
    DuplicateVariable(String),

    #[error(transparent)]
    Csv(#[from] csv::Error),

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error("invalid configuration: {0}")]
    Config(#[from] serde_yaml::Error),

    /// The UI runner refused to start.
    #[error("failed to start viewer: {0}")]
    Startup(String),
}

pub type Result<T> = std::result::Result<T, ViewerError>;
