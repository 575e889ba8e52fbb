//! Error types for temp-heatmap operations.

use thiserror::Error;

/// Result type alias for temp-heatmap operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while loading a dataset or rendering a heat map.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum Error {
    /// The dataset request could not be sent or its body could not be read.
    #[cfg(feature = "fetch")]
    #[error("Dataset fetch failed: {url}: {source}")]
    Fetch {
        /// URL that was requested.
        url: String,
        /// Underlying transport error.
        #[source]
        source: reqwest::Error,
    },

    /// The server answered with a non-success status.
    #[error("Dataset fetch failed: {url}: HTTP {status}")]
    HttpStatus {
        /// URL that was requested.
        url: String,
        /// Status code returned by the server.
        status: u16,
    },

    /// The dataset contains no observations, so no scale can be built.
    #[error("Dataset has no observations")]
    EmptyDataset,

    /// No cell exists for the requested year and month.
    #[error("No cell for {year}-{month:02}")]
    UnknownCell {
        /// Requested year.
        year: i32,
        /// Requested month (1-12).
        month: u32,
    },

    /// Error importing CSV observations.
    #[error("CSV import error at line {line}: {reason}")]
    CsvImport {
        /// Line number where the error occurred.
        line: usize,
        /// Reason for the failure.
        reason: String,
    },

    /// Invalid layout configuration.
    #[error("Config error: {0}")]
    Config(String),

    /// I/O error wrapper.
    #[error(transparent)]
    Io(#[from] std::io::Error),

    /// JSON serialization/deserialization error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// CSV error.
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),
}
