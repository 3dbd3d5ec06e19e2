use std::path::PathBuf;

use thiserror::Error;

/// Errors surfaced by the screening core and its configuration layer.
///
/// Only configuration problems are errors here. Empty or unreadable input text
/// is not an error anywhere in the core; it degrades to neutral results.
#[derive(Debug, Error)]
pub enum ScreenError {
    /// Role optimization needs at least one reference document
    #[error("no reference documents were supplied for role optimization")]
    NoReferenceDocuments,

    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("failed to read {path}: {source}")]
    ConfigIo {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse configuration: {0}")]
    ConfigParse(#[from] serde_json::Error),

    #[error("failed to encode report: {0}")]
    ReportEncode(String),
}

pub type Result<T> = std::result::Result<T, ScreenError>;
