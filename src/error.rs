use std::path::PathBuf;

use thiserror::Error;

/// Errors raised while loading a blocklist or exporting reports.
///
/// Lookups never fail; only the explicit load step and JSON export can.
#[derive(Error, Debug)]
pub enum BlocklistError {
    #[error("Blocklist source not configured: {0}")]
    NotConfigured(String),

    #[error("Failed to read blocklist file {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Blocklist file {} is not valid UTF-8", .path.display())]
    InvalidEncoding { path: PathBuf },

    #[error("Serialization error: {0}")]
    Serialize(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, BlocklistError>;
