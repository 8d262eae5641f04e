use std::path::PathBuf;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum PatcherError {
    #[error("Configuration error: {0}")]
    Configuration(String),
    #[error("Invalid mint authority: {0}")]
    InvalidAuthority(String),
    #[error("Failed to fetch {symbol} account {address}: {message}")]
    Fetch {
        symbol: String,
        address: String,
        message: String,
    },
    #[error("Malformed account snapshot {path:?}: {reason}")]
    MalformedSnapshot { path: PathBuf, reason: String },
    #[error("Invalid base64 account data: {0}")]
    InvalidBase64(#[from] base64::DecodeError),
    #[error("Malformed payload: {field} requires {required} bytes, payload has {actual}")]
    MalformedPayload {
        field: &'static str,
        required: usize,
        actual: usize,
    },
    #[error("Field {field} is {expected} bytes wide, got {actual}")]
    FieldWidth {
        field: &'static str,
        expected: usize,
        actual: usize,
    },
    #[error("I/O error on {path:?}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl PatcherError {
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        PatcherError::Io {
            path: path.into(),
            source,
        }
    }
}
