use std::path::PathBuf;

use thiserror::Error;

/// Error type for key-value store operations.
#[derive(Debug, Error)]
pub enum StoreError {
    /// The underlying lock was poisoned (a thread panicked while holding it).
    #[error("store lock poisoned during {0}")]
    LockPoisoned(&'static str),

    /// Reading or writing the backing file failed.
    #[error("failed to {operation} store file {path}")]
    Io {
        operation: &'static str,
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A value could not be encoded into its stored string form.
    #[error("failed to encode value for key {key}")]
    Encode {
        key: String,
        #[source]
        source: serde_json::Error,
    },

    /// The backing file could not be encoded or decoded.
    #[error("store file {path} is not a JSON object of strings")]
    Serde {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}
