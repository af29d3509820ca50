// Error types shared by the route table, storage backends and the booking store.

use std::path::PathBuf;

/// Navigation failures.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum RouteError {
    #[error("no route matches '{0}'")]
    NotFound(String),

    #[error("page '{0}' is not in the route table")]
    UnknownPage(String),

    #[error("page '{page}' needs parameter '{param}'")]
    MissingParam { page: String, param: String },
}

/// Failures of a key-value storage backend.
#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    #[error("storage i/o failed at {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid storage key '{0}'")]
    InvalidKey(String),
}

/// Failures surfaced by booking store mutations.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error(transparent)]
    Storage(#[from] StorageError),

    #[error("failed to serialize booking: {0}")]
    Serialize(#[from] serde_json::Error),
}

pub type StoreResult<T> = Result<T, StoreError>;

/// Failures saving the settings file.
#[derive(Debug, thiserror::Error)]
pub enum SettingsError {
    #[error(transparent)]
    Storage(#[from] StorageError),

    #[error("failed to serialize settings: {0}")]
    Serialize(#[from] serde_json::Error),
}
