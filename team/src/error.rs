use thiserror::Error;

use crate::team::TeamId;

/// Errors raised by [`TeamStore`](crate::TeamStore) operations
///
/// None of these represent I/O failure; persistence errors are logged by the
/// store and never surfaced here.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TeamError {
    #[error("Invalid team name: {0}")]
    Validation(String),

    #[error("A team named \"{0}\" already exists")]
    DuplicateName(String),

    #[error("Team limit reached: at most {max} teams")]
    Limit { max: usize },

    #[error("Team not found: {0}")]
    NotFound(TeamId),
}

/// Errors raised by a [`TeamStorage`](crate::TeamStorage) backend
#[derive(Error, Debug)]
pub enum StorageError {
    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Json(#[from] serde_json::Error),
}
