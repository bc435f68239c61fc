use std::path::PathBuf;

use thiserror::Error;

/// Errors raised by the user store.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("could not open database {}", .location.display())]
    Connection {
        location: PathBuf,
        #[source]
        source: sqlx::Error,
    },

    #[error("unknown column {0:?}")]
    UnknownColumn(String),

    #[error("row has {found} fields, expected {expected}")]
    FieldCount { expected: usize, found: usize },

    #[error("database error")]
    Sqlx(#[from] sqlx::Error),
}

/// Errors raised while reading the import file.
#[derive(Debug, Error)]
pub enum ImportError {
    #[error("could not open import file {}", .path.display())]
    Open {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("malformed csv")]
    Parse(#[from] csv::Error),
}
