use std::path::PathBuf;

use thiserror::Error;

/// Errors that can occur while writing the index.
#[derive(Debug, Error)]
pub enum IndexError {
	#[error("failed to create index directory {path}: {error}")]
	CreateDir { path: PathBuf, error: std::io::Error },
	#[error("failed to open index database {path}: {error}")]
	Open { path: PathBuf, error: rusqlite::Error },
	#[error("SQLite error: {0}")]
	Sqlite(#[from] rusqlite::Error),
}

/// Result type for index operations.
pub type Result<T> = std::result::Result<T, IndexError>;
