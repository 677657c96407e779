//! Error types for catalog and category loading.

use std::path::PathBuf;

use thiserror::Error;

/// Errors that can occur while reading or interpreting catalog inputs.
#[derive(Debug, Error)]
pub enum CatalogError {
	/// Error reading an input document.
	#[error("I/O error reading {path}: {error}")]
	Io {
		/// Path to the file that failed to read.
		path: PathBuf,
		/// The underlying I/O error.
		error: std::io::Error,
	},

	/// An icon catalog is not valid JSON.
	#[error("failed to parse catalog {path}: {error}")]
	Json {
		/// Path to the catalog.
		path: PathBuf,
		/// The underlying parse error.
		error: serde_json::Error,
	},

	/// The category document is not valid YAML or has the wrong shape.
	#[error("failed to parse category document {path}: {error}")]
	Yaml {
		/// Path to the category document.
		path: PathBuf,
		/// The underlying parse error.
		error: serde_yaml::Error,
	},

	/// A catalog document whose root is not an object.
	#[error("catalog root must be an object keyed by icon name, found {0}")]
	NotAnObject(&'static str),

	/// A single icon definition does not match the expected shape.
	#[error("malformed definition for icon '{icon}': {error}")]
	Malformed {
		/// Name of the offending icon.
		icon: String,
		/// The underlying deserialization error.
		error: serde_json::Error,
	},
}

/// Result type for catalog operations.
pub type Result<T> = std::result::Result<T, CatalogError>;
