//! Error types for the compilation pipeline.

use std::path::PathBuf;

use iconbake_catalog::CatalogError;
use iconbake_index::IndexError;
use thiserror::Error;

/// Errors that abort a build.
#[derive(Debug, Error)]
pub enum BuildError {
	/// The category document does not exist. Checked before anything else runs.
	#[error("category document {0} is missing; add it to the project root")]
	MissingInput(PathBuf),

	/// Reading or parsing a catalog or the category document failed.
	#[error(transparent)]
	Catalog(#[from] CatalogError),

	/// The last entry of an icon's change history is not a semantic version.
	#[error("icon '{icon}' has invalid change version '{version}': {error}")]
	InvalidVersion {
		/// Name of the offending icon.
		icon: String,
		/// The version string as found in the catalog.
		version: String,
		/// The underlying parse error.
		error: semver::Error,
	},

	/// Writing a transformed glyph failed.
	#[error("failed to write asset {path}: {error}")]
	Asset {
		/// Target file or directory.
		path: PathBuf,
		/// The underlying I/O error.
		error: std::io::Error,
	},

	/// Building the search index failed.
	#[error(transparent)]
	Index(#[from] IndexError),

	/// Serializing a settings document failed.
	#[error("failed to serialize settings document: {0}")]
	SettingsFormat(#[from] serde_yaml::Error),

	/// Writing a settings document failed.
	#[error("failed to write settings {path}: {error}")]
	Settings {
		/// Target file or directory.
		path: PathBuf,
		/// The underlying I/O error.
		error: std::io::Error,
	},
}

/// Result type for build operations.
pub type Result<T> = std::result::Result<T, BuildError>;
