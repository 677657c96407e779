//! Optional TOML configuration.
//!
//! ```toml
//! [layout]
//! categories = "data/categories.yml"
//! public = "Resources/Public/Icons"
//! ```

use std::fs;
use std::path::{Path, PathBuf};

use iconbake_compile::Layout;
use serde::Deserialize;
use thiserror::Error;

pub const DEFAULT_CONFIG_FILE: &str = "iconbake.toml";

/// Errors that can occur when loading the configuration file.
#[derive(Debug, Error)]
pub enum ConfigError {
	#[error("I/O error reading {path}: {error}")]
	Io { path: PathBuf, error: std::io::Error },
	#[error("invalid configuration in {path}: {error}")]
	Parse { path: PathBuf, error: toml::de::Error },
}

#[derive(Debug, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
	pub layout: Layout,
}

impl Config {
	pub fn load(path: &Path) -> Result<Self, ConfigError> {
		let content = fs::read_to_string(path).map_err(|error| ConfigError::Io {
			path: path.to_path_buf(),
			error,
		})?;
		toml::from_str(&content).map_err(|error| ConfigError::Parse {
			path: path.to_path_buf(),
			error,
		})
	}
}
