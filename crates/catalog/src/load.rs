use std::fs;
use std::path::Path;

use serde_json::{Map, Value};
use tracing::{debug, warn};

use crate::icon::Catalog;
use crate::merge::merge_catalogs;
use crate::{CatalogError, Result};

/// Reads a JSON catalog document without interpreting it.
pub fn read_catalog(path: &Path) -> Result<Value> {
	let content = fs::read_to_string(path).map_err(|error| CatalogError::Io {
		path: path.to_path_buf(),
		error,
	})?;
	serde_json::from_str(&content).map_err(|error| CatalogError::Json {
		path: path.to_path_buf(),
		error,
	})
}

/// Reads the override catalog, treating a missing file as an empty one.
pub fn read_overrides(path: &Path) -> Result<Value> {
	if !path.exists() {
		warn!(path = %path.display(), "override catalog not found, using base catalog only");
		return Ok(Value::Object(Map::new()));
	}
	read_catalog(path)
}

/// Reads the base and override catalogs and merges them, overrides winning.
pub fn load_catalog(base: &Path, overrides: &Path) -> Result<Catalog> {
	let catalog = merge_catalogs(read_catalog(base)?, read_overrides(overrides)?)?;
	debug!(icons = catalog.len(), base = %base.display(), overrides = %overrides.display(), "merged catalogs");
	Ok(catalog)
}
