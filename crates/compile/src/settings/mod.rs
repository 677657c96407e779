//! Settings documents for the consuming package.
//!
//! Two YAML files are written into the configuration directory: one carrying the
//! resolved catalog version, one carrying an editor snippet offering every
//! searchable style key.

use std::fs;
use std::path::{Path, PathBuf};

use semver::Version;
use serde_json::{Value, json};
use tracing::info;

use crate::{BuildError, Result};

pub const VERSION_FILE: &str = "Settings.Version.yaml";
pub const CONTENT_BOX_FILE: &str = "Settings.ContentBox.yaml";

const PACKAGE: &str = "Carbon.Fontawesome";
const SNIPPET_PACKAGE: &str = "Carbon.CodePen";
const DOCUMENTATION: &str = "Add icon from [Fontawesome 7 Free](https://fontawesome.com/search)";

/// Document exposing `version` to the UI frontend configuration.
pub fn version_document(version: &Version) -> Value {
	frontend_configuration(json!({
		PACKAGE: { "version": version.to_string() }
	}))
}

/// Document registering the icon snippet with the code editor package.
pub fn content_box_document<S: AsRef<str>>(styles: &[S]) -> Value {
	let choices = styles.iter().map(AsRef::as_ref).collect::<Vec<_>>().join(",");
	let snippet = format!("<{PACKAGE}:Icon icon=\"${{1|{choices}|}}:${{2}}\" />");

	frontend_configuration(json!({
		SNIPPET_PACKAGE: {
			"afx": {
				"fusionObjects": {
					"Fontawesome": {
						"documentation": DOCUMENTATION,
						"snippet": snippet,
					}
				}
			}
		}
	}))
}

fn frontend_configuration(inner: Value) -> Value {
	json!({ "Neos": { "Neos": { "Ui": { "frontendConfiguration": inner } } } })
}

/// Writes both settings documents into `dir`, creating it if needed.
pub fn write_settings<S: AsRef<str>>(dir: &Path, version: &Version, styles: &[S]) -> Result<Vec<PathBuf>> {
	fs::create_dir_all(dir).map_err(|error| BuildError::Settings {
		path: dir.to_path_buf(),
		error,
	})?;
	info!(dir = %dir.display(), "writing settings");

	let mut written = Vec::with_capacity(2);
	for (file, document) in [
		(VERSION_FILE, version_document(version)),
		(CONTENT_BOX_FILE, content_box_document(styles)),
	] {
		let path = dir.join(file);
		let yaml = serde_yaml::to_string(&document)?;
		fs::write(&path, yaml).map_err(|error| BuildError::Settings { path: path.clone(), error })?;
		written.push(path);
	}
	Ok(written)
}

#[cfg(test)]
mod tests;
