//! Category taxonomy and the inverse icon lookup.

use std::fs;
use std::path::Path;

use indexmap::IndexMap;
use rustc_hash::FxHashMap as HashMap;
use serde::Deserialize;

use crate::{CatalogError, Result};

/// A category as stored in the index.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Category {
	/// Normalized key, see [`normalize_key`].
	pub key: String,
	pub label: String,
	/// Member icon names in document order.
	pub icons: Vec<String>,
}

#[derive(Debug, Deserialize)]
struct CategorySource {
	#[serde(default)]
	label: Option<String>,
	#[serde(default)]
	icons: Option<Vec<String>>,
}

/// Category records plus the icon to categories mapping.
#[derive(Debug, Clone, Default)]
pub struct CategoryIndex {
	categories: IndexMap<String, Category>,
	by_icon: HashMap<String, Vec<String>>,
}

/// Replaces hyphens with underscores so the key is usable inside selectors.
pub fn normalize_key(key: &str) -> String {
	key.replace('-', "_")
}

impl CategoryIndex {
	/// Reads and indexes the category document at `path`.
	pub fn load(path: &Path) -> Result<Self> {
		let content = fs::read_to_string(path).map_err(|error| CatalogError::Io {
			path: path.to_path_buf(),
			error,
		})?;
		Self::from_yaml(&content).map_err(|error| CatalogError::Yaml {
			path: path.to_path_buf(),
			error,
		})
	}

	/// Indexes a category document given as YAML text.
	///
	/// An empty document yields an empty index.
	pub fn from_yaml(source: &str) -> serde_yaml::Result<Self> {
		let sources: Option<IndexMap<String, CategorySource>> = serde_yaml::from_str(source)?;

		let mut index = Self::default();
		for (key, source) in sources.unwrap_or_default() {
			index.insert(&key, source.label.unwrap_or_default(), source.icons.unwrap_or_default());
		}
		Ok(index)
	}

	/// Adds a category under its normalized key.
	///
	/// A key that normalizes onto an existing one replaces that record in place.
	/// Member icons are linked to the key either way, each icon listing a key at
	/// most once, in the order the categories were inserted.
	pub fn insert(&mut self, key: &str, label: String, icons: Vec<String>) {
		let key = normalize_key(key);

		for icon in &icons {
			let keys = self.by_icon.entry(icon.clone()).or_default();
			if !keys.contains(&key) {
				keys.push(key.clone());
			}
		}

		self.categories.insert(key.clone(), Category { key, label, icons });
	}

	/// Normalized keys of the categories `icon` belongs to.
	pub fn categories_of(&self, icon: &str) -> &[String] {
		self.by_icon.get(icon).map(Vec::as_slice).unwrap_or_default()
	}

	pub fn get(&self, key: &str) -> Option<&Category> {
		self.categories.get(key)
	}

	/// Category records in document order.
	pub fn iter(&self) -> impl Iterator<Item = &Category> {
		self.categories.values()
	}

	pub fn len(&self) -> usize {
		self.categories.len()
	}

	pub fn is_empty(&self) -> bool {
		self.categories.is_empty()
	}
}
