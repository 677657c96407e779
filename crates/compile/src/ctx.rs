//! Build context: project root, input/output layout and run mode.

use std::path::{Path, PathBuf};

use serde::Deserialize;

/// Input and output paths, relative to the project root.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Layout {
	/// Category document (YAML).
	pub categories: PathBuf,
	/// Upstream icon catalog (JSON).
	pub catalog: PathBuf,
	/// Local override catalog (JSON); optional on disk.
	pub overrides: PathBuf,
	/// Private resources; the index lives here.
	pub private: PathBuf,
	/// Public resources; glyph assets live here.
	pub public: PathBuf,
	/// Settings documents.
	pub configuration: PathBuf,
}

impl Default for Layout {
	fn default() -> Self {
		Self {
			categories: PathBuf::from("categories.yml"),
			catalog: PathBuf::from("icon-families.json"),
			overrides: PathBuf::from("custom-icons.json"),
			private: PathBuf::from("Resources/Private"),
			public: PathBuf::from("Resources/Public"),
			configuration: PathBuf::from("Configuration"),
		}
	}
}

/// Everything a build needs to know about where it runs.
#[derive(Debug, Clone)]
pub struct BuildCtx {
	pub root: PathBuf,
	pub layout: Layout,
	/// Whether transformed glyphs are written to the public directory.
	pub write_assets: bool,
}

impl BuildCtx {
	/// Creates a context for `root` with the default layout, writing assets.
	pub fn new(root: impl Into<PathBuf>) -> Self {
		Self {
			root: root.into(),
			layout: Layout::default(),
			write_assets: true,
		}
	}

	/// Replaces the layout.
	pub fn layout(mut self, layout: Layout) -> Self {
		self.layout = layout;
		self
	}

	/// Sets whether transformed glyphs are written.
	pub fn write_assets(mut self, on: bool) -> Self {
		self.write_assets = on;
		self
	}

	/// Resolves a layout path against the root. Absolute paths are kept as is.
	pub fn path(&self, rel: &Path) -> PathBuf {
		self.root.join(rel)
	}

	pub fn categories_path(&self) -> PathBuf {
		self.path(&self.layout.categories)
	}

	pub fn catalog_path(&self) -> PathBuf {
		self.path(&self.layout.catalog)
	}

	pub fn overrides_path(&self) -> PathBuf {
		self.path(&self.layout.overrides)
	}

	pub fn database_path(&self) -> PathBuf {
		self.path(&self.layout.private).join("database.sqlite")
	}

	pub fn public_dir(&self) -> PathBuf {
		self.path(&self.layout.public)
	}

	pub fn configuration_dir(&self) -> PathBuf {
		self.path(&self.layout.configuration)
	}
}
