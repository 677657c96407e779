use std::path::PathBuf;

use iconbake_catalog::{CategoryIndex, load_catalog};
use semver::Version;
use tracing::info;

use crate::assets::AssetWriter;
use crate::compiler::Compiler;
use crate::ctx::BuildCtx;
use crate::settings::write_settings;
use crate::{BuildError, Result};

/// Summary of a finished build.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BuildReport {
	/// Glyph variants processed, hidden icons included.
	pub glyphs: usize,
	/// Icons written to the search table.
	pub icons: usize,
	pub version: Version,
	/// Global style list in first-seen order.
	pub styles: Vec<String>,
	pub database: PathBuf,
}

/// Runs every stage: categories, catalog merge, compilation (with assets when
/// enabled), index and settings.
///
/// Fails with [`BuildError::MissingInput`] before touching anything else when
/// the category document does not exist.
pub fn run(ctx: &BuildCtx) -> Result<BuildReport> {
	let categories_path = ctx.categories_path();
	if !categories_path.exists() {
		return Err(BuildError::MissingInput(categories_path));
	}

	info!(path = %categories_path.display(), "processing categories");
	let categories = CategoryIndex::load(&categories_path)?;

	info!(write_assets = ctx.write_assets, "processing icons");
	let catalog = load_catalog(&ctx.catalog_path(), &ctx.overrides_path())?;
	let mut compiler = Compiler::new(&categories);
	if ctx.write_assets {
		compiler = compiler.with_assets(AssetWriter::new(ctx.public_dir()));
	}
	let compilation = compiler.compile_catalog(&catalog)?;

	let database = ctx.database_path();
	info!(path = %database.display(), icons = compilation.icons.len(), "writing index");
	iconbake_index::write(&database, &compilation.dataset(&categories))?;

	let styles = compilation.style_list();
	info!(styles = styles.len(), "writing settings");
	write_settings(&ctx.configuration_dir(), &compilation.version, &styles)?;

	info!(glyphs = compilation.glyphs, version = %compilation.version, "processed glyphs");
	Ok(BuildReport {
		glyphs: compilation.glyphs,
		icons: compilation.icons.len(),
		version: compilation.version,
		styles,
		database,
	})
}
