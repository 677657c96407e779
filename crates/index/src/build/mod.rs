//! Transactional index build.

use std::fs;
use std::path::Path;

use rusqlite::{Connection, Transaction, params};
use tracing::{debug, info};

use crate::encode::{bracketed, bracketed_or_null, comma_joined};
use crate::{Dataset, IndexError, Result};

const SCHEMA: &str = "
	DROP TABLE IF EXISTS icons;
	DROP TABLE IF EXISTS categories;
	DROP TABLE IF EXISTS styles;
	DROP TABLE IF EXISTS packs;
	DROP TABLE IF EXISTS styleSelector;

	CREATE VIRTUAL TABLE icons USING fts5(name, label, keywords, styles, categories);

	CREATE TABLE categories(
		name TEXT PRIMARY KEY,
		label TEXT NOT NULL,
		icons TEXT NOT NULL
	);

	CREATE TABLE styles(
		name TEXT PRIMARY KEY,
		label TEXT NOT NULL,
		styles TEXT NOT NULL
	);

	CREATE TABLE packs(
		name TEXT PRIMARY KEY,
		label TEXT NOT NULL,
		count INTEGER NOT NULL,
		styles TEXT NOT NULL
	);

	CREATE TABLE styleSelector(
		name TEXT PRIMARY KEY,
		label TEXT NOT NULL,
		pack TEXT NOT NULL,
		style TEXT NOT NULL,
		selector TEXT NOT NULL
	);
";

/// Opens (or creates) the database at `path` and builds the index into it.
///
/// The parent directory is created if needed.
pub fn write(path: &Path, dataset: &Dataset) -> Result<()> {
	if let Some(parent) = path.parent()
		&& !parent.as_os_str().is_empty()
	{
		fs::create_dir_all(parent).map_err(|error| IndexError::CreateDir {
			path: parent.to_path_buf(),
			error,
		})?;
	}

	let mut conn = Connection::open(path).map_err(|error| IndexError::Open {
		path: path.to_path_buf(),
		error,
	})?;
	info!(path = %path.display(), "writing index");
	build(&mut conn, dataset)
}

/// Replaces all index tables on `conn` with `dataset` in a single transaction.
///
/// On error the transaction is rolled back and `conn` keeps its previous
/// contents.
pub fn build(conn: &mut Connection, dataset: &Dataset) -> Result<()> {
	let tx = conn.transaction()?;

	tx.execute_batch(SCHEMA)?;
	insert_icons(&tx, dataset)?;
	tx.execute("INSERT INTO icons (icons) VALUES ('optimize')", [])?;
	insert_lookups(&tx, dataset)?;

	tx.commit()?;
	debug!(
		icons = dataset.icons.len(),
		categories = dataset.categories.len(),
		styles = dataset.styles.len(),
		packs = dataset.packs.len(),
		selectors = dataset.selectors.len(),
		"index committed"
	);
	Ok(())
}

fn insert_icons(tx: &Transaction<'_>, dataset: &Dataset) -> Result<()> {
	let mut stmt = tx.prepare("INSERT INTO icons (name, label, keywords, styles, categories) VALUES (?1, ?2, ?3, ?4, ?5)")?;
	for icon in &dataset.icons {
		stmt.execute(params![
			icon.name,
			icon.label,
			comma_joined(&icon.keywords),
			comma_joined(&icon.styles),
			bracketed_or_null(&icon.categories),
		])?;
	}
	Ok(())
}

fn insert_lookups(tx: &Transaction<'_>, dataset: &Dataset) -> Result<()> {
	let mut stmt = tx.prepare("INSERT INTO categories (name, label, icons) VALUES (?1, ?2, ?3)")?;
	for category in &dataset.categories {
		stmt.execute(params![category.name, category.label, bracketed(&category.icons)])?;
	}

	let mut stmt = tx.prepare("INSERT INTO styles (name, label, styles) VALUES (?1, ?2, ?3)")?;
	for style in &dataset.styles {
		stmt.execute(params![style.name, style.label, bracketed(&style.styles)])?;
	}

	let mut stmt = tx.prepare("INSERT INTO packs (name, label, count, styles) VALUES (?1, ?2, ?3, ?4)")?;
	for pack in &dataset.packs {
		stmt.execute(params![pack.name, pack.label, pack.count, bracketed(&pack.styles)])?;
	}

	let mut stmt = tx.prepare("INSERT INTO styleSelector (name, label, pack, style, selector) VALUES (?1, ?2, ?3, ?4, ?5)")?;
	for selector in &dataset.selectors {
		stmt.execute(params![selector.name, selector.label, selector.pack, selector.style, selector.selector])?;
	}

	Ok(())
}
