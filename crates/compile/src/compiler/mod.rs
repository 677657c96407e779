//! Icon compilation.
//!
//! # Purpose
//!
//! Walks the merged catalog once and folds every glyph variant into the
//! aggregates the index is built from: the global style list, style records,
//! pack records, style selectors, the finalized icon rows and the resolved
//! catalog version.
//!
//! # Mental Model
//!
//! [`Compiler`] owns a [`Compilation`] accumulator and borrows the
//! [`CategoryIndex`], which must be complete before the first icon is visited.
//! Each [`Compiler::compile_icon`] call:
//!
//! 1. Raises [`Compilation::version`] to the icon's latest change if greater.
//! 2. For every variant with markup: counts it, writes its asset when an
//!    [`AssetWriter`] is attached, and (unless the icon is hidden) registers
//!    its [`StyleKey`] with the aggregates.
//! 3. Unless hidden, appends an [`IconRecord`].
//!
//! # Invariants
//!
//! - [`Compilation::glyphs`] counts every variant with markup exactly once,
//!   hidden icons included.
//! - Hidden icons touch no aggregate: no style list entry, no selector, no
//!   style or pack record, and no brands count. Their assets are still written.
//! - The first occurrence of a [`StyleKey`] fixes its selector record.
//! - The brands pack exists from the start and brand glyphs never create a
//!   style record.
//! - Every ordered collection keeps first-seen order and holds no duplicates.

use iconbake_catalog::{Catalog, CategoryIndex, IconDefinition};
use iconbake_index::{CategoryRow, Dataset, IconRow, PackRow, SelectorRow, StyleRow};
use indexmap::{IndexMap, IndexSet};
use semver::Version;
use tracing::{debug, trace};

use crate::assets::AssetWriter;
use crate::style::{BRANDS, DEFAULT_FAMILY, StyleKey, title_case};
use crate::{BuildError, Result};

/// Finalized, searchable icon.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IconRecord {
	pub name: String,
	pub label: String,
	/// Search terms, alias names and category keys, deduplicated.
	pub keywords: IndexSet<String>,
	/// Selectors of the styles the icon is available in.
	pub styles: IndexSet<String>,
	/// Normalized category keys.
	pub categories: Vec<String>,
}

/// A bare style name and the style keys using it across families.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StyleRecord {
	pub name: String,
	pub label: String,
	pub styles: IndexSet<StyleKey>,
}

/// A family with its glyph count and style keys.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PackRecord {
	pub name: String,
	pub label: String,
	pub count: usize,
	pub styles: IndexSet<StyleKey>,
}

impl PackRecord {
	fn new(family: &str) -> Self {
		Self {
			name: family.to_owned(),
			label: title_case(family),
			count: 0,
			styles: IndexSet::new(),
		}
	}

	fn brands() -> Self {
		let mut pack = Self::new(BRANDS);
		pack.styles.insert(StyleKey::new(DEFAULT_FAMILY, BRANDS));
		pack
	}
}

/// Selector metadata for one style key.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectorRecord {
	pub key: StyleKey,
	pub label: String,
	/// Owning family.
	pub pack: String,
	/// Bare style name.
	pub style: String,
	pub selector: String,
}

/// Accumulated result of compiling a catalog.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Compilation {
	/// Greatest latest-change version seen, `0.0.0` if none.
	pub version: Version,
	/// Variants with markup, hidden icons included.
	pub glyphs: usize,
	/// Style keys of searchable icons in first-seen order.
	pub styles: IndexSet<StyleKey>,
	pub icons: Vec<IconRecord>,
	pub style_records: IndexMap<String, StyleRecord>,
	pub packs: IndexMap<String, PackRecord>,
	pub selectors: IndexMap<StyleKey, SelectorRecord>,
}

impl Default for Compilation {
	fn default() -> Self {
		let mut packs = IndexMap::new();
		packs.insert(BRANDS.to_owned(), PackRecord::brands());

		Self {
			version: Version::new(0, 0, 0),
			glyphs: 0,
			styles: IndexSet::new(),
			icons: Vec::new(),
			style_records: IndexMap::new(),
			packs,
			selectors: IndexMap::new(),
		}
	}
}

impl Compilation {
	/// Registers one variant of a searchable icon with every aggregate.
	fn register(&mut self, key: &StyleKey, family: &str, style: &str) {
		self.styles.insert(key.clone());

		self.selectors.entry(key.clone()).or_insert_with(|| SelectorRecord {
			key: key.clone(),
			label: key.label(),
			pack: family.to_owned(),
			style: style.to_owned(),
			selector: key.selector(),
		});

		if style == BRANDS {
			self.packs.entry(BRANDS.to_owned()).or_insert_with(PackRecord::brands).count += 1;
			return;
		}

		self.style_records
			.entry(style.to_owned())
			.or_insert_with(|| StyleRecord {
				name: style.to_owned(),
				label: title_case(style),
				styles: IndexSet::new(),
			})
			.styles
			.insert(key.clone());

		let pack = self.packs.entry(family.to_owned()).or_insert_with(|| PackRecord::new(family));
		pack.count += 1;
		pack.styles.insert(key.clone());
	}

	/// Flattens the aggregates into index rows.
	pub fn dataset(&self, categories: &CategoryIndex) -> Dataset {
		Dataset {
			icons: self
				.icons
				.iter()
				.map(|icon| IconRow {
					name: icon.name.clone(),
					label: icon.label.clone(),
					keywords: icon.keywords.iter().cloned().collect(),
					styles: icon.styles.iter().cloned().collect(),
					categories: icon.categories.clone(),
				})
				.collect(),
			categories: categories
				.iter()
				.map(|category| CategoryRow {
					name: category.key.clone(),
					label: category.label.clone(),
					icons: category.icons.clone(),
				})
				.collect(),
			styles: self
				.style_records
				.values()
				.map(|style| StyleRow {
					name: style.name.clone(),
					label: style.label.clone(),
					styles: keys_to_strings(&style.styles),
				})
				.collect(),
			packs: self
				.packs
				.values()
				.map(|pack| PackRow {
					name: pack.name.clone(),
					label: pack.label.clone(),
					count: i64::try_from(pack.count).unwrap_or(i64::MAX),
					styles: keys_to_strings(&pack.styles),
				})
				.collect(),
			selectors: self
				.selectors
				.values()
				.map(|selector| SelectorRow {
					name: selector.key.to_string(),
					label: selector.label.clone(),
					pack: selector.pack.clone(),
					style: selector.style.clone(),
					selector: selector.selector.clone(),
				})
				.collect(),
		}
	}

	/// The global style list as plain strings.
	pub fn style_list(&self) -> Vec<String> {
		keys_to_strings(&self.styles)
	}
}

fn keys_to_strings(keys: &IndexSet<StyleKey>) -> Vec<String> {
	keys.iter().map(ToString::to_string).collect()
}

/// Folds icons into a [`Compilation`].
pub struct Compiler<'a> {
	categories: &'a CategoryIndex,
	assets: Option<AssetWriter>,
	state: Compilation,
}

impl<'a> Compiler<'a> {
	pub fn new(categories: &'a CategoryIndex) -> Self {
		Self {
			categories,
			assets: None,
			state: Compilation::default(),
		}
	}

	/// Writes transformed glyphs through `writer` while compiling.
	pub fn with_assets(mut self, writer: AssetWriter) -> Self {
		self.assets = Some(writer);
		self
	}

	/// Compiles every icon of `catalog` in catalog order.
	pub fn compile_catalog(mut self, catalog: &Catalog) -> Result<Compilation> {
		for (name, icon) in catalog.iter() {
			self.compile_icon(name, icon)?;
		}
		Ok(self.finish())
	}

	/// Compiles a single icon into the accumulator.
	pub fn compile_icon(&mut self, name: &str, icon: &IconDefinition) -> Result<()> {
		self.observe_version(name, icon.latest_change())?;

		let hidden = icon.hide_in_search;
		let mut selectors = IndexSet::new();

		for variant in icon.variants() {
			self.state.glyphs += 1;
			let key = StyleKey::new(variant.family, variant.style);

			if let Some(writer) = &self.assets {
				let path = writer.write(&key, name, variant.raw)?;
				trace!(icon = name, path = %path.display(), "wrote glyph");
			}

			if hidden {
				continue;
			}

			selectors.insert(key.selector());
			self.state.register(&key, variant.family, variant.style);
		}

		if hidden {
			debug!(icon = name, "skipping icon hidden in search");
			return Ok(());
		}

		let categories = self.categories.categories_of(name);
		let keywords = icon.terms().iter().chain(icon.alias_names()).chain(categories).cloned().collect();

		self.state.icons.push(IconRecord {
			name: name.to_owned(),
			label: icon.label_or(name).to_owned(),
			keywords,
			styles: selectors,
			categories: categories.to_vec(),
		});
		Ok(())
	}

	/// Returns the accumulated result.
	pub fn finish(self) -> Compilation {
		self.state
	}

	fn observe_version(&mut self, icon: &str, latest: Option<&str>) -> Result<()> {
		let Some(raw) = latest else {
			return Ok(());
		};

		let version = parse_version(raw).map_err(|error| BuildError::InvalidVersion {
			icon: icon.to_owned(),
			version: raw.to_owned(),
			error,
		})?;

		// Precedence ignores build metadata.
		if version.cmp_precedence(&self.state.version).is_gt() {
			self.state.version = version;
		}
		Ok(())
	}
}

/// Parses a semantic version, tolerating surrounding whitespace and a leading `v`.
pub fn parse_version(raw: &str) -> std::result::Result<Version, semver::Error> {
	let trimmed = raw.trim();
	Version::parse(trimmed.strip_prefix('v').unwrap_or(trimmed))
}

#[cfg(test)]
mod tests;
