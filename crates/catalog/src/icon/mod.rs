//! Typed icon definitions.

use indexmap::IndexMap;
use serde::{Deserialize, Deserializer};
use serde_json::Value;

use crate::merge::json_kind;
use crate::{CatalogError, Result};

/// Merged set of icon definitions, in catalog order.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
	icons: IndexMap<String, IconDefinition>,
}

impl Catalog {
	/// Parses a merged catalog document.
	///
	/// A `null` definition is read as an empty one. Any other shape mismatch is
	/// reported against the offending icon and fails the whole catalog.
	pub fn from_value(value: Value) -> Result<Self> {
		let Value::Object(entries) = value else {
			return Err(CatalogError::NotAnObject(json_kind(&value)));
		};

		let mut icons = IndexMap::with_capacity(entries.len());
		for (name, definition) in entries {
			let definition = if definition.is_null() {
				IconDefinition::default()
			} else {
				serde_json::from_value(definition).map_err(|error| CatalogError::Malformed { icon: name.clone(), error })?
			};
			icons.insert(name, definition);
		}

		Ok(Self { icons })
	}

	/// Number of icons in the catalog.
	pub fn len(&self) -> usize {
		self.icons.len()
	}

	/// Returns true if the catalog has no icons.
	pub fn is_empty(&self) -> bool {
		self.icons.is_empty()
	}

	/// Looks up an icon by name.
	pub fn get(&self, name: &str) -> Option<&IconDefinition> {
		self.icons.get(name)
	}

	/// Iterates icons in catalog order.
	pub fn iter(&self) -> impl Iterator<Item = (&str, &IconDefinition)> {
		self.icons.iter().map(|(name, definition)| (name.as_str(), definition))
	}
}

/// One icon as described by the catalog.
///
/// Every field is optional in the source; `null` reads the same as absent.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IconDefinition {
	#[serde(default, deserialize_with = "nullable")]
	pub label: String,
	#[serde(default, deserialize_with = "nullable")]
	pub search: SearchSpec,
	#[serde(default, deserialize_with = "nullable")]
	pub aliases: AliasSpec,
	#[serde(default, deserialize_with = "nullable")]
	pub hide_in_search: bool,
	#[serde(default, deserialize_with = "nullable")]
	pub changes: Vec<Change>,
	/// Family name to style name to glyph. `null` families and styles are dropped.
	#[serde(default, deserialize_with = "nullable_glyphs")]
	pub svgs: IndexMap<String, IndexMap<String, GlyphSource>>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct SearchSpec {
	#[serde(default, deserialize_with = "nullable")]
	pub terms: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct AliasSpec {
	#[serde(default, deserialize_with = "nullable")]
	pub names: Vec<String>,
}

/// Raw markup of one family/style variant.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct GlyphSource {
	#[serde(default, deserialize_with = "nullable")]
	pub raw: String,
}

/// One entry of an icon's change history.
///
/// The upstream catalog lists bare version strings; hand-written overrides may
/// use `{ version: ... }` records.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(untagged)]
pub enum Change {
	Version(String),
	Entry { version: String },
}

impl Change {
	pub fn version(&self) -> &str {
		match self {
			Change::Version(version) | Change::Entry { version } => version,
		}
	}
}

/// A glyph with non-empty markup, tagged with where it lives in the icon.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GlyphVariant<'a> {
	pub family: &'a str,
	pub style: &'a str,
	pub raw: &'a str,
}

impl IconDefinition {
	/// Display label, falling back to `name` when unset or empty.
	pub fn label_or<'a>(&'a self, name: &'a str) -> &'a str {
		if self.label.is_empty() { name } else { &self.label }
	}

	pub fn terms(&self) -> &[String] {
		&self.search.terms
	}

	pub fn alias_names(&self) -> &[String] {
		&self.aliases.names
	}

	/// The version of the last change, if the icon has any history.
	pub fn latest_change(&self) -> Option<&str> {
		self.changes.last().map(Change::version)
	}

	/// Iterates variants with non-empty markup in family, then style order.
	///
	/// Variants with empty markup do not exist as far as compilation goes.
	pub fn variants(&self) -> impl Iterator<Item = GlyphVariant<'_>> {
		self.svgs.iter().flat_map(|(family, styles)| {
			styles.iter().filter(|(_, glyph)| !glyph.raw.is_empty()).map(move |(style, glyph)| GlyphVariant {
				family,
				style,
				raw: &glyph.raw,
			})
		})
	}
}

/// Deserializes `null` as the type's default.
fn nullable<'de, D, T>(deserializer: D) -> std::result::Result<T, D::Error>
where
	D: Deserializer<'de>,
	T: Default + Deserialize<'de>,
{
	Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

type NullableGlyphs = IndexMap<String, Option<IndexMap<String, Option<GlyphSource>>>>;

/// Deserializes the glyph table, treating `null` at any level as absent.
fn nullable_glyphs<'de, D>(deserializer: D) -> std::result::Result<IndexMap<String, IndexMap<String, GlyphSource>>, D::Error>
where
	D: Deserializer<'de>,
{
	let families: NullableGlyphs = nullable(deserializer)?;
	Ok(families
		.into_iter()
		.filter_map(|(family, styles)| {
			let styles: IndexMap<_, _> = styles?.into_iter().filter_map(|(style, glyph)| Some((style, glyph?))).collect();
			Some((family, styles))
		})
		.collect())
}
