/// Searchable icon row.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct IconRow {
	pub name: String,
	pub label: String,
	pub keywords: Vec<String>,
	/// Style selectors the icon is available in.
	pub styles: Vec<String>,
	/// Normalized category keys; stored as NULL when empty.
	pub categories: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CategoryRow {
	pub name: String,
	pub label: String,
	pub icons: Vec<String>,
}

/// Bare style name with every style key that uses it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StyleRow {
	pub name: String,
	pub label: String,
	pub styles: Vec<String>,
}

/// Family aggregate: glyph count and style keys.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PackRow {
	pub name: String,
	pub label: String,
	pub count: i64,
	pub styles: Vec<String>,
}

/// Style key with its owning family, bare style and CSS selector.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SelectorRow {
	pub name: String,
	pub label: String,
	pub pack: String,
	pub style: String,
	pub selector: String,
}

/// Everything that goes into one index build, in insertion order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Dataset {
	pub icons: Vec<IconRow>,
	pub categories: Vec<CategoryRow>,
	pub styles: Vec<StyleRow>,
	pub packs: Vec<PackRow>,
	pub selectors: Vec<SelectorRow>,
}
