use iconbake_catalog::{Catalog, CategoryIndex};
use pretty_assertions::assert_eq;
use serde_json::{Value, json};

use super::*;

fn catalog(value: Value) -> Catalog {
	Catalog::from_value(value).unwrap()
}

fn compile(value: Value, categories: &CategoryIndex) -> Compilation {
	Compiler::new(categories).compile_catalog(&catalog(value)).unwrap()
}

fn keys(set: &IndexSet<StyleKey>) -> Vec<&str> {
	set.iter().map(StyleKey::as_str).collect()
}

/// The single-glyph scenario: one classic solid glyph, no categories.
#[test]
fn home_scenario() {
	let categories = CategoryIndex::default();
	let out = compile(
		json!({ "home": { "svgs": { "classic": { "solid": { "raw": r#"<path fill="currentColor" d="M0 0"/>"# } } } } }),
		&categories,
	);

	assert_eq!(out.glyphs, 1);
	assert_eq!(keys(&out.styles), ["solid"]);
	assert_eq!(
		out.icons,
		[IconRecord {
			name: "home".into(),
			label: "home".into(),
			keywords: IndexSet::new(),
			styles: IndexSet::from(["_solid_".to_string()]),
			categories: vec![],
		}]
	);

	let solid = &out.style_records["solid"];
	assert_eq!((solid.label.as_str(), keys(&solid.styles)), ("Solid", vec!["solid"]));

	let classic = &out.packs["classic"];
	assert_eq!((classic.label.as_str(), classic.count), ("Classic", 1));
	assert_eq!(version(&out), "0.0.0");
}

fn version(out: &Compilation) -> String {
	out.version.to_string()
}

#[test]
fn glyph_counter_includes_hidden_icons() {
	let categories = CategoryIndex::default();
	let out = compile(
		json!({
			"a": { "svgs": { "classic": { "solid": { "raw": "<a/>" }, "regular": { "raw": "<a/>" } } } },
			"b": { "hideInSearch": true, "svgs": { "sharp": { "light": { "raw": "<b/>" } } } },
			"c": { "svgs": { "classic": { "solid": { "raw": "" } } } }
		}),
		&categories,
	);

	assert_eq!(out.glyphs, 3);
}

#[test]
fn hidden_icons_touch_no_aggregate() {
	let categories = CategoryIndex::default();
	let out = compile(
		json!({
			"secret": {
				"hideInSearch": true,
				"svgs": { "sharp": { "light": { "raw": "<a/>" } }, "classic": { "brands": { "raw": "<b/>" } } }
			}
		}),
		&categories,
	);

	assert!(out.icons.is_empty());
	assert!(out.styles.is_empty());
	assert!(out.selectors.is_empty());
	assert!(out.style_records.is_empty());
	assert_eq!(out.packs.keys().collect::<Vec<_>>(), ["brands"]);
	assert_eq!(out.packs["brands"].count, 0);
	assert_eq!(out.glyphs, 2);
}

#[test]
fn brands_pack_is_seeded_and_counts_brand_glyphs() {
	let categories = CategoryIndex::default();

	let empty = compile(json!({}), &categories);
	let brands = &empty.packs["brands"];
	assert_eq!((brands.label.as_str(), brands.count, keys(&brands.styles)), ("Brands", 0, vec!["brands"]));

	let out = compile(
		json!({
			"github": { "svgs": { "classic": { "brands": { "raw": "<a/>" } } } },
			"gitlab": { "svgs": { "classic": { "brands": { "raw": "<b/>" } } } }
		}),
		&categories,
	);
	assert_eq!(out.packs["brands"].count, 2);
	assert!(!out.style_records.contains_key("brands"));
	assert!(!out.packs.contains_key("classic"));
	assert_eq!(keys(&out.styles), ["brands"]);
	assert_eq!(out.selectors["brands"].pack, "classic");
}

#[test]
fn styles_and_packs_collect_keys_across_families() {
	let categories = CategoryIndex::default();
	let out = compile(
		json!({
			"a": { "svgs": {
				"classic": { "solid": { "raw": "<a/>" } },
				"sharp": { "solid": { "raw": "<a/>" }, "light": { "raw": "<a/>" } }
			} },
			"b": { "svgs": {
				"sharp": { "solid": { "raw": "<b/>" } },
				"sharp-duotone": { "solid": { "raw": "<b/>" } }
			} }
		}),
		&categories,
	);

	assert_eq!(keys(&out.styles), ["solid", "sharp-solid", "sharp-light", "sharp-duotone-solid"]);
	assert_eq!(keys(&out.style_records["solid"].styles), ["solid", "sharp-solid", "sharp-duotone-solid"]);
	assert_eq!(keys(&out.style_records["light"].styles), ["sharp-light"]);

	let sharp = &out.packs["sharp"];
	assert_eq!((sharp.count, keys(&sharp.styles)), (3, vec!["sharp-solid", "sharp-light"]));
	assert_eq!(out.packs["sharp-duotone"].label, "Sharp Duotone");
	assert_eq!(out.packs.keys().collect::<Vec<_>>(), ["brands", "classic", "sharp", "sharp-duotone"]);

	let selector = &out.selectors["sharp-duotone-solid"];
	assert_eq!(
		(selector.label.as_str(), selector.pack.as_str(), selector.style.as_str(), selector.selector.as_str()),
		("Sharp Duotone Solid", "sharp-duotone", "solid", "_sharp_duotone_solid_")
	);
}

#[test]
fn first_selector_record_wins() {
	let categories = CategoryIndex::default();
	let mut compiler = Compiler::new(&categories);
	let icons = catalog(json!({
		"a": { "svgs": { "sharp": { "light": { "raw": "<a/>" } } } },
		"b": { "svgs": { "sharp": { "light": { "raw": "<b/>" } } } }
	}));
	for (name, icon) in icons.iter() {
		compiler.compile_icon(name, icon).unwrap();
	}
	let out = compiler.finish();

	assert_eq!(out.selectors.len(), 1);
	assert_eq!(out.selectors["sharp-light"].label, "Sharp Light");
	assert_eq!(out.icons.len(), 2);
}

#[test]
fn keywords_merge_terms_aliases_and_categories() {
	let categories = CategoryIndex::from_yaml("design:\n  label: Design\n  icons: [pen]\nui-kit:\n  label: UI Kit\n  icons: [pen]\n").unwrap();
	let out = compile(
		json!({
			"pen": {
				"label": "Pen",
				"search": { "terms": ["write", "design", "write"] },
				"aliases": { "names": ["pen-alt", "write"] },
				"svgs": { "classic": { "solid": { "raw": "<a/>" } } }
			}
		}),
		&categories,
	);

	let pen = &out.icons[0];
	assert_eq!(pen.label, "Pen");
	assert_eq!(pen.keywords.iter().collect::<Vec<_>>(), ["write", "design", "pen-alt", "ui_kit"]);
	assert_eq!(pen.categories, ["design", "ui_kit"]);
}

#[test]
fn icons_without_glyphs_are_still_searchable() {
	let categories = CategoryIndex::default();
	let out = compile(json!({ "ghost": { "search": { "terms": ["boo"] } } }), &categories);

	assert_eq!(out.icons.len(), 1);
	assert!(out.icons[0].styles.is_empty());
	assert_eq!(out.glyphs, 0);
}

#[test]
fn version_is_the_maximum_latest_change() {
	let categories = CategoryIndex::default();
	let out = compile(
		json!({
			"a": { "changes": ["7.0.0", "5.0.0"] },
			"b": { "changes": ["4.0.0", "6.2.1"] },
			"c": { "changes": [] },
			"d": { "hideInSearch": true, "changes": [{ "version": "6.10.0" }] }
		}),
		&categories,
	);

	// "a" only contributes its last entry.
	assert_eq!(version(&out), "6.10.0");
}

#[test]
fn build_metadata_does_not_raise_the_version() {
	let categories = CategoryIndex::default();
	let out = compile(
		json!({
			"a": { "changes": ["7.0.0"] },
			"b": { "changes": ["7.0.0+build.5"] }
		}),
		&categories,
	);
	assert_eq!(version(&out), "7.0.0");

	let out = compile(
		json!({
			"a": { "changes": ["7.0.0-beta.1"] },
			"b": { "changes": ["7.0.0"] }
		}),
		&categories,
	);
	assert_eq!(version(&out), "7.0.0");
}

#[test]
fn empty_histories_keep_the_baseline() {
	let categories = CategoryIndex::default();
	let out = compile(json!({ "a": {}, "b": { "changes": [] } }), &categories);
	assert_eq!(version(&out), "0.0.0");
}

#[test]
fn invalid_version_aborts() {
	let categories = CategoryIndex::default();
	let err = Compiler::new(&categories)
		.compile_catalog(&catalog(json!({ "a": { "changes": ["five"] } })))
		.unwrap_err();

	match err {
		BuildError::InvalidVersion { icon, version, .. } => assert_eq!((icon.as_str(), version.as_str()), ("a", "five")),
		other => panic!("unexpected error: {other}"),
	}
}

#[test]
fn parse_version_tolerates_prefix() {
	assert_eq!(parse_version(" v6.1.0 ").unwrap(), Version::new(6, 1, 0));
	assert!(parse_version("6.1").is_err());
}

#[test]
fn dataset_flattens_aggregates() {
	let categories = CategoryIndex::from_yaml("buildings:\n  label: Buildings\n  icons: [home, city]\n").unwrap();
	let out = compile(
		json!({
			"home": { "svgs": { "classic": { "solid": { "raw": "<a/>" } }, "sharp": { "light": { "raw": "<a/>" } } } },
			"github": { "svgs": { "classic": { "brands": { "raw": "<b/>" } } } }
		}),
		&categories,
	);

	let dataset = out.dataset(&categories);
	assert_eq!(
		dataset.icons[0],
		IconRow {
			name: "home".into(),
			label: "home".into(),
			keywords: vec!["buildings".into()],
			styles: vec!["_solid_".into(), "_sharp_light_".into()],
			categories: vec!["buildings".into()],
		}
	);
	assert_eq!(dataset.categories[0].icons, ["home", "city"]);
	assert_eq!(
		dataset.packs.iter().map(|p| (p.name.as_str(), p.count)).collect::<Vec<_>>(),
		[("brands", 1), ("classic", 1), ("sharp", 1)]
	);
	assert_eq!(
		dataset.selectors.iter().map(|s| s.name.as_str()).collect::<Vec<_>>(),
		["solid", "sharp-light", "brands"]
	);
	assert_eq!(out.style_list(), ["solid", "sharp-light", "brands"]);
}
