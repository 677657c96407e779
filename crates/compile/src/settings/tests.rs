use pretty_assertions::assert_eq;

use super::*;

#[test]
fn version_document_nests_under_package() {
	let doc = version_document(&Version::new(7, 0, 1));
	assert_eq!(doc["Neos"]["Neos"]["Ui"]["frontendConfiguration"]["Carbon.Fontawesome"]["version"], "7.0.1");
}

#[test]
fn snippet_offers_styles_in_order() {
	let doc = content_box_document(&["solid", "regular", "sharp-light"]);
	let icon = &doc["Neos"]["Neos"]["Ui"]["frontendConfiguration"]["Carbon.CodePen"]["afx"]["fusionObjects"]["Fontawesome"];

	assert_eq!(
		icon["snippet"],
		r#"<Carbon.Fontawesome:Icon icon="${1|solid,regular,sharp-light|}:${2}" />"#
	);
	assert_eq!(icon["documentation"], DOCUMENTATION);
}

#[test]
fn writes_block_yaml_files() {
	let dir = tempfile::tempdir().unwrap();
	let config = dir.path().join("Configuration");

	let written = write_settings(&config, &Version::new(6, 5, 2), &["solid"]).unwrap();
	assert_eq!(written, [config.join(VERSION_FILE), config.join(CONTENT_BOX_FILE)]);

	let version = fs::read_to_string(config.join(VERSION_FILE)).unwrap();
	assert!(!version.contains('{'), "expected block style, got:\n{version}");
	let parsed: Value = serde_yaml::from_str(&version).unwrap();
	assert_eq!(parsed, version_document(&Version::new(6, 5, 2)));

	let parsed: Value = serde_yaml::from_str(&fs::read_to_string(config.join(CONTENT_BOX_FILE)).unwrap()).unwrap();
	assert_eq!(parsed, content_box_document(&["solid"]));
}
