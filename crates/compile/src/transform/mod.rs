//! Glyph markup rewriting.
//!
//! Upstream glyphs ship with `fa-` classes and, for two-tone glyphs, a fixed
//! `opacity=".4"` on the secondary layer. Both get in the way once the markup is
//! inlined into a host page: the classes collide with the page's own icon
//! styles and the inline opacity cannot be restyled. The rewrite namespaces the
//! classes and turns the two layers into classes a stylesheet can target.

/// Reserved class prefix used by upstream markup.
pub const CLASS_PREFIX: &str = "fa-";
/// Namespaced replacement for [`CLASS_PREFIX`].
pub const NAMESPACED_PREFIX: &str = "fa-icon-";

const SECONDARY_PATH: &str = r#"<path opacity=".4""#;
const SECONDARY_CLASS_PATH: &str = r#"<path class="fa-icon-secondary""#;
const SECONDARY_STYLE: &str = "<defs><style>.fa-icon-secondary{opacity:.4}</style></defs>";
const PRIMARY_PATH: &str = r#"<path fill="currentColor""#;
const PRIMARY_CLASS_PATH: &str = r#"<path class="fa-icon-primary" fill="currentColor""#;

/// Rewrites raw glyph markup for inlining.
///
/// 1. Every `fa-` becomes `fa-icon-`.
/// 2. The first secondary-tone path gets the style block defining
///    `.fa-icon-secondary` injected in front of it; it and every later
///    secondary-tone path swap `opacity=".4"` for the secondary class.
/// 3. Every `fill="currentColor"` path gets the primary class.
pub fn transform_markup(raw: &str) -> String {
	let mut markup = raw.replace(CLASS_PREFIX, NAMESPACED_PREFIX);

	if markup.contains(SECONDARY_PATH) {
		markup = markup.replacen(SECONDARY_PATH, &format!("{SECONDARY_STYLE}{SECONDARY_CLASS_PATH}"), 1);
		markup = markup.replace(SECONDARY_PATH, SECONDARY_CLASS_PATH);
	}

	markup.replace(PRIMARY_PATH, PRIMARY_CLASS_PATH)
}
