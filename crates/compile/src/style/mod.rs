//! Style keys, CSS selectors and label casing.

use std::borrow::Borrow;
use std::fmt;

/// Family whose style keys carry no family prefix.
pub const DEFAULT_FAMILY: &str = "classic";

/// Reserved style name for brand glyphs.
///
/// Brand glyphs are counted on the seeded brands pack and never get a style
/// record of their own.
pub const BRANDS: &str = "brands";

/// Family-qualified style name, the join key between styles, packs, selectors
/// and icons.
///
/// `classic/solid` becomes `solid`, `sharp/light` becomes `sharp-light`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct StyleKey(String);

impl StyleKey {
	pub fn new(family: &str, style: &str) -> Self {
		if family == DEFAULT_FAMILY {
			Self(style.to_owned())
		} else {
			Self(format!("{family}-{style}"))
		}
	}

	pub fn as_str(&self) -> &str {
		&self.0
	}

	/// CSS-class-safe selector: hyphens become underscores and the whole key is
	/// wrapped in underscores, e.g. `_sharp_light_`.
	pub fn selector(&self) -> String {
		format!("_{}_", self.0.replace('-', "_"))
	}

	pub fn label(&self) -> String {
		title_case(&self.0)
	}
}

impl fmt::Display for StyleKey {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(&self.0)
	}
}

impl AsRef<str> for StyleKey {
	fn as_ref(&self) -> &str {
		&self.0
	}
}

impl Borrow<str> for StyleKey {
	fn borrow(&self) -> &str {
		&self.0
	}
}

impl From<StyleKey> for String {
	fn from(key: StyleKey) -> Self {
		key.0
	}
}

/// Splits an identifier into words and capitalizes each one.
///
/// Words are acronym runs (`XML` in `XMLHttp`), an optional capital followed by
/// lowercase letters and trailing digits (`Http`, `h1`), lone capitals and
/// digit runs. Everything else (hyphens, underscores, spaces) only separates.
///
/// ```
/// use iconbake_compile::style::title_case;
///
/// assert_eq!(title_case("sharp-duotone"), "Sharp Duotone");
/// assert_eq!(title_case("XMLHttp"), "XML Http");
/// ```
pub fn title_case(input: &str) -> String {
	split_words(input)
		.into_iter()
		.map(|word| {
			let mut chars = word.chars();
			match chars.next() {
				Some(first) => first.to_ascii_uppercase().to_string() + chars.as_str(),
				None => String::new(),
			}
		})
		.collect::<Vec<_>>()
		.join(" ")
}

fn split_words(input: &str) -> Vec<&str> {
	let bytes = input.as_bytes();
	let run = |from: usize, pred: fn(&u8) -> bool| from + bytes[from..].iter().take_while(|b| pred(b)).count();

	let mut words = Vec::new();
	let mut pos = 0;
	while pos < bytes.len() {
		let b = bytes[pos];
		let end = if b.is_ascii_uppercase() {
			let upper_end = run(pos, u8::is_ascii_uppercase);
			let upper_len = upper_end - pos;
			match bytes.get(upper_end) {
				// Acronym at a word boundary.
				next if upper_len >= 2 && !next.is_some_and(is_word_byte) => upper_end,
				// Acronym followed by a capitalized word: leave its capital to the word.
				Some(next) if upper_len >= 3 && next.is_ascii_lowercase() => upper_end - 1,
				_ if bytes.get(pos + 1).is_some_and(u8::is_ascii_lowercase) => {
					run(run(pos + 1, u8::is_ascii_lowercase), u8::is_ascii_digit)
				}
				_ => pos + 1,
			}
		} else if b.is_ascii_lowercase() {
			run(run(pos, u8::is_ascii_lowercase), u8::is_ascii_digit)
		} else if b.is_ascii_digit() {
			run(pos, u8::is_ascii_digit)
		} else {
			pos += 1;
			continue;
		};
		words.push(&input[pos..end]);
		pos = end;
	}
	words
}

fn is_word_byte(b: &u8) -> bool {
	b.is_ascii_alphanumeric() || *b == b'_'
}
