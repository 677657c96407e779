//! Flat string encodings for multi-valued columns.

/// Encodes values as `_a_,_b_`.
///
/// Each value ends up wrapped in underscores, so `LIKE '%\_a\_%'` style lookups
/// match whole entries. An empty list encodes as `__`.
pub fn bracketed<S: AsRef<str>>(values: &[S]) -> String {
	let mut out = String::from("_");
	for (i, value) in values.iter().enumerate() {
		if i > 0 {
			out.push_str("_,_");
		}
		out.push_str(value.as_ref());
	}
	out.push('_');
	out
}

/// Like [`bracketed`], but `None` for an empty list.
pub fn bracketed_or_null<S: AsRef<str>>(values: &[S]) -> Option<String> {
	(!values.is_empty()).then(|| bracketed(values))
}

/// Plain comma join.
pub fn comma_joined<S: AsRef<str>>(values: &[S]) -> String {
	values.iter().map(AsRef::as_ref).collect::<Vec<_>>().join(",")
}
