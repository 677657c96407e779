//! Deep merge of untyped catalog documents.

use serde_json::Value;

use crate::icon::Catalog;
use crate::{CatalogError, Result};

/// Merges `overrides` into `base`.
///
/// Objects merge key by key, recursing into keys present on both sides. Every
/// other pairing (scalars, arrays, or an object meeting a non-object) resolves
/// to the override value, so arrays are replaced wholesale rather than
/// concatenated.
///
/// Keys keep their position from `base`; override-only keys are appended in the
/// order they appear in `overrides`.
pub fn merge(base: Value, overrides: Value) -> Value {
	match (base, overrides) {
		(Value::Object(mut base), Value::Object(overrides)) => {
			for (key, value) in overrides {
				match base.get_mut(&key) {
					Some(slot) => {
						let current = std::mem::take(slot);
						*slot = merge(current, value);
					}
					None => {
						base.insert(key, value);
					}
				}
			}
			Value::Object(base)
		}
		(_, overrides) => overrides,
	}
}

/// Merges two catalog documents and parses the result into a [`Catalog`].
///
/// Both roots must be objects keyed by icon name.
pub fn merge_catalogs(base: Value, overrides: Value) -> Result<Catalog> {
	ensure_object(&base)?;
	ensure_object(&overrides)?;
	Catalog::from_value(merge(base, overrides))
}

fn ensure_object(value: &Value) -> Result<()> {
	if value.is_object() {
		return Ok(());
	}
	Err(CatalogError::NotAnObject(json_kind(value)))
}

pub(crate) fn json_kind(value: &Value) -> &'static str {
	match value {
		Value::Null => "null",
		Value::Bool(_) => "boolean",
		Value::Number(_) => "number",
		Value::String(_) => "string",
		Value::Array(_) => "array",
		Value::Object(_) => "object",
	}
}
