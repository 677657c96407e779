//! Glyph asset output.

use std::path::{Component, Path, PathBuf};
use std::{fs, io};

use crate::style::StyleKey;
use crate::transform::transform_markup;
use crate::{BuildError, Result};

/// Writes transformed glyphs to `<public>/<style key>/<icon>.svg`.
#[derive(Debug, Clone)]
pub struct AssetWriter {
	public_dir: PathBuf,
}

impl AssetWriter {
	pub fn new(public_dir: impl Into<PathBuf>) -> Self {
		Self {
			public_dir: public_dir.into(),
		}
	}

	/// Transforms `raw` and writes it, overwriting any previous file.
	///
	/// `icon` must be a single plain file name; anything that would resolve
	/// outside the style directory is rejected.
	pub fn write(&self, key: &StyleKey, icon: &str, raw: &str) -> Result<PathBuf> {
		let dir = self.public_dir.join(key.as_str());
		if !is_file_name(icon) {
			return Err(BuildError::Asset {
				path: dir.join(icon),
				error: io::Error::new(io::ErrorKind::InvalidInput, format!("icon name {icon:?} is not a plain file name")),
			});
		}

		if !dir.exists() {
			fs::create_dir_all(&dir).map_err(|error| BuildError::Asset { path: dir.clone(), error })?;
		}

		let path = dir.join(format!("{icon}.svg"));
		fs::write(&path, transform_markup(raw)).map_err(|error| BuildError::Asset { path: path.clone(), error })?;
		Ok(path)
	}
}

fn is_file_name(name: &str) -> bool {
	let mut components = Path::new(name).components();
	matches!((components.next(), components.next()), (Some(Component::Normal(part)), None) if part == name)
}
