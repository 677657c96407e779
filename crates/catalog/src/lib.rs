//! Icon catalog model, override merging and category indexing.
//!
//! A catalog is a JSON document keyed by icon name. The upstream catalog and a
//! local override catalog are deep-merged as untyped values first and only then
//! parsed into a typed [`Catalog`], so an override may touch any nested field
//! (a single style of a single family, say) without restating the rest of the
//! definition.
//!
//! The category document is a YAML mapping of category keys to member icons.
//! [`CategoryIndex`] keeps the category records and the inverse icon lookup the
//! compiler needs before it visits the first icon.

mod categories;
mod error;
mod icon;
mod load;
mod merge;

pub use categories::{Category, CategoryIndex, normalize_key};
pub use error::{CatalogError, Result};
pub use icon::{AliasSpec, Catalog, Change, GlyphSource, GlyphVariant, IconDefinition, SearchSpec};
pub use load::{load_catalog, read_catalog, read_overrides};
pub use merge::{merge, merge_catalogs};
