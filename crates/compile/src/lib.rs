//! Icon compilation pipeline.
//!
//! Stages run strictly in order, each consuming the previous one's output:
//!
//! 1. The category document is indexed ([`iconbake_catalog::CategoryIndex`]).
//! 2. The override catalog is deep-merged over the base catalog.
//! 3. [`Compiler`] walks every icon, writing transformed glyphs through an
//!    [`AssetWriter`] when assets are enabled and accumulating a [`Compilation`].
//! 4. The compilation is flattened into an [`iconbake_index::Dataset`] and
//!    written as one transaction.
//! 5. Settings documents carry the resolved version and style list to the
//!    consuming package.
//!
//! [`run`] drives all of it from a [`BuildCtx`].

mod assets;
mod compiler;
mod ctx;
mod error;
mod pipeline;
pub mod settings;
pub mod style;
pub mod transform;

pub use assets::AssetWriter;
pub use compiler::{Compilation, Compiler, IconRecord, PackRecord, SelectorRecord, StyleRecord, parse_version};
pub use ctx::{BuildCtx, Layout};
pub use error::{BuildError, Result};
pub use pipeline::{BuildReport, run};
pub use style::StyleKey;
