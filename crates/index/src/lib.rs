//! Search index for compiled icon datasets.
//!
//! The index is a single SQLite database with one FTS5 table (`icons`) and four
//! lookup tables (`categories`, `styles`, `packs`, `styleSelector`). Rows are
//! handed over as plain records; multi-valued fields stay lists until
//! [`encode`] flattens them into the bracketed form the consuming runtime
//! matches with substring queries.
//!
//! # Invariants
//!
//! - The whole dataset is written in one transaction. A failed build leaves the
//!   previous database contents untouched.
//! - Re-running a build replaces every table, so identical input yields
//!   identical table contents.

mod build;
pub mod encode;
mod error;
mod rows;

pub use build::{build, write};
pub use error::{IndexError, Result};
pub use rows::{CategoryRow, Dataset, IconRow, PackRow, SelectorRow, StyleRow};
