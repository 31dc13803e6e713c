//! Export data model.
//!
//! A parsed export is a flat list of pages plus the set of categories
//! derived from them. Both are built once per scan and read-only after.

pub mod types;

pub use types::{Export, Page};
