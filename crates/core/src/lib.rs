//! Core library for notion-llms.
//!
//! Parses extracted Notion workspace exports into a structured [`export::Export`]
//! model and renders it as llms.txt. All structural metadata (page ids,
//! titles, categories) is derived purely from file paths; content is only
//! consulted through plain-text heuristics for filtering and snippets.

#![allow(clippy::module_name_repetitions)]

pub mod export;
pub mod generator;
pub mod parser;

pub use export::{Export, Page};
pub use generator::{GeneratorError, LlmsTxtGenerator, SummaryStats};
pub use parser::filter::{FilterError, FilterOptions, SizeThreshold};
pub use parser::{ExportParser, ParserError};

pub fn version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
