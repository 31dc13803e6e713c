//! Notion export parsing.
//!
//! The parser walks an extracted export directory, derives page metadata
//! from file paths, filters pages by content quality, and assembles the
//! [`Export`] model consumed by the generator.

pub mod cache;
pub mod content;
pub mod filter;
pub mod paths;
pub mod walker;

use std::path::Path;

use thiserror::Error;
use tracing::{debug, warn};

use crate::export::{Export, Page};
use cache::ContentCache;
use filter::{FilterError, FilterOptions, PageCandidate, PageFilter};
use walker::{ExportWalker, WalkedFile, WalkerError};

pub use filter::SizeThreshold;

#[derive(Debug, Error)]
pub enum ParserError {
    #[error(transparent)]
    Walk(#[from] WalkerError),

    #[error(transparent)]
    Filter(#[from] FilterError),
}

/// Parser for an extracted Notion export directory.
///
/// Construction validates the export root and the configured glob
/// patterns; [`parse`](Self::parse) then performs one single-threaded scan.
/// The content cache is owned here and scoped to the parser, so repeated
/// reads of a file during one scan hit memory.
#[derive(Debug)]
pub struct ExportParser {
    walker: ExportWalker,
    filter: PageFilter,
    exclude_link_only: bool,
    snippet_length: usize,
    cache: ContentCache,
}

impl ExportParser {
    /// Create a parser for `root` with the given filtering options.
    ///
    /// Fails up front when the root is unavailable or a glob pattern is
    /// malformed; neither error can surface mid-scan.
    pub fn new(root: &Path, options: &FilterOptions) -> Result<Self, ParserError> {
        Ok(Self {
            walker: ExportWalker::new(root)?,
            filter: PageFilter::new(options)?,
            exclude_link_only: options.exclude_link_only,
            snippet_length: options.snippet_length,
            cache: ContentCache::default(),
        })
    }

    /// Scan the export and return the parsed model.
    ///
    /// Files whose name carries no page id are skipped with a warning; the
    /// scan continues, since a partial export structure is still useful.
    /// Per-file read errors exclude the file silently. Only enumeration
    /// errors at the directory level abort the scan.
    pub fn parse(&mut self) -> Result<Export, ParserError> {
        let files = self.walker.walk()?;
        debug!(count = files.len(), "discovered markdown files");

        let mut pages = Vec::new();
        for file in &files {
            if let Some(page) = self.parse_file(file) {
                pages.push(page);
            }
        }

        let mut categories: Vec<String> =
            pages.iter().map(|p| p.category.clone()).collect();
        categories.sort();
        categories.dedup();

        Ok(Export { pages, categories })
    }

    fn parse_file(&mut self, file: &WalkedFile) -> Option<Page> {
        let Some(stem) =
            file.absolute_path.file_stem().and_then(|s| s.to_str())
        else {
            warn!(path = %file.absolute_path.display(), "skipping non-UTF-8 filename");
            return None;
        };

        let page_id = match paths::extract_page_id(stem) {
            Ok(id) => id,
            Err(e) => {
                warn!(path = %file.absolute_path.display(), "skipping file: {e}");
                return None;
            }
        };

        let title = paths::extract_title(stem, page_id);
        let category = paths::determine_category(&file.relative_path);
        let display_path = paths::display_path(&category, &title);

        let candidate = PageCandidate {
            path: &file.absolute_path,
            stem,
            size_bytes: file.size_bytes,
            display_path,
        };
        if !self.filter.should_include(&candidate, &mut self.cache) {
            return None;
        }

        let exclude_link_only = self.exclude_link_only;
        let snippet_length = self.snippet_length;
        let snippet = match self.cache.read(&file.absolute_path) {
            Some(text) => {
                content::extract_snippet(text, exclude_link_only, snippet_length)
            }
            None => String::new(),
        };

        Some(Page {
            title,
            page_id: page_id.to_string(),
            file_path: file.absolute_path.clone(),
            category,
            size_bytes: file.size_bytes,
            snippet,
        })
    }
}
