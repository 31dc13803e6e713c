//! Page filtering: decides which discovered files become pages.

use std::path::Path;

use glob::Pattern;
use thiserror::Error;
use tracing::debug;

use super::cache::ContentCache;
use super::content;

/// Minimum-size policy for a page. Exactly one of the two modes applies;
/// they are never combined.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SizeThreshold {
    /// Raw file size in bytes must reach this minimum.
    FileBytes(u64),
    /// Cleaned content (joined with single spaces) must reach this many
    /// characters.
    ContentChars(usize),
}

/// Filtering options, supplied once at parser construction.
#[derive(Debug, Clone)]
pub struct FilterOptions {
    /// Minimum-size policy.
    pub size_threshold: SizeThreshold,
    /// Minimum number of cleaned content lines.
    pub min_content_lines: usize,
    /// Reject files whose stem contains the literal `"Untitled"`.
    pub exclude_untitled: bool,
    /// Drop link-only lines during cleaning and snippet extraction.
    pub exclude_link_only: bool,
    /// Reserved tuning knob for ratio-based link-only page detection.
    pub link_only_threshold: f64,
    /// Glob patterns the display path must match at least one of, when
    /// non-empty.
    pub include_patterns: Vec<String>,
    /// Glob patterns the display path must match none of.
    pub exclude_patterns: Vec<String>,
    /// Snippet length in characters.
    pub snippet_length: usize,
}

impl Default for FilterOptions {
    fn default() -> Self {
        Self {
            size_threshold: SizeThreshold::ContentChars(100),
            min_content_lines: 3,
            exclude_untitled: true,
            exclude_link_only: true,
            link_only_threshold: 0.8,
            include_patterns: Vec::new(),
            exclude_patterns: Vec::new(),
            snippet_length: 32,
        }
    }
}

#[derive(Debug, Error)]
pub enum FilterError {
    #[error("invalid filter pattern '{pattern}': {source}")]
    InvalidPattern {
        pattern: String,
        #[source]
        source: glob::PatternError,
    },
}

/// A discovered file under consideration, with its path-derived metadata
/// already decomposed.
#[derive(Debug)]
pub struct PageCandidate<'a> {
    /// Absolute path to the file.
    pub path: &'a Path,
    /// Filename stem, as on disk.
    pub stem: &'a str,
    /// Raw file size in bytes.
    pub size_bytes: u64,
    /// Logical `category/title` display path used for glob matching.
    pub display_path: String,
}

/// Compiled page filter. Glob patterns are validated here, at construction,
/// so malformed configuration never surfaces mid-scan.
#[derive(Debug)]
pub struct PageFilter {
    size_threshold: SizeThreshold,
    min_content_lines: usize,
    exclude_untitled: bool,
    exclude_link_only: bool,
    include: Vec<Pattern>,
    exclude: Vec<Pattern>,
}

impl PageFilter {
    pub fn new(options: &FilterOptions) -> Result<Self, FilterError> {
        Ok(Self {
            size_threshold: options.size_threshold,
            min_content_lines: options.min_content_lines,
            exclude_untitled: options.exclude_untitled,
            exclude_link_only: options.exclude_link_only,
            include: compile_patterns(&options.include_patterns)?,
            exclude: compile_patterns(&options.exclude_patterns)?,
        })
    }

    /// Decide whether a candidate becomes a page. Checks run in a fixed
    /// order and short-circuit on the first failure: size, title, path
    /// patterns, content lines.
    pub fn should_include(
        &self,
        candidate: &PageCandidate<'_>,
        cache: &mut ContentCache,
    ) -> bool {
        if !self.meets_size_threshold(candidate, cache) {
            debug!(path = %candidate.path.display(), "rejected: below size threshold");
            return false;
        }

        if self.exclude_untitled && candidate.stem.contains("Untitled") {
            debug!(path = %candidate.path.display(), "rejected: untitled");
            return false;
        }

        if !self.matches_path_patterns(&candidate.display_path) {
            debug!(path = %candidate.path.display(), "rejected: path patterns");
            return false;
        }

        let Some(text) = cache.read(candidate.path) else {
            debug!(path = %candidate.path.display(), "rejected: unreadable");
            return false;
        };

        let line_count = content::clean_lines(text, self.exclude_link_only).len();
        if line_count < self.min_content_lines {
            debug!(
                path = %candidate.path.display(),
                line_count, "rejected: too few content lines"
            );
            return false;
        }

        true
    }

    fn meets_size_threshold(
        &self,
        candidate: &PageCandidate<'_>,
        cache: &mut ContentCache,
    ) -> bool {
        match self.size_threshold {
            SizeThreshold::FileBytes(min) => candidate.size_bytes >= min,
            SizeThreshold::ContentChars(min) => {
                let Some(text) = cache.read(candidate.path) else {
                    return false;
                };
                let cleaned =
                    content::clean_lines(text, self.exclude_link_only).join(" ");
                cleaned.chars().count() >= min
            }
        }
    }

    fn matches_path_patterns(&self, display_path: &str) -> bool {
        if !self.include.is_empty()
            && !self.include.iter().any(|p| p.matches(display_path))
        {
            return false;
        }

        if self.exclude.iter().any(|p| p.matches(display_path)) {
            return false;
        }

        true
    }
}

fn compile_patterns(patterns: &[String]) -> Result<Vec<Pattern>, FilterError> {
    patterns
        .iter()
        .map(|pattern| {
            Pattern::new(pattern).map_err(|source| FilterError::InvalidPattern {
                pattern: pattern.clone(),
                source,
            })
        })
        .collect()
}
