//! Page and export records produced by the parser.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// A single page discovered in a Notion export.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Page {
    /// Clean page title, derived from the filename stem.
    pub title: String,
    /// 32-character lowercase hex page id embedded in the filename.
    pub page_id: String,
    /// Absolute path to the source markdown file.
    pub file_path: PathBuf,
    /// Hierarchical category derived from the directory structure,
    /// e.g. `"Projects - Backend"`. `"Root"` for top-level files.
    pub category: String,
    /// Raw file size in bytes.
    pub size_bytes: u64,
    /// Short excerpt of the cleaned page content.
    pub snippet: String,
}

impl Page {
    /// Notion URL for this page, derived purely from the page id.
    pub fn url(&self) -> String {
        format!("https://notion.so/{}", self.page_id)
    }

    /// Ordering key for listing pages within a category (higher first).
    pub fn priority(&self) -> u64 {
        self.size_bytes
    }
}

/// The parsed export: all accepted pages and their distinct categories.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Export {
    /// Accepted pages, in discovery order.
    pub pages: Vec<Page>,
    /// Distinct categories of the accepted pages, sorted.
    pub categories: Vec<String>,
}

impl Export {
    /// Pages belonging to `category`, ordered by priority descending.
    /// Ties are broken by title so the ordering is stable across scans.
    pub fn pages_by_category(&self, category: &str) -> Vec<&Page> {
        let mut pages: Vec<&Page> =
            self.pages.iter().filter(|p| p.category == category).collect();
        pages.sort_by(|a, b| {
            b.priority().cmp(&a.priority()).then_with(|| a.title.cmp(&b.title))
        });
        pages
    }

    /// The top `limit` pages across all categories, by priority descending.
    pub fn top_pages(&self, limit: usize) -> Vec<&Page> {
        let mut pages: Vec<&Page> = self.pages.iter().collect();
        pages.sort_by(|a, b| {
            b.priority().cmp(&a.priority()).then_with(|| a.title.cmp(&b.title))
        });
        pages.truncate(limit);
        pages
    }
}
