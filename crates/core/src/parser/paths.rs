//! Path decomposition: page ids, titles, and categories from file paths.
//!
//! Notion exports embed a 32-character lowercase hex page id in every file
//! and directory name. Everything structural about a page (id, title,
//! category) is derived from its path alone, never from its content.

use std::path::Path;
use std::sync::LazyLock;

use regex::Regex;
use thiserror::Error;

/// Matches the 32-character lowercase hex page id Notion appends to names.
static PAGE_ID_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[a-f0-9]{32}").expect("valid page id regex"));

/// Separator characters trimmed from the ends of titles and category
/// segments after the page id is removed.
const SEPARATORS: &[char] = &[' ', '\t', '-', '_'];

#[derive(Debug, Error)]
pub enum PathError {
    #[error("no page id found in filename: {0}")]
    MissingPageId(String),
}

/// Extract the page id from a filename stem.
///
/// Returns the first 32-character lowercase hex run in the stem, or
/// [`PathError::MissingPageId`] when the stem has none. A file without a
/// page id cannot become a page.
pub fn extract_page_id(stem: &str) -> Result<&str, PathError> {
    PAGE_ID_RE
        .find(stem)
        .map(|m| m.as_str())
        .ok_or_else(|| PathError::MissingPageId(stem.to_string()))
}

/// Extract a clean title from a filename stem by removing the page id and
/// trimming surrounding separators. Falls back to the untouched stem when
/// nothing is left.
pub fn extract_title(stem: &str, page_id: &str) -> String {
    let title = stem.replace(page_id, "");
    let title = title.trim_matches(SEPARATORS);

    if title.is_empty() { stem.to_string() } else { title.to_string() }
}

/// Determine the hierarchical category from a page's path relative to the
/// export root.
///
/// Each directory component has its page id stripped and separators
/// trimmed; components that become empty are dropped. Surviving components
/// are joined with `" - "`. Returns `"Root"` for files directly under the
/// export root and `"Uncategorized"` when every component reduces to empty.
pub fn determine_category(relative_path: &Path) -> String {
    let dir_components: Vec<&str> = relative_path
        .parent()
        .map(|p| p.iter().filter_map(|c| c.to_str()).collect())
        .unwrap_or_default();

    if dir_components.is_empty() {
        return "Root".to_string();
    }

    let clean_parts: Vec<String> = dir_components
        .iter()
        .filter_map(|part| {
            let clean = match PAGE_ID_RE.find(part) {
                Some(m) => {
                    let stripped = part.replace(m.as_str(), "");
                    stripped.trim_matches(SEPARATORS).to_string()
                }
                None => (*part).to_string(),
            };
            if clean.is_empty() { None } else { Some(clean) }
        })
        .collect();

    if clean_parts.is_empty() {
        "Uncategorized".to_string()
    } else {
        clean_parts.join(" - ")
    }
}

/// Logical display path used for glob filtering: `category/title`, or the
/// bare title for pages in the root category.
pub fn display_path(category: &str, title: &str) -> String {
    if category == "Root" {
        title.to_string()
    } else {
        format!("{category}/{title}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn test_extract_page_id() {
        let id = extract_page_id(
            "AI Development Guidelines abc123def456789012345678901234ab",
        )
        .unwrap();
        assert_eq!(id, "abc123def456789012345678901234ab");

        let id = extract_page_id("Setup Guide def345678901234567890abcdef12345")
            .unwrap();
        assert_eq!(id, "def345678901234567890abcdef12345");
    }

    #[test]
    fn test_extract_page_id_missing() {
        let err = extract_page_id("No ID Here").unwrap_err();
        assert!(matches!(err, PathError::MissingPageId(_)));
        assert!(err.to_string().contains("No ID Here"));
    }

    #[test]
    fn test_extract_page_id_ignores_uppercase_hex() {
        assert!(extract_page_id("Page ABC123DEF456789012345678901234AB").is_err());
    }

    #[test]
    fn test_extract_title() {
        let title = extract_title(
            "AI Development Guidelines abc123def456789012345678901234ab",
            "abc123def456789012345678901234ab",
        );
        assert_eq!(title, "AI Development Guidelines");
    }

    #[test]
    fn test_extract_title_keeps_inner_separators() {
        let title = extract_title(
            "Meeting Notes - 2025-08-04 abc56789012345678901234567890abc",
            "abc56789012345678901234567890abc",
        );
        assert_eq!(title, "Meeting Notes - 2025-08-04");
    }

    #[test]
    fn test_extract_title_falls_back_to_stem() {
        // A stem that is nothing but the page id keeps the full stem.
        let stem = "abc123def456789012345678901234ab";
        assert_eq!(extract_title(stem, stem), stem);
    }

    #[test]
    fn test_determine_category_root() {
        assert_eq!(determine_category(&PathBuf::from("test.md")), "Root");
    }

    #[test]
    fn test_determine_category_strips_page_ids() {
        let path = PathBuf::from(
            "Projects abc123def456789012345678901234ab/page.md",
        );
        assert_eq!(determine_category(&path), "Projects");
    }

    #[test]
    fn test_determine_category_joins_nested_directories() {
        let path = PathBuf::from(
            "Projects abc123def456789012345678901234ab/Backend def456789012345678901234567890ab/page.md",
        );
        assert_eq!(determine_category(&path), "Projects - Backend");
    }

    #[test]
    fn test_determine_category_uncategorized() {
        // A directory named after its page id alone reduces to empty.
        let path =
            PathBuf::from("abc123def456789012345678901234ab/page.md");
        assert_eq!(determine_category(&path), "Uncategorized");
    }

    #[test]
    fn test_determine_category_drops_empty_components() {
        let path = PathBuf::from(
            "abc123def456789012345678901234ab/Team def456789012345678901234567890ab/page.md",
        );
        assert_eq!(determine_category(&path), "Team");
    }

    #[test]
    fn test_display_path() {
        assert_eq!(display_path("Projects", "Guide"), "Projects/Guide");
        assert_eq!(display_path("Root", "Guide"), "Guide");
    }
}
