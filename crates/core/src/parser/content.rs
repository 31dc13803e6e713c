//! Content classification heuristics.
//!
//! Works on plain text only: no markdown parsing beyond recognizing
//! heading prefixes and whole-line link constructs.

use std::sync::LazyLock;

use regex::Regex;

/// Ordered whole-line matchers for link-only lines. A line matching any of
/// these carries no prose content of its own.
static LINK_ONLY_PATTERNS: LazyLock<Vec<Regex>> = LazyLock::new(|| {
    [
        r"^\s*[-*]\s*\[.*?\]\(.*?\)\s*$", // - [text](url)
        r"^\s*\[.*?\]\(.*?\)\s*$",        // [text](url)
        r"^\s*https?://\S+\s*$",          // bare URL
    ]
    .into_iter()
    .map(|p| Regex::new(p).expect("valid link-only regex"))
    .collect()
});

/// Whether a line's entire content is a single link construct or bare URL.
pub fn is_link_only(line: &str) -> bool {
    let line = line.trim();
    LINK_ONLY_PATTERNS.iter().any(|re| re.is_match(line))
}

/// Split `content` into cleaned lines.
///
/// A line survives when, after trimming, it is non-empty, is not a markdown
/// heading, and (when `exclude_link_only` is set) is not link-only.
/// Surviving lines keep their original relative order.
pub fn clean_lines(content: &str, exclude_link_only: bool) -> Vec<&str> {
    content
        .trim()
        .lines()
        .map(str::trim)
        .filter(|line| keep_line(line, exclude_link_only))
        .collect()
}

fn keep_line(line: &str, exclude_link_only: bool) -> bool {
    if line.is_empty() {
        return false;
    }

    if line.starts_with('#') {
        return false;
    }

    if exclude_link_only && is_link_only(line) {
        return false;
    }

    true
}

/// Extract a short snippet from raw page content.
///
/// Cleans the content, additionally drops `": "` key/value lines (Notion
/// database properties), joins the survivors with single spaces, and
/// truncates to `max_length` characters with a `"..."` suffix. Returns an
/// empty string when nothing survives.
pub fn extract_snippet(
    content: &str,
    exclude_link_only: bool,
    max_length: usize,
) -> String {
    let snippet_lines: Vec<&str> = clean_lines(content, exclude_link_only)
        .into_iter()
        .filter(|line| !line.contains(": "))
        .collect();

    if snippet_lines.is_empty() {
        return String::new();
    }

    let full_text = snippet_lines.join(" ");
    let full_text = full_text.trim();

    if full_text.chars().count() <= max_length {
        return full_text.to_string();
    }

    let truncated: String = full_text.chars().take(max_length).collect();
    format!("{}...", truncated.trim_end())
}
