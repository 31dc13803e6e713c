//! llms.txt rendering.
//!
//! Renders a parsed [`Export`] as a flat grouped listing: one section per
//! category, pages within a section ordered by priority.

use std::fs;
use std::path::Path;

use serde::Serialize;
use thiserror::Error;

use crate::export::Export;

#[derive(Debug, Error)]
pub enum GeneratorError {
    #[error("failed to write output file {0}: {1}")]
    Write(String, #[source] std::io::Error),
}

/// Summary of a generated llms.txt document.
#[derive(Debug, Clone, Serialize)]
pub struct SummaryStats {
    pub total_pages: usize,
    pub total_categories: usize,
    pub largest_page_size: u64,
    pub output_chars: usize,
    pub output_lines: usize,
}

/// Generates llms.txt output from a parsed export.
#[derive(Debug, Default)]
pub struct LlmsTxtGenerator;

impl LlmsTxtGenerator {
    pub fn new() -> Self {
        Self
    }

    /// Render the export as llms.txt text.
    pub fn generate(&self, export: &Export) -> String {
        let mut lines = vec![
            "# Notion Workspace".to_string(),
            String::new(),
            "> Notion page structure and links overview".to_string(),
            String::new(),
        ];

        for category in &export.categories {
            let pages = export.pages_by_category(category);
            if pages.is_empty() {
                continue;
            }

            lines.push(format!("## {category}"));
            for page in pages {
                lines.push(format!(
                    "- [{}]({}): {}",
                    page.title,
                    page.url(),
                    page.snippet
                ));
            }
            lines.push(String::new());
        }

        lines.join("\n")
    }

    /// Render the export and write it to `output_path`.
    pub fn write_to_file(
        &self,
        export: &Export,
        output_path: &Path,
    ) -> Result<(), GeneratorError> {
        let content = self.generate(export);
        fs::write(output_path, content).map_err(|e| {
            GeneratorError::Write(output_path.display().to_string(), e)
        })
    }

    /// Summary statistics for the export and its rendering.
    pub fn stats(&self, export: &Export) -> SummaryStats {
        let content = self.generate(export);
        SummaryStats {
            total_pages: export.pages.len(),
            total_categories: export.categories.len(),
            largest_page_size: export
                .pages
                .iter()
                .map(|p| p.size_bytes)
                .max()
                .unwrap_or(0),
            output_chars: content.chars().count(),
            output_lines: content.lines().count(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::export::Page;
    use std::path::PathBuf;
    use tempfile::TempDir;

    fn sample_export() -> Export {
        let page = |title: &str, category: &str, size_bytes: u64, snippet: &str| Page {
            title: title.to_string(),
            page_id: "abc123def456789012345678901234ab".to_string(),
            file_path: PathBuf::from(format!("/export/{title}.md")),
            category: category.to_string(),
            size_bytes,
            snippet: snippet.to_string(),
        };

        Export {
            pages: vec![
                page("Small Doc", "Documentation", 100, "A small document."),
                page("Big Doc", "Documentation", 900, "The big document."),
                page("Roadmap", "Projects", 400, "Plans for the quarter."),
            ],
            categories: vec![
                "Documentation".to_string(),
                "Projects".to_string(),
            ],
        }
    }

    #[test]
    fn test_generate_renders_sections_in_category_order() {
        let output = LlmsTxtGenerator::new().generate(&sample_export());

        let doc_pos = output.find("## Documentation").unwrap();
        let proj_pos = output.find("## Projects").unwrap();
        assert!(doc_pos < proj_pos);
        assert!(output.starts_with("# Notion Workspace\n"));
        assert!(output.contains("> Notion page structure and links overview"));
    }

    #[test]
    fn test_generate_orders_pages_by_size_descending() {
        let output = LlmsTxtGenerator::new().generate(&sample_export());

        let big = output.find("Big Doc").unwrap();
        let small = output.find("Small Doc").unwrap();
        assert!(big < small);
    }

    #[test]
    fn test_generate_page_line_format() {
        let output = LlmsTxtGenerator::new().generate(&sample_export());
        assert!(output.contains(
            "- [Roadmap](https://notion.so/abc123def456789012345678901234ab): Plans for the quarter."
        ));
    }

    #[test]
    fn test_generate_empty_export() {
        let output = LlmsTxtGenerator::new().generate(&Export::default());
        assert!(output.starts_with("# Notion Workspace"));
        assert!(!output.contains("##"));
    }

    #[test]
    fn test_write_to_file() {
        let dir = TempDir::new().unwrap();
        let output_path = dir.path().join("notion-llms.txt");

        LlmsTxtGenerator::new()
            .write_to_file(&sample_export(), &output_path)
            .unwrap();

        let written = std::fs::read_to_string(&output_path).unwrap();
        assert!(written.contains("## Projects"));
    }

    #[test]
    fn test_write_to_file_error_includes_path() {
        let err = LlmsTxtGenerator::new()
            .write_to_file(
                &sample_export(),
                Path::new("/nonexistent/dir/out.txt"),
            )
            .unwrap_err();
        assert!(err.to_string().contains("/nonexistent/dir/out.txt"));
    }

    #[test]
    fn test_stats_agree_with_rendering() {
        let generator = LlmsTxtGenerator::new();
        let export = sample_export();
        let output = generator.generate(&export);
        let stats = generator.stats(&export);

        assert_eq!(stats.total_pages, 3);
        assert_eq!(stats.total_categories, 2);
        assert_eq!(stats.largest_page_size, 900);
        assert_eq!(stats.output_chars, output.chars().count());
        assert_eq!(stats.output_lines, output.lines().count());
    }
}
