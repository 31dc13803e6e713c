//! Convert command: parse an export and write llms.txt.

use std::path::PathBuf;

use notion_llms_core::{
    ExportParser, FilterOptions, LlmsTxtGenerator, SizeThreshold,
};
use tracing::info;

use crate::Cli;

pub fn run(cli: &Cli) {
    let output = cli
        .output
        .clone()
        .unwrap_or_else(|| PathBuf::from("notion-llms.txt"));

    let size_threshold = match (cli.min_bytes, cli.min_chars) {
        (Some(bytes), _) => SizeThreshold::FileBytes(bytes),
        (None, Some(chars)) => SizeThreshold::ContentChars(chars),
        (None, None) => SizeThreshold::ContentChars(100),
    };

    let options = FilterOptions {
        size_threshold,
        min_content_lines: cli.min_lines,
        exclude_untitled: !cli.include_untitled,
        exclude_link_only: !cli.include_link_only,
        include_patterns: cli.include.clone(),
        exclude_patterns: cli.exclude.clone(),
        snippet_length: cli.snippet_length,
        ..FilterOptions::default()
    };

    let mut parser = match ExportParser::new(&cli.export_path, &options) {
        Ok(parser) => parser,
        Err(e) => {
            eprintln!("Error: {e}");
            std::process::exit(1);
        }
    };

    info!(path = %cli.export_path.display(), "scanning Notion export");
    let export = match parser.parse() {
        Ok(export) => export,
        Err(e) => {
            eprintln!("Error parsing export: {e}");
            std::process::exit(1);
        }
    };

    let generator = LlmsTxtGenerator::new();
    if let Err(e) = generator.write_to_file(&export, &output) {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }

    let stats = generator.stats(&export);
    println!(
        "Processed {} pages in {} categories",
        stats.total_pages, stats.total_categories
    );
    println!(
        "Wrote {} ({} lines, {} chars)",
        output.display(),
        stats.output_lines,
        stats.output_chars
    );
}
