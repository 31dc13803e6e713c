mod cmd;
mod logging;

use clap::Parser;
use std::path::PathBuf;

#[derive(Debug, Parser)]
#[command(
    name = "notion-llms",
    version,
    about = "Convert Notion workspace exports to llms.txt for AI agents"
)]
pub struct Cli {
    /// Path to the extracted Notion export directory
    pub export_path: PathBuf,

    /// Output file path (default: notion-llms.txt)
    #[arg(long, short)]
    pub output: Option<PathBuf>,

    /// Enable verbose logging
    #[arg(long, short)]
    pub verbose: bool,

    /// Minimum raw file size in bytes
    #[arg(long, conflicts_with = "min_chars")]
    pub min_bytes: Option<u64>,

    /// Minimum content characters after cleaning (default: 100)
    #[arg(long)]
    pub min_chars: Option<usize>,

    /// Minimum content lines after cleaning
    #[arg(long, default_value_t = 3)]
    pub min_lines: usize,

    /// Keep pages with "Untitled" in their filename
    #[arg(long)]
    pub include_untitled: bool,

    /// Keep link-only lines when cleaning content
    #[arg(long)]
    pub include_link_only: bool,

    /// Include only display paths matching these glob patterns
    /// (comma-separated, e.g. 'Projects/*,Team/Meeting*')
    #[arg(long, value_delimiter = ',')]
    pub include: Vec<String>,

    /// Exclude display paths matching these glob patterns
    /// (comma-separated, e.g. 'Archive/*,Draft*')
    #[arg(long, value_delimiter = ',')]
    pub exclude: Vec<String>,

    /// Length of the content snippet per page
    #[arg(long, default_value_t = 32)]
    pub snippet_length: usize,
}

fn main() {
    let cli = Cli::parse();
    logging::init(cli.verbose);
    cmd::convert::run(&cli);
}
