//! Recursive export directory walker.

use std::path::{Path, PathBuf};

use thiserror::Error;
use walkdir::WalkDir;

#[derive(Debug, Error)]
pub enum WalkerError {
    #[error("export root does not exist: {0}")]
    MissingRoot(String),

    #[error("export root is not a directory: {0}")]
    NotADirectory(String),

    #[error("failed to walk export directory {0}: {1}")]
    Walk(String, #[source] walkdir::Error),

    #[error("failed to read file metadata {0}: {1}")]
    Metadata(String, #[source] std::io::Error),
}

/// A markdown file discovered under the export root.
#[derive(Debug, Clone)]
pub struct WalkedFile {
    /// Absolute path to the file.
    pub absolute_path: PathBuf,
    /// Path relative to the export root.
    pub relative_path: PathBuf,
    /// File size in bytes.
    pub size_bytes: u64,
}

/// Walker for discovering markdown files in an extracted Notion export.
#[derive(Debug)]
pub struct ExportWalker {
    root: PathBuf,
}

impl ExportWalker {
    /// Create a walker for the given export root. Fails when the root does
    /// not exist or is not a directory; no partial scan is attempted.
    pub fn new(root: &Path) -> Result<Self, WalkerError> {
        let root = root
            .canonicalize()
            .map_err(|_| WalkerError::MissingRoot(root.display().to_string()))?;

        if !root.is_dir() {
            return Err(WalkerError::NotADirectory(root.display().to_string()));
        }

        Ok(Self { root })
    }

    /// Walk the export and return every `.md` file, in traversal order.
    /// Hidden directories are skipped; enumeration errors are fatal.
    pub fn walk(&self) -> Result<Vec<WalkedFile>, WalkerError> {
        let mut files = Vec::new();

        for entry in WalkDir::new(&self.root)
            .follow_links(false)
            .into_iter()
            .filter_entry(|e| !is_hidden(e))
        {
            let entry = entry.map_err(|e| {
                WalkerError::Walk(self.root.display().to_string(), e)
            })?;

            let path = entry.path();
            if !path.is_file() || !is_markdown_file(path) {
                continue;
            }

            let metadata = path.metadata().map_err(|e| {
                WalkerError::Metadata(path.display().to_string(), e)
            })?;

            let relative_path =
                path.strip_prefix(&self.root).unwrap_or(path).to_path_buf();

            files.push(WalkedFile {
                absolute_path: path.to_path_buf(),
                relative_path,
                size_bytes: metadata.len(),
            });
        }

        Ok(files)
    }

    /// The canonicalized export root.
    pub fn root(&self) -> &Path {
        &self.root
    }
}

fn is_hidden(entry: &walkdir::DirEntry) -> bool {
    // Never filter the root itself (depth 0).
    entry.depth() > 0
        && entry.file_name().to_string_lossy().starts_with('.')
}

fn is_markdown_file(path: &Path) -> bool {
    path.extension().and_then(|e| e.to_str()).is_some_and(|e| e == "md")
}
