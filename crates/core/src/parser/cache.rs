//! Bounded in-memory cache for raw file content.
//!
//! The filter and the snippet extractor both read every accepted page, so
//! raw text is memoized per absolute path. Unreadable files (open errors,
//! invalid UTF-8) are cached as `None` so they are not retried. The cache
//! is owned by one parser and lives for one scan; there is no process-wide
//! state.

use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};

/// Default maximum number of cached files.
pub const DEFAULT_CAPACITY: usize = 1000;

#[derive(Debug)]
struct CacheEntry {
    text: Option<String>,
    last_used: u64,
}

/// Bounded memoizing reader. Evicts the least recently used entry when
/// inserting past capacity.
#[derive(Debug)]
pub struct ContentCache {
    entries: HashMap<PathBuf, CacheEntry>,
    capacity: usize,
    tick: u64,
}

impl Default for ContentCache {
    fn default() -> Self {
        Self::new(DEFAULT_CAPACITY)
    }
}

impl ContentCache {
    /// Create a cache holding at most `capacity` entries.
    pub fn new(capacity: usize) -> Self {
        Self { entries: HashMap::new(), capacity: capacity.max(1), tick: 0 }
    }

    /// Read `path` as UTF-8 text, memoized. Returns `None` when the file
    /// cannot be opened or decoded; the failure itself is memoized too.
    pub fn read(&mut self, path: &Path) -> Option<&str> {
        if !self.entries.contains_key(path) {
            if self.entries.len() >= self.capacity {
                self.evict_oldest();
            }
            let text = fs::read_to_string(path).ok();
            self.entries.insert(
                path.to_path_buf(),
                CacheEntry { text, last_used: 0 },
            );
        }

        self.tick += 1;
        let tick = self.tick;
        let entry = self.entries.get_mut(path)?;
        entry.last_used = tick;
        entry.text.as_deref()
    }

    /// Number of cached entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the cache holds no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    fn evict_oldest(&mut self) {
        let oldest = self
            .entries
            .iter()
            .min_by_key(|(_, entry)| entry.last_used)
            .map(|(path, _)| path.clone());

        if let Some(path) = oldest {
            self.entries.remove(&path);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_read_returns_file_content() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("page.md");
        fs::write(&path, "hello").unwrap();

        let mut cache = ContentCache::default();
        assert_eq!(cache.read(&path), Some("hello"));
        assert_eq!(cache.len(), 1);
    }

    #[test]
    fn test_read_is_memoized() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("page.md");
        fs::write(&path, "original").unwrap();

        let mut cache = ContentCache::default();
        assert_eq!(cache.read(&path), Some("original"));

        // The file changing on disk is not observed within one scan.
        fs::write(&path, "changed").unwrap();
        assert_eq!(cache.read(&path), Some("original"));
    }

    #[test]
    fn test_unreadable_file_cached_as_none() {
        let dir = TempDir::new().unwrap();
        let missing = dir.path().join("missing.md");

        let mut cache = ContentCache::default();
        assert_eq!(cache.read(&missing), None);
        assert_eq!(cache.len(), 1);
        assert_eq!(cache.read(&missing), None);
    }

    #[test]
    fn test_invalid_utf8_cached_as_none() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("binary.md");
        fs::write(&path, [0xff, 0xfe, 0x00]).unwrap();

        let mut cache = ContentCache::default();
        assert_eq!(cache.read(&path), None);
    }

    #[test]
    fn test_eviction_keeps_cache_bounded() {
        let dir = TempDir::new().unwrap();
        let mut cache = ContentCache::new(2);

        let paths: Vec<_> = (0..3)
            .map(|i| {
                let path = dir.path().join(format!("page{i}.md"));
                fs::write(&path, format!("content {i}")).unwrap();
                path
            })
            .collect();

        cache.read(&paths[0]);
        cache.read(&paths[1]);
        assert_eq!(cache.len(), 2);

        cache.read(&paths[2]);
        assert_eq!(cache.len(), 2);
    }

    #[test]
    fn test_eviction_drops_least_recently_used() {
        let dir = TempDir::new().unwrap();
        let mut cache = ContentCache::new(2);

        let a = dir.path().join("a.md");
        let b = dir.path().join("b.md");
        let c = dir.path().join("c.md");
        fs::write(&a, "a").unwrap();
        fs::write(&b, "b").unwrap();
        fs::write(&c, "c").unwrap();

        cache.read(&a);
        cache.read(&b);
        // Touch a so b becomes the eviction candidate.
        cache.read(&a);
        cache.read(&c);

        fs::remove_file(&a).unwrap();
        // Still served from cache: a was not evicted.
        assert_eq!(cache.read(&a), Some("a"));
    }
}
