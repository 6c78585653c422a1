use std::collections::HashMap;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use std::sync::{Arc, RwLock};

use thiserror::Error;

/// A destination for published files.
pub trait Store {
    type Error: std::error::Error + Send + Sync + 'static;

    /// Stores `contents` at `path`, relative to the root of the published site.
    fn store(&self, path: &Path, contents: &str) -> Result<(), Self::Error>;
}

/// Returns the file a location is published to: its `index.html`.
pub fn index_file_for(location_path: &str) -> PathBuf {
    let path = location_path.trim_matches('/');

    if path.is_empty() {
        PathBuf::from("index.html")
    } else {
        PathBuf::from(path).join("index.html")
    }
}

pub struct DiskStorage {
    output_path: PathBuf,
}

impl DiskStorage {
    pub fn new(output_path: impl Into<PathBuf>) -> Self {
        Self {
            output_path: output_path.into(),
        }
    }
}

impl Store for DiskStorage {
    type Error = io::Error;

    fn store(&self, path: &Path, contents: &str) -> Result<(), Self::Error> {
        let output_path = self.output_path.join(path);

        if let Some(parent) = output_path.parent() {
            fs::create_dir_all(parent)?;
        }

        fs::write(&output_path, contents)?;

        tracing::debug!(path = %output_path.display(), "Wrote file");

        Ok(())
    }
}

/// Keeps published files in memory, keyed by their absolute path on the site
/// (e.g., `/posts/index.html`).
#[derive(Default, Clone)]
pub struct InMemoryStorage {
    storage: Arc<RwLock<HashMap<String, String>>>,
}

impl InMemoryStorage {
    pub fn get(&self, path: &str) -> Option<String> {
        self.storage.read().ok()?.get(path).cloned()
    }

    /// Returns the paths of every stored file, sorted.
    pub fn paths(&self) -> Vec<String> {
        let mut paths = self
            .storage
            .read()
            .map(|storage| storage.keys().cloned().collect::<Vec<_>>())
            .unwrap_or_default();
        paths.sort();
        paths
    }
}

#[derive(Error, Debug)]
pub enum InMemoryStorageError {
    #[error("poisoned")]
    Poisoned,
}

impl Store for InMemoryStorage {
    type Error = InMemoryStorageError;

    fn store(&self, path: &Path, contents: &str) -> Result<(), Self::Error> {
        self.storage
            .write()
            .map_err(|_| InMemoryStorageError::Poisoned)?
            .insert(
                format!("/{}", path.to_string_lossy()),
                contents.to_string(),
            );

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_index_file_for() {
        assert_eq!(index_file_for("/"), PathBuf::from("index.html"));
        assert_eq!(index_file_for("/posts"), PathBuf::from("posts/index.html"));
        assert_eq!(
            index_file_for("/tags/swift/"),
            PathBuf::from("tags/swift/index.html")
        );
    }

    #[test]
    fn test_disk_storage_creates_directories() {
        let dir = tempfile::tempdir().unwrap();
        let storage = DiskStorage::new(dir.path());

        storage
            .store(Path::new("posts/hello/index.html"), "<p>Hello</p>")
            .unwrap();

        assert_eq!(
            fs::read_to_string(dir.path().join("posts/hello/index.html")).unwrap(),
            "<p>Hello</p>"
        );
    }

    #[test]
    fn test_in_memory_storage() {
        let storage = InMemoryStorage::default();

        storage.store(Path::new("feed.rss"), "<rss/>").unwrap();

        assert_eq!(storage.get("/feed.rss").as_deref(), Some("<rss/>"));
        assert_eq!(storage.paths(), vec!["/feed.rss"]);
    }
}
