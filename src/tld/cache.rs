//! On-disk TLD list.
//!
//! Plain text, one label per line, no header. Every write replaces the whole
//! file: the new content goes to a uniquely named sibling temporary file which
//! is then renamed over the cache, so readers never observe a half-written
//! list and overlapping writers never share a temporary file.

use std::io::Write;
use std::path::{Path, PathBuf};

use tempfile::NamedTempFile;
use tokio::fs;

use crate::error_handling::TldError;

/// Reads and writes the persisted TLD list.
#[derive(Debug, Clone)]
pub struct CacheStore {
    path: PathBuf,
}

impl CacheStore {
    /// Creates a store for the cache file at `path`.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Cache file location.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Reads the cached labels in file order.
    ///
    /// # Errors
    ///
    /// - `TldError::NotFound` if the cache file does not exist
    /// - `TldError::Io` for any other failure, including non-UTF-8 content
    pub async fn read(&self) -> Result<Vec<String>, TldError> {
        let content = fs::read_to_string(&self.path)
            .await
            .map_err(|e| TldError::from_io(&self.path, e))?;

        Ok(content.lines().map(str::to_string).collect())
    }

    /// Replaces the cache file with `labels`, one per line.
    ///
    /// Creates the parent directory when missing.
    ///
    /// # Errors
    ///
    /// Returns `TldError::Io` if the directory, the temporary file or the
    /// final rename fails. A failed write never touches the existing cache.
    /// Concurrent writes to the same path all succeed; the last rename wins.
    pub async fn write(&self, labels: &[String]) -> Result<(), TldError> {
        let dir = self.parent_dir();
        fs::create_dir_all(&dir)
            .await
            .map_err(|source| io_error(&dir, source))?;

        let mut content = String::with_capacity(labels.iter().map(|l| l.len() + 1).sum());
        for label in labels {
            content.push_str(label);
            content.push('\n');
        }

        let path = self.path.clone();
        tokio::task::spawn_blocking(move || replace_file(&dir, &path, content.as_bytes()))
            .await
            .map_err(|e| io_error(&self.path, std::io::Error::other(e)))?
    }

    fn parent_dir(&self) -> PathBuf {
        match self.path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent.to_path_buf(),
            _ => PathBuf::from("."),
        }
    }
}

/// Writes `content` to a fresh temporary file in `dir` and renames it onto
/// `path`. The temporary file is removed if any step fails.
fn replace_file(dir: &Path, path: &Path, content: &[u8]) -> Result<(), TldError> {
    let mut tmp = NamedTempFile::new_in(dir).map_err(|source| io_error(dir, source))?;
    tmp.write_all(content)
        .map_err(|source| io_error(tmp.path(), source))?;
    tmp.persist(path)
        .map_err(|e| io_error(path, e.error))?;
    Ok(())
}

// Write-side failures are always Io: a missing directory after
// create_dir_all is not a recoverable absence
fn io_error(path: &Path, source: std::io::Error) -> TldError {
    TldError::Io {
        path: path.to_path_buf(),
        source,
    }
}
