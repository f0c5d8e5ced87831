//! Top-level domain list acquisition and caching.
//!
//! This module handles:
//! - Fetching the authoritative registry document (`RegistryFetcher`)
//! - Normalizing it into labels, including decoded IDNA forms (`process`)
//! - Persisting the labels on disk (`CacheStore`)
//! - Serving from cache and refreshing when the cache is absent (`TldLoader`)
//!
//! The cache has no expiry. It is only rebuilt when it does not exist or
//! when `TldLoader::update` is called explicitly.

mod cache;
mod fetch;
mod normalize;

use std::path::Path;

use crate::config::Config;
use crate::error_handling::{InitializationError, TldError};
use crate::initialization::init_registry_client;

pub use cache::CacheStore;
pub use fetch::RegistryFetcher;
pub use normalize::process;

/// Ordered list of legal TLD labels produced by one load or update.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TldSet {
    labels: Vec<String>,
}

impl TldSet {
    /// Labels in load order.
    pub fn labels(&self) -> &[String] {
        &self.labels
    }

    /// Number of labels.
    pub fn len(&self) -> usize {
        self.labels.len()
    }

    /// Returns `true` if no label was loaded.
    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }

    /// Iterates over the labels in load order.
    pub fn iter(&self) -> std::slice::Iter<'_, String> {
        self.labels.iter()
    }

    /// Case-insensitive membership test for a single label (no dots).
    ///
    /// A leading dot is ignored, so `".com"` and `"COM"` both match `com`.
    pub fn contains(&self, label: &str) -> bool {
        let wanted = label.trim_start_matches('.').to_lowercase();
        self.labels.iter().any(|l| *l == wanted)
    }

    /// Consumes the set, returning the labels.
    pub fn into_vec(self) -> Vec<String> {
        self.labels
    }
}

impl From<Vec<String>> for TldSet {
    fn from(labels: Vec<String>) -> Self {
        Self { labels }
    }
}

impl<'a> IntoIterator for &'a TldSet {
    type Item = &'a String;
    type IntoIter = std::slice::Iter<'a, String>;

    fn into_iter(self) -> Self::IntoIter {
        self.labels.iter()
    }
}

/// Loads the TLD list from cache, falling back to the registry.
#[derive(Debug, Clone)]
pub struct TldLoader {
    fetcher: RegistryFetcher,
    store: CacheStore,
}

impl TldLoader {
    /// Creates a loader from its two collaborators.
    pub fn new(fetcher: RegistryFetcher, store: CacheStore) -> Self {
        Self { fetcher, store }
    }

    /// Builds a loader from configuration: registry client, registry URL and
    /// cache path.
    ///
    /// # Errors
    ///
    /// Returns an `InitializationError` if the registry URL is invalid or
    /// the HTTP client cannot be built.
    pub fn from_config(config: &Config) -> Result<Self, InitializationError> {
        config.validate()?;
        let client = init_registry_client(config)?;
        Ok(Self::new(
            RegistryFetcher::new(client, config.registry_url.clone()),
            CacheStore::new(config.cache_path()),
        ))
    }

    /// Location of the cache file this loader reads and writes.
    pub fn cache_path(&self) -> &Path {
        self.store.path()
    }

    /// Returns the cached list, or fetches and caches it when absent.
    ///
    /// # Errors
    ///
    /// Only a missing cache is recovered. Any other cache error, and any
    /// error from `update`, is returned unchanged.
    pub async fn load(&self) -> Result<TldSet, TldError> {
        match self.store.read().await {
            Ok(labels) => {
                log::info!(
                    "Loaded {} TLDs from cache {}",
                    labels.len(),
                    self.store.path().display()
                );
                Ok(TldSet::from(labels))
            }
            Err(TldError::NotFound { path }) => {
                log::info!(
                    "No TLD cache at {}, fetching registry {}",
                    path.display(),
                    self.fetcher.url()
                );
                self.update().await
            }
            Err(e) => Err(e),
        }
    }

    /// Fetches and normalizes the registry, then replaces the cache.
    ///
    /// The cache is written only after fetch and normalization both succeed,
    /// so a failure leaves any existing cache untouched.
    pub async fn update(&self) -> Result<TldSet, TldError> {
        let document = self.fetcher.fetch().await?;
        log::debug!(
            "Fetched {} bytes from {}",
            document.len(),
            self.fetcher.url()
        );

        let labels = process(&document)?;
        self.store.write(&labels).await?;
        log::info!(
            "Cached {} TLDs at {}",
            labels.len(),
            self.store.path().display()
        );

        Ok(TldSet::from(labels))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error_handling::TldErrorKind;
    use tempfile::TempDir;

    fn set(items: &[&str]) -> TldSet {
        TldSet::from(items.iter().map(|s| s.to_string()).collect::<Vec<_>>())
    }

    #[test]
    fn test_tld_set_contains() {
        let tlds = set(&["com", "xn--p1ai", "рф"]);
        assert!(tlds.contains("com"));
        assert!(tlds.contains("COM"));
        assert!(tlds.contains(".com"));
        assert!(tlds.contains("РФ"));
        assert!(!tlds.contains("example"));
        assert!(!tlds.contains(""));
    }

    #[test]
    fn test_tld_set_preserves_order() {
        let tlds = set(&["org", "com", "net"]);
        let collected: Vec<&String> = tlds.iter().collect();
        assert_eq!(collected, vec!["org", "com", "net"]);
        assert_eq!(tlds.len(), 3);
        assert!(!tlds.is_empty());
        assert_eq!(tlds.into_vec(), vec!["org", "com", "net"]);
    }

    #[test]
    fn test_from_config_uses_cache_path() {
        let temp_dir = TempDir::new().expect("Failed to create temp directory");
        let config = Config {
            resource_dir: temp_dir.path().to_path_buf(),
            ..Default::default()
        };
        let loader = TldLoader::from_config(&config).unwrap();
        assert_eq!(loader.cache_path(), config.cache_path().as_path());
    }

    #[test]
    fn test_from_config_rejects_invalid_registry_url() {
        let config = Config {
            registry_url: "ftp://example.test/tlds.txt".to_string(),
            ..Default::default()
        };
        assert!(matches!(
            TldLoader::from_config(&config),
            Err(InitializationError::InvalidRegistryUrl(_))
        ));
    }

    #[tokio::test]
    async fn test_load_cache_hit_skips_network() {
        let temp_dir = TempDir::new().expect("Failed to create temp directory");
        let config = Config {
            resource_dir: temp_dir.path().to_path_buf(),
            // Unreachable on purpose: a fetch would fail the test
            registry_url: "http://127.0.0.1:1/tlds.txt".to_string(),
            ..Default::default()
        };
        std::fs::write(config.cache_path(), "com\nnet\norg\n").unwrap();

        let loader = TldLoader::from_config(&config).unwrap();
        assert_eq!(loader.load().await.unwrap(), set(&["com", "net", "org"]));
    }

    #[tokio::test]
    async fn test_load_cache_miss_surfaces_fetch_error() {
        let temp_dir = TempDir::new().expect("Failed to create temp directory");
        let config = Config {
            resource_dir: temp_dir.path().to_path_buf(),
            registry_url: "http://127.0.0.1:1/tlds.txt".to_string(),
            ..Default::default()
        };

        let loader = TldLoader::from_config(&config).unwrap();
        let err = loader.load().await.unwrap_err();
        assert_eq!(err.kind(), TldErrorKind::Network);
        assert!(!config.cache_path().exists());
    }
}
