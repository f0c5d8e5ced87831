//! Registry document retrieval.
//!
//! One GET against the registry endpoint, bounded by the client timeout.
//! No retries and no logging here; the caller decides what to report.

use crate::error_handling::TldError;

/// Fetches the raw TLD registry document.
#[derive(Debug, Clone)]
pub struct RegistryFetcher {
    client: reqwest::Client,
    url: String,
}

impl RegistryFetcher {
    /// Creates a fetcher for `url` using a client built by
    /// `initialization::init_registry_client`.
    pub fn new(client: reqwest::Client, url: impl Into<String>) -> Self {
        Self {
            client,
            url: url.into(),
        }
    }

    /// Registry URL this fetcher requests.
    pub fn url(&self) -> &str {
        &self.url
    }

    /// Downloads the registry document and returns its body untouched.
    ///
    /// # Errors
    ///
    /// - `TldError::Network` on timeout, connection failure or an
    ///   interrupted body
    /// - `TldError::HttpStatus` on any non-2xx response
    pub async fn fetch(&self) -> Result<String, TldError> {
        let response = self
            .client
            .get(&self.url)
            .send()
            .await
            .map_err(|source| self.network_error(source))?;

        let status = response.status();
        if !status.is_success() {
            return Err(TldError::HttpStatus {
                url: self.url.clone(),
                status,
            });
        }

        response
            .text()
            .await
            .map_err(|source| self.network_error(source))
    }

    fn network_error(&self, source: reqwest::Error) -> TldError {
        TldError::Network {
            url: self.url.clone(),
            source,
        }
    }
}
