//! HTTP client initialization.

use crate::config::{Config, REGISTRY_FETCH_TIMEOUT};
use crate::error_handling::InitializationError;
use reqwest::ClientBuilder;

/// Initializes the HTTP client used to download the TLD registry.
///
/// Creates a `reqwest::Client` configured with:
/// - User-Agent header from the configuration
/// - The fixed registry timeout (`REGISTRY_FETCH_TIMEOUT`)
///
/// # Errors
///
/// Returns `InitializationError::HttpClientError` if client creation fails.
pub fn init_registry_client(config: &Config) -> Result<reqwest::Client, InitializationError> {
    let client = ClientBuilder::new()
        .timeout(REGISTRY_FETCH_TIMEOUT)
        .user_agent(config.user_agent.clone())
        .build()?;
    Ok(client)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_init_registry_client_default_config() {
        let config = Config::default();
        assert!(init_registry_client(&config).is_ok());
    }

    #[test]
    fn test_init_registry_client_custom_user_agent() {
        let config = Config {
            user_agent: "imgdler-test/1.0".to_string(),
            ..Default::default()
        };
        assert!(init_registry_client(&config).is_ok());
    }
}
