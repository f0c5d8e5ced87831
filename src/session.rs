//! Plugin session state and host capability.
//!
//! A `PluginSession` owns everything the plugin needs across calls:
//! configuration, the TLD loader, the in-memory TLD set of this process, and
//! the host used to relay messages to the user. Hosts (a chat client, the CLI)
//! plug in through the `Host` trait; nothing here depends on a concrete host.

use std::sync::Arc;

use tokio::sync::Mutex;

use crate::config::{Config, PLUGIN_NAME, PLUGIN_VERSION};
use crate::error_handling::{InitializationError, TldError};
use crate::tld::{TldLoader, TldSet};

/// Capabilities the session needs from the hosting application.
pub trait Host: Send + Sync {
    /// Shows a line of text to the user.
    fn print(&self, text: &str);
}

impl<H: Host + ?Sized> Host for Arc<H> {
    fn print(&self, text: &str) {
        (**self).print(text)
    }
}

/// Per-process plugin state.
pub struct PluginSession<H> {
    config: Config,
    loader: TldLoader,
    host: H,
    // Held across load/update so two refreshes never race on the cache file
    tlds: Mutex<Option<Arc<TldSet>>>,
}

impl<H: Host> PluginSession<H> {
    /// Creates a session from configuration.
    ///
    /// # Errors
    ///
    /// Returns an `InitializationError` if the loader cannot be built.
    pub fn new(config: Config, host: H) -> Result<Self, InitializationError> {
        let loader = TldLoader::from_config(&config)?;
        Ok(Self::with_loader(config, loader, host))
    }

    /// Creates a session around an already built loader.
    pub fn with_loader(config: Config, loader: TldLoader, host: H) -> Self {
        Self {
            config,
            loader,
            host,
            tlds: Mutex::new(None),
        }
    }

    /// Session configuration.
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// The host this session reports to.
    pub fn host(&self) -> &H {
        &self.host
    }

    /// Returns the legal TLDs, loading them on first use.
    ///
    /// The first successful call reads the cache (or fetches the registry
    /// when there is none); later calls reuse the in-memory set. A failure is
    /// logged, relayed to the host, and returned; the next call tries again.
    pub async fn valid_tlds(&self) -> Result<Arc<TldSet>, TldError> {
        let mut guard = self.tlds.lock().await;
        if let Some(tlds) = guard.as_ref() {
            return Ok(Arc::clone(tlds));
        }

        let tlds = Arc::new(self.report(self.loader.load().await, "load")?);
        *guard = Some(Arc::clone(&tlds));
        Ok(tlds)
    }

    /// Fetches the registry again and replaces both the cache and the
    /// in-memory set. Success is silent towards the host; on failure the
    /// previous set and cache are kept and the error is relayed.
    pub async fn refresh_tlds(&self) -> Result<Arc<TldSet>, TldError> {
        let mut guard = self.tlds.lock().await;

        let tlds = Arc::new(self.report(self.loader.update().await, "update")?);
        log::info!("TLD list updated ({} entries)", tlds.len());
        *guard = Some(Arc::clone(&tlds));
        Ok(tlds)
    }

    /// Tells the user the plugin is ready.
    pub fn announce_loaded(&self) {
        self.host
            .print(&format!("{} {} plugin loaded", PLUGIN_NAME, PLUGIN_VERSION));
    }

    /// Drops the in-memory set; the next `valid_tlds` call reads the cache.
    pub async fn forget_tlds(&self) {
        *self.tlds.lock().await = None;
    }

    fn report(
        &self,
        result: Result<TldSet, TldError>,
        action: &str,
    ) -> Result<TldSet, TldError> {
        if let Err(e) = &result {
            log::error!("Failed to {} TLD list: {}", action, e);
            self.host.print(&format!(
                "{}: failed to {} the TLD list ({}): {}",
                PLUGIN_NAME,
                action,
                e.kind(),
                e
            ));
        }
        result
    }
}
