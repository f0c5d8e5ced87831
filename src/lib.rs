//! image_downloader library: the legal top-level domain list behind the
//! chat image downloader.
//!
//! Image links found in conversation are only considered when their domain
//! ends in a legal TLD. This library maintains that list: it fetches the
//! authoritative IANA registry, normalizes it (lowercase, comments dropped,
//! punycode labels followed by their Unicode form), caches it on disk and
//! serves it from the cache on later runs.
//!
//! # Example
//!
//! ```no_run
//! use image_downloader::{Config, Host, PluginSession};
//!
//! struct Stdout;
//!
//! impl Host for Stdout {
//!     fn print(&self, text: &str) {
//!         println!("{}", text);
//!     }
//! }
//!
//! # #[tokio::main]
//! # async fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let session = PluginSession::new(Config::default(), Stdout)?;
//! let tlds = session.valid_tlds().await?;
//! assert!(tlds.contains("com"));
//! # Ok(())
//! # }
//! ```
//!
//! # Requirements
//!
//! Loading is async and requires a Tokio runtime.

#![warn(missing_docs)]

pub mod config;
mod error_handling;
pub mod initialization;
mod session;
pub mod tld;

// Re-export public API
pub use config::{Config, LogFormat, LogLevel, Opt};
pub use error_handling::{InitializationError, TldError, TldErrorKind};
pub use session::{Host, PluginSession};
pub use tld::{TldLoader, TldSet};
