//! Error handling.
//!
//! This module provides:
//! - `InitializationError` for setup failures (logger, HTTP client, config)
//! - `TldError`, the five failure kinds of the TLD subsystem
//! - `TldErrorKind`, a fieldless mirror of `TldError` for reporting
//!
//! Only `TldError::NotFound` is ever recovered locally (a missing cache
//! triggers a registry fetch). Everything else is returned to the caller
//! unchanged.

mod types;

// Re-export public API
pub use types::{InitializationError, TldError, TldErrorKind};
