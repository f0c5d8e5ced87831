//! Configuration constants.
//!
//! Fixed endpoints, file names and timeouts used by the TLD subsystem.

use std::time::Duration;

/// Authoritative list of delegated top-level domains, published by IANA.
pub const DEFAULT_REGISTRY_URL: &str = "https://data.iana.org/TLD/tlds-alpha-by-domain.txt";

/// Registry request timeout.
/// The list is a few kilobytes; anything slower than this is treated as a
/// network failure rather than blocking the caller.
pub const REGISTRY_FETCH_TIMEOUT: Duration = Duration::from_secs(3);

/// Resource directory used when none is configured
pub const DEFAULT_RESOURCE_DIR: &str = ".image_downloader";

/// Name of the cached TLD list inside the resource directory
pub const TLD_CACHE_FILE_NAME: &str = "tlds-alpha-by-domain.txt";

/// ASCII compatible encoding prefix marking a punycode label
pub const ACE_PREFIX: &str = "xn--";

/// Name used as prefix for messages relayed to the host
pub const PLUGIN_NAME: &str = "Image downloader";

/// Plugin version announced to the host
pub const PLUGIN_VERSION: &str = "0.1-alpha1";

/// Default User-Agent string for registry requests.
pub const DEFAULT_USER_AGENT: &str = concat!("image_downloader/", env!("CARGO_PKG_VERSION"));
