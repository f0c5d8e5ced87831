//! Configuration types and CLI options.
//!
//! This module defines enums and structs used for command-line argument parsing
//! and configuration.

use std::path::PathBuf;

use clap::{Parser, ValueEnum};
use url::Url;

use crate::config::constants::{
    DEFAULT_REGISTRY_URL, DEFAULT_RESOURCE_DIR, DEFAULT_USER_AGENT, TLD_CACHE_FILE_NAME,
};
use crate::error_handling::InitializationError;

/// Logging level for the application.
///
/// Controls the verbosity of log output, from most restrictive (Error) to most
/// verbose (Trace).
#[derive(Clone, Debug, ValueEnum)]
pub enum LogLevel {
    /// Only error messages
    Error,
    /// Error and warning messages
    Warn,
    /// Error, warning, and informational messages
    Info,
    /// All messages except trace
    Debug,
    /// All messages including trace
    Trace,
}

impl From<LogLevel> for log::LevelFilter {
    fn from(l: LogLevel) -> Self {
        match l {
            LogLevel::Error => log::LevelFilter::Error,
            LogLevel::Warn => log::LevelFilter::Warn,
            LogLevel::Info => log::LevelFilter::Info,
            LogLevel::Debug => log::LevelFilter::Debug,
            LogLevel::Trace => log::LevelFilter::Trace,
        }
    }
}

/// Log output format.
///
/// - `Plain`: Human-readable format with colors (default)
/// - `Json`: Structured JSON format for machine parsing
#[derive(Clone, Debug, ValueEnum)]
pub enum LogFormat {
    /// Human-readable format with colors (default)
    Plain,
    /// Structured JSON format for machine parsing
    Json,
}

/// Library configuration (no CLI dependencies).
///
/// Owned by the plugin session and passed by reference to everything that
/// needs it.
///
/// # Examples
///
/// ```no_run
/// use image_downloader::Config;
/// use std::path::PathBuf;
///
/// let config = Config {
///     resource_dir: PathBuf::from("/tmp/imgdler"),
///     ..Default::default()
/// };
/// assert!(config.cache_path().ends_with("tlds-alpha-by-domain.txt"));
/// ```
#[derive(Debug, Clone)]
pub struct Config {
    /// Directory holding the plugin's resources (the TLD cache lives here)
    pub resource_dir: PathBuf,

    /// Registry document URL
    pub registry_url: String,

    /// HTTP User-Agent header value
    pub user_agent: String,

    /// Log level
    pub log_level: LogLevel,

    /// Log format
    pub log_format: LogFormat,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            resource_dir: PathBuf::from(DEFAULT_RESOURCE_DIR),
            registry_url: DEFAULT_REGISTRY_URL.to_string(),
            user_agent: DEFAULT_USER_AGENT.to_string(),
            log_level: LogLevel::Info,
            log_format: LogFormat::Plain,
        }
    }
}

impl Config {
    /// Location of the persisted TLD list.
    pub fn cache_path(&self) -> PathBuf {
        self.resource_dir.join(TLD_CACHE_FILE_NAME)
    }

    /// Checks that the registry URL is an absolute http(s) URL.
    pub fn validate(&self) -> Result<(), InitializationError> {
        let parsed = Url::parse(&self.registry_url).map_err(|e| {
            InitializationError::InvalidRegistryUrl(format!("{}: {}", self.registry_url, e))
        })?;
        match parsed.scheme() {
            "http" | "https" => Ok(()),
            other => Err(InitializationError::InvalidRegistryUrl(format!(
                "{}: unsupported scheme '{}'",
                self.registry_url, other
            ))),
        }
    }
}

/// Command-line options for the `image_downloader` binary.
#[derive(Debug, Clone, Parser)]
#[command(
    name = "image_downloader",
    version,
    about = "Load, cache and inspect the list of legal top-level domains"
)]
pub struct Opt {
    /// Resource directory holding the TLD cache
    #[arg(long, value_name = "DIR", default_value = DEFAULT_RESOURCE_DIR)]
    pub resource_dir: PathBuf,

    /// Registry document URL
    #[arg(long, value_name = "URL", default_value = DEFAULT_REGISTRY_URL)]
    pub registry_url: String,

    /// Fetch the registry even if a cached list exists
    #[arg(long)]
    pub refresh: bool,

    /// Print every label after loading
    #[arg(long)]
    pub list: bool,

    /// HTTP User-Agent header value
    #[arg(long, default_value = DEFAULT_USER_AGENT)]
    pub user_agent: String,

    /// Log level
    #[arg(long, value_enum, default_value_t = LogLevel::Info)]
    pub log_level: LogLevel,

    /// Log format
    #[arg(long, value_enum, default_value_t = LogFormat::Plain)]
    pub log_format: LogFormat,
}

impl From<Opt> for Config {
    fn from(opt: Opt) -> Self {
        Self {
            resource_dir: opt.resource_dir,
            registry_url: opt.registry_url,
            user_agent: opt.user_agent,
            log_level: opt.log_level,
            log_format: opt.log_format,
        }
    }
}
