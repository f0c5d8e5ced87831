//! Main application entry point (CLI binary).
//!
//! A thin wrapper around the `image_downloader` library that handles:
//! - Command-line argument parsing
//! - Logger initialization
//! - A terminal `Host` so session messages reach the user
//!
//! All core functionality is implemented in the library crate.

use anyhow::{Context, Result};
use clap::Parser;
use std::process;

use image_downloader::config::{PLUGIN_NAME, PLUGIN_VERSION};
use image_downloader::initialization::init_logger_with;
use image_downloader::{Config, Host, Opt, PluginSession};

/// Host adapter that writes session messages to stderr.
struct TerminalHost;

impl Host for TerminalHost {
    fn print(&self, text: &str) {
        eprintln!("{}", text);
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    let opt = Opt::parse();
    let refresh = opt.refresh;
    let list = opt.list;
    let config = Config::from(opt);

    init_logger_with(config.log_level.clone().into(), config.log_format.clone())
        .context("Failed to initialize logger")?;
    log::info!("{} {} starting", PLUGIN_NAME, PLUGIN_VERSION);

    let session = PluginSession::new(config, TerminalHost)
        .context("Failed to initialize plugin session")?;
    session.announce_loaded();

    let result = if refresh {
        session.refresh_tlds().await
    } else {
        session.valid_tlds().await
    };

    match result {
        Ok(tlds) => {
            if list {
                for label in tlds.iter() {
                    println!("{}", label);
                }
            }
            println!(
                "{} legal TLD{} available (cache: {})",
                tlds.len(),
                if tlds.len() == 1 { "" } else { "s" },
                session.config().cache_path().display()
            );
            Ok(())
        }
        Err(_) => {
            // Already reported through the host
            process::exit(1);
        }
    }
}
