//! Probepaket Finder - terminal client for the sample package search
//!
//! This is the binary entry point. All logic lives in the library crates.

use std::sync::Arc;

use clap::Parser;
use color_eyre::eyre::{eyre, Result};

use ppf_app::config;
use ppf_client::HttpFinderClient;
use probepaket_finder::{headless, Args, Command};

#[tokio::main]
async fn main() -> Result<()> {
    color_eyre::install()?;
    let args = Args::parse();
    ppf_core::logging::init()?;

    if args.command == Some(Command::InitConfig) {
        let dir = args
            .config_dir()
            .ok_or_else(|| eyre!("No config directory available, pass --config-dir"))?;
        let path = config::init_config_dir(&dir)?;
        println!("{}", path.display());
        return Ok(());
    }

    let settings = args.settings();
    let client = HttpFinderClient::new(
        &settings.backend.base_url,
        settings.backend.request_timeout(),
    )?;

    match &args.command {
        None => {
            if let Err(e) = ppf_tui::run(settings, Arc::new(client)).await {
                if e.is_fatal() {
                    eprintln!("ppf needs an interactive terminal.");
                    eprintln!("Use a subcommand such as `ppf products` for headless output.");
                }
                return Err(e.into());
            }
        }
        Some(command) => {
            let output = headless::execute(command, &client).await?;
            output.write(&mut std::io::stdout().lock(), args.json)?;
        }
    }

    Ok(())
}
