use std::path::PathBuf;
use std::sync::Arc;

use anyhow::{Context, Result};
use clap::Parser;
use regconsole::backend::HttpRegistryClient;
use regconsole::config::Config;
use regconsole::{logger, ui};

#[derive(Parser)]
#[command(name = "regconsole", version)]
#[command(about = "Terminal console for a Docker registry manager")]
struct Cli {
    /// Configuration file to use instead of the default lookup
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Registry manager base URL, overrides the config file
    #[arg(long)]
    url: Option<String>,

    /// Location to open on startup, e.g. /repositories/nginx
    #[arg(long)]
    open: Option<String>,

    /// Write a default configuration file (to --config or the default path) and exit
    #[arg(long)]
    generate_config: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    if cli.generate_config {
        let path = match cli.config {
            Some(path) => path,
            None => Config::get_default_config_path()?,
        };
        Config::generate_default_config(&path)?;
        println!("Wrote default configuration to {}", path.display());
        return Ok(());
    }

    let mut config = match &cli.config {
        Some(path) => Config::load_from_file(path)?,
        None => Config::load()?,
    };
    if let Some(url) = cli.url {
        config.server.base_url = url;
    }
    if let Some(open) = cli.open {
        config.ui.start_path = open;
    }
    config.validate()?;

    if let Some(path) = logger::init(&config.logging)? {
        log::info!("Logging to {}", path.display());
    }

    let api = HttpRegistryClient::from_config(&config.server).context("Failed to create registry client")?;
    log::info!("Connecting to {}", api.base_url());

    ui::run_app(config, Arc::new(api)).await
}
