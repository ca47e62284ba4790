//! CompanyHub main entry point

use anyhow::Context;
use clap::Parser;
use companyhub_api::start_server;
use companyhub_config::Config;
use companyhub_core::{fixtures, Hub};
use std::path::PathBuf;
use std::sync::Arc;
use tokio::runtime::Runtime;

#[derive(Parser, Debug)]
#[command(name = "companyhub")]
#[command(author = "CompanyHub Contributors")]
#[command(version = "0.1.0")]
#[command(about = "A lightweight, server-rendered company management dashboard", long_about = None)]
struct Args {
    /// Configuration file path
    #[arg(short, long, default_value = "config.yaml")]
    config: PathBuf,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    let config = if args.config.exists() {
        Config::load(args.config.clone())
            .with_context(|| format!("failed to load configuration from {}", args.config.display()))?
    } else {
        Config::default()
    };

    env_logger::Builder::from_env(
        env_logger::Env::default().default_filter_or(config.logging.level.as_str()),
    )
    .init();

    if !args.config.exists() {
        log::warn!(
            "config file not found: {}, using defaults",
            args.config.display()
        );
    }

    log::info!(
        "config loaded: company={}, currency={}",
        config.company.name,
        config.currency.currency
    );

    let hub = Hub::new(config.clone(), fixtures::sample_company())
        .context("failed to initialize hub from sample dataset")?;

    let rt = Runtime::new()?;
    rt.block_on(start_server(config, Arc::new(hub)));

    Ok(())
}
