mod batch;
mod cli;

use std::{io, process};

use anyhow::{Context, Result};
use clap::Parser;
use policydoc_config::Config;

use crate::{
    batch::{Settings, expand_drafts, run_batch},
    cli::Args,
};

fn main() -> Result<()> {
    env_logger::Builder::new()
        .filter_level(log::LevelFilter::Warn)
        .parse_default_env()
        .init();

    let args = Args::parse();

    let config = match &args.config {
        Some(path) => Config::load_from_path(path),
        None => {
            log::debug!("Config path: {}", Config::config_path().display());
            Config::load()
        }
    }
    .context("Failed to load config file")?;

    let settings = Settings::resolve(&args, config);
    let drafts = expand_drafts(&args.drafts);
    log::info!("Converting {} draft(s)", drafts.len());

    let summary = run_batch(&drafts, &settings, &mut io::stdout(), &mut io::stderr())?;
    log::info!("{summary:?}");

    if summary.has_failures() {
        process::exit(1);
    }
    Ok(())
}
