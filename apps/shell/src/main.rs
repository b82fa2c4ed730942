pub mod args;
pub mod commands;

use crate::args::{Cli, Commands};
use anyhow::{Context, Result};
use clap::Parser;
use geoq::GeoContext;
use geoq::domain::config::AppConfig;
use geoq::kernel::config::load_config;
use geoq_logger::{Logger, parse_level};
use std::io;
use tracing::debug;

fn main() -> Result<()> {
    let cli = Cli::parse();

    let mut cfg: AppConfig =
        load_config(cli.config.as_deref()).context("Critical: Configuration is malformed")?;
    if let Some(level) = &cli.log_level {
        cfg.logging.level.clone_from(level);
    }
    if let Commands::Validate { threshold, strict, .. } = &cli.command {
        if let Some(threshold) = threshold {
            cfg.pipeline.confidence_threshold = *threshold;
        }
        cfg.pipeline.strict |= *strict;
    }

    let _logger = init_logger(&cfg)?;
    let ctx = GeoContext::from_config(&cfg)?;
    let mut out = io::stdout().lock();
    debug!(command = ?cli.command, "Dispatching command");

    match cli.command {
        Commands::Relations { category } => commands::relations(&ctx, category, &mut out)?,
        Commands::Prompt {} => commands::prompt(&ctx, &mut out)?,
        Commands::Examples { language, category } => {
            commands::examples(&ctx, language, category, &mut out)?;
        },
        Commands::Validate { input, .. } => commands::validate(&ctx, &input, &mut out)?,
    }

    Ok(())
}

fn init_logger(cfg: &AppConfig) -> Result<Logger> {
    let logging = &cfg.logging;
    let mut builder =
        Logger::builder().name(env!("CARGO_BIN_NAME")).level(parse_level(&logging.level)?);
    if let Some(filter) = &logging.filter {
        builder = builder.env_filter(filter);
    }

    let logger = match &logging.directory {
        Some(dir) => builder.path(dir).json(logging.json).init()?,
        None => builder.init()?,
    };
    Ok(logger)
}
