mod commands;
mod logging;
mod reporter;

use std::env;
use std::process;

use anyhow::{Context, Result};
use clap::Parser;
use colored::*;
use commands::{Cli, Commands};
use dotenv::dotenv;
use gallery_fill::{catalog, AppConfig, FillDriver, OpenAiProvider};
use reporter::CliReporter;
use tracing::{error, info};

fn main() {
    dotenv().ok();

    let guard = logging::init_logger();

    let args = Cli::parse();

    let config = match AppConfig::load() {
        Ok(config) => config,
        Err(err) => {
            error!("Error loading configuration: {}", err);
            drop(guard);
            process::exit(1);
        }
    };

    let result = match args.command.unwrap_or(Commands::Fill) {
        Commands::Fill => run_fill(&config),
        Commands::Missing => run_missing(&config),
        Commands::PrintConfig => {
            println!("Configuration: {:#?}", config);
            Ok(())
        }
    };

    if let Err(err) = result {
        error!("Error: {:#}", err);
        drop(guard);
        process::exit(1);
    }
}

fn run_fill(config: &AppConfig) -> Result<()> {
    let entities = catalog::load_catalog(&config.catalog_path, &config.image_extension)?;

    let api_key = env::var("OPENAI_API_KEY").context("OPENAI_API_KEY is not set")?;
    let provider = OpenAiProvider::new(&config.api_base, &api_key)?;
    let driver = FillDriver::new(provider, config.fill_settings());

    let summary = driver.run(&entities, &CliReporter::new())?;

    if !summary.all_present() {
        info!(
            "{} filled, {} failed, {} attempted",
            format!("{}", summary.filled).green(),
            format!("{}", summary.failed.len()).red(),
            summary.attempted,
        );
        for (name, reason) in &summary.failed {
            info!("{} will be retried on the next run: {}", name.red(), reason);
        }
    }

    Ok(())
}

fn run_missing(config: &AppConfig) -> Result<()> {
    let entities = catalog::load_catalog(&config.catalog_path, &config.image_extension)?;
    let existing =
        gallery_fill::store::list_existing_filenames(&config.image_dir, &config.image_extension)
            .with_context(|| format!("reading {}", config.image_dir.display()))?;
    let missing = gallery_fill::fill::compute_missing(&entities, &existing, &config.image_extension);

    if missing.is_empty() {
        println!("All {} entities have images!", entities.len());
        return Ok(());
    }

    println!(
        "{} of {} entities are missing images:",
        missing.len().to_string().yellow(),
        entities.len()
    );
    for entity in missing {
        println!(
            "  {} ({})",
            entity.name,
            entity.image_filename(&config.image_extension).dimmed()
        );
    }

    Ok(())
}
