use anyhow::{Context, Result};
use clap::Parser;
use std::process;
use upvotes::args::Cli;
use upvotes::config::UpvotesConfig;
use upvotes::{input, scorer};

fn main() {
    env_logger::init();
    if let Err(e) = run() {
        log::error!("Error: {:#}", e);
        process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();

    let config = UpvotesConfig::locate(cli.config.as_deref())
        .context("Failed to load configuration")?;
    log::set_max_level(config.max_log_level(log::max_level()));

    let args = cli.to_score_args(&config);

    let upvotes = input::load_upvotes(&args.in_file)
        .with_context(|| format!("Failed to load upvotes from {}", args.in_file))?;

    let scores = scorer::score(&args, &upvotes)
        .context("Failed to score windows")?;

    input::save_scores(&args.out_file, scores)
        .with_context(|| format!("Failed to save scores to {}", args.out_file))?;

    Ok(())
}
