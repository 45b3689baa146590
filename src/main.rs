//! Iconforge - an application icon pipeline.

mod cli;
mod config;
mod image;
mod logger;

use anyhow::Result;
use clap::{ColorChoice, Parser};
use cli::{Cli, Commands};
use config::IconConfig;

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Set global color override based on CLI option
    match cli.color {
        ColorChoice::Always => owo_colors::set_override(true),
        ColorChoice::Never => owo_colors::set_override(false),
        ColorChoice::Auto => {} // owo-colors auto-detects TTY
    }

    match &cli.command {
        Commands::Init { path } => cli::init::run_init(&cli, path.as_deref()),
        Commands::Generate { .. } => {
            let config = IconConfig::load(&cli)?;
            cli::generate::run_generate(&config)
        }
    }
}
