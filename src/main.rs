//! docseo - page SEO metadata for documentation sites.

#![allow(dead_code)]

mod cli;
mod config;
mod logger;
mod page;
mod seo;
mod utils;

use anyhow::Result;
use clap::{ColorChoice, Parser};
use cli::{Cli, Commands};
use config::SiteConfig;

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Set global color override based on CLI option
    match cli.color {
        ColorChoice::Always => owo_colors::set_override(true),
        ColorChoice::Never => owo_colors::set_override(false),
        ColorChoice::Auto => {} // owo-colors auto-detects TTY
    }
    logger::set_verbose(cli.verbose);

    let config = SiteConfig::load(&cli)?;

    match &cli.command {
        Commands::Head { page, format } => cli::head::run_head(page, *format, &config),
        Commands::Jsonld { page, pretty } => cli::head::run_jsonld(page, *pretty, &config),
        Commands::Check => cli::check::run_check(&config),
    }
}
