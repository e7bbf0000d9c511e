//! drupal-site - page, alias and menu generator for a Drupal-backed static site.

mod alias;
mod cli;
mod config;
mod core;
mod events;
mod graph;
mod logger;
mod menu;
mod page;
mod schema;
mod utils;

use anyhow::Result;
use clap::{ColorChoice, Parser};
use cli::{Cli, Commands, build::build_site};
use config::SiteConfig;

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Set global color override based on CLI option
    match cli.color {
        ColorChoice::Always => owo_colors::set_override(true),
        ColorChoice::Never => owo_colors::set_override(false),
        ColorChoice::Auto => {} // owo-colors auto-detects TTY
    }

    match &cli.command {
        Commands::Build { .. } => {
            let config = SiteConfig::load(&cli)?;
            build_site(&config).map(|_| ())
        }
        Commands::Schema { output } => cli::print_schema(output.as_deref()),
        Commands::Slug { text } => {
            cli::print_slug(text);
            Ok(())
        }
    }
}
