//! Command-line interface definitions.

use clap::{ColorChoice, Parser, Subcommand};
use std::path::PathBuf;

/// Page, alias and menu generator for a Drupal-backed static site
#[derive(Parser, Debug, Clone)]
#[command(version, about, long_about = None, arg_required_else_help = true)]
pub struct Cli {
    /// Control colored output (auto, always, never)
    #[arg(long, global = true, default_value = "auto")]
    pub color: ColorChoice,

    /// Output directory path (relative to project root)
    #[arg(short, long, value_hint = clap::ValueHint::DirPath)]
    pub output: Option<PathBuf>,

    /// Config file path (default: site.toml)
    #[arg(short = 'C', long, default_value = "site.toml", value_hint = clap::ValueHint::FilePath)]
    pub config: PathBuf,

    /// subcommands
    #[command(subcommand)]
    pub command: Commands,
}

/// Available subcommands
#[derive(Subcommand, Debug, Clone)]
pub enum Commands {
    /// Emit routes, aliases, menus and the other build artifacts
    #[command(visible_alias = "b")]
    Build {
        #[command(flatten)]
        build_args: BuildArgs,
    },

    /// Print the content graph type definitions
    Schema {
        /// Write to a file instead of stdout
        #[arg(short, long, value_hint = clap::ValueHint::FilePath)]
        output: Option<PathBuf>,
    },

    /// Print the URL slug for a title
    Slug {
        /// Title words
        #[arg(required = true)]
        text: Vec<String>,
    },
}

/// Build command arguments
#[derive(clap::Args, Debug, Clone)]
pub struct BuildArgs {
    /// Clean output directory completely before building
    #[arg(short, long)]
    pub clean: bool,

    /// Content graph export to read instead of `[source] graph`
    #[arg(short, long, value_hint = clap::ValueHint::FilePath)]
    pub graph: Option<PathBuf>,

    /// Report alias path conflicts as warnings instead of failing
    #[arg(short = 'w', long)]
    pub warn_conflicts: bool,

    /// Use the CMS path alias where one exists
    #[arg(long)]
    pub cms_aliases: bool,

    /// Enable verbose output for debugging
    #[arg(short = 'V', long)]
    pub verbose: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_build() {
        let cli = Cli::parse_from(["drupal-site", "build", "-c", "-V"]);
        assert_eq!(cli.config, PathBuf::from("site.toml"));
        let Commands::Build { build_args } = cli.command else {
            panic!("expected build");
        };
        assert!(build_args.clean);
        assert!(build_args.verbose);
        assert!(!build_args.warn_conflicts);
    }

    #[test]
    fn test_parse_slug_words() {
        let cli = Cli::parse_from(["drupal-site", "slug", "Café", "Program"]);
        let Commands::Slug { text } = cli.command else {
            panic!("expected slug");
        };
        assert_eq!(text, vec!["Café", "Program"]);
    }

    #[test]
    fn test_slug_requires_text() {
        assert!(Cli::try_parse_from(["drupal-site", "slug"]).is_err());
    }

    #[test]
    fn test_config_flag() {
        let cli = Cli::parse_from(["drupal-site", "-C", "conf/site.toml", "schema"]);
        assert_eq!(cli.config, PathBuf::from("conf/site.toml"));
        assert!(matches!(cli.command, Commands::Schema { output: None }));
    }

    #[test]
    fn test_verify_cli() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }
}
