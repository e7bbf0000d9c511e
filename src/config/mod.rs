//! Site configuration management for `site.toml`.
//!
//! # Module Structure
//!
//! ```text
//! config/
//! ├── section/       # Configuration section definitions
//! │   ├── alias      # [build.alias]
//! │   ├── build      # [build]
//! │   ├── menu       # [menus]
//! │   └── source     # [source]
//! ├── types/         # Utility types
//! │   ├── error      # ConfigError, ConfigDiagnostics
//! │   └── field      # FieldPath
//! └── mod.rs         # SiteConfig (this file)
//! ```

mod section;
mod types;
mod util;

use section::{BuildSectionConfig, MenuSectionConfig, SourceSectionConfig};
use util::find_config_file;

pub use section::{AliasConfig, AliasSource, ConflictLevel};
pub use types::{ConfigDiagnostics, ConfigError, FieldPath};

use crate::{
    cli::{BuildArgs, Cli, Commands},
    log,
    utils::path::normalize_path,
};
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::{
    fs,
    path::{Path, PathBuf},
};

// ============================================================================
// root configuration
// ============================================================================

/// Root configuration structure representing site.toml
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SiteConfig {
    /// Absolute path to the config file (internal use only)
    #[serde(skip)]
    pub config_path: PathBuf,

    #[serde(default)]
    pub source: SourceSectionConfig,

    #[serde(default)]
    pub build: BuildSectionConfig,

    #[serde(default)]
    pub menus: MenuSectionConfig,
}

impl SiteConfig {
    /// Load configuration for the current command.
    ///
    /// Searches upward from cwd for the config file. Paths in the file are
    /// relative to the file's directory; paths given on the command line are
    /// relative to cwd.
    pub fn load(cli: &Cli) -> Result<Self> {
        let cwd = std::env::current_dir().context("Failed to get current working directory")?;
        let config_path = find_config_file(&cli.config, &cwd)
            .ok_or_else(|| ConfigError::NotFound(cli.config.clone()))?;

        let mut config = Self::from_path(&config_path)?;
        config.config_path = config_path;
        config.finalize(cli, &cwd);
        config.validate()?;

        Ok(config)
    }

    /// Load configuration from file path with unknown field detection.
    fn from_path(path: &Path) -> Result<Self> {
        let content =
            fs::read_to_string(path).map_err(|err| ConfigError::Io(path.to_path_buf(), err))?;

        let (config, ignored) = Self::parse_with_ignored(&content)?;
        if !ignored.is_empty() {
            Self::print_unknown_fields_warning(&ignored, path);
        }

        Ok(config)
    }

    /// Parse TOML content, collecting any unknown fields.
    fn parse_with_ignored(content: &str) -> Result<(Self, Vec<String>), ConfigError> {
        let mut ignored = Vec::new();
        let deserializer = toml::Deserializer::new(content);
        let config = serde_ignored::deserialize(deserializer, |path: serde_ignored::Path| {
            ignored.push(path.to_string());
        })?;
        Ok((config, ignored))
    }

    /// Print warning about unknown fields.
    fn print_unknown_fields_warning(fields: &[String], path: &Path) {
        let display_path = path
            .file_name()
            .map(|n| n.to_string_lossy())
            .unwrap_or_else(|| path.to_string_lossy());
        log!("warning"; "unknown fields in {}, ignoring:", display_path);
        for field in fields {
            eprintln!("- {field}");
        }
    }

    /// Make file paths absolute, then apply CLI overrides.
    fn finalize(&mut self, cli: &Cli, cwd: &Path) {
        let root = self
            .config_path
            .parent()
            .map(Path::to_path_buf)
            .unwrap_or_default();
        self.normalize_paths(&root);

        Self::update_path(&mut self.build.output, cli.output.as_deref(), cwd);
        if let Commands::Build { build_args } = &cli.command {
            self.apply_build_args(build_args, cwd);
        }
    }

    /// Apply build arguments from CLI.
    fn apply_build_args(&mut self, args: &BuildArgs, cwd: &Path) {
        crate::logger::set_verbose(args.verbose);

        self.build.clean |= args.clean;
        Self::update_path(&mut self.source.graph, args.graph.as_deref(), cwd);
        if args.warn_conflicts {
            self.build.alias.conflicts = ConflictLevel::Warn;
        }
        if args.cms_aliases {
            self.build.alias.source = AliasSource::Cms;
        }
    }

    /// Replace a config path with a CLI path resolved against `cwd`.
    fn update_path(config_path: &mut PathBuf, cli_path: Option<&Path>, cwd: &Path) {
        if let Some(path) = cli_path {
            *config_path = normalize_path(&cwd.join(path));
        }
    }

    // ========================================================================
    // path normalization
    // ========================================================================

    /// Normalize file paths relative to the config file's directory.
    ///
    /// Artifact names under `[build]` stay relative to `build.output`.
    fn normalize_paths(&mut self, root: &Path) {
        let root = normalize_path(root);
        self.config_path = normalize_path(&self.config_path);
        self.source.graph = normalize_path(&root.join(&self.source.graph));
        self.build.output = normalize_path(&root.join(&self.build.output));
    }

    // ========================================================================
    // validation
    // ========================================================================

    /// Validate the loaded configuration.
    ///
    /// Collects all validation errors and returns them at once.
    pub fn validate(&self) -> Result<()> {
        let mut diag = ConfigDiagnostics::new();

        self.source.validate(&mut diag);
        self.build.validate(&mut diag);

        diag.print_warnings();
        diag.into_result()
            .map_err(|e| ConfigError::Diagnostics(e).into())
    }
}

// ============================================================================
// Test Helpers (available to all modules via `use crate::config::test_*`)
// ============================================================================

/// Parse a config fixture.
/// Panics if there are unknown fields (to catch config typos in tests).
#[cfg(test)]
pub fn test_parse_config(content: &str) -> SiteConfig {
    let (parsed, ignored) = SiteConfig::parse_with_ignored(content).unwrap();
    assert!(
        ignored.is_empty(),
        "test config has unknown fields: {:?}",
        ignored
    );
    parsed
}

// ============================================================================
// tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    fn cli(args: &[&str]) -> Cli {
        Cli::parse_from(std::iter::once("drupal-site").chain(args.iter().copied()))
    }

    #[test]
    fn test_from_str_invalid_toml() {
        let result: Result<SiteConfig, _> = toml::from_str("[source
graph = \"graph.json\"");
        assert!(result.is_err());
    }

    #[test]
    fn test_site_config_default() {
        let config = SiteConfig::default();
        assert_eq!(config.config_path, PathBuf::new());
        assert_eq!(config.source.graph, PathBuf::from("graph.json"));
        assert_eq!(config.build.output, PathBuf::from("public"));
    }

    #[test]
    fn test_unknown_fields_detected() {
        let content = "[source]\ngraph = \"g.json\"\n[site]\ntitle = \"Test\"";
        let (config, ignored) = SiteConfig::parse_with_ignored(content).unwrap();

        assert_eq!(config.source.graph, PathBuf::from("g.json"));
        assert!(ignored.iter().any(|f| f.contains("site")));
    }

    #[test]
    fn test_nested_unknown_field() {
        let content = "[build.alias]\nsorce = \"cms\"";
        let (_, ignored) = SiteConfig::parse_with_ignored(content).unwrap();
        assert_eq!(ignored, vec!["build.alias.sorce"]);
    }

    #[test]
    fn test_no_unknown_fields() {
        let content = "[source]\ngraph = \"g.json\"\n[menus]\ninclude = []";
        let (_, ignored) = SiteConfig::parse_with_ignored(content).unwrap();
        assert!(ignored.is_empty());
    }

    #[test]
    fn test_finalize_resolves_against_config_dir() {
        let mut config = test_parse_config("[source]\ngraph = \"data/graph.json\"");
        config.config_path = PathBuf::from("/srv/site/site.toml");
        config.finalize(&cli(&["build"]), Path::new("/srv/site/data"));

        assert_eq!(config.source.graph, PathBuf::from("/srv/site/data/graph.json"));
        assert_eq!(config.build.output, PathBuf::from("/srv/site/public"));
        assert_eq!(config.build.routes, PathBuf::from("routes.json"));
    }

    #[test]
    fn test_cli_paths_resolve_against_cwd() {
        let mut config = test_parse_config("");
        config.config_path = PathBuf::from("/srv/site/site.toml");
        config.finalize(
            &cli(&[
                "--output",
                "dist",
                "build",
                "--clean",
                "--graph",
                "snapshot.json",
                "--warn-conflicts",
                "--cms-aliases",
            ]),
            Path::new("/srv/site/data"),
        );

        assert!(config.build.clean);
        assert_eq!(config.build.output, PathBuf::from("/srv/site/data/dist"));
        assert_eq!(config.source.graph, PathBuf::from("/srv/site/data/snapshot.json"));
        assert_eq!(config.build.alias.conflicts, ConflictLevel::Warn);
        assert_eq!(config.build.alias.source, AliasSource::Cms);
    }

    #[test]
    fn test_absolute_cli_graph_kept() {
        let mut config = test_parse_config("");
        config.config_path = PathBuf::from("/srv/site/site.toml");
        config.finalize(
            &cli(&["build", "--graph", "/exports/graph.json"]),
            Path::new("/srv/site/data"),
        );
        assert_eq!(config.source.graph, PathBuf::from("/exports/graph.json"));
    }

    #[test]
    fn test_cli_graph_found_from_subdirectory() {
        let dir = tempfile::tempdir().unwrap();
        let sub = dir.path().join("data");
        fs::create_dir_all(&sub).unwrap();
        fs::write(dir.path().join("site.toml"), "").unwrap();
        fs::write(sub.join("snapshot.json"), "{}").unwrap();

        let mut config = SiteConfig::from_path(&dir.path().join("site.toml")).unwrap();
        config.config_path = dir.path().join("site.toml");
        config.finalize(&cli(&["build", "-g", "snapshot.json"]), &sub);

        assert!(config.source.graph.is_file());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_load_missing_graph_fails_validation() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("site.toml"), "[build]\nclean = true").unwrap();

        let mut config = SiteConfig::from_path(&dir.path().join("site.toml")).unwrap();
        config.config_path = dir.path().join("site.toml");
        config.finalize(&cli(&["build"]), dir.path());

        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains("source.graph"));
    }
}
