//! `[build]` section configuration.
//!
//! ```toml
//! [build]
//! output = "public"
//! clean = false
//! routes = "routes.json"
//! aliases = "aliases.yaml"
//! menus = "menus.yaml"
//! search = "search.json"   # optional
//! events = "events.yaml"
//! schema = "schema.graphql"
//! ```
//!
//! Artifact names are relative to `output`.

use super::AliasConfig;
use crate::config::{ConfigDiagnostics, FieldPath};
use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};
use std::path::{Component, Path, PathBuf};

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct BuildSectionConfig {
    /// Output directory.
    pub output: PathBuf,

    /// Remove the output directory before writing.
    pub clean: bool,

    /// Route manifest.
    pub routes: PathBuf,

    /// Alias lookup table.
    pub aliases: PathBuf,

    /// Per-menu sitemap.
    pub menus: PathBuf,

    /// Search index, skipped when unset.
    pub search: Option<PathBuf>,

    /// Events widget selections.
    pub events: PathBuf,

    /// Content graph type definitions.
    pub schema: PathBuf,

    pub alias: AliasConfig,
}

impl Default for BuildSectionConfig {
    fn default() -> Self {
        Self {
            output: "public".into(),
            clean: false,
            routes: "routes.json".into(),
            aliases: "aliases.yaml".into(),
            menus: "menus.yaml".into(),
            search: None,
            events: "events.yaml".into(),
            schema: "schema.graphql".into(),
            alias: AliasConfig::default(),
        }
    }
}

pub struct BuildFields {
    pub output: FieldPath,
    pub routes: FieldPath,
    pub aliases: FieldPath,
    pub menus: FieldPath,
    pub search: FieldPath,
    pub events: FieldPath,
    pub schema: FieldPath,
}

impl BuildSectionConfig {
    pub const FIELDS: BuildFields = BuildFields {
        output: FieldPath::new("build.output"),
        routes: FieldPath::new("build.routes"),
        aliases: FieldPath::new("build.aliases"),
        menus: FieldPath::new("build.menus"),
        search: FieldPath::new("build.search"),
        events: FieldPath::new("build.events"),
        schema: FieldPath::new("build.schema"),
    };

    /// Artifact names with their config fields, search only when enabled.
    fn artifacts(&self) -> Vec<(FieldPath, &Path)> {
        let mut list = vec![
            (Self::FIELDS.routes, self.routes.as_path()),
            (Self::FIELDS.aliases, self.aliases.as_path()),
            (Self::FIELDS.menus, self.menus.as_path()),
            (Self::FIELDS.events, self.events.as_path()),
            (Self::FIELDS.schema, self.schema.as_path()),
        ];
        if let Some(search) = &self.search {
            list.push((Self::FIELDS.search, search.as_path()));
        }
        list
    }

    /// Resolve an artifact name inside the output directory.
    pub fn artifact(&self, name: &Path) -> PathBuf {
        self.output.join(name)
    }

    /// Artifact names must stay inside `output` and be distinct.
    pub fn validate(&self, diag: &mut ConfigDiagnostics) {
        let mut seen: FxHashMap<&Path, FieldPath> = FxHashMap::default();

        for (field, name) in self.artifacts() {
            let escapes = name.components().any(|c| {
                matches!(
                    c,
                    Component::ParentDir | Component::RootDir | Component::Prefix(_)
                )
            });
            if escapes || name.as_os_str().is_empty() {
                diag.error_with_hint(
                    field,
                    format!("`{}` must be a relative file name", name.display()),
                    format!("artifacts are written inside {}", Self::FIELDS.output),
                );
                continue;
            }
            if let Some(other) = seen.insert(name, field) {
                diag.error(
                    field,
                    format!("`{}` is also used by {}", name.display(), other),
                );
            }
        }

        self.alias.prefix.validate(diag);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::test_parse_config;

    #[test]
    fn test_build_defaults() {
        let config = test_parse_config("");
        let build = &config.build;
        assert_eq!(build.output, PathBuf::from("public"));
        assert!(!build.clean);
        assert_eq!(build.routes, PathBuf::from("routes.json"));
        assert!(build.search.is_none());
    }

    #[test]
    fn test_defaults_validate() {
        let mut diag = ConfigDiagnostics::new();
        BuildSectionConfig::default().validate(&mut diag);
        assert!(diag.is_empty());
        assert!(diag.warnings().is_empty());
    }

    #[test]
    fn test_artifact_escaping_output() {
        let config = test_parse_config("[build]\nroutes = \"../routes.json\"");
        let mut diag = ConfigDiagnostics::new();
        config.build.validate(&mut diag);
        assert_eq!(diag.len(), 1);
        assert_eq!(diag.errors()[0].field, BuildSectionConfig::FIELDS.routes);
    }

    #[test]
    fn test_duplicate_artifact() {
        let config = test_parse_config("[build]\nsearch = \"menus.yaml\"");
        let mut diag = ConfigDiagnostics::new();
        config.build.validate(&mut diag);
        assert_eq!(diag.len(), 1);
        assert_eq!(diag.errors()[0].field, BuildSectionConfig::FIELDS.search);
    }

    #[test]
    fn test_artifact_path() {
        let build = BuildSectionConfig {
            output: "/site/public".into(),
            ..Default::default()
        };
        assert_eq!(
            build.artifact(&build.routes),
            PathBuf::from("/site/public/routes.json")
        );
    }
}
