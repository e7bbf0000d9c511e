//! `[build.alias]` section configuration.
//!
//! ```toml
//! [build.alias]
//! source = "title"      # "title" | "cms"
//! conflicts = "error"   # "error" | "warn"
//!
//! [build.alias.prefix]
//! page = ""
//! article = "news"
//! program = "programs"
//! landing_page = "topics"
//! ```

use crate::alias::slugify;
use crate::config::{ConfigDiagnostics, FieldPath};
use crate::page::PageKind;
use serde::{Deserialize, Serialize};

/// Where page aliases come from.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AliasSource {
    /// `/{prefix}/{slug(title)}`
    #[default]
    Title,
    /// The CMS `path.alias`, falling back to the title.
    Cms,
}

/// How alias path collisions are reported.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ConflictLevel {
    #[default]
    Error,
    Warn,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct AliasConfig {
    pub source: AliasSource,
    pub conflicts: ConflictLevel,
    pub prefix: AliasPrefixConfig,
}

/// Path prefix per page kind.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AliasPrefixConfig {
    pub page: String,
    pub article: String,
    pub program: String,
    pub landing_page: String,
}

impl Default for AliasPrefixConfig {
    fn default() -> Self {
        Self {
            page: PageKind::BasicPage.default_prefix().into(),
            article: PageKind::Article.default_prefix().into(),
            program: PageKind::Program.default_prefix().into(),
            landing_page: PageKind::LandingPage.default_prefix().into(),
        }
    }
}

pub struct AliasPrefixFields {
    pub page: FieldPath,
    pub article: FieldPath,
    pub program: FieldPath,
    pub landing_page: FieldPath,
}

impl AliasPrefixConfig {
    pub const FIELDS: AliasPrefixFields = AliasPrefixFields {
        page: FieldPath::new("build.alias.prefix.page"),
        article: FieldPath::new("build.alias.prefix.article"),
        program: FieldPath::new("build.alias.prefix.program"),
        landing_page: FieldPath::new("build.alias.prefix.landing_page"),
    };

    pub fn for_kind(&self, kind: PageKind) -> &str {
        match kind {
            PageKind::BasicPage => &self.page,
            PageKind::Article => &self.article,
            PageKind::Program => &self.program,
            PageKind::LandingPage => &self.landing_page,
        }
    }

    const fn field(kind: PageKind) -> FieldPath {
        match kind {
            PageKind::BasicPage => Self::FIELDS.page,
            PageKind::Article => Self::FIELDS.article,
            PageKind::Program => Self::FIELDS.program,
            PageKind::LandingPage => Self::FIELDS.landing_page,
        }
    }

    /// Prefixes are slugified when aliases are built; warn when that would
    /// change what the user wrote.
    pub fn validate(&self, diag: &mut ConfigDiagnostics) {
        for kind in PageKind::ALL {
            let prefix = self.for_kind(kind);
            let slug = slugify(prefix);
            if slug != prefix {
                diag.warn(
                    Self::field(kind),
                    format!("prefix `{prefix}` will be used as `{slug}`"),
                );
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::test_parse_config;

    #[test]
    fn test_alias_defaults() {
        let config = test_parse_config("");
        let alias = &config.build.alias;
        assert_eq!(alias.source, AliasSource::Title);
        assert_eq!(alias.conflicts, ConflictLevel::Error);
        assert_eq!(alias.prefix.for_kind(PageKind::BasicPage), "");
        assert_eq!(alias.prefix.for_kind(PageKind::Article), "news");
        assert_eq!(alias.prefix.for_kind(PageKind::Program), "programs");
        assert_eq!(alias.prefix.for_kind(PageKind::LandingPage), "topics");
    }

    #[test]
    fn test_alias_overrides() {
        let config = test_parse_config(
            r#"
[build.alias]
source = "cms"
conflicts = "warn"

[build.alias.prefix]
article = "stories"
"#,
        );
        let alias = &config.build.alias;
        assert_eq!(alias.source, AliasSource::Cms);
        assert_eq!(alias.conflicts, ConflictLevel::Warn);
        assert_eq!(alias.prefix.article, "stories");
        // untouched kinds keep their defaults
        assert_eq!(alias.prefix.program, "programs");
    }

    #[test]
    fn test_invalid_source_rejected() {
        let result: Result<AliasConfig, _> = toml::from_str("source = \"path\"");
        assert!(result.is_err());
    }

    #[test]
    fn test_prefix_warning() {
        let mut prefix = AliasPrefixConfig::default();
        prefix.article = "Latest News".into();
        let mut diag = ConfigDiagnostics::new();
        prefix.validate(&mut diag);
        assert!(diag.is_empty());
        assert_eq!(diag.warnings().len(), 1);
        assert_eq!(diag.warnings()[0].0, AliasPrefixConfig::FIELDS.article);
    }
}
