//! Alias construction per page kind.

use super::slug::slugify;
use crate::config::{AliasConfig, AliasSource};
use crate::core::UrlPath;
use crate::debug;
use crate::graph::PageNode;
use crate::page::PageKind;

/// Compose `/{prefix}/{slug}` from a title. An empty prefix yields `/{slug}`.
///
/// # Examples
///
/// ```ignore
/// assert_eq!(build_alias("Biomedical Science", "programs"), "/programs/biomedical-science");
/// assert_eq!(build_alias("About Us", ""), "/about-us");
/// ```
pub fn build_alias(title: &str, prefix: &str) -> UrlPath {
    let slug = slugify(title);
    let prefix = slugify(prefix);

    if prefix.is_empty() {
        UrlPath::from_alias(&format!("/{slug}"))
    } else {
        UrlPath::from_alias(&format!("/{prefix}/{slug}"))
    }
}

/// Builds aliases according to `[build.alias]`.
#[derive(Debug, Clone, Copy)]
pub struct AliasBuilder<'c> {
    config: &'c AliasConfig,
}

impl<'c> AliasBuilder<'c> {
    pub const fn new(config: &'c AliasConfig) -> Self {
        Self { config }
    }

    /// Alias for a queried page node.
    ///
    /// With `source = "cms"` the CMS alias passes through untouched; nodes the
    /// CMS has no alias for fall back to the title-derived one.
    pub fn alias_for(&self, kind: PageKind, node: &PageNode) -> UrlPath {
        if self.config.source == AliasSource::Cms {
            if let Some(alias) = node.cms_alias.as_deref() {
                return UrlPath::from_encoded(alias);
            }
            debug!("alias"; "{} `{}` has no cms alias, using title", kind.node_kind(), node.id);
        }
        build_alias(&node.label, self.config.prefix.for_kind(kind))
    }
}
