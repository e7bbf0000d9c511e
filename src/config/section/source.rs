//! `[source]` section configuration.
//!
//! ```toml
//! [source]
//! graph = "data/graph.json"
//! ```

use crate::config::{ConfigDiagnostics, FieldPath};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SourceSectionConfig {
    /// Content graph export written by the CMS sync.
    pub graph: PathBuf,
}

impl Default for SourceSectionConfig {
    fn default() -> Self {
        Self {
            graph: "graph.json".into(),
        }
    }
}

pub struct SourceFields {
    pub graph: FieldPath,
}

impl SourceSectionConfig {
    pub const FIELDS: SourceFields = SourceFields {
        graph: FieldPath::new("source.graph"),
    };

    /// Check the export exists. Runs after path normalization.
    pub fn validate(&self, diag: &mut ConfigDiagnostics) {
        if !self.graph.is_file() {
            diag.error_with_hint(
                Self::FIELDS.graph,
                format!("content graph `{}` not found", self.graph.display()),
                "run the CMS sync first, or pass --graph",
            );
        }
    }
}
