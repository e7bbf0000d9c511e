//! Alias error types.

use std::path::PathBuf;
use thiserror::Error;

use super::conflict::{AliasConflict, format_conflicts};
use crate::core::UrlPath;

#[derive(Debug, Error)]
pub enum AliasError {
    #[error("alias key {key} registered twice (`{existing}` and `{new}`)")]
    DuplicateKey {
        key: u64,
        existing: UrlPath,
        new: UrlPath,
    },

    #[error("alias path conflicts:\n{}", format_conflicts(.0))]
    Conflicts(Vec<AliasConflict>),

    #[error("alias table serialization error")]
    Yaml(#[from] serde_yaml_ng::Error),

    #[error("IO error when accessing `{0}`")]
    Io(PathBuf, #[source] std::io::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_duplicate_key_display() {
        let err = AliasError::DuplicateKey {
            key: 7,
            existing: UrlPath::from_alias("/a"),
            new: UrlPath::from_alias("/b"),
        };
        assert_eq!(
            err.to_string(),
            "alias key 7 registered twice (`/a` and `/b`)"
        );
    }

    #[test]
    fn test_conflicts_display() {
        let err = AliasError::Conflicts(vec![AliasConflict {
            alias: UrlPath::from_alias("/news/x"),
            keys: vec![1, 2],
        }]);
        let display = err.to_string();
        assert!(display.contains("/news/x (2)"));
        assert!(display.contains("  - node 1"));
    }
}
