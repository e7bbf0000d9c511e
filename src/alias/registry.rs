//! Alias registry: CMS internal id -> generated alias.
//!
//! An explicit accumulator owned by one emission pass. Entries are only ever
//! added; the file on disk is overwritten wholesale on every build.

use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

use super::conflict::AliasConflict;
use super::error::AliasError;
use crate::core::UrlPath;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AliasRegistry {
    entries: BTreeMap<u64, UrlPath>,
}

impl AliasRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record the alias for a key. Each key is registered once per build.
    pub fn insert(&mut self, key: u64, alias: UrlPath) -> Result<(), AliasError> {
        if let Some(existing) = self.entries.get(&key) {
            return Err(AliasError::DuplicateKey {
                key,
                existing: existing.clone(),
                new: alias,
            });
        }
        self.entries.insert(key, alias);
        Ok(())
    }

    pub fn get(&self, key: u64) -> Option<&UrlPath> {
        self.entries.get(&key)
    }

    /// Look up by a key in string form, as menu routes carry it.
    pub fn get_str(&self, key: &str) -> Option<&UrlPath> {
        key.trim().parse().ok().and_then(|key| self.get(key))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Entries in key order.
    pub fn iter(&self) -> impl Iterator<Item = (u64, &UrlPath)> {
        self.entries.iter().map(|(&key, alias)| (key, alias))
    }

    /// Aliases claimed by more than one key, in alias order.
    pub fn conflicts(&self) -> Vec<AliasConflict> {
        let mut claims: FxHashMap<&UrlPath, Vec<u64>> = FxHashMap::default();
        for (key, alias) in self.iter() {
            claims.entry(alias).or_default().push(key);
        }

        let mut conflicts: Vec<_> = claims
            .into_iter()
            .filter(|(_, keys)| keys.len() > 1)
            .map(|(alias, keys)| AliasConflict {
                alias: alias.clone(),
                keys,
            })
            .collect();
        conflicts.sort_by(|a, b| a.alias.cmp(&b.alias));
        conflicts
    }

    pub fn to_yaml(&self) -> Result<String, AliasError> {
        Ok(serde_yaml_ng::to_string(self)?)
    }

    #[cfg(test)]
    pub fn from_yaml(content: &str) -> Result<Self, AliasError> {
        Ok(serde_yaml_ng::from_str(content)?)
    }

    /// Write the registry as YAML, replacing any previous file.
    pub fn write(&self, path: &Path) -> Result<(), AliasError> {
        let yaml = self.to_yaml()?;
        fs::write(path, yaml).map_err(|err| AliasError::Io(path.to_path_buf(), err))
    }

    /// Read a registry written by [`AliasRegistry::write`].
    #[cfg(test)]
    pub fn load(path: &Path) -> Result<Self, AliasError> {
        let content =
            fs::read_to_string(path).map_err(|err| AliasError::Io(path.to_path_buf(), err))?;
        Self::from_yaml(&content)
    }
}
