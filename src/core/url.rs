//! URL path type for type-safe alias handling.
//!
//! - Internal representation: Always decoded (human-readable)
//! - CMS boundary: Decode percent-encoded aliases on input

use std::borrow::Borrow;
use std::sync::Arc;

use serde::{Deserialize, Serialize};

/// Decoded site path (internal representation)
///
/// Invariants:
/// - Always decoded (no percent-encoding)
/// - Always starts with `/`
/// - Never ends with `/` unless it is the root
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct UrlPath(Arc<str>);

impl UrlPath {
    /// Create from a CMS-provided alias (decode percent-encoding).
    pub fn from_encoded(encoded: &str) -> Self {
        use percent_encoding::percent_decode_str;
        let decoded = percent_decode_str(encoded)
            .decode_utf8()
            .map(|s| s.into_owned())
            .unwrap_or_else(|_| encoded.to_string());
        Self::from_alias(&decoded)
    }

    /// Create alias path. Normalizes leading/trailing slashes.
    /// Strips query string and fragment.
    pub fn from_alias(decoded: &str) -> Self {
        let trimmed = decoded.trim();

        if trimmed.is_empty() || trimmed == "/" {
            return Self(Arc::from("/"));
        }

        let path = Self::strip_query_fragment(trimmed);
        let path = path.trim_end_matches('/');

        if path.is_empty() {
            return Self(Arc::from("/"));
        }

        let normalized = if path.starts_with('/') {
            path.to_string()
        } else {
            format!("/{}", path)
        };

        Self(Arc::from(normalized))
    }

    /// Strip query string and fragment from a path using url crate.
    fn strip_query_fragment(path: &str) -> String {
        use percent_encoding::percent_decode_str;

        // Use a dummy base URL to parse the path
        static BASE: std::sync::OnceLock<Option<url::Url>> = std::sync::OnceLock::new();
        let base = BASE.get_or_init(|| url::Url::parse("http://x").ok());

        match base.as_ref().map(|b| b.join(path)) {
            Some(Ok(parsed)) => {
                // url crate returns percent-encoded path, decode it
                percent_decode_str(parsed.path())
                    .decode_utf8()
                    .map(|s| s.into_owned())
                    .unwrap_or_else(|_| parsed.path().to_string())
            }
            _ => path.split(['?', '#']).next().unwrap_or(path).to_string(),
        }
    }

    /// Get the decoded URL path as a string slice.
    #[inline]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for UrlPath {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl Default for UrlPath {
    fn default() -> Self {
        Self::from_alias("/")
    }
}

impl AsRef<str> for UrlPath {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl Borrow<str> for UrlPath {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl From<String> for UrlPath {
    fn from(s: String) -> Self {
        Self::from_alias(&s)
    }
}

impl From<&str> for UrlPath {
    fn from(s: &str) -> Self {
        Self::from_alias(s)
    }
}

impl PartialEq<str> for UrlPath {
    fn eq(&self, other: &str) -> bool {
        self.0.as_ref() == other
    }
}

impl PartialEq<&str> for UrlPath {
    fn eq(&self, other: &&str) -> bool {
        self.0.as_ref() == *other
    }
}

impl Serialize for UrlPath {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        self.0.serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for UrlPath {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Ok(Self::from_alias(&s))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_alias_normalizes_slashes() {
        assert_eq!(UrlPath::from_alias("news/hello"), "/news/hello");
        assert_eq!(UrlPath::from_alias("/news/hello/"), "/news/hello");
        assert_eq!(UrlPath::from_alias("  /programs/x  "), "/programs/x");
    }

    #[test]
    fn test_root() {
        assert_eq!(UrlPath::from_alias(""), "/");
        assert_eq!(UrlPath::from_alias("/"), "/");
        assert_eq!(UrlPath::default(), "/");
    }

    #[test]
    fn test_strips_query_and_fragment() {
        assert_eq!(UrlPath::from_alias("/topics/a?page=2"), "/topics/a");
        assert_eq!(UrlPath::from_alias("/topics/a#top"), "/topics/a");
    }

    #[test]
    fn test_from_encoded() {
        assert_eq!(UrlPath::from_encoded("/news/caf%C3%A9"), "/news/café");
        assert_eq!(UrlPath::from_encoded("/a%20b"), "/a b");
    }

    #[test]
    fn test_serde_roundtrip() {
        let path = UrlPath::from_alias("/news/x");
        let json = serde_json::to_string(&path).unwrap();
        assert_eq!(json, "\"/news/x\"");
        let back: UrlPath = serde_json::from_str(&json).unwrap();
        assert_eq!(back, path);
    }
}
