//! Deterministic identifiers and content digests using BLAKE3.
//!
//! # Usage
//!
//! ```ignore
//! use crate::utils::hash;
//!
//! let id = hash::node_id("alias-7d1c..."); // -> "3f2a9c1e-...-..."
//! let digest = hash::content_digest(&value)?; // -> 64 hex chars
//! ```

use serde::Serialize;

/// Derive a stable node id from a seed string.
///
/// The same seed always yields the same id, so a rebuild links synthetic
/// nodes to the same identifiers. Formatted as a UUID (8-4-4-4-12 hex).
pub fn node_id(seed: &str) -> String {
    let hash = blake3::hash(seed.as_bytes());
    let hex = hex::encode(&hash.as_bytes()[..16]);
    format!(
        "{}-{}-{}-{}-{}",
        &hex[0..8],
        &hex[8..12],
        &hex[12..16],
        &hex[16..20],
        &hex[20..32]
    )
}

/// Compute the content digest of a serializable value.
///
/// Digest input is the value's compact JSON encoding.
pub fn content_digest<T: Serialize + ?Sized>(value: &T) -> serde_json::Result<String> {
    let bytes = serde_json::to_vec(value)?;
    Ok(blake3::hash(&bytes).to_hex().to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_node_id_is_stable() {
        assert_eq!(node_id("alias-abc"), node_id("alias-abc"));
        assert_ne!(node_id("alias-abc"), node_id("alias-abd"));
    }

    #[test]
    fn test_node_id_uuid_shape() {
        let id = node_id("alias-1");
        let groups: Vec<_> = id.split('-').map(str::len).collect();
        assert_eq!(groups, vec![8, 4, 4, 4, 12]);
        assert!(id.chars().all(|c| c == '-' || c.is_ascii_hexdigit()));
    }

    #[test]
    fn test_content_digest() {
        let a = content_digest(&json!({"key": "k", "value": "/news/x"})).unwrap();
        let b = content_digest(&json!({"key": "k", "value": "/news/y"})).unwrap();
        assert_eq!(a.len(), 64);
        assert_ne!(a, b);
    }
}
