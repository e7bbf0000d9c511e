//! Content graph error types.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::PathBuf;
use thiserror::Error;

/// Errors raised while loading or querying the content graph.
#[derive(Debug, Error)]
pub enum GraphError {
    #[error("IO error when reading `{0}`")]
    Io(PathBuf, #[source] std::io::Error),

    #[error("invalid graph export")]
    Json(#[from] serde_json::Error),

    #[error("duplicate node id `{0}`")]
    DuplicateNode(String),

    // NOTE: No #[from] here - the list is the whole message
    #[error("{0}")]
    Query(QueryErrors),
}

/// One error reported by a query, in GraphQL response shape.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QueryError {
    pub message: String,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub path: Vec<serde_json::Value>,
}

impl QueryError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            path: Vec::new(),
        }
    }
}

impl fmt::Display for QueryError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.path.is_empty() {
            return f.write_str(&self.message);
        }
        let path: Vec<String> = self
            .path
            .iter()
            .map(|seg| match seg {
                serde_json::Value::String(s) => s.clone(),
                other => other.to_string(),
            })
            .collect();
        write!(f, "{} (at {})", self.message, path.join("."))
    }
}

/// Every error collected from one query run.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct QueryErrors(pub Vec<QueryError>);

impl QueryErrors {
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn push(&mut self, error: QueryError) {
        self.0.push(error);
    }

    /// Convert to Result (returns Err if there are errors).
    pub fn into_result(self) -> Result<(), GraphError> {
        if self.0.is_empty() {
            Ok(())
        } else {
            Err(GraphError::Query(self))
        }
    }
}

impl fmt::Display for QueryErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "page query failed with {} error{}",
            self.0.len(),
            crate::utils::plural_s(self.0.len())
        )?;
        for error in &self.0 {
            write!(f, "\n  - {error}")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_query_error_display() {
        let plain = QueryError::new("boom");
        assert_eq!(plain.to_string(), "boom");

        let located: QueryError = serde_json::from_value(json!({
            "message": "Cannot query field",
            "path": ["programs", 0, "title"]
        }))
        .unwrap();
        assert_eq!(located.to_string(), "Cannot query field (at programs.0.title)");
    }

    #[test]
    fn test_query_errors_into_result() {
        assert!(QueryErrors::default().into_result().is_ok());

        let mut errors = QueryErrors::default();
        errors.push(QueryError::new("first"));
        errors.push(QueryError::new("second"));
        let err = errors.into_result().unwrap_err();
        let display = err.to_string();
        assert!(display.contains("2 errors"));
        assert!(display.contains("- first"));
        assert!(display.contains("- second"));
    }
}
