//! Scheduled page routes.

use serde::{Deserialize, Serialize};

use crate::core::UrlPath;

/// Data a template needs to re-query its own content.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageContext {
    pub id: String,
}

/// One page to render: where, with which template, for which graph node.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageRoute {
    pub path: UrlPath,
    pub template: String,
    pub context: PageContext,
    /// Graph id of the node the page was emitted for.
    pub node: String,
}

impl PageRoute {
    pub fn new(path: UrlPath, template: &str, context_id: String, node: String) -> Self {
        Self {
            path,
            template: template.to_string(),
            context: PageContext { id: context_id },
            node,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_manifest_shape() {
        let route = PageRoute::new(
            UrlPath::from_alias("/programs/bsc"),
            "program-page",
            "term-1".into(),
            "p1".into(),
        );
        let value = serde_json::to_value(&route).unwrap();
        assert_eq!(
            value,
            serde_json::json!({
                "path": "/programs/bsc",
                "template": "program-page",
                "context": { "id": "term-1" },
                "node": "p1"
            })
        );
    }
}
