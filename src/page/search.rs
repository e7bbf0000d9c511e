//! Search index over emitted pages.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use serde::Serialize;

use super::PageRoute;
use crate::graph::ContentGraph;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SearchEntry {
    pub path: String,
    pub title: String,
    pub content: String,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub tags: Vec<String>,
}

/// Build one entry per route.
///
/// The path is read back through the node's `fields.alias` link, so this
/// must run after the emission pass registered the alias nodes.
pub fn build_index(graph: &ContentGraph, routes: &[PageRoute]) -> Vec<SearchEntry> {
    routes
        .iter()
        .filter_map(|route| {
            let node = graph.get(&route.node)?;
            let tags = node
                .fields
                .tags
                .iter()
                .filter_map(|id| graph.get(id)?.label())
                .map(str::to_string)
                .collect();

            Some(SearchEntry {
                path: graph
                    .alias_of(node)
                    .unwrap_or(route.path.as_str())
                    .to_string(),
                title: node.label().unwrap_or_default().to_string(),
                content: node.fields.content.clone().unwrap_or_default(),
                tags,
            })
        })
        .collect()
}

/// Write the index as JSON.
pub fn write_index(entries: &[SearchEntry], path: &Path) -> Result<()> {
    let json = serde_json::to_string(entries)?;
    fs::write(path, json)
        .with_context(|| format!("Failed to write search index to {}", path.display()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::AliasConfig;
    use crate::page::emit_pages;
    use serde_json::json;

    #[test]
    fn test_index_joins_alias_and_tags() {
        let mut graph = ContentGraph::from_json(
            &json!({ "data": { "nodes": [
                { "id": "t1", "internal": { "type": "taxonomy_term__tags" }, "name": "Research" },
                { "id": "t2", "internal": { "type": "taxonomy_term__topics" }, "name": "Water" },
                { "id": "a1", "drupal_id": "da1", "drupal_internal__nid": 2,
                  "internal": { "type": "node__article" }, "title": "Lab Opens",
                  "body": { "processed": "<p>New lab</p>" },
                  "relationships": { "field_tags___NODE": ["t1", "t2", "gone"] } }
            ] } })
            .to_string(),
        )
        .unwrap();
        let emission = emit_pages(&mut graph, &AliasConfig::default()).unwrap();

        let index = build_index(&graph, &emission.routes);
        assert_eq!(
            index,
            vec![SearchEntry {
                path: "/news/lab-opens".into(),
                title: "Lab Opens".into(),
                content: "<p>New lab</p>".into(),
                tags: vec!["Research".into(), "Water".into()],
            }]
        );
    }

    #[test]
    fn test_write_index() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("search.json");
        let entries = vec![SearchEntry {
            path: "/about".into(),
            title: "About".into(),
            content: String::new(),
            tags: vec![],
        }];
        write_index(&entries, &path).unwrap();
        assert_eq!(
            fs::read_to_string(&path).unwrap(),
            r#"[{"path":"/about","title":"About","content":""}]"#
        );
    }
}
