//! Derived node fields.
//!
//! Runs once per node as it enters the graph:
//! - `tags`: ids behind `field_tags` for types whose tags span vocabularies
//! - `alias`: link to the synthetic `PathAlias` node of page-bearing types
//! - `content`: searchable text of page-bearing types

use super::node::alias_node_id;
use super::{ContentNode, NodeFields};

/// Compute the derived fields for a node.
pub fn derive_fields(node: &ContentNode) -> NodeFields {
    let Some(kind) = node.kind() else {
        return NodeFields::default();
    };

    let mut fields = NodeFields::default();

    if kind.carries_tags() {
        fields.tags = node
            .relationship("field_tags")
            .into_iter()
            .map(str::to_string)
            .collect();
    }

    if kind.page_kind().is_some() {
        fields.alias = node.drupal_id.as_deref().map(alias_node_id);
        fields.content = Some(search_content(node));
    }

    fields
}

/// Body text, falling back to a taxonomy description, then empty.
fn search_content(node: &ContentNode) -> String {
    node.body
        .as_ref()
        .or(node.description.as_ref())
        .and_then(|text| text.processed.clone())
        .unwrap_or_default()
}
