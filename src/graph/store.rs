//! In-memory content graph loaded from the CMS export.

use std::fs;
use std::path::Path;

use rustc_hash::FxHashMap;
use serde::Deserialize;

use super::error::{GraphError, QueryError, QueryErrors};
use super::fields::derive_fields;
use super::{ContentNode, NodeKind};
use crate::events::WpEvent;
use crate::menu::MenuItem;

/// Export file envelope, in GraphQL response shape.
#[derive(Debug, Default, Deserialize)]
pub struct GraphExport {
    #[serde(default)]
    pub data: Option<ExportData>,
    #[serde(default)]
    pub errors: Vec<QueryError>,
}

/// Node lists of the export. Every list is optional.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExportData {
    #[serde(default)]
    pub nodes: Vec<ContentNode>,
    #[serde(default)]
    pub menu_items: Vec<MenuItem>,
    #[serde(default)]
    pub wp_events: Vec<WpEvent>,
}

/// Content graph: nodes indexed by id, plus menus and events.
///
/// Nodes keep their export order; queries return them in that order.
#[derive(Debug, Default)]
pub struct ContentGraph {
    nodes: Vec<ContentNode>,
    by_id: FxHashMap<String, usize>,
    menu_items: Vec<MenuItem>,
    wp_events: Vec<WpEvent>,
    errors: QueryErrors,
}

impl ContentGraph {
    /// Load and index an export file.
    pub fn load(path: &Path) -> Result<Self, GraphError> {
        let content =
            fs::read_to_string(path).map_err(|err| GraphError::Io(path.to_path_buf(), err))?;
        Self::from_json(&content)
    }

    /// Parse and index export JSON.
    pub fn from_json(content: &str) -> Result<Self, GraphError> {
        let export: GraphExport = serde_json::from_str(content)?;
        Self::from_export(export)
    }

    /// Index an export, deriving node fields on the way in.
    pub fn from_export(export: GraphExport) -> Result<Self, GraphError> {
        let data = export.data.unwrap_or_default();
        let mut graph = Self {
            nodes: Vec::with_capacity(data.nodes.len()),
            by_id: FxHashMap::default(),
            menu_items: data.menu_items,
            wp_events: data.wp_events,
            errors: QueryErrors(export.errors),
        };

        for node in data.nodes {
            graph.insert_node(node)?;
        }
        Ok(graph)
    }

    /// Add a node to the graph. Ids must be unique.
    pub fn insert_node(&mut self, mut node: ContentNode) -> Result<(), GraphError> {
        if self.by_id.contains_key(&node.id) {
            return Err(GraphError::DuplicateNode(node.id));
        }
        node.fields = derive_fields(&node);
        self.by_id.insert(node.id.clone(), self.nodes.len());
        self.nodes.push(node);
        Ok(())
    }

    /// Look up a node by graph id.
    pub fn get(&self, id: &str) -> Option<&ContentNode> {
        self.by_id.get(id).map(|&idx| &self.nodes[idx])
    }

    /// All nodes of one kind, in export order.
    pub fn nodes_of(&self, kind: NodeKind) -> impl Iterator<Item = &ContentNode> {
        self.nodes
            .iter()
            .filter(move |node| node.internal.type_name == kind.as_str())
    }

    /// Resolve a relationship field to the nodes it links. Dangling ids are skipped.
    pub fn linked(&self, node: &ContentNode, field: &str) -> Vec<&ContentNode> {
        node.relationship(field)
            .into_iter()
            .filter_map(|id| self.get(id))
            .collect()
    }

    /// Resolve a page's `fields.alias` link to its alias path.
    pub fn alias_of(&self, node: &ContentNode) -> Option<&str> {
        let alias_id = node.fields.alias.as_deref()?;
        self.get(alias_id)?.alias_value()
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn menu_items(&self) -> &[MenuItem] {
        &self.menu_items
    }

    pub fn wp_events(&self) -> &[WpEvent] {
        &self.wp_events
    }

    /// Errors reported by the export itself.
    pub fn errors(&self) -> &QueryErrors {
        &self.errors
    }
}
