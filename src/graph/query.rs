//! Page queries against the content graph.
//!
//! One query per page kind. Results are owned so the emission pass can
//! write synthetic nodes back into the graph while walking them.

use super::error::{GraphError, QueryError, QueryErrors};
use super::{ContentGraph, ContentNode};
use crate::page::{ContextId, PageKind};

/// One node returned by a page query.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageNode {
    /// Graph id.
    pub id: String,
    pub drupal_id: String,
    /// CMS internal numeric id, the alias registry key.
    pub key: u64,
    /// Display title (or term name).
    pub label: String,
    /// Alias already resolved by the CMS, if any.
    pub cms_alias: Option<String>,
    /// Graph id the page template re-queries with.
    pub context_id: String,
}

/// Results for one page kind.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageQueryResult {
    pub kind: PageKind,
    pub nodes: Vec<PageNode>,
}

/// Run the page queries for every kind.
///
/// Fails with every collected error if the export reported errors or any
/// node lacks what its page needs; no partial results are returned.
pub fn query_pages(
    graph: &ContentGraph,
    kinds: &[PageKind],
) -> Result<Vec<PageQueryResult>, GraphError> {
    let mut errors = graph.errors().clone();
    let mut results = Vec::with_capacity(kinds.len());

    for &kind in kinds {
        let nodes = graph
            .nodes_of(kind.node_kind())
            .filter_map(|node| match page_node(graph, kind, node) {
                Ok(page) => Some(page),
                Err(error) => {
                    errors.push(error);
                    None
                }
            })
            .collect();
        results.push(PageQueryResult { kind, nodes });
    }

    errors.into_result()?;
    Ok(results)
}

fn page_node(graph: &ContentGraph, kind: PageKind, node: &ContentNode) -> Result<PageNode, QueryError> {
    let located = |message: String| QueryError {
        message,
        path: vec![kind.query_name().into(), node.id.clone().into()],
    };

    let drupal_id = node
        .drupal_id
        .clone()
        .ok_or_else(|| located(format!("{} `{}` has no drupal_id", kind.node_kind(), node.id)))?;
    let key = node.internal_id().ok_or_else(|| {
        located(format!(
            "{} `{}` has no drupal_internal__nid",
            kind.node_kind(),
            node.id
        ))
    })?;

    let context_id = match kind.context_id() {
        ContextId::Node => node.id.clone(),
        ContextId::Relationship(field) => graph
            .linked(node, field)
            .first()
            .map(|target| target.id.clone())
            .ok_or_else(|| {
                located(format!(
                    "{} `{}` has no linked {}",
                    kind.node_kind(),
                    node.id,
                    field
                ))
            })?,
    };

    Ok(PageNode {
        id: node.id.clone(),
        drupal_id,
        key,
        label: node.label().unwrap_or_default().to_string(),
        cms_alias: node.cms_alias().map(str::to_string),
        context_id,
    })
}
