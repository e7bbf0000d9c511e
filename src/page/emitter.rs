//! Page emission pass.
//!
//! Pipeline: query every page kind -> build alias -> register alias ->
//! add `PathAlias` node to the graph -> schedule route -> check conflicts.
//!
//! Every query runs before anything is registered, so a failed query leaves
//! no routes and no aliases behind.

use thiserror::Error;

use super::{PageKind, PageRoute};
use crate::alias::{AliasBuilder, AliasError, AliasRegistry, print_conflicts};
use crate::config::{AliasConfig, ConflictLevel};
use crate::debug;
use crate::graph::{ContentGraph, ContentNode, GraphError, query_pages};

#[derive(Debug, Error)]
pub enum EmitError {
    #[error(transparent)]
    Graph(#[from] GraphError),

    #[error(transparent)]
    Alias(#[from] AliasError),
}

/// Output of one emission pass.
#[derive(Debug, Default)]
pub struct Emission {
    /// Routes in kind order, then query order.
    pub routes: Vec<PageRoute>,
    pub registry: AliasRegistry,
}

/// Emit a route for every page-bearing node.
///
/// Synthetic alias nodes are added to `graph` so later joins
/// (search index) can resolve `fields.alias`.
pub fn emit_pages(graph: &mut ContentGraph, config: &AliasConfig) -> Result<Emission, EmitError> {
    let results = query_pages(graph, &PageKind::ALL)?;
    let builder = AliasBuilder::new(config);
    let mut emission = Emission::default();

    for result in results {
        for node in result.nodes {
            let alias = builder.alias_for(result.kind, &node);
            debug!("alias"; "{} -> {}", node.key, alias);

            emission.registry.insert(node.key, alias.clone())?;
            graph.insert_node(ContentNode::path_alias(&node.drupal_id, alias.as_str())?)?;
            emission.routes.push(PageRoute::new(
                alias,
                result.kind.template(),
                node.context_id,
                node.id,
            ));
        }
    }

    let conflicts = emission.registry.conflicts();
    if !conflicts.is_empty() {
        match config.conflicts {
            ConflictLevel::Error => return Err(AliasError::Conflicts(conflicts).into()),
            ConflictLevel::Warn => print_conflicts("warning", &conflicts),
        }
    }

    Ok(emission)
}

impl From<serde_json::Error> for EmitError {
    fn from(err: serde_json::Error) -> Self {
        Self::Graph(GraphError::Json(err))
    }
}
