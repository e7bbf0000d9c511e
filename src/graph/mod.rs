//! Content graph exported from the CMS.
//!
//! | Module   | Purpose                                        |
//! |----------|------------------------------------------------|
//! | `kind`   | Known type tags ([`NodeKind`])                 |
//! | `node`   | Node model ([`ContentNode`])                   |
//! | `fields` | Fields derived when a node enters the graph    |
//! | `store`  | Indexed graph ([`ContentGraph`])               |
//! | `query`  | Page queries                                   |
//! | `error`  | [`GraphError`], [`QueryError`]                 |

mod error;
mod fields;
mod kind;
mod node;
mod query;
mod store;

pub use error::GraphError;
pub use kind::NodeKind;
pub use node::{ContentNode, NodeFields};
pub use query::{PageNode, query_pages};
pub use store::ContentGraph;
