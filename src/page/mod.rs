//! Page emission: one route per page-bearing content node.

mod emitter;
mod kind;
mod route;
pub mod search;

pub use emitter::emit_pages;
pub use kind::{ContextId, PageKind};
pub use route::PageRoute;
