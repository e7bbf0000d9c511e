//! Path alias generation and lookup.
//!
//! - [`slug`]: title slugification
//! - [`builder`]: `/{prefix}/{slug}` composition per page kind
//! - [`registry`]: id -> alias accumulator, persisted as YAML
//! - [`conflict`]: duplicate alias reporting

pub mod builder;
pub mod conflict;
mod error;
pub mod registry;
pub mod slug;

pub use builder::AliasBuilder;
pub use conflict::print_conflicts;
pub use error::AliasError;
pub use registry::AliasRegistry;
pub use slug::slugify;
