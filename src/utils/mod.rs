//! Utility modules shared by the build passes.

pub mod hash;
pub mod path;
mod plural;

pub use plural::{plural_count, plural_s};
