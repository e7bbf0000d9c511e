//! Navigation menus: CMS menu items -> per-menu link trees.

mod entry;
mod tree;

pub use entry::MenuItem;
pub use tree::{build_menus, write_menus};
