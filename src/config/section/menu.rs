//! `[menus]` section configuration.
//!
//! ```toml
//! [menus]
//! include = ["main", "footer"]
//! ```

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct MenuSectionConfig {
    /// Menus to export by `menu_name`. Empty exports every menu.
    pub include: Vec<String>,
}
