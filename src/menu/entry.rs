//! Menu items as exported from the CMS.

use serde::{Deserialize, Serialize};
use serde_json::Value;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ParentRef {
    pub id: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RouteParameters {
    /// Target node nid; exported as a string or a number.
    #[serde(default)]
    pub node: Option<Value>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MenuRoute {
    #[serde(default)]
    pub parameters: RouteParameters,
}

/// A menu entry. `parent == None` marks a root.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MenuItem {
    pub id: String,
    pub menu_name: String,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub url: Option<String>,
    #[serde(default)]
    pub weight: i64,
    #[serde(default)]
    pub parent: Option<ParentRef>,
    #[serde(default)]
    pub route: Option<MenuRoute>,
}

impl MenuItem {
    pub fn parent_id(&self) -> Option<&str> {
        self.parent.as_ref().map(|p| p.id.as_str())
    }

    /// The CMS node this entry links to, in string form.
    pub fn target_node(&self) -> Option<String> {
        match self.route.as_ref()?.parameters.node.as_ref()? {
            Value::String(s) if !s.is_empty() => Some(s.clone()),
            Value::Number(n) => Some(n.to_string()),
            _ => None,
        }
    }
}
