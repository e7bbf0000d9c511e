//! Content node model as exported from the CMS graph.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use super::NodeKind;
use crate::utils::hash;

/// Graph bookkeeping for a node (`internal`).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Internal {
    /// Type tag, e.g. `node__article` or `taxonomy_term__tags`.
    #[serde(rename = "type")]
    pub type_name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub media_type: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub content_digest: Option<String>,
}

/// Formatted text field (`body`, `description`, ...).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TextField {
    #[serde(default)]
    pub processed: Option<String>,
    #[serde(default)]
    pub value: Option<String>,
    #[serde(default)]
    pub format: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub summary: Option<String>,
}

/// Path alias resolved by the CMS itself.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CmsPath {
    #[serde(default)]
    pub alias: Option<String>,
}

/// Relationship target: one node id or a list of them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Link {
    One(String),
    Many(Vec<String>),
}

impl Link {
    /// Target ids in declaration order.
    pub fn ids(&self) -> Vec<&str> {
        match self {
            Self::One(id) => vec![id.as_str()],
            Self::Many(ids) => ids.iter().map(String::as_str).collect(),
        }
    }
}

/// Fields derived at load time (`fields`).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct NodeFields {
    /// Ids of terms linked through `field_tags`.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub tags: Vec<String>,
    /// Id of the synthetic `PathAlias` node for this page.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub alias: Option<String>,
    /// Searchable text.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,
}

/// A node in the content graph.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ContentNode {
    /// Graph-wide id.
    pub id: String,
    /// Stable CMS identifier (UUID).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub drupal_id: Option<String>,
    #[serde(
        default,
        rename = "drupal_internal__nid",
        skip_serializing_if = "Option::is_none"
    )]
    pub nid: Option<u64>,
    #[serde(
        default,
        rename = "drupal_internal__tid",
        skip_serializing_if = "Option::is_none"
    )]
    pub tid: Option<u64>,
    pub internal: Internal,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub body: Option<TextField>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<TextField>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub path: Option<CmsPath>,
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub relationships: BTreeMap<String, Option<Link>>,
    #[serde(default)]
    pub fields: NodeFields,
    /// Remaining type-specific fields (`field_*`, `key`, `value`, ...).
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl ContentNode {
    /// Known kind of this node, if its type tag is recognized.
    pub fn kind(&self) -> Option<NodeKind> {
        NodeKind::from_type_name(&self.internal.type_name)
    }

    /// Display label: `title` for content, `name` for taxonomy terms.
    pub fn label(&self) -> Option<&str> {
        self.title.as_deref().or(self.name.as_deref())
    }

    /// CMS internal numeric id (`nid` for content, `tid` for terms).
    pub fn internal_id(&self) -> Option<u64> {
        self.nid.or(self.tid)
    }

    /// Relationship ids for a field, accepting both `field` and `field___NODE` keys.
    pub fn relationship(&self, field: &str) -> Vec<&str> {
        let linked = format!("{field}___NODE");
        self.relationships
            .get(&linked)
            .or_else(|| self.relationships.get(field))
            .and_then(Option::as_ref)
            .map(Link::ids)
            .unwrap_or_default()
    }

    /// CMS-resolved path alias, if present and non-empty.
    pub fn cms_alias(&self) -> Option<&str> {
        self.path
            .as_ref()
            .and_then(|p| p.alias.as_deref())
            .filter(|a| !a.trim().is_empty())
    }

    /// String value of a type-specific field.
    pub fn extra_str(&self, field: &str) -> Option<&str> {
        self.extra.get(field).and_then(Value::as_str)
    }

    /// Boolean value of a type-specific field (missing or null is `false`).
    pub fn extra_bool(&self, field: &str) -> bool {
        self.extra
            .get(field)
            .and_then(Value::as_bool)
            .unwrap_or(false)
    }

    /// Build the synthetic `PathAlias` node for a page.
    ///
    /// The id is derived from the page's `drupal_id`, matching the
    /// `fields.alias` link assigned at load time.
    pub fn path_alias(drupal_id: &str, alias: &str) -> serde_json::Result<Self> {
        let id = alias_node_id(drupal_id);
        let data = serde_json::json!({ "key": id, "value": alias });

        let mut extra = Map::new();
        extra.insert("key".into(), Value::String(id.clone()));
        extra.insert("value".into(), Value::String(alias.to_string()));

        Ok(Self {
            id,
            internal: Internal {
                type_name: NodeKind::PathAlias.as_str().to_string(),
                media_type: Some("text/html".into()),
                content: Some(serde_json::to_string(&data)?),
                content_digest: Some(hash::content_digest(&data)?),
            },
            extra,
            ..Self::default()
        })
    }

    /// Alias path stored on a `PathAlias` node.
    pub fn alias_value(&self) -> Option<&str> {
        match self.kind() {
            Some(NodeKind::PathAlias) => self.extra_str("value"),
            _ => None,
        }
    }
}

/// Id of the synthetic alias node for a page with the given `drupal_id`.
pub fn alias_node_id(drupal_id: &str) -> String {
    hash::node_id(&format!("alias-{drupal_id}"))
}
