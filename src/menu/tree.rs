//! Menu tree flattening.
//!
//! Menus arrive as flat lists with parent pointers. Each menu becomes a
//! nested list of links, with CMS node references swapped for their
//! generated aliases.

use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use rustc_hash::{FxHashMap, FxHashSet};
use serde::{Deserialize, Serialize};

use super::MenuItem;
use crate::alias::AliasRegistry;
use crate::debug;

/// Output link. `url` is the alias when the entry points at an aliased node.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MenuLink {
    pub id: String,
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<MenuLink>,
}

impl MenuLink {
    /// Number of links in this subtree, itself included.
    pub fn count(&self) -> usize {
        1 + self.children.iter().map(Self::count).sum::<usize>()
    }

    /// Ids in depth-first, pre-order.
    pub fn ids(&self) -> Vec<&str> {
        let mut ids = vec![self.id.as_str()];
        for child in &self.children {
            ids.extend(child.ids());
        }
        ids
    }
}

/// Menu name -> root links.
pub type Menus = BTreeMap<String, Vec<MenuLink>>;

/// Build every menu (or only `include`, when non-empty).
pub fn build_menus(items: &[MenuItem], registry: &AliasRegistry, include: &[String]) -> Menus {
    let mut by_menu: BTreeMap<&str, Vec<&MenuItem>> = BTreeMap::new();
    for item in items {
        if include.is_empty() || include.iter().any(|name| name == &item.menu_name) {
            by_menu.entry(item.menu_name.as_str()).or_default().push(item);
        }
    }

    by_menu
        .into_iter()
        .map(|(name, items)| (name.to_string(), build_tree(items, registry)))
        .collect()
}

/// Build one menu's tree from its items.
///
/// Items whose parent is not in the same menu are roots. Siblings keep input
/// order, stable-sorted by weight. Items on a parent cycle never hang off a
/// root and are left out.
pub fn build_tree(mut items: Vec<&MenuItem>, registry: &AliasRegistry) -> Vec<MenuLink> {
    items.sort_by_key(|item| item.weight);

    let ids: FxHashSet<&str> = items.iter().map(|&item| item.id.as_str()).collect();
    let mut children: FxHashMap<&str, Vec<&MenuItem>> = FxHashMap::default();
    let mut roots = Vec::new();

    for &item in &items {
        match item.parent_id() {
            Some(parent) if ids.contains(parent) => children.entry(parent).or_default().push(item),
            _ => roots.push(item),
        }
    }

    let links: Vec<_> = roots
        .into_iter()
        .map(|root| flatten(root, &children, registry))
        .collect();

    let reached: usize = links.iter().map(MenuLink::count).sum();
    if reached < items.len() {
        debug!("menu"; "{} unreachable item(s) skipped", items.len() - reached);
    }
    links
}

fn flatten(
    item: &MenuItem,
    children: &FxHashMap<&str, Vec<&MenuItem>>,
    registry: &AliasRegistry,
) -> MenuLink {
    let url = item
        .target_node()
        .and_then(|nid| registry.get_str(&nid))
        .map(|alias| alias.as_str().to_string())
        .or_else(|| item.url.clone());

    MenuLink {
        id: item.id.clone(),
        title: item.title.clone(),
        url,
        children: children
            .get(item.id.as_str())
            .map(|kids| {
                kids.iter()
                    .map(|kid| flatten(kid, children, registry))
                    .collect()
            })
            .unwrap_or_default(),
    }
}

/// Write menus as YAML.
pub fn write_menus(menus: &Menus, path: &Path) -> Result<()> {
    let yaml = serde_yaml_ng::to_string(menus)?;
    fs::write(path, yaml).with_context(|| format!("Failed to write menus to {}", path.display()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::UrlPath;
    use crate::menu::entry::{MenuRoute, ParentRef, RouteParameters};

    fn item(id: &str, parent: Option<&str>) -> MenuItem {
        MenuItem {
            id: id.into(),
            menu_name: "main".into(),
            title: format!("Item {id}"),
            url: Some(format!("/node/{id}")),
            parent: parent.map(|id| ParentRef { id: id.into() }),
            ..MenuItem::default()
        }
    }

    fn linked(id: &str, parent: Option<&str>, nid: &str) -> MenuItem {
        MenuItem {
            route: Some(MenuRoute {
                parameters: RouteParameters {
                    node: Some(serde_json::Value::String(nid.into())),
                },
            }),
            ..item(id, parent)
        }
    }

    #[test]
    fn test_depth_first_order_and_count() {
        let items = vec![
            item("1", None),
            item("2", Some("1")),
            item("3", Some("1")),
            item("4", Some("3")),
        ];
        let tree = build_tree(items.iter().collect(), &AliasRegistry::new());

        assert_eq!(tree.len(), 1);
        assert_eq!(tree[0].count(), 4);
        assert_eq!(tree[0].ids(), vec!["1", "2", "3", "4"]);
        assert_eq!(tree[0].children[1].children[0].id, "4");
    }

    #[test]
    fn test_children_listed_before_parent() {
        let items = vec![item("4", Some("3")), item("3", Some("1")), item("1", None)];
        let tree = build_tree(items.iter().collect(), &AliasRegistry::new());
        assert_eq!(tree[0].ids(), vec!["1", "3", "4"]);
    }

    #[test]
    fn test_weight_orders_siblings() {
        let mut heavy = item("2", Some("1"));
        heavy.weight = 10;
        let items = vec![item("1", None), heavy, item("3", Some("1"))];
        let tree = build_tree(items.iter().collect(), &AliasRegistry::new());
        assert_eq!(tree[0].ids(), vec!["1", "3", "2"]);
    }

    #[test]
    fn test_alias_substitution() {
        let mut registry = AliasRegistry::new();
        registry
            .insert(12, UrlPath::from_alias("/programs/biomedical-science"))
            .unwrap();

        let items = vec![
            linked("1", None, "12"),
            linked("2", Some("1"), "99"),
            item("3", Some("1")),
        ];
        let tree = build_tree(items.iter().collect(), &registry);

        assert_eq!(tree[0].url.as_deref(), Some("/programs/biomedical-science"));
        assert_eq!(tree[0].children[0].url.as_deref(), Some("/node/2"));
        assert_eq!(tree[0].children[1].url.as_deref(), Some("/node/3"));
    }

    #[test]
    fn test_orphan_parent_becomes_root() {
        let items = vec![item("1", None), item("2", Some("elsewhere"))];
        let tree = build_tree(items.iter().collect(), &AliasRegistry::new());
        assert_eq!(tree.len(), 2);
    }

    #[test]
    fn test_cycle_is_left_out() {
        let items = vec![item("1", None), item("2", Some("3")), item("3", Some("2"))];
        let tree = build_tree(items.iter().collect(), &AliasRegistry::new());
        assert_eq!(tree.len(), 1);
        assert_eq!(tree[0].count(), 1);
    }

    #[test]
    fn test_build_menus_groups_and_filters() {
        let mut footer = item("f1", None);
        footer.menu_name = "footer".into();
        let items = vec![item("1", None), footer, item("2", Some("1"))];

        let all = build_menus(&items, &AliasRegistry::new(), &[]);
        assert_eq!(all.keys().collect::<Vec<_>>(), vec!["footer", "main"]);
        assert_eq!(all["main"][0].count(), 2);

        let only_footer = build_menus(&items, &AliasRegistry::new(), &["footer".to_string()]);
        assert_eq!(only_footer.len(), 1);
        assert!(only_footer.contains_key("footer"));
    }

    #[test]
    fn test_write_menus_roundtrip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("menus.yaml");
        let items = vec![item("1", None), item("2", Some("1"))];
        let menus = build_menus(&items, &AliasRegistry::new(), &[]);

        write_menus(&menus, &path).unwrap();
        let back: Menus = serde_yaml_ng::from_str(&fs::read_to_string(&path).unwrap()).unwrap();
        assert_eq!(back, menus);
    }
}
