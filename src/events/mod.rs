//! Events widgets: WordPress events matched to Drupal event categories.
//!
//! A `paragraph__events_widget` names one or more event categories. With
//! `field_match_categories` set, an event must carry exactly the widget's
//! category list (same names, same order); otherwise any shared category
//! name is enough. Past events are dropped and the rest shown earliest
//! first.

use std::cmp::Ordering;
use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::graph::{ContentGraph, ContentNode, NodeKind};

/// Events shown per widget.
pub const MAX_EVENTS: usize = 4;

const DEFAULT_HEADING: &str = "Upcoming Events";

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct EventCategory {
    pub name: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct EventCategories {
    #[serde(default)]
    pub nodes: Vec<EventCategory>,
}

/// An event from the WordPress source.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WpEvent {
    pub id: String,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub url: Option<String>,
    #[serde(default)]
    pub start_date: Option<String>,
    #[serde(default)]
    pub end_date: Option<String>,
    #[serde(default)]
    pub events_categories: EventCategories,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_past: Option<bool>,
}

impl WpEvent {
    fn is_upcoming(&self) -> bool {
        self.is_past != Some(true)
    }

    fn category_names(&self) -> impl Iterator<Item = &str> {
        self.events_categories.nodes.iter().map(|c| c.name.as_str())
    }
}

/// Events selected for one widget.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WidgetEvents {
    pub heading: String,
    pub events: Vec<WpEvent>,
}

/// Pick the upcoming events a widget shows, earliest start first.
///
/// The sort is stable, so events sharing a start date keep source order.
/// Events without a start date go last.
pub fn select_events<'e>(
    categories: &[&str],
    match_all: bool,
    events: &'e [WpEvent],
) -> Vec<&'e WpEvent> {
    let mut picked: Vec<_> = events
        .iter()
        .filter(|event| event.is_upcoming())
        .filter(|event| {
            if match_all {
                event.category_names().eq(categories.iter().copied())
            } else {
                event
                    .category_names()
                    .any(|name| categories.contains(&name))
            }
        })
        .collect();

    picked.sort_by(|a, b| match (&a.start_date, &b.start_date) {
        (Some(a), Some(b)) => a.cmp(b),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    });
    picked.truncate(MAX_EVENTS);
    picked
}

fn widget_events(graph: &ContentGraph, widget: &ContentNode) -> Option<WidgetEvents> {
    let categories: Vec<&str> = graph
        .linked(widget, "field_event_category")
        .into_iter()
        .filter_map(ContentNode::label)
        .collect();

    let events = select_events(
        &categories,
        widget.extra_bool("field_match_categories"),
        graph.wp_events(),
    );
    if events.is_empty() {
        return None;
    }

    Some(WidgetEvents {
        heading: widget
            .extra_str("field_title")
            .filter(|t| !t.trim().is_empty())
            .unwrap_or(DEFAULT_HEADING)
            .to_string(),
        events: events.into_iter().cloned().collect(),
    })
}

/// Widget `drupal_id` (or graph id) -> selected events. Widgets without
/// events are omitted.
pub fn build_widgets(graph: &ContentGraph) -> BTreeMap<String, WidgetEvents> {
    graph
        .nodes_of(NodeKind::EventsWidget)
        .filter_map(|widget| {
            let key = widget.drupal_id.clone().unwrap_or_else(|| widget.id.clone());
            Some((key, widget_events(graph, widget)?))
        })
        .collect()
}

/// Write widget selections as YAML.
pub fn write_widgets(widgets: &BTreeMap<String, WidgetEvents>, path: &Path) -> Result<()> {
    let yaml = serde_yaml_ng::to_string(widgets)?;
    fs::write(path, yaml).with_context(|| format!("Failed to write events to {}", path.display()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn event(id: &str, categories: &[&str]) -> WpEvent {
        WpEvent {
            id: id.into(),
            title: format!("Event {id}"),
            events_categories: EventCategories {
                nodes: categories
                    .iter()
                    .map(|name| EventCategory {
                        name: (*name).into(),
                    })
                    .collect(),
            },
            ..WpEvent::default()
        }
    }

    fn dated(id: &str, start: &str, is_past: Option<bool>) -> WpEvent {
        WpEvent {
            start_date: Some(start.into()),
            is_past,
            ..event(id, &["Science"])
        }
    }

    fn ids(events: &[&WpEvent]) -> Vec<String> {
        events.iter().map(|e| e.id.clone()).collect()
    }

    #[test]
    fn test_any_match() {
        let events = vec![
            event("1", &["Science"]),
            event("2", &["Arts", "Science"]),
            event("3", &["Arts"]),
        ];
        let picked = select_events(&["Science"], false, &events);
        assert_eq!(ids(&picked), vec!["1", "2"]);
    }

    #[test]
    fn test_match_all_is_exact_and_ordered() {
        let events = vec![
            event("1", &["Arts", "Science"]),
            event("2", &["Science", "Arts"]),
            event("3", &["Arts"]),
        ];
        let picked = select_events(&["Arts", "Science"], true, &events);
        assert_eq!(ids(&picked), vec!["1"]);
    }

    #[test]
    fn test_limit() {
        let events: Vec<_> = (0..10).map(|i| event(&i.to_string(), &["X"])).collect();
        assert_eq!(select_events(&["X"], false, &events).len(), MAX_EVENTS);
    }

    #[test]
    fn test_upcoming_earliest_first() {
        let events = vec![
            dated("past", "2001-05-01 09:00", Some(true)),
            dated("late", "2099-12-01 09:00", Some(false)),
            dated("l2", "2099-11-01 09:00", Some(false)),
            dated("l3", "2099-10-01 09:00", None),
            dated("soon", "2099-01-15 09:00", Some(false)),
            dated("l4", "2099-10-20 09:00", Some(false)),
        ];
        let picked = select_events(&["Science"], false, &events);
        assert_eq!(ids(&picked), vec!["soon", "l3", "l4", "l2"]);
    }

    #[test]
    fn test_same_start_keeps_source_order() {
        let mut undated = event("undated", &["Science"]);
        undated.is_past = Some(false);
        let events = vec![
            undated,
            dated("b", "2099-03-01 10:00", None),
            dated("a", "2099-03-01 10:00", None),
        ];
        let picked = select_events(&["Science"], false, &events);
        assert_eq!(ids(&picked), vec!["b", "a", "undated"]);
    }

    #[test]
    fn test_build_widgets_from_graph() {
        let graph = ContentGraph::from_json(
            &json!({ "data": {
                "nodes": [
                    { "id": "c1", "internal": { "type": "taxonomy_term__event_category" }, "name": "Science" },
                    { "id": "w1", "drupal_id": "dw1", "internal": { "type": "paragraph__events_widget" },
                      "field_title": "Science Events", "field_match_categories": false,
                      "relationships": { "field_event_category___NODE": ["c1"] } },
                    { "id": "w2", "drupal_id": "dw2", "internal": { "type": "paragraph__events_widget" },
                      "field_title": null,
                      "relationships": { "field_event_category___NODE": ["c1"] } },
                    { "id": "w3", "drupal_id": "dw3", "internal": { "type": "paragraph__events_widget" },
                      "relationships": {} }
                ],
                "wpEvents": [
                    { "id": "e1", "title": "Open Lab", "startDate": "2026-11-02 10:00",
                      "isPast": false,
                      "eventsCategories": { "nodes": [ { "name": "Science" } ] } },
                    { "id": "e0", "title": "Old Lab", "startDate": "2020-01-10 10:00",
                      "isPast": true,
                      "eventsCategories": { "nodes": [ { "name": "Science" } ] } }
                ]
            } })
            .to_string(),
        )
        .unwrap();

        let widgets = build_widgets(&graph);
        assert_eq!(widgets.len(), 2);
        assert_eq!(widgets["dw1"].heading, "Science Events");
        assert_eq!(widgets["dw2"].heading, "Upcoming Events");
        assert_eq!(widgets["dw1"].events.len(), 1);
        assert_eq!(widgets["dw1"].events[0].title, "Open Lab");
        assert_eq!(
            widgets["dw1"].events[0].start_date.as_deref(),
            Some("2026-11-02 10:00")
        );
        assert!(!widgets.contains_key("dw3"));
    }
}
