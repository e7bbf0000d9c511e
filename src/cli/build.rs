//! Build orchestration.
//!
//! Build pipeline phases:
//! - **Load** - Read and index the content graph export
//! - **Emit** - Query every page kind, build aliases, schedule routes
//! - **Init** - Prepare (and optionally clean) the output directory
//! - **Write** - Routes, aliases, menus, search index, events, schema
//!
//! Load and emit finish before anything touches the output directory, so a
//! failed query leaves previous artifacts in place.

use crate::{
    config::SiteConfig,
    events, graph::ContentGraph, log,
    menu::{build_menus, write_menus},
    page::{PageRoute, emit_pages, search},
    schema,
    utils::plural_count,
};
use anyhow::{Context, Result};
use std::{fs, path::Path};

/// Counts reported after a build.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct BuildSummary {
    pub routes: usize,
    pub aliases: usize,
    pub menus: usize,
    pub menu_links: usize,
    pub search_entries: Option<usize>,
    pub widgets: usize,
}

/// Build every artifact.
///
/// Pipeline: load -> emit -> init -> write
pub fn build_site(config: &SiteConfig) -> Result<BuildSummary> {
    let graph_path = &config.source.graph;
    let mut graph = ContentGraph::load(graph_path)
        .with_context(|| format!("Failed to load content graph {}", graph_path.display()))?;
    log!("build"; "loaded {}", plural_count(graph.len(), "node"));

    let emission = emit_pages(&mut graph, &config.build.alias).context("Page emission failed")?;

    init_output(&config.build.output, config.build.clean)?;

    let build = &config.build;
    let mut summary = BuildSummary {
        routes: emission.routes.len(),
        aliases: emission.registry.len(),
        ..Default::default()
    };

    write_routes(&emission.routes, &build.artifact(&build.routes))?;
    emission
        .registry
        .write(&build.artifact(&build.aliases))
        .context("Failed to write alias table")?;

    let menus = build_menus(graph.menu_items(), &emission.registry, &config.menus.include);
    summary.menus = menus.len();
    summary.menu_links = menus.values().flatten().map(|link| link.count()).sum();
    write_menus(&menus, &build.artifact(&build.menus))?;

    if let Some(name) = &build.search {
        let entries = search::build_index(&graph, &emission.routes);
        summary.search_entries = Some(entries.len());
        search::write_index(&entries, &build.artifact(name))?;
    }

    let widgets = events::build_widgets(&graph);
    summary.widgets = widgets.len();
    events::write_widgets(&widgets, &build.artifact(&build.events))?;

    schema::write_schema(&build.artifact(&build.schema))?;

    log_summary(&summary);
    Ok(summary)
}

/// Create the output directory, removing it first when `clean` is set.
fn init_output(output: &Path, clean: bool) -> Result<()> {
    if clean && output.exists() {
        fs::remove_dir_all(output)
            .with_context(|| format!("Failed to clean output directory {}", output.display()))?;
    }
    fs::create_dir_all(output)
        .with_context(|| format!("Failed to create output directory {}", output.display()))
}

/// Write the route manifest as JSON.
fn write_routes(routes: &[PageRoute], path: &Path) -> Result<()> {
    let json = serde_json::to_string_pretty(routes)?;
    fs::write(path, json).with_context(|| format!("Failed to write routes to {}", path.display()))
}

fn log_summary(summary: &BuildSummary) {
    log!(
        "done";
        "{}, {}, {} ({})",
        plural_count(summary.routes, "page"),
        plural_count(summary.aliases, "alias path"),
        plural_count(summary.menus, "menu"),
        plural_count(summary.menu_links, "link")
    );
    if let Some(entries) = summary.search_entries {
        log!("done"; "search index: {}", plural_count(entries, "record"));
    }
    if summary.widgets > 0 {
        log!("done"; "events: {}", plural_count(summary.widgets, "widget"));
    }
}
