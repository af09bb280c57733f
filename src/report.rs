//! Plain-text rendering of search outcomes for the terminal

use crate::extractors::FoundItem;
use crate::search::{SearchMode, SearchOutcome};
use std::fmt::Write;

/// Multi-line, human-oriented summary of an outcome
pub fn format_outcome(outcome: &SearchOutcome) -> String {
    let mut out = String::new();

    if let Some(strict_error) = &outcome.strict_error {
        let _ = writeln!(out, "{}", strict_error);
        return out;
    }

    let stats = &outcome.statistics;
    let _ = writeln!(
        out,
        "Found {} matching layers for '{}' in {}",
        outcome.results.len(),
        outcome.search_term,
        outcome.context
    );
    let _ = write!(
        out,
        "Checked {} of {} nodes",
        stats.checked_nodes, outcome.total_nodes_in_scope
    );
    match outcome.search_type {
        SearchMode::Fuzzy => {
            let _ = writeln!(
                out,
                ", {} with styles or variables ({} variables, {} styles)",
                stats.nodes_with_items,
                stats.unique_variables.len(),
                stats.unique_styles.len()
            );
        }
        SearchMode::StrictLayerName => {
            let _ = writeln!(
                out,
                ", {} components/instances skipped",
                stats.excluded_nodes.unwrap_or(0)
            );
        }
    }

    for result in &outcome.results {
        let _ = writeln!(out);
        let _ = writeln!(out, "{} [{}] {}", result.name, result.node_type, result.id);
        let _ = writeln!(out, "  {}", result.path);
        for item in &result.found_items {
            let _ = writeln!(out, "    {}", format_item(item));
        }
    }

    out
}

/// One-line description of a found item
pub fn format_item(item: &FoundItem) -> String {
    let remote = if item.is_remote() { " (library)" } else { "" };
    match item {
        FoundItem::Variable(v) => match &v.bound_to {
            Some(property) => format!(
                "variable {} : {} → {}{}",
                v.name, v.resolved_type, property, remote
            ),
            None => format!("variable {} : {}{}", v.name, v.resolved_type, remote),
        },
        FoundItem::Style(s) => format!(
            "style {} : {:?} on {:?}{}",
            s.name, s.style_type, s.property, remote
        ),
    }
}
