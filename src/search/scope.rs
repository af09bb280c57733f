//! Smart search: selection first, page as fallback
//!
//! Phase A searches the flattened selection. A productive selection is
//! authoritative and returns immediately. Phase B runs when the selection is
//! empty or produced no match; it starts from fresh accumulators and searches
//! every node on the current page.

use super::aggregate::{AggregatedPass, ResultAggregator};
use super::error::{Result, SearchError};
use super::inspect::inspect_node;
use super::types::{ScopeInfo, SearchMode, SearchOutcome, SearchResult};
use super::SearchEngine;
use crate::matching::QueryTerms;
use crate::scene::NodeIdx;
use crate::source::SafeAccessor;
use tracing::{debug, trace, warn};

impl SearchEngine<'_> {
    pub async fn smart_search(&self, query: &str) -> Result<SearchOutcome> {
        let terms = QueryTerms::new(query);
        if terms.is_empty() {
            return Err(SearchError::EmptyQuery {
                mode: SearchMode::Fuzzy,
            });
        }

        let scene = self.source.scene();
        let selection = self.source.selection();
        let mut selection_had_variables = false;

        // Phase A: selection
        if !selection.is_empty() {
            let nodes: Vec<NodeIdx> = selection.iter().flat_map(|&idx| scene.flatten(idx)).collect();
            debug!(
                "🔍 Searching selection: {} selected, {} nodes in scope",
                selection.len(),
                nodes.len()
            );

            let pass = self.run_pass(&nodes, &terms).await;
            if pass.matching_nodes() > 0 {
                return Ok(build_outcome(
                    query,
                    pass.finish(),
                    selection_context(selection.len()),
                    nodes.len(),
                    ScopeInfo {
                        searched_selection: true,
                        expanded_to_page: false,
                        selection_had_variables: false,
                    },
                ));
            }

            selection_had_variables = pass.nodes_with_items() > 0;
            debug!("No match in selection, expanding to page");
        }

        // Phase B: whole page, nothing carried over from phase A
        let page = self.source.current_page();
        let nodes = scene.flatten_page(page);
        debug!("🔍 Searching page: {} nodes in scope", nodes.len());

        let pass = self.run_pass(&nodes, &terms).await;
        let mut context = page_name(self, page);
        if !selection.is_empty() {
            context.push_str(" (expanded from selection)");
        }

        Ok(build_outcome(
            query,
            pass.finish(),
            context,
            nodes.len(),
            ScopeInfo {
                searched_selection: !selection.is_empty(),
                expanded_to_page: true,
                selection_had_variables,
            },
        ))
    }

    /// Check every node of a scope, strictly in order
    pub(crate) async fn run_pass(&self, nodes: &[NodeIdx], terms: &QueryTerms) -> ResultAggregator {
        let scene = self.source.scene();
        let accessor = SafeAccessor::new(self.source);
        let mut aggregator = ResultAggregator::default();

        for &idx in nodes {
            aggregator.record_checked();

            // A dangling index only costs this node, never the search
            let Some(node) = scene.node(idx) else {
                warn!("{}, skipping", SearchError::NodeUnavailable(format!("{:?}", idx)));
                continue;
            };

            let check = inspect_node(node, &accessor, terms).await;
            aggregator.record_items(&check.items);

            if check.found {
                trace!("Match on {} ({})", node.name, node.id);
                aggregator.record_match(SearchResult {
                    id: node.id.clone(),
                    name: node.name.clone(),
                    node_type: node.kind.to_string(),
                    path: scene.build_path(idx),
                    found_items: check.items,
                    match_type: None,
                });
            }
        }

        aggregator
    }
}

pub(crate) fn selection_context(selected: usize) -> String {
    format!("Selected layers ({} items)", selected)
}

pub(crate) fn page_name(engine: &SearchEngine<'_>, page: NodeIdx) -> String {
    engine
        .source
        .scene()
        .node(page)
        .map(|p| p.name.clone())
        .unwrap_or_else(|| "Current page".to_string())
}

fn build_outcome(
    query: &str,
    pass: AggregatedPass,
    context: String,
    total_nodes_in_scope: usize,
    scope_info: ScopeInfo,
) -> SearchOutcome {
    SearchOutcome {
        search_term: query.to_string(),
        search_type: SearchMode::Fuzzy,
        results: pass.results,
        context,
        statistics: pass.statistics,
        all_found_items: pass.found_items,
        total_nodes_in_scope,
        scope_info,
        strict_error: None,
    }
}
