//! Strict layer-name search
//!
//! Exact, non-fuzzy matching of layer names against a fixed allow-list of
//! layer roles. Component definitions, sets and instances are skipped. Scope is
//! the selection when there is one, otherwise the current page, searched once
//! with no widening.

use super::error::{Result, SearchError};
use super::scope::{page_name, selection_context};
use super::types::{
    MatchType, ScopeInfo, SearchMode, SearchOutcome, SearchResult, SearchStatistics,
};
use super::SearchEngine;
use crate::config::LayerNameConfig;
use crate::matching::fold;
use crate::scene::{NodeIdx, Scene};
use tracing::{debug, warn};

/// Raw result of matching a scope against the allow-list
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LayerNameSearch {
    pub results: Vec<SearchResult>,
    pub checked_nodes: usize,
    pub matching_nodes: usize,
    pub excluded_nodes: usize,
    pub strict_error: Option<String>,
}

pub fn search_layers_by_name(
    query: &str,
    scope_nodes: &[NodeIdx],
    scene: &Scene,
    rules: &LayerNameConfig,
) -> LayerNameSearch {
    let folded_query = fold(query);
    let mut search = LayerNameSearch::default();

    if !rules.is_allowed(&folded_query) {
        search.strict_error = Some(format!(
            "Layer name \"{}\" is not in the allowed list. Use: {}",
            query,
            rules.allowed.join(", ")
        ));
        return search;
    }

    for &idx in scope_nodes {
        search.checked_nodes += 1;
        let Some(node) = scene.node(idx) else {
            warn!("{}, skipping", SearchError::NodeUnavailable(format!("{:?}", idx)));
            continue;
        };

        if rules.is_excluded_type(node.kind.as_tag()) {
            search.excluded_nodes += 1;
            continue;
        }

        if fold(&node.name) == folded_query {
            search.matching_nodes += 1;
            search.results.push(SearchResult {
                id: node.id.clone(),
                name: node.name.clone(),
                node_type: node.kind.to_string(),
                path: scene.build_path(idx),
                found_items: Vec::new(),
                match_type: Some(MatchType::LayerName),
            });
        }
    }

    search
}

impl SearchEngine<'_> {
    pub fn layer_name_search(&self, query: &str) -> Result<SearchOutcome> {
        if query.trim().is_empty() {
            return Err(SearchError::EmptyQuery {
                mode: SearchMode::StrictLayerName,
            });
        }

        let scene = self.source.scene();
        let selection = self.source.selection();
        let (nodes, context) = if selection.is_empty() {
            let page = self.source.current_page();
            (scene.flatten_page(page), page_name(self, page))
        } else {
            let nodes: Vec<NodeIdx> = selection.iter().flat_map(|&idx| scene.flatten(idx)).collect();
            (nodes, selection_context(selection.len()))
        };
        debug!("🔎 Layer-name search over {} nodes ({})", nodes.len(), context);

        let search = search_layers_by_name(query, &nodes, scene, &self.config.layer_names);

        Ok(SearchOutcome {
            search_term: query.to_string(),
            search_type: SearchMode::StrictLayerName,
            results: search.results,
            context,
            statistics: SearchStatistics {
                checked_nodes: search.checked_nodes,
                nodes_with_items: 0,
                matching_nodes: search.matching_nodes,
                unique_variables: Vec::new(),
                unique_styles: Vec::new(),
                total_unique_items: 0,
                excluded_nodes: Some(search.excluded_nodes),
            },
            all_found_items: Vec::new(),
            total_nodes_in_scope: nodes.len(),
            scope_info: ScopeInfo {
                searched_selection: !selection.is_empty(),
                expanded_to_page: false,
                selection_had_variables: false,
            },
            strict_error: search.strict_error,
        })
    }
}
