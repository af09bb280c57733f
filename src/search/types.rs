//! Outcome types returned to the host UI
//!
//! Everything here is plain serializable data; no scene handles leak out.

use super::error::SearchError;
use crate::extractors::FoundItem;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Which search path to run
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SearchMode {
    /// Fuzzy match against bound variable and style names
    #[serde(rename = "VARIABLES_STYLES")]
    Fuzzy,
    /// Exact match of layer names against the configured allow-list
    #[serde(rename = "LAYER_NAME")]
    StrictLayerName,
}

impl fmt::Display for SearchMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SearchMode::Fuzzy => f.write_str("fuzzy"),
            SearchMode::StrictLayerName => f.write_str("layer-name"),
        }
    }
}

impl FromStr for SearchMode {
    type Err = SearchError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "fuzzy" | "variables" | "styles" | "variables_styles" => Ok(SearchMode::Fuzzy),
            "layer-name" | "layer_name" | "layers" | "strict" => Ok(SearchMode::StrictLayerName),
            other => Err(SearchError::UnknownMode(other.to_string())),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum MatchType {
    LayerName,
}

/// One matched node
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchResult {
    pub id: String,
    pub name: String,
    #[serde(rename = "type")]
    pub node_type: String,
    pub path: String,
    /// Complete inventory of the node's styles and variables
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub found_items: Vec<FoundItem>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub match_type: Option<MatchType>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchStatistics {
    pub checked_nodes: usize,
    pub nodes_with_items: usize,
    pub matching_nodes: usize,
    pub unique_variables: Vec<String>,
    pub unique_styles: Vec<String>,
    pub total_unique_items: usize,
    /// Only reported by layer-name searches
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub excluded_nodes: Option<usize>,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScopeInfo {
    pub searched_selection: bool,
    pub expanded_to_page: bool,
    /// Whether the discarded selection pass saw any styles or variables
    pub selection_had_variables: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchOutcome {
    pub search_term: String,
    pub search_type: SearchMode,
    pub results: Vec<SearchResult>,
    /// Human description of the scope, e.g. "Selected layers (2 items)"
    pub context: String,
    #[serde(rename = "searchStatistics")]
    pub statistics: SearchStatistics,
    /// Items of all matching nodes, first occurrence per (name, type) wins
    #[serde(rename = "foundItems")]
    pub all_found_items: Vec<FoundItem>,
    #[serde(rename = "totalSearched")]
    pub total_nodes_in_scope: usize,
    pub scope_info: ScopeInfo,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub strict_error: Option<String>,
}
