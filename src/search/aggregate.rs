//! Result aggregation for one scope pass
//!
//! Counts checked nodes, nodes carrying items and matching nodes; keeps the
//! per-kind unique name lists and the cross-node deduplicated item list.

use super::types::{SearchResult, SearchStatistics};
use crate::extractors::{FoundItem, ItemKind};

/// Insertion-ordered list of distinct names
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UniqueNames(Vec<String>);

impl UniqueNames {
    /// Returns false when the name was already present
    pub fn insert(&mut self, name: &str) -> bool {
        if self.0.iter().any(|n| n == name) {
            return false;
        }
        self.0.push(name.to_string());
        true
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn into_vec(self) -> Vec<String> {
        self.0
    }
}

#[derive(Debug, Default)]
pub struct ResultAggregator {
    results: Vec<SearchResult>,
    found_items: Vec<FoundItem>,
    unique_variables: UniqueNames,
    unique_styles: UniqueNames,
    checked_nodes: usize,
    nodes_with_items: usize,
    matching_nodes: usize,
}

impl ResultAggregator {
    pub fn record_checked(&mut self) {
        self.checked_nodes += 1;
    }

    /// Feed a node's complete inventory, matching or not
    pub fn record_items(&mut self, items: &[FoundItem]) {
        if items.is_empty() {
            return;
        }
        self.nodes_with_items += 1;
        for item in items {
            match item.kind() {
                ItemKind::Variable => self.unique_variables.insert(item.name()),
                ItemKind::Style => self.unique_styles.insert(item.name()),
            };
        }
    }

    /// Record a matching node and merge its items into the deduplicated list
    pub fn record_match(&mut self, result: SearchResult) {
        self.matching_nodes += 1;
        for item in &result.found_items {
            push_unique_item(&mut self.found_items, item);
        }
        self.results.push(result);
    }

    pub fn checked_nodes(&self) -> usize {
        self.checked_nodes
    }

    pub fn nodes_with_items(&self) -> usize {
        self.nodes_with_items
    }

    pub fn matching_nodes(&self) -> usize {
        self.matching_nodes
    }

    pub fn finish(self) -> AggregatedPass {
        let total_unique_items = self.unique_variables.len() + self.unique_styles.len();
        AggregatedPass {
            results: self.results,
            found_items: self.found_items,
            statistics: SearchStatistics {
                checked_nodes: self.checked_nodes,
                nodes_with_items: self.nodes_with_items,
                matching_nodes: self.matching_nodes,
                unique_variables: self.unique_variables.into_vec(),
                unique_styles: self.unique_styles.into_vec(),
                total_unique_items,
                excluded_nodes: None,
            },
        }
    }
}

/// Output of one completed pass
#[derive(Debug, Clone)]
pub struct AggregatedPass {
    pub results: Vec<SearchResult>,
    pub found_items: Vec<FoundItem>,
    pub statistics: SearchStatistics,
}

/// Append `item` unless an entry with the same (name, type) exists
///
/// The first occurrence wins; later duplicates are dropped even when their
/// remote flag or resolved type differ.
pub fn push_unique_item(items: &mut Vec<FoundItem>, item: &FoundItem) -> bool {
    let exists = items
        .iter()
        .any(|existing| existing.name() == item.name() && existing.kind() == item.kind());
    if !exists {
        items.push(item.clone());
    }
    !exists
}
