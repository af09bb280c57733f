//! Search engine for design-asset audits
//!
//! Provides the two search paths exposed to the host:
//! - Fuzzy search over bound style and variable names, scoped to the selection
//!   and widened to the page when the selection yields nothing
//! - Strict layer-name search against the configured allow-list
//!
//! The engine is a pure function of (query, data-source snapshot): it never
//! mutates the scene and keeps no state between calls. Nodes are processed one
//! at a time in enumeration order so statistics and deduplication are stable.

pub mod aggregate;
pub mod error;
pub mod inspect;
pub mod layer_name;
mod scope;
pub mod types;

pub use aggregate::{ResultAggregator, UniqueNames, push_unique_item};
pub use error::{Result, SearchError};
pub use inspect::{NodeCheck, inspect_node};
pub use layer_name::{LayerNameSearch, search_layers_by_name};
pub use types::{
    MatchType, ScopeInfo, SearchMode, SearchOutcome, SearchResult, SearchStatistics,
};

use crate::config::AuditConfig;
use crate::source::SceneDataSource;
use tracing::debug;

pub struct SearchEngine<'a> {
    source: &'a dyn SceneDataSource,
    config: &'a AuditConfig,
}

impl<'a> SearchEngine<'a> {
    pub fn new(source: &'a dyn SceneDataSource, config: &'a AuditConfig) -> Self {
        Self { source, config }
    }

    /// Run one search; empty or whitespace-only queries are rejected before
    /// any traversal
    pub async fn search(&self, query: &str, mode: SearchMode) -> Result<SearchOutcome> {
        debug!("Search ({}): {:?}", mode, query);
        match mode {
            SearchMode::Fuzzy => self.smart_search(query).await,
            SearchMode::StrictLayerName => self.layer_name_search(query),
        }
    }
}
