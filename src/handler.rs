use std::sync::{Arc, Mutex};
use tracing::{debug, error, info};

use crate::config::AuditConfig;
use crate::scene::NodeIdx;
use crate::search::{SearchError, SearchMode, SearchResult};
use crate::source::SceneDataSource;
use crate::tools::{AuditRequest, AuditResponse, NodeCache};

/// Dispatches host requests to the matching tool
///
/// Holds the data source, the configuration and the select helper's node
/// cache. Searches themselves are stateless; callers that need exactly one
/// search in flight must serialize their calls.
pub struct AuditHandler {
    source: Arc<dyn SceneDataSource>,
    config: Arc<AuditConfig>,
    node_cache: Mutex<NodeCache>,
}

impl AuditHandler {
    pub fn new(source: Arc<dyn SceneDataSource>, config: Arc<AuditConfig>) -> Self {
        let node_cache = Mutex::new(NodeCache::new(config.selection.node_cache_capacity));
        Self {
            source,
            config,
            node_cache,
        }
    }

    pub fn source(&self) -> &dyn SceneDataSource {
        self.source.as_ref()
    }

    pub fn config(&self) -> &AuditConfig {
        &self.config
    }

    /// Handle one request; failures come back as `AuditResponse::Error`
    pub async fn handle(&self, request: AuditRequest) -> AuditResponse {
        debug!("🛠️  Handling request: {:?}", request);

        let (result, mode) = match &request {
            AuditRequest::FindVariablesAndStyles(tool) => {
                (tool.call_tool(self).await, Some(SearchMode::Fuzzy))
            }
            AuditRequest::FindLayerNames(tool) => {
                (tool.call_tool(self).await, Some(SearchMode::StrictLayerName))
            }
            AuditRequest::SelectNode(tool) => (tool.call_tool(self).await, None),
        };

        match result {
            Ok(response) => {
                if let AuditResponse::SearchResults(outcome) = &response {
                    info!(
                        "✅ {} search for {:?}: {} results in {}",
                        outcome.search_type,
                        outcome.search_term,
                        outcome.results.len(),
                        outcome.context
                    );
                }
                response
            }
            Err(e) => {
                if let Some(SearchError::EmptyQuery { mode }) = e.downcast_ref::<SearchError>() {
                    return AuditResponse::error(empty_query_message(*mode));
                }
                error!("❌ Request failed: {}", e);
                let message = match mode {
                    Some(SearchMode::StrictLayerName) => format!("Layer name search failed: {}", e),
                    Some(SearchMode::Fuzzy) => format!("Search failed: {}", e),
                    None => format!("Request failed: {}", e),
                };
                AuditResponse::error(message)
            }
        }
    }

    /// Remember result nodes for later selection
    pub fn remember_results(&self, results: &[SearchResult]) {
        let scene = self.source.scene();
        let mut cache = match self.node_cache.lock() {
            Ok(guard) => guard,
            Err(poisoned) => poisoned.into_inner(),
        };
        for result in results {
            if let Some(idx) = scene.find(&result.id) {
                cache.remember(&result.id, idx);
            }
        }
    }

    pub fn cached_node(&self, id: &str) -> Option<NodeIdx> {
        let cache = match self.node_cache.lock() {
            Ok(guard) => guard,
            Err(poisoned) => poisoned.into_inner(),
        };
        cache.lookup(id, self.source.scene())
    }

    pub fn cached_node_count(&self) -> usize {
        match self.node_cache.lock() {
            Ok(guard) => guard.len(),
            Err(poisoned) => poisoned.into_inner().len(),
        }
    }
}

fn empty_query_message(mode: SearchMode) -> &'static str {
    match mode {
        SearchMode::Fuzzy => "Please enter a variable or style name to search for",
        SearchMode::StrictLayerName => "Please enter a layer name to search for",
    }
}
