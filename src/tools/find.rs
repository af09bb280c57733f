//! Search tools: fuzzy variable/style search and strict layer-name search

use super::shared::AuditResponse;
use crate::handler::AuditHandler;
use crate::search::{SearchEngine, SearchMode};
use anyhow::Result;
use serde::{Deserialize, Serialize};
use tracing::debug;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FindVariablesAndStylesTool {
    /// Variable or style name (or fragment) to look for
    #[serde(default)]
    pub search_term: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FindLayerNamesTool {
    /// One of the configured layer-role names, case-insensitive
    #[serde(default)]
    pub search_term: String,
}

impl FindVariablesAndStylesTool {
    pub async fn call_tool(&self, handler: &AuditHandler) -> Result<AuditResponse> {
        debug!("🔍 Find variables and styles: {:?}", self.search_term);
        run_search(handler, &self.search_term, SearchMode::Fuzzy).await
    }
}

impl FindLayerNamesTool {
    pub async fn call_tool(&self, handler: &AuditHandler) -> Result<AuditResponse> {
        debug!("🔎 Find layer names: {:?}", self.search_term);
        run_search(handler, &self.search_term, SearchMode::StrictLayerName).await
    }
}

async fn run_search(handler: &AuditHandler, query: &str, mode: SearchMode) -> Result<AuditResponse> {
    let engine = SearchEngine::new(handler.source(), handler.config());
    let outcome = engine.search(query, mode).await?;
    handler.remember_results(&outcome.results);
    Ok(AuditResponse::SearchResults(outcome))
}
