use crate::search::SearchOutcome;
use serde::{Deserialize, Serialize};

/// Response sent back to the host UI for every request
///
/// Serialized with a `type` tag so the UI can dispatch on it:
/// `search-results`, `node-selected` or `error`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "kebab-case")]
pub enum AuditResponse {
    SearchResults(SearchOutcome),
    NodeSelected(NodeSelection),
    Error { message: String },
}

impl AuditResponse {
    pub fn error(message: impl Into<String>) -> Self {
        AuditResponse::Error {
            message: message.into(),
        }
    }

    pub fn is_error(&self) -> bool {
        matches!(self, AuditResponse::Error { .. })
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NodeSelection {
    pub node_id: String,
    /// False when the node could not be found or the host refused; never an error
    pub selected: bool,
}
