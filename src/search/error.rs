use super::types::SearchMode;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SearchError {
    #[error("Empty query for {mode} search")]
    EmptyQuery { mode: SearchMode },

    #[error("Unknown search mode: {0}")]
    UnknownMode(String),

    /// A scope entry no longer resolves to a node; skipped, never returned
    #[error("Node {0} is not part of the scene")]
    NodeUnavailable(String),
}

pub type Result<T> = std::result::Result<T, SearchError>;
