//! Scene data source: the boundary between the engine and the host document
//!
//! Hosts expose variable and collection lookups in two flavours, an awaited one
//! (required for library/remote resources) and a legacy synchronous one. Both
//! may fail for stale or deleted IDs. The engine never calls these directly; it
//! goes through [`SafeAccessor`], which turns every failure into "absent".

pub mod accessor;
pub mod memory;

pub use accessor::SafeAccessor;
pub use memory::InMemorySource;

use crate::scene::{NodeIdx, Scene, Style, Variable, VariableCollection};
use async_trait::async_trait;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SourceError {
    #[error("Lookup for {0} is not available")]
    Unavailable(String),

    #[error("Invalid id: {0}")]
    InvalidId(String),

    #[error("Operation not supported by this data source: {0}")]
    Unsupported(&'static str),

    #[error("Host error: {0}")]
    Host(String),
}

pub type SourceResult<T> = std::result::Result<T, SourceError>;

#[async_trait]
pub trait SceneDataSource: Send + Sync {
    /// Read-only view of the document hierarchy
    fn scene(&self) -> &Scene;

    /// The page searches fall back to
    fn current_page(&self) -> NodeIdx;

    /// Currently selected top-level nodes, in selection order (possibly empty)
    fn selection(&self) -> Vec<NodeIdx>;

    async fn variable_by_id_async(&self, id: &str) -> SourceResult<Option<Variable>>;

    fn variable_by_id(&self, id: &str) -> SourceResult<Option<Variable>>;

    async fn variable_collection_by_id_async(
        &self,
        id: &str,
    ) -> SourceResult<Option<VariableCollection>>;

    fn variable_collection_by_id(&self, id: &str) -> SourceResult<Option<VariableCollection>>;

    fn style_by_id(&self, id: &str) -> SourceResult<Option<Style>>;

    /// Host lookup of a node by ID
    ///
    /// Hosts may refuse this for nodes on pages that are not loaded, so it can
    /// fail even for IDs present in the scene.
    fn find_node(&self, id: &str) -> SourceResult<Option<NodeIdx>> {
        Ok(self.scene().find(id))
    }

    /// Replace the host selection with a single node
    ///
    /// Best-effort: sources that cannot change selection keep the default.
    fn select_node(&self, _node: NodeIdx) -> SourceResult<()> {
        Err(SourceError::Unsupported("select_node"))
    }
}
