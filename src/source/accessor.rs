//! Never-failing resolution of styles, variables and collections
//!
//! Every lookup tries the awaited host call first and falls back to the
//! synchronous one when that errors. Any remaining failure, as well as empty,
//! mixed or unknown IDs, resolves to `None`. Resolved IDs are not remembered:
//! the next call asks the host again.

use super::SceneDataSource;
use crate::scene::{MIXED_SENTINEL, Style, Variable, VariableCollection};
use tracing::trace;

pub struct SafeAccessor<'a> {
    source: &'a dyn SceneDataSource,
}

impl<'a> SafeAccessor<'a> {
    pub fn new(source: &'a dyn SceneDataSource) -> Self {
        Self { source }
    }

    pub async fn variable(&self, id: &str) -> Option<Variable> {
        if is_blank_id(id) {
            return None;
        }
        match self.source.variable_by_id_async(id).await {
            Ok(variable) => variable,
            Err(async_err) => {
                trace!("Async variable lookup failed for {}: {}", id, async_err);
                match self.source.variable_by_id(id) {
                    Ok(variable) => variable,
                    Err(sync_err) => {
                        trace!("Sync variable lookup failed for {}: {}", id, sync_err);
                        None
                    }
                }
            }
        }
    }

    pub async fn variable_collection(&self, id: &str) -> Option<VariableCollection> {
        if is_blank_id(id) {
            return None;
        }
        match self.source.variable_collection_by_id_async(id).await {
            Ok(collection) => collection,
            Err(async_err) => {
                trace!("Async collection lookup failed for {}: {}", id, async_err);
                match self.source.variable_collection_by_id(id) {
                    Ok(collection) => collection,
                    Err(sync_err) => {
                        trace!("Sync collection lookup failed for {}: {}", id, sync_err);
                        None
                    }
                }
            }
        }
    }

    pub fn style(&self, id: &str) -> Option<Style> {
        if is_blank_id(id) || id == MIXED_SENTINEL {
            return None;
        }
        match self.source.style_by_id(id) {
            Ok(style) => style,
            Err(e) => {
                trace!("Style lookup failed for {}: {}", id, e);
                None
            }
        }
    }
}

fn is_blank_id(id: &str) -> bool {
    id.trim().is_empty()
}
