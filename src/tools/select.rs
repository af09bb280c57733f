//! Select-node helper
//!
//! Lets the host UI jump to a result. Entirely best-effort: a node that cannot
//! be found or selected yields `selected: false`, never an error. When the
//! host's node lookup misses or fails, nodes remembered from earlier results
//! are used instead. No search consults the cache.

use super::shared::{AuditResponse, NodeSelection};
use crate::handler::AuditHandler;
use crate::scene::{NodeIdx, Scene};
use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use tracing::debug;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SelectNodeTool {
    #[serde(default)]
    pub node_id: String,
}

impl SelectNodeTool {
    pub async fn call_tool(&self, handler: &AuditHandler) -> Result<AuditResponse> {
        let source = handler.source();

        let target = match source.find_node(&self.node_id) {
            Ok(Some(idx)) => Some(idx),
            Ok(None) => handler.cached_node(&self.node_id),
            Err(e) => {
                debug!("Node lookup for {} failed: {}, trying cache", self.node_id, e);
                handler.cached_node(&self.node_id)
            }
        };

        let selected = match target {
            Some(idx) => match source.select_node(idx) {
                Ok(()) => true,
                Err(e) => {
                    debug!("Could not select {}: {}", self.node_id, e);
                    false
                }
            },
            None => {
                debug!("Node {} not found for selection", self.node_id);
                false
            }
        };

        Ok(AuditResponse::NodeSelected(NodeSelection {
            node_id: self.node_id.clone(),
            selected,
        }))
    }
}

/// Bounded ID → node map of nodes seen in earlier results
///
/// Entries are never invalidated; once full, new IDs are ignored. Lookups
/// re-check the arena so a stale entry can only miss, not mislead.
#[derive(Debug, Clone)]
pub struct NodeCache {
    capacity: usize,
    entries: HashMap<String, NodeIdx>,
}

impl NodeCache {
    pub fn new(capacity: usize) -> Self {
        Self {
            capacity,
            entries: HashMap::new(),
        }
    }

    pub fn remember(&mut self, id: &str, idx: NodeIdx) {
        if let Some(existing) = self.entries.get_mut(id) {
            *existing = idx;
            return;
        }
        if self.entries.len() < self.capacity {
            self.entries.insert(id.to_string(), idx);
        }
    }

    /// Cached node for `id`, if it still carries that ID in `scene`
    pub fn lookup(&self, id: &str, scene: &Scene) -> Option<NodeIdx> {
        let idx = *self.entries.get(id)?;
        scene.node(idx).filter(|node| node.id == id).map(|_| idx)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }
}
