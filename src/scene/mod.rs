//! Scene graph arena
//!
//! The host hierarchy (document → pages → layers) is stored in a flat arena.
//! Children are owned by the arena and referenced by [`NodeIdx`]; each node keeps
//! a non-owning back-reference to its parent for path building.

pub mod node;
pub mod resources;
pub mod snapshot;

pub use node::{
    BoundValue, Capabilities, MIXED_SENTINEL, NodeIdx, NodeKind, Paint, SceneNode, StyleRef,
    StyleSlots, VariableAlias,
};
pub use resources::{Style, StyleType, Variable, VariableCollection};
pub use snapshot::SceneSnapshot;

use std::collections::HashMap;
use thiserror::Error;

/// Separator placed between ancestor names in a node path
pub const PATH_SEPARATOR: &str = " → ";

#[derive(Debug, Error)]
pub enum SceneError {
    #[error("Duplicate node id: {0}")]
    DuplicateNodeId(String),

    #[error("Parent node {0:?} does not exist")]
    UnknownParent(NodeIdx),

    #[error("Node {id} of type {kind} cannot hold children")]
    NoChildrenSlot { id: String, kind: NodeKind },

    #[error("Current page {0} is not a page of this document")]
    UnknownPage(String),

    #[error("Selected node {0} does not exist")]
    UnknownSelection(String),

    #[error("Document has no pages")]
    NoPages,

    #[error("Snapshot parse error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, SceneError>;

/// Arena holding every node of one document
#[derive(Debug, Clone)]
pub struct Scene {
    nodes: Vec<SceneNode>,
    by_id: HashMap<String, NodeIdx>,
    root: NodeIdx,
}

impl Scene {
    /// Create a scene holding only the document root
    pub fn new(document_id: impl Into<String>, document_name: impl Into<String>) -> Self {
        let root = SceneNode::new(document_id, document_name, NodeKind::Document);
        let mut by_id = HashMap::new();
        by_id.insert(root.id.clone(), NodeIdx(0));
        Self {
            nodes: vec![root],
            by_id,
            root: NodeIdx(0),
        }
    }

    pub fn root(&self) -> NodeIdx {
        self.root
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Append `node` as the last child of `parent`
    pub fn insert(&mut self, parent: NodeIdx, mut node: SceneNode) -> Result<NodeIdx> {
        if self.by_id.contains_key(&node.id) {
            return Err(SceneError::DuplicateNodeId(node.id));
        }
        let parent_node = self
            .nodes
            .get(parent.0)
            .ok_or(SceneError::UnknownParent(parent))?;
        if !parent_node.capabilities().children {
            return Err(SceneError::NoChildrenSlot {
                id: parent_node.id.clone(),
                kind: parent_node.kind.clone(),
            });
        }

        let idx = NodeIdx(self.nodes.len());
        node.parent = Some(parent);
        node.children.clear();
        self.by_id.insert(node.id.clone(), idx);
        self.nodes.push(node);
        self.nodes[parent.0].children.push(idx);
        Ok(idx)
    }

    pub fn node(&self, idx: NodeIdx) -> Option<&SceneNode> {
        self.nodes.get(idx.0)
    }

    pub fn find(&self, id: &str) -> Option<NodeIdx> {
        self.by_id.get(id).copied()
    }

    /// Pages are the direct children of the document root
    pub fn pages(&self) -> &[NodeIdx] {
        &self.nodes[self.root.0].children
    }

    /// Pre-order flattening of `idx` and all of its descendants
    ///
    /// Nodes whose kind has no children slot yield only themselves. The host
    /// hierarchy is acyclic so no visited set is kept.
    pub fn flatten(&self, idx: NodeIdx) -> Vec<NodeIdx> {
        let mut out = Vec::new();
        self.push_subtree(idx, &mut out);
        out
    }

    fn push_subtree(&self, idx: NodeIdx, out: &mut Vec<NodeIdx>) {
        let Some(node) = self.node(idx) else {
            return;
        };
        out.push(idx);
        if node.capabilities().children {
            for &child in &node.children {
                self.push_subtree(child, out);
            }
        }
    }

    /// Flatten every top-level child of a page, in order
    pub fn flatten_page(&self, page: NodeIdx) -> Vec<NodeIdx> {
        let Some(page_node) = self.node(page) else {
            return Vec::new();
        };
        page_node
            .children
            .iter()
            .flat_map(|&child| self.flatten(child))
            .collect()
    }

    /// Human-readable ancestry, e.g. `Page 1 → Card → Title`
    ///
    /// Walks parent references up to (not including) the document root and
    /// prepends each display name; empty names read as `Unnamed`.
    pub fn build_path(&self, idx: NodeIdx) -> String {
        let mut path: Vec<&str> = Vec::new();
        let mut current = self.node(idx);

        while let Some(node) = current {
            if node.kind == NodeKind::Document {
                break;
            }
            let name = if node.name.is_empty() {
                "Unnamed"
            } else {
                node.name.as_str()
            };
            path.insert(0, name);
            current = node.parent.and_then(|p| self.node(p));
        }

        path.join(PATH_SEPARATOR)
    }
}
