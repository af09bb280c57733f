//! In-memory data source backed by a loaded snapshot

use super::{SceneDataSource, SourceError, SourceResult};
use crate::scene::snapshot::LoadedScene;
use crate::scene::{NodeIdx, Scene, SceneSnapshot, Style, Variable, VariableCollection};
use async_trait::async_trait;
use std::collections::HashMap;
use std::path::Path;
use std::sync::RwLock;
use tracing::debug;

pub struct InMemorySource {
    scene: Scene,
    current_page: NodeIdx,
    selection: RwLock<Vec<NodeIdx>>,
    styles: HashMap<String, Style>,
    variables: HashMap<String, Variable>,
    collections: HashMap<String, VariableCollection>,
}

impl InMemorySource {
    pub fn new(loaded: LoadedScene) -> Self {
        let styles = loaded
            .styles
            .into_iter()
            .map(|s| (s.id.clone(), s))
            .collect();
        let variables = loaded
            .variables
            .into_iter()
            .map(|v| (v.id.clone(), v))
            .collect();
        let collections = loaded
            .variable_collections
            .into_iter()
            .map(|c| (c.id.clone(), c))
            .collect();

        Self {
            scene: loaded.scene,
            current_page: loaded.current_page,
            selection: RwLock::new(loaded.selection),
            styles,
            variables,
            collections,
        }
    }

    pub fn from_snapshot(snapshot: SceneSnapshot) -> crate::scene::Result<Self> {
        Ok(Self::new(snapshot.load()?))
    }

    pub fn from_path(path: &Path) -> crate::scene::Result<Self> {
        Self::from_snapshot(SceneSnapshot::from_path(path)?)
    }

    pub fn from_json(json: &str) -> crate::scene::Result<Self> {
        Self::from_snapshot(SceneSnapshot::from_json(json)?)
    }

    /// Replace the selection wholesale (used by the CLI `--select` flag)
    pub fn set_selection(&self, nodes: Vec<NodeIdx>) {
        match self.selection.write() {
            Ok(mut guard) => *guard = nodes,
            Err(poisoned) => *poisoned.into_inner() = nodes,
        }
    }
}

#[async_trait]
impl SceneDataSource for InMemorySource {
    fn scene(&self) -> &Scene {
        &self.scene
    }

    fn current_page(&self) -> NodeIdx {
        self.current_page
    }

    fn selection(&self) -> Vec<NodeIdx> {
        match self.selection.read() {
            Ok(guard) => guard.clone(),
            Err(poisoned) => poisoned.into_inner().clone(),
        }
    }

    async fn variable_by_id_async(&self, id: &str) -> SourceResult<Option<Variable>> {
        self.variable_by_id(id)
    }

    fn variable_by_id(&self, id: &str) -> SourceResult<Option<Variable>> {
        Ok(self.variables.get(id).cloned())
    }

    async fn variable_collection_by_id_async(
        &self,
        id: &str,
    ) -> SourceResult<Option<VariableCollection>> {
        self.variable_collection_by_id(id)
    }

    fn variable_collection_by_id(&self, id: &str) -> SourceResult<Option<VariableCollection>> {
        Ok(self.collections.get(id).cloned())
    }

    fn style_by_id(&self, id: &str) -> SourceResult<Option<Style>> {
        Ok(self.styles.get(id).cloned())
    }

    fn select_node(&self, node: NodeIdx) -> SourceResult<()> {
        let Some(scene_node) = self.scene.node(node) else {
            return Err(SourceError::InvalidId(format!("{:?}", node)));
        };
        debug!("Selecting {} ({})", scene_node.name, scene_node.id);
        self.set_selection(vec![node]);
        Ok(())
    }
}
