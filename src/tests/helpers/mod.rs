// Shared test helpers
//
// `design_system()` loads the fixture snapshot, `SceneBuilder` assembles small
// documents in code, and `ScriptedSource` fails lookups on demand so accessor
// fallbacks can be observed.

use crate::scene::snapshot::LoadedScene;
use crate::scene::{
    NodeIdx, NodeKind, Scene, SceneNode, Style, StyleType, Variable, VariableCollection,
};
use crate::source::{InMemorySource, SceneDataSource, SourceError, SourceResult};
use async_trait::async_trait;
use std::sync::atomic::{AtomicUsize, Ordering};

pub const DESIGN_SYSTEM_JSON: &str = include_str!("../../../fixtures/scenes/design-system.json");

/// Fixture document: page "Components" (current) and page "Archive"
pub fn design_system() -> InMemorySource {
    InMemorySource::from_json(DESIGN_SYSTEM_JSON).expect("fixture snapshot should load")
}

/// Fixture document with the selection replaced by `ids`
pub fn design_system_with_selection(ids: &[&str]) -> InMemorySource {
    let source = design_system();
    let nodes = ids.iter().map(|id| node_idx(&source, id)).collect();
    source.set_selection(nodes);
    source
}

pub fn node_idx(source: &dyn SceneDataSource, id: &str) -> NodeIdx {
    source
        .scene()
        .find(id)
        .unwrap_or_else(|| panic!("fixture has no node {}", id))
}

/// Builds a one-page document node by node
pub struct SceneBuilder {
    scene: Scene,
    page: NodeIdx,
    selection: Vec<NodeIdx>,
    styles: Vec<Style>,
    variables: Vec<Variable>,
    collections: Vec<VariableCollection>,
}

impl SceneBuilder {
    pub fn new(page_name: &str) -> Self {
        let mut scene = Scene::new("0:0", "Test Document");
        let root = scene.root();
        let page = scene
            .insert(root, SceneNode::new("0:1", page_name, NodeKind::Page))
            .expect("page insert");
        Self {
            scene,
            page,
            selection: Vec::new(),
            styles: Vec::new(),
            variables: Vec::new(),
            collections: Vec::new(),
        }
    }

    /// Insert `node` under `parent` (`None` = the page)
    pub fn add(&mut self, parent: Option<&str>, node: SceneNode) -> NodeIdx {
        let parent = match parent {
            Some(id) => self.scene.find(id).expect("parent exists"),
            None => self.page,
        };
        self.scene.insert(parent, node).expect("node insert")
    }

    pub fn style(&mut self, id: &str, name: &str, style_type: StyleType) -> &mut Self {
        self.styles.push(Style {
            id: id.to_string(),
            name: name.to_string(),
            style_type,
            remote: false,
        });
        self
    }

    pub fn variable(&mut self, id: &str, name: &str, collection_id: &str) -> &mut Self {
        self.variables.push(Variable {
            id: id.to_string(),
            name: name.to_string(),
            resolved_type: "COLOR".to_string(),
            variable_collection_id: collection_id.to_string(),
            remote: false,
        });
        self
    }

    pub fn collection(&mut self, id: &str, name: &str, remote: bool) -> &mut Self {
        self.collections.push(VariableCollection {
            id: id.to_string(),
            name: name.to_string(),
            remote,
        });
        self
    }

    pub fn select(&mut self, id: &str) -> &mut Self {
        let idx = self.scene.find(id).expect("selected node exists");
        self.selection.push(idx);
        self
    }

    pub fn build(self) -> InMemorySource {
        InMemorySource::new(LoadedScene {
            scene: self.scene,
            current_page: self.page,
            selection: self.selection,
            styles: self.styles,
            variables: self.variables,
            variable_collections: self.collections,
        })
    }
}

/// Which host calls should fail
#[derive(Debug, Clone, Copy, Default)]
pub struct Failures {
    pub async_lookups: bool,
    pub sync_lookups: bool,
    pub styles: bool,
    pub node_lookup: bool,
    pub selection: bool,
}

/// Fixture source whose lookups can be made to fail
pub struct ScriptedSource {
    inner: InMemorySource,
    failures: Failures,
    pub async_calls: AtomicUsize,
    pub sync_calls: AtomicUsize,
}

impl ScriptedSource {
    pub fn new(failures: Failures) -> Self {
        Self {
            inner: design_system(),
            failures,
            async_calls: AtomicUsize::new(0),
            sync_calls: AtomicUsize::new(0),
        }
    }

    pub fn async_count(&self) -> usize {
        self.async_calls.load(Ordering::SeqCst)
    }

    pub fn sync_count(&self) -> usize {
        self.sync_calls.load(Ordering::SeqCst)
    }

    fn async_call(&self, id: &str) -> SourceResult<()> {
        self.async_calls.fetch_add(1, Ordering::SeqCst);
        if self.failures.async_lookups {
            return Err(SourceError::Unavailable(id.to_string()));
        }
        Ok(())
    }

    fn sync_call(&self, id: &str) -> SourceResult<()> {
        self.sync_calls.fetch_add(1, Ordering::SeqCst);
        if self.failures.sync_lookups {
            return Err(SourceError::Host(format!("stale id {}", id)));
        }
        Ok(())
    }
}

#[async_trait]
impl SceneDataSource for ScriptedSource {
    fn scene(&self) -> &crate::scene::Scene {
        self.inner.scene()
    }

    fn current_page(&self) -> NodeIdx {
        self.inner.current_page()
    }

    fn selection(&self) -> Vec<NodeIdx> {
        self.inner.selection()
    }

    async fn variable_by_id_async(&self, id: &str) -> SourceResult<Option<Variable>> {
        self.async_call(id)?;
        self.inner.variable_by_id_async(id).await
    }

    fn variable_by_id(&self, id: &str) -> SourceResult<Option<Variable>> {
        self.sync_call(id)?;
        self.inner.variable_by_id(id)
    }

    async fn variable_collection_by_id_async(
        &self,
        id: &str,
    ) -> SourceResult<Option<VariableCollection>> {
        self.async_call(id)?;
        self.inner.variable_collection_by_id_async(id).await
    }

    fn variable_collection_by_id(&self, id: &str) -> SourceResult<Option<VariableCollection>> {
        self.sync_call(id)?;
        self.inner.variable_collection_by_id(id)
    }

    fn style_by_id(&self, id: &str) -> SourceResult<Option<Style>> {
        if self.failures.styles {
            return Err(SourceError::InvalidId(id.to_string()));
        }
        self.inner.style_by_id(id)
    }

    fn find_node(&self, id: &str) -> SourceResult<Option<NodeIdx>> {
        if self.failures.node_lookup {
            return Err(SourceError::Unavailable(id.to_string()));
        }
        self.inner.find_node(id)
    }

    fn select_node(&self, node: NodeIdx) -> SourceResult<()> {
        if self.failures.selection {
            return Err(SourceError::Unsupported("select_node"));
        }
        self.inner.select_node(node)
    }
}
