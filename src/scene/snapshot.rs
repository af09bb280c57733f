//! JSON snapshot of a host document
//!
//! A snapshot is the serialized form of everything the engine needs from the
//! host: the page tree, the current page, the selection and the style/variable
//! tables. It is loaded once and turned into a [`Scene`] arena.

use super::node::{
    BoundValue, NodeIdx, NodeKind, Paint, SceneNode, StyleRef, StyleSlots, bindings_or_empty,
    paints_or_empty, style_id_or_mixed,
};
use super::resources::{Style, Variable, VariableCollection};
use super::{Result, Scene, SceneError};
use serde::Deserialize;
use std::collections::BTreeMap;
use std::path::Path;
use tracing::debug;

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SceneSnapshot {
    #[serde(default = "default_document_id")]
    pub id: String,
    #[serde(default)]
    pub name: String,
    /// Defaults to the first page
    #[serde(default)]
    pub current_page_id: Option<String>,
    #[serde(default)]
    pub selection: Vec<String>,
    pub pages: Vec<RawPage>,
    #[serde(default)]
    pub styles: Vec<Style>,
    #[serde(default)]
    pub variables: Vec<Variable>,
    #[serde(default)]
    pub variable_collections: Vec<VariableCollection>,
}

fn default_document_id() -> String {
    "0:0".to_string()
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawPage {
    pub id: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub children: Vec<RawNode>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawNode {
    pub id: String,
    #[serde(default)]
    pub name: String,
    #[serde(rename = "type")]
    pub kind: NodeKind,
    #[serde(default = "default_true")]
    pub visible: bool,
    #[serde(default)]
    pub locked: bool,
    #[serde(default)]
    pub children: Vec<RawNode>,
    #[serde(default, deserialize_with = "paints_or_empty")]
    pub fills: Vec<Paint>,
    #[serde(default, deserialize_with = "paints_or_empty")]
    pub strokes: Vec<Paint>,
    #[serde(default, deserialize_with = "style_id_or_mixed")]
    pub fill_style_id: Option<String>,
    #[serde(default, deserialize_with = "style_id_or_mixed")]
    pub stroke_style_id: Option<String>,
    #[serde(default, deserialize_with = "style_id_or_mixed")]
    pub text_style_id: Option<String>,
    #[serde(default, deserialize_with = "style_id_or_mixed")]
    pub effect_style_id: Option<String>,
    #[serde(default, deserialize_with = "style_id_or_mixed")]
    pub grid_style_id: Option<String>,
    #[serde(default, deserialize_with = "bindings_or_empty")]
    pub bound_variables: BTreeMap<String, BoundValue>,
}

fn default_true() -> bool {
    true
}

/// A snapshot turned into an arena plus the lookup tables
#[derive(Debug, Clone)]
pub struct LoadedScene {
    pub scene: Scene,
    pub current_page: NodeIdx,
    pub selection: Vec<NodeIdx>,
    pub styles: Vec<Style>,
    pub variables: Vec<Variable>,
    pub variable_collections: Vec<VariableCollection>,
}

impl SceneSnapshot {
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn from_path(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let snapshot = Self::from_json(&content)?;
        debug!(
            "Loaded snapshot {} ({} pages) from {}",
            snapshot.name,
            snapshot.pages.len(),
            path.display()
        );
        Ok(snapshot)
    }

    /// Build the arena and resolve current page and selection IDs
    pub fn load(self) -> Result<LoadedScene> {
        if self.pages.is_empty() {
            return Err(SceneError::NoPages);
        }

        let mut scene = Scene::new(self.id, self.name);
        let root = scene.root();
        for page in self.pages {
            let page_idx = scene.insert(root, SceneNode::new(page.id, page.name, NodeKind::Page))?;
            for child in page.children {
                insert_raw(&mut scene, page_idx, child)?;
            }
        }

        let current_page = match self.current_page_id {
            Some(id) => scene
                .find(&id)
                .filter(|idx| scene.pages().contains(idx))
                .ok_or(SceneError::UnknownPage(id))?,
            None => scene.pages()[0],
        };

        let selection = self
            .selection
            .into_iter()
            .map(|id| scene.find(&id).ok_or(SceneError::UnknownSelection(id)))
            .collect::<Result<Vec<_>>>()?;

        Ok(LoadedScene {
            scene,
            current_page,
            selection,
            styles: self.styles,
            variables: self.variables,
            variable_collections: self.variable_collections,
        })
    }
}

fn insert_raw(scene: &mut Scene, parent: NodeIdx, raw: RawNode) -> Result<NodeIdx> {
    let mut node = SceneNode::new(raw.id, raw.name, raw.kind);
    node.visible = raw.visible;
    node.locked = raw.locked;
    node.fills = raw.fills;
    node.strokes = raw.strokes;
    node.bound_variables = raw.bound_variables;
    node.styles = StyleSlots {
        fill: raw.fill_style_id.as_deref().and_then(StyleRef::from_raw),
        stroke: raw.stroke_style_id.as_deref().and_then(StyleRef::from_raw),
        text: raw.text_style_id.as_deref().and_then(StyleRef::from_raw),
        effect: raw.effect_style_id.as_deref().and_then(StyleRef::from_raw),
        grid: raw.grid_style_id.as_deref().and_then(StyleRef::from_raw),
    };

    let idx = scene.insert(parent, node)?;
    for child in raw.children {
        insert_raw(scene, idx, child)?;
    }
    Ok(idx)
}
