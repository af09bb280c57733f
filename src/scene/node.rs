//! Node model for the layer hierarchy
//!
//! Nodes are a closed set of kinds, each statically declaring which optional
//! capability slots it exposes (children, paints, style slots, bound variables).
//! Extractors ask the kind before reading a slot instead of probing fields.

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;
use std::collections::BTreeMap;
use std::fmt;

/// Index of a node inside a [`Scene`](super::Scene) arena
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct NodeIdx(pub usize);

/// String the host uses in place of a style ID when a slot holds several styles
pub const MIXED_SENTINEL: &str = "<mixed>";

/// Node type tag
///
/// Known kinds get their own variant; anything else the host reports is kept
/// verbatim in `Other` so it round-trips into results unchanged.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum NodeKind {
    Document,
    Page,
    Frame,
    Group,
    Section,
    Component,
    ComponentSet,
    Instance,
    Text,
    Rectangle,
    Ellipse,
    Polygon,
    Star,
    Line,
    Vector,
    BooleanOperation,
    Slice,
    Other(String),
}

/// Optional slots a node kind exposes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Capabilities {
    pub children: bool,
    pub fills: bool,
    pub strokes: bool,
    pub text_style: bool,
    pub effect_style: bool,
    pub grid_style: bool,
    pub bound_variables: bool,
}

impl NodeKind {
    pub fn from_tag(tag: &str) -> Self {
        match tag {
            "DOCUMENT" => NodeKind::Document,
            "PAGE" => NodeKind::Page,
            "FRAME" => NodeKind::Frame,
            "GROUP" => NodeKind::Group,
            "SECTION" => NodeKind::Section,
            "COMPONENT" => NodeKind::Component,
            "COMPONENT_SET" => NodeKind::ComponentSet,
            "INSTANCE" => NodeKind::Instance,
            "TEXT" => NodeKind::Text,
            "RECTANGLE" => NodeKind::Rectangle,
            "ELLIPSE" => NodeKind::Ellipse,
            "POLYGON" => NodeKind::Polygon,
            "STAR" => NodeKind::Star,
            "LINE" => NodeKind::Line,
            "VECTOR" => NodeKind::Vector,
            "BOOLEAN_OPERATION" => NodeKind::BooleanOperation,
            "SLICE" => NodeKind::Slice,
            other => NodeKind::Other(other.to_string()),
        }
    }

    pub fn as_tag(&self) -> &str {
        match self {
            NodeKind::Document => "DOCUMENT",
            NodeKind::Page => "PAGE",
            NodeKind::Frame => "FRAME",
            NodeKind::Group => "GROUP",
            NodeKind::Section => "SECTION",
            NodeKind::Component => "COMPONENT",
            NodeKind::ComponentSet => "COMPONENT_SET",
            NodeKind::Instance => "INSTANCE",
            NodeKind::Text => "TEXT",
            NodeKind::Rectangle => "RECTANGLE",
            NodeKind::Ellipse => "ELLIPSE",
            NodeKind::Polygon => "POLYGON",
            NodeKind::Star => "STAR",
            NodeKind::Line => "LINE",
            NodeKind::Vector => "VECTOR",
            NodeKind::BooleanOperation => "BOOLEAN_OPERATION",
            NodeKind::Slice => "SLICE",
            NodeKind::Other(tag) => tag,
        }
    }

    pub fn is_text(&self) -> bool {
        matches!(self, NodeKind::Text)
    }

    /// Which optional slots this kind statically exposes
    pub fn capabilities(&self) -> Capabilities {
        match self {
            NodeKind::Document | NodeKind::Page => Capabilities {
                children: true,
                ..Capabilities::default()
            },
            NodeKind::Frame | NodeKind::Component | NodeKind::ComponentSet | NodeKind::Instance => {
                Capabilities {
                    children: true,
                    fills: true,
                    strokes: true,
                    text_style: false,
                    effect_style: true,
                    grid_style: true,
                    bound_variables: true,
                }
            }
            NodeKind::Section => Capabilities {
                children: true,
                fills: true,
                bound_variables: true,
                ..Capabilities::default()
            },
            NodeKind::Group => Capabilities {
                children: true,
                bound_variables: true,
                ..Capabilities::default()
            },
            NodeKind::BooleanOperation => Capabilities {
                children: true,
                fills: true,
                strokes: true,
                effect_style: true,
                bound_variables: true,
                ..Capabilities::default()
            },
            NodeKind::Text => Capabilities {
                children: false,
                fills: true,
                strokes: true,
                text_style: true,
                effect_style: true,
                grid_style: false,
                bound_variables: true,
            },
            NodeKind::Rectangle
            | NodeKind::Ellipse
            | NodeKind::Polygon
            | NodeKind::Star
            | NodeKind::Line
            | NodeKind::Vector => Capabilities {
                fills: true,
                strokes: true,
                effect_style: true,
                bound_variables: true,
                ..Capabilities::default()
            },
            NodeKind::Slice => Capabilities {
                bound_variables: true,
                ..Capabilities::default()
            },
            // Unknown host kinds: assume a plain shape-like node with a child list
            NodeKind::Other(_) => Capabilities {
                children: true,
                fills: true,
                strokes: true,
                effect_style: true,
                bound_variables: true,
                ..Capabilities::default()
            },
        }
    }
}

impl fmt::Display for NodeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_tag())
    }
}

impl Serialize for NodeKind {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_tag())
    }
}

impl<'de> Deserialize<'de> for NodeKind {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let tag = String::deserialize(deserializer)?;
        Ok(NodeKind::from_tag(&tag))
    }
}

/// Reference from a bound property to a variable
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VariableAlias {
    #[serde(default)]
    pub id: String,
}

/// Value of one entry in a `boundVariables` map
///
/// Hosts store a single alias for scalar properties and a list for
/// per-paint properties; anything else is kept but never resolved.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum BoundValue {
    Alias(VariableAlias),
    List(Vec<VariableAlias>),
    Unrecognized(Value),
}

impl BoundValue {
    /// Every non-empty variable ID carried by this binding, in order
    pub fn variable_ids(&self) -> Vec<&str> {
        match self {
            BoundValue::Alias(alias) if !alias.id.is_empty() => vec![alias.id.as_str()],
            BoundValue::List(aliases) => aliases
                .iter()
                .filter(|a| !a.id.is_empty())
                .map(|a| a.id.as_str())
                .collect(),
            _ => Vec::new(),
        }
    }

    /// The single alias ID of a scalar binding, if any
    pub fn scalar_id(&self) -> Option<&str> {
        match self {
            BoundValue::Alias(alias) if !alias.id.is_empty() => Some(alias.id.as_str()),
            _ => None,
        }
    }
}

/// One entry of a fill or stroke list
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Paint {
    #[serde(rename = "type", default = "default_paint_type")]
    pub paint_type: String,
    #[serde(default = "default_true")]
    pub visible: bool,
    #[serde(default, deserialize_with = "bindings_or_empty")]
    pub bound_variables: BTreeMap<String, BoundValue>,
}

fn default_paint_type() -> String {
    "SOLID".to_string()
}

fn default_true() -> bool {
    true
}

/// Paint list as the host reports it
///
/// Only a list counts: the mixed sentinel, `null` or any other value reads as
/// no paints. Entries that are not well-formed paint objects are dropped.
pub(crate) fn paints_or_empty<'de, D>(deserializer: D) -> Result<Vec<Paint>, D::Error>
where
    D: Deserializer<'de>,
{
    let Some(Value::Array(entries)) = Option::<Value>::deserialize(deserializer)? else {
        return Ok(Vec::new());
    };
    Ok(entries
        .into_iter()
        .filter(Value::is_object)
        .filter_map(|entry| serde_json::from_value(entry).ok())
        .collect())
}

/// `boundVariables` map; anything but an object reads as no bindings
pub(crate) fn bindings_or_empty<'de, D>(
    deserializer: D,
) -> Result<BTreeMap<String, BoundValue>, D::Error>
where
    D: Deserializer<'de>,
{
    let Some(Value::Object(entries)) = Option::<Value>::deserialize(deserializer)? else {
        return Ok(BTreeMap::new());
    };
    Ok(entries
        .into_iter()
        .filter_map(|(property, value)| {
            serde_json::from_value(value)
                .ok()
                .map(|binding| (property, binding))
        })
        .collect())
}

/// Style slot ID; a non-string marker from the host reads as mixed
pub(crate) fn style_id_or_mixed<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Option::<Value>::deserialize(deserializer)? {
        None | Some(Value::Null) => None,
        Some(Value::String(id)) => Some(id),
        Some(_) => Some(MIXED_SENTINEL.to_string()),
    })
}

/// Content of a style slot that is present on the node
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StyleRef {
    Id(String),
    Mixed,
}

impl StyleRef {
    pub fn from_raw(raw: &str) -> Option<Self> {
        match raw {
            "" => None,
            MIXED_SENTINEL => Some(StyleRef::Mixed),
            id => Some(StyleRef::Id(id.to_string())),
        }
    }

    pub fn id(&self) -> Option<&str> {
        match self {
            StyleRef::Id(id) => Some(id),
            StyleRef::Mixed => None,
        }
    }
}

/// The five style slots; `None` means the slot is empty or not exposed
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StyleSlots {
    pub fill: Option<StyleRef>,
    pub stroke: Option<StyleRef>,
    pub text: Option<StyleRef>,
    pub effect: Option<StyleRef>,
    pub grid: Option<StyleRef>,
}

/// A node in the scene arena
///
/// `parent` is a back-reference only; ownership lives in the arena.
#[derive(Debug, Clone)]
pub struct SceneNode {
    pub id: String,
    pub name: String,
    pub kind: NodeKind,
    pub visible: bool,
    pub locked: bool,
    pub parent: Option<NodeIdx>,
    pub children: Vec<NodeIdx>,
    pub fills: Vec<Paint>,
    pub strokes: Vec<Paint>,
    pub styles: StyleSlots,
    pub bound_variables: BTreeMap<String, BoundValue>,
}

impl SceneNode {
    pub fn new(id: impl Into<String>, name: impl Into<String>, kind: NodeKind) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            kind,
            visible: true,
            locked: false,
            parent: None,
            children: Vec::new(),
            fills: Vec::new(),
            strokes: Vec::new(),
            styles: StyleSlots::default(),
            bound_variables: BTreeMap::new(),
        }
    }

    pub fn capabilities(&self) -> Capabilities {
        self.kind.capabilities()
    }

    /// Fill paints, empty when the kind has no fill slot
    pub fn fills(&self) -> &[Paint] {
        if self.capabilities().fills { &self.fills } else { &[] }
    }

    /// Stroke paints, empty when the kind has no stroke slot
    pub fn strokes(&self) -> &[Paint] {
        if self.capabilities().strokes { &self.strokes } else { &[] }
    }

    /// Node-level binding for a scalar property
    pub fn bound_variable(&self, property: &str) -> Option<&BoundValue> {
        if !self.capabilities().bound_variables {
            return None;
        }
        self.bound_variables.get(property)
    }
}
