// Descriptor types shared by the style and variable extractors
//
// Descriptors are derived per search and never cached. They serialize to the
// plain camelCase shape the host UI consumes.

use crate::scene::StyleType;
use serde::{Deserialize, Serialize};

/// Which node slot a style was found in
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BoundProperty {
    Fill,
    Stroke,
    Text,
    Effect,
    Grid,
}

impl BoundProperty {
    /// Style type implied by the slot
    pub fn style_type(&self) -> StyleType {
        match self {
            BoundProperty::Fill | BoundProperty::Stroke => StyleType::Paint,
            BoundProperty::Text => StyleType::Text,
            BoundProperty::Effect => StyleType::Effect,
            BoundProperty::Grid => StyleType::Grid,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StyleDescriptor {
    pub name: String,
    pub style_type: StyleType,
    pub property: BoundProperty,
    pub is_remote: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VariableDescriptor {
    /// `collection/variable`, or the bare variable name without a collection
    pub name: String,
    pub resolved_type: String,
    pub is_remote: bool,
    /// Scalar property the variable is bound to; unset for paint bindings
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bound_to: Option<String>,
}

/// Tag distinguishing the two kinds of found items
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ItemKind {
    Variable,
    Style,
}

/// A style or variable found on a node
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "SCREAMING_SNAKE_CASE")]
pub enum FoundItem {
    Variable(VariableDescriptor),
    Style(StyleDescriptor),
}

impl FoundItem {
    pub fn name(&self) -> &str {
        match self {
            FoundItem::Variable(v) => &v.name,
            FoundItem::Style(s) => &s.name,
        }
    }

    pub fn kind(&self) -> ItemKind {
        match self {
            FoundItem::Variable(_) => ItemKind::Variable,
            FoundItem::Style(_) => ItemKind::Style,
        }
    }

    pub fn is_remote(&self) -> bool {
        match self {
            FoundItem::Variable(v) => v.is_remote,
            FoundItem::Style(s) => s.is_remote,
        }
    }
}

impl From<StyleDescriptor> for FoundItem {
    fn from(style: StyleDescriptor) -> Self {
        FoundItem::Style(style)
    }
}

impl From<VariableDescriptor> for FoundItem {
    fn from(variable: VariableDescriptor) -> Self {
        FoundItem::Variable(variable)
    }
}

/// Everything an extractor saw on one node, plus whether any of it matched
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Extraction<T> {
    pub items: Vec<T>,
    pub matched: bool,
}

impl<T> Default for Extraction<T> {
    fn default() -> Self {
        Self {
            items: Vec::new(),
            matched: false,
        }
    }
}
