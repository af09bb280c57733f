//! Host resources a node can reference by opaque ID: styles, variables and
//! the collections that own variables.

use serde::{Deserialize, Serialize};

/// Kind of a reusable style definition
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum StyleType {
    Paint,
    Text,
    Effect,
    Grid,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Style {
    pub id: String,
    pub name: String,
    #[serde(rename = "type")]
    pub style_type: StyleType,
    #[serde(default)]
    pub remote: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Variable {
    pub id: String,
    pub name: String,
    /// COLOR, FLOAT, STRING or BOOLEAN as reported by the host
    pub resolved_type: String,
    #[serde(default)]
    pub variable_collection_id: String,
    #[serde(default)]
    pub remote: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VariableCollection {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub remote: bool,
}
