//! Layer Audit configuration
//!
//! Defaults are embedded from `config/default.toml`. A user file can override
//! any section; missing sections keep their defaults.

use anyhow::{Result, anyhow};
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::{debug, warn};

const DEFAULT_CONFIG: &str = include_str!("../config/default.toml");

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuditConfig {
    #[serde(default)]
    pub layer_names: LayerNameConfig,
    #[serde(default)]
    pub selection: SelectionConfig,
}

/// Rules for the strict layer-name search
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LayerNameConfig {
    pub allowed: Vec<String>,
    pub excluded_types: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SelectionConfig {
    pub node_cache_capacity: usize,
}

impl Default for LayerNameConfig {
    fn default() -> Self {
        Self {
            allowed: [
                "heading-text",
                "title-text",
                "subtitle-text",
                "body-text",
                "highlighted-text",
                "info-text",
                "caption-text",
                "overline-text",
            ]
            .iter()
            .map(|s| s.to_string())
            .collect(),
            excluded_types: ["COMPONENT", "INSTANCE", "COMPONENT_SET"]
                .iter()
                .map(|s| s.to_string())
                .collect(),
        }
    }
}

impl Default for SelectionConfig {
    fn default() -> Self {
        Self {
            node_cache_capacity: 512,
        }
    }
}

impl Default for AuditConfig {
    fn default() -> Self {
        match Self::from_toml(DEFAULT_CONFIG) {
            Ok(config) => config,
            Err(e) => {
                warn!("Embedded default config is invalid ({}), using built-in values", e);
                Self {
                    layer_names: LayerNameConfig::default(),
                    selection: SelectionConfig::default(),
                }
            }
        }
    }
}

impl AuditConfig {
    pub fn from_toml(content: &str) -> Result<Self> {
        let config: AuditConfig =
            toml::from_str(content).map_err(|e| anyhow!("Failed to parse config: {}", e))?;
        Ok(config.normalized())
    }

    /// Load a config file, falling back to defaults when it does not exist
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            warn!("Configuration file {} not found, using defaults", path.display());
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(path)
            .map_err(|e| anyhow!("Failed to read config file {}: {}", path.display(), e))?;
        let config = Self::from_toml(&content)?;

        debug!("Loaded configuration from: {}", path.display());
        Ok(config)
    }

    /// Fold allow-list entries and upper-case excluded type tags
    fn normalized(mut self) -> Self {
        self.layer_names.allowed = self
            .layer_names
            .allowed
            .iter()
            .map(|name| name.trim().to_lowercase())
            .filter(|name| !name.is_empty())
            .collect();
        self.layer_names.excluded_types = self
            .layer_names
            .excluded_types
            .iter()
            .map(|tag| tag.trim().to_uppercase())
            .collect();
        self
    }
}

impl LayerNameConfig {
    /// `query` must already be folded
    pub fn is_allowed(&self, query: &str) -> bool {
        self.allowed.iter().any(|name| name == query)
    }

    pub fn is_excluded_type(&self, tag: &str) -> bool {
        self.excluded_types.iter().any(|t| t == tag)
    }
}
