// Layer Audit tools - one typed request per host action

pub mod find;
pub mod select;
pub mod shared;

pub use find::{FindLayerNamesTool, FindVariablesAndStylesTool};
pub use select::{NodeCache, SelectNodeTool};
pub use shared::{AuditResponse, NodeSelection};

use serde::{Deserialize, Serialize};

/// Every request the host UI can send, tagged by `type`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "kebab-case")]
pub enum AuditRequest {
    FindVariablesAndStyles(FindVariablesAndStylesTool),
    FindLayerNames(FindLayerNamesTool),
    SelectNode(SelectNodeTool),
}
