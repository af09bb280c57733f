// Layer Audit - Design-Asset Auditing Library
//!
//! Layer Audit finds the layers of a design document that use a given variable
//! or style, or that carry one of a fixed set of layer-role names. Searches
//! start from the current selection and widen to the page when the selection
//! has nothing relevant.

pub mod config;
pub mod extractors;
pub mod handler;
pub mod matching;
pub mod report;
pub mod scene;
pub mod search;
pub mod source;
pub mod tools;


// Re-export common types
pub use config::AuditConfig;
pub use extractors::{FoundItem, StyleDescriptor, VariableDescriptor};
pub use handler::AuditHandler;
pub use scene::{Scene, SceneNode, SceneSnapshot};
pub use search::{SearchEngine, SearchError, SearchMode, SearchOutcome};
pub use source::{InMemorySource, SceneDataSource};
pub use tools::{AuditRequest, AuditResponse};
