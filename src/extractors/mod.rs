// Layer Audit binding extractors
//
// Extractors read one node at a time and report every style or variable bound
// to it, together with whether any of those names matched the query. They never
// fail: unresolvable bindings simply contribute nothing.

pub mod base;
pub mod styles;
pub mod variables;

pub use base::{
    BoundProperty, Extraction, FoundItem, ItemKind, StyleDescriptor, VariableDescriptor,
};
pub use styles::extract_styles;
pub use variables::{SCALAR_BINDING_PROPERTIES, extract_variables};
