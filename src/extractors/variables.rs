//! Variable extractor
//!
//! Scans three binding surfaces independently: variables bound inside fill
//! paints, inside stroke paints, and on a fixed set of scalar node properties.
//! Each bound ID is resolved (with its collection) one after another; IDs that
//! no longer resolve are skipped silently.

use super::base::{Extraction, VariableDescriptor};
use crate::matching::{QueryTerms, variable_matches};
use crate::scene::{Paint, SceneNode};
use crate::source::SafeAccessor;
use tracing::trace;

/// Scalar node properties checked for a bound variable, in scan order
pub const SCALAR_BINDING_PROPERTIES: [&str; 9] = [
    "width",
    "height",
    "cornerRadius",
    "paddingLeft",
    "paddingRight",
    "paddingTop",
    "paddingBottom",
    "rotation",
    "opacity",
];

pub async fn extract_variables(
    node: &SceneNode,
    accessor: &SafeAccessor<'_>,
    query: &QueryTerms,
) -> Extraction<VariableDescriptor> {
    let mut extraction = Extraction::default();

    scan_paints(node.fills(), accessor, query, &mut extraction).await;
    scan_paints(node.strokes(), accessor, query, &mut extraction).await;

    for property in SCALAR_BINDING_PROPERTIES {
        let Some(variable_id) = node.bound_variable(property).and_then(|b| b.scalar_id()) else {
            continue;
        };
        resolve_into(variable_id, Some(property), accessor, query, &mut extraction).await;
    }

    extraction
}

async fn scan_paints(
    paints: &[Paint],
    accessor: &SafeAccessor<'_>,
    query: &QueryTerms,
    extraction: &mut Extraction<VariableDescriptor>,
) {
    for paint in paints {
        for binding in paint.bound_variables.values() {
            for variable_id in binding.variable_ids() {
                resolve_into(variable_id, None, accessor, query, extraction).await;
            }
        }
    }
}

async fn resolve_into(
    variable_id: &str,
    bound_to: Option<&str>,
    accessor: &SafeAccessor<'_>,
    query: &QueryTerms,
    extraction: &mut Extraction<VariableDescriptor>,
) {
    let Some(variable) = accessor.variable(variable_id).await else {
        trace!("Variable {} did not resolve, skipping binding", variable_id);
        return;
    };

    // Without a collection the bare name stands in and the item counts as local
    let (qualified_name, is_remote) =
        match accessor.variable_collection(&variable.variable_collection_id).await {
            Some(collection) => (
                format!("{}/{}", collection.name, variable.name),
                collection.remote,
            ),
            None => (variable.name.clone(), false),
        };

    if variable_matches(&qualified_name, &variable.name, query) {
        extraction.matched = true;
    }
    extraction.items.push(VariableDescriptor {
        name: qualified_name,
        resolved_type: variable.resolved_type,
        is_remote,
        bound_to: bound_to.map(str::to_string),
    });
}
