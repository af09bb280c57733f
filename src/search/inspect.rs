//! Per-node check: styles first, then variables

use crate::extractors::{FoundItem, extract_styles, extract_variables};
use crate::matching::QueryTerms;
use crate::scene::SceneNode;
use crate::source::SafeAccessor;

/// What one node contributed to a search
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NodeCheck {
    /// At least one style or variable name matched the query
    pub found: bool,
    /// Every style and variable on the node, matching or not
    pub items: Vec<FoundItem>,
}

pub async fn inspect_node(
    node: &SceneNode,
    accessor: &SafeAccessor<'_>,
    query: &QueryTerms,
) -> NodeCheck {
    let styles = extract_styles(node, accessor, query);
    let variables = extract_variables(node, accessor, query).await;

    let mut items: Vec<FoundItem> = Vec::with_capacity(styles.items.len() + variables.items.len());
    items.extend(styles.items.into_iter().map(FoundItem::from));
    items.extend(variables.items.into_iter().map(FoundItem::from));

    NodeCheck {
        found: styles.matched || variables.matched,
        items,
    }
}
