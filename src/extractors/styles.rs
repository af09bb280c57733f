//! Style extractor
//!
//! Walks the five style slots of a node (fill, stroke, text, effect, grid),
//! resolves each populated slot through the [`SafeAccessor`] and tests the
//! resolved style name with the style matcher.

use super::base::{BoundProperty, Extraction, StyleDescriptor};
use crate::matching::{QueryTerms, style_matches};
use crate::scene::{SceneNode, StyleRef};
use crate::source::SafeAccessor;
use tracing::trace;

pub fn extract_styles(
    node: &SceneNode,
    accessor: &SafeAccessor<'_>,
    query: &QueryTerms,
) -> Extraction<StyleDescriptor> {
    let caps = node.capabilities();
    let slots: [(bool, &Option<StyleRef>, BoundProperty); 5] = [
        (caps.fills, &node.styles.fill, BoundProperty::Fill),
        (caps.strokes, &node.styles.stroke, BoundProperty::Stroke),
        (
            caps.text_style && node.kind.is_text(),
            &node.styles.text,
            BoundProperty::Text,
        ),
        (caps.effect_style, &node.styles.effect, BoundProperty::Effect),
        (caps.grid_style, &node.styles.grid, BoundProperty::Grid),
    ];

    let mut extraction = Extraction::default();
    for (exposed, slot, property) in slots {
        if !exposed {
            continue;
        }
        // Empty and mixed slots contribute nothing
        let Some(style_id) = slot.as_ref().and_then(StyleRef::id) else {
            continue;
        };
        let Some(style) = accessor.style(style_id) else {
            trace!("{:?} style {} on {} did not resolve", property, style_id, node.id);
            continue;
        };

        if style_matches(&style.name, query) {
            extraction.matched = true;
        }
        extraction.items.push(StyleDescriptor {
            name: style.name,
            style_type: property.style_type(),
            property,
            is_remote: style.remote,
        });
    }

    extraction
}
