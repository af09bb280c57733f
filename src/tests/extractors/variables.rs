// Tests for variable extraction from paints and scalar bindings

use crate::extractors::extract_variables;
use crate::matching::QueryTerms;
use crate::scene::{BoundValue, NodeKind, SceneNode, VariableAlias};
use crate::source::{SafeAccessor, SceneDataSource};
use crate::tests::helpers::{Failures, ScriptedSource, design_system, node_idx};

fn node<'a>(source: &'a dyn SceneDataSource, id: &str) -> &'a SceneNode {
    source.scene().node(node_idx(source, id)).unwrap()
}

fn alias(id: &str) -> BoundValue {
    BoundValue::Alias(VariableAlias { id: id.to_string() })
}

#[tokio::test]
async fn test_fill_variable_is_qualified_by_collection() {
    let source = design_system();
    let accessor = SafeAccessor::new(&source);

    let extraction =
        extract_variables(node(&source, "1:2"), &accessor, &QueryTerms::new("primary")).await;

    assert!(extraction.matched);
    assert_eq!(extraction.items.len(), 1);
    let variable = &extraction.items[0];
    assert_eq!(variable.name, "Brand/primary");
    assert_eq!(variable.resolved_type, "COLOR");
    assert!(variable.is_remote, "remote flag comes from the collection");
    assert_eq!(variable.bound_to, None);
}

#[tokio::test]
async fn test_strokes_then_scalar_bindings() {
    let source = design_system();
    let accessor = SafeAccessor::new(&source);

    let extraction =
        extract_variables(node(&source, "1:3"), &accessor, &QueryTerms::new("spacing")).await;

    let names: Vec<&str> = extraction.items.iter().map(|v| v.name.as_str()).collect();
    assert_eq!(names, vec!["Core/border/subtle", "spacing/md"]);
    assert!(extraction.matched);

    // Collection C:missing does not resolve: bare name, local
    let spacing = &extraction.items[1];
    assert_eq!(spacing.bound_to.as_deref(), Some("width"));
    assert!(!spacing.is_remote);
}

#[tokio::test]
async fn test_stale_variable_is_skipped() {
    let source = design_system();
    let accessor = SafeAccessor::new(&source);

    let extraction =
        extract_variables(node(&source, "1:9"), &accessor, &QueryTerms::new("opacity")).await;
    assert!(extraction.items.is_empty());
    assert!(!extraction.matched);
}

#[tokio::test]
async fn test_scalar_properties_scan_in_fixed_order() {
    let source = design_system();
    let accessor = SafeAccessor::new(&source);

    let mut rect = SceneNode::new("x:1", "Box", NodeKind::Rectangle);
    rect.bound_variables.insert("opacity".to_string(), alias("V:primary"));
    rect.bound_variables.insert("height".to_string(), alias("V:space"));
    rect.bound_variables.insert("unrelatedProp".to_string(), alias("V:border"));

    let extraction = extract_variables(&rect, &accessor, &QueryTerms::new("zzz")).await;

    let bound: Vec<Option<&str>> = extraction.items.iter().map(|v| v.bound_to.as_deref()).collect();
    assert_eq!(bound, vec![Some("height"), Some("opacity")]);
    assert!(!extraction.matched);
}

#[tokio::test]
async fn test_nodes_without_fill_slot_ignore_paint_bindings() {
    let source = design_system();
    let accessor = SafeAccessor::new(&source);

    let mut slice = SceneNode::new("x:2", "Slice", NodeKind::Slice);
    slice.fills = vec![
        serde_json::from_str(
            r#"{"type":"SOLID","boundVariables":{"color":{"type":"VARIABLE_ALIAS","id":"V:primary"}}}"#,
        )
        .unwrap(),
    ];

    let extraction = extract_variables(&slice, &accessor, &QueryTerms::new("primary")).await;
    assert!(extraction.items.is_empty());
}

#[tokio::test]
async fn test_async_failure_still_resolves_through_sync() {
    let source = ScriptedSource::new(Failures {
        async_lookups: true,
        ..Failures::default()
    });
    let accessor = SafeAccessor::new(&source);

    let extraction =
        extract_variables(node(&source, "1:2"), &accessor, &QueryTerms::new("brand")).await;

    assert!(extraction.matched);
    assert_eq!(extraction.items[0].name, "Brand/primary");
    assert!(source.sync_count() >= 2, "variable and collection both fell back");
}

#[tokio::test]
async fn test_total_lookup_failure_is_silent() {
    let source = ScriptedSource::new(Failures {
        async_lookups: true,
        sync_lookups: true,
        styles: false,
        ..Failures::default()
    });
    let accessor = SafeAccessor::new(&source);

    let extraction =
        extract_variables(node(&source, "1:3"), &accessor, &QueryTerms::new("spacing")).await;
    assert!(extraction.items.is_empty());
    assert!(!extraction.matched);
}
