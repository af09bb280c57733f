// Tests for ResultAggregator and (name, type) deduplication

use crate::extractors::{BoundProperty, FoundItem, StyleDescriptor, VariableDescriptor};
use crate::scene::StyleType;
use crate::search::{ResultAggregator, SearchResult, UniqueNames, push_unique_item};

fn style(name: &str, remote: bool) -> FoundItem {
    FoundItem::Style(StyleDescriptor {
        name: name.to_string(),
        style_type: StyleType::Paint,
        property: BoundProperty::Fill,
        is_remote: remote,
    })
}

fn variable(name: &str) -> FoundItem {
    FoundItem::Variable(VariableDescriptor {
        name: name.to_string(),
        resolved_type: "COLOR".to_string(),
        is_remote: false,
        bound_to: None,
    })
}

fn result(id: &str, items: Vec<FoundItem>) -> SearchResult {
    SearchResult {
        id: id.to_string(),
        name: id.to_string(),
        node_type: "FRAME".to_string(),
        path: format!("Page → {}", id),
        found_items: items,
        match_type: None,
    }
}

#[test]
fn test_first_occurrence_wins() {
    let mut items = Vec::new();

    assert!(push_unique_item(&mut items, &style("Brand/Primary", false)));
    assert!(!push_unique_item(&mut items, &style("Brand/Primary", true)));

    assert_eq!(items.len(), 1);
    assert!(!items[0].is_remote());
}

#[test]
fn test_same_name_different_kind_are_distinct() {
    let mut items = Vec::new();

    push_unique_item(&mut items, &style("primary", false));
    push_unique_item(&mut items, &variable("primary"));

    assert_eq!(items.len(), 2);
}

#[test]
fn test_unique_names_keep_insertion_order() {
    let mut names = UniqueNames::default();
    assert!(names.insert("b"));
    assert!(names.insert("a"));
    assert!(!names.insert("b"));

    assert_eq!(names.len(), 2);
    assert_eq!(names.into_vec(), vec!["b".to_string(), "a".to_string()]);
}

#[test]
fn test_counters_and_unique_lists() {
    let mut aggregator = ResultAggregator::default();

    // Node without items
    aggregator.record_checked();
    aggregator.record_items(&[]);

    // Node with items, not matching
    aggregator.record_checked();
    aggregator.record_items(&[style("Warning/100", false), variable("Core/space")]);

    // Matching node sharing a style with the previous one
    let items = vec![style("Warning/100", false), variable("Brand/primary")];
    aggregator.record_checked();
    aggregator.record_items(&items);
    aggregator.record_match(result("1:3", items));

    assert_eq!(aggregator.checked_nodes(), 3);
    assert_eq!(aggregator.nodes_with_items(), 2);
    assert_eq!(aggregator.matching_nodes(), 1);

    let pass = aggregator.finish();
    assert_eq!(pass.results.len(), 1);
    assert_eq!(pass.found_items.len(), 2);
    assert_eq!(pass.statistics.unique_styles, vec!["Warning/100".to_string()]);
    assert_eq!(
        pass.statistics.unique_variables,
        vec!["Core/space".to_string(), "Brand/primary".to_string()]
    );
    assert_eq!(pass.statistics.total_unique_items, 3);
}

#[test]
fn test_found_items_merge_across_matches() {
    let mut aggregator = ResultAggregator::default();

    aggregator.record_match(result("a", vec![style("X", false), variable("Y")]));
    aggregator.record_match(result("b", vec![variable("Y"), style("Z", true)]));

    let pass = aggregator.finish();
    let names: Vec<&str> = pass.found_items.iter().map(|i| i.name()).collect();
    assert_eq!(names, vec!["X", "Y", "Z"]);
    // Each result keeps its own complete list
    assert_eq!(pass.results[1].found_items.len(), 2);
}
