// Tests for the six-strategy style matcher

use crate::matching::{QueryTerms, matches, style_matches};

fn style(name: &str, query: &str) -> bool {
    style_matches(name, &QueryTerms::new(query))
}

#[test]
fn test_query_terms_fold_and_split() {
    let terms = QueryTerms::new("  Brand/Blue/500 ");

    assert_eq!(terms.folded, "brand/blue/500");
    assert_eq!(terms.parts, vec!["brand", "blue", "500"]);
    assert_eq!(terms.base, "500");
    assert!(QueryTerms::new("   ").is_empty());
}

#[test]
fn test_exact_match_ignores_case() {
    assert!(style("Primary", "primary"));
    assert!(style("primary", "  PRIMARY  "));
}

#[test]
fn test_name_contains_query() {
    assert!(style("Warning/100", "warning"));
    assert!(matches("Typography/Heading Large", "heading"));
}

#[test]
fn test_query_contains_name() {
    assert!(style("warning/100", "semantic/warning/100"));
}

#[test]
fn test_base_segment_match() {
    // Only the base segments relate: "shadow-2" vs "shadow"
    assert!(style("Elevation/shadow-2", "effects/shadow"));
}

#[test]
fn test_long_query_segment_in_name() {
    assert!(style("Palette/Blue", "brand/blue/500"));
}

#[test]
fn test_short_query_segments_are_ignored() {
    // "ab" is too short to count as a segment hit and shares no word
    assert!(!style("Palette/Blue", "ab/zzz"));
}

#[test]
fn test_word_overlap() {
    assert!(style("color-primary_dark", "dark mode"));
}

#[test]
fn test_unrelated_names_do_not_match() {
    assert!(!style("Warning/100", "zzz"));
    assert!(!style("Typography/Heading", "warning"));
    assert!(!style("Elevation/Shadow 2", "primary"));
}

#[test]
fn test_empty_inputs_never_match() {
    assert!(!style("", "warning"));
    assert!(!style("Warning/100", ""));
    assert!(!style("Warning/100", "   "));
}

#[test]
fn test_empty_base_segment_does_not_match_everything() {
    // A trailing slash leaves an empty base; it must not be treated as a substring of every name
    assert!(!style("Spacing/Large", "foo/"));
}
