// Tests for the variable matcher

use crate::matching::{QueryTerms, variable_matches};

fn variable(qualified: &str, bare: &str, query: &str) -> bool {
    variable_matches(qualified, bare, &QueryTerms::new(query))
}

#[test]
fn test_qualified_name_contains_query() {
    assert!(variable("Brand/primary", "primary", "brand/prim"));
    assert!(variable("Brand/primary", "primary", "PRIMARY"));
}

#[test]
fn test_query_base_against_variable() {
    // Collection in the query differs, base segment still hits
    assert!(variable("Brand/primary", "primary", "theme/primary"));
}

#[test]
fn test_query_contains_variable_base() {
    assert!(variable("Core/border/subtle", "border/subtle", "subtle-line"));
}

#[test]
fn test_one_character_truncation_tolerance() {
    // "blues" → "blue" is inside "bluez"
    assert!(variable("Brand/bluez", "bluez", "blues"));
    // "subtle" → "subtl" is inside "subtlx"
    assert!(variable("Core/subtle", "subtle", "subtlx"));
}

#[test]
fn test_no_tolerance_for_short_bases() {
    assert!(!variable("Core/abd", "abd", "abc"));
}

#[test]
fn test_unrelated_variables_do_not_match() {
    assert!(!variable("Brand/primary", "primary", "warning"));
    assert!(!variable("spacing/md", "spacing/md", "zzz"));
}

#[test]
fn test_variable_matcher_is_stricter_than_style_matcher() {
    // Word overlap would match a style, but not a variable
    assert!(crate::matching::matches("color-primary_dark", "dark mode"));
    assert!(!variable("Theme/color-primary_dark", "color-primary_dark", "dark mode"));
}

#[test]
fn test_empty_inputs_never_match() {
    assert!(!variable("Brand/primary", "primary", ""));
    assert!(!variable("", "", "primary"));
}
