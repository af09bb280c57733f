// Tests for AuditConfig loading and normalization

use crate::config::AuditConfig;
use std::io::Write;

#[test]
fn test_default_config_has_eight_layer_roles() {
    let config = AuditConfig::default();

    assert_eq!(config.layer_names.allowed.len(), 8);
    assert!(config.layer_names.is_allowed("heading-text"));
    assert!(config.layer_names.is_allowed("overline-text"));
    assert!(!config.layer_names.is_allowed("random-name"));
    assert_eq!(config.selection.node_cache_capacity, 512);
}

#[test]
fn test_default_config_excludes_component_kinds() {
    let config = AuditConfig::default();

    for tag in ["COMPONENT", "INSTANCE", "COMPONENT_SET"] {
        assert!(config.layer_names.is_excluded_type(tag), "{} should be excluded", tag);
    }
    assert!(!config.layer_names.is_excluded_type("TEXT"));
    assert!(!config.layer_names.is_excluded_type("FRAME"));
}

#[test]
fn test_partial_toml_keeps_other_sections() {
    let config = AuditConfig::from_toml("[selection]\nnode_cache_capacity = 8\n").unwrap();

    assert_eq!(config.selection.node_cache_capacity, 8);
    assert_eq!(config.layer_names, AuditConfig::default().layer_names);
}

#[test]
fn test_partial_section_keeps_other_fields() {
    let config = AuditConfig::from_toml("[layer_names]\nallowed = [\"hero-text\"]\n").unwrap();

    assert_eq!(config.layer_names.allowed, vec!["hero-text".to_string()]);
    assert!(config.layer_names.is_excluded_type("INSTANCE"));
}

#[test]
fn test_allow_list_and_types_are_normalized() {
    let config = AuditConfig::from_toml(
        r#"
[layer_names]
allowed = [" Hero-Text ", "", "LABEL-TEXT"]
excluded_types = ["component", " instance "]
"#,
    )
    .unwrap();

    assert_eq!(
        config.layer_names.allowed,
        vec!["hero-text".to_string(), "label-text".to_string()]
    );
    assert_eq!(
        config.layer_names.excluded_types,
        vec!["COMPONENT".to_string(), "INSTANCE".to_string()]
    );
}

#[test]
fn test_invalid_toml_is_an_error() {
    assert!(AuditConfig::from_toml("[layer_names\nallowed = 3").is_err());
    assert!(AuditConfig::from_toml("[selection]\nnode_cache_capacity = \"many\"").is_err());
}

#[test]
fn test_load_missing_file_falls_back_to_defaults() {
    let dir = tempfile::tempdir().unwrap();
    let config = AuditConfig::load(&dir.path().join("absent.toml")).unwrap();

    assert_eq!(config, AuditConfig::default());
}

#[test]
fn test_load_reads_file_from_disk() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "[selection]\nnode_cache_capacity = 2").unwrap();

    let config = AuditConfig::load(file.path()).unwrap();
    assert_eq!(config.selection.node_cache_capacity, 2);
    assert_eq!(config.layer_names.allowed.len(), 8);
}
