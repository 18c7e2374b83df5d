//! Tests for config loading

use std::io::Write;

use tempfile::NamedTempFile;

use super::*;

fn write_config(content: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(content.as_bytes()).unwrap();
    file
}

#[test]
fn test_read_config_from_file() {
    let file = write_config(
        r#"
[page]
title = "Scene"

[panel]
max_visible = 4
"#,
    );

    let config = read_config(file.path()).unwrap();

    assert_eq!(config.page.title, "Scene");
    assert_eq!(config.page.field_width, 22);
    assert_eq!(config.panel.max_visible, 4);
    assert_eq!(config.fields.len(), 4);
}

#[test]
fn test_load_explicit_missing_path_errors() {
    let dir = tempfile::tempdir().unwrap();
    let missing = dir.path().join("nope.toml");

    let err = load_config(Some(&missing)).unwrap_err();

    assert_eq!(err, PromptbarError::ConfigNotFound(missing));
}

#[test]
fn test_load_explicit_path() {
    let file = write_config("[[fields]]\nlabel = \"Lens\"\noptions = [\"Wide\"]\n");

    let config = load_config(Some(file.path())).unwrap();

    assert_eq!(config.fields, vec![FieldConfig::suggest("Lens", &["Wide"])]);
}

#[test]
fn test_invalid_toml_reports_path() {
    let file = write_config("[panel\nmax_visible = 3");

    let err = read_config(file.path()).unwrap_err();

    match err {
        PromptbarError::InvalidConfig { path, .. } => assert_eq!(path, file.path()),
        other => panic!("unexpected error: {other:?}"),
    }
}

#[test]
fn test_wrong_type_is_invalid_config() {
    let file = write_config("[panel]\nmax_visible = \"six\"\n");

    let err = read_config(file.path()).unwrap_err();

    assert!(matches!(err, PromptbarError::InvalidConfig { .. }));
    assert!(err.to_string().contains("Invalid config file"));
}

#[test]
fn test_to_toml_lists_fields() {
    let text = to_toml(&Config::default()).unwrap();
    assert!(text.contains("[[fields]]"));
    assert!(text.contains("kind = \"dropdown\""));
    assert!(text.contains("max_visible = 6"));
}

#[test]
fn test_default_config_path_ends_with_app_dir() {
    if let Some(path) = default_config_path() {
        assert!(path.ends_with("promptbar/config.toml"));
    }
}
