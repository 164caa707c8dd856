//! Tests for TOML config loading, creation, and path resolution.

use super::*;
use basin_common::ConfigError;
use std::path::Path;

#[test]
fn load_from_nonexistent_returns_file_not_found() {
    let result = load_from_path(Path::new("/tmp/nonexistent_basin_config.toml"));
    assert!(matches!(result, Err(ConfigError::FileNotFound(_))));
}

#[test]
fn load_valid_partial_toml() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.toml");
    std::fs::write(
        &path,
        r##"
[layout]
radius = 12.5

[water]
water_color = "#003355"
"##,
    )
    .unwrap();

    let config = load_from_path(&path).unwrap();
    assert!((config.layout.radius - 12.5).abs() < f32::EPSILON);
    assert_eq!(config.water.water_color, "#003355");
    // Defaults preserved
    assert_eq!(config.layout.count, 12);
    assert_eq!(config.rings.len(), 2);
}

#[test]
fn load_invalid_toml_returns_parse_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.toml");
    std::fs::write(&path, "this is not valid toml {{{").unwrap();

    let result = load_from_path(&path);
    assert!(matches!(result, Err(ConfigError::ParseError(_))));
}

#[test]
fn load_with_invalid_values_returns_parsed_config() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.toml");
    std::fs::write(&path, "[layout]\nradius = -4.0\n").unwrap();

    let config = load_from_path(&path).unwrap();
    assert!((config.layout.radius + 4.0).abs() < f32::EPSILON);
}

#[test]
fn create_and_load_default_config() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("basin").join("config.toml");

    create_default_config(&path).unwrap();
    assert!(path.exists());

    let config = load_from_path(&path).unwrap();
    assert_eq!(config.layout.count, 12);
    assert_eq!(config.fog.color, "#010305");
}

#[test]
fn load_or_create_writes_missing_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("nested").join("config.toml");
    assert!(!path.exists());

    let config = load_or_create(&path).unwrap();
    assert!(path.exists());
    assert_eq!(config.palette.colors.len(), 12);
}

#[test]
fn load_or_create_keeps_existing_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.toml");
    std::fs::write(&path, "[bloom]\nenabled = false\n").unwrap();

    let config = load_or_create(&path).unwrap();
    assert!(!config.bloom.enabled);
    let content = std::fs::read_to_string(&path).unwrap();
    assert_eq!(content, "[bloom]\nenabled = false\n");
}

#[test]
fn default_config_toml_is_valid() {
    use super::template::default_config_toml;
    use crate::schema::BasinConfig;

    let content = default_config_toml();
    let config: BasinConfig = toml::from_str(&content).unwrap();
    assert!(crate::validation::validate(&config).is_ok());
}

#[test]
fn default_config_path_is_reasonable() {
    if let Ok(path) = default_config_path() {
        let path_str = path.to_string_lossy();
        assert!(path_str.contains("basin"));
        assert!(path_str.ends_with("config.toml"));
    }
}
