//! Configuration loading and precedence tests

use cinder_config::loader::{ENV_DIAGNOSTICS, ENV_EMIT, ENV_EMIT_LEGACY};
use cinder_config::{apply_overrides, CinderConfig, ConfigError, ConfigLoader, DriverConfig};
use pretty_assertions::assert_eq;
use rstest::rstest;
use serial_test::serial;
use std::collections::HashMap;
use std::env;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

fn create_config_file(dir: &Path, content: &str) -> PathBuf {
    let config_path = dir.join("cinder.toml");
    fs::write(&config_path, content).unwrap();
    config_path
}

fn vars(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
    let map: HashMap<String, String> = pairs
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect();
    move |key| map.get(key).cloned()
}

// ============================================================================
// File Loading
// ============================================================================

#[test]
fn test_load_when_no_config_exists() {
    let temp_dir = TempDir::new().unwrap();
    let config = ConfigLoader::without_env()
        .load_from_directory(temp_dir.path())
        .unwrap();
    assert_eq!(config, CinderConfig::default());
}

#[test]
fn test_load_from_subdirectory_finds_parent() {
    let temp_dir = TempDir::new().unwrap();
    create_config_file(temp_dir.path(), "[emit]\ntarget = \"out\"\n");
    let nested = temp_dir.path().join("a").join("b");
    fs::create_dir_all(&nested).unwrap();

    let config = ConfigLoader::without_env()
        .load_from_directory(&nested)
        .unwrap();
    // Relative to the file, not to where the search started
    assert_eq!(config.emit.target, Some(temp_dir.path().join("out")));
}

#[test]
fn test_interpret_off_in_file_awaits_target() {
    let temp_dir = TempDir::new().unwrap();
    create_config_file(temp_dir.path(), "[emit]\ninterpret = false\n");

    let config = ConfigLoader::without_env()
        .load_from_directory(temp_dir.path())
        .unwrap();
    assert!(!config.emit.interpret);
    assert!(config.driver_config().validate().is_err());
}

#[test]
fn test_load_from_missing_file() {
    let temp_dir = TempDir::new().unwrap();
    let err = ConfigLoader::without_env()
        .load_from_file(&temp_dir.path().join("nope.toml"))
        .unwrap_err();
    assert!(matches!(err, ConfigError::NotFound(_)));
}

#[test]
fn test_invalid_toml_names_file() {
    let temp_dir = TempDir::new().unwrap();
    let path = create_config_file(temp_dir.path(), "[emit\n");
    let err = ConfigLoader::without_env().load_from_file(&path).unwrap_err();
    match err {
        ConfigError::TomlParseError { file, .. } => assert_eq!(file, path),
        other => panic!("unexpected error: {other}"),
    }
}

// ============================================================================
// Environment Overrides
// ============================================================================

#[rstest]
#[case::none(&[], None)]
#[case::modern(&[(ENV_EMIT, "prog")], Some("prog"))]
#[case::legacy(&[(ENV_EMIT_LEGACY, "legacy")], Some("legacy"))]
#[case::modern_wins(&[(ENV_EMIT, "prog"), (ENV_EMIT_LEGACY, "legacy")], Some("prog"))]
#[case::empty_is_unset(&[(ENV_EMIT, "")], None)]
fn test_emit_target_override(#[case] env: &[(&str, &str)], #[case] expected: Option<&str>) {
    let config = apply_overrides(CinderConfig::default(), vars(env)).unwrap();
    assert_eq!(config.emit.target, expected.map(PathBuf::from));
}

#[rstest]
#[case("json", true)]
#[case("JSON", true)]
#[case("human", false)]
fn test_diagnostics_override(#[case] value: &str, #[case] json: bool) {
    let config =
        apply_overrides(CinderConfig::default(), vars(&[(ENV_DIAGNOSTICS, value)])).unwrap();
    assert_eq!(config.diagnostics.json, json);
}

#[test]
fn test_env_target_completes_interpret_off_file() {
    let temp_dir = TempDir::new().unwrap();
    let path = create_config_file(temp_dir.path(), "[emit]\ninterpret = false\n");

    let file = CinderConfig::load_from_file(&path).unwrap();
    let config = apply_overrides(file, vars(&[(ENV_EMIT, "prog")])).unwrap();
    let driver_config = config.driver_config();
    assert_eq!(
        driver_config,
        DriverConfig {
            interpret: false,
            emit_target: Some(PathBuf::from("prog")),
        }
    );
    assert!(driver_config.validate().is_ok());
}

#[test]
fn test_diagnostics_override_rejects_unknown_mode() {
    let err =
        apply_overrides(CinderConfig::default(), vars(&[(ENV_DIAGNOSTICS, "xml")])).unwrap_err();
    assert!(matches!(err, ConfigError::InvalidValue { .. }));
}

#[test]
#[serial]
fn test_process_environment_overrides_file() {
    let temp_dir = TempDir::new().unwrap();
    create_config_file(temp_dir.path(), "[emit]\ntarget = \"from_file\"\n");

    env::set_var(ENV_EMIT, "from_env");
    let result = ConfigLoader::new().load_from_directory(temp_dir.path());
    env::remove_var(ENV_EMIT);

    let config = result.unwrap();
    assert_eq!(
        config.driver_config(),
        DriverConfig {
            interpret: true,
            emit_target: Some(PathBuf::from("from_env")),
        }
    );
}

#[test]
#[serial]
fn test_process_environment_supplies_missing_target() {
    let temp_dir = TempDir::new().unwrap();
    create_config_file(temp_dir.path(), "[emit]\ninterpret = false\n");

    env::set_var(ENV_EMIT, "from_env");
    let result = ConfigLoader::new().load_from_directory(temp_dir.path());
    env::remove_var(ENV_EMIT);

    let driver_config = result.unwrap().driver_config();
    assert_eq!(driver_config.emit_target, Some(PathBuf::from("from_env")));
    assert!(!driver_config.interpret);
    assert!(driver_config.validate().is_ok());
}

#[test]
#[serial]
fn test_legacy_variable_enables_emission() {
    let temp_dir = TempDir::new().unwrap();

    env::remove_var(ENV_EMIT);
    env::set_var(ENV_EMIT_LEGACY, "prog");
    let result = ConfigLoader::new().load_from_directory(temp_dir.path());
    env::remove_var(ENV_EMIT_LEGACY);

    assert_eq!(
        result.unwrap().emit.target,
        Some(PathBuf::from("prog"))
    );
}
