//! Tests for configuration system

use smaakbalans::Config;

#[test]
fn test_config_loads_from_default_toml() {
    // Test that default config can be loaded
    let config = Config::load(None).expect("Failed to load config");

    // Verify default values
    assert_eq!(config.server.host, "0.0.0.0");
    assert_eq!(config.server.port, 8080);
    assert_eq!(config.observability.log_level, "info");
    assert_eq!(config.catalog.path, None);
}

#[test]
fn test_config_has_all_required_fields() {
    let config = Config::load(None).expect("Failed to load config");

    // Verify all sections exist and have required fields
    assert!(!config.server.host.is_empty());
    assert!(config.server.port > 0);
    assert!(!config.observability.log_level.is_empty());
}

#[test]
fn test_config_passes_validation() {
    let config = Config::load(None).expect("Failed to load config");

    assert!(config.validate().is_ok());
}

#[test]
fn test_config_loads_explicit_file() {
    let path = std::env::temp_dir().join(format!(
        "smaakbalans-config-test-{}.toml",
        std::process::id()
    ));
    std::fs::write(
        &path,
        "[server]\nhost = \"10.0.0.1\"\nport = 9999\n\n[observability]\nlog_level = \"debug\"\n",
    )
    .expect("Failed to write temp config");

    let config = Config::load(Some(path.to_string_lossy().into_owned()))
        .expect("Failed to load explicit config");

    assert_eq!(config.server.host, "10.0.0.1");
    assert_eq!(config.server.port, 9999);
    assert_eq!(config.observability.log_level, "debug");

    let _ = std::fs::remove_file(&path);
}
