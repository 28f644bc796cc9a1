use crate::tests::{EnvGuard, setup_config_dir};
use crate::{ApiMode, Config, MIN_MESSAGES_POLL_SECS};

use googletest::assert_that;
use googletest::prelude::{anything, eq, ok};
use serial_test::serial;

// =========================================================================
// Happy Path Tests
// =========================================================================

#[test]
#[serial]
fn given_no_config_file_when_load_then_ok_with_defaults() {
    // Given
    let (_temp, _guard) = setup_config_dir();

    // When
    let result = Config::load();

    // Then
    assert_that!(result, ok(anything()));
    let config = result.unwrap();
    assert_that!(config.api.mode, eq(ApiMode::Production));
    assert_that!(config.polling.messages_secs, eq(MIN_MESSAGES_POLL_SECS));
    assert!(config.logging.file.is_none());
}

#[test]
#[serial]
fn given_no_config_file_when_load_and_validate_then_ok() {
    // Given
    let (_temp, _guard) = setup_config_dir();

    // When
    let config = Config::load().unwrap();
    let result = config.validate();

    // Then
    assert_that!(result, ok(anything()));
}

#[test]
#[serial]
fn given_missing_config_dir_when_load_then_dir_created() {
    // Given
    let temp = tempfile::TempDir::new().unwrap();
    let nested = temp.path().join("nested").join(".acad");
    let _guard = EnvGuard::set("ACAD_CONFIG_DIR", nested.to_str().unwrap());

    // When
    let result = Config::load();

    // Then
    assert_that!(result, ok(anything()));
    assert!(nested.is_dir());
}

#[test]
#[serial]
fn given_valid_toml_file_when_load_then_uses_toml_values() {
    // Given
    let (temp, _guard) = setup_config_dir();
    std::fs::write(
        temp.path().join("config.toml"),
        r#"
              [api]
              mode = "development"
              development_url = "http://127.0.0.1:9000/api/"

              [polling]
              conversations_secs = 10
          "#,
    )
    .unwrap();

    // When
    let config = Config::load().unwrap();

    // Then
    assert_that!(config.api.mode, eq(ApiMode::Development));
    assert_that!(config.api.base_url(), eq("http://127.0.0.1:9000/api"));
    assert_that!(config.polling.conversations_secs, eq(10));
    assert_that!(config.polling.messages_secs, eq(MIN_MESSAGES_POLL_SECS));
}

#[test]
#[serial]
fn given_env_var_and_toml_when_load_then_env_var_overrides_toml() {
    // Given
    let (temp, _guard) = setup_config_dir();
    std::fs::write(
        temp.path().join("config.toml"),
        "[api]\nmode = \"development\"",
    )
    .unwrap();
    let _mode = EnvGuard::set("ACAD_API_MODE", "prod");

    // When
    let config = Config::load().unwrap();

    // Then
    assert_that!(config.api.mode, eq(ApiMode::Production));
}

#[test]
#[serial]
fn given_multiple_env_overrides_when_load_then_all_apply() {
    // Given
    let (_temp, _guard) = setup_config_dir();
    let _url = EnvGuard::set("ACAD_API_PRODUCTION_URL", "https://office.example.org/api");
    let _level = EnvGuard::set("ACAD_LOG_LEVEL", "debug");
    let _colored = EnvGuard::set("ACAD_LOG_COLORED", "false");
    let _file = EnvGuard::set("ACAD_LOG_FILE", "acad.log");
    let _messages = EnvGuard::set("ACAD_POLL_MESSAGES_SECS", "7");

    // When
    let config = Config::load().unwrap();

    // Then
    assert_that!(config.api.base_url(), eq("https://office.example.org/api"));
    assert_that!(*config.logging.level, eq(log::LevelFilter::Debug));
    assert_that!(config.logging.colored, eq(false));
    assert_that!(config.logging.file.as_deref(), eq(Some("acad.log")));
    assert_that!(config.polling.messages_secs, eq(7));
}

#[test]
#[serial]
fn given_log_file_when_log_file_path_then_under_config_log_dir() {
    // Given
    let (temp, _guard) = setup_config_dir();
    let _file = EnvGuard::set("ACAD_LOG_FILE", "acad.log");

    // When
    let config = Config::load().unwrap();
    let path = config.log_file_path().unwrap();

    // Then
    assert_eq!(path, Some(temp.path().join("log").join("acad.log")));
}

#[test]
#[serial]
fn given_default_session_when_token_path_then_inside_config_dir() {
    // Given
    let (temp, _guard) = setup_config_dir();

    // When
    let config = Config::load().unwrap();

    // Then
    assert_eq!(
        config.token_path().unwrap(),
        temp.path().join("session.token")
    );
}
