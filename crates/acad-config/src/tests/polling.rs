use crate::tests::{EnvGuard, setup_config_dir};
use crate::{Config, MIN_CONVERSATIONS_POLL_SECS, MIN_MESSAGES_POLL_SECS, PollingConfig};

use std::time::Duration;

use googletest::assert_that;
use googletest::prelude::{anything, contains_substring, err, ok};
use serial_test::serial;

#[test]
fn test_default_intervals_are_the_floors() {
    let config = PollingConfig::default();
    assert_eq!(config.conversations_interval(), Duration::from_secs(5));
    assert_eq!(config.messages_interval(), Duration::from_secs(3));
}

#[test]
fn test_intervals_never_go_below_floor() {
    let config = PollingConfig {
        conversations_secs: 1,
        messages_secs: 0,
    };
    assert_eq!(
        config.conversations_interval(),
        Duration::from_secs(MIN_CONVERSATIONS_POLL_SECS)
    );
    assert_eq!(
        config.messages_interval(),
        Duration::from_secs(MIN_MESSAGES_POLL_SECS)
    );
}

#[test]
#[serial]
fn given_messages_interval_below_floor_when_validate_then_error() {
    // Given
    let (_temp, _guard) = setup_config_dir();
    let _secs = EnvGuard::set("ACAD_POLL_MESSAGES_SECS", "1");

    // When
    let config = Config::load().unwrap();
    let result = config.validate();

    // Then
    assert_that!(result, err(anything()));
    let err_msg = result.unwrap_err().to_string();
    assert_that!(err_msg, contains_substring("polling.messages_secs"));
}

#[test]
#[serial]
fn given_slower_polling_when_validate_then_ok() {
    // Given
    let (_temp, _guard) = setup_config_dir();
    let _secs = EnvGuard::set("ACAD_POLL_CONVERSATIONS_SECS", "30");

    // When
    let config = Config::load().unwrap();
    let result = config.validate();

    // Then
    assert_that!(result, ok(anything()));
}

#[test]
#[serial]
fn given_interval_above_max_when_validate_then_error() {
    // Given
    let (_temp, _guard) = setup_config_dir();
    let _secs = EnvGuard::set("ACAD_POLL_CONVERSATIONS_SECS", "3600");

    // When
    let config = Config::load().unwrap();
    let result = config.validate();

    // Then
    assert_that!(result, err(anything()));
}
