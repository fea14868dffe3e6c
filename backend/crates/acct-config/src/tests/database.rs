use crate::Config;
use crate::tests::{EnvGuard, setup_config_dir};

use googletest::assert_that;
use googletest::prelude::{anything, err, ok};
use serial_test::serial;

// =========================================================================
// Validation Tests - Database
// =========================================================================

#[test]
#[serial]
fn given_absolute_database_path_when_validate_then_error() {
    // Given
    let _temp = setup_config_dir();
    let _path = EnvGuard::set("ACCT_DATABASE_PATH", "/etc/accounts.db");

    // When
    let config = Config::load().unwrap();
    let result = config.validate();

    // Then
    assert_that!(result, err(anything()));
}

#[test]
#[serial]
fn given_database_path_with_parent_dir_when_validate_then_error() {
    // Given
    let _temp = setup_config_dir();
    let _path = EnvGuard::set("ACCT_DATABASE_PATH", "../escape.db");

    // When
    let config = Config::load().unwrap();
    let result = config.validate();

    // Then
    assert_that!(result, err(anything()));
}

#[test]
#[serial]
fn given_empty_database_path_when_validate_then_error() {
    // Given
    let _temp = setup_config_dir();
    let _path = EnvGuard::set("ACCT_DATABASE_PATH", "");

    // When
    let config = Config::load().unwrap();
    let result = config.validate();

    // Then
    assert_that!(result, err(anything()));
}

#[test]
#[serial]
fn given_nested_relative_database_path_when_validate_then_ok() {
    // Given
    let _temp = setup_config_dir();
    let _path = EnvGuard::set("ACCT_DATABASE_PATH", "data/accounts.db");

    // When
    let config = Config::load().unwrap();
    let result = config.validate();

    // Then
    assert_that!(result, ok(anything()));
}

#[test]
#[serial]
fn given_max_connections_zero_when_validate_then_error() {
    // Given
    let _temp = setup_config_dir();
    let _max = EnvGuard::set("ACCT_DATABASE_MAX_CONNECTIONS", "0");

    // When
    let config = Config::load().unwrap();
    let result = config.validate();

    // Then
    assert_that!(result, err(anything()));
}

#[test]
#[serial]
fn given_max_connections_over_limit_when_validate_then_error() {
    // Given
    let _temp = setup_config_dir();
    let _max = EnvGuard::set("ACCT_DATABASE_MAX_CONNECTIONS", "101");

    // When
    let config = Config::load().unwrap();
    let result = config.validate();

    // Then
    assert_that!(result, err(anything()));
}

#[test]
#[serial]
fn given_max_connections_at_bounds_when_validate_then_ok() {
    for value in ["1", "100"] {
        // Given
        let _temp = setup_config_dir();
        let _max = EnvGuard::set("ACCT_DATABASE_MAX_CONNECTIONS", value);

        // When
        let config = Config::load().unwrap();
        let result = config.validate();

        // Then
        assert_that!(result, ok(anything()));
    }
}
