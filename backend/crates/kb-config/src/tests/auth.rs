use crate::Config;
use crate::tests::{EnvGuard, setup_config_dir};

use googletest::assert_that;
use googletest::prelude::{anything, contains_substring, eq, err, ok};
use serial_test::serial;
use uuid::Uuid;

// =========================================================================
// Validation Tests - Auth
// =========================================================================

#[test]
#[serial]
fn given_auth_enabled_but_no_jwt_secret_when_validate_then_error() {
    // Given
    let (_temp, _guard) = setup_config_dir();
    let _enabled = EnvGuard::set("KB_AUTH_ENABLED", "true");
    let _secret = EnvGuard::remove("KB_AUTH_JWT_SECRET");

    // When
    let config = Config::load().unwrap();
    let result = config.validate();

    // Then
    assert_that!(result, err(anything()));
    let err_msg = format!("{}", result.unwrap_err());
    assert_that!(err_msg, contains_substring("jwt_secret"));
}

#[test]
#[serial]
fn given_jwt_secret_too_short_when_validate_then_error_mentions_32_chars() {
    // Given
    let (_temp, _guard) = setup_config_dir();
    let _enabled = EnvGuard::set("KB_AUTH_ENABLED", "true");
    let _secret = EnvGuard::set("KB_AUTH_JWT_SECRET", "tooshort");

    // When
    let config = Config::load().unwrap();
    let result = config.validate();

    // Then
    assert_that!(result, err(anything()));
    let err_msg = format!("{}", result.unwrap_err());
    assert_that!(err_msg, contains_substring("32 characters"));
}

#[test]
#[serial]
fn given_jwt_secret_exactly_32_chars_when_validate_then_ok() {
    // Given
    let (_temp, _guard) = setup_config_dir();
    let _enabled = EnvGuard::set("KB_AUTH_ENABLED", "true");
    let _secret = EnvGuard::set("KB_AUTH_JWT_SECRET", "12345678901234567890123456789012");

    // When
    let config = Config::load().unwrap();
    let result = config.validate();

    // Then
    assert_that!(result, ok(anything()));
}

#[test]
#[serial]
fn given_auth_disabled_without_secret_when_validate_then_ok() {
    // Given
    let (_temp, _guard) = setup_config_dir();
    let _enabled = EnvGuard::set("KB_AUTH_ENABLED", "false");

    // When
    let result = Config::load().unwrap().validate();

    // Then
    assert_that!(result, ok(anything()));
}

#[test]
#[serial]
fn given_malformed_default_user_id_when_validate_then_error() {
    // Given
    let (_temp, _guard) = setup_config_dir();
    let _user = EnvGuard::set("KB_AUTH_DEFAULT_USER_ID", "not-a-uuid");

    // When
    let result = Config::load().unwrap().validate();

    // Then
    assert_that!(result, err(anything()));
    let err_msg = format!("{}", result.unwrap_err());
    assert_that!(err_msg, contains_substring("default_user_id"));
}

#[test]
#[serial]
fn given_default_user_override_when_load_then_uuid_parses() {
    // Given
    let (_temp, _guard) = setup_config_dir();
    let id = Uuid::new_v4();
    let _user = EnvGuard::set("KB_AUTH_DEFAULT_USER_ID", &id.to_string());
    let _name = EnvGuard::set("KB_AUTH_DEFAULT_USERNAME", "alice");

    // When
    let config = Config::load().unwrap();

    // Then
    assert_that!(config.auth.default_user_uuid().unwrap(), eq(id));
    assert_that!(config.auth.default_username.as_str(), eq("alice"));
}

#[test]
#[serial]
fn given_blank_default_username_when_validate_then_error() {
    // Given
    let (_temp, _guard) = setup_config_dir();
    let _name = EnvGuard::set("KB_AUTH_DEFAULT_USERNAME", "   ");

    // When
    let result = Config::load().unwrap().validate();

    // Then
    assert_that!(result, err(anything()));
}

#[test]
#[serial]
fn given_leeway_env_override_when_load_then_applied() {
    let (_temp, _guard) = setup_config_dir();
    let _leeway = EnvGuard::set("KB_AUTH_JWT_LEEWAY_SECS", "5");

    let config = Config::load().unwrap();

    assert_that!(config.auth.jwt_leeway_secs, eq(5));
    assert_that!(config.validate(), ok(anything()));
}

#[test]
#[serial]
fn given_excessive_leeway_when_validate_then_error_names_key() {
    let (_temp, _guard) = setup_config_dir();
    let _leeway = EnvGuard::set("KB_AUTH_JWT_LEEWAY_SECS", "3600");

    let config = Config::load().unwrap();
    let err = config.validate().unwrap_err();

    assert_that!(err.key(), eq(Some("auth.jwt_leeway_secs")));
}
