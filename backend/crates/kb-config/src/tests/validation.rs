use crate::Config;
use crate::tests::{EnvGuard, setup_config_dir};

use crate::validation_config::{
    MAX_COMMENT_LENGTH, MAX_NAME_LENGTH, MAX_TAG_NAME_LENGTH, MAX_TITLE_LENGTH, MIN_NAME_LENGTH,
    MIN_TITLE_LENGTH,
};
use googletest::assert_that;
use googletest::prelude::{anything, contains_substring, err, ok};
use serial_test::serial;

const BELOW_MIN_NAME: usize = MIN_NAME_LENGTH - 1;
const ABOVE_MAX_NAME: usize = MAX_NAME_LENGTH + 1;
const BELOW_MIN_TITLE: usize = MIN_TITLE_LENGTH - 1;
const ABOVE_MAX_TITLE: usize = MAX_TITLE_LENGTH + 1;
const ABOVE_MAX_TAG_NAME: usize = MAX_TAG_NAME_LENGTH + 1;
const ABOVE_MAX_COMMENT: usize = MAX_COMMENT_LENGTH + 1;

// =========================================================================
// Validation Tests - Validation Config
// =========================================================================

#[test]
#[serial]
fn given_max_name_length_zero_when_validate_then_error() {
    // Given
    let (_temp, _guard) = setup_config_dir();
    let _length = EnvGuard::set("KB_VALIDATION_MAX_NAME_LENGTH", &BELOW_MIN_NAME.to_string());

    // When
    let result = Config::load().unwrap().validate();

    // Then
    assert_that!(result, err(anything()));
    let err_msg = format!("{}", result.unwrap_err());
    assert_that!(err_msg, contains_substring("validation.max_name_length"));
}

#[test]
#[serial]
fn given_max_name_length_over_max_when_validate_then_error() {
    // Given
    let (_temp, _guard) = setup_config_dir();
    let _length = EnvGuard::set("KB_VALIDATION_MAX_NAME_LENGTH", &ABOVE_MAX_NAME.to_string());

    // When
    let result = Config::load().unwrap().validate();

    // Then
    assert_that!(result, err(anything()));
}

#[test]
#[serial]
fn given_max_title_length_zero_when_validate_then_error() {
    // Given
    let (_temp, _guard) = setup_config_dir();
    let _length = EnvGuard::set(
        "KB_VALIDATION_MAX_TITLE_LENGTH",
        &BELOW_MIN_TITLE.to_string(),
    );

    // When
    let result = Config::load().unwrap().validate();

    // Then
    assert_that!(result, err(anything()));
}

#[test]
#[serial]
fn given_max_title_length_over_max_when_validate_then_error() {
    // Given
    let (_temp, _guard) = setup_config_dir();
    let _length = EnvGuard::set(
        "KB_VALIDATION_MAX_TITLE_LENGTH",
        &ABOVE_MAX_TITLE.to_string(),
    );

    // When
    let result = Config::load().unwrap().validate();

    // Then
    assert_that!(result, err(anything()));
}

#[test]
#[serial]
fn given_max_tag_name_length_over_max_when_validate_then_error() {
    // Given
    let (_temp, _guard) = setup_config_dir();
    let _length = EnvGuard::set(
        "KB_VALIDATION_MAX_TAG_NAME_LENGTH",
        &ABOVE_MAX_TAG_NAME.to_string(),
    );

    // When
    let result = Config::load().unwrap().validate();

    // Then
    assert_that!(result, err(anything()));
}

#[test]
#[serial]
fn given_max_comment_length_over_max_when_validate_then_error() {
    // Given
    let (_temp, _guard) = setup_config_dir();
    let _length = EnvGuard::set(
        "KB_VALIDATION_MAX_COMMENT_LENGTH",
        &ABOVE_MAX_COMMENT.to_string(),
    );

    // When
    let result = Config::load().unwrap().validate();

    // Then
    assert_that!(result, err(anything()));
}

#[test]
#[serial]
fn given_limits_at_bounds_when_validate_then_ok() {
    // Given
    let (_temp, _guard) = setup_config_dir();
    let _name = EnvGuard::set("KB_VALIDATION_MAX_NAME_LENGTH", &MAX_NAME_LENGTH.to_string());
    let _title = EnvGuard::set("KB_VALIDATION_MAX_TITLE_LENGTH", &MIN_TITLE_LENGTH.to_string());

    // When
    let result = Config::load().unwrap().validate();

    // Then
    assert_that!(result, ok(anything()));
}
