use crate::{AuthError, bearer_token};

#[test]
fn given_bearer_header_when_parsed_then_returns_token() {
    assert_eq!(bearer_token(Some("Bearer abc.def")).unwrap(), "abc.def");
}

#[test]
fn given_no_header_when_parsed_then_missing_credentials() {
    assert!(matches!(
        bearer_token(None),
        Err(AuthError::MissingCredentials { .. })
    ));
}

#[test]
fn given_other_scheme_when_parsed_then_not_bearer() {
    assert!(matches!(
        bearer_token(Some("Basic dXNlcjpwYXNz")),
        Err(AuthError::NotBearer { .. })
    ));
    assert!(matches!(
        bearer_token(Some("Bearer   ")),
        Err(AuthError::NotBearer { .. })
    ));
}
