use crate::{AuthError, AuthProvider, Claims, JwtValidator};

use jsonwebtoken::Algorithm;
use jsonwebtoken::{EncodingKey, Header, encode};
use uuid::Uuid;

const SECRET: &[u8] = b"test-secret-key-at-least-32-bytes";

fn create_test_token(claims: &Claims, secret: &[u8]) -> String {
    encode(
        &Header::new(Algorithm::HS256),
        claims,
        &EncodingKey::from_secret(secret),
    )
    .unwrap()
}

fn valid_claims(user_id: Uuid) -> Claims {
    Claims {
        sub: user_id.to_string(),
        exp: chrono::Utc::now().timestamp() + 3600,
        iat: chrono::Utc::now().timestamp(),
        name: Some("alice".to_string()),
    }
}

#[test]
fn given_valid_token_when_validated_then_returns_claims() {
    let validator = JwtValidator::with_hs256(SECRET);
    let user_id = Uuid::new_v4();
    let token = create_test_token(&valid_claims(user_id), SECRET);

    let result = validator.validate(&token);

    assert!(result.is_ok());
    assert_eq!(result.unwrap().sub, user_id.to_string());
}

#[test]
fn given_expired_token_when_validated_then_returns_expired() {
    let validator = JwtValidator::with_hs256(SECRET);
    let mut claims = valid_claims(Uuid::new_v4());
    claims.exp = chrono::Utc::now().timestamp() - 3600; // Expired 1 hour ago
    let token = create_test_token(&claims, SECRET);

    let result = validator.validate(&token);

    assert!(matches!(result, Err(AuthError::Expired { .. })));
}

#[test]
fn given_wrong_secret_when_validated_then_returns_rejected() {
    let validator = JwtValidator::with_hs256(b"wrong-secret-key-at-least-32-by");
    let token = create_test_token(&valid_claims(Uuid::new_v4()), SECRET);

    let result = validator.validate(&token);

    assert!(matches!(result, Err(AuthError::Rejected { .. })));
}

#[test]
fn given_non_uuid_subject_when_validated_then_returns_invalid_claim() {
    let validator = JwtValidator::with_hs256(SECRET);
    let mut claims = valid_claims(Uuid::new_v4());
    claims.sub = "user-123".to_string();
    let token = create_test_token(&claims, SECRET);

    let result = validator.validate(&token);

    assert!(matches!(result, Err(AuthError::InvalidClaim { ref claim, .. }) if claim == "sub"));
}

#[test]
fn given_valid_token_when_verified_then_returns_principal() {
    let validator = JwtValidator::with_hs256(SECRET);
    let user_id = Uuid::new_v4();
    let token = create_test_token(&valid_claims(user_id), SECRET);

    let principal = validator.verify(&token).unwrap();

    assert_eq!(principal.user_id, user_id);
    assert_eq!(principal.username, "alice");
}

#[test]
fn given_token_without_name_when_verified_then_username_is_subject() {
    let validator = JwtValidator::with_hs256(SECRET);
    let user_id = Uuid::new_v4();
    let mut claims = valid_claims(user_id);
    claims.name = None;
    let token = create_test_token(&claims, SECRET);

    let principal = validator.verify(&token).unwrap();

    assert_eq!(principal.username, user_id.to_string());
}

#[test]
fn given_garbage_when_verified_then_public_message_hides_detail() {
    let validator = JwtValidator::with_hs256(SECRET);

    let err = validator.verify("not-a-jwt").unwrap_err();

    assert_eq!(err.public_message(), "Invalid authentication token.");
}

#[test]
fn given_recently_expired_token_when_within_leeway_then_accepted() {
    let user_id = Uuid::new_v4();
    let mut claims = valid_claims(user_id);
    claims.exp = chrono::Utc::now().timestamp() - 10;
    let token = create_test_token(&claims, SECRET);

    let lenient = JwtValidator::with_hs256_leeway(SECRET, 60);
    let strict = JwtValidator::with_hs256_leeway(SECRET, 0);

    assert!(lenient.validate(&token).is_ok());
    assert!(matches!(
        strict.validate(&token),
        Err(AuthError::Expired { .. })
    ));
}
