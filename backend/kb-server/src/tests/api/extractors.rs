use crate::ApiError;
use crate::CurrentUser;
use crate::tests::{DEFAULT_USER, create_test_state};

use kb_auth::{Claims, JwtValidator};
use kb_db::UserRepository;

use std::sync::Arc;

use axum::{body::Body, extract::FromRequestParts, http::Request};
use jsonwebtoken::{Algorithm, EncodingKey, Header, encode};
use uuid::Uuid;

const SECRET: &[u8] = b"test-secret-key-at-least-32-bytes";

fn token_for(user_id: Uuid, name: &str) -> String {
    let now = chrono::Utc::now().timestamp();
    let claims = Claims {
        sub: user_id.to_string(),
        exp: now + 3600,
        iat: now,
        name: Some(name.to_string()),
    };
    encode(
        &Header::new(Algorithm::HS256),
        &claims,
        &EncodingKey::from_secret(SECRET),
    )
    .unwrap()
}

#[tokio::test]
async fn test_extractor_with_valid_header_provisions_user() {
    let (state, _dir) = create_test_state(None).await;
    let request = Request::builder()
        .header("X-User-Id", "12345678-1234-1234-1234-123456789abc")
        .header("X-User-Name", "alice")
        .body(Body::empty())
        .unwrap();

    let (mut parts, _body) = request.into_parts();
    let user = CurrentUser::from_request_parts(&mut parts, &state)
        .await
        .unwrap();

    assert_eq!(user.id().to_string(), "12345678-1234-1234-1234-123456789abc");
    assert_eq!(user.0.username, "alice");

    let stored = UserRepository::find_by_id(&state.pool, user.id())
        .await
        .unwrap()
        .unwrap();
    assert_eq!(stored.username, "alice");
}

#[tokio::test]
async fn test_extractor_derives_username_when_name_header_missing() {
    let (state, _dir) = create_test_state(None).await;
    let request = Request::builder()
        .header("X-User-Id", "abcdef01-1234-1234-1234-123456789abc")
        .body(Body::empty())
        .unwrap();

    let (mut parts, _body) = request.into_parts();
    let user = CurrentUser::from_request_parts(&mut parts, &state)
        .await
        .unwrap();

    assert_eq!(user.0.username, "user-abcdef01");
}

#[tokio::test]
async fn test_extractor_falls_back_to_default_user_when_missing() {
    let (state, _dir) = create_test_state(None).await;
    let request = Request::builder().body(Body::empty()).unwrap();

    let (mut parts, _body) = request.into_parts();
    let user = CurrentUser::from_request_parts(&mut parts, &state)
        .await
        .unwrap();

    assert_eq!(user.id().to_string(), DEFAULT_USER);
    assert_eq!(user.0.username, "local");
}

#[tokio::test]
async fn test_extractor_falls_back_when_header_invalid_uuid() {
    let (state, _dir) = create_test_state(None).await;
    let request = Request::builder()
        .header("X-User-Id", "not-a-valid-uuid")
        .body(Body::empty())
        .unwrap();

    let (mut parts, _body) = request.into_parts();
    let user = CurrentUser::from_request_parts(&mut parts, &state)
        .await
        .unwrap();

    assert_eq!(user.id().to_string(), DEFAULT_USER);
}

#[tokio::test]
async fn test_extractor_requires_bearer_when_auth_enabled() {
    let (state, _dir) = create_test_state(Some(Arc::new(JwtValidator::with_hs256(SECRET)))).await;
    // X-User-Id is ignored once auth is on
    let request = Request::builder()
        .header("X-User-Id", "12345678-1234-1234-1234-123456789abc")
        .body(Body::empty())
        .unwrap();

    let (mut parts, _body) = request.into_parts();
    let result = CurrentUser::from_request_parts(&mut parts, &state).await;

    match result {
        Err(ApiError::Unauthorized { message, .. }) => {
            assert_eq!(message, "Authentication credentials were not provided.")
        }
        other => panic!("Expected Unauthorized, got {:?}", other.map(|u| u.id())),
    }
}

#[tokio::test]
async fn test_extractor_accepts_valid_token() {
    let (state, _dir) = create_test_state(Some(Arc::new(JwtValidator::with_hs256(SECRET)))).await;
    let user_id = Uuid::new_v4();
    let request = Request::builder()
        .header("Authorization", format!("Bearer {}", token_for(user_id, "bob")))
        .body(Body::empty())
        .unwrap();

    let (mut parts, _body) = request.into_parts();
    let user = CurrentUser::from_request_parts(&mut parts, &state)
        .await
        .unwrap();

    assert_eq!(user.id(), user_id);
    assert_eq!(user.0.username, "bob");
}

#[tokio::test]
async fn test_extractor_rejects_token_signed_with_other_secret() {
    let (state, _dir) = create_test_state(Some(Arc::new(JwtValidator::with_hs256(
        b"another-secret-key-at-least-32-bytes",
    ))))
    .await;
    let request = Request::builder()
        .header(
            "Authorization",
            format!("Bearer {}", token_for(Uuid::new_v4(), "mallory")),
        )
        .body(Body::empty())
        .unwrap();

    let (mut parts, _body) = request.into_parts();
    let result = CurrentUser::from_request_parts(&mut parts, &state).await;

    assert!(matches!(result, Err(ApiError::Unauthorized { .. })));
}
