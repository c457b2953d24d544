//! Resolves the acting principal for a request.

use crate::{ApiError, AppState};

use kb_auth::{Principal, bearer_token};
use kb_core::User;
use kb_db::UserRepository;

use std::future::Future;

use axum::{
    extract::FromRequestParts,
    http::{header::AUTHORIZATION, request::Parts},
};
use uuid::Uuid;

pub const USER_ID_HEADER: &str = "X-User-Id";
pub const USER_NAME_HEADER: &str = "X-User-Name";

/// The verified caller. Every API handler takes one.
///
/// With auth enabled the bearer token is verified by the configured
/// provider. With auth disabled `X-User-Id` (optionally `X-User-Name`) names
/// the caller, falling back to the configured default user. The user row is
/// provisioned on first sight.
#[derive(Debug, Clone)]
pub struct CurrentUser(pub Principal);

impl CurrentUser {
    pub fn id(&self) -> Uuid {
        self.0.user_id
    }

    fn from_headers(parts: &Parts, state: &AppState) -> Principal {
        let headers = &parts.headers;

        #[allow(clippy::collapsible_if)]
        if let Some(header_value) = headers.get(USER_ID_HEADER) {
            if let Ok(user_id_str) = header_value.to_str() {
                if let Ok(uuid) = Uuid::parse_str(user_id_str) {
                    log::debug!("Using user ID from X-User-Id header: {}", uuid);
                    let username = headers
                        .get(USER_NAME_HEADER)
                        .and_then(|v| v.to_str().ok())
                        .map(str::trim)
                        .filter(|name| !name.is_empty())
                        .map(str::to_string)
                        .unwrap_or_else(|| format!("user-{}", &uuid.simple().to_string()[..8]));
                    return Principal::new(uuid, username);
                }
                log::warn!("Invalid UUID in X-User-Id header: {}", user_id_str);
            }
        }

        log::debug!(
            "Using default user ID: {}",
            state.default_principal.user_id
        );
        state.default_principal.clone()
    }
}

impl FromRequestParts<AppState> for CurrentUser {
    type Rejection = ApiError;

    #[allow(clippy::manual_async_fn)]
    fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> impl Future<Output = Result<Self, Self::Rejection>> + Send {
        async move {
            let principal = match &state.auth {
                Some(provider) => {
                    let header = parts
                        .headers
                        .get(AUTHORIZATION)
                        .and_then(|value| value.to_str().ok());
                    let token = bearer_token(header)?;
                    provider.verify(token)?
                }
                None => Self::from_headers(parts, state),
            };

            UserRepository::ensure(
                &state.pool,
                &User::new(principal.user_id, principal.username.clone()),
            )
            .await?;

            Ok(CurrentUser(principal))
        }
    }
}
