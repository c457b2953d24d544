use crate::ApiError;

use std::future::Future;

use axum::{
    Json,
    extract::{FromRequest, Request, rejection::JsonRejection},
};

/// `Json<T>` whose rejection is an [`ApiError`], so malformed bodies get the
/// standard error envelope.
pub struct ApiJson<T>(pub T);

impl<S, T> FromRequest<S> for ApiJson<T>
where
    Json<T>: FromRequest<S, Rejection = JsonRejection>,
    S: Send + Sync,
{
    type Rejection = ApiError;

    #[allow(clippy::manual_async_fn)]
    fn from_request(
        req: Request,
        state: &S,
    ) -> impl Future<Output = Result<Self, Self::Rejection>> + Send {
        async move {
            let Json(value) = Json::<T>::from_request(req, state).await?;
            Ok(ApiJson(value))
        }
    }
}
