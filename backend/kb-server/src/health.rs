use crate::AppState;

use axum::{
    Json,
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::json;

async fn database_ok(state: &AppState) -> bool {
    match sqlx::query_scalar::<_, i64>("SELECT 1")
        .fetch_one(&state.pool)
        .await
    {
        Ok(_) => true,
        Err(e) => {
            log::warn!("Health check database probe failed: {}", e);
            false
        }
    }
}

/// GET /health - component status
pub async fn health_check(State(state): State<AppState>) -> Response {
    let database = database_ok(&state).await;
    let status = if database {
        StatusCode::OK
    } else {
        StatusCode::SERVICE_UNAVAILABLE
    };

    let health = json!({
        "status": if database { "healthy" } else { "degraded" },
        "version": env!("CARGO_PKG_VERSION"),
        "components": {
            "database": if database { "operational" } else { "unavailable" },
            "auth": if state.auth.is_some() { "enabled" } else { "disabled" },
        },
        "timestamp": chrono::Utc::now().to_rfc3339(),
    });

    (status, Json(health)).into_response()
}

/// GET /live - the process answers
pub async fn liveness_check() -> Response {
    (StatusCode::OK, "OK").into_response()
}

/// GET /ready - the database answers
pub async fn readiness_check(State(state): State<AppState>) -> Response {
    if database_ok(&state).await {
        (StatusCode::OK, "Ready").into_response()
    } else {
        (StatusCode::SERVICE_UNAVAILABLE, "Not ready").into_response()
    }
}
