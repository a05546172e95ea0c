use axum::{extract::State, http::StatusCode, response::Json};
use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::handlers::AppState;

#[derive(Debug, Serialize)]
pub struct Liveness {
    status: &'static str,
    timestamp: DateTime<Utc>,
}

#[derive(Debug, Serialize)]
pub struct Readiness {
    status: &'static str,
    database: &'static str,
    timestamp: DateTime<Utc>,
}

pub async fn liveness() -> Json<Liveness> {
    Json(Liveness {
        status: "ok",
        timestamp: Utc::now(),
    })
}

/// Ready once the catalog store answers; 503 otherwise.
pub async fn readiness(State(state): State<AppState>) -> (StatusCode, Json<Readiness>) {
    let (code, status, database) = match state.store.ping().await {
        Ok(()) => (StatusCode::OK, "ready", "healthy"),
        Err(e) => {
            tracing::warn!("Readiness check failed: {}", e);
            (StatusCode::SERVICE_UNAVAILABLE, "not_ready", "unhealthy")
        }
    };

    (
        code,
        Json(Readiness {
            status,
            database,
            timestamp: Utc::now(),
        }),
    )
}
