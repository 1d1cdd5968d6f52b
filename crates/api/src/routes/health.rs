use std::time::Instant;

use axum::extract::State;
use axum::{routing::get, Json, Router};
use serde::Serialize;

use crate::state::AppState;

/// Newest migration shipped in `db/migrations`. A lower reported schema
/// version means the database was migrated by an older build.
pub const EXPECTED_SCHEMA_VERSION: i64 = 20250101000002;

#[derive(Serialize)]
pub struct HealthResponse {
    /// `ok`, or `degraded` when the database is unreachable or behind.
    pub status: &'static str,
    pub service: &'static str,
    pub version: &'static str,
    pub db_healthy: bool,
    /// Round trip of the `SELECT 1` probe, absent when it failed.
    pub db_latency_ms: Option<u64>,
    pub schema_version: Option<i64>,
    pub schema_current: bool,
}

/// GET /health -- service and database health. No authentication.
async fn health_check(State(state): State<AppState>) -> Json<HealthResponse> {
    let started = Instant::now();
    let db_healthy = taskdeck_db::health_check(&state.pool).await.is_ok();
    let db_latency_ms = db_healthy.then(|| started.elapsed().as_millis() as u64);

    let schema_version = if db_healthy {
        taskdeck_db::schema_version(&state.pool)
            .await
            .inspect_err(|e| tracing::warn!(error = %e, "Could not read schema version"))
            .ok()
            .flatten()
    } else {
        None
    };
    let schema_current = schema_version.is_some_and(|v| v >= EXPECTED_SCHEMA_VERSION);

    let status = if db_healthy && schema_current {
        "ok"
    } else {
        "degraded"
    };

    Json(HealthResponse {
        status,
        service: env!("CARGO_PKG_NAME"),
        version: env!("CARGO_PKG_VERSION"),
        db_healthy,
        db_latency_ms,
        schema_version,
        schema_current,
    })
}

/// Mounted at the root, outside `/api/v1` and its bearer check.
pub fn router() -> Router<AppState> {
    Router::new().route("/health", get(health_check))
}
