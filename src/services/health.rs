use axum::{
    extract::State,
    http::StatusCode,
    response::Json,
    routing::get,
    Router,
};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use std::time::Instant;
use tower_http::trace::TraceLayer;

use crate::database::connection::DatabaseManager;

#[derive(Debug, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub timestamp: DateTime<Utc>,
    pub version: String,
    pub database: DatabaseHealth,
    pub uptime_seconds: u64,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct DatabaseHealth {
    pub status: String,
    pub connection_pool_size: u32,
    pub response_time_ms: u64,
}

#[derive(Clone)]
struct HealthState {
    db: Arc<DatabaseManager>,
    started_at: DateTime<Utc>,
}

/// `/health`, `/health/ready` and `/health/live` for the process supervisor.
pub struct HealthService {
    pub router: Router,
}

impl HealthService {
    pub fn new(db: Arc<DatabaseManager>) -> Self {
        let state = HealthState {
            db,
            started_at: Utc::now(),
        };

        let router = Router::new()
            .route("/health", get(health_check))
            .route("/health/ready", get(readiness_check))
            .route("/health/live", get(liveness_check))
            .layer(TraceLayer::new_for_http())
            .with_state(state);

        Self { router }
    }
}

async fn health_check(
    State(state): State<HealthState>,
) -> Result<Json<HealthResponse>, StatusCode> {
    let start = Instant::now();
    let reachable = ping(&state.db).await.is_ok();
    let response_time_ms = start.elapsed().as_millis() as u64;

    if !reachable {
        tracing::warn!("Health check failed: database unreachable");
        return Err(StatusCode::SERVICE_UNAVAILABLE);
    }

    let uptime_seconds = Utc::now()
        .signed_duration_since(state.started_at)
        .num_seconds()
        .max(0) as u64;

    Ok(Json(HealthResponse {
        status: "healthy".to_string(),
        timestamp: Utc::now(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        database: DatabaseHealth {
            status: "healthy".to_string(),
            connection_pool_size: state.db.pool.size(),
            response_time_ms,
        },
        uptime_seconds,
    }))
}

// Ready once the channel table answers, not merely the connection.
async fn readiness_check(
    State(state): State<HealthState>,
) -> Result<Json<&'static str>, StatusCode> {
    match sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM wpos_wpdatatable_23")
        .fetch_one(&state.db.pool)
        .await
    {
        Ok(_) => Ok(Json("ready")),
        Err(e) => {
            tracing::warn!("Readiness check failed: {}", e);
            Err(StatusCode::SERVICE_UNAVAILABLE)
        }
    }
}

async fn liveness_check() -> Json<&'static str> {
    Json("alive")
}

async fn ping(db: &DatabaseManager) -> Result<(), sqlx::Error> {
    sqlx::query("SELECT 1").fetch_one(&db.pool).await?;
    Ok(())
}
