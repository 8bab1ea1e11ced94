//! Health check handlers.

use axum::Json;
use axum::extract::State;

use cinehub_database::connection::ping;

use crate::dto::response::{ApiResponse, DetailedHealthResponse, HealthResponse};
use crate::state::AppState;

/// GET /api/health
pub async fn health() -> Json<ApiResponse<HealthResponse>> {
    Json(ApiResponse::ok(HealthResponse {
        status: "ok".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    }))
}

/// GET /api/health/detailed
pub async fn health_detailed(
    State(state): State<AppState>,
) -> Json<ApiResponse<DetailedHealthResponse>> {
    let database_ok = ping(&state.db_pool).await.is_ok();
    let films = if database_ok {
        state.film_repo.count().await.unwrap_or(0)
    } else {
        0
    };

    Json(ApiResponse::ok(DetailedHealthResponse {
        status: if database_ok { "ok" } else { "degraded" }.to_string(),
        database: if database_ok {
            "connected"
        } else {
            "unreachable"
        }
        .to_string(),
        films,
    }))
}
