//! Application builder — wires repositories, services, and state into an
//! Axum app.

use std::sync::Arc;

use axum::Router;
use sqlx::PgPool;

use cinehub_core::config::AppConfig;
use cinehub_core::error::AppError;
use cinehub_database::repositories::actor::ActorRepository;
use cinehub_database::repositories::film::FilmRepository;
use cinehub_service::film::FilmService;

use crate::router::build_router;
use crate::state::AppState;

/// Construct the application state from configuration and a connected
/// database pool.
pub fn build_state(config: AppConfig, db_pool: PgPool) -> AppState {
    let film_repo = Arc::new(FilmRepository::new(db_pool.clone()));
    let actor_repo = Arc::new(ActorRepository::new(db_pool.clone()));
    let film_service = Arc::new(FilmService::new(Arc::clone(&film_repo)));

    AppState {
        config: Arc::new(config),
        db_pool,
        film_repo,
        actor_repo,
        film_service,
    }
}

/// Builds the complete Axum application with all routes and middleware.
pub fn build_app(state: AppState) -> Router {
    build_router(state)
}

/// Runs the CineHub server with the given configuration and database pool.
pub async fn run_server(config: AppConfig, db_pool: PgPool) -> Result<(), AppError> {
    let addr = format!("{}:{}", config.server.host, config.server.port);
    let state = build_state(config, db_pool);
    let app = build_app(state);

    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .map_err(|e| AppError::internal(format!("Failed to bind {addr}: {e}")))?;

    tracing::info!("CineHub server listening on {addr}");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(|e| AppError::internal(format!("Server error: {e}")))?;

    Ok(())
}

async fn shutdown_signal() {
    tokio::signal::ctrl_c()
        .await
        .expect("Failed to install Ctrl+C handler");
}
