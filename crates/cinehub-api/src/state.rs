//! Application state shared across all handlers.

use std::sync::Arc;

use sqlx::PgPool;

use cinehub_core::config::AppConfig;
use cinehub_database::repositories::actor::ActorRepository;
use cinehub_database::repositories::film::FilmRepository;
use cinehub_service::film::FilmService;

/// Application state containing all shared dependencies.
///
/// Passed to every Axum handler via `State<AppState>`.
/// All fields are `Arc`-wrapped for cheap cloning across tasks.
#[derive(Debug, Clone)]
pub struct AppState {
    /// Application configuration.
    pub config: Arc<AppConfig>,
    /// PostgreSQL connection pool.
    pub db_pool: PgPool,
    /// Film repository.
    pub film_repo: Arc<FilmRepository>,
    /// Actor repository.
    pub actor_repo: Arc<ActorRepository>,
    /// Film service.
    pub film_service: Arc<FilmService>,
}
