//! Actor repository implementation.
//!
//! Read-only: the catalog never mutates actors. The film association is
//! always queried through the `film_actor` join table, never stored on the
//! actor side.

use sqlx::PgPool;

use cinehub_core::error::{AppError, ErrorKind};
use cinehub_core::result::AppResult;
use cinehub_entity::actor::Actor;
use cinehub_entity::film::FilmSummary;

/// Repository for actor read operations.
#[derive(Debug, Clone)]
pub struct ActorRepository {
    pool: PgPool,
}

impl ActorRepository {
    /// Create a new actor repository.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Find an actor by primary key.
    pub async fn find_by_id(&self, actor_id: i16) -> AppResult<Option<Actor>> {
        sqlx::query_as::<_, Actor>("SELECT * FROM actor WHERE actor_id = $1")
            .bind(actor_id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Database, "Failed to find actor by id", e)
            })
    }

    /// List the films an actor appears in (derived reverse lookup).
    pub async fn find_films(&self, actor_id: i16) -> AppResult<Vec<FilmSummary>> {
        sqlx::query_as::<_, FilmSummary>(
            "SELECT f.film_id, f.title, f.length FROM film f \
             JOIN film_actor fa ON fa.film_id = f.film_id \
             WHERE fa.actor_id = $1 \
             ORDER BY f.title ASC",
        )
        .bind(actor_id)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to list actor films", e))
    }
}
