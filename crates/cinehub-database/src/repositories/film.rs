//! Film repository implementation.
//!
//! All read queries are plain parameterized statements; the only write is
//! the conditional bulk rental-rate update. Row locking during that update
//! is delegated entirely to PostgreSQL.

use std::collections::HashMap;

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use sqlx::PgPool;

use cinehub_core::error::{AppError, ErrorKind};
use cinehub_core::result::AppResult;
use cinehub_core::types::pagination::PageRequest;
use cinehub_entity::actor::Actor;
use cinehub_entity::film::{Film, FilmSummary, FilmWithActors};

/// Repository for film read and bulk-update operations.
#[derive(Debug, Clone)]
pub struct FilmRepository {
    pool: PgPool,
}

/// One row of the film/actor join, used to group actors per film.
#[derive(Debug, sqlx::FromRow)]
struct CastRow {
    film_id: i32,
    actor_id: i16,
    first_name: String,
    last_name: String,
    last_update: DateTime<Utc>,
}

impl FilmRepository {
    /// Create a new film repository.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Find a film by primary key.
    pub async fn find_by_id(&self, film_id: i32) -> AppResult<Option<Film>> {
        sqlx::query_as::<_, Film>("SELECT * FROM film WHERE film_id = $1")
            .bind(film_id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to find film by id", e))
    }

    /// Find a film by primary key with its cast eagerly loaded.
    pub async fn find_with_actors(&self, film_id: i32) -> AppResult<Option<FilmWithActors>> {
        let Some(film) = self.find_by_id(film_id).await? else {
            return Ok(None);
        };

        let mut cast = self.load_cast(&[film_id]).await?;
        let actors = cast.remove(&film_id).unwrap_or_default();
        Ok(Some(FilmWithActors { film, actors }))
    }

    /// List films longer than `min_length` minutes, shortest first.
    ///
    /// The underlying ordering is unbounded; callers pass an explicit cap.
    pub async fn find_by_minimum_length(&self, min_length: i32, limit: i64) -> AppResult<Vec<Film>> {
        sqlx::query_as::<_, Film>(
            "SELECT * FROM film WHERE length > $1 ORDER BY length ASC, film_id ASC LIMIT $2",
        )
        .bind(min_length)
        .bind(limit)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| {
            AppError::with_source(ErrorKind::Database, "Failed to list films by length", e)
        })
    }

    /// One page of the length-filtered listing, as a narrow projection.
    ///
    /// Same ordering as [`find_by_minimum_length`](Self::find_by_minimum_length),
    /// sliced at `page.offset()`.
    pub async fn find_by_minimum_length_paged(
        &self,
        page: &PageRequest,
        min_length: i32,
    ) -> AppResult<Vec<FilmSummary>> {
        sqlx::query_as::<_, FilmSummary>(
            "SELECT film_id, title, length FROM film WHERE length > $1 \
             ORDER BY length ASC, film_id ASC LIMIT $2 OFFSET $3",
        )
        .bind(min_length)
        .bind(page.limit() as i64)
        .bind(page.offset() as i64)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to page films", e))
    }

    /// Films whose title starts with `prefix` (case-sensitive) and whose
    /// length exceeds `min_length`, longest first, cast eagerly loaded.
    ///
    /// An empty prefix matches every title.
    pub async fn find_by_title_prefix_with_actors(
        &self,
        prefix: &str,
        min_length: i32,
    ) -> AppResult<Vec<FilmWithActors>> {
        let pattern = format!("{}%", escape_like(prefix));

        let films = sqlx::query_as::<_, Film>(
            "SELECT * FROM film WHERE title LIKE $1 AND length > $2 \
             ORDER BY length DESC, film_id ASC",
        )
        .bind(&pattern)
        .bind(min_length)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| {
            AppError::with_source(ErrorKind::Database, "Failed to search films by title", e)
        })?;

        let ids: Vec<i32> = films.iter().map(|f| f.film_id).collect();
        let mut cast = self.load_cast(&ids).await?;

        Ok(films
            .into_iter()
            .map(|film| {
                let actors = cast.remove(&film.film_id).unwrap_or_default();
                FilmWithActors { film, actors }
            })
            .collect())
    }

    /// Set the rental rate on every film longer than `min_length` minutes.
    ///
    /// Executes as a single bulk statement and returns the number of rows
    /// written.
    pub async fn update_rental_rate(&self, min_length: i32, new_rate: Decimal) -> AppResult<u64> {
        let result = sqlx::query(
            "UPDATE film SET rental_rate = $1, last_update = NOW() WHERE length > $2",
        )
        .bind(new_rate)
        .bind(min_length)
        .execute(&self.pool)
        .await
        .map_err(|e| {
            AppError::with_source(ErrorKind::Database, "Failed to update rental rates", e)
        })?;

        Ok(result.rows_affected())
    }

    /// Count all films in the catalog.
    pub async fn count(&self) -> AppResult<u64> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM film")
            .fetch_one(&self.pool)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to count films", e))?;
        Ok(count as u64)
    }

    /// Fetch the cast of the given films, grouped by film id.
    async fn load_cast(&self, film_ids: &[i32]) -> AppResult<HashMap<i32, Vec<Actor>>> {
        if film_ids.is_empty() {
            return Ok(HashMap::new());
        }

        let rows = sqlx::query_as::<_, CastRow>(
            "SELECT fa.film_id, a.actor_id, a.first_name, a.last_name, a.last_update \
             FROM film_actor fa \
             JOIN actor a ON a.actor_id = fa.actor_id \
             WHERE fa.film_id = ANY($1) \
             ORDER BY a.actor_id ASC",
        )
        .bind(film_ids)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to load film cast", e))?;

        let mut cast: HashMap<i32, Vec<Actor>> = HashMap::new();
        for row in rows {
            cast.entry(row.film_id).or_default().push(Actor {
                actor_id: row.actor_id,
                first_name: row.first_name,
                last_name: row.last_name,
                last_update: row.last_update,
            });
        }
        Ok(cast)
    }
}

/// Escape SQL LIKE metacharacters so a prefix matches literally.
fn escape_like(input: &str) -> String {
    let mut escaped = String::with_capacity(input.len());
    for c in input.chars() {
        if matches!(c, '%' | '_' | '\\') {
            escaped.push('\\');
        }
        escaped.push(c);
    }
    escaped
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_escape_like_passthrough() {
        assert_eq!(escape_like("ACADEMY"), "ACADEMY");
        assert_eq!(escape_like(""), "");
    }

    #[test]
    fn test_escape_like_metacharacters() {
        assert_eq!(escape_like("50%_OFF"), "50\\%\\_OFF");
        assert_eq!(escape_like("back\\slash"), "back\\\\slash");
    }
}
