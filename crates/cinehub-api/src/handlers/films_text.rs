//! Plain-text film handlers (v1 API).
//!
//! These endpoints mirror the classic text interface: one formatted line
//! per film, errors as plain-text bodies.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};

use cinehub_core::types::pagination::PageRequest;
use cinehub_entity::film::{Film, FilmSummary, FilmWithActors};

use crate::dto::request::{PagedFilmsParams, RentalRateParams, SearchFilmsParams};
use crate::error::ApiError;
use crate::state::AppState;

/// Cap on the film echo returned by the rate-update endpoint.
const RATE_UPDATE_ECHO_LIMIT: i64 = 100;

/// GET /api/films/{id}
///
/// Returns the film title, or a 404 text body.
pub async fn get_film(
    State(state): State<AppState>,
    Path(film_id): Path<i32>,
) -> Result<Response, ApiError> {
    match state.film_repo.find_by_id(film_id).await? {
        Some(film) => Ok(film.title.into_response()),
        None => Ok((
            StatusCode::NOT_FOUND,
            format!("Film not found with ID: {film_id}"),
        )
            .into_response()),
    }
}

/// GET /api/films/paged
///
/// One page (20 films) of the length-filtered listing, one line per film.
pub async fn films_paged(
    State(state): State<AppState>,
    Query(params): Query<PagedFilmsParams>,
) -> Result<Response, ApiError> {
    if params.page < 0 {
        return Ok((StatusCode::BAD_REQUEST, "Page must be non-negative").into_response());
    }

    let page = PageRequest::of_page(params.page as u64);
    let films = state
        .film_repo
        .find_by_minimum_length_paged(&page, params.min_length)
        .await?;

    let body = films
        .iter()
        .map(format_film_with_length)
        .collect::<Vec<_>>()
        .join("\n");
    Ok(body.into_response())
}

/// GET /api/films/search
///
/// Films matching a title prefix, each line listing the cast.
pub async fn search_films(
    State(state): State<AppState>,
    Query(params): Query<SearchFilmsParams>,
) -> Result<Response, ApiError> {
    let films = state
        .film_repo
        .find_by_title_prefix_with_actors(&params.title_prefix, params.min_length)
        .await?;

    let body = films
        .iter()
        .map(format_film_with_actors)
        .collect::<Vec<_>>()
        .join("\n");
    Ok(body.into_response())
}

/// PUT /api/films/rental-rate
///
/// Applies the new rate to every matching film and echoes them with the
/// updated price.
pub async fn update_rental_rate(
    State(state): State<AppState>,
    Query(params): Query<RentalRateParams>,
) -> Result<Response, ApiError> {
    let Some(rate) = params.rate.filter(|r| *r > rust_decimal::Decimal::ZERO) else {
        return Ok((
            StatusCode::BAD_REQUEST,
            "Rental rate must be a positive value",
        )
            .into_response());
    };

    state
        .film_repo
        .update_rental_rate(params.min_length, rate)
        .await?;

    let films = state
        .film_repo
        .find_by_minimum_length(params.min_length, RATE_UPDATE_ECHO_LIMIT)
        .await?;

    let body = films
        .iter()
        .map(format_film_with_rental_rate)
        .collect::<Vec<_>>()
        .join("\n");
    Ok(body.into_response())
}

fn format_film_with_length(film: &FilmSummary) -> String {
    format!("{} ({} min)", film.title, film.length.unwrap_or(0))
}

fn format_film_with_actors(fwa: &FilmWithActors) -> String {
    let actor_names = fwa
        .actors
        .iter()
        .map(|a| a.full_name())
        .collect::<Vec<_>>()
        .join(", ");

    format!(
        "{} ({} min) - Actors: {}",
        fwa.film.title,
        fwa.film.length.unwrap_or(0),
        actor_names
    )
}

fn format_film_with_rental_rate(film: &Film) -> String {
    format!(
        "{} ({} min) - ${:.2}",
        film.title,
        film.length.unwrap_or(0),
        film.rental_rate.unwrap_or_default()
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use cinehub_entity::actor::Actor;
    use rust_decimal::Decimal;

    fn film(title: &str, length: Option<i32>, rate: Option<Decimal>) -> Film {
        Film {
            film_id: 1,
            title: title.to_string(),
            description: None,
            release_year: None,
            rental_duration: 3,
            rental_rate: rate,
            length,
            replacement_cost: None,
            rating: None,
            last_update: Utc::now(),
        }
    }

    fn actor(first: &str, last: &str) -> Actor {
        Actor {
            actor_id: 1,
            first_name: first.to_string(),
            last_name: last.to_string(),
            last_update: Utc::now(),
        }
    }

    #[test]
    fn test_format_with_length() {
        let summary = FilmSummary {
            film_id: 1,
            title: "ACADEMY DINOSAUR".to_string(),
            length: Some(86),
        };
        assert_eq!(format_film_with_length(&summary), "ACADEMY DINOSAUR (86 min)");
    }

    #[test]
    fn test_format_with_actors() {
        let fwa = FilmWithActors {
            film: film("ACE GOLDFINGER", Some(48), None),
            actors: vec![actor("BOB", "FAWCETT"), actor("MINNIE", "ZELLWEGER")],
        };
        assert_eq!(
            format_film_with_actors(&fwa),
            "ACE GOLDFINGER (48 min) - Actors: BOB FAWCETT, MINNIE ZELLWEGER"
        );
    }

    #[test]
    fn test_format_with_rental_rate() {
        let f = film("AFRICAN EGG", Some(130), Some(Decimal::new(299, 2)));
        assert_eq!(
            format_film_with_rental_rate(&f),
            "AFRICAN EGG (130 min) - $2.99"
        );
    }
}
