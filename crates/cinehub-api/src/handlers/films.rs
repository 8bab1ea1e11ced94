//! JSON film handlers (v2 API).

use axum::Json;
use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};

use cinehub_core::error::ErrorKind;
use cinehub_service::film::{FilmDetail, RateUpdateOutcome};

use crate::dto::request::{
    FormattedFilmParams, MinLengthParams, PagedFilmsV2Params, RentalRateParams, SearchFilmsParams,
    ensure_non_negative_page,
};
use crate::dto::response::{ErrorBody, UpdateSuccessResponse};
use crate::error::ApiError;
use crate::state::AppState;

/// GET /api/v2/films/{id}
pub async fn get_film(
    State(state): State<AppState>,
    Path(film_id): Path<i32>,
) -> Result<Json<FilmDetail>, ApiError> {
    let film = state.film_service.find_film(film_id).await?;
    Ok(Json(film))
}

/// GET /api/v2/films
pub async fn films_paginated(
    State(state): State<AppState>,
    Query(params): Query<PagedFilmsV2Params>,
) -> Result<Response, ApiError> {
    let page = ensure_non_negative_page(params.page)?;
    let result = state
        .film_service
        .films_paginated(page, params.min_length, params.page_size)
        .await?;
    Ok(Json(result).into_response())
}

/// GET /api/v2/films/search
pub async fn search_films(
    State(state): State<AppState>,
    Query(params): Query<SearchFilmsParams>,
) -> Result<Response, ApiError> {
    let result = state
        .film_service
        .search_films(&params.title_prefix, params.min_length)
        .await?;
    Ok(Json(result).into_response())
}

/// PUT /api/v2/films/rental-rate
///
/// Renders the update outcome: applied updates as a success body,
/// rejections as a 400 with the reason.
pub async fn update_rental_rate(
    State(state): State<AppState>,
    Query(params): Query<RentalRateParams>,
) -> Result<Response, ApiError> {
    let outcome = state
        .film_service
        .update_rental_rates(params.min_length, params.rate)
        .await;

    let response = match outcome {
        RateUpdateOutcome::Applied {
            films_updated,
            new_rate,
            films,
        } => Json(UpdateSuccessResponse {
            message: format!("Successfully updated {films_updated} films"),
            films_updated,
            new_rate,
            films,
        })
        .into_response(),
        RateUpdateOutcome::Rejected { reason } => (
            StatusCode::BAD_REQUEST,
            Json(ErrorBody {
                message: reason,
                details: params.rate.map(|r| serde_json::json!(r.to_string())),
            }),
        )
            .into_response(),
    };
    Ok(response)
}

/// GET /api/v2/films/statistics
pub async fn statistics(
    State(state): State<AppState>,
    Query(params): Query<MinLengthParams>,
) -> Result<Response, ApiError> {
    let stats = state.film_service.statistics(params.min_length).await?;
    Ok(Json(stats).into_response())
}

/// GET /api/v2/films/{id}/formatted
///
/// Plain-text rendering of a single film in one of three shapes.
pub async fn get_film_formatted(
    State(state): State<AppState>,
    Path(film_id): Path<i32>,
    Query(params): Query<FormattedFilmParams>,
) -> Result<Response, ApiError> {
    match state.film_service.find_film(film_id).await {
        Ok(film) => Ok(format_film(&film, &params.format).into_response()),
        Err(e) if e.kind == ErrorKind::NotFound => {
            Ok((StatusCode::NOT_FOUND, "Film not found").into_response())
        }
        Err(e) => Err(e.into()),
    }
}

/// Render a film in the requested shape.
fn format_film(film: &FilmDetail, format: &str) -> String {
    let length = film.length.unwrap_or(0);
    match format.to_lowercase().as_str() {
        "short" => format!("{} ({} min)", film.title, length),
        "detailed" => format!(
            "Title: {}\nLength: {} minutes\nRental Rate: ${:.2}\nCategory: {}\nActors: {}\n",
            film.title,
            length,
            film.rental_rate.unwrap_or_default(),
            film.category().display_name(),
            film.actors.len(),
        ),
        _ => formatted_display(film),
    }
}

/// The standard display shape, chosen by cast size: a priced line for an
/// empty cast, a "starring" line for one actor, a count otherwise.
fn formatted_display(film: &FilmDetail) -> String {
    let length = film.length.unwrap_or(0);
    match film.actors.as_slice() {
        [] => format!(
            "{} ({} min) - ${:.2}",
            film.title,
            length,
            film.rental_rate.unwrap_or_default()
        ),
        [only] => format!(
            "{} ({} min) starring {}",
            film.title,
            length,
            only.full_name()
        ),
        cast => format!("{} ({} min) with {} actors", film.title, length, cast.len()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use cinehub_entity::actor::ActorSummary;
    use rust_decimal::Decimal;

    fn detail(actors: Vec<ActorSummary>) -> FilmDetail {
        FilmDetail {
            film_id: 1,
            title: "AGENT TRUMAN".to_string(),
            description: None,
            release_year: Some(2006),
            length: Some(169),
            rental_rate: Some(Decimal::new(299, 2)),
            replacement_cost: None,
            rating: None,
            actors,
        }
    }

    fn actor(first: &str, last: &str) -> ActorSummary {
        ActorSummary {
            actor_id: 1,
            first_name: first.to_string(),
            last_name: last.to_string(),
        }
    }

    #[test]
    fn test_display_no_actors_shows_price() {
        assert_eq!(
            formatted_display(&detail(vec![])),
            "AGENT TRUMAN (169 min) - $2.99"
        );
    }

    #[test]
    fn test_display_single_actor_stars() {
        assert_eq!(
            formatted_display(&detail(vec![actor("KIRSTEN", "PALTROW")])),
            "AGENT TRUMAN (169 min) starring KIRSTEN PALTROW"
        );
    }

    #[test]
    fn test_display_many_actors_counts() {
        let cast = vec![actor("A", "B"), actor("C", "D"), actor("E", "F")];
        assert_eq!(
            formatted_display(&detail(cast)),
            "AGENT TRUMAN (169 min) with 3 actors"
        );
    }

    #[test]
    fn test_short_format() {
        assert_eq!(
            format_film(&detail(vec![]), "short"),
            "AGENT TRUMAN (169 min)"
        );
    }

    #[test]
    fn test_detailed_format() {
        let text = format_film(&detail(vec![actor("A", "B")]), "detailed");
        assert!(text.contains("Title: AGENT TRUMAN"));
        assert!(text.contains("Length: 169 minutes"));
        assert!(text.contains("Rental Rate: $2.99"));
        assert!(text.contains("Category: Long Film"));
        assert!(text.contains("Actors: 1"));
    }
}
