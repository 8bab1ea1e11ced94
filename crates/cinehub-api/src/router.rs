//! Route definitions for the CineHub HTTP API.
//!
//! All routes are mounted under `/api`. The router receives `AppState`
//! and passes it to all handlers via Axum's `State` extractor.

use axum::{
    Router,
    routing::{get, put},
};
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::handlers;
use crate::state::AppState;

/// Build the complete Axum router with all routes and middleware.
pub fn build_router(state: AppState) -> Router {
    let api_routes = Router::new()
        .merge(film_routes())
        .merge(film_v2_routes())
        .merge(actor_routes())
        .merge(health_routes());

    let cors = build_cors_layer(&state);

    Router::new()
        .nest("/api", api_routes)
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}

/// v1 plain-text film endpoints.
fn film_routes() -> Router<AppState> {
    Router::new()
        .route("/films/{id}", get(handlers::films_text::get_film))
        .route("/films/paged", get(handlers::films_text::films_paged))
        .route("/films/search", get(handlers::films_text::search_films))
        .route(
            "/films/rental-rate",
            put(handlers::films_text::update_rental_rate),
        )
}

/// v2 JSON film endpoints.
fn film_v2_routes() -> Router<AppState> {
    Router::new()
        .route("/v2/films", get(handlers::films::films_paginated))
        .route("/v2/films/{id}", get(handlers::films::get_film))
        .route("/v2/films/search", get(handlers::films::search_films))
        .route(
            "/v2/films/rental-rate",
            put(handlers::films::update_rental_rate),
        )
        .route("/v2/films/statistics", get(handlers::films::statistics))
        .route(
            "/v2/films/{id}/formatted",
            get(handlers::films::get_film_formatted),
        )
}

/// v2 JSON actor endpoints (read-only).
fn actor_routes() -> Router<AppState> {
    Router::new()
        .route("/v2/actors/{id}", get(handlers::actors::get_actor))
        .route(
            "/v2/actors/{id}/films",
            get(handlers::actors::get_actor_films),
        )
}

/// Health check endpoints.
fn health_routes() -> Router<AppState> {
    Router::new()
        .route("/health", get(handlers::health::health))
        .route("/health/detailed", get(handlers::health::health_detailed))
}

/// Build CORS layer from configuration.
fn build_cors_layer(state: &AppState) -> CorsLayer {
    let cors_config = &state.config.server.cors;

    let mut cors = CorsLayer::new()
        .allow_methods(Any)
        .allow_headers(Any)
        .max_age(std::time::Duration::from_secs(cors_config.max_age_seconds));

    if cors_config.allowed_origins.contains(&"*".to_string()) {
        cors = cors.allow_origin(Any);
    } else {
        let origins: Vec<axum::http::HeaderValue> = cors_config
            .allowed_origins
            .iter()
            .filter_map(|o| o.parse().ok())
            .collect();
        cors = cors.allow_origin(origins);
    }

    cors
}
