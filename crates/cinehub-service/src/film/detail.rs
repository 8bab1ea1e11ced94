//! Film detail view returned by the service layer.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use cinehub_entity::actor::ActorSummary;
use cinehub_entity::film::{Film, FilmWithActors, LengthCategory, Rating};

/// A film with its cast, shaped for responses.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FilmDetail {
    /// Unique film identifier.
    pub film_id: i32,
    /// Film title.
    pub title: String,
    /// Plot description.
    pub description: Option<String>,
    /// Year of release.
    pub release_year: Option<i16>,
    /// Running time in minutes.
    pub length: Option<i32>,
    /// Rental price.
    pub rental_rate: Option<Decimal>,
    /// Cost to replace a lost copy.
    pub replacement_cost: Option<Decimal>,
    /// MPAA rating.
    pub rating: Option<Rating>,
    /// Credited actors. Empty for summary views.
    pub actors: Vec<ActorSummary>,
}

impl FilmDetail {
    /// Build a detail view from a film and its eagerly loaded cast.
    pub fn from_film_with_actors(fwa: &FilmWithActors) -> Self {
        let mut detail = Self::summary_from_film(&fwa.film);
        detail.actors = fwa.actors.iter().map(ActorSummary::from).collect();
        detail
    }

    /// Build a summary view (no cast) from a bare film row.
    pub fn summary_from_film(film: &Film) -> Self {
        Self {
            film_id: film.film_id,
            title: film.title.clone(),
            description: film.description.clone(),
            release_year: film.release_year,
            length: film.length,
            rental_rate: film.rental_rate,
            replacement_cost: film.replacement_cost,
            rating: film.rating,
            actors: Vec::new(),
        }
    }

    /// Classify the film by running time.
    pub fn category(&self) -> LengthCategory {
        LengthCategory::classify(self.length)
    }
}
