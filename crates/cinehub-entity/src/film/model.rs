//! Film entity model.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use super::category::LengthCategory;
use super::rating::Rating;
use crate::actor::Actor;

/// A film in the catalog.
///
/// Films are loaded from the store and mutated in place by rental-rate
/// updates; they are never deleted by this system.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Film {
    /// Unique film identifier.
    pub film_id: i32,
    /// Film title. Never blank.
    pub title: String,
    /// Plot description.
    pub description: Option<String>,
    /// Year of release.
    pub release_year: Option<i16>,
    /// Rental period in days.
    pub rental_duration: i16,
    /// Rental price. Carries exactly two decimal places when present.
    pub rental_rate: Option<Decimal>,
    /// Running time in minutes.
    pub length: Option<i32>,
    /// Cost to replace a lost copy.
    pub replacement_cost: Option<Decimal>,
    /// MPAA rating.
    pub rating: Option<Rating>,
    /// When the row was last written.
    pub last_update: DateTime<Utc>,
}

impl Film {
    /// Classify the film by running time.
    pub fn category(&self) -> LengthCategory {
        LengthCategory::classify(self.length)
    }

    /// Check if the film is feature length (at least 40 minutes).
    pub fn is_feature_length(&self) -> bool {
        self.length.is_some_and(|l| l >= 40)
    }

    /// Total rental cost for the given number of days.
    pub fn rental_cost(&self, days: i64) -> Decimal {
        self.rental_rate
            .map(|rate| rate * Decimal::from(days))
            .unwrap_or_default()
    }
}

/// Narrow projection of a film for paged listings.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct FilmSummary {
    /// Unique film identifier.
    pub film_id: i32,
    /// Film title.
    pub title: String,
    /// Running time in minutes.
    pub length: Option<i32>,
}

/// A film together with its eagerly loaded cast.
///
/// Film is the owning side of the film/actor association; this struct is
/// the owning collection. The reverse lookup (films of an actor) is always
/// a derived query, never a second mutable collection.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FilmWithActors {
    /// The film.
    #[serde(flatten)]
    pub film: Film,
    /// Actors credited in the film.
    pub actors: Vec<Actor>,
}
