//! Film catalog service.

use std::collections::HashMap;
use std::sync::Arc;

use rust_decimal::Decimal;
use tracing::warn;

use cinehub_core::error::AppError;
use cinehub_core::result::AppResult;
use cinehub_core::types::pagination::PageRequest;
use cinehub_database::repositories::film::FilmRepository;
use cinehub_entity::film::LengthCategory;

use super::detail::FilmDetail;
use super::outcome::{PagedFilms, RateUpdateOutcome, SearchOutcome};
use super::stats::{self, FilmStatistics};

/// Cap on the film echo returned after a bulk rate update.
const RATE_UPDATE_ECHO_LIMIT: i64 = 100;
/// Cap on the film set considered for statistics.
const STATISTICS_LIMIT: i64 = 1000;
/// Rates above this are rejected as absurd.
const MAX_RENTAL_RATE: Decimal = Decimal::from_parts(1000, 0, 0, false, 0);

/// Business logic over the film repository.
#[derive(Debug, Clone)]
pub struct FilmService {
    film_repo: Arc<FilmRepository>,
}

impl FilmService {
    /// Create a new film service.
    pub fn new(film_repo: Arc<FilmRepository>) -> Self {
        Self { film_repo }
    }

    /// Look up a film by id with its cast.
    pub async fn find_film(&self, film_id: i32) -> AppResult<FilmDetail> {
        self.film_repo
            .find_with_actors(film_id)
            .await?
            .map(|fwa| FilmDetail::from_film_with_actors(&fwa))
            .ok_or_else(|| AppError::not_found("Film not found"))
    }

    /// One page of film summaries filtered by minimum length.
    ///
    /// `has_more` is a cheap guess: the page came back full, so a further
    /// page may exist.
    pub async fn films_paginated(
        &self,
        page: u64,
        min_length: i32,
        page_size: u64,
    ) -> AppResult<PagedFilms> {
        let request = PageRequest::new(page, page_size);
        let items = self
            .film_repo
            .find_by_minimum_length_paged(&request, min_length)
            .await?;

        let has_more = !items.is_empty() && items.len() as u64 == request.limit();
        Ok(PagedFilms {
            items,
            current_page: request.page,
            page_size: request.limit(),
            has_more,
        })
    }

    /// Search films by title prefix, with casts and category buckets.
    pub async fn search_films(&self, title_prefix: &str, min_length: i32) -> AppResult<SearchOutcome> {
        let films: Vec<FilmDetail> = self
            .film_repo
            .find_by_title_prefix_with_actors(title_prefix, min_length)
            .await?
            .iter()
            .map(FilmDetail::from_film_with_actors)
            .collect();

        let by_category = group_by_category(&films);
        Ok(SearchOutcome {
            total_count: films.len(),
            films,
            by_category,
        })
    }

    /// Apply a new rental rate to every film longer than `min_length`.
    ///
    /// Validation happens before any write; a store failure is caught and
    /// reported as [`RateUpdateOutcome::Rejected`] rather than propagated.
    pub async fn update_rental_rates(
        &self,
        min_length: i32,
        rate: Option<Decimal>,
    ) -> RateUpdateOutcome {
        let new_rate = match validate_rental_rate(rate) {
            Ok(rate) => rate,
            Err(reason) => return RateUpdateOutcome::Rejected { reason },
        };

        let films_updated = match self.film_repo.update_rental_rate(min_length, new_rate).await {
            Ok(count) => count,
            Err(e) => {
                warn!(min_length, %new_rate, error = %e, "Bulk rental-rate update failed");
                return RateUpdateOutcome::Rejected {
                    reason: format!("Update failed: {e}"),
                };
            }
        };

        let films = match self
            .film_repo
            .find_by_minimum_length(min_length, RATE_UPDATE_ECHO_LIMIT)
            .await
        {
            Ok(films) => films.iter().map(FilmDetail::summary_from_film).collect(),
            Err(e) => {
                warn!(min_length, error = %e, "Failed to echo updated films");
                return RateUpdateOutcome::Rejected {
                    reason: format!("Update failed: {e}"),
                };
            }
        };

        RateUpdateOutcome::Applied {
            films_updated,
            new_rate,
            films,
        }
    }

    /// Aggregate statistics over the films longer than `min_length`.
    pub async fn statistics(&self, min_length: i32) -> AppResult<FilmStatistics> {
        let films = self
            .film_repo
            .find_by_minimum_length(min_length, STATISTICS_LIMIT)
            .await?;
        Ok(stats::compute(&films))
    }
}

/// Validate a requested rental rate. Returns the rate or a rejection
/// reason. Runs before any write.
fn validate_rental_rate(rate: Option<Decimal>) -> Result<Decimal, String> {
    match rate {
        None => Err("Rental rate cannot be null".to_string()),
        Some(r) if r <= Decimal::ZERO => Err("Rental rate must be positive".to_string()),
        Some(r) if r > MAX_RENTAL_RATE => Err("Rental rate too high".to_string()),
        Some(r) => Ok(r),
    }
}

/// Bucket films by length category.
fn group_by_category(films: &[FilmDetail]) -> HashMap<LengthCategory, Vec<FilmDetail>> {
    let mut buckets: HashMap<LengthCategory, Vec<FilmDetail>> = HashMap::new();
    for film in films {
        buckets.entry(film.category()).or_default().push(film.clone());
    }
    buckets
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_rejects_missing_rate() {
        assert_eq!(
            validate_rental_rate(None).unwrap_err(),
            "Rental rate cannot be null"
        );
    }

    #[test]
    fn test_validate_rejects_non_positive() {
        assert_eq!(
            validate_rental_rate(Some(Decimal::ZERO)).unwrap_err(),
            "Rental rate must be positive"
        );
        assert_eq!(
            validate_rental_rate(Some(Decimal::new(-199, 2))).unwrap_err(),
            "Rental rate must be positive"
        );
    }

    #[test]
    fn test_validate_rejects_absurd_rate() {
        assert_eq!(
            validate_rental_rate(Some(Decimal::from(1001))).unwrap_err(),
            "Rental rate too high"
        );
        // 1000 exactly is still allowed.
        assert_eq!(
            validate_rental_rate(Some(Decimal::from(1000))).unwrap(),
            Decimal::from(1000)
        );
    }

    #[test]
    fn test_validate_accepts_normal_rate() {
        assert_eq!(
            validate_rental_rate(Some(Decimal::new(599, 2))).unwrap(),
            Decimal::new(599, 2)
        );
    }

    #[test]
    fn test_group_by_category() {
        let detail = |len: Option<i32>| FilmDetail {
            film_id: 0,
            title: "T".to_string(),
            description: None,
            release_year: None,
            length: len,
            rental_rate: None,
            replacement_cost: None,
            rating: None,
            actors: Vec::new(),
        };

        let films = vec![detail(Some(30)), detail(Some(95)), detail(Some(100)), detail(None)];
        let buckets = group_by_category(&films);

        assert_eq!(buckets[&LengthCategory::Short].len(), 1);
        assert_eq!(buckets[&LengthCategory::Feature].len(), 2);
        assert_eq!(buckets[&LengthCategory::Unknown].len(), 1);
        assert!(!buckets.contains_key(&LengthCategory::Epic));
    }
}
