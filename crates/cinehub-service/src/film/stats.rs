//! Rental-rate and length statistics over a film set.

use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};

use cinehub_entity::film::Film;

/// Aggregate statistics over the films matching a length filter.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FilmStatistics {
    /// Number of films considered.
    pub total_films: usize,
    /// Mean rental rate, rounded half-up to two decimal places.
    pub average_rental_rate: Decimal,
    /// Highest rental rate.
    pub max_rental_rate: Decimal,
    /// Shortest running time in the set.
    pub min_length: i32,
    /// Longest running time in the set.
    pub max_length: i32,
}

impl FilmStatistics {
    /// The all-zero record returned when no films match.
    pub fn empty() -> Self {
        Self {
            total_films: 0,
            average_rental_rate: Decimal::ZERO,
            max_rental_rate: Decimal::ZERO,
            min_length: 0,
            max_length: 0,
        }
    }
}

/// Compute statistics over a film set. Films without a rate are skipped
/// for the rate aggregates; films without a length are skipped for the
/// length bounds.
pub fn compute(films: &[Film]) -> FilmStatistics {
    if films.is_empty() {
        return FilmStatistics::empty();
    }

    let rates: Vec<Decimal> = films.iter().filter_map(|f| f.rental_rate).collect();
    let (average_rental_rate, max_rental_rate) = if rates.is_empty() {
        (Decimal::ZERO, Decimal::ZERO)
    } else {
        let sum: Decimal = rates.iter().copied().sum();
        let avg = (sum / Decimal::from(rates.len()))
            .round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);
        let max = rates.iter().copied().max().unwrap_or(Decimal::ZERO);
        (avg, max)
    };

    let lengths: Vec<i32> = films.iter().filter_map(|f| f.length).collect();

    FilmStatistics {
        total_films: films.len(),
        average_rental_rate,
        max_rental_rate,
        min_length: lengths.iter().copied().min().unwrap_or(0),
        max_length: lengths.iter().copied().max().unwrap_or(0),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    fn film(length: Option<i32>, rate: Option<Decimal>) -> Film {
        Film {
            film_id: 0,
            title: "TEST FILM".to_string(),
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

    #[test]
    fn test_empty_set_yields_zero_record() {
        assert_eq!(compute(&[]), FilmStatistics::empty());
    }

    #[test]
    fn test_aggregates() {
        let films = vec![
            film(Some(60), Some(Decimal::new(99, 2))),
            film(Some(120), Some(Decimal::new(299, 2))),
            film(Some(180), Some(Decimal::new(499, 2))),
        ];
        let stats = compute(&films);
        assert_eq!(stats.total_films, 3);
        assert_eq!(stats.average_rental_rate, Decimal::new(299, 2));
        assert_eq!(stats.max_rental_rate, Decimal::new(499, 2));
        assert_eq!(stats.min_length, 60);
        assert_eq!(stats.max_length, 180);
    }

    #[test]
    fn test_average_rounds_half_up() {
        // (1.00 + 1.01 + 1.01) / 3 = 1.00666... -> 1.01
        let films = vec![
            film(Some(60), Some(Decimal::new(100, 2))),
            film(Some(60), Some(Decimal::new(101, 2))),
            film(Some(60), Some(Decimal::new(101, 2))),
        ];
        assert_eq!(compute(&films).average_rental_rate, Decimal::new(101, 2));
    }

    #[test]
    fn test_missing_rates_and_lengths_skipped() {
        let films = vec![
            film(Some(90), None),
            film(None, Some(Decimal::new(199, 2))),
        ];
        let stats = compute(&films);
        assert_eq!(stats.total_films, 2);
        assert_eq!(stats.average_rental_rate, Decimal::new(199, 2));
        assert_eq!(stats.min_length, 90);
        assert_eq!(stats.max_length, 90);
    }
}
