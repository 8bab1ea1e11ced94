//! Service outcome types.

use std::collections::HashMap;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use cinehub_entity::film::{FilmSummary, LengthCategory};

use super::detail::FilmDetail;

/// One page of film summaries.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PagedFilms {
    /// The films on this page.
    pub items: Vec<FilmSummary>,
    /// Zero-based page number.
    pub current_page: u64,
    /// Requested page size.
    pub page_size: u64,
    /// Whether a further page may exist (this page came back full).
    pub has_more: bool,
}

impl PagedFilms {
    /// First film on the page, if any.
    pub fn first(&self) -> Option<&FilmSummary> {
        self.items.first()
    }

    /// Last film on the page, if any.
    pub fn last(&self) -> Option<&FilmSummary> {
        self.items.last()
    }
}

/// Result of a title-prefix search, with films grouped by length category.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchOutcome {
    /// Matching films, longest first.
    pub films: Vec<FilmDetail>,
    /// Number of matches.
    pub total_count: usize,
    /// The same films bucketed by length category.
    pub by_category: HashMap<LengthCategory, Vec<FilmDetail>>,
}

/// Outcome of the bulk rental-rate update.
///
/// A rejected update — bad rate or store failure — is reported through
/// this type, never propagated as a raw error.
#[derive(Debug, Clone)]
pub enum RateUpdateOutcome {
    /// The update ran; carries the affected count and an echo of the
    /// matching films (capped).
    Applied {
        /// Rows written by the bulk statement.
        films_updated: u64,
        /// The rate that was applied.
        new_rate: Decimal,
        /// Matching films after the update, shortest first.
        films: Vec<FilmDetail>,
    },
    /// The update did not run, or failed at the store.
    Rejected {
        /// Human-readable reason.
        reason: String,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    fn summary(id: i32) -> FilmSummary {
        FilmSummary {
            film_id: id,
            title: format!("FILM {id}"),
            length: Some(90),
        }
    }

    #[test]
    fn test_paged_first_last() {
        let page = PagedFilms {
            items: vec![summary(1), summary(2), summary(3)],
            current_page: 0,
            page_size: 20,
            has_more: false,
        };
        assert_eq!(page.first().unwrap().film_id, 1);
        assert_eq!(page.last().unwrap().film_id, 3);

        let empty = PagedFilms {
            items: Vec::new(),
            current_page: 0,
            page_size: 20,
            has_more: false,
        };
        assert!(empty.first().is_none());
        assert!(empty.last().is_none());
    }
}
