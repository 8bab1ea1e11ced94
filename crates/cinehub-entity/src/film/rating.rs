//! MPAA rating enumeration.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// MPAA ratings carried by the `film.rating` column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, sqlx::Type)]
#[sqlx(type_name = "film_rating")]
pub enum Rating {
    /// General audiences.
    #[sqlx(rename = "G")]
    #[serde(rename = "G")]
    G,
    /// Parental guidance suggested.
    #[sqlx(rename = "PG")]
    #[serde(rename = "PG")]
    Pg,
    /// Parents strongly cautioned.
    #[sqlx(rename = "PG-13")]
    #[serde(rename = "PG-13")]
    Pg13,
    /// Restricted.
    #[sqlx(rename = "R")]
    #[serde(rename = "R")]
    R,
    /// Adults only.
    #[sqlx(rename = "NC-17")]
    #[serde(rename = "NC-17")]
    Nc17,
}

impl Rating {
    /// Return the rating as it appears in the store.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::G => "G",
            Self::Pg => "PG",
            Self::Pg13 => "PG-13",
            Self::R => "R",
            Self::Nc17 => "NC-17",
        }
    }
}

impl fmt::Display for Rating {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Rating {
    type Err = cinehub_core::AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "G" => Ok(Self::G),
            "PG" => Ok(Self::Pg),
            "PG-13" => Ok(Self::Pg13),
            "R" => Ok(Self::R),
            "NC-17" => Ok(Self::Nc17),
            _ => Err(cinehub_core::AppError::validation(format!(
                "Invalid film rating: '{s}'. Expected one of: G, PG, PG-13, R, NC-17"
            ))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_round_trip() {
        for s in ["G", "PG", "PG-13", "R", "NC-17"] {
            assert_eq!(s.parse::<Rating>().unwrap().as_str(), s);
        }
        assert!("PG13".parse::<Rating>().is_err());
    }
}
