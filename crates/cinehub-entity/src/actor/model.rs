//! Actor entity model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// An actor credited in one or more films.
///
/// Actors are purely read-accessed by this system.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Actor {
    /// Unique actor identifier.
    pub actor_id: i16,
    /// Given name. Never blank.
    pub first_name: String,
    /// Family name. Never blank.
    pub last_name: String,
    /// When the row was last written.
    pub last_update: DateTime<Utc>,
}

impl Actor {
    /// Full name, `"<first> <last>"`.
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }

    /// Initials, `"F.L."`.
    pub fn initials(&self) -> String {
        match (self.first_name.chars().next(), self.last_name.chars().next()) {
            (Some(f), Some(l)) => format!("{f}.{l}."),
            _ => String::new(),
        }
    }
}

/// Narrow projection of an actor for embedding in film responses.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct ActorSummary {
    /// Unique actor identifier.
    pub actor_id: i16,
    /// Given name.
    pub first_name: String,
    /// Family name.
    pub last_name: String,
}

impl ActorSummary {
    /// Full name, `"<first> <last>"`.
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }
}

impl From<&Actor> for ActorSummary {
    fn from(actor: &Actor) -> Self {
        Self {
            actor_id: actor.actor_id,
            first_name: actor.first_name.clone(),
            last_name: actor.last_name.clone(),
        }
    }
}
