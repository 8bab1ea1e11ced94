//! Response DTOs.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use cinehub_service::film::FilmDetail;

/// Standard success response wrapper.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiResponse<T: Serialize> {
    /// Whether the request was successful.
    pub success: bool,
    /// Response data.
    pub data: T,
}

impl<T: Serialize> ApiResponse<T> {
    /// Creates a successful response.
    pub fn ok(data: T) -> Self {
        Self {
            success: true,
            data,
        }
    }
}

/// Error body for v2 rejections, mirroring the update outcome shape.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorBody {
    /// Human-readable message.
    pub message: String,
    /// The offending input, when useful.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<Value>,
}

/// Body returned after a successful bulk rental-rate update.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpdateSuccessResponse {
    /// Summary message.
    pub message: String,
    /// Rows written by the bulk statement.
    pub films_updated: u64,
    /// The rate that was applied.
    pub new_rate: Decimal,
    /// Matching films after the update.
    pub films: Vec<FilmDetail>,
}

/// Health check response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    /// Status.
    pub status: String,
    /// Version.
    pub version: String,
}

/// Detailed health response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DetailedHealthResponse {
    /// Overall status.
    pub status: String,
    /// Database status.
    pub database: String,
    /// Number of films in the catalog.
    pub films: u64,
}
