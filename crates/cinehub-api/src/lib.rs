//! # cinehub-api
//!
//! HTTP API layer for CineHub built on Axum.
//!
//! Provides the v1 plain-text and v2 JSON film endpoints, health checks,
//! request DTOs, and error mapping.

pub mod app;
pub mod dto;
pub mod error;
pub mod handlers;
pub mod router;
pub mod state;

pub use app::{build_app, build_state, run_server};
pub use state::AppState;
