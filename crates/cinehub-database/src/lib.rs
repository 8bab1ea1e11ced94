//! # cinehub-database
//!
//! PostgreSQL connection management and concrete repository
//! implementations for the CineHub catalog.

pub mod connection;
pub mod migration;
pub mod repositories;

pub use connection::DatabasePool;
