//! # cinehub-service
//!
//! Business logic for the CineHub catalog. Services validate request
//! parameters, orchestrate the repositories, and shape results into
//! outcome types the API layer can render directly.

pub mod film;
