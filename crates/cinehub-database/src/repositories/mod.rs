//! Concrete repository implementations.

pub mod actor;
pub mod film;

pub use actor::ActorRepository;
pub use film::FilmRepository;
