//! User aggregate
//!
//! The seeded team roster. No self-service registration; users come from
//! the `[seed]` config section on first startup.

pub mod model;
pub mod repository;

pub use model::User;
pub use repository::UserRepository;
