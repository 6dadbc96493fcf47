//! Core business entities, types and traits

pub mod error;
pub mod holder;
pub mod repositories;
pub mod reservation;
pub mod user;

// Re-export commonly used types
pub use error::{DomainError, DomainResult};
pub use holder::{CurrentHolder, CurrentHolderRepository};
pub use repositories::RepositoryProvider;
pub use reservation::{NewReservation, Reservation, ReservationRepository, TimeSlot};
pub use user::{User, UserRepository};
