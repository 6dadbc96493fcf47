//! Reservation aggregate
//!
//! Contains the reservation entity, the time slot model, overlap
//! validation, and the repository interface.

pub mod model;
pub mod overlap;
pub mod repository;

pub use model::{NewReservation, Reservation, TimeSlot};
pub use repository::ReservationRepository;
