//! Application services

mod holder;
mod reservation;

pub use holder::{CurrentHolderService, SharedCurrentHolderService};
pub use reservation::{ReservationService, SharedReservationService};
