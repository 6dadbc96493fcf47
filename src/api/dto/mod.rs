//! API data transfer objects

pub mod common;
pub mod holder;
pub mod reservation;
pub mod user;

pub use common::ApiResponse;
pub use holder::{ClaimWorkstationRequest, CurrentHolderDto};
pub use reservation::{CreateReservationRequest, ReservationDto};
pub use user::UserDto;
