//! Current-holder aggregate
//!
//! Single-slot register naming the user currently at the workstation.
//! Deliberately decoupled from reservations: holding requires no booking,
//! and deleting a booking never clears the holder.

pub mod model;
pub mod repository;

pub use model::CurrentHolder;
pub use repository::CurrentHolderRepository;
