//! API Handlers

pub mod health;
pub mod holder;
pub mod metrics;
pub mod reservations;
pub mod users;

pub use health::HealthState;
pub use holder::HolderAppState;
pub use metrics::MetricsState;
pub use reservations::ReservationAppState;
pub use users::UserAppState;
