//! Database entities module

pub mod current_holder;
pub mod reservation;
pub mod user;

pub use current_holder::Entity as CurrentHolder;
pub use reservation::Entity as Reservation;
pub use user::Entity as User;
