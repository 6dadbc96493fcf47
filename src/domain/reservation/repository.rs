//! Reservation repository interface

use async_trait::async_trait;
use chrono::NaiveDate;

use super::model::{NewReservation, Reservation};
use crate::domain::DomainResult;

#[async_trait]
pub trait ReservationRepository: Send + Sync {
    /// Persist a new reservation and return the stored row
    /// (id assigned, user name joined).
    async fn insert(&self, new: NewReservation) -> DomainResult<Reservation>;

    /// All reservations, ordered by date ascending.
    ///
    /// Ordering within one date is unspecified; callers sort as needed.
    async fn find_all(&self) -> DomainResult<Vec<Reservation>>;

    /// Reservations on exactly the given date.
    async fn find_by_date(&self, date: NaiveDate) -> DomainResult<Vec<Reservation>>;

    /// Remove a reservation and return it; `NotFound` when absent.
    async fn delete_by_id(&self, id: i32) -> DomainResult<Reservation>;
}
