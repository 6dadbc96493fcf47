//! Reservation API DTOs

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use crate::domain::reservation::Reservation;

/// Request to book a slot on the workstation schedule
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct CreateReservationRequest {
    /// Id of the member booking the slot
    #[validate(range(min = 1))]
    pub user_id: i32,
    /// Calendar date, `YYYY-MM-DD`
    #[schema(example = "2025-06-02")]
    pub date: String,
    /// Slot start, `HH:MM` or `HH:MM:SS`
    #[schema(example = "09:00")]
    pub start_time: String,
    /// Slot end (exclusive), `HH:MM` or `HH:MM:SS`
    #[schema(example = "10:30")]
    pub end_time: String,
}

/// A reservation as returned by the API
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ReservationDto {
    pub id: i32,
    pub user_id: i32,
    pub user_name: String,
    /// `YYYY-MM-DD`
    pub date: String,
    /// `HH:MM:SS`
    pub start_time: String,
    /// `HH:MM:SS`, exclusive
    pub end_time: String,
    /// RFC 3339 creation timestamp
    pub created_at: String,
}

impl From<Reservation> for ReservationDto {
    fn from(r: Reservation) -> Self {
        Self {
            id: r.id,
            user_id: r.user_id,
            user_name: r.user_name,
            date: r.date.to_string(),
            start_time: r.slot.start.format("%H:%M:%S").to_string(),
            end_time: r.slot.end.format("%H:%M:%S").to_string(),
            created_at: r.created_at.to_rfc3339(),
        }
    }
}
