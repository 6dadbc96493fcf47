//! Reservation business logic service
//!
//! Admission control for the shared workstation schedule: slot validity,
//! then overlap against the same date, under a per-date lock so two
//! concurrent requests cannot both pass the check and double-book.

use std::sync::Arc;

use chrono::{Local, NaiveDate, NaiveTime};
use dashmap::DashMap;
use log::info;
use tokio::sync::Mutex;

use crate::domain::error::{DomainError, DomainResult};
use crate::domain::repositories::RepositoryProvider;
use crate::domain::reservation::overlap::ensure_no_conflict;
use crate::domain::reservation::{NewReservation, Reservation, TimeSlot};
use crate::notifications::{
    Event, ScheduleChangeReason, ScheduleChangedEvent, SharedEventBus,
};

/// Service for reservation lifecycle operations
pub struct ReservationService {
    repos: Arc<dyn RepositoryProvider>,
    event_bus: SharedEventBus,
    // One mutex per date; entries are never evicted.
    admission_locks: DashMap<NaiveDate, Arc<Mutex<()>>>,
}

pub type SharedReservationService = Arc<ReservationService>;

impl ReservationService {
    pub fn new(repos: Arc<dyn RepositoryProvider>, event_bus: SharedEventBus) -> Self {
        Self {
            repos,
            event_bus,
            admission_locks: DashMap::new(),
        }
    }

    /// Create a reservation if the slot is valid and free on its date.
    ///
    /// The overlap check and the insert run under that date's lock, so
    /// admission is serialized per date and never double-books a slot.
    pub async fn create(
        &self,
        user_id: i32,
        date: NaiveDate,
        start: NaiveTime,
        end: NaiveTime,
    ) -> DomainResult<Reservation> {
        let slot = match TimeSlot::new(start, end) {
            Ok(slot) => slot,
            Err(e) => {
                metrics::counter!("reservations_rejected_total", "reason" => "invalid_interval")
                    .increment(1);
                return Err(e);
            }
        };

        if self.repos.users().find_by_id(user_id).await?.is_none() {
            metrics::counter!("reservations_rejected_total", "reason" => "unknown_user")
                .increment(1);
            return Err(DomainError::NotFound {
                entity: "User",
                field: "id",
                value: user_id.to_string(),
            });
        }

        // Clone the Arc out before awaiting; a DashMap guard must not be
        // held across an await point.
        let date_lock = {
            let entry = self
                .admission_locks
                .entry(date)
                .or_insert_with(|| Arc::new(Mutex::new(())));
            Arc::clone(entry.value())
        };
        let _guard = date_lock.lock().await;

        let same_day = self.repos.reservations().find_by_date(date).await?;
        if let Err(e) = ensure_no_conflict(&slot, &same_day) {
            metrics::counter!("reservations_rejected_total", "reason" => "overlap").increment(1);
            return Err(e);
        }

        let created = self
            .repos
            .reservations()
            .insert(NewReservation {
                user_id,
                date,
                slot,
            })
            .await?;

        info!(
            "Reservation {} created: {} on {} at {}",
            created.id, created.user_name, created.date, created.slot
        );
        metrics::counter!("reservations_created_total").increment(1);

        self.event_bus
            .publish(Event::ScheduleChanged(ScheduleChangedEvent {
                reason: ScheduleChangeReason::Created,
                reservation_id: created.id,
                user_id: created.user_id,
                date: created.date,
                start_time: created.slot.start,
                end_time: created.slot.end,
            }));

        Ok(created)
    }

    /// Reservations that have not yet ended, soonest first.
    pub async fn upcoming(&self) -> DomainResult<Vec<Reservation>> {
        let now = Local::now().naive_local();

        let mut upcoming: Vec<Reservation> = self
            .repos
            .reservations()
            .find_all()
            .await?
            .into_iter()
            .filter(|r| r.is_upcoming(now))
            .collect();
        upcoming.sort_by_key(|r| (r.date, r.slot.start));

        Ok(upcoming)
    }

    /// Delete a reservation by id, returning the removed row.
    pub async fn delete(&self, id: i32) -> DomainResult<Reservation> {
        let deleted = self.repos.reservations().delete_by_id(id).await?;

        info!(
            "Reservation {} deleted: {} on {} at {}",
            deleted.id, deleted.user_name, deleted.date, deleted.slot
        );
        metrics::counter!("reservations_deleted_total").increment(1);

        self.event_bus
            .publish(Event::ScheduleChanged(ScheduleChangedEvent {
                reason: ScheduleChangeReason::Deleted,
                reservation_id: deleted.id,
                user_id: deleted.user_id,
                date: deleted.date,
                start_time: deleted.slot.start,
                end_time: deleted.slot.end,
            }));

        Ok(deleted)
    }
}

// ── Tests ──────────────────────────────────────────────────────
