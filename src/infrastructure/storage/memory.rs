//! In-memory storage implementation
//!
//! Backs every repository trait with DashMaps, for tests and for running
//! without a SQLite file. Semantics mirror the SeaORM repositories,
//! including sort order and the single-row holder replace.

use std::sync::atomic::{AtomicI32, Ordering};

use async_trait::async_trait;
use chrono::{NaiveDate, Utc};
use dashmap::DashMap;

use crate::domain::error::{DomainError, DomainResult};
use crate::domain::holder::{CurrentHolder, CurrentHolderRepository};
use crate::domain::repositories::RepositoryProvider;
use crate::domain::reservation::{NewReservation, Reservation, ReservationRepository};
use crate::domain::user::{User, UserRepository};

const HOLDER_KEY: i32 = 1;

/// In-memory repositories for development and testing
pub struct InMemoryRepositories {
    users: DashMap<i32, User>,
    reservations: DashMap<i32, Reservation>,
    holder: DashMap<i32, CurrentHolder>,
    user_counter: AtomicI32,
    reservation_counter: AtomicI32,
}

impl InMemoryRepositories {
    pub fn new() -> Self {
        Self {
            users: DashMap::new(),
            reservations: DashMap::new(),
            holder: DashMap::new(),
            user_counter: AtomicI32::new(1),
            reservation_counter: AtomicI32::new(1),
        }
    }

    /// Seeds the given member names, as the server does on first boot.
    pub fn with_members(names: &[&str]) -> Self {
        let repos = Self::new();
        for name in names {
            let id = repos.user_counter.fetch_add(1, Ordering::SeqCst);
            repos.users.insert(id, User::new(id, *name));
        }
        repos
    }

    fn user_name(&self, user_id: i32) -> String {
        self.users
            .get(&user_id)
            .map(|u| u.name.clone())
            .unwrap_or_default()
    }
}

impl Default for InMemoryRepositories {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl UserRepository for InMemoryRepositories {
    async fn find_all(&self) -> DomainResult<Vec<User>> {
        let mut users: Vec<User> = self.users.iter().map(|e| e.value().clone()).collect();
        users.sort_by_key(|u| u.id);
        Ok(users)
    }

    async fn find_by_id(&self, id: i32) -> DomainResult<Option<User>> {
        Ok(self.users.get(&id).map(|u| u.clone()))
    }

    async fn insert(&self, name: &str) -> DomainResult<User> {
        let id = self.user_counter.fetch_add(1, Ordering::SeqCst);
        let user = User::new(id, name);
        self.users.insert(id, user.clone());
        Ok(user)
    }

    async fn count(&self) -> DomainResult<u64> {
        Ok(self.users.len() as u64)
    }
}

#[async_trait]
impl ReservationRepository for InMemoryRepositories {
    async fn insert(&self, new: NewReservation) -> DomainResult<Reservation> {
        let id = self.reservation_counter.fetch_add(1, Ordering::SeqCst);
        let reservation = Reservation {
            id,
            user_id: new.user_id,
            user_name: self.user_name(new.user_id),
            date: new.date,
            slot: new.slot,
            created_at: Utc::now(),
        };
        self.reservations.insert(id, reservation.clone());
        Ok(reservation)
    }

    async fn find_all(&self) -> DomainResult<Vec<Reservation>> {
        let mut all: Vec<Reservation> =
            self.reservations.iter().map(|e| e.value().clone()).collect();
        all.sort_by_key(|r| (r.date, r.slot.start));
        Ok(all)
    }

    async fn find_by_date(&self, date: NaiveDate) -> DomainResult<Vec<Reservation>> {
        let mut on_date: Vec<Reservation> = self
            .reservations
            .iter()
            .filter(|e| e.value().date == date)
            .map(|e| e.value().clone())
            .collect();
        on_date.sort_by_key(|r| r.slot.start);
        Ok(on_date)
    }

    async fn delete_by_id(&self, id: i32) -> DomainResult<Reservation> {
        match self.reservations.remove(&id) {
            Some((_, reservation)) => Ok(reservation),
            None => Err(DomainError::NotFound {
                entity: "Reservation",
                field: "id",
                value: id.to_string(),
            }),
        }
    }
}

#[async_trait]
impl CurrentHolderRepository for InMemoryRepositories {
    async fn get(&self) -> DomainResult<Option<CurrentHolder>> {
        Ok(self.holder.get(&HOLDER_KEY).map(|h| h.clone()))
    }

    async fn set(&self, user_id: i32) -> DomainResult<CurrentHolder> {
        let holder = CurrentHolder {
            user_id,
            user_name: self.user_name(user_id),
            claimed_at: Utc::now(),
        };
        // DashMap::insert replaces the previous entry in one step.
        self.holder.insert(HOLDER_KEY, holder.clone());
        Ok(holder)
    }
}

impl RepositoryProvider for InMemoryRepositories {
    fn users(&self) -> &dyn UserRepository {
        self
    }

    fn reservations(&self) -> &dyn ReservationRepository {
        self
    }

    fn current_holder(&self) -> &dyn CurrentHolderRepository {
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::reservation::TimeSlot;
    use chrono::NaiveTime;

    fn slot(start: (u32, u32), end: (u32, u32)) -> TimeSlot {
        TimeSlot {
            start: NaiveTime::from_hms_opt(start.0, start.1, 0).unwrap(),
            end: NaiveTime::from_hms_opt(end.0, end.1, 0).unwrap(),
        }
    }

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[tokio::test]
    async fn insert_assigns_sequential_ids_and_owner_name() {
        let repos = InMemoryRepositories::with_members(&["Member 1", "Member 2"]);

        let first = ReservationRepository::insert(
            &repos,
            NewReservation {
                user_id: 2,
                date: date(2025, 6, 2),
                slot: slot((9, 0), (10, 0)),
            },
        )
        .await
        .unwrap();
        let second = ReservationRepository::insert(
            &repos,
            NewReservation {
                user_id: 1,
                date: date(2025, 6, 2),
                slot: slot((10, 0), (11, 0)),
            },
        )
        .await
        .unwrap();

        assert_eq!(first.id, 1);
        assert_eq!(second.id, 2);
        assert_eq!(first.user_name, "Member 2");
        assert_eq!(second.user_name, "Member 1");
    }

    #[tokio::test]
    async fn find_all_sorts_by_date_then_start() {
        let repos = InMemoryRepositories::with_members(&["Member 1"]);
        for (d, s) in [
            (date(2025, 6, 3), (9, 0)),
            (date(2025, 6, 2), (14, 0)),
            (date(2025, 6, 2), (9, 0)),
        ] {
            ReservationRepository::insert(
                &repos,
                NewReservation {
                    user_id: 1,
                    date: d,
                    slot: slot(s, (s.0 + 1, s.1)),
                },
            )
            .await
            .unwrap();
        }

        let all = ReservationRepository::find_all(&repos).await.unwrap();
        let order: Vec<(NaiveDate, u32)> = all
            .iter()
            .map(|r| (r.date, r.slot.start.format("%H").to_string().parse().unwrap()))
            .collect();
        assert_eq!(
            order,
            vec![
                (date(2025, 6, 2), 9),
                (date(2025, 6, 2), 14),
                (date(2025, 6, 3), 9),
            ]
        );
    }

    #[tokio::test]
    async fn delete_returns_row_then_not_found() {
        let repos = InMemoryRepositories::with_members(&["Member 1"]);
        let created = ReservationRepository::insert(
            &repos,
            NewReservation {
                user_id: 1,
                date: date(2025, 6, 2),
                slot: slot((9, 0), (10, 0)),
            },
        )
        .await
        .unwrap();

        let removed = repos.delete_by_id(created.id).await.unwrap();
        assert_eq!(removed.id, created.id);

        let err = repos.delete_by_id(created.id).await.unwrap_err();
        assert!(matches!(err, DomainError::NotFound { .. }));
    }

    #[tokio::test]
    async fn holder_set_replaces_previous() {
        let repos = InMemoryRepositories::with_members(&["Member 1", "Member 2"]);
        assert!(CurrentHolderRepository::get(&repos).await.unwrap().is_none());

        repos.set(1).await.unwrap();
        let replaced = repos.set(2).await.unwrap();
        assert_eq!(replaced.user_name, "Member 2");

        let current = CurrentHolderRepository::get(&repos).await.unwrap().unwrap();
        assert_eq!(current.user_id, 2);
    }
}
