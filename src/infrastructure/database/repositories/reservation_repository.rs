//! SeaORM implementation of ReservationRepository

use async_trait::async_trait;
use chrono::{NaiveDate, Utc};
use log::debug;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder, Set,
};

use crate::domain::error::{DomainError, DomainResult};
use crate::domain::reservation::{NewReservation, Reservation, ReservationRepository, TimeSlot};
use crate::infrastructure::database::entities::{reservation, user};

pub struct SeaOrmReservationRepository {
    db: DatabaseConnection,
}

impl SeaOrmReservationRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

// ── Conversion helpers ──────────────────────────────────────────

fn model_to_domain(m: reservation::Model, user_name: String) -> Reservation {
    Reservation {
        id: m.id,
        user_id: m.user_id,
        user_name,
        date: m.date,
        slot: TimeSlot {
            start: m.start_time,
            end: m.end_time,
        },
        created_at: m.created_at,
    }
}

fn row_to_domain((m, owner): (reservation::Model, Option<user::Model>)) -> Reservation {
    let user_name = owner.map(|u| u.name).unwrap_or_default();
    model_to_domain(m, user_name)
}

fn db_err(e: sea_orm::DbErr) -> DomainError {
    DomainError::Storage(e.to_string())
}

// ── ReservationRepository impl ──────────────────────────────────

#[async_trait]
impl ReservationRepository for SeaOrmReservationRepository {
    async fn insert(&self, new: NewReservation) -> DomainResult<Reservation> {
        debug!(
            "Inserting reservation for user {} on {} at {}",
            new.user_id, new.date, new.slot
        );

        let model = reservation::ActiveModel {
            user_id: Set(new.user_id),
            date: Set(new.date),
            start_time: Set(new.slot.start),
            end_time: Set(new.slot.end),
            created_at: Set(Utc::now()),
            ..Default::default()
        };
        let inserted = model.insert(&self.db).await.map_err(db_err)?;

        let owner = user::Entity::find_by_id(inserted.user_id)
            .one(&self.db)
            .await
            .map_err(db_err)?;

        Ok(model_to_domain(
            inserted,
            owner.map(|u| u.name).unwrap_or_default(),
        ))
    }

    async fn find_all(&self) -> DomainResult<Vec<Reservation>> {
        let rows = reservation::Entity::find()
            .find_also_related(user::Entity)
            .order_by_asc(reservation::Column::Date)
            .order_by_asc(reservation::Column::StartTime)
            .all(&self.db)
            .await
            .map_err(db_err)?;

        Ok(rows.into_iter().map(row_to_domain).collect())
    }

    async fn find_by_date(&self, date: NaiveDate) -> DomainResult<Vec<Reservation>> {
        let rows = reservation::Entity::find()
            .find_also_related(user::Entity)
            .filter(reservation::Column::Date.eq(date))
            .order_by_asc(reservation::Column::StartTime)
            .all(&self.db)
            .await
            .map_err(db_err)?;

        Ok(rows.into_iter().map(row_to_domain).collect())
    }

    async fn delete_by_id(&self, id: i32) -> DomainResult<Reservation> {
        debug!("Deleting reservation: {}", id);

        let row = reservation::Entity::find_by_id(id)
            .find_also_related(user::Entity)
            .one(&self.db)
            .await
            .map_err(db_err)?;

        let Some(row) = row else {
            return Err(DomainError::NotFound {
                entity: "Reservation",
                field: "id",
                value: id.to_string(),
            });
        };

        let result = reservation::Entity::delete_by_id(id)
            .exec(&self.db)
            .await
            .map_err(db_err)?;

        // A concurrent delete may have won between the lookup and here.
        if result.rows_affected == 0 {
            return Err(DomainError::NotFound {
                entity: "Reservation",
                field: "id",
                value: id.to_string(),
            });
        }

        Ok(row_to_domain(row))
    }
}
