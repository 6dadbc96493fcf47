//! SeaORM implementation of CurrentHolderRepository
//!
//! The holder lives in a single fixed row; `set` is an atomic upsert on
//! that row, so concurrent claims resolve to last-write-wins without a
//! read-modify-write window.

use async_trait::async_trait;
use chrono::Utc;
use log::debug;
use sea_orm::sea_query::OnConflict;
use sea_orm::{DatabaseConnection, EntityTrait, Set};

use crate::domain::error::{DomainError, DomainResult};
use crate::domain::holder::{CurrentHolder, CurrentHolderRepository};
use crate::infrastructure::database::entities::{current_holder, user};

pub struct SeaOrmCurrentHolderRepository {
    db: DatabaseConnection,
}

impl SeaOrmCurrentHolderRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

fn db_err(e: sea_orm::DbErr) -> DomainError {
    DomainError::Storage(e.to_string())
}

#[async_trait]
impl CurrentHolderRepository for SeaOrmCurrentHolderRepository {
    async fn get(&self) -> DomainResult<Option<CurrentHolder>> {
        let row = current_holder::Entity::find_by_id(current_holder::SINGLETON_ID)
            .find_also_related(user::Entity)
            .one(&self.db)
            .await
            .map_err(db_err)?;

        Ok(row.map(|(holder, owner)| CurrentHolder {
            user_id: holder.user_id,
            user_name: owner.map(|u| u.name).unwrap_or_default(),
            claimed_at: holder.claimed_at,
        }))
    }

    async fn set(&self, user_id: i32) -> DomainResult<CurrentHolder> {
        debug!("Recording workstation claim by user {}", user_id);

        let model = current_holder::ActiveModel {
            id: Set(current_holder::SINGLETON_ID),
            user_id: Set(user_id),
            claimed_at: Set(Utc::now()),
        };

        current_holder::Entity::insert(model)
            .on_conflict(
                OnConflict::column(current_holder::Column::Id)
                    .update_columns([
                        current_holder::Column::UserId,
                        current_holder::Column::ClaimedAt,
                    ])
                    .to_owned(),
            )
            .exec(&self.db)
            .await
            .map_err(db_err)?;

        match self.get().await? {
            Some(holder) => Ok(holder),
            None => Err(DomainError::Storage(
                "current holder row missing after upsert".to_string(),
            )),
        }
    }
}
