//! Create current_holder table
//!
//! Holds at most one row with fixed id = 1; claims upsert on the primary
//! key, making last-write-wins replacement atomic at the store.

use sea_orm_migration::prelude::*;

use super::m20250101_000001_create_users::Users;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(CurrentHolder::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(CurrentHolder::Id)
                            .integer()
                            .not_null()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(CurrentHolder::UserId).integer().not_null())
                    .col(
                        ColumnDef::new(CurrentHolder::ClaimedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_current_holder_user")
                            .from(CurrentHolder::Table, CurrentHolder::UserId)
                            .to(Users::Table, Users::Id)
                            .on_delete(ForeignKeyAction::Restrict),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(CurrentHolder::Table).to_owned())
            .await
    }
}

#[derive(Iden)]
pub enum CurrentHolder {
    Table,
    Id,
    UserId,
    ClaimedAt,
}
