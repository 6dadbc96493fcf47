//! User repository interface

use async_trait::async_trait;

use super::model::User;
use crate::domain::DomainResult;

#[async_trait]
pub trait UserRepository: Send + Sync {
    /// All users, ordered by id ascending.
    async fn find_all(&self) -> DomainResult<Vec<User>>;

    async fn find_by_id(&self, id: i32) -> DomainResult<Option<User>>;

    /// Insert a user with the given display name.
    async fn insert(&self, name: &str) -> DomainResult<User>;

    /// Total number of users (used by the startup seed check).
    async fn count(&self) -> DomainResult<u64>;
}
