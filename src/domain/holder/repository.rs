//! Current-holder repository interface

use async_trait::async_trait;

use super::model::CurrentHolder;
use crate::domain::DomainResult;

#[async_trait]
pub trait CurrentHolderRepository: Send + Sync {
    /// The current holder, or `None` when nobody has claimed the machine.
    async fn get(&self) -> DomainResult<Option<CurrentHolder>>;

    /// Record `user_id` as the holder, unconditionally replacing any
    /// previous one.
    ///
    /// Must be atomic: concurrent calls settle last-write-wins with no
    /// observable zero-holder or two-holder state.
    async fn set(&self, user_id: i32) -> DomainResult<CurrentHolder>;
}
