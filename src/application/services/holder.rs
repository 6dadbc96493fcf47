//! Current-holder business logic service

use std::sync::Arc;

use log::info;

use crate::domain::error::{DomainError, DomainResult};
use crate::domain::holder::CurrentHolder;
use crate::domain::repositories::RepositoryProvider;
use crate::notifications::{CurrentHolderChangedEvent, Event, SharedEventBus};

/// Service for tracking who is physically at the workstation right now.
///
/// Claims replace the previous holder unconditionally; a claim never
/// checks the schedule.
pub struct CurrentHolderService {
    repos: Arc<dyn RepositoryProvider>,
    event_bus: SharedEventBus,
}

pub type SharedCurrentHolderService = Arc<CurrentHolderService>;

impl CurrentHolderService {
    pub fn new(repos: Arc<dyn RepositoryProvider>, event_bus: SharedEventBus) -> Self {
        Self { repos, event_bus }
    }

    /// The current holder, if anyone has claimed the workstation yet.
    pub async fn current(&self) -> DomainResult<Option<CurrentHolder>> {
        self.repos.current_holder().get().await
    }

    /// Record that `user_id` is now at the workstation.
    pub async fn claim(&self, user_id: i32) -> DomainResult<CurrentHolder> {
        if self.repos.users().find_by_id(user_id).await?.is_none() {
            return Err(DomainError::NotFound {
                entity: "User",
                field: "id",
                value: user_id.to_string(),
            });
        }

        let holder = self.repos.current_holder().set(user_id).await?;

        info!(
            "Workstation claimed by {} (user {})",
            holder.user_name, holder.user_id
        );
        metrics::counter!("holder_claims_total").increment(1);

        self.event_bus
            .publish(Event::CurrentHolderChanged(CurrentHolderChangedEvent {
                user_id: holder.user_id,
                user_name: holder.user_name.clone(),
                claimed_at: holder.claimed_at,
            }));

        Ok(holder)
    }
}

// ── Tests ──────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::InMemoryRepositories;
    use crate::notifications::create_event_bus;
    use std::time::Duration;

    fn service() -> (CurrentHolderService, SharedEventBus) {
        let repos: Arc<dyn RepositoryProvider> =
            Arc::new(InMemoryRepositories::with_members(&["Member 1", "Member 2"]));
        let bus = create_event_bus();
        (CurrentHolderService::new(repos, bus.clone()), bus)
    }

    #[tokio::test]
    async fn nobody_holds_the_workstation_initially() {
        let (svc, _bus) = service();
        assert!(svc.current().await.unwrap().is_none());
    }

    #[tokio::test]
    async fn claim_publishes_holder_event() {
        let (svc, bus) = service();
        let mut sub = bus.subscribe();

        let holder = svc.claim(2).await.unwrap();
        assert_eq!(holder.user_name, "Member 2");

        let msg = tokio::time::timeout(Duration::from_millis(100), sub.recv())
            .await
            .expect("Timeout")
            .expect("No message");
        match msg.event {
            Event::CurrentHolderChanged(e) => {
                assert_eq!(e.user_id, 2);
                assert_eq!(e.user_name, "Member 2");
            }
            other => panic!("unexpected event: {:?}", other),
        }
    }

    #[tokio::test]
    async fn claim_replaces_previous_holder() {
        let (svc, _bus) = service();
        svc.claim(1).await.unwrap();
        svc.claim(2).await.unwrap();

        let current = svc.current().await.unwrap().unwrap();
        assert_eq!(current.user_id, 2);
    }

    #[tokio::test]
    async fn claim_by_unknown_user_is_rejected_and_silent() {
        let (svc, bus) = service();
        let mut sub = bus.subscribe();

        let err = svc.claim(99).await.unwrap_err();
        assert!(matches!(
            err,
            DomainError::NotFound { entity: "User", .. }
        ));
        assert!(svc.current().await.unwrap().is_none());

        let silent = tokio::time::timeout(Duration::from_millis(50), sub.recv()).await;
        assert!(silent.is_err(), "rejected claim must not publish");
    }
}
