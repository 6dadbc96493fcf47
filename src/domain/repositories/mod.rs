//! Repository provider for the domain layer

use super::holder::CurrentHolderRepository;
use super::reservation::ReservationRepository;
use super::user::UserRepository;

/// Provides access to all domain repositories.
///
/// Consumers request only the repository they need:
///
/// ```ignore
/// async fn handle(repos: &dyn RepositoryProvider) {
///     let users = repos.users().find_all().await?;
///     let today = repos.reservations().find_by_date(date).await?;
/// }
/// ```
pub trait RepositoryProvider: Send + Sync {
    fn users(&self) -> &dyn UserRepository;
    fn reservations(&self) -> &dyn ReservationRepository;
    fn current_holder(&self) -> &dyn CurrentHolderRepository;
}
