use crate::domain::errors::DomainResult;
use crate::domain::user::entity::UserProfile;
use crate::domain::user::value_objects::UserId;
use async_trait::async_trait;

#[async_trait]
pub trait UserProfileRepository: Send + Sync {
    /// Fetch profiles for the given ids. Unknown ids are absent from the
    /// result rather than an error.
    async fn find_by_ids(&self, ids: &[UserId]) -> DomainResult<Vec<UserProfile>>;
}
