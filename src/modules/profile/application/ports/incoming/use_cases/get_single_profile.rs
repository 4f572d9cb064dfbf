use async_trait::async_trait;

use crate::profile::application::domain::entities::{ProfileId, ProfileWithFirstItem};

#[derive(Debug, Clone, thiserror::Error)]
pub enum GetSingleProfileError {
    #[error("Profile not found")]
    NotFound,

    #[error("Failed to fetch profile: {0}")]
    QueryFailed(String),
}

#[async_trait]
pub trait GetSingleProfileUseCase: Send + Sync {
    async fn execute(&self, id: ProfileId) -> Result<ProfileWithFirstItem, GetSingleProfileError>;
}
