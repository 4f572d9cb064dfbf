use async_trait::async_trait;

use crate::auth::application::domain::entities::UserId;
use crate::profile::application::domain::entities::ProfileWithPortfolio;

#[derive(Debug, Clone, thiserror::Error)]
pub enum GetProfileForEditError {
    #[error("Profile not found")]
    NotFound,

    #[error("Failed to fetch profile: {0}")]
    QueryFailed(String),
}

#[async_trait]
pub trait GetProfileForEditUseCase: Send + Sync {
    async fn execute(&self, user_id: UserId)
        -> Result<ProfileWithPortfolio, GetProfileForEditError>;
}
