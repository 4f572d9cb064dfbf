use async_trait::async_trait;

use crate::auth::application::domain::entities::UserId;
use crate::profile::application::domain::entities::PortfolioItemId;

#[derive(Debug, Clone, thiserror::Error)]
pub enum RemovePortfolioItemError {
    #[error("Portfolio item not found")]
    NotFound,

    #[error("You are not the owner of this portfolio item")]
    Forbidden,

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

#[async_trait]
pub trait RemovePortfolioItemUseCase: Send + Sync {
    async fn execute(
        &self,
        requester: UserId,
        item_id: PortfolioItemId,
    ) -> Result<(), RemovePortfolioItemError>;
}
