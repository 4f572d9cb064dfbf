use async_trait::async_trait;
use tracing::{info, warn};

use crate::auth::application::domain::entities::UserId;
use crate::profile::application::domain::entities::PortfolioItemId;
use crate::profile::application::ports::incoming::use_cases::{
    RemovePortfolioItemError, RemovePortfolioItemUseCase,
};
use crate::profile::application::ports::outgoing::{
    ImageStorage, PortfolioRepository, PortfolioRepositoryError, ProfileQuery,
};

pub struct RemovePortfolioItemService<P, Q, S>
where
    P: PortfolioRepository,
    Q: ProfileQuery,
    S: ImageStorage,
{
    portfolio: P,
    query: Q,
    storage: S,
}

impl<P, Q, S> RemovePortfolioItemService<P, Q, S>
where
    P: PortfolioRepository,
    Q: ProfileQuery,
    S: ImageStorage,
{
    pub fn new(portfolio: P, query: Q, storage: S) -> Self {
        Self {
            portfolio,
            query,
            storage,
        }
    }
}

#[async_trait]
impl<P, Q, S> RemovePortfolioItemUseCase for RemovePortfolioItemService<P, Q, S>
where
    P: PortfolioRepository + Send + Sync,
    Q: ProfileQuery + Send + Sync,
    S: ImageStorage + Send + Sync,
{
    async fn execute(
        &self,
        requester: UserId,
        item_id: PortfolioItemId,
    ) -> Result<(), RemovePortfolioItemError> {
        let item = self
            .portfolio
            .get_by_id(item_id)
            .await
            .map_err(|e| RemovePortfolioItemError::RepositoryError(e.to_string()))?
            .ok_or(RemovePortfolioItemError::NotFound)?;

        let owner = self
            .query
            .get_by_id(item.profile_id)
            .await
            .map_err(|e| RemovePortfolioItemError::RepositoryError(e.to_string()))?
            .map(|profile| profile.user_id);

        if owner != Some(requester) {
            return Err(RemovePortfolioItemError::Forbidden);
        }

        self.portfolio.remove(item_id).await.map_err(|e| match e {
            PortfolioRepositoryError::NotFound => RemovePortfolioItemError::NotFound,
            other => RemovePortfolioItemError::RepositoryError(other.to_string()),
        })?;

        // The row is gone; a leftover file is only logged.
        if let Err(e) = self.storage.remove(&item.image_url).await {
            warn!("Failed to remove image {}: {}", item.image_url, e);
        }

        info!("User {} removed portfolio item {}", requester, item_id);

        Ok(())
    }
}
