use async_trait::async_trait;

use crate::profile::application::domain::entities::{PortfolioItem, PortfolioItemId, ProfileId};

#[derive(Debug, Clone, PartialEq)]
pub struct CreatePortfolioItemData {
    pub profile_id: ProfileId,
    pub image_url: String,
}

#[derive(Debug, Clone, thiserror::Error)]
pub enum PortfolioRepositoryError {
    #[error("Database error: {0}")]
    DatabaseError(String),

    #[error("Portfolio item not found")]
    NotFound,
}

#[async_trait]
pub trait PortfolioRepository: Send + Sync {
    async fn get_all(
        &self,
        profile_id: ProfileId,
    ) -> Result<Vec<PortfolioItem>, PortfolioRepositoryError>;

    async fn get_by_id(
        &self,
        id: PortfolioItemId,
    ) -> Result<Option<PortfolioItem>, PortfolioRepositoryError>;

    async fn insert(
        &self,
        data: CreatePortfolioItemData,
    ) -> Result<PortfolioItem, PortfolioRepositoryError>;

    async fn remove(&self, id: PortfolioItemId) -> Result<(), PortfolioRepositoryError>;
}
