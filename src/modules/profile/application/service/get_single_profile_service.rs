use async_trait::async_trait;

use crate::profile::application::domain::entities::{ProfileId, ProfileWithFirstItem};
use crate::profile::application::ports::incoming::use_cases::{
    GetSingleProfileError, GetSingleProfileUseCase,
};
use crate::profile::application::ports::outgoing::{PortfolioRepository, ProfileQuery};

/// Public view of one profile. Only the first portfolio item is exposed.
pub struct GetSingleProfileService<Q, P>
where
    Q: ProfileQuery,
    P: PortfolioRepository,
{
    query: Q,
    portfolio: P,
}

impl<Q, P> GetSingleProfileService<Q, P>
where
    Q: ProfileQuery,
    P: PortfolioRepository,
{
    pub fn new(query: Q, portfolio: P) -> Self {
        Self { query, portfolio }
    }
}

#[async_trait]
impl<Q, P> GetSingleProfileUseCase for GetSingleProfileService<Q, P>
where
    Q: ProfileQuery + Send + Sync,
    P: PortfolioRepository + Send + Sync,
{
    async fn execute(&self, id: ProfileId) -> Result<ProfileWithFirstItem, GetSingleProfileError> {
        let profile = self
            .query
            .get_by_id(id)
            .await
            .map_err(|e| GetSingleProfileError::QueryFailed(e.to_string()))?
            .ok_or(GetSingleProfileError::NotFound)?;

        let first_item = self
            .portfolio
            .get_all(profile.id)
            .await
            .map_err(|e| GetSingleProfileError::QueryFailed(e.to_string()))?
            .into_iter()
            .next();

        Ok(ProfileWithFirstItem {
            profile,
            portfolio: first_item,
        })
    }
}
