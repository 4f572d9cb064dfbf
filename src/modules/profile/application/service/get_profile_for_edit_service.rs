use async_trait::async_trait;

use crate::auth::application::domain::entities::UserId;
use crate::profile::application::domain::entities::ProfileWithPortfolio;
use crate::profile::application::ports::incoming::use_cases::{
    GetProfileForEditError, GetProfileForEditUseCase,
};
use crate::profile::application::ports::outgoing::{PortfolioRepository, ProfileQuery};

pub struct GetProfileForEditService<Q, P>
where
    Q: ProfileQuery,
    P: PortfolioRepository,
{
    query: Q,
    portfolio: P,
}

impl<Q, P> GetProfileForEditService<Q, P>
where
    Q: ProfileQuery,
    P: PortfolioRepository,
{
    pub fn new(query: Q, portfolio: P) -> Self {
        Self { query, portfolio }
    }
}

#[async_trait]
impl<Q, P> GetProfileForEditUseCase for GetProfileForEditService<Q, P>
where
    Q: ProfileQuery + Send + Sync,
    P: PortfolioRepository + Send + Sync,
{
    async fn execute(
        &self,
        user_id: UserId,
    ) -> Result<ProfileWithPortfolio, GetProfileForEditError> {
        let profile = self
            .query
            .get_by_user_id(user_id)
            .await
            .map_err(|e| GetProfileForEditError::QueryFailed(e.to_string()))?
            .ok_or(GetProfileForEditError::NotFound)?;

        let portfolio = self
            .portfolio
            .get_all(profile.id)
            .await
            .map_err(|e| GetProfileForEditError::QueryFailed(e.to_string()))?;

        Ok(ProfileWithPortfolio { profile, portfolio })
    }
}
