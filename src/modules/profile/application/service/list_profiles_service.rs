use async_trait::async_trait;

use crate::profile::application::domain::entities::Profile;
use crate::profile::application::ports::incoming::use_cases::{
    ListProfilesError, ListProfilesUseCase,
};
use crate::profile::application::ports::outgoing::{ProfileListOptions, ProfileQuery};

pub struct ListProfilesService<Q>
where
    Q: ProfileQuery,
{
    query: Q,
}

impl<Q> ListProfilesService<Q>
where
    Q: ProfileQuery,
{
    pub fn new(query: Q) -> Self {
        Self { query }
    }
}

#[async_trait]
impl<Q> ListProfilesUseCase for ListProfilesService<Q>
where
    Q: ProfileQuery + Send + Sync,
{
    async fn execute(&self, options: ProfileListOptions) -> Result<Vec<Profile>, ListProfilesError> {
        self.query
            .get_all(options)
            .await
            .map_err(|e| ListProfilesError::QueryFailed(e.to_string()))
    }
}
