use async_trait::async_trait;

use crate::profile::application::{
    domain::entities::Profile, ports::outgoing::ProfileListOptions,
};

#[derive(Debug, Clone, thiserror::Error)]
pub enum ListProfilesError {
    #[error("Failed to fetch profiles: {0}")]
    QueryFailed(String),
}

#[async_trait]
pub trait ListProfilesUseCase: Send + Sync {
    async fn execute(&self, options: ProfileListOptions) -> Result<Vec<Profile>, ListProfilesError>;
}
