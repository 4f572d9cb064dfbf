use async_trait::async_trait;
use serde::Deserialize;

use crate::auth::application::domain::entities::UserId;
use crate::profile::application::domain::entities::{Profile, ProfileId};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HeadlineOrder {
    Asc,
    Desc,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProfileListOptions {
    pub order: Option<HeadlineOrder>,
    /// Inclusive lower bound on `hourly_rate`
    pub min_hourly_rate: Option<i32>,
}

#[derive(Debug, Clone, thiserror::Error)]
pub enum ProfileQueryError {
    #[error("Database error: {0}")]
    DatabaseError(String),
}

#[async_trait]
pub trait ProfileQuery: Send + Sync {
    async fn get_all(&self, options: ProfileListOptions) -> Result<Vec<Profile>, ProfileQueryError>;
    async fn get_by_id(&self, id: ProfileId) -> Result<Option<Profile>, ProfileQueryError>;
    async fn get_by_user_id(&self, user_id: UserId) -> Result<Option<Profile>, ProfileQueryError>;
}
