use async_trait::async_trait;

use crate::auth::application::domain::entities::UserId;
use crate::profile::application::domain::entities::{Profile, ProfileId, ProfileWithPortfolio};

#[derive(Debug, Clone, PartialEq)]
pub struct CreateProfileData {
    pub user_id: UserId,
    pub headline: Option<String>,
    pub subheadline: Option<String>,
    pub description: Option<String>,
    pub hourly_rate: i32,
    pub profile_image: Option<String>,
    pub location: Option<String>,
    /// Stored image paths, one portfolio row each.
    pub portfolio_images: Vec<String>,
}

/// Full replacement of the editable columns. `profile_image` is only set on create.
#[derive(Debug, Clone, PartialEq)]
pub struct UpdateProfileData {
    pub headline: Option<String>,
    pub subheadline: Option<String>,
    pub description: Option<String>,
    pub hourly_rate: i32,
    pub location: Option<String>,
}

#[derive(Debug, Clone, thiserror::Error)]
pub enum ProfileRepositoryError {
    #[error("Database error: {0}")]
    DatabaseError(String),

    #[error("Profile not found")]
    NotFound,

    #[error("Profile already exists for this user")]
    ProfileAlreadyExists,
}

#[async_trait]
pub trait ProfileRepository: Send + Sync {
    async fn exists_for_user(&self, user_id: UserId) -> Result<bool, ProfileRepositoryError>;

    /// Inserts the profile and its portfolio rows in one transaction.
    ///
    /// Returns `ProfileAlreadyExists` when the one-profile-per-user index rejects the row.
    async fn insert_profile(
        &self,
        data: CreateProfileData,
    ) -> Result<ProfileWithPortfolio, ProfileRepositoryError>;

    async fn update_profile(
        &self,
        profile_id: ProfileId,
        data: UpdateProfileData,
    ) -> Result<Profile, ProfileRepositoryError>;
}
