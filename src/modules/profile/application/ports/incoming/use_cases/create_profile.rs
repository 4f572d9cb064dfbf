use async_trait::async_trait;

use crate::profile::application::{
    domain::entities::ProfileWithPortfolio,
    ports::{
        incoming::use_cases::{ProfileFields, ProfileFieldsError, ProfileFieldsInput},
        outgoing::ImageUpload,
    },
};

//
// ──────────────────────────────────────────────────────────
// Create Profile Command
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone)]
pub struct CreateProfileCommand {
    fields: ProfileFields,
    profile_image: Option<ImageUpload>,
    portfolio_items: Vec<ImageUpload>,
}

impl CreateProfileCommand {
    /// Files must already be filtered by the upload policy.
    pub fn new(
        input: ProfileFieldsInput,
        profile_image: Option<ImageUpload>,
        portfolio_items: Vec<ImageUpload>,
    ) -> Result<Self, ProfileFieldsError> {
        Ok(Self {
            fields: ProfileFields::parse(input)?,
            profile_image,
            portfolio_items,
        })
    }

    pub fn fields(&self) -> &ProfileFields {
        &self.fields
    }

    pub fn into_parts(self) -> (ProfileFields, Option<ImageUpload>, Vec<ImageUpload>) {
        (self.fields, self.profile_image, self.portfolio_items)
    }
}

//
// ──────────────────────────────────────────────────────────
// Use Case Error
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, thiserror::Error)]
pub enum CreateProfileError {
    #[error("Profile already exists for this user")]
    ProfileAlreadyExists,

    #[error("Image storage error: {0}")]
    StorageError(String),

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

//
// ──────────────────────────────────────────────────────────
// Incoming Port (Use Case)
// ──────────────────────────────────────────────────────────
//

#[async_trait]
pub trait CreateProfileUseCase: Send + Sync {
    /// Resolves only after the profile row and every portfolio row are committed.
    async fn execute(
        &self,
        command: CreateProfileCommand,
    ) -> Result<ProfileWithPortfolio, CreateProfileError>;
}
