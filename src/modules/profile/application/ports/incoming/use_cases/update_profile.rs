use async_trait::async_trait;

use crate::profile::application::{
    domain::entities::Profile,
    ports::incoming::use_cases::{ProfileFields, ProfileFieldsError, ProfileFieldsInput},
};

#[derive(Debug, Clone)]
pub struct UpdateProfileCommand {
    fields: ProfileFields,
}

impl UpdateProfileCommand {
    pub fn new(input: ProfileFieldsInput) -> Result<Self, ProfileFieldsError> {
        Ok(Self {
            fields: ProfileFields::parse(input)?,
        })
    }

    pub fn fields(&self) -> &ProfileFields {
        &self.fields
    }
}

#[derive(Debug, Clone, thiserror::Error)]
pub enum UpdateProfileError {
    #[error("Profile not found")]
    ProfileNotFound,

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

#[async_trait]
pub trait UpdateProfileUseCase: Send + Sync {
    async fn execute(&self, command: UpdateProfileCommand) -> Result<Profile, UpdateProfileError>;
}
