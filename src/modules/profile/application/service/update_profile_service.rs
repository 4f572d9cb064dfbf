use async_trait::async_trait;
use tracing::info;

use crate::profile::application::domain::entities::Profile;
use crate::profile::application::ports::incoming::use_cases::{
    UpdateProfileCommand, UpdateProfileError, UpdateProfileUseCase,
};
use crate::profile::application::ports::outgoing::{
    ProfileQuery, ProfileRepository, ProfileRepositoryError, UpdateProfileData,
};

pub struct UpdateProfileService<Q, R>
where
    Q: ProfileQuery,
    R: ProfileRepository,
{
    query: Q,
    repository: R,
}

impl<Q, R> UpdateProfileService<Q, R>
where
    Q: ProfileQuery,
    R: ProfileRepository,
{
    pub fn new(query: Q, repository: R) -> Self {
        Self { query, repository }
    }
}

#[async_trait]
impl<Q, R> UpdateProfileUseCase for UpdateProfileService<Q, R>
where
    Q: ProfileQuery + Send + Sync,
    R: ProfileRepository + Send + Sync,
{
    async fn execute(&self, command: UpdateProfileCommand) -> Result<Profile, UpdateProfileError> {
        let fields = command.fields();

        let existing = self
            .query
            .get_by_user_id(fields.user_id())
            .await
            .map_err(|e| UpdateProfileError::RepositoryError(e.to_string()))?
            .ok_or(UpdateProfileError::ProfileNotFound)?;

        let data = UpdateProfileData {
            headline: fields.headline().map(str::to_string),
            subheadline: fields.subheadline().map(str::to_string),
            description: fields.description().map(str::to_string),
            hourly_rate: fields.hourly_rate(),
            location: fields.location().map(str::to_string),
        };

        let updated = self
            .repository
            .update_profile(existing.id, data)
            .await
            .map_err(|e| match e {
                // Row vanished between lookup and update
                ProfileRepositoryError::NotFound => UpdateProfileError::ProfileNotFound,
                other => UpdateProfileError::RepositoryError(other.to_string()),
            })?;

        info!("Updated profile {} for user {}", updated.id, updated.user_id);

        Ok(updated)
    }
}
