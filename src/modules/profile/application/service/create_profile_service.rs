use async_trait::async_trait;
use tracing::{error, info, warn};

use crate::auth::application::domain::entities::UserId;
use crate::profile::application::{
    domain::entities::ProfileWithPortfolio,
    ports::{
        incoming::use_cases::{CreateProfileCommand, CreateProfileError, CreateProfileUseCase},
        outgoing::{
            CreateProfileData, ImageStorage, ImageUpload, ProfileRepository,
            ProfileRepositoryError,
        },
    },
};

#[derive(Debug, Clone)]
pub struct CreateProfileService<R, S>
where
    R: ProfileRepository + Send + Sync,
    S: ImageStorage + Send + Sync,
{
    profiles: R,
    storage: S,
}

impl<R, S> CreateProfileService<R, S>
where
    R: ProfileRepository + Send + Sync,
    S: ImageStorage + Send + Sync,
{
    pub fn new(profiles: R, storage: S) -> Self {
        Self { profiles, storage }
    }

    /// Writes every image or none of them.
    async fn store_images(
        &self,
        owner: UserId,
        profile_image: Option<ImageUpload>,
        portfolio_items: Vec<ImageUpload>,
    ) -> Result<(Option<String>, Vec<String>), CreateProfileError> {
        let mut written: Vec<String> = Vec::new();

        let profile_image_path = match profile_image {
            Some(image) => match self.storage.store(owner, image).await {
                Ok(stored) => {
                    written.push(stored.path.clone());
                    Some(stored.path)
                }
                Err(e) => return Err(CreateProfileError::StorageError(e.to_string())),
            },
            None => None,
        };

        let mut portfolio_paths = Vec::with_capacity(portfolio_items.len());
        for image in portfolio_items {
            match self.storage.store(owner, image).await {
                Ok(stored) => {
                    written.push(stored.path.clone());
                    portfolio_paths.push(stored.path);
                }
                Err(e) => {
                    self.discard(&written).await;
                    return Err(CreateProfileError::StorageError(e.to_string()));
                }
            }
        }

        Ok((profile_image_path, portfolio_paths))
    }

    async fn discard(&self, paths: &[String]) {
        for path in paths {
            if let Err(e) = self.storage.remove(path).await {
                warn!("Failed to remove orphaned upload {}: {}", path, e);
            }
        }
    }
}

#[async_trait]
impl<R, S> CreateProfileUseCase for CreateProfileService<R, S>
where
    R: ProfileRepository + Send + Sync,
    S: ImageStorage + Send + Sync,
{
    async fn execute(
        &self,
        command: CreateProfileCommand,
    ) -> Result<ProfileWithPortfolio, CreateProfileError> {
        let (fields, profile_image, portfolio_items) = command.into_parts();
        let owner = fields.user_id();

        let exists = self
            .profiles
            .exists_for_user(owner)
            .await
            .map_err(|e| CreateProfileError::RepositoryError(e.to_string()))?;

        if exists {
            return Err(CreateProfileError::ProfileAlreadyExists);
        }

        let (profile_image_path, portfolio_paths) = self
            .store_images(owner, profile_image, portfolio_items)
            .await?;

        let written: Vec<String> = profile_image_path
            .iter()
            .chain(portfolio_paths.iter())
            .cloned()
            .collect();

        let data = CreateProfileData {
            user_id: owner,
            headline: fields.headline().map(str::to_string),
            subheadline: fields.subheadline().map(str::to_string),
            description: fields.description().map(str::to_string),
            hourly_rate: fields.hourly_rate(),
            profile_image: profile_image_path,
            location: fields.location().map(str::to_string),
            portfolio_images: portfolio_paths,
        };

        // Profile and portfolio rows commit together, so a failure leaves no rows behind
        let created = match self.profiles.insert_profile(data).await {
            Ok(created) => created,
            Err(e) => {
                self.discard(&written).await;

                return Err(match e {
                    // Lost a race against a concurrent create for the same user
                    ProfileRepositoryError::ProfileAlreadyExists => {
                        CreateProfileError::ProfileAlreadyExists
                    }
                    other => {
                        error!("Failed to create profile for user {}: {}", owner, other);
                        CreateProfileError::RepositoryError(other.to_string())
                    }
                });
            }
        };

        info!(
            "Created profile {} for user {} with {} portfolio items",
            created.profile.id,
            owner,
            created.portfolio.len()
        );

        Ok(created)
    }
}
