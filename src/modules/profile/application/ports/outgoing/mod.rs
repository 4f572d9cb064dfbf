mod image_storage;
mod portfolio_repository;
mod profile_query;
mod profile_repository;

pub use image_storage::{ImageStorage, ImageStorageError, ImageUpload, StoredImage};
pub use portfolio_repository::{
    CreatePortfolioItemData, PortfolioRepository, PortfolioRepositoryError,
};
pub use profile_query::{HeadlineOrder, ProfileListOptions, ProfileQuery, ProfileQueryError};
pub use profile_repository::{
    CreateProfileData, ProfileRepository, ProfileRepositoryError, UpdateProfileData,
};
