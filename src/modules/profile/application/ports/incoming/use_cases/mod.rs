mod create_profile;
mod get_profile_for_edit;
mod get_single_profile;
mod list_profiles;
mod profile_fields;
mod remove_portfolio_item;
mod update_profile;

pub use create_profile::{CreateProfileCommand, CreateProfileError, CreateProfileUseCase};
pub use get_profile_for_edit::{GetProfileForEditError, GetProfileForEditUseCase};
pub use get_single_profile::{GetSingleProfileError, GetSingleProfileUseCase};
pub use list_profiles::{ListProfilesError, ListProfilesUseCase};
pub use profile_fields::{ProfileFields, ProfileFieldsError, ProfileFieldsInput};
pub use remove_portfolio_item::{RemovePortfolioItemError, RemovePortfolioItemUseCase};
pub use update_profile::{UpdateProfileCommand, UpdateProfileError, UpdateProfileUseCase};
