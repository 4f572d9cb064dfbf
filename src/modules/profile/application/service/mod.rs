mod create_profile_service;
mod get_profile_for_edit_service;
mod get_single_profile_service;
mod list_profiles_service;
mod remove_portfolio_item_service;
mod update_profile_service;

pub use create_profile_service::CreateProfileService;
pub use get_profile_for_edit_service::GetProfileForEditService;
pub use get_single_profile_service::GetSingleProfileService;
pub use list_profiles_service::ListProfilesService;
pub use remove_portfolio_item_service::RemovePortfolioItemService;
pub use update_profile_service::UpdateProfileService;
