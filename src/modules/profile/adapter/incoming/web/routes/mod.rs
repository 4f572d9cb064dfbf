mod create_profile;
mod get_profile_for_edit;
mod get_single_profile;
mod list_profiles;
mod remove_portfolio_item;
mod update_profile;

pub use create_profile::*;
pub use get_profile_for_edit::*;
pub use get_single_profile::*;
pub use list_profiles::*;
pub use remove_portfolio_item::*;
pub use update_profile::*;
