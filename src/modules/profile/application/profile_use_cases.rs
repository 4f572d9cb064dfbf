use std::sync::Arc;

use crate::profile::application::ports::incoming::use_cases::{
    CreateProfileUseCase, GetProfileForEditUseCase, GetSingleProfileUseCase, ListProfilesUseCase,
    RemovePortfolioItemUseCase, UpdateProfileUseCase,
};

#[derive(Clone)]
pub struct ProfileUseCases {
    pub create: Arc<dyn CreateProfileUseCase + Send + Sync>,
    pub list: Arc<dyn ListProfilesUseCase + Send + Sync>,
    pub get_single: Arc<dyn GetSingleProfileUseCase + Send + Sync>,
    pub get_for_edit: Arc<dyn GetProfileForEditUseCase + Send + Sync>,
    pub update: Arc<dyn UpdateProfileUseCase + Send + Sync>,
    pub remove_portfolio_item: Arc<dyn RemovePortfolioItemUseCase + Send + Sync>,
}
