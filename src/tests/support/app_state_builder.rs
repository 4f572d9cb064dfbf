use actix_web::web;
use std::sync::Arc;

use crate::profile::application::domain::policies::UploadPolicy;
use crate::profile::application::ports::incoming::use_cases::{
    CreateProfileError, CreateProfileUseCase, GetProfileForEditUseCase, GetSingleProfileUseCase,
    ListProfilesUseCase, RemovePortfolioItemError, RemovePortfolioItemUseCase,
    UpdateProfileUseCase,
};
use crate::profile::application::profile_use_cases::ProfileUseCases;
use crate::tests::support::stubs::*;
use crate::AppState;

/// Every use case defaults to a stub answering "not found" or an error,
/// so tests only override what they exercise.
pub struct TestAppStateBuilder {
    profile: ProfileUseCases,
    upload_policy: UploadPolicy,
}

impl Default for TestAppStateBuilder {
    fn default() -> Self {
        Self {
            profile: ProfileUseCases {
                create: Arc::new(StubCreateProfileUseCase::failing(
                    CreateProfileError::RepositoryError("not used in this test".into()),
                )),
                list: Arc::new(StubListProfilesUseCase::returning(vec![])),
                get_single: Arc::new(StubGetSingleProfileUseCase::not_found()),
                get_for_edit: Arc::new(StubGetProfileForEditUseCase::not_found()),
                update: Arc::new(StubUpdateProfileUseCase::not_found()),
                remove_portfolio_item: Arc::new(StubRemovePortfolioItemUseCase::failing(
                    RemovePortfolioItemError::NotFound,
                )),
            },
            upload_policy: UploadPolicy::default(),
        }
    }
}

impl TestAppStateBuilder {
    pub fn with_create_profile(
        mut self,
        uc: impl CreateProfileUseCase + Send + Sync + 'static,
    ) -> Self {
        self.profile.create = Arc::new(uc);
        self
    }

    pub fn with_list_profiles(
        mut self,
        uc: impl ListProfilesUseCase + Send + Sync + 'static,
    ) -> Self {
        self.profile.list = Arc::new(uc);
        self
    }

    pub fn with_get_single_profile(
        mut self,
        uc: impl GetSingleProfileUseCase + Send + Sync + 'static,
    ) -> Self {
        self.profile.get_single = Arc::new(uc);
        self
    }

    pub fn with_get_profile_for_edit(
        mut self,
        uc: impl GetProfileForEditUseCase + Send + Sync + 'static,
    ) -> Self {
        self.profile.get_for_edit = Arc::new(uc);
        self
    }

    pub fn with_update_profile(
        mut self,
        uc: impl UpdateProfileUseCase + Send + Sync + 'static,
    ) -> Self {
        self.profile.update = Arc::new(uc);
        self
    }

    pub fn with_remove_portfolio_item(
        mut self,
        uc: impl RemovePortfolioItemUseCase + Send + Sync + 'static,
    ) -> Self {
        self.profile.remove_portfolio_item = Arc::new(uc);
        self
    }

    pub fn with_upload_policy(mut self, policy: UploadPolicy) -> Self {
        self.upload_policy = policy;
        self
    }

    pub fn build(self) -> web::Data<AppState> {
        web::Data::new(AppState {
            profile: self.profile,
            upload_policy: self.upload_policy,
        })
    }
}
