use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use chrono::Utc;

use crate::auth::application::domain::entities::UserId;
use crate::profile::application::domain::entities::{
    PortfolioItemId, Profile, ProfileId, ProfileWithFirstItem, ProfileWithPortfolio,
};
use crate::profile::application::ports::incoming::use_cases::{
    CreateProfileCommand, CreateProfileError, CreateProfileUseCase, GetProfileForEditError,
    GetProfileForEditUseCase, GetSingleProfileError, GetSingleProfileUseCase, ListProfilesError,
    ListProfilesUseCase, RemovePortfolioItemError, RemovePortfolioItemUseCase,
    UpdateProfileCommand, UpdateProfileError, UpdateProfileUseCase,
};
use crate::profile::application::ports::outgoing::ProfileListOptions;

pub fn sample_profile(id: ProfileId, user_id: i32) -> Profile {
    Profile {
        id,
        user_id: UserId::from(user_id),
        headline: Some("Freelance developer".to_string()),
        subheadline: Some("Web and mobile".to_string()),
        description: None,
        hourly_rate: 40,
        profile_image: Some(format!("uploads/{}/1700000000000.jpg", user_id)),
        location: Some("Vilnius".to_string()),
        created_at: Utc::now(),
        updated_at: Utc::now(),
    }
}

/* --------------------------------------------------
 * Create
 * -------------------------------------------------- */

#[derive(Clone)]
pub struct StubCreateProfileUseCase {
    result: Result<(), CreateProfileError>,
    last: Arc<Mutex<Option<CreateProfileCommand>>>,
}

impl StubCreateProfileUseCase {
    pub fn succeeding() -> Self {
        Self {
            result: Ok(()),
            last: Arc::default(),
        }
    }

    pub fn failing(err: CreateProfileError) -> Self {
        Self {
            result: Err(err),
            last: Arc::default(),
        }
    }

    pub fn last_command(&self) -> Option<CreateProfileCommand> {
        self.last.lock().unwrap().clone()
    }
}

#[async_trait]
impl CreateProfileUseCase for StubCreateProfileUseCase {
    async fn execute(
        &self,
        command: CreateProfileCommand,
    ) -> Result<ProfileWithPortfolio, CreateProfileError> {
        let user_id = command.fields().user_id().value();
        *self.last.lock().unwrap() = Some(command);

        self.result.clone().map(|_| ProfileWithPortfolio {
            profile: sample_profile(1, user_id),
            portfolio: vec![],
        })
    }
}

/* --------------------------------------------------
 * List
 * -------------------------------------------------- */

#[derive(Clone)]
pub struct StubListProfilesUseCase {
    result: Result<Vec<Profile>, ListProfilesError>,
    last: Arc<Mutex<Option<ProfileListOptions>>>,
}

impl StubListProfilesUseCase {
    pub fn returning(profiles: Vec<Profile>) -> Self {
        Self {
            result: Ok(profiles),
            last: Arc::default(),
        }
    }

    pub fn failing() -> Self {
        Self {
            result: Err(ListProfilesError::QueryFailed("connection lost".into())),
            last: Arc::default(),
        }
    }

    pub fn last_options(&self) -> Option<ProfileListOptions> {
        self.last.lock().unwrap().clone()
    }
}

#[async_trait]
impl ListProfilesUseCase for StubListProfilesUseCase {
    async fn execute(&self, options: ProfileListOptions) -> Result<Vec<Profile>, ListProfilesError> {
        *self.last.lock().unwrap() = Some(options);
        self.result.clone()
    }
}

/* --------------------------------------------------
 * Single / Edit
 * -------------------------------------------------- */

#[derive(Clone)]
pub struct StubGetSingleProfileUseCase {
    result: Result<ProfileWithFirstItem, GetSingleProfileError>,
}

impl StubGetSingleProfileUseCase {
    pub fn returning(view: ProfileWithFirstItem) -> Self {
        Self { result: Ok(view) }
    }

    pub fn not_found() -> Self {
        Self {
            result: Err(GetSingleProfileError::NotFound),
        }
    }
}

#[async_trait]
impl GetSingleProfileUseCase for StubGetSingleProfileUseCase {
    async fn execute(&self, _id: ProfileId) -> Result<ProfileWithFirstItem, GetSingleProfileError> {
        self.result.clone()
    }
}

#[derive(Clone)]
pub struct StubGetProfileForEditUseCase {
    result: Result<ProfileWithPortfolio, GetProfileForEditError>,
}

impl StubGetProfileForEditUseCase {
    pub fn returning(view: ProfileWithPortfolio) -> Self {
        Self { result: Ok(view) }
    }

    pub fn not_found() -> Self {
        Self {
            result: Err(GetProfileForEditError::NotFound),
        }
    }
}

#[async_trait]
impl GetProfileForEditUseCase for StubGetProfileForEditUseCase {
    async fn execute(
        &self,
        _user_id: UserId,
    ) -> Result<ProfileWithPortfolio, GetProfileForEditError> {
        self.result.clone()
    }
}

/* --------------------------------------------------
 * Update
 * -------------------------------------------------- */

#[derive(Clone)]
pub struct StubUpdateProfileUseCase {
    result: Result<Profile, UpdateProfileError>,
    last: Arc<Mutex<Option<UpdateProfileCommand>>>,
}

impl StubUpdateProfileUseCase {
    pub fn returning(profile: Profile) -> Self {
        Self {
            result: Ok(profile),
            last: Arc::default(),
        }
    }

    pub fn not_found() -> Self {
        Self {
            result: Err(UpdateProfileError::ProfileNotFound),
            last: Arc::default(),
        }
    }

    pub fn last_command(&self) -> Option<UpdateProfileCommand> {
        self.last.lock().unwrap().clone()
    }
}

#[async_trait]
impl UpdateProfileUseCase for StubUpdateProfileUseCase {
    async fn execute(&self, command: UpdateProfileCommand) -> Result<Profile, UpdateProfileError> {
        *self.last.lock().unwrap() = Some(command);
        self.result.clone()
    }
}

/* --------------------------------------------------
 * Remove portfolio item
 * -------------------------------------------------- */

#[derive(Clone)]
pub struct StubRemovePortfolioItemUseCase {
    result: Result<(), RemovePortfolioItemError>,
    last: Arc<Mutex<Option<(UserId, PortfolioItemId)>>>,
}

impl StubRemovePortfolioItemUseCase {
    pub fn succeeding() -> Self {
        Self {
            result: Ok(()),
            last: Arc::default(),
        }
    }

    pub fn failing(err: RemovePortfolioItemError) -> Self {
        Self {
            result: Err(err),
            last: Arc::default(),
        }
    }

    pub fn last_call(&self) -> Option<(UserId, PortfolioItemId)> {
        *self.last.lock().unwrap()
    }
}

#[async_trait]
impl RemovePortfolioItemUseCase for StubRemovePortfolioItemUseCase {
    async fn execute(
        &self,
        requester: UserId,
        item_id: PortfolioItemId,
    ) -> Result<(), RemovePortfolioItemError> {
        *self.last.lock().unwrap() = Some((requester, item_id));
        self.result.clone()
    }
}
