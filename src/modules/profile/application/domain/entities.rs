use chrono::{DateTime, Utc};
use serde::Serialize;
use utoipa::ToSchema;

use crate::auth::application::domain::entities::UserId;

pub type ProfileId = i32;
pub type PortfolioItemId = i32;

#[derive(Serialize, Debug, Clone, PartialEq, ToSchema)]
pub struct Profile {
    pub id: ProfileId,
    #[schema(value_type = i32)]
    pub user_id: UserId,
    pub headline: Option<String>,
    pub subheadline: Option<String>,
    pub description: Option<String>,
    pub hourly_rate: i32,
    /// Relative path under `/uploads`
    pub profile_image: Option<String>,
    pub location: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Serialize, Debug, Clone, PartialEq, ToSchema)]
pub struct PortfolioItem {
    pub id: PortfolioItemId,
    pub profile_id: ProfileId,
    pub image_url: String,
    pub created_at: DateTime<Utc>,
}

/// Public listing view: the profile plus its first gallery image.
#[derive(Serialize, Debug, Clone, PartialEq, ToSchema)]
pub struct ProfileWithFirstItem {
    #[serde(flatten)]
    pub profile: Profile,
    pub portfolio: Option<PortfolioItem>,
}

/// Owner view: the profile plus the whole gallery.
#[derive(Serialize, Debug, Clone, PartialEq, ToSchema)]
pub struct ProfileWithPortfolio {
    #[serde(flatten)]
    pub profile: Profile,
    pub portfolio: Vec<PortfolioItem>,
}
