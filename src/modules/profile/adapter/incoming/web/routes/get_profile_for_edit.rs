use actix_web::{get, web, Responder};
use tracing::error;

use crate::api::schemas::{MessageEnvelope, PayloadEnvelope};
use crate::auth::adapter::incoming::web::extractors::auth::AuthenticatedUser;
use crate::auth::application::domain::entities::UserId;
use crate::profile::application::domain::entities::ProfileWithPortfolio;
use crate::profile::application::ports::incoming::use_cases::GetProfileForEditError;
use crate::shared::api::{messages, ApiResponse};
use crate::AppState;

#[utoipa::path(
    get,
    path = "/api/profile/edit/{user_id}",
    tag = "profiles",
    params(
        ("user_id" = i32, Path, description = "Owner's user id")
    ),
    responses(
        (status = 200, description = "Profile with the whole portfolio", body = inline(PayloadEnvelope<ProfileWithPortfolio>)),
        (status = 401, description = "Not logged in", body = MessageEnvelope),
        (status = 403, description = "Profile belongs to another user", body = MessageEnvelope),
        (status = 404, description = "User has no profile", body = MessageEnvelope),
        (status = 500, description = "Internal server error", body = MessageEnvelope)
    ),
    security(("CookieAuth" = []), ("BearerAuth" = []))
)]
#[get("/api/profile/edit/{user_id}")]
pub async fn get_profile_for_edit_handler(
    user: AuthenticatedUser,
    path: web::Path<i32>,
    data: web::Data<AppState>,
) -> impl Responder {
    let user_id = UserId::from(path.into_inner());

    if !user.owns(user_id) {
        return ApiResponse::forbidden();
    }

    match data.profile.get_for_edit.execute(user_id).await {
        Ok(view) => ApiResponse::success(view),
        Err(GetProfileForEditError::NotFound) => {
            ApiResponse::not_found(messages::PROFILE_NOT_FOUND)
        }
        Err(GetProfileForEditError::QueryFailed(e)) => {
            error!("Failed to fetch profile for edit: {}", e);
            ApiResponse::internal_error()
        }
    }
}
