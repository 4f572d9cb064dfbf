use actix_web::{get, web, Responder};
use tracing::error;

use crate::api::schemas::{MessageEnvelope, PayloadEnvelope};
use crate::profile::application::domain::entities::{ProfileId, ProfileWithFirstItem};
use crate::profile::application::ports::incoming::use_cases::GetSingleProfileError;
use crate::shared::api::{messages, ApiResponse};
use crate::AppState;

#[utoipa::path(
    get,
    path = "/api/profile/single/{id}",
    tag = "profiles",
    params(
        ("id" = i32, Path, description = "Profile id")
    ),
    responses(
        (status = 200, description = "Profile with its first portfolio item, or null", body = inline(PayloadEnvelope<ProfileWithFirstItem>)),
        (status = 400, description = "Id is not an integer", body = MessageEnvelope),
        (status = 404, description = "Profile not found", body = MessageEnvelope),
        (status = 500, description = "Internal server error", body = MessageEnvelope)
    )
)]
#[get("/api/profile/single/{id}")]
pub async fn get_single_profile_handler(
    path: web::Path<ProfileId>,
    data: web::Data<AppState>,
) -> impl Responder {
    match data.profile.get_single.execute(path.into_inner()).await {
        Ok(view) => ApiResponse::success(view),
        Err(GetSingleProfileError::NotFound) => ApiResponse::not_found(messages::PROFILE_NOT_FOUND),
        Err(GetSingleProfileError::QueryFailed(e)) => {
            error!("Failed to fetch profile: {}", e);
            ApiResponse::internal_error()
        }
    }
}
