use actix_web::{get, web, HttpResponse, Responder};
use tracing::error;

use crate::api::schemas::{MessageEnvelope, PayloadEnvelope};
use crate::profile::application::domain::entities::Profile;
use crate::profile::application::ports::outgoing::{HeadlineOrder, ProfileListOptions};
use crate::shared::api::ApiResponse;
use crate::AppState;

async fn respond(data: &AppState, options: ProfileListOptions) -> HttpResponse {
    match data.profile.list.execute(options).await {
        Ok(profiles) => ApiResponse::success(profiles),
        Err(e) => {
            error!("Failed to list profiles: {}", e);
            ApiResponse::internal_error()
        }
    }
}

#[utoipa::path(
    get,
    path = "/api/profile",
    tag = "profiles",
    responses(
        (status = 200, description = "All profiles ordered by id", body = inline(PayloadEnvelope<Vec<Profile>>)),
        (status = 500, description = "Internal server error", body = MessageEnvelope)
    )
)]
#[get("/api/profile")]
pub async fn list_profiles_handler(data: web::Data<AppState>) -> impl Responder {
    respond(&data, ProfileListOptions::default()).await
}

#[utoipa::path(
    get,
    path = "/api/profile/sort/{order}",
    tag = "profiles",
    params(
        ("order" = String, Path, description = "`asc` or `desc`, applied to headline")
    ),
    responses(
        (status = 200, description = "Profiles sorted by headline", body = inline(PayloadEnvelope<Vec<Profile>>)),
        (status = 400, description = "Unknown order", body = MessageEnvelope),
        (status = 500, description = "Internal server error", body = MessageEnvelope)
    )
)]
#[get("/api/profile/sort/{order}")]
pub async fn sort_profiles_handler(
    path: web::Path<HeadlineOrder>,
    data: web::Data<AppState>,
) -> impl Responder {
    let options = ProfileListOptions {
        order: Some(path.into_inner()),
        ..Default::default()
    };

    respond(&data, options).await
}

#[utoipa::path(
    get,
    path = "/api/profile/filter/hourly_rate/{rate}",
    tag = "profiles",
    params(
        ("rate" = i32, Path, description = "Minimum hourly rate, inclusive")
    ),
    responses(
        (status = 200, description = "Profiles with hourly_rate >= rate", body = inline(PayloadEnvelope<Vec<Profile>>)),
        (status = 400, description = "Rate is not an integer", body = MessageEnvelope),
        (status = 500, description = "Internal server error", body = MessageEnvelope)
    )
)]
#[get("/api/profile/filter/hourly_rate/{rate}")]
pub async fn filter_profiles_by_rate_handler(
    path: web::Path<i32>,
    data: web::Data<AppState>,
) -> impl Responder {
    let options = ProfileListOptions {
        min_hourly_rate: Some(path.into_inner()),
        ..Default::default()
    };

    respond(&data, options).await
}
