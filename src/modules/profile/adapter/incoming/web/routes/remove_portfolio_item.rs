use actix_web::{delete, web, Responder};
use tracing::error;

use crate::api::schemas::MessageEnvelope;
use crate::auth::adapter::incoming::web::extractors::auth::AuthenticatedUser;
use crate::profile::application::domain::entities::PortfolioItemId;
use crate::profile::application::ports::incoming::use_cases::RemovePortfolioItemError;
use crate::shared::api::{messages, ApiResponse};
use crate::AppState;

#[utoipa::path(
    delete,
    path = "/api/profile/portfolio/{id}",
    tag = "profiles",
    params(
        ("id" = i32, Path, description = "Portfolio item id")
    ),
    responses(
        (status = 200, description = "Item and its image removed", body = MessageEnvelope),
        (status = 401, description = "Not logged in", body = MessageEnvelope),
        (status = 403, description = "Item belongs to another user", body = MessageEnvelope),
        (status = 404, description = "Item not found", body = MessageEnvelope),
        (status = 500, description = "Internal server error", body = MessageEnvelope)
    ),
    security(("CookieAuth" = []), ("BearerAuth" = []))
)]
#[delete("/api/profile/portfolio/{id}")]
pub async fn remove_portfolio_item_handler(
    user: AuthenticatedUser,
    path: web::Path<PortfolioItemId>,
    data: web::Data<AppState>,
) -> impl Responder {
    match data
        .profile
        .remove_portfolio_item
        .execute(user.user_id, path.into_inner())
        .await
    {
        Ok(()) => ApiResponse::success(messages::PORTFOLIO_ITEM_REMOVED),
        Err(RemovePortfolioItemError::NotFound) => {
            ApiResponse::not_found(messages::PORTFOLIO_ITEM_NOT_FOUND)
        }
        Err(RemovePortfolioItemError::Forbidden) => ApiResponse::forbidden(),
        Err(RemovePortfolioItemError::RepositoryError(e)) => {
            error!("Failed to remove portfolio item: {}", e);
            ApiResponse::internal_error()
        }
    }
}
