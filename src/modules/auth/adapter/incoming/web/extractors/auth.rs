use actix_web::{dev::Payload, Error as ActixError, FromRequest, HttpRequest, HttpResponse};
use std::{
    future::{ready, Ready},
    sync::Arc,
};

use crate::auth::application::domain::entities::UserId;
use crate::auth::application::ports::outgoing::token_provider::TokenProvider;
use crate::shared::api::ApiResponse;

/// Cookie set by the users service after login.
pub const AUTH_COOKIE_NAME: &str = "token";

/// Represents an authenticated user
#[derive(Debug, Clone)]
pub struct AuthenticatedUser {
    pub user_id: UserId,
}

impl AuthenticatedUser {
    pub fn owns(&self, user_id: UserId) -> bool {
        self.user_id == user_id
    }
}

fn create_api_error(response: HttpResponse) -> ActixError {
    actix_web::error::InternalError::from_response("", response).into()
}

impl FromRequest for AuthenticatedUser {
    type Error = ActixError;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _payload: &mut Payload) -> Self::Future {
        let token_provider =
            match req.app_data::<actix_web::web::Data<Arc<dyn TokenProvider + Send + Sync>>>() {
                Some(provider) => provider,
                None => {
                    tracing::error!("TokenProvider is not registered as app data");
                    return ready(Err(create_api_error(ApiResponse::internal_error())));
                }
            };

        let token = match extract_token(req) {
            Some(t) => t,
            None => return ready(Err(create_api_error(ApiResponse::unauthorized()))),
        };

        match token_provider.verify_token(&token) {
            Ok(claims) if claims.token_type == "access" => ready(Ok(AuthenticatedUser {
                user_id: UserId::from(claims.sub),
            })),
            Ok(claims) => {
                tracing::debug!("Rejected token of type '{}'", claims.token_type);
                ready(Err(create_api_error(ApiResponse::unauthorized())))
            }
            Err(e) => {
                tracing::debug!("Rejected token: {}", e);
                ready(Err(create_api_error(ApiResponse::unauthorized())))
            }
        }
    }
}

/// Cookie first, then `Authorization: Bearer`.
fn extract_token(req: &HttpRequest) -> Option<String> {
    if let Some(cookie) = req.cookie(AUTH_COOKIE_NAME) {
        let value = cookie.value().trim();
        if !value.is_empty() {
            return Some(value.to_string());
        }
    }

    req.headers()
        .get("Authorization")?
        .to_str()
        .ok()?
        .strip_prefix("Bearer ")
        .map(|s| s.to_string())
}
