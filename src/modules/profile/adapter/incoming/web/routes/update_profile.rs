use actix_web::{put, web, Responder};
use serde::{Deserialize, Serialize};
use tracing::error;
use utoipa::ToSchema;

use crate::api::schemas::MessageEnvelope;
use crate::auth::adapter::incoming::web::extractors::auth::AuthenticatedUser;
use crate::profile::application::ports::incoming::use_cases::{
    ProfileFieldsInput, UpdateProfileCommand, UpdateProfileError,
};
use crate::shared::api::{messages, ApiResponse};
use crate::AppState;

//
// ──────────────────────────────────────────────────────────
// Request DTO
// ──────────────────────────────────────────────────────────
//

/// Numeric fields arrive as JSON numbers or as numeric strings.
#[derive(Debug, Clone, Deserialize, Serialize, ToSchema)]
#[serde(untagged)]
pub enum NumericField {
    Integer(i64),
    Float(f64),
    Text(String),
}

impl NumericField {
    fn into_text(self) -> String {
        match self {
            NumericField::Integer(n) => n.to_string(),
            NumericField::Float(n) => n.to_string(),
            NumericField::Text(s) => s,
        }
    }
}

#[derive(Debug, Clone, Default, Deserialize, Serialize, ToSchema)]
pub struct UpdateProfileRequest {
    #[serde(rename = "UserId", alias = "user_id")]
    pub user_id: Option<NumericField>,
    pub hourly_rate: Option<NumericField>,
    pub headline: Option<String>,
    pub subheadline: Option<String>,
    pub description: Option<String>,
    pub location: Option<String>,
}

impl From<UpdateProfileRequest> for ProfileFieldsInput {
    fn from(req: UpdateProfileRequest) -> Self {
        Self {
            user_id: req.user_id.map(NumericField::into_text),
            hourly_rate: req.hourly_rate.map(NumericField::into_text),
            headline: req.headline,
            subheadline: req.subheadline,
            description: req.description,
            location: req.location,
        }
    }
}

//
// ──────────────────────────────────────────────────────────
// Handler
// ──────────────────────────────────────────────────────────
//

#[utoipa::path(
    put,
    path = "/api/profile/update",
    tag = "profiles",
    request_body = UpdateProfileRequest,
    responses(
        (status = 200, description = "Profile updated", body = MessageEnvelope,
            example = json!({"message": "Profilis sėkmingai atnaujintas", "status": "success"})),
        (status = 400, description = "Invalid body or fields", body = MessageEnvelope),
        (status = 401, description = "Not logged in", body = MessageEnvelope),
        (status = 403, description = "UserId differs from the logged in user", body = MessageEnvelope),
        (status = 404, description = "User has no profile", body = MessageEnvelope,
            example = json!({"message": "Profilis nerastas", "status": "danger"})),
        (status = 500, description = "Internal server error", body = MessageEnvelope)
    ),
    security(("CookieAuth" = []), ("BearerAuth" = []))
)]
#[put("/api/profile/update")]
pub async fn update_profile_handler(
    user: AuthenticatedUser,
    req: web::Json<UpdateProfileRequest>,
    data: web::Data<AppState>,
) -> impl Responder {
    let command = match UpdateProfileCommand::new(req.into_inner().into()) {
        Ok(command) => command,
        Err(e) => return ApiResponse::bad_request(&e.to_string()),
    };

    if !user.owns(command.fields().user_id()) {
        return ApiResponse::forbidden();
    }

    match data.profile.update.execute(command).await {
        Ok(_) => ApiResponse::success(messages::PROFILE_UPDATED),

        Err(UpdateProfileError::ProfileNotFound) => {
            ApiResponse::not_found(messages::PROFILE_NOT_FOUND)
        }

        Err(UpdateProfileError::RepositoryError(e)) => {
            error!("Failed to update profile: {}", e);
            ApiResponse::internal_error()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::{cookie::Cookie, http::StatusCode, test, App};
    use serde_json::{json, Value};

    use crate::shared::api::custom_json_config;
    use crate::tests::support::app_state_builder::TestAppStateBuilder;
    use crate::tests::support::auth_helper::{access_token, token_provider};
    use crate::tests::support::stubs::{sample_profile, StubUpdateProfileUseCase};

    async fn send(
        app_state: web::Data<AppState>,
        token: Option<String>,
        body: Value,
    ) -> (StatusCode, Value) {
        let app = test::init_service(
            App::new()
                .app_data(app_state)
                .app_data(token_provider())
                .app_data(custom_json_config())
                .service(update_profile_handler),
        )
        .await;

        let mut req = test::TestRequest::put()
            .uri("/api/profile/update")
            .set_json(&body);

        if let Some(token) = token {
            req = req.cookie(Cookie::new("token", token));
        }

        let resp = test::call_service(&app, req.to_request()).await;
        let status = resp.status();
        (status, test::read_body_json(resp).await)
    }

    #[actix_web::test]
    async fn test_update_success() {
        let stub = StubUpdateProfileUseCase::returning(sample_profile(1, 5));
        let app_state = TestAppStateBuilder::default()
            .with_update_profile(stub.clone())
            .build();

        let (status, body) = send(
            app_state,
            Some(access_token(5)),
            json!({"UserId": 5, "hourly_rate": 60, "headline": "Senior"}),
        )
        .await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["status"], "success");
        assert_eq!(body["message"], messages::PROFILE_UPDATED);

        let command = stub.last_command().unwrap();
        assert_eq!(command.fields().hourly_rate(), 60);
        assert_eq!(command.fields().headline(), Some("Senior"));
    }

    #[actix_web::test]
    async fn test_numeric_strings_and_snake_case_user_id_are_accepted() {
        let stub = StubUpdateProfileUseCase::returning(sample_profile(1, 5));
        let app_state = TestAppStateBuilder::default()
            .with_update_profile(stub.clone())
            .build();

        let (status, _) = send(
            app_state,
            Some(access_token(5)),
            json!({"user_id": "5", "hourly_rate": "45"}),
        )
        .await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(stub.last_command().unwrap().fields().hourly_rate(), 45);
    }

    #[actix_web::test]
    async fn test_user_without_profile_is_not_found() {
        let (status, body) = send(
            TestAppStateBuilder::default().build(),
            Some(access_token(5)),
            json!({"UserId": 5, "hourly_rate": 10}),
        )
        .await;

        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body["status"], "danger");
        assert_eq!(body["message"], messages::PROFILE_NOT_FOUND);
    }

    #[actix_web::test]
    async fn test_fractional_rate_is_bad_request() {
        let (status, body) = send(
            TestAppStateBuilder::default().build(),
            Some(access_token(5)),
            json!({"UserId": 5, "hourly_rate": 10.5}),
        )
        .await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["message"], "\"hourly_rate\" must be an integer");
    }

    #[actix_web::test]
    async fn test_malformed_json_is_bad_request_envelope() {
        let app = test::init_service(
            App::new()
                .app_data(TestAppStateBuilder::default().build())
                .app_data(token_provider())
                .app_data(custom_json_config())
                .service(update_profile_handler),
        )
        .await;

        let req = test::TestRequest::put()
            .uri("/api/profile/update")
            .cookie(Cookie::new("token", access_token(5)))
            .insert_header(("Content-Type", "application/json"))
            .set_payload("{not json")
            .to_request();

        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["status"], "danger");
    }

    #[actix_web::test]
    async fn test_updating_someone_else_is_forbidden() {
        let stub = StubUpdateProfileUseCase::returning(sample_profile(1, 5));
        let app_state = TestAppStateBuilder::default()
            .with_update_profile(stub.clone())
            .build();

        let (status, _) = send(
            app_state,
            Some(access_token(6)),
            json!({"UserId": 5, "hourly_rate": 10}),
        )
        .await;

        assert_eq!(status, StatusCode::FORBIDDEN);
        assert!(stub.last_command().is_none());
    }

    #[actix_web::test]
    async fn test_update_requires_login() {
        let (status, _) = send(
            TestAppStateBuilder::default().build(),
            None,
            json!({"UserId": 5, "hourly_rate": 10}),
        )
        .await;

        assert_eq!(status, StatusCode::UNAUTHORIZED);
    }

    #[::core::prelude::v1::test]
    fn test_whole_float_converts_to_integer_text() {
        let input: ProfileFieldsInput = UpdateProfileRequest {
            user_id: Some(NumericField::Integer(3)),
            hourly_rate: Some(NumericField::Float(40.0)),
            ..Default::default()
        }
        .into();

        assert_eq!(input.user_id.as_deref(), Some("3"));
        assert_eq!(input.hourly_rate.as_deref(), Some("40"));
    }
}
