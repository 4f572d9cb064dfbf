use actix_multipart::Multipart;
use actix_web::{post, web, Responder};
use serde::Deserialize;
use tracing::{debug, error};
use utoipa::ToSchema;

use crate::api::schemas::MessageEnvelope;
use crate::auth::adapter::incoming::web::extractors::auth::AuthenticatedUser;
use crate::profile::adapter::incoming::web::profile_form::read_profile_form;
use crate::profile::application::ports::incoming::use_cases::{
    CreateProfileCommand, CreateProfileError,
};
use crate::shared::api::{messages, ApiResponse};
use crate::AppState;

/// Multipart body of `POST /api/profile/create`, for documentation only.
#[allow(dead_code)]
#[derive(Deserialize, ToSchema)]
pub struct CreateProfileForm {
    #[serde(rename = "UserId")]
    #[schema(example = 7)]
    pub user_id: i32,
    #[schema(example = 35)]
    pub hourly_rate: i32,
    pub headline: Option<String>,
    pub subheadline: Option<String>,
    pub description: Option<String>,
    pub location: Option<String>,
    /// At most one jpeg, png or gif
    #[schema(value_type = Option<String>, format = Binary)]
    pub profile_image: Option<Vec<u8>>,
    /// At most 20 jpeg, png or gif files
    #[schema(value_type = Vec<String>, format = Binary)]
    pub portfolio_items: Vec<Vec<u8>>,
}

#[utoipa::path(
    post,
    path = "/api/profile/create",
    tag = "profiles",
    request_body(content = CreateProfileForm, content_type = "multipart/form-data"),
    responses(
        (status = 201, description = "Profile created", body = MessageEnvelope,
            example = json!({"message": "Profilis sėkmingai sukurtas", "status": "success"})),
        (status = 400, description = "Invalid form or fields", body = MessageEnvelope),
        (status = 401, description = "Not logged in", body = MessageEnvelope),
        (status = 403, description = "UserId differs from the logged in user", body = MessageEnvelope),
        (status = 409, description = "User already has a profile", body = MessageEnvelope,
            example = json!({"message": "Profilis šiam vartotojui jau sukurtas", "status": "danger"})),
        (status = 500, description = "Internal server error", body = MessageEnvelope)
    ),
    security(("CookieAuth" = []), ("BearerAuth" = []))
)]
#[post("/api/profile/create")]
pub async fn create_profile_handler(
    user: AuthenticatedUser,
    payload: Multipart,
    data: web::Data<AppState>,
) -> impl Responder {
    let form = match read_profile_form(payload, &data.upload_policy).await {
        Ok(form) => form,
        Err(e) => {
            debug!("Rejected profile form: {}", e);
            return ApiResponse::bad_request(&e.to_string());
        }
    };

    let command =
        match CreateProfileCommand::new(form.fields, form.profile_image, form.portfolio_items) {
            Ok(command) => command,
            Err(e) => return ApiResponse::bad_request(&e.to_string()),
        };

    if !user.owns(command.fields().user_id()) {
        return ApiResponse::forbidden();
    }

    match data.profile.create.execute(command).await {
        Ok(_) => ApiResponse::created(messages::PROFILE_CREATED),

        Err(CreateProfileError::ProfileAlreadyExists) => {
            ApiResponse::conflict(messages::PROFILE_ALREADY_EXISTS)
        }

        Err(e) => {
            error!("Failed to create profile: {}", e);
            ApiResponse::internal_error()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::{cookie::Cookie, http::StatusCode, test, App};
    use serde_json::Value;

    use crate::profile::adapter::incoming::web::profile_form::tests::{
        content_type_header, multipart_body,
    };
    use crate::profile::application::domain::policies::UploadPolicy;
    use crate::tests::support::app_state_builder::TestAppStateBuilder;
    use crate::tests::support::auth_helper::{access_token, token_provider};
    use crate::tests::support::stubs::StubCreateProfileUseCase;

    async fn submit(
        app_state: web::Data<AppState>,
        token: Option<String>,
        body: Vec<u8>,
    ) -> (StatusCode, Value) {
        let app = test::init_service(
            App::new()
                .app_data(app_state)
                .app_data(token_provider())
                .service(create_profile_handler),
        )
        .await;

        let mut req = test::TestRequest::post()
            .uri("/api/profile/create")
            .insert_header(content_type_header())
            .set_payload(body);

        if let Some(token) = token {
            req = req.cookie(Cookie::new("token", token));
        }

        let resp = test::call_service(&app, req.to_request()).await;
        let status = resp.status();
        (status, test::read_body_json(resp).await)
    }

    fn valid_body(user_id: &str) -> Vec<u8> {
        multipart_body(
            &[
                ("UserId", user_id),
                ("hourly_rate", "35"),
                ("headline", "Photographer"),
            ],
            &[
                ("profile_image", "me.jpg", "image/jpeg", b"jpg"),
                ("portfolio_items", "one.png", "image/png", b"png"),
                ("portfolio_items", "notes.txt", "text/plain", b"txt"),
            ],
        )
    }

    #[actix_web::test]
    async fn test_create_profile_success() {
        let stub = StubCreateProfileUseCase::succeeding();
        let app_state = TestAppStateBuilder::default()
            .with_create_profile(stub.clone())
            .build();

        let (status, body) = submit(app_state, Some(access_token(7)), valid_body("7")).await;

        assert_eq!(status, StatusCode::CREATED);
        assert_eq!(body["status"], "success");
        assert_eq!(body["message"], messages::PROFILE_CREATED);

        let command = stub.last_command().unwrap();
        let (fields, profile_image, portfolio_items) = command.into_parts();
        assert_eq!(fields.hourly_rate(), 35);
        assert_eq!(profile_image.map(|i| i.original_name), Some("me.jpg".into()));
        // text/plain was filtered out
        assert_eq!(portfolio_items.len(), 1);
    }

    #[actix_web::test]
    async fn test_create_profile_already_exists() {
        let app_state = TestAppStateBuilder::default()
            .with_create_profile(StubCreateProfileUseCase::failing(
                CreateProfileError::ProfileAlreadyExists,
            ))
            .build();

        let (status, body) = submit(app_state, Some(access_token(7)), valid_body("7")).await;

        assert_eq!(status, StatusCode::CONFLICT);
        assert_eq!(body["status"], "danger");
        assert_eq!(body["message"], messages::PROFILE_ALREADY_EXISTS);
    }

    #[actix_web::test]
    async fn test_create_profile_requires_login() {
        let stub = StubCreateProfileUseCase::succeeding();
        let app_state = TestAppStateBuilder::default()
            .with_create_profile(stub.clone())
            .build();

        let (status, body) = submit(app_state, None, valid_body("7")).await;

        assert_eq!(status, StatusCode::UNAUTHORIZED);
        assert_eq!(body["message"], messages::UNAUTHORIZED);
        assert!(stub.last_command().is_none());
    }

    #[actix_web::test]
    async fn test_create_profile_for_other_user_is_forbidden() {
        let stub = StubCreateProfileUseCase::succeeding();
        let app_state = TestAppStateBuilder::default()
            .with_create_profile(stub.clone())
            .build();

        let (status, _) = submit(app_state, Some(access_token(8)), valid_body("7")).await;

        assert_eq!(status, StatusCode::FORBIDDEN);
        assert!(stub.last_command().is_none());
    }

    #[actix_web::test]
    async fn test_missing_hourly_rate_is_bad_request() {
        let stub = StubCreateProfileUseCase::succeeding();
        let app_state = TestAppStateBuilder::default()
            .with_create_profile(stub.clone())
            .build();

        let body = multipart_body(&[("UserId", "7")], &[]);
        let (status, body) = submit(app_state, Some(access_token(7)), body).await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["status"], "danger");
        assert_eq!(body["message"], "\"hourly_rate\" is required");
        assert!(stub.last_command().is_none());
    }

    #[actix_web::test]
    async fn test_too_many_profile_images_is_bad_request() {
        let body = multipart_body(
            &[("UserId", "7"), ("hourly_rate", "1")],
            &[
                ("profile_image", "a.png", "image/png", b"a"),
                ("profile_image", "b.png", "image/png", b"b"),
            ],
        );

        let (status, _) = submit(
            TestAppStateBuilder::default().build(),
            Some(access_token(7)),
            body,
        )
        .await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
    }

    #[actix_web::test]
    async fn test_oversized_file_is_bad_request() {
        let stub = StubCreateProfileUseCase::succeeding();
        let app_state = TestAppStateBuilder::default()
            .with_create_profile(stub.clone())
            .with_upload_policy(UploadPolicy {
                max_file_size_bytes: 2,
                ..Default::default()
            })
            .build();

        let (status, _) = submit(app_state, Some(access_token(7)), valid_body("7")).await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert!(stub.last_command().is_none());
    }

    #[actix_web::test]
    async fn test_storage_failure_is_generic_error() {
        let app_state = TestAppStateBuilder::default()
            .with_create_profile(StubCreateProfileUseCase::failing(
                CreateProfileError::StorageError("disk full".into()),
            ))
            .build();

        let (status, body) = submit(app_state, Some(access_token(7)), valid_body("7")).await;

        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body["message"], messages::GENERIC_ERROR);
    }
}
