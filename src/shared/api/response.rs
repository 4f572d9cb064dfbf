// src/shared/api/response.rs
use actix_web::{http::StatusCode, HttpResponse};
use serde::Serialize;
use utoipa::ToSchema;

use super::messages;

#[derive(Serialize, Debug, Clone, Copy, PartialEq, Eq, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum EnvelopeStatus {
    Success,
    Danger,
}

/// Every endpoint answers with `{message, status}`. `message` carries either
/// the payload or a localized text.
#[derive(Serialize)]
pub struct ApiResponse<T: Serialize> {
    pub message: T,
    pub status: EnvelopeStatus,
}

impl<T: Serialize> ApiResponse<T> {
    pub fn success(message: T) -> HttpResponse {
        HttpResponse::Ok().json(ApiResponse {
            message,
            status: EnvelopeStatus::Success,
        })
    }

    pub fn created(message: T) -> HttpResponse {
        HttpResponse::Created().json(ApiResponse {
            message,
            status: EnvelopeStatus::Success,
        })
    }
}

impl ApiResponse<()> {
    pub fn error(code: StatusCode, message: &str) -> HttpResponse {
        HttpResponse::build(code).json(ApiResponse {
            message,
            status: EnvelopeStatus::Danger,
        })
    }

    pub fn not_found(message: &str) -> HttpResponse {
        Self::error(StatusCode::NOT_FOUND, message)
    }

    pub fn bad_request(message: &str) -> HttpResponse {
        Self::error(StatusCode::BAD_REQUEST, message)
    }

    pub fn forbidden() -> HttpResponse {
        Self::error(StatusCode::FORBIDDEN, messages::FORBIDDEN)
    }

    pub fn unauthorized() -> HttpResponse {
        Self::error(StatusCode::UNAUTHORIZED, messages::UNAUTHORIZED)
    }

    pub fn conflict(message: &str) -> HttpResponse {
        Self::error(StatusCode::CONFLICT, message)
    }

    pub fn internal_error() -> HttpResponse {
        Self::error(StatusCode::INTERNAL_SERVER_ERROR, messages::GENERIC_ERROR)
    }
}
