// src/shared/api/json_config.rs
use crate::shared::api::ApiResponse;
use actix_web::web::{JsonConfig, PathConfig};

/// Largest accepted text payload, for JSON bodies and multipart text fields alike.
pub const MAX_TEXT_PAYLOAD_BYTES: usize = 64 * 1024;

pub fn custom_json_config() -> JsonConfig {
    JsonConfig::default()
        .limit(MAX_TEXT_PAYLOAD_BYTES)
        .error_handler(|err, _req| {
            let message = err.to_string();
            actix_web::error::InternalError::from_response(err, ApiResponse::bad_request(&message))
                .into()
        })
}

pub fn custom_path_config() -> PathConfig {
    PathConfig::default().error_handler(|err, _req| {
        let message = err.to_string();
        actix_web::error::InternalError::from_response(err, ApiResponse::bad_request(&message))
            .into()
    })
}
