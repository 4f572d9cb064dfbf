// src/api/schemas.rs
use serde::Serialize;
use utoipa::ToSchema;

use crate::shared::api::EnvelopeStatus;

/// Envelope carrying a payload
#[derive(Serialize, ToSchema)]
#[serde(bound = "T: Serialize")]
pub struct PayloadEnvelope<T> {
    /// Response data
    pub message: T,
    /// Always `success`
    pub status: EnvelopeStatus,
}

/// Envelope carrying a localized text
#[derive(Serialize, ToSchema)]
pub struct MessageEnvelope {
    #[schema(example = "Profilis sėkmingai sukurtas")]
    pub message: String,
    /// `success` or `danger`
    pub status: EnvelopeStatus,
}
