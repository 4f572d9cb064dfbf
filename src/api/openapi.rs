use crate::api::schemas::{MessageEnvelope, PayloadEnvelope};
use utoipa::openapi::security::{ApiKey, ApiKeyValue, HttpAuthScheme, HttpBuilder, SecurityScheme};
use utoipa::OpenApi;

use crate::auth::adapter::incoming::web::extractors::auth::AUTH_COOKIE_NAME;
use crate::profile::adapter::incoming::web::routes::{
    CreateProfileForm, NumericField, UpdateProfileRequest,
};
use crate::profile::application::domain::entities::{
    PortfolioItem, Profile, ProfileWithFirstItem, ProfileWithPortfolio,
};
use crate::shared::api::EnvelopeStatus;

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Freelancer Profiles API",
        version = "1.0.0",
        description = "Freelancer profiles with portfolio galleries"
    ),
    paths(
        crate::profile::adapter::incoming::web::routes::list_profiles_handler,
        crate::profile::adapter::incoming::web::routes::sort_profiles_handler,
        crate::profile::adapter::incoming::web::routes::filter_profiles_by_rate_handler,
        crate::profile::adapter::incoming::web::routes::get_single_profile_handler,
        crate::profile::adapter::incoming::web::routes::get_profile_for_edit_handler,
        crate::profile::adapter::incoming::web::routes::create_profile_handler,
        crate::profile::adapter::incoming::web::routes::update_profile_handler,
        crate::profile::adapter::incoming::web::routes::remove_portfolio_item_handler,
    ),
    components(
        schemas(
            // Envelopes
            MessageEnvelope,
            PayloadEnvelope<Vec<Profile>>,
            EnvelopeStatus,

            // Profiles
            Profile,
            PortfolioItem,
            ProfileWithFirstItem,
            ProfileWithPortfolio,
            CreateProfileForm,
            UpdateProfileRequest,
            NumericField
        )
    ),
    modifiers(&SecurityAddon),
    tags(
        (name = "profiles", description = "Freelancer profile endpoints"),
    )
)]
pub struct ApiDoc;

struct SecurityAddon;

impl utoipa::Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        if let Some(components) = openapi.components.as_mut() {
            components.add_security_scheme(
                "CookieAuth",
                SecurityScheme::ApiKey(ApiKey::Cookie(ApiKeyValue::new(AUTH_COOKIE_NAME))),
            );
            components.add_security_scheme(
                "BearerAuth",
                SecurityScheme::Http(
                    HttpBuilder::new()
                        .scheme(HttpAuthScheme::Bearer)
                        .bearer_format("JWT")
                        .description(Some("Access token issued by the users service"))
                        .build(),
                ),
            )
        }
    }
}
