pub mod api;
pub mod health;
pub mod modules;
pub mod shared;

pub use modules::auth;
pub use modules::profile;

use crate::api::openapi::ApiDoc;
use crate::auth::adapter::outgoing::jwt::{JwtConfig, JwtTokenService};
use crate::auth::application::ports::outgoing::token_provider::TokenProvider;
use crate::profile::adapter::outgoing::{
    LocalImageStorage, PortfolioRepositoryPostgres, ProfileQueryPostgres,
    ProfileRepositoryPostgres,
};
use crate::profile::application::domain::policies::UploadPolicy;
use crate::profile::application::profile_use_cases::ProfileUseCases;
use crate::profile::application::service::{
    CreateProfileService, GetProfileForEditService, GetSingleProfileService, ListProfilesService,
    RemovePortfolioItemService, UpdateProfileService,
};
use crate::shared::api::{custom_json_config, custom_path_config};
use crate::shared::config::AppConfig;

use actix_web::{middleware::NormalizePath, web, App, HttpServer};
use migration::{Migrator, MigratorTrait};
use sea_orm::{ConnectOptions, Database};
use std::io;
use std::sync::Arc;
use std::time::Duration;

use tracing::{error, info};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

#[cfg(test)]
mod tests;

#[derive(Clone)]
pub struct AppState {
    pub profile: ProfileUseCases,
    pub upload_policy: UploadPolicy,
}

#[actix_web::main]
#[cfg(not(tarpaulin_include))]
async fn start() -> io::Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,actix_web=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting application...");

    // Try .env.{environment} first, then fall back to .env
    let env = std::env::var("RUST_ENV").unwrap_or_else(|_| "development".to_string());
    let env_file = format!(".env.{}", env);
    if dotenvy::from_filename(&env_file).is_err() {
        dotenvy::dotenv().ok();
    }

    let config = AppConfig::from_env().map_err(io::Error::other)?;
    let jwt_config = JwtConfig::from_env().map_err(io::Error::other)?;

    // Database connection
    let mut opt = ConnectOptions::new(config.database_url.clone());
    opt.max_connections(50)
        .min_connections(10)
        .connect_timeout(Duration::from_secs(5))
        .acquire_timeout(Duration::from_secs(5))
        .idle_timeout(Duration::from_secs(300))
        .max_lifetime(Duration::from_secs(1800))
        .sqlx_logging(false);

    let conn = Database::connect(opt).await.map_err(|e| {
        error!("Failed to connect to database: {}", e);
        io::Error::other(e)
    })?;

    Migrator::up(&conn, None).await.map_err(|e| {
        error!("Failed to run migrations: {}", e);
        io::Error::other(e)
    })?;

    let db_arc = Arc::new(conn);

    tokio::fs::create_dir_all(&config.upload_dir).await?;

    // Adapters
    let profile_repo = ProfileRepositoryPostgres::new(Arc::clone(&db_arc));
    let profile_query = ProfileQueryPostgres::new(Arc::clone(&db_arc));
    let portfolio_repo = PortfolioRepositoryPostgres::new(Arc::clone(&db_arc));
    let image_storage = LocalImageStorage::new(config.upload_dir.clone());

    let state = AppState {
        profile: ProfileUseCases {
            create: Arc::new(CreateProfileService::new(
                profile_repo.clone(),
                image_storage.clone(),
            )),
            list: Arc::new(ListProfilesService::new(profile_query.clone())),
            get_single: Arc::new(GetSingleProfileService::new(
                profile_query.clone(),
                portfolio_repo.clone(),
            )),
            get_for_edit: Arc::new(GetProfileForEditService::new(
                profile_query.clone(),
                portfolio_repo.clone(),
            )),
            update: Arc::new(UpdateProfileService::new(
                profile_query.clone(),
                profile_repo,
            )),
            remove_portfolio_item: Arc::new(RemovePortfolioItemService::new(
                portfolio_repo,
                profile_query,
                image_storage,
            )),
        },
        upload_policy: UploadPolicy::default(),
    };

    let token_provider_arc: Arc<dyn TokenProvider + Send + Sync> =
        Arc::new(JwtTokenService::new(jwt_config));
    let db_for_server = Arc::clone(&db_arc);
    let upload_dir = config.upload_dir.clone();
    let openapi = ApiDoc::openapi();

    let server_url = config.server_url();
    info!("Server run on: {}", server_url);

    HttpServer::new(move || {
        App::new()
            .wrap(NormalizePath::trim())
            .app_data(web::Data::new(state.clone()))
            .app_data(web::Data::new(Arc::clone(&token_provider_arc)))
            .app_data(web::Data::new(Arc::clone(&db_for_server)))
            .app_data(custom_json_config())
            .app_data(custom_path_config())
            .configure(init_routes)
            .service(actix_files::Files::new("/uploads", upload_dir.clone()))
            .service(
                SwaggerUi::new("/swagger-ui/{_:.*}")
                    .url("/api-docs/openapi.json", openapi.clone()),
            )
    })
    .bind(server_url)?
    .run()
    .await
}

#[cfg(not(tarpaulin_include))]
fn init_routes(cfg: &mut web::ServiceConfig) {
    // Health
    cfg.service(crate::health::health);
    cfg.service(crate::health::readiness);
    // Profiles
    cfg.service(crate::profile::adapter::incoming::web::routes::list_profiles_handler);
    cfg.service(crate::profile::adapter::incoming::web::routes::sort_profiles_handler);
    cfg.service(crate::profile::adapter::incoming::web::routes::filter_profiles_by_rate_handler);
    cfg.service(crate::profile::adapter::incoming::web::routes::get_single_profile_handler);
    cfg.service(crate::profile::adapter::incoming::web::routes::get_profile_for_edit_handler);
    cfg.service(crate::profile::adapter::incoming::web::routes::create_profile_handler);
    cfg.service(crate::profile::adapter::incoming::web::routes::update_profile_handler);
    cfg.service(crate::profile::adapter::incoming::web::routes::remove_portfolio_item_handler);
}

#[cfg(not(tarpaulin_include))]
fn main() {
    if let Err(e) = start() {
        eprintln!("Error starting app: {e}");
    }
}
