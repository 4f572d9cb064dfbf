mod local_image_storage;
mod portfolio_repository_postgres;
mod profile_query_postgres;
mod profile_repository_postgres;
pub mod sea_orm_entity;

pub use local_image_storage::LocalImageStorage;
pub use portfolio_repository_postgres::PortfolioRepositoryPostgres;
pub use profile_query_postgres::ProfileQueryPostgres;
pub use profile_repository_postgres::ProfileRepositoryPostgres;
