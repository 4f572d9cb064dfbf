pub use sea_orm_migration::prelude::*;

mod m20240115_000001_create_users_table;
mod m20240115_000002_create_profiles_table;
mod m20240115_000003_create_portfolios_table;

pub use m20240115_000002_create_profiles_table::profiles_table;
pub use m20240115_000003_create_portfolios_table::portfolios_table;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20240115_000001_create_users_table::Migration),
            Box::new(m20240115_000002_create_profiles_table::Migration),
            Box::new(m20240115_000003_create_portfolios_table::Migration),
        ]
    }
}
