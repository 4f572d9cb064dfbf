use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(portfolios_table())
            .await?;

        manager
            .get_connection()
            .execute_unprepared(
                r#"
                CREATE INDEX idx_portfolios_profile_id
                ON portfolios (profile_id);
                "#,
            )
            .await?;

        manager
            .get_connection()
            .execute_unprepared(
                r#"
                CREATE TRIGGER update_portfolios_updated_at
                BEFORE UPDATE ON portfolios
                FOR EACH ROW
                EXECUTE FUNCTION update_updated_at_column();
                "#,
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .get_connection()
            .execute_unprepared(
                r#"
                DROP TRIGGER IF EXISTS update_portfolios_updated_at ON portfolios;
                DROP INDEX IF EXISTS idx_portfolios_profile_id;
                "#,
            )
            .await?;

        manager
            .drop_table(Table::drop().table(Portfolios::Table).to_owned())
            .await
    }
}

/// Column layout of `portfolios`, also checked against the SeaORM entity.
pub fn portfolios_table() -> TableCreateStatement {
    Table::create()
        .table(Portfolios::Table)
        .if_not_exists()
        .col(
            ColumnDef::new(Portfolios::Id)
                .integer()
                .not_null()
                .auto_increment()
                .primary_key(),
        )
        .col(ColumnDef::new(Portfolios::ProfileId).integer().not_null())
        .col(
            ColumnDef::new(Portfolios::ImageUrl)
                .text()
                .not_null(),
        )
        .col(
            ColumnDef::new(Portfolios::CreatedAt)
                .timestamp_with_time_zone()
                .not_null()
                .default(Expr::current_timestamp()),
        )
        .col(
            ColumnDef::new(Portfolios::UpdatedAt)
                .timestamp_with_time_zone()
                .not_null()
                .default(Expr::current_timestamp()),
        )
        .foreign_key(
            ForeignKey::create()
                .name("fk_portfolios_profile_id")
                .from(Portfolios::Table, Portfolios::ProfileId)
                .to(Profiles::Table, Profiles::Id)
                .on_delete(ForeignKeyAction::Cascade)
                .on_update(ForeignKeyAction::Cascade),
        )
        .to_owned()
}

#[derive(DeriveIden)]
enum Portfolios {
    Table,
    Id,
    ProfileId,
    ImageUrl,
    CreatedAt,
    UpdatedAt,
}

#[derive(DeriveIden)]
enum Profiles {
    Table,
    Id,
}
