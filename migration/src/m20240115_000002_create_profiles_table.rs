use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // =====================================================
        // Create profiles table
        // =====================================================
        manager
            .create_table(profiles_table())
            .await?;

        // =====================================================
        // Indexes
        // =====================================================

        // One profile per user
        manager
            .get_connection()
            .execute_unprepared(
                r#"
                CREATE UNIQUE INDEX idx_profiles_user_id_unique
                ON profiles (user_id);
                "#,
            )
            .await?;

        // Rate filter
        manager
            .get_connection()
            .execute_unprepared(
                r#"
                CREATE INDEX idx_profiles_hourly_rate
                ON profiles (hourly_rate);
                "#,
            )
            .await?;

        manager
            .get_connection()
            .execute_unprepared(
                r#"
                CREATE TRIGGER update_profiles_updated_at
                BEFORE UPDATE ON profiles
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
                DROP TRIGGER IF EXISTS update_profiles_updated_at ON profiles;
                "#,
            )
            .await?;

        manager
            .get_connection()
            .execute_unprepared(
                r#"
                DROP INDEX IF EXISTS idx_profiles_user_id_unique;
                DROP INDEX IF EXISTS idx_profiles_hourly_rate;
                "#,
            )
            .await?;

        manager
            .drop_table(Table::drop().table(Profiles::Table).to_owned())
            .await
    }
}

/// Column layout of `profiles`, also checked against the SeaORM entity.
pub fn profiles_table() -> TableCreateStatement {
    Table::create()
        .table(Profiles::Table)
        .if_not_exists()
        .col(
            ColumnDef::new(Profiles::Id)
                .integer()
                .not_null()
                .auto_increment()
                .primary_key(),
        )
        .col(ColumnDef::new(Profiles::UserId).integer().not_null())
        .col(ColumnDef::new(Profiles::Headline).string_len(255))
        .col(ColumnDef::new(Profiles::Subheadline).string_len(255))
        .col(ColumnDef::new(Profiles::Description).text())
        .col(ColumnDef::new(Profiles::HourlyRate).integer().not_null())
        .col(ColumnDef::new(Profiles::ProfileImage).text())
        .col(ColumnDef::new(Profiles::Location).string_len(255))
        .col(
            ColumnDef::new(Profiles::CreatedAt)
                .timestamp_with_time_zone()
                .not_null()
                .default(Expr::current_timestamp()),
        )
        .col(
            ColumnDef::new(Profiles::UpdatedAt)
                .timestamp_with_time_zone()
                .not_null()
                .default(Expr::current_timestamp()),
        )
        .foreign_key(
            ForeignKey::create()
                .name("fk_profiles_user_id")
                .from(Profiles::Table, Profiles::UserId)
                .to(Users::Table, Users::Id)
                .on_delete(ForeignKeyAction::Cascade)
                .on_update(ForeignKeyAction::Cascade),
        )
        .to_owned()
}

#[derive(DeriveIden)]
enum Profiles {
    Table,
    Id,
    UserId,
    Headline,
    Subheadline,
    Description,
    HourlyRate,
    ProfileImage,
    Location,
    CreatedAt,
    UpdatedAt,
}

#[derive(DeriveIden)]
enum Users {
    Table,
    Id,
}
