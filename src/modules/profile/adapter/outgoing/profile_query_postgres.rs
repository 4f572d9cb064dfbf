use async_trait::async_trait;
use sea_orm::{
    ColumnTrait, DatabaseConnection, DbErr, EntityTrait, QueryFilter, QueryOrder, Select,
};
use std::sync::Arc;

use crate::auth::application::domain::entities::UserId;
use crate::profile::application::domain::entities::{Profile, ProfileId};
use crate::profile::application::ports::outgoing::{
    HeadlineOrder, ProfileListOptions, ProfileQuery, ProfileQueryError,
};

use super::sea_orm_entity::profiles::{Column, Entity};

#[derive(Debug, Clone)]
pub struct ProfileQueryPostgres {
    db: Arc<DatabaseConnection>,
}

impl ProfileQueryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

/// Ties on headline fall back to id so equal headlines keep a stable order.
fn build_select(options: &ProfileListOptions) -> Select<Entity> {
    let mut query = Entity::find();

    if let Some(rate) = options.min_hourly_rate {
        query = query.filter(Column::HourlyRate.gte(rate));
    }

    query = match options.order {
        Some(HeadlineOrder::Asc) => query.order_by_asc(Column::Headline),
        Some(HeadlineOrder::Desc) => query.order_by_desc(Column::Headline),
        None => query,
    };

    query.order_by_asc(Column::Id)
}

#[async_trait]
impl ProfileQuery for ProfileQueryPostgres {
    async fn get_all(&self, options: ProfileListOptions) -> Result<Vec<Profile>, ProfileQueryError> {
        let rows = build_select(&options)
            .all(&*self.db)
            .await
            .map_err(map_db_err)?;

        Ok(rows.into_iter().map(|m| m.to_domain()).collect())
    }

    async fn get_by_id(&self, id: ProfileId) -> Result<Option<Profile>, ProfileQueryError> {
        let row = Entity::find_by_id(id)
            .one(&*self.db)
            .await
            .map_err(map_db_err)?;

        Ok(row.map(|m| m.to_domain()))
    }

    async fn get_by_user_id(&self, user_id: UserId) -> Result<Option<Profile>, ProfileQueryError> {
        let row = Entity::find()
            .filter(Column::UserId.eq(user_id.value()))
            .one(&*self.db)
            .await
            .map_err(map_db_err)?;

        Ok(row.map(|m| m.to_domain()))
    }
}

fn map_db_err(e: DbErr) -> ProfileQueryError {
    ProfileQueryError::DatabaseError(e.to_string())
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use sea_orm::{DatabaseBackend, MockDatabase, QueryTrait};

    use super::super::sea_orm_entity::profiles::Model;

    fn profile_model(id: i32, user_id: i32, headline: &str, hourly_rate: i32) -> Model {
        let now = Utc::now().fixed_offset();

        Model {
            id,
            user_id,
            headline: Some(headline.to_string()),
            subheadline: None,
            description: None,
            hourly_rate,
            profile_image: None,
            location: None,
            created_at: now,
            updated_at: now,
        }
    }

    fn sql_for(options: ProfileListOptions) -> String {
        build_select(&options)
            .build(DatabaseBackend::Postgres)
            .to_string()
    }

    // ========================================================================
    // build_select
    // ========================================================================

    #[test]
    fn test_default_listing_is_ordered_by_id_only() {
        let sql = sql_for(ProfileListOptions::default());

        assert!(sql.ends_with(r#"ORDER BY "profiles"."id" ASC"#));
        assert!(!sql.contains("WHERE"));
    }

    #[test]
    fn test_ascending_headline_order() {
        let sql = sql_for(ProfileListOptions {
            order: Some(HeadlineOrder::Asc),
            ..Default::default()
        });

        assert!(sql.contains(r#"ORDER BY "profiles"."headline" ASC, "profiles"."id" ASC"#));
    }

    #[test]
    fn test_descending_headline_order() {
        let sql = sql_for(ProfileListOptions {
            order: Some(HeadlineOrder::Desc),
            ..Default::default()
        });

        assert!(sql.contains(r#"ORDER BY "profiles"."headline" DESC, "profiles"."id" ASC"#));
    }

    #[test]
    fn test_min_hourly_rate_is_inclusive() {
        let sql = sql_for(ProfileListOptions {
            min_hourly_rate: Some(50),
            ..Default::default()
        });

        assert!(sql.contains(r#"WHERE "profiles"."hourly_rate" >= 50"#));
    }

    // ========================================================================
    // get_all / get_by_id / get_by_user_id
    // ========================================================================

    #[tokio::test]
    async fn test_get_all_maps_rows() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results(vec![vec![
                profile_model(1, 10, "Alpha", 20),
                profile_model(2, 11, "Beta", 70),
            ]])
            .into_connection();

        let query = ProfileQueryPostgres::new(Arc::new(db));

        let profiles = query.get_all(ProfileListOptions::default()).await.unwrap();

        assert_eq!(profiles.len(), 2);
        assert_eq!(profiles[1].user_id, UserId::from(11));
        assert_eq!(profiles[1].hourly_rate, 70);
    }

    #[tokio::test]
    async fn test_get_all_database_error() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_errors(vec![DbErr::Custom("connection error".to_string())])
            .into_connection();

        let query = ProfileQueryPostgres::new(Arc::new(db));

        assert!(matches!(
            query.get_all(ProfileListOptions::default()).await,
            Err(ProfileQueryError::DatabaseError(_))
        ));
    }

    #[tokio::test]
    async fn test_get_by_id_found() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results(vec![vec![profile_model(4, 10, "Designer", 35)]])
            .into_connection();

        let query = ProfileQueryPostgres::new(Arc::new(db));

        let profile = query.get_by_id(4).await.unwrap().unwrap();

        assert_eq!(profile.id, 4);
        assert_eq!(profile.headline.as_deref(), Some("Designer"));
    }

    #[tokio::test]
    async fn test_get_by_id_missing() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results(vec![Vec::<Model>::new()])
            .into_connection();

        let query = ProfileQueryPostgres::new(Arc::new(db));

        assert!(query.get_by_id(4).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_get_by_user_id_found() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results(vec![vec![profile_model(4, 10, "Designer", 35)]])
            .into_connection();

        let query = ProfileQueryPostgres::new(Arc::new(db));

        let profile = query.get_by_user_id(UserId::from(10)).await.unwrap();

        assert_eq!(profile.map(|p| p.id), Some(4));
    }
}
