use async_trait::async_trait;
use futures::future::try_join_all;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, DbErr, EntityTrait, PaginatorTrait,
    QueryFilter, Set, SqlErr, TransactionTrait,
};
use std::sync::Arc;

use crate::auth::application::domain::entities::UserId;
use crate::profile::application::domain::entities::{Profile, ProfileId, ProfileWithPortfolio};
use crate::profile::application::ports::outgoing::{
    CreateProfileData, ProfileRepository, ProfileRepositoryError, UpdateProfileData,
};

use super::sea_orm_entity::portfolios;
use super::sea_orm_entity::profiles::{ActiveModel, Column, Entity};

#[derive(Debug, Clone)]
pub struct ProfileRepositoryPostgres {
    db: Arc<DatabaseConnection>,
}

impl ProfileRepositoryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

#[async_trait]
impl ProfileRepository for ProfileRepositoryPostgres {
    async fn exists_for_user(&self, user_id: UserId) -> Result<bool, ProfileRepositoryError> {
        let count = Entity::find()
            .filter(Column::UserId.eq(user_id.value()))
            .count(&*self.db)
            .await
            .map_err(map_db_err)?;

        Ok(count > 0)
    }

    async fn insert_profile(
        &self,
        data: CreateProfileData,
    ) -> Result<ProfileWithPortfolio, ProfileRepositoryError> {
        let txn = self.db.begin().await.map_err(map_db_err)?;

        let active = ActiveModel {
            user_id: Set(data.user_id.value()),
            headline: Set(data.headline),
            subheadline: Set(data.subheadline),
            description: Set(data.description),
            hourly_rate: Set(data.hourly_rate),
            profile_image: Set(data.profile_image),
            location: Set(data.location),
            ..Default::default()
        };

        let profile = match active.insert(&txn).await {
            Ok(inserted) => inserted.to_domain(),
            Err(e) => {
                let _ = txn.rollback().await;
                return Err(map_insert_err(e));
            }
        };

        let inserts = data.portfolio_images.into_iter().map(|image_url| {
            portfolios::ActiveModel {
                profile_id: Set(profile.id),
                image_url: Set(image_url),
                ..Default::default()
            }
            .insert(&txn)
        });
        let inserted = try_join_all(inserts).await;

        let portfolio = match inserted {
            Ok(rows) => rows.into_iter().map(|m| m.to_domain()).collect(),
            Err(e) => {
                let _ = txn.rollback().await;
                return Err(map_db_err(e));
            }
        };

        txn.commit().await.map_err(map_db_err)?;

        Ok(ProfileWithPortfolio { profile, portfolio })
    }

    async fn update_profile(
        &self,
        profile_id: ProfileId,
        data: UpdateProfileData,
    ) -> Result<Profile, ProfileRepositoryError> {
        let active = ActiveModel {
            id: Set(profile_id),
            headline: Set(data.headline),
            subheadline: Set(data.subheadline),
            description: Set(data.description),
            hourly_rate: Set(data.hourly_rate),
            location: Set(data.location),
            ..Default::default()
        };

        let updated = active.update(&*self.db).await.map_err(|e| match e {
            DbErr::RecordNotUpdated => ProfileRepositoryError::NotFound,
            other => map_db_err(other),
        })?;

        Ok(updated.to_domain())
    }
}

fn map_insert_err(e: DbErr) -> ProfileRepositoryError {
    if let Some(SqlErr::UniqueConstraintViolation(_)) = e.sql_err() {
        return ProfileRepositoryError::ProfileAlreadyExists;
    }

    let msg = e.to_string().to_lowercase();

    if (msg.contains("duplicate") || msg.contains("unique") || msg.contains("23505"))
        && msg.contains("user_id")
    {
        ProfileRepositoryError::ProfileAlreadyExists
    } else {
        ProfileRepositoryError::DatabaseError(e.to_string())
    }
}

fn map_db_err(e: DbErr) -> ProfileRepositoryError {
    ProfileRepositoryError::DatabaseError(e.to_string())
}

// ============================================================================
// Tests
// ============================================================================
