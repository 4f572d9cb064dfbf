use async_trait::async_trait;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, DbErr, EntityTrait, QueryFilter,
    QueryOrder, Set,
};
use std::sync::Arc;

use crate::profile::application::domain::entities::{PortfolioItem, PortfolioItemId, ProfileId};
use crate::profile::application::ports::outgoing::{
    CreatePortfolioItemData, PortfolioRepository, PortfolioRepositoryError,
};

use super::sea_orm_entity::portfolios::{ActiveModel, Column, Entity};

#[derive(Debug, Clone)]
pub struct PortfolioRepositoryPostgres {
    db: Arc<DatabaseConnection>,
}

impl PortfolioRepositoryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

#[async_trait]
impl PortfolioRepository for PortfolioRepositoryPostgres {
    async fn get_all(
        &self,
        profile_id: ProfileId,
    ) -> Result<Vec<PortfolioItem>, PortfolioRepositoryError> {
        let rows = Entity::find()
            .filter(Column::ProfileId.eq(profile_id))
            .order_by_asc(Column::Id)
            .all(&*self.db)
            .await
            .map_err(map_db_err)?;

        Ok(rows.into_iter().map(|m| m.to_domain()).collect())
    }

    async fn get_by_id(
        &self,
        id: PortfolioItemId,
    ) -> Result<Option<PortfolioItem>, PortfolioRepositoryError> {
        let row = Entity::find_by_id(id)
            .one(&*self.db)
            .await
            .map_err(map_db_err)?;

        Ok(row.map(|m| m.to_domain()))
    }

    async fn insert(
        &self,
        data: CreatePortfolioItemData,
    ) -> Result<PortfolioItem, PortfolioRepositoryError> {
        let active = ActiveModel {
            profile_id: Set(data.profile_id),
            image_url: Set(data.image_url),
            ..Default::default()
        };

        let inserted = active.insert(&*self.db).await.map_err(map_db_err)?;

        Ok(inserted.to_domain())
    }

    async fn remove(&self, id: PortfolioItemId) -> Result<(), PortfolioRepositoryError> {
        let result = Entity::delete_by_id(id)
            .exec(&*self.db)
            .await
            .map_err(map_db_err)?;

        if result.rows_affected == 0 {
            return Err(PortfolioRepositoryError::NotFound);
        }

        Ok(())
    }
}

fn map_db_err(e: DbErr) -> PortfolioRepositoryError {
    PortfolioRepositoryError::DatabaseError(e.to_string())
}
