use sea_orm::entity::prelude::*;

use crate::auth::application::domain::entities::UserId;
use crate::profile::application::domain::entities::Profile;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "profiles")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,

    // One profile per user, enforced by idx_profiles_user_id_unique
    #[sea_orm(unique)]
    pub user_id: i32,

    #[sea_orm(column_type = "String(StringLen::N(255))", nullable)]
    pub headline: Option<String>,

    #[sea_orm(column_type = "String(StringLen::N(255))", nullable)]
    pub subheadline: Option<String>,

    #[sea_orm(column_type = "Text", nullable)]
    pub description: Option<String>,

    pub hourly_rate: i32,

    #[sea_orm(column_type = "Text", nullable)]
    pub profile_image: Option<String>,

    #[sea_orm(column_type = "String(StringLen::N(255))", nullable)]
    pub location: Option<String>,

    #[sea_orm(column_type = "TimestampWithTimeZone")]
    pub created_at: DateTimeWithTimeZone,

    #[sea_orm(column_type = "TimestampWithTimeZone")]
    pub updated_at: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "crate::modules::auth::adapter::outgoing::sea_orm_entity::users::Entity",
        from = "Column::UserId",
        to = "crate::modules::auth::adapter::outgoing::sea_orm_entity::users::Column::Id",
        on_update = "Cascade",
        on_delete = "Cascade"
    )]
    Users,

    #[sea_orm(
        has_many = "crate::modules::profile::adapter::outgoing::sea_orm_entity::portfolios::Entity"
    )]
    Portfolios,
}

impl Related<crate::modules::auth::adapter::outgoing::sea_orm_entity::users::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Users.def()
    }
}

impl Related<super::portfolios::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Portfolios.def()
    }
}

#[async_trait::async_trait]
impl ActiveModelBehavior for ActiveModel {
    async fn before_save<C>(mut self, _db: &C, _insert: bool) -> Result<Self, DbErr>
    where
        C: ConnectionTrait,
    {
        #[cfg(feature = "no_db_triggers")]
        {
            use chrono::Utc;
            use sea_orm::ActiveValue::Set;

            if !_insert {
                self.updated_at = Set(Utc::now().into());
            }
        }

        Ok(self)
    }
}

impl Model {
    pub fn to_domain(self) -> Profile {
        Profile {
            id: self.id,
            user_id: UserId::from(self.user_id),
            headline: self.headline,
            subheadline: self.subheadline,
            description: self.description,
            hourly_rate: self.hourly_rate,
            profile_image: self.profile_image,
            location: self.location,
            created_at: self.created_at.into(),
            updated_at: self.updated_at.into(),
        }
    }
}
