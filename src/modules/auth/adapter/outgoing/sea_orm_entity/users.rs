use sea_orm::entity::prelude::*;

/// Accounts are managed by the users service; profiles only reference them.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "users")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub name: String,
    #[sea_orm(unique)]
    pub email: String,
    pub password_hash: String,
    pub created_at: DateTimeWithTimeZone,
    pub updated_at: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_one = "crate::modules::profile::adapter::outgoing::sea_orm_entity::profiles::Entity")]
    Profile,
}

impl Related<crate::modules::profile::adapter::outgoing::sea_orm_entity::profiles::Entity>
    for Entity
{
    fn to() -> RelationDef {
        Relation::Profile.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
