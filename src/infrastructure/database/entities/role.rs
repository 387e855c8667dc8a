//! Role entity for database

use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "roles")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    #[sea_orm(unique)]
    pub name: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl Related<super::user::Entity> for Entity {
    fn to() -> RelationDef {
        super::users_roles::Relation::User.def()
    }

    fn via() -> Option<RelationDef> {
        Some(super::users_roles::Relation::Role.def().rev())
    }
}

impl Related<super::authority::Entity> for Entity {
    fn to() -> RelationDef {
        super::roles_authorities::Relation::Authority.def()
    }

    fn via() -> Option<RelationDef> {
        Some(super::roles_authorities::Relation::Role.def().rev())
    }
}

impl ActiveModelBehavior for ActiveModel {}
