//! Authority entity for database

use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "authorities")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    #[sea_orm(unique)]
    pub name: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl Related<super::role::Entity> for Entity {
    fn to() -> RelationDef {
        super::roles_authorities::Relation::Role.def()
    }

    fn via() -> Option<RelationDef> {
        Some(super::roles_authorities::Relation::Authority.def().rev())
    }
}

impl ActiveModelBehavior for ActiveModel {}
