//! roles ↔ authorities junction table

use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "roles_authorities")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub roles_id: i64,
    #[sea_orm(primary_key, auto_increment = false)]
    pub authorities_id: i64,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::role::Entity",
        from = "Column::RolesId",
        to = "super::role::Column::Id"
    )]
    Role,
    #[sea_orm(
        belongs_to = "super::authority::Entity",
        from = "Column::AuthoritiesId",
        to = "super::authority::Column::Id"
    )]
    Authority,
}

impl ActiveModelBehavior for ActiveModel {}
