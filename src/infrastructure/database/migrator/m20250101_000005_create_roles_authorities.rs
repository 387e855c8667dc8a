//! Migration to create roles_authorities junction table

use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(RolesAuthorities::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(RolesAuthorities::RolesId)
                            .big_integer()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(RolesAuthorities::AuthoritiesId)
                            .big_integer()
                            .not_null(),
                    )
                    .primary_key(
                        Index::create()
                            .name("pk_roles_authorities")
                            .col(RolesAuthorities::RolesId)
                            .col(RolesAuthorities::AuthoritiesId),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_roles_authorities_role")
                            .from(RolesAuthorities::Table, RolesAuthorities::RolesId)
                            .to(Roles::Table, Roles::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_roles_authorities_authority")
                            .from(RolesAuthorities::Table, RolesAuthorities::AuthoritiesId)
                            .to(Authorities::Table, Authorities::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(RolesAuthorities::Table).to_owned())
            .await
    }
}

#[derive(Iden)]
enum RolesAuthorities {
    Table,
    RolesId,
    AuthoritiesId,
}

#[derive(Iden)]
enum Roles {
    Table,
    Id,
}

#[derive(Iden)]
enum Authorities {
    Table,
    Id,
}
