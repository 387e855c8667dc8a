//! Database migrations module

pub use sea_orm_migration::prelude::*;

mod m20250101_000001_create_users;
mod m20250101_000002_create_roles;
mod m20250101_000003_create_authorities;
mod m20250101_000004_create_users_roles;
mod m20250101_000005_create_roles_authorities;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20250101_000001_create_users::Migration),
            Box::new(m20250101_000002_create_roles::Migration),
            Box::new(m20250101_000003_create_authorities::Migration),
            Box::new(m20250101_000004_create_users_roles::Migration),
            Box::new(m20250101_000005_create_roles_authorities::Migration),
        ]
    }
}
