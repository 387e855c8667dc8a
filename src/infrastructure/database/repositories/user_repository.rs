use async_trait::async_trait;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, ModelTrait, NotSet,
    QueryFilter, QueryOrder, Set,
};

use crate::domain::{Authority, DomainError, DomainResult, Role, UserRecord, UserRepository};
use crate::infrastructure::database::entities::{
    authority, role, roles_authorities, user, users_roles,
};

/// SeaORM-backed [`UserRepository`].
///
/// Roles and authorities are reference data shared across users: `save`
/// reuses existing rows by name and only creates the missing ones.
pub struct SeaOrmUserRepository {
    db: DatabaseConnection,
}

impl SeaOrmUserRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    /// Load roles and their authorities for a stored user row,
    /// in insertion order.
    async fn load_roles(&self, model: &user::Model) -> DomainResult<Vec<Role>> {
        let role_rows = model
            .find_related(role::Entity)
            .order_by_asc(role::Column::Id)
            .all(&self.db)
            .await
            .map_err(db_err)?;

        let mut roles = Vec::with_capacity(role_rows.len());
        for role_row in role_rows {
            let authority_rows = role_row
                .find_related(authority::Entity)
                .order_by_asc(authority::Column::Id)
                .all(&self.db)
                .await
                .map_err(db_err)?;

            roles.push(Role {
                name: role_row.name,
                authorities: authority_rows
                    .into_iter()
                    .map(|row| Authority { name: row.name })
                    .collect(),
            });
        }

        Ok(roles)
    }

    async fn role_id_or_create(&self, name: &str) -> DomainResult<i64> {
        if let Some(existing) = role::Entity::find()
            .filter(role::Column::Name.eq(name))
            .one(&self.db)
            .await
            .map_err(db_err)?
        {
            return Ok(existing.id);
        }

        let created = role::ActiveModel {
            id: NotSet,
            name: Set(name.to_string()),
        }
        .insert(&self.db)
        .await
        .map_err(db_err)?;

        Ok(created.id)
    }

    async fn authority_id_or_create(&self, name: &str) -> DomainResult<i64> {
        if let Some(existing) = authority::Entity::find()
            .filter(authority::Column::Name.eq(name))
            .one(&self.db)
            .await
            .map_err(db_err)?
        {
            return Ok(existing.id);
        }

        let created = authority::ActiveModel {
            id: NotSet,
            name: Set(name.to_string()),
        }
        .insert(&self.db)
        .await
        .map_err(db_err)?;

        Ok(created.id)
    }

    async fn link_user_role(&self, users_id: i64, roles_id: i64) -> DomainResult<()> {
        let exists = users_roles::Entity::find_by_id((users_id, roles_id))
            .one(&self.db)
            .await
            .map_err(db_err)?
            .is_some();
        if exists {
            return Ok(());
        }

        let link = users_roles::ActiveModel {
            users_id: Set(users_id),
            roles_id: Set(roles_id),
        };
        users_roles::Entity::insert(link)
            .exec_without_returning(&self.db)
            .await
            .map_err(db_err)?;

        Ok(())
    }

    async fn link_role_authority(&self, roles_id: i64, authorities_id: i64) -> DomainResult<()> {
        let exists = roles_authorities::Entity::find_by_id((roles_id, authorities_id))
            .one(&self.db)
            .await
            .map_err(db_err)?
            .is_some();
        if exists {
            return Ok(());
        }

        let link = roles_authorities::ActiveModel {
            roles_id: Set(roles_id),
            authorities_id: Set(authorities_id),
        };
        roles_authorities::Entity::insert(link)
            .exec_without_returning(&self.db)
            .await
            .map_err(db_err)?;

        Ok(())
    }
}

// ── Conversion helpers ──────────────────────────────────────────

fn user_model_to_record(model: user::Model, roles: Vec<Role>) -> UserRecord {
    UserRecord {
        id: Some(model.id),
        user_id: model.user_id,
        email: model.email,
        first_name: model.first_name,
        last_name: model.last_name,
        encrypted_password: model.encrypted_password,
        roles,
    }
}

fn db_err(e: sea_orm::DbErr) -> DomainError {
    DomainError::Storage(e.to_string())
}

// ── Repository implementation ───────────────────────────────────

#[async_trait]
impl UserRepository for SeaOrmUserRepository {
    async fn find_by_email(&self, email: &str) -> DomainResult<Option<UserRecord>> {
        let model = user::Entity::find()
            .filter(user::Column::Email.eq(email))
            .one(&self.db)
            .await
            .map_err(db_err)?;

        match model {
            Some(model) => {
                let roles = self.load_roles(&model).await?;
                Ok(Some(user_model_to_record(model, roles)))
            }
            None => Ok(None),
        }
    }

    async fn find_by_user_id(&self, user_id: &str) -> DomainResult<Option<UserRecord>> {
        let model = user::Entity::find()
            .filter(user::Column::UserId.eq(user_id))
            .one(&self.db)
            .await
            .map_err(db_err)?;

        match model {
            Some(model) => {
                let roles = self.load_roles(&model).await?;
                Ok(Some(user_model_to_record(model, roles)))
            }
            None => Ok(None),
        }
    }

    async fn save(&self, record: UserRecord) -> DomainResult<UserRecord> {
        let row = user::ActiveModel {
            id: NotSet,
            user_id: Set(record.user_id.clone()),
            email: Set(record.email.clone()),
            first_name: Set(record.first_name.clone()),
            last_name: Set(record.last_name.clone()),
            encrypted_password: Set(record.encrypted_password.clone()),
        };

        let saved = row.insert(&self.db).await.map_err(|e| {
            if e.to_string().contains("UNIQUE") || e.to_string().contains("duplicate") {
                DomainError::EmailTaken(record.email.clone())
            } else {
                db_err(e)
            }
        })?;

        for role in &record.roles {
            let roles_id = self.role_id_or_create(&role.name).await?;
            self.link_user_role(saved.id, roles_id).await?;

            for authority in &role.authorities {
                let authorities_id = self.authority_id_or_create(&authority.name).await?;
                self.link_role_authority(roles_id, authorities_id).await?;
            }
        }

        let roles = self.load_roles(&saved).await?;
        Ok(user_model_to_record(saved, roles))
    }
}

#[cfg(test)]
mod tests {
    use sea_orm::Database;
    use sea_orm_migration::MigratorTrait;

    use super::*;
    use crate::infrastructure::database::migrator::Migrator;

    async fn repo() -> SeaOrmUserRepository {
        let db = Database::connect("sqlite::memory:").await.unwrap();
        Migrator::up(&db, None).await.unwrap();
        SeaOrmUserRepository::new(db)
    }

    fn sample_record(user_id: &str, email: &str, roles: Vec<Role>) -> UserRecord {
        UserRecord {
            id: None,
            user_id: user_id.into(),
            email: email.into(),
            first_name: "A".into(),
            last_name: "B".into(),
            encrypted_password: "$2b$12$stored".into(),
            roles,
        }
    }

    fn role(name: &str, authorities: &[&str]) -> Role {
        Role {
            name: name.into(),
            authorities: authorities
                .iter()
                .map(|a| Authority { name: (*a).into() })
                .collect(),
        }
    }

    #[tokio::test]
    async fn save_assigns_a_storage_key() {
        let repo = repo().await;

        let saved = repo
            .save(sample_record("U1", "a@x.com", vec![]))
            .await
            .unwrap();

        assert!(saved.id.is_some());
        assert_eq!(saved.user_id, "U1");
    }

    #[tokio::test]
    async fn save_then_find_by_email_round_trips_roles() {
        let repo = repo().await;
        repo.save(sample_record(
            "U1",
            "a@x.com",
            vec![role("ROLE_USER", &["READ", "WRITE"])],
        ))
        .await
        .unwrap();

        let found = repo.find_by_email("a@x.com").await.unwrap().unwrap();

        assert_eq!(found.user_id, "U1");
        assert_eq!(found.encrypted_password, "$2b$12$stored");
        assert_eq!(found.roles.len(), 1);
        assert_eq!(found.roles[0].name, "ROLE_USER");
        assert_eq!(
            found.granted_permissions(),
            vec!["ROLE_USER", "READ", "WRITE"]
        );
    }

    #[tokio::test]
    async fn find_by_user_id_matches_exactly() {
        let repo = repo().await;
        repo.save(sample_record("U1", "a@x.com", vec![]))
            .await
            .unwrap();

        assert!(repo.find_by_user_id("U1").await.unwrap().is_some());
        assert!(repo.find_by_user_id("U").await.unwrap().is_none());
        assert!(repo.find_by_user_id("u1").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn unknown_lookups_return_none() {
        let repo = repo().await;

        assert!(repo.find_by_email("missing@x.com").await.unwrap().is_none());
        assert!(repo.find_by_user_id("missing").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn duplicate_email_maps_to_email_taken() {
        let repo = repo().await;
        repo.save(sample_record("U1", "a@x.com", vec![]))
            .await
            .unwrap();

        let err = repo
            .save(sample_record("U2", "a@x.com", vec![]))
            .await
            .unwrap_err();

        assert!(matches!(err, DomainError::EmailTaken(e) if e == "a@x.com"));
    }

    #[tokio::test]
    async fn role_rows_are_shared_between_users() {
        let repo = repo().await;
        repo.save(sample_record(
            "U1",
            "a@x.com",
            vec![role("ROLE_USER", &["READ"])],
        ))
        .await
        .unwrap();
        repo.save(sample_record(
            "U2",
            "b@x.com",
            vec![role("ROLE_USER", &["READ"])],
        ))
        .await
        .unwrap();

        let roles = role::Entity::find().all(&repo.db).await.unwrap();
        let authorities = authority::Entity::find().all(&repo.db).await.unwrap();

        assert_eq!(roles.len(), 1);
        assert_eq!(authorities.len(), 1);

        let second = repo.find_by_email("b@x.com").await.unwrap().unwrap();
        assert_eq!(second.granted_permissions(), vec!["ROLE_USER", "READ"]);
    }

    #[tokio::test]
    async fn roles_keep_insertion_order() {
        let repo = repo().await;
        repo.save(sample_record(
            "U1",
            "a@x.com",
            vec![
                role("ROLE_USER", &["PROFILE_READ"]),
                role("ROLE_ADMIN", &["PROFILE_WRITE"]),
            ],
        ))
        .await
        .unwrap();

        let found = repo.find_by_email("a@x.com").await.unwrap().unwrap();
        assert_eq!(
            found.granted_permissions(),
            vec!["ROLE_USER", "PROFILE_READ", "ROLE_ADMIN", "PROFILE_WRITE"]
        );
    }
}
