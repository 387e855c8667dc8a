//! User aggregate entities

/// A named capability granted through a role.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Authority {
    pub name: String,
}

/// A role groups authorities under a single name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Role {
    pub name: String,
    pub authorities: Vec<Authority>,
}

/// Persisted user record.
///
/// `id` is the storage primary key and stays `None` until the repository
/// assigns it. `user_id` is the public identifier handed to other
/// services; it is assigned once at creation and never changes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserRecord {
    pub id: Option<i64>,
    pub user_id: String,
    pub email: String,
    pub first_name: String,
    pub last_name: String,
    pub encrypted_password: String,
    pub roles: Vec<Role>,
}

impl UserRecord {
    /// Flatten roles into the granted-permission list used at login.
    ///
    /// For each role in turn: the role name, then that role's authority
    /// names. Names are not deduplicated across roles.
    pub fn granted_permissions(&self) -> Vec<String> {
        let mut permissions = Vec::new();
        for role in &self.roles {
            permissions.push(role.name.clone());
            for authority in &role.authorities {
                permissions.push(authority.name.clone());
            }
        }
        permissions
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_record(roles: Vec<Role>) -> UserRecord {
        UserRecord {
            id: Some(1),
            user_id: "u-1".into(),
            email: "a@x.com".into(),
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

    #[test]
    fn permissions_empty_without_roles() {
        let record = sample_record(vec![]);
        assert!(record.granted_permissions().is_empty());
    }

    #[test]
    fn permissions_flatten_role_then_its_authorities() {
        let record = sample_record(vec![
            role("ROLE_USER", &["PROFILE_READ"]),
            role("ROLE_ADMIN", &["PROFILE_WRITE"]),
        ]);

        assert_eq!(
            record.granted_permissions(),
            vec!["ROLE_USER", "PROFILE_READ", "ROLE_ADMIN", "PROFILE_WRITE"]
        );
    }

    #[test]
    fn permissions_keep_duplicate_names() {
        let record = sample_record(vec![
            role("ROLE_USER", &["READ"]),
            role("ROLE_SUPPORT", &["READ"]),
        ]);

        assert_eq!(
            record.granted_permissions(),
            vec!["ROLE_USER", "READ", "ROLE_SUPPORT", "READ"]
        );
    }

    #[test]
    fn permissions_cover_all_authorities_of_a_role() {
        let record = sample_record(vec![role("ROLE_ADMIN", &["READ", "WRITE", "DELETE"])]);

        assert_eq!(
            record.granted_permissions(),
            vec!["ROLE_ADMIN", "READ", "WRITE", "DELETE"]
        );
    }
}
