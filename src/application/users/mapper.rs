//! Hand-written DTO/entity conversions
//!
//! Field names match one-for-one between [`UserDto`] and [`UserRecord`];
//! fields with no counterpart on the target are left at their default.
//! Keeping the copies explicit turns a shape mismatch into a compile
//! error instead of a silently skipped field.

use crate::domain::{UserDto, UserRecord};

/// Boundary DTO to the persisted-entity shape.
///
/// The plaintext `password` and the `albums` list have no entity
/// counterpart and are dropped. The storage key and role references are
/// owned by the repository and start empty.
pub fn dto_to_record(dto: &UserDto) -> UserRecord {
    UserRecord {
        id: None,
        user_id: dto.user_id.clone(),
        email: dto.email.clone(),
        first_name: dto.first_name.clone(),
        last_name: dto.last_name.clone(),
        encrypted_password: dto.encrypted_password.clone(),
        roles: Vec::new(),
    }
}

/// Persisted entity back to the boundary shape.
///
/// `password` and `albums` have no entity counterpart and are left at
/// their defaults.
pub fn record_to_dto(record: &UserRecord) -> UserDto {
    UserDto {
        user_id: record.user_id.clone(),
        first_name: record.first_name.clone(),
        last_name: record.last_name.clone(),
        email: record.email.clone(),
        password: None,
        encrypted_password: record.encrypted_password.clone(),
        albums: Vec::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{AlbumSummary, Authority, Role};

    fn sample_dto() -> UserDto {
        UserDto {
            user_id: "u-1".into(),
            first_name: "A".into(),
            last_name: "B".into(),
            email: "a@x.com".into(),
            password: Some("secret1".into()),
            encrypted_password: "$2b$12$stored".into(),
            albums: vec![AlbumSummary {
                id: "AL1".into(),
                user_id: "u-1".into(),
                name: "Trip".into(),
            }],
        }
    }

    #[test]
    fn dto_to_record_copies_matching_fields_only() {
        let record = dto_to_record(&sample_dto());

        assert_eq!(record.user_id, "u-1");
        assert_eq!(record.email, "a@x.com");
        assert_eq!(record.first_name, "A");
        assert_eq!(record.last_name, "B");
        assert_eq!(record.encrypted_password, "$2b$12$stored");
        // No counterpart on the entity side
        assert_eq!(record.id, None);
        assert!(record.roles.is_empty());
    }

    #[test]
    fn record_to_dto_leaves_unmatched_fields_at_default() {
        let record = UserRecord {
            id: Some(7),
            user_id: "u-1".into(),
            email: "a@x.com".into(),
            first_name: "A".into(),
            last_name: "B".into(),
            encrypted_password: "$2b$12$stored".into(),
            roles: vec![Role {
                name: "ROLE_USER".into(),
                authorities: vec![Authority { name: "READ".into() }],
            }],
        };

        let dto = record_to_dto(&record);

        assert_eq!(dto.user_id, "u-1");
        assert_eq!(dto.email, "a@x.com");
        assert_eq!(dto.encrypted_password, "$2b$12$stored");
        // No counterpart on the DTO side
        assert!(dto.password.is_none());
        assert!(dto.albums.is_empty());
    }

    #[test]
    fn round_trip_preserves_public_fields() {
        let dto = sample_dto();
        let back = record_to_dto(&dto_to_record(&dto));

        assert_eq!(back.user_id, dto.user_id);
        assert_eq!(back.first_name, dto.first_name);
        assert_eq!(back.last_name, dto.last_name);
        assert_eq!(back.email, dto.email);
        assert_eq!(back.encrypted_password, dto.encrypted_password);
    }
}
