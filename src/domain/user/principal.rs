//! Authentication principal

/// Credential view of a user handed to the authentication layer.
///
/// Built by the credential-lookup operation; the consuming framework
/// adapts it to its own principal abstraction and performs the actual
/// password verification.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserPrincipal {
    /// Login name. This service uses the email address.
    pub username: String,
    /// Stored bcrypt hash of the user's password.
    pub password_hash: String,
    /// Role and authority names in flattening order, duplicates kept.
    pub permissions: Vec<String>,
    /// Always `true`: this service tracks no lockout, expiry or
    /// credential-expiry state.
    pub enabled: bool,
}
