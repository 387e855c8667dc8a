//! Database entities module

pub mod authority;
pub mod role;
pub mod roles_authorities;
pub mod user;
pub mod users_roles;

pub use authority::Entity as Authority;
pub use role::Entity as Role;
pub use roles_authorities::Entity as RolesAuthorities;
pub use user::Entity as User;
pub use users_roles::Entity as UsersRoles;
