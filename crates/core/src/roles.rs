//! Well-known role names.
//!
//! The role set is closed: a user is exactly one of `admin`, `manager`, or
//! `user`. Roles are stored as text on the user row and validated against
//! [`Role`] before any write reaches the database.

use serde::{Deserialize, Serialize};

pub const ROLE_ADMIN: &str = "admin";
pub const ROLE_MANAGER: &str = "manager";
pub const ROLE_USER: &str = "user";

/// The closed set of user roles.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Admin,
    Manager,
    User,
}

impl Role {
    /// The canonical lowercase name stored in the database and JWT claims.
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Admin => ROLE_ADMIN,
            Role::Manager => ROLE_MANAGER,
            Role::User => ROLE_USER,
        }
    }

    /// Parse a role name. Returns `None` for anything outside the role set.
    pub fn parse(name: &str) -> Option<Role> {
        match name {
            ROLE_ADMIN => Some(Role::Admin),
            ROLE_MANAGER => Some(Role::Manager),
            ROLE_USER => Some(Role::User),
            _ => None,
        }
    }

    /// All valid role names, for validation error messages.
    pub fn all_names() -> &'static [&'static str] {
        &[ROLE_ADMIN, ROLE_MANAGER, ROLE_USER]
    }
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_known_roles() {
        assert_eq!(Role::parse("admin"), Some(Role::Admin));
        assert_eq!(Role::parse("manager"), Some(Role::Manager));
        assert_eq!(Role::parse("user"), Some(Role::User));
    }

    #[test]
    fn test_parse_rejects_unknown() {
        assert_eq!(Role::parse("root"), None);
        assert_eq!(Role::parse("Admin"), None, "role names are case-sensitive");
        assert_eq!(Role::parse(""), None);
    }

    #[test]
    fn test_round_trip() {
        for name in Role::all_names() {
            let role = Role::parse(name).expect("every listed name must parse");
            assert_eq!(role.as_str(), *name);
        }
    }
}
