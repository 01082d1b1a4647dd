//! Ordered role hierarchy
//!
//! Roles are cumulative: every role satisfies the checks of the roles below
//! it. The identity source assigns each user an opaque ordinal `role_index`;
//! [`Role::from_index`] maps that rank onto the highest role it reaches, and a
//! single ordering comparison answers every "at least" question.

use std::fmt;
use std::str::FromStr;

use crate::error::ModelError;

/// Role tiers in ascending order of privilege
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum Role {
    User,
    Manager,
    Administrator,
}

impl Role {
    /// All roles, lowest first.
    pub const ALL: [Role; 3] = [Role::User, Role::Manager, Role::Administrator];

    /// Lowest `role_index` that reaches this role.
    pub const fn min_index(self) -> i64 {
        match self {
            Role::User => 0,
            Role::Manager => 1,
            Role::Administrator => 2,
        }
    }

    /// Highest role reached by a server-assigned `role_index`.
    ///
    /// Every resolved identity is at least a [`Role::User`], including ranks
    /// below zero. Ranks above the top tier clamp to
    /// [`Role::Administrator`].
    pub fn from_index(role_index: i64) -> Self {
        Self::ALL
            .into_iter()
            .rev()
            .find(|role| role_index >= role.min_index())
            .unwrap_or(Role::User)
    }

    /// Whether a user with `role_index` holds at least this role.
    pub fn permits(self, role_index: i64) -> bool {
        Role::from_index(role_index) >= self
    }

    /// Wire name used by views when asking for a role.
    pub const fn as_str(self) -> &'static str {
        match self {
            Role::User => "user",
            Role::Manager => "manager",
            Role::Administrator => "administrator",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Role {
    type Err = ModelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Role::ALL
            .into_iter()
            .find(|role| role.as_str() == s)
            .ok_or_else(|| ModelError::InvalidRoleName(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_roles_are_ordered() {
        assert!(Role::User < Role::Manager);
        assert!(Role::Manager < Role::Administrator);
    }

    #[test]
    fn test_from_index_clamps_to_known_tiers() {
        assert_eq!(Role::from_index(-3), Role::User);
        assert_eq!(Role::from_index(0), Role::User);
        assert_eq!(Role::from_index(1), Role::Manager);
        assert_eq!(Role::from_index(2), Role::Administrator);
        assert_eq!(Role::from_index(42), Role::Administrator);
    }

    #[test]
    fn test_permits_is_monotonic() {
        for role in Role::ALL {
            for index in -1..5 {
                if role.permits(index) {
                    assert!(role.permits(index + 1), "{role} at {index}");
                }
            }
        }
    }

    #[test]
    fn test_manager_thresholds() {
        assert!(!Role::Manager.permits(0));
        assert!(Role::Manager.permits(1));
        assert!(!Role::Administrator.permits(1));
        assert!(Role::Administrator.permits(2));
        assert!(Role::User.permits(-1));
    }

    #[test]
    fn test_parse_round_trips_names() {
        for role in Role::ALL {
            assert_eq!(role.as_str().parse::<Role>(), Ok(role));
        }
    }

    #[test]
    fn test_parse_rejects_unknown_names() {
        assert_eq!(
            "superuser".parse::<Role>(),
            Err(ModelError::InvalidRoleName("superuser".into()))
        );
        // names are case sensitive
        assert!("Manager".parse::<Role>().is_err());
    }
}
