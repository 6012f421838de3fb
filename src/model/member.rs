use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::error::DashboardError;

/// Stable numeric member identifier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MemberId(pub u32);

impl fmt::Display for MemberId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A member's role in the club
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Leader,
    Member,
    Guest,
}

impl Role {
    /// All roles, in display order
    pub const ALL: [Role; 3] = [Role::Leader, Role::Member, Role::Guest];

    /// Lowercase key used for config lookups and JSON
    pub fn key(self) -> &'static str {
        match self {
            Role::Leader => "leader",
            Role::Member => "member",
            Role::Guest => "guest",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Role::Leader => write!(f, "Leader"),
            Role::Member => write!(f, "Member"),
            Role::Guest => write!(f, "Guest"),
        }
    }
}

impl FromStr for Role {
    type Err = DashboardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Role::ALL
            .into_iter()
            .find(|r| r.key().eq_ignore_ascii_case(s))
            .ok_or_else(|| DashboardError::InvalidArgument(format!("unknown role: {}", s)))
    }
}

/// A roster entry. Immutable once seeded.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Member {
    pub id: MemberId,
    pub name: String,
    pub role: Role,
    pub is_active: bool,
}

impl Member {
    pub fn new(id: u32, name: impl Into<String>, role: Role, is_active: bool) -> Self {
        Member {
            id: MemberId(id),
            name: name.into(),
            role,
            is_active,
        }
    }

    /// "Active" / "Inactive"
    pub fn status_label(&self) -> &'static str {
        if self.is_active { "Active" } else { "Inactive" }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn role_parses_case_insensitively() {
        assert_eq!("leader".parse::<Role>().unwrap(), Role::Leader);
        assert_eq!("GUEST".parse::<Role>().unwrap(), Role::Guest);
        assert!(matches!(
            "admin".parse::<Role>(),
            Err(DashboardError::InvalidArgument(_))
        ));
    }

    #[test]
    fn role_display_and_key() {
        assert_eq!(Role::Member.to_string(), "Member");
        assert_eq!(Role::Member.key(), "member");
    }

    #[test]
    fn role_serializes_lowercase() {
        let json = serde_json::to_string(&Role::Leader).unwrap();
        assert_eq!(json, "\"leader\"");
    }

    #[test]
    fn status_label() {
        assert_eq!(Member::new(1, "A", Role::Guest, true).status_label(), "Active");
        assert_eq!(Member::new(2, "B", Role::Guest, false).status_label(), "Inactive");
    }
}
