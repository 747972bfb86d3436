//! User model for the CampusFund workflow.
//!
//! Users are created at registration, are immutable thereafter, and are
//! never deleted within a session.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::UserId;

/// The role a user plays in the funding workflow.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Ord, PartialOrd, Serialize, Deserialize)]
pub enum Role {
    Student,
    Donor,
    Admin,
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Student => write!(f, "STUDENT"),
            Self::Donor => write!(f, "DONOR"),
            Self::Admin => write!(f, "ADMIN"),
        }
    }
}

/// A registered user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: UserId,
    pub name: String,
    pub role: Role,
    pub registered_at: DateTime<Utc>,
}

impl User {
    #[must_use]
    pub fn new(id: UserId, name: impl Into<String>, role: Role) -> Self {
        Self {
            id,
            name: name.into(),
            role,
            registered_at: Utc::now(),
        }
    }

    /// Whether this user may submit funding requests.
    #[must_use]
    pub fn is_student(&self) -> bool {
        self.role == Role::Student
    }
}
