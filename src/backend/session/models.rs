//! Session data as the client sees it.

use crate::backend::session::error::SessionError;
use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;

#[cfg(test)]
#[path = "models_test.rs"]
mod models_test;

/// Account role reported by the session endpoint.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Admin,
    Member,
    /// Any role string this client does not know about.
    Unknown,
}

impl Role {
    /// Maps a wire role name to a role. Unrecognized names become `Unknown`.
    pub fn from_name(name: &str) -> Self {
        match name.trim().to_ascii_lowercase().as_str() {
            "admin" => Self::Admin,
            "member" => Self::Member,
            _ => Self::Unknown,
        }
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Admin => "admin",
            Self::Member => "member",
            Self::Unknown => "unknown",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Identity record returned by the session endpoint.
///
/// Every field is optional: the guards only need to know that a user exists
/// and, when present, its role.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct User {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(
        default,
        deserialize_with = "deserialize_role",
        skip_serializing_if = "Option::is_none"
    )]
    pub role: Option<Role>,
}

impl User {
    /// Name to greet the user with.
    pub fn display_name(&self) -> &str {
        self.name
            .as_deref()
            .or(self.email.as_deref())
            .unwrap_or("Investor")
    }
}

// A malformed role must not reject the whole record.
fn deserialize_role<'de, D>(deserializer: D) -> Result<Option<Role>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    Ok(value.as_str().map(Role::from_name))
}

/// Current session as seen by the guards.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Session {
    pub user: Option<User>,
    pub is_loading: bool,
    pub error: Option<SessionError>,
}

impl Session {
    /// Session whose request has not resolved yet.
    pub fn loading() -> Self {
        Self {
            user: None,
            is_loading: true,
            error: None,
        }
    }

    /// Session built from a resolved request. An error never carries a user.
    pub fn resolved(result: Result<Option<User>, SessionError>) -> Self {
        match result {
            Ok(user) => Self {
                user,
                is_loading: false,
                error: None,
            },
            Err(error) => Self {
                user: None,
                is_loading: false,
                error: Some(error),
            },
        }
    }

    pub fn is_authenticated(&self) -> bool {
        self.user.is_some() && self.error.is_none()
    }

    /// Role of the signed-in user, if there is one and it carries a role.
    pub fn role(&self) -> Option<Role> {
        self.user.as_ref().and_then(|user| user.role)
    }
}
