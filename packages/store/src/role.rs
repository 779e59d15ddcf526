//! The closed set of session roles.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Who is using the UI right now.
///
/// `Patient` is the anonymous, patient-flavored visitor (no credential
/// required). `LoggedPatient`, `Doctor` and `Admin` are authenticated roles
/// and are only valid together with a token.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Role {
    #[default]
    None,
    Patient,
    LoggedPatient,
    Doctor,
    Admin,
}

impl Role {
    /// The value persisted under the role key.
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::None => "",
            Role::Patient => "patient",
            Role::LoggedPatient => "loggedPatient",
            Role::Doctor => "doctor",
            Role::Admin => "admin",
        }
    }

    /// Parse a persisted role. Unknown or empty values map to [`Role::None`].
    pub fn parse(value: &str) -> Self {
        match value.trim() {
            "patient" => Role::Patient,
            "loggedPatient" => Role::LoggedPatient,
            "doctor" => Role::Doctor,
            "admin" => Role::Admin,
            _ => Role::None,
        }
    }

    /// Roles that must be backed by a token.
    pub fn is_authenticated(&self) -> bool {
        match self {
            Role::LoggedPatient | Role::Doctor | Role::Admin => true,
            Role::None | Role::Patient => false,
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Role::None => f.write_str("none"),
            other => f.write_str(other.as_str()),
        }
    }
}
