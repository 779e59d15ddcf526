use serde::{Deserialize, Serialize};

use super::require;
use crate::ApiError;

/// The acting patient's own profile, fetched on demand for booking.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Patient {
    pub id: i64,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub phone: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub address: Option<String>,
}

/// Patient signup payload.
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct NewPatient {
    pub name: String,
    pub email: String,
    pub password: String,
    pub phone: String,
    pub address: String,
}

impl NewPatient {
    pub fn validate(&self) -> Result<(), ApiError> {
        require(&[
            ("Name", self.name.as_str()),
            ("Email", self.email.as_str()),
            ("Password", self.password.as_str()),
            ("Phone", self.phone.as_str()),
            ("Address", self.address.as_str()),
        ])
    }
}
