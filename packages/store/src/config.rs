//! # Client configuration — `clinic.toml`
//!
//! Defines the TOML file the web frontend embeds at build time
//! (filename: [`ClinicConfig::filename`] = `"clinic.toml"`). It tells the API
//! client where the backend lives and which availability slots the add-doctor
//! form offers.
//!
//! ## Structure
//!
//! ```toml
//! [api]
//! base_url = "http://localhost:8080"
//!
//! [booking]
//! default_slots = ["09:00-10:00", "10:00-11:00"]
//! ```
//!
//! | Struct | Purpose |
//! |--------|---------|
//! | [`ClinicConfig`] | Top-level config with builder helpers and TOML (de)serialisation. |
//! | [`ApiConfig`] | Backend base URL, default `http://localhost:8080`. |
//! | [`BookingConfig`] | Availability slots offered when adding a doctor. |
//!
//! Every section is `#[serde(default)]`, so a missing or empty file is
//! equivalent to the default configuration.

use serde::{Deserialize, Serialize};

/// Top-level configuration stored in `clinic.toml`.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct ClinicConfig {
    #[serde(default)]
    pub api: ApiConfig,
    #[serde(default)]
    pub booking: BookingConfig,
}

/// Backend location.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ApiConfig {
    /// Prefix for every backend path, without a trailing slash.
    #[serde(default = "default_base_url")]
    pub base_url: String,
}

/// Booking-related configuration.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct BookingConfig {
    /// Time slots offered by the add-doctor multi-select.
    #[serde(default = "default_slots")]
    pub default_slots: Vec<String>,
}

fn default_base_url() -> String {
    "http://localhost:8080".to_string()
}

fn default_slots() -> Vec<String> {
    [
        "09:00-10:00",
        "10:00-11:00",
        "11:00-12:00",
        "14:00-15:00",
        "15:00-16:00",
        "16:00-17:00",
    ]
    .into_iter()
    .map(String::from)
    .collect()
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
        }
    }
}

impl Default for BookingConfig {
    fn default() -> Self {
        Self {
            default_slots: default_slots(),
        }
    }
}

impl ClinicConfig {
    /// Create a config pointing at the given backend.
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url: String = base_url.into();
        Self {
            api: ApiConfig {
                base_url: base_url.trim_end_matches('/').to_string(),
            },
            booking: BookingConfig::default(),
        }
    }

    /// Builder method to replace the offered availability slots.
    pub fn with_slots(mut self, slots: Vec<String>) -> Self {
        self.booking.default_slots = slots;
        self
    }

    /// The well-known filename for the config file.
    pub fn filename() -> &'static str {
        "clinic.toml"
    }

    /// Parse from TOML string.
    pub fn from_toml(s: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(s)
    }

    /// Serialize to TOML string.
    pub fn to_toml(&self) -> Result<String, toml::ser::Error> {
        toml::to_string_pretty(self)
    }
}
