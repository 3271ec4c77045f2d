//! Storage driver identifiers.
//!
//! The host framework reads raster data through pluggable storage drivers.
//! This module defines the identifiers a settings record can name in its
//! driver list; the driver implementations themselves live in the host
//! framework, not here.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::SettingsError;

/// Identifier of a pluggable raster storage backend.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Driver {
    /// PostGIS-enabled PostgreSQL database
    Postgresql,

    /// MySQL database
    Mysql,

    /// Local SQLite database file
    Sqlite,
}

impl Driver {
    /// All recognized driver identifiers, in declaration order.
    pub const ALL: [Driver; 3] = [Driver::Postgresql, Driver::Mysql, Driver::Sqlite];

    /// The lowercase identifier used in settings keys and driver lists.
    pub fn name(&self) -> &'static str {
        match self {
            Driver::Postgresql => "postgresql",
            Driver::Mysql => "mysql",
            Driver::Sqlite => "sqlite",
        }
    }
}

impl fmt::Display for Driver {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Driver {
    type Err = SettingsError;

    /// Parse a driver identifier, case-insensitively.
    ///
    /// `postgres` is accepted as an alias for `postgresql`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "postgresql" | "postgres" => Ok(Driver::Postgresql),
            "mysql" => Ok(Driver::Mysql),
            "sqlite" => Ok(Driver::Sqlite),
            _ => Err(SettingsError::UnknownDriver(s.to_string())),
        }
    }
}

// =============================================================================
// Tests
// =============================================================================
