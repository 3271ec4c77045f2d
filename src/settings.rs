//! The settings record handed to the tile-serving framework.
//!
//! [`ServerSettings`] bundles everything the framework's settings loader
//! expects at startup: the ordered list of enabled storage drivers, one
//! options record per enabled driver, and the default resampling method.
//! The record is immutable once constructed; [`validate`](ServerSettings::validate)
//! performs the fail-fast checks the framework would otherwise make during
//! its own initialization.
//!
//! # Example
//!
//! ```
//! use tileserver_config::{Driver, PostgresOptions, ResamplingMethod, ServerSettings};
//!
//! let settings = ServerSettings::new()
//!     .with_driver(Driver::Postgresql)
//!     .with_postgresql_options(PostgresOptions::new(
//!         "postgresql://postgres:postgres@db:5432/rasters",
//!     ))
//!     .with_resampling_method(ResamplingMethod::Bilinear);
//!
//! assert!(settings.validate().is_ok());
//! ```

use serde::{Deserialize, Serialize};

use crate::driver::Driver;
use crate::error::SettingsError;
use crate::options::{MysqlOptions, PostgresOptions, SqliteOptions};
use crate::resampling::ResamplingMethod;

// =============================================================================
// Server Settings
// =============================================================================

/// Settings consumed by the tile-serving framework at process start.
///
/// Serialized field names match the framework's recognized configuration
/// keys (`DRIVERS`, `POSTGRESQL_DRIVER_OPTIONS`, `RESAMPLING_METHOD`, ...).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "SCREAMING_SNAKE_CASE")]
pub struct ServerSettings {
    /// Ordered list of enabled storage drivers.
    pub drivers: Vec<Driver>,

    /// Options for the PostGIS driver, required when it is enabled.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub postgresql_driver_options: Option<PostgresOptions>,

    /// Options for the MySQL driver, required when it is enabled.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mysql_driver_options: Option<MysqlOptions>,

    /// Options for the SQLite driver, required when it is enabled.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sqlite_driver_options: Option<SqliteOptions>,

    /// Default image-scaling algorithm for zoom levels without a native
    /// raster resolution.
    pub resampling_method: ResamplingMethod,
}

impl ServerSettings {
    /// Create empty settings: no drivers, no options, nearest resampling.
    pub fn new() -> Self {
        Self::default()
    }

    /// Enable a storage driver, keeping the list order and ignoring
    /// duplicates.
    pub fn with_driver(mut self, driver: Driver) -> Self {
        if !self.drivers.contains(&driver) {
            self.drivers.push(driver);
        }
        self
    }

    /// Set the PostGIS driver options.
    pub fn with_postgresql_options(mut self, options: PostgresOptions) -> Self {
        self.postgresql_driver_options = Some(options);
        self
    }

    /// Set the MySQL driver options.
    pub fn with_mysql_options(mut self, options: MysqlOptions) -> Self {
        self.mysql_driver_options = Some(options);
        self
    }

    /// Set the SQLite driver options.
    pub fn with_sqlite_options(mut self, options: SqliteOptions) -> Self {
        self.sqlite_driver_options = Some(options);
        self
    }

    /// Set the default resampling method.
    pub fn with_resampling_method(mut self, method: ResamplingMethod) -> Self {
        self.resampling_method = method;
        self
    }

    /// Whether an options record was supplied for the given driver.
    pub fn has_options_for(&self, driver: Driver) -> bool {
        match driver {
            Driver::Postgresql => self.postgresql_driver_options.is_some(),
            Driver::Mysql => self.mysql_driver_options.is_some(),
            Driver::Sqlite => self.sqlite_driver_options.is_some(),
        }
    }

    /// Identifiers of the enabled drivers, in list order.
    pub fn driver_names(&self) -> Vec<&'static str> {
        self.drivers.iter().map(Driver::name).collect()
    }

    /// Run the fail-fast checks the framework makes at initialization.
    ///
    /// Checks, in order:
    /// - at least one driver is enabled
    /// - every enabled driver has a matching options record
    /// - every options record for an enabled driver is well-formed
    ///
    /// Options supplied for drivers that are not enabled are ignored, as
    /// the framework ignores them.
    pub fn validate(&self) -> Result<(), SettingsError> {
        if self.drivers.is_empty() {
            return Err(SettingsError::NoDriversEnabled);
        }

        for &driver in &self.drivers {
            if !self.has_options_for(driver) {
                return Err(SettingsError::MissingDriverOptions { driver });
            }
        }

        if self.drivers.contains(&Driver::Postgresql) {
            if let Some(ref options) = self.postgresql_driver_options {
                options.parse()?;
            }
        }
        if self.drivers.contains(&Driver::Mysql) {
            if let Some(ref options) = self.mysql_driver_options {
                options.parse()?;
            }
        }
        if self.drivers.contains(&Driver::Sqlite) {
            if let Some(ref options) = self.sqlite_driver_options {
                options.check()?;
            }
        }

        Ok(())
    }
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn test_settings() -> ServerSettings {
        ServerSettings::new()
            .with_driver(Driver::Postgresql)
            .with_postgresql_options(PostgresOptions::new(
                "postgresql://postgres:postgres@db:5432/rasters",
            ))
            .with_resampling_method(ResamplingMethod::Bilinear)
    }

    #[test]
    fn test_valid_settings() {
        let settings = test_settings();
        assert!(settings.validate().is_ok());
    }

    #[test]
    fn test_new_is_empty() {
        let settings = ServerSettings::new();
        assert!(settings.drivers.is_empty());
        assert!(settings.postgresql_driver_options.is_none());
        assert_eq!(settings.resampling_method, ResamplingMethod::Nearest);
    }

    #[test]
    fn test_no_drivers_enabled() {
        let settings = ServerSettings::new();
        assert_eq!(
            settings.validate().unwrap_err(),
            SettingsError::NoDriversEnabled
        );
    }

    #[test]
    fn test_dangling_driver() {
        let settings = ServerSettings::new().with_driver(Driver::Postgresql);
        assert_eq!(
            settings.validate().unwrap_err(),
            SettingsError::MissingDriverOptions {
                driver: Driver::Postgresql
            }
        );
    }

    #[test]
    fn test_dangling_driver_names_the_driver() {
        let settings = test_settings().with_driver(Driver::Sqlite);
        let err = settings.validate().unwrap_err();
        assert_eq!(
            err,
            SettingsError::MissingDriverOptions {
                driver: Driver::Sqlite
            }
        );
        assert!(err.to_string().contains("sqlite"));
    }

    #[test]
    fn test_malformed_url_fails_validation() {
        let settings = test_settings().with_postgresql_options(PostgresOptions::new("not a url"));
        assert!(matches!(
            settings.validate().unwrap_err(),
            SettingsError::InvalidUrl { .. }
        ));
    }

    #[test]
    fn test_unused_options_are_ignored() {
        // MySQL options without the MySQL driver enabled
        let settings =
            test_settings().with_mysql_options(MysqlOptions::new("mysql://u:p@host:3306/tiles"));
        assert!(settings.validate().is_ok());
    }

    #[test]
    fn test_unused_malformed_options_are_ignored() {
        let settings = test_settings().with_mysql_options(MysqlOptions::new("not a url"));
        assert!(settings.validate().is_ok());
    }

    #[test]
    fn test_with_driver_ignores_duplicates() {
        let settings = test_settings()
            .with_driver(Driver::Postgresql)
            .with_driver(Driver::Postgresql);
        assert_eq!(settings.drivers, vec![Driver::Postgresql]);
    }

    #[test]
    fn test_driver_order_is_preserved() {
        let settings = ServerSettings::new()
            .with_driver(Driver::Sqlite)
            .with_driver(Driver::Postgresql);
        assert_eq!(settings.driver_names(), vec!["sqlite", "postgresql"]);
    }

    #[test]
    fn test_serialized_keys_match_framework_contract() {
        let settings = test_settings();
        let json = serde_json::to_string(&settings).unwrap();

        assert!(json.contains("\"DRIVERS\""));
        assert!(json.contains("\"POSTGRESQL_DRIVER_OPTIONS\""));
        assert!(json.contains("\"RESAMPLING_METHOD\""));
        assert!(json.contains("\"bilinear\""));
        // Absent options are skipped entirely
        assert!(!json.contains("MYSQL_DRIVER_OPTIONS"));
        assert!(!json.contains("SQLITE_DRIVER_OPTIONS"));
    }

    #[test]
    fn test_serde_round_trip_is_identical() {
        let settings = test_settings();
        let json = serde_json::to_string(&settings).unwrap();
        let restored: ServerSettings = serde_json::from_str(&json).unwrap();
        assert_eq!(settings, restored);
    }

    #[test]
    fn test_deserialize_with_missing_keys() {
        let settings: ServerSettings = serde_json::from_str("{}").unwrap();
        assert!(settings.drivers.is_empty());
        assert_eq!(settings.resampling_method, ResamplingMethod::Nearest);
    }
}
