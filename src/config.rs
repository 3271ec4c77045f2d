//! Configuration management for the settings descriptor.
//!
//! This module provides the loading surface that resolves a
//! [`ServerSettings`] record from three layers:
//! - literal defaults embedded in [`crate::descriptor`]
//! - environment variables with the `TILE_` prefix
//! - command-line arguments via clap
//!
//! # Example
//!
//! ```ignore
//! use tileserver_config::Config;
//! use clap::Parser;
//!
//! // Parse from command line and environment
//! let config = Config::parse();
//!
//! // Resolve into the record handed to the framework
//! let settings = config.into_settings();
//! settings.validate()?;
//! ```
//!
//! # Environment Variables
//!
//! - `TILE_DRIVERS` - Comma-separated driver list (default: postgresql)
//! - `TILE_POSTGRESQL_URL` - PostGIS connection URL
//! - `TILE_MYSQL_URL` - MySQL connection URL
//! - `TILE_SQLITE_PATH` - SQLite database file path
//! - `TILE_RESAMPLING_METHOD` - Default resampling method (default: bilinear)

use std::path::PathBuf;

use clap::Parser;

use crate::descriptor::{DEFAULT_DATABASE_URL, DEFAULT_RESAMPLING_METHOD};
use crate::driver::Driver;
use crate::options::{MysqlOptions, PostgresOptions, SqliteOptions};
use crate::resampling::ResamplingMethod;
use crate::settings::ServerSettings;

// =============================================================================
// CLI Arguments
// =============================================================================

/// Settings descriptor for a PostGIS-backed raster tile server.
///
/// Resolves the storage drivers, connection options and default resampling
/// method that the tile-serving framework reads at startup.
#[derive(Parser, Debug, Clone)]
#[command(name = "tileserver-config")]
#[command(author, version, about, long_about = None)]
pub struct Config {
    // =========================================================================
    // Driver Configuration
    // =========================================================================
    /// Storage drivers to enable (comma-separated).
    #[arg(
        long,
        default_value = "postgresql",
        value_delimiter = ',',
        env = "TILE_DRIVERS"
    )]
    pub drivers: Vec<Driver>,

    /// Connection URL for the PostGIS raster store.
    #[arg(long, default_value = DEFAULT_DATABASE_URL, env = "TILE_POSTGRESQL_URL")]
    pub postgresql_url: String,

    /// Connection URL for a MySQL raster store.
    #[arg(long, env = "TILE_MYSQL_URL")]
    pub mysql_url: Option<String>,

    /// Path to a SQLite raster database file.
    #[arg(long, env = "TILE_SQLITE_PATH")]
    pub sqlite_path: Option<PathBuf>,

    // =========================================================================
    // Rendering Configuration
    // =========================================================================
    /// Default resampling method for zoom levels without a native
    /// raster resolution.
    #[arg(long, default_value_t = DEFAULT_RESAMPLING_METHOD, env = "TILE_RESAMPLING_METHOD")]
    pub resampling_method: ResamplingMethod,

    // =========================================================================
    // Output Configuration
    // =========================================================================
    /// Emit the resolved settings as JSON on stdout.
    #[arg(long, default_value_t = false)]
    pub json: bool,

    /// Enable verbose logging (debug level).
    #[arg(short, long, default_value_t = false)]
    pub verbose: bool,
}

impl Config {
    /// Resolve into the settings record handed to the framework.
    ///
    /// Options records are attached for every layer that supplied one; the
    /// PostGIS URL always has a value because it carries a default. No
    /// validation happens here, call [`ServerSettings::validate`] on the
    /// result.
    pub fn into_settings(self) -> ServerSettings {
        let mut settings =
            ServerSettings::new().with_resampling_method(self.resampling_method);

        for driver in self.drivers {
            settings = settings.with_driver(driver);
        }

        settings =
            settings.with_postgresql_options(PostgresOptions::new(self.postgresql_url));

        if let Some(url) = self.mysql_url {
            settings = settings.with_mysql_options(MysqlOptions::new(url));
        }
        if let Some(path) = self.sqlite_path {
            settings = settings.with_sqlite_options(SqliteOptions::new(path));
        }

        settings
    }
}

// =============================================================================
// Tests
// =============================================================================
