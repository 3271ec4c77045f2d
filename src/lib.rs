//! # Tileserver Config
//!
//! Configuration descriptor for a PostGIS-backed raster tile server.
//!
//! A raster tile server renders fixed-size image tiles from geospatial
//! raster data on request. The server itself is host-framework territory;
//! this crate supplies the inputs that framework reads once at process
//! start: which storage drivers to enable, the connection options for each,
//! and the default resampling method used when serving tiles at zoom levels
//! without a native raster resolution.
//!
//! ## Architecture
//!
//! The crate is organized into several modules:
//!
//! - [`driver`] - Storage driver identifiers
//! - [`options`] - Per-driver connection options
//! - [`resampling`] - Resampling method identifiers
//! - [`settings`] - The settings record and its validation
//! - [`descriptor`] - Embedded-literal defaults and process-wide exposure
//! - [`config`] - CLI and environment loading surface
//! - [`error`] - Error types
//!
//! ## Example
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

pub mod config;
pub mod descriptor;
pub mod driver;
pub mod error;
pub mod options;
pub mod resampling;
pub mod settings;

// Re-export commonly used types
pub use config::Config;
pub use descriptor::{
    default_settings, global, init, DEFAULT_DATABASE_URL, DEFAULT_RESAMPLING_METHOD,
};
pub use driver::Driver;
pub use error::SettingsError;
pub use options::{MysqlOptions, PostgresOptions, SqliteOptions};
pub use resampling::ResamplingMethod;
pub use settings::ServerSettings;
