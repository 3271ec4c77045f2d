use thiserror::Error;

use crate::driver::Driver;

/// Errors that can occur when resolving or validating server settings
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SettingsError {
    /// Driver identifier is not in the recognized set
    #[error("Unknown driver: '{0}' (recognized: postgresql, mysql, sqlite)")]
    UnknownDriver(String),

    /// Resampling method identifier is not in the recognized set
    #[error("Unknown resampling method: '{0}' (recognized: nearest, bilinear, cubic, gaussian, lanczos)")]
    UnknownResampling(String),

    /// Connection URL could not be parsed
    #[error("Invalid connection URL '{url}': {reason}")]
    InvalidUrl { url: String, reason: String },

    /// Connection URL carries a scheme the driver does not accept
    #[error("Unsupported scheme '{scheme}' in connection URL (expected {expected})")]
    UnsupportedScheme {
        scheme: String,
        expected: &'static str,
    },

    /// Connection URL names no database
    #[error("Connection URL '{url}' names no database")]
    MissingDatabase { url: String },

    /// SQLite options name an empty database path
    #[error("SQLite database path is empty")]
    EmptySqlitePath,

    /// A driver is enabled without a matching options record
    #[error("Driver '{driver}' is enabled but no matching options were supplied")]
    MissingDriverOptions { driver: Driver },

    /// The driver list is empty
    #[error("No storage drivers are enabled (recognized: postgresql, mysql, sqlite)")]
    NoDriversEnabled,

    /// The process-wide descriptor slot was already filled
    #[error("Settings descriptor was already installed for this process")]
    AlreadyInitialized,
}
