//! tileserver-config - resolve and inspect the settings descriptor.
//!
//! Resolves the descriptor from embedded defaults, environment variables
//! and CLI flags, runs the fail-fast checks the host framework would make
//! at its own initialization, and prints the result.

use clap::Parser;
use std::process::ExitCode;
use tracing::{error, info};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use tileserver_config::{Config, Driver};

fn main() -> ExitCode {
    let config = Config::parse();

    init_logging(config.verbose);

    let emit_json = config.json;
    let settings = config.into_settings();

    // Fail fast, the way the framework would at init
    if let Err(e) = settings.validate() {
        error!("Configuration error: {}", e);
        return ExitCode::FAILURE;
    }

    info!("Configuration:");
    info!("  Drivers: {}", settings.driver_names().join(", "));
    if settings.drivers.contains(&Driver::Postgresql) {
        if let Some(ref options) = settings.postgresql_driver_options {
            info!("  PostGIS store: {}", options.redacted());
        }
    }
    if settings.drivers.contains(&Driver::Mysql) {
        if let Some(ref options) = settings.mysql_driver_options {
            info!("  MySQL store: {}", options.redacted());
        }
    }
    if settings.drivers.contains(&Driver::Sqlite) {
        if let Some(ref options) = settings.sqlite_driver_options {
            info!("  SQLite store: {}", options.path.display());
        }
    }
    info!("  Resampling method: {}", settings.resampling_method);

    if emit_json {
        match serde_json::to_string_pretty(&settings) {
            Ok(body) => println!("{}", body),
            Err(e) => {
                error!("Failed to serialize settings: {}", e);
                return ExitCode::FAILURE;
            }
        }
    }

    ExitCode::SUCCESS
}

/// Initialize the tracing/logging subsystem.
fn init_logging(verbose: bool) {
    let env_filter = if verbose {
        "tileserver_config=debug"
    } else {
        "tileserver_config=info"
    };

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| env_filter.into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();
}
