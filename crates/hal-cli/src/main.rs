//! HAL renderer command-line interface.
//!
//! Reads a HAL+JSON resource from a file or stdin and writes it as HAL+XML
//! (or HAL+JSON) to stdout or a file.

mod app;
mod config;

use clap::Parser;
use tracing::error;

use crate::config::CliConfig;

/// Default filter directive. The library and this binary share the
/// `hal_render` target prefix.
fn log_filter(level: &str) -> String {
    format!("hal_render={}", level)
}

/// Installs the tracing subscriber. `RUST_LOG` overrides `level`.
fn init_logging(level: &str) {
    use tracing_subscriber::{EnvFilter, fmt, prelude::*};

    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(log_filter(level)));

    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(filter)
        .init();
}

fn main() -> anyhow::Result<()> {
    let config = CliConfig::parse();
    init_logging(&config.log_level);

    if let Err(errors) = config.validate() {
        for error in &errors {
            eprintln!("Configuration error: {}", error);
        }
        std::process::exit(1);
    }

    if let Err(err) = app::run(&config) {
        error!(error = %err, "Rendering failed");
        eprintln!("Error: {:#}", err);
        std::process::exit(1);
    }

    Ok(())
}
