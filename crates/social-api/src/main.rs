//! Social API Server entry point
//!
//! Run with:
//! ```bash
//! cargo run -p social-api
//! ```
//!
//! Configuration is read from the file named by `SOCIAL_CONFIG` (with
//! `SOCIAL__*` overrides) or, when that is unset, from plain environment
//! variables.

use social_common::{try_init_tracing_with_config, AppConfig, ConfigError, TracingConfig};
use tracing::{error, info};

#[tokio::main]
async fn main() {
    let config = match load_config() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Failed to load configuration: {e}");
            std::process::exit(1);
        }
    };

    // Initialize tracing
    let tracing_config = if config.app.env.is_production() {
        TracingConfig::production()
    } else {
        TracingConfig::development()
    };
    if let Err(e) = try_init_tracing_with_config(tracing_config) {
        eprintln!("Warning: Failed to initialize tracing: {e}");
    }

    info!(
        env = ?config.app.env,
        address = %config.api.address(),
        "Configuration loaded"
    );

    // Run the server
    if let Err(e) = social_api::run(config).await {
        error!(error = %e, "Server failed");
        std::process::exit(1);
    }
}

fn load_config() -> Result<AppConfig, ConfigError> {
    match std::env::var("SOCIAL_CONFIG") {
        Ok(path) => AppConfig::load(path),
        Err(_) => AppConfig::from_env(),
    }
}
