//! Chatroom server entry point
//!
//! Run with:
//! ```bash
//! cargo run -p chatroom-api --bin chatroom-server
//! ```
//!
//! Configuration is loaded from environment variables and an optional `.env` file.

use chatroom_common::{try_init_tracing, AppConfig, TracingConfig};
use tracing::{error, info};

#[tokio::main]
async fn main() {
    let config = match AppConfig::from_env() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Failed to load configuration: {e}");
            std::process::exit(1);
        }
    };

    if let Err(e) = try_init_tracing(&TracingConfig::for_environment(config.app.env)) {
        eprintln!("Warning: Failed to initialize tracing: {e}");
    }

    if let Err(e) = run(config).await {
        error!(error = %e, "Server failed");
        std::process::exit(1);
    }
}

async fn run(config: AppConfig) -> anyhow::Result<()> {
    info!(
        env = ?config.app.env,
        port = config.api.port,
        "Starting chatroom server"
    );

    chatroom_api::run(config).await?;

    Ok(())
}
