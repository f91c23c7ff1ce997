//! HR.360 Server
//!
//! Serves the compiled frontend and the shell/chart API.
//!
//! Run with: cargo run --bin hr360
//!
//! # Configuration
//!
//! Loaded from `HR360_CONFIG`, `~/.config/hr360/config.toml`,
//! `/etc/hr360/config.toml` or `./config.toml`, then overridden by `HR360_*`
//! environment variables. `RUST_LOG` overrides the configured log level.

use hr360::{serve, AppState, Config, LoggingConfig};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = Config::load_default();
    init_tracing(&config.logging);

    tracing::info!("Starting HR.360 server v{}", env!("CARGO_PKG_VERSION"));
    tracing::info!("Assets directory: {:?}", config.server.assets_dir);
    tracing::info!("Navbar selection seed: {:?}", config.shell.selection_seed);

    let state = AppState::new(config.server, config.shell);
    serve(state).await?;

    tracing::info!("HR.360 server stopped");
    Ok(())
}

fn init_tracing(logging: &LoggingConfig) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| logging.filter().into());

    if logging.is_json() {
        tracing_subscriber::registry()
            .with(filter)
            .with(tracing_subscriber::fmt::layer().json())
            .init();
    } else {
        tracing_subscriber::registry()
            .with(filter)
            .with(tracing_subscriber::fmt::layer())
            .init();
    }
}
