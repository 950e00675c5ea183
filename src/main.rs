//! Benefits Engine HTTP server.

use std::path::PathBuf;

use clap::Parser;
use tracing::info;

use benefits_engine::api::{AppState, create_router};
use benefits_engine::config::ConfigLoader;

/// Serve the employee benefits API.
#[derive(Debug, Parser)]
#[command(name = "benefits-server", version, about)]
struct Cli {
    /// Directory containing policy.yaml and service.yaml.
    #[arg(long, default_value = "./config/default")]
    config: PathBuf,

    /// Address to listen on; overrides the configured bind_address.
    #[arg(long)]
    bind: Option<String>,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();

    let mut config = ConfigLoader::load(&cli.config)?;
    if let Some(bind) = cli.bind {
        config.set_bind_address(bind);
    }

    let state = AppState::from_config(&config)?;
    let router = create_router(state);

    let bind_address = config.service().bind_address.clone();
    let listener = tokio::net::TcpListener::bind(&bind_address).await?;
    info!(
        bind_address = %bind_address,
        data_path = %config.service().data_path.display(),
        "Benefits server listening"
    );

    axum::serve(listener, router).await?;
    Ok(())
}
