use us_config::Config;
use us_core::UserController;
use us_db::PostgresUserRepository;
use us_server::{AppState, Cli, Server, ShutdownCoordinator, logger};

use std::error::Error;
use std::path::PathBuf;
use std::sync::Arc;

use clap::Parser;
use log::{error, info};

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    let cli = Cli::parse();

    // A missing .env is fine; variables may come from the environment
    dotenvy::dotenv().ok();

    // Load and validate configuration
    let config = Config::load(&cli.config)?;
    config.validate()?;

    // Initialize logger (before any other logging)
    let log_file = config.logging.file.as_ref().map(PathBuf::from);
    logger::initialize(config.logging.level, log_file, config.logging.colored)?;

    info!("Starting us-server v{}", env!("CARGO_PKG_VERSION"));
    config.log_summary();

    // Initialize database pool
    let pool = us_db::connect(&config.database).await?;
    us_db::ensure_schema(&pool).await?;

    // Wire repository -> controller -> handlers
    let repo = Arc::new(PostgresUserRepository::new(pool));
    let controller = UserController::new(repo);
    let server = Server::new(&config.server, AppState::new(controller));

    // Spawn signal handler for graceful shutdown
    let shutdown = ShutdownCoordinator::new();
    let shutdown_for_signal = shutdown.clone();
    tokio::spawn(async move {
        match tokio::signal::ctrl_c().await {
            Ok(()) => {
                info!("Received SIGINT (Ctrl+C), initiating graceful shutdown");
                shutdown_for_signal.shutdown();
            }
            Err(e) => {
                error!("Failed to listen for SIGINT: {}", e);
            }
        }
    });

    if let Err(e) = server.start(shutdown).await {
        error!("Server failed: {}", e);
        return Err(e.into());
    }

    Ok(())
}
