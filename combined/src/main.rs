//! Combined binary for development - runs all services in one process.

use clap::{Parser, Subcommand};
use tracing::{error, info};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "rust-api")]
#[command(about = "Combined microservices binary for development")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run all services in a single process (development mode)
    Serve {
        #[arg(long, default_value = "0.0.0.0")]
        host: String,
        #[arg(long, default_value = "8080")]
        auth_port: u16,
        #[arg(long, default_value = "8081")]
        debts_port: u16,
        /// The score service reaches debts through DEBTS_SERVICE_URL
        #[arg(long, default_value = "8082")]
        score_port: u16,
    },
    /// Run database migrations for every service that owns a database
    Migrate {
        #[command(subcommand)]
        action: MigrateAction,
    },
}

#[derive(Subcommand, Clone, Copy)]
enum MigrateAction {
    /// Run pending migrations
    Up,
    /// Rollback last migration
    Down,
    /// Show migration status
    Status,
    /// Roll back and reapply all migrations
    Fresh,
}

impl From<MigrateAction> for common::MigrateAction {
    fn from(action: MigrateAction) -> Self {
        match action {
            MigrateAction::Up => common::MigrateAction::Up,
            MigrateAction::Down => common::MigrateAction::Down,
            MigrateAction::Status => common::MigrateAction::Status,
            MigrateAction::Fresh => common::MigrateAction::Fresh,
        }
    }
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    // Load environment variables
    dotenvy::dotenv().ok();

    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Serve {
            host,
            auth_port,
            debts_port,
            score_port,
        } => {
            info!("Starting combined services in development mode");
            info!("  Auth service:  http://{}:{}", host, auth_port);
            info!("  Debts service: http://{}:{}", host, debts_port);
            info!("  Score service: http://{}:{}", host, score_port);

            let auth_host = host.clone();
            let auth_handle = tokio::spawn(async move {
                if let Err(e) = auth_service_lib::run_embedded(Some(&auth_host), Some(auth_port)).await {
                    error!("Auth service failed: {}", e);
                }
            });

            let debts_host = host.clone();
            let debts_handle = tokio::spawn(async move {
                if let Err(e) =
                    debts_service_lib::run_embedded(Some(&debts_host), Some(debts_port)).await
                {
                    error!("Debts service failed: {}", e);
                }
            });

            let score_host = host.clone();
            let score_handle = tokio::spawn(async move {
                if let Err(e) =
                    score_service_lib::run_embedded(Some(&score_host), Some(score_port)).await
                {
                    error!("Score service failed: {}", e);
                }
            });

            // Wait for any service to exit (which would indicate an error)
            tokio::select! {
                _ = auth_handle => {
                    error!("Auth service exited unexpectedly");
                }
                _ = debts_handle => {
                    error!("Debts service exited unexpectedly");
                }
                _ = score_handle => {
                    error!("Score service exited unexpectedly");
                }
            }
        }
        Commands::Migrate { action } => {
            auth_service_lib::run_migrations(action.into()).await?;
            debts_service_lib::run_migrations(action.into()).await?;
        }
    }

    Ok(())
}
