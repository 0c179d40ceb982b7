mod bot;
mod cache;
mod config;
mod data;
mod error;
mod model;
mod scheduler;
mod service;
mod startup;
mod state;
mod util;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use crate::{config::Config, error::AppError, service::seed::SeedService};

#[derive(Parser)]
#[command(name = "fantasy-frontiers", about = "Fantasy Frontiers Discord bot")]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand)]
enum Command {
    /// Connect to Discord and run the game (default)
    Start,
    /// Run database migrations and import the bundled towns and translations
    Migrate,
    /// Generate town images
    Images,
}

#[tokio::main]
async fn main() -> Result<(), AppError> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::from_default_env().add_directive(tracing::Level::INFO.into()),
        )
        .init();

    let cli = Cli::parse();
    let config = Config::from_env()?;

    match cli.command.unwrap_or(Command::Start) {
        Command::Start => start(config).await,
        Command::Migrate => migrate(config).await,
        Command::Images => {
            tracing::warn!("Image generation is not supported");
            Ok(())
        }
    }
}

async fn migrate(config: Config) -> Result<(), AppError> {
    let db = startup::connect_to_database(&config).await?;
    let report = SeedService::new(&db).import_all().await?;

    tracing::info!(
        "Imported {} towns and {} translations",
        report.towns,
        report.translations
    );

    Ok(())
}

async fn start(config: Config) -> Result<(), AppError> {
    let db = startup::connect_to_database(&config).await?;
    let state = startup::load_state(db).await?;

    let mut client = bot::start::build_client(&config, state.clone()).await?;
    let discord_http = client.http.clone();

    let mut travel_scheduler =
        scheduler::travel::start_scheduler(state.clone(), discord_http.clone()).await?;

    let shard_manager = client.shard_manager.clone();
    tokio::spawn(async move {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!("Failed to listen for shutdown signal: {}", e);
            return;
        }

        tracing::info!("Shutting down");
        if let Err(e) = travel_scheduler.shutdown().await {
            tracing::error!("Failed to stop travel scheduler: {}", e);
        }
        scheduler::travel::stop_travels(&state, &discord_http).await;
        shard_manager.shutdown_all().await;
    });

    bot::start::start_bot(&mut client).await
}
