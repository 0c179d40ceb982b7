use serenity::all::{Client, GatewayIntents};

use crate::{bot::handler::Handler, config::Config, error::AppError, state::AppState};

/// Builds the Discord client without connecting it.
///
/// The caller takes the client's HTTP handle for the travel scheduler before
/// starting the client, so scheduled messages share the client's rate limits.
///
/// # Arguments
/// - `config` - Application configuration, must contain the bot token
/// - `state` - Shared caches the handler works on
///
/// # Returns
/// - `Ok(Client)` - Client ready to be started
/// - `Err(AppError)` - Missing token or client initialization failed
pub async fn build_client(config: &Config, state: AppState) -> Result<Client, AppError> {
    let intents = GatewayIntents::GUILDS;

    let client = Client::builder(config.require_bot_token()?, intents)
        .event_handler(Handler::new(state))
        .await?;

    Ok(client)
}

/// Connects to Discord and processes events until the client shuts down.
pub async fn start_bot(client: &mut Client) -> Result<(), AppError> {
    tracing::info!("Starting Discord bot...");

    client.start().await?;

    Ok(())
}
