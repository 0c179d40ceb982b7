//! Ready event handler for bot initialization.
//!
//! Fired once the bot has connected to Discord's gateway. Registers the global
//! slash commands so newly added commands show up without a manual step.

use serenity::all::{ActivityData, Command, Context, Ready};

use crate::bot::commands::global_commands;

/// Handles the ready event when the bot connects to Discord.
///
/// # Arguments
/// - `ctx` - Discord context for setting activity status and registering commands
/// - `ready` - Ready event data containing bot user information
pub async fn handle_ready(ctx: Context, ready: Ready) {
    tracing::info!("{} is connected to Discord", ready.user.name);

    ctx.set_activity(Some(ActivityData::playing("Fantasy Frontiers")));

    match Command::set_global_commands(&ctx.http, global_commands()).await {
        Ok(commands) => tracing::info!("Registered {} global commands", commands.len()),
        Err(e) => tracing::error!("Failed to register global commands: {:?}", e),
    }
}
