use serenity::all::{Context, EventHandler, Guild, GuildId, Interaction, Ready, UnavailableGuild};
use serenity::async_trait;

use crate::{error::AppError, model::character::DEFAULT_LANGUAGE, state::AppState};

pub mod advanced;
pub mod backpack;
pub mod character;
pub mod command;
pub mod guild;
pub mod interaction;
pub mod ready;
pub mod setup;
pub mod town;
pub mod travel;

/// Discord bot event handler
pub struct Handler {
    pub state: AppState,
}

impl Handler {
    pub fn new(state: AppState) -> Self {
        Self { state }
    }
}

#[async_trait]
impl EventHandler for Handler {
    /// Called when the bot is ready and connected to Discord
    async fn ready(&self, ctx: Context, ready: Ready) {
        ready::handle_ready(ctx, ready).await;
    }

    /// Called when the bot is removed from a guild or the guild becomes unavailable
    async fn guild_delete(&self, ctx: Context, incomplete: UnavailableGuild, _full: Option<Guild>) {
        guild::handle_guild_delete(&self.state, ctx, incomplete).await;
    }

    /// Called for slash commands, component clicks and modal submissions
    async fn interaction_create(&self, ctx: Context, interaction: Interaction) {
        interaction::handle_interaction(&self.state, ctx, interaction).await;
    }
}

/// Language of the server an interaction came from, the default outside servers.
pub async fn server_language(state: &AppState, guild_id: Option<GuildId>) -> Result<String, AppError> {
    match guild_id {
        Some(guild_id) => Ok(state.settings.get(guild_id.get()).await?.language),
        None => Ok(DEFAULT_LANGUAGE.to_string()),
    }
}
