//! Guild event handlers.

use serenity::all::{Context, UnavailableGuild};

use crate::state::AppState;

/// Drops the cached settings of a server the bot left.
///
/// Outages also fire this event; the settings are simply reloaded from the
/// database on the next interaction.
pub async fn handle_guild_delete(state: &AppState, _ctx: Context, incomplete: UnavailableGuild) {
    let guild_id = incomplete.id.get();
    state.settings.invalidate(guild_id);

    if incomplete.unavailable {
        tracing::debug!("Guild {} became unavailable", guild_id);
    } else {
        tracing::info!("Removed from guild {}", guild_id);
    }
}
