//! Slash command handlers.

use serenity::all::{CommandInteraction, Context};

use crate::{
    bot::{
        commands::{BACKPACK, SETUP, SETUP_ADVANCED, SETUP_PANELS},
        handler::{backpack, setup},
        reply,
    },
    error::AppError,
    state::AppState,
};

pub async fn handle_command(
    state: &AppState,
    ctx: &Context,
    command: &CommandInteraction,
) -> Result<(), AppError> {
    tracing::debug!("User {} ran /{}", command.user.id, command.data.name);

    match command.data.name.as_str() {
        SETUP => handle_setup(state, ctx, command).await,
        BACKPACK => backpack::handle_command(state, ctx, command).await,
        _ => Ok(()),
    }
}

async fn handle_setup(
    state: &AppState,
    ctx: &Context,
    command: &CommandInteraction,
) -> Result<(), AppError> {
    if command.guild_id.is_none() {
        command
            .create_response(
                &ctx.http,
                reply::ephemeral_text("This command can only be used in a server."),
            )
            .await?;
        return Ok(());
    }

    let subcommand = command.data.options.first().map(|option| option.name.as_str());

    match subcommand {
        Some(SETUP_PANELS) => setup::handle_setup_panels(state, ctx, command).await,
        Some(SETUP_ADVANCED) => setup::handle_setup_advanced(state, ctx, command).await,
        _ => {
            command
                .create_response(&ctx.http, reply::ephemeral_text("Unknown subcommand."))
                .await?;
            Ok(())
        }
    }
}
