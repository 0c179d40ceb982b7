//! Slash commands registered globally on startup.

use serenity::all::{CommandOptionType, CreateCommand, CreateCommandOption, Permissions};

pub const SETUP: &str = "setup";
pub const SETUP_PANELS: &str = "panels";
pub const SETUP_ADVANCED: &str = "advanced";
pub const BACKPACK: &str = "backpack";

/// Every command the bot offers.
///
/// `/setup` is restricted to members who can manage the server.
pub fn global_commands() -> Vec<CreateCommand> {
    vec![
        CreateCommand::new(SETUP)
            .description("Setup commands for the game.")
            .default_member_permissions(Permissions::MANAGE_GUILD)
            .add_option(CreateCommandOption::new(
                CommandOptionType::SubCommand,
                SETUP_PANELS,
                "Setup the panels for the game.",
            ))
            .add_option(CreateCommandOption::new(
                CommandOptionType::SubCommand,
                SETUP_ADVANCED,
                "Setup the advanced settings for the game.",
            )),
        CreateCommand::new(BACKPACK).description("Look into your backpack."),
    ]
}
