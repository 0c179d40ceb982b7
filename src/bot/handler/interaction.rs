//! Interaction dispatch.
//!
//! Every slash command, component click and modal submission arrives through
//! `interaction_create`. Components and modals are routed by their custom ID,
//! see [`Component`]. IDs the bot did not send are ignored.
//!
//! Handlers return `Result<(), AppError>`; failures are reported back to the
//! user by [`reply::report_error`] instead of leaving the interaction hanging.

use serenity::all::{
    ActionRowComponent, ChannelId, ComponentInteraction, ComponentInteractionDataKind, Context,
    Interaction, ModalInteraction, RoleId,
};

use crate::{
    bot::{
        component::Component,
        handler::{advanced, backpack, character, command, setup, town, travel},
        reply,
    },
    error::AppError,
    state::AppState,
};

/// Routes an interaction to its handler and reports failures to the user.
pub async fn handle_interaction(state: &AppState, ctx: Context, interaction: Interaction) {
    let result = match &interaction {
        Interaction::Command(command) => command::handle_command(state, &ctx, command).await,
        Interaction::Component(component) => handle_component(state, &ctx, component).await,
        Interaction::Modal(modal) => handle_modal(state, &ctx, modal).await,
        _ => Ok(()),
    };

    if let Err(e) = result {
        reply::report_error(&ctx, state, &interaction, e).await;
    }
}

async fn handle_component(
    state: &AppState,
    ctx: &Context,
    interaction: &ComponentInteraction,
) -> Result<(), AppError> {
    let Some(component) = Component::parse(&interaction.data.custom_id) else {
        return Ok(());
    };

    tracing::debug!(
        "User {} used component {}",
        interaction.user.id,
        interaction.data.custom_id
    );

    match component {
        Component::SetupLanguage => {
            setup::handle_language(state, ctx, interaction, first_string(interaction)).await
        }
        Component::StartJourney => character::handle_start_journey(state, ctx, interaction).await,
        Component::WorldStatistics => {
            setup::handle_world_statistics(state, ctx, interaction).await
        }
        Component::SystemAnnouncement => {
            advanced::handle_system_announcement(state, ctx, interaction).await
        }
        Component::SystemAnnouncementDeactivate => {
            advanced::handle_deactivate_announcements(state, ctx, interaction).await
        }
        Component::SystemAnnouncementChannel => {
            advanced::handle_announcement_channel(state, ctx, interaction, first_channel(interaction))
                .await
        }
        Component::Roles => advanced::handle_roles(state, ctx, interaction).await,
        Component::RolesSelect => {
            advanced::handle_role_guild_select(state, ctx, interaction, first_string(interaction))
                .await
        }
        Component::RolesCreate(guild) => {
            advanced::handle_role_create(state, ctx, interaction, guild).await
        }
        Component::RolesRole(guild) => {
            advanced::handle_role_select(state, ctx, interaction, guild, first_role(interaction))
                .await
        }
        Component::ChatRooms => advanced::handle_chat_rooms(state, ctx, interaction).await,
        Component::ChatRoomsSelect => {
            advanced::handle_chat_room_select(state, ctx, interaction, first_string(interaction))
                .await
        }
        Component::ChatRoomChannel(room_type) => {
            advanced::handle_chat_room_channel(
                state,
                ctx,
                interaction,
                room_type,
                first_channel(interaction),
            )
            .await
        }
        Component::KeepLanguage => character::handle_keep_language(state, ctx, interaction).await,
        Component::CharacterLanguage => {
            character::handle_language_select(state, ctx, interaction, first_string(interaction))
                .await
        }
        Component::StarterSkill => {
            character::handle_starter_skill(state, ctx, interaction, first_string(interaction))
                .await
        }
        Component::TownMenu => town::handle_town_menu(state, ctx, interaction).await,
        Component::Walk(special) => town::handle_walk(state, ctx, interaction, special).await,
        Component::Action(action) => town::handle_action(state, ctx, interaction, action).await,
        Component::Travel => travel::handle_travel_menu(state, ctx, interaction).await,
        Component::TravelSelect => {
            travel::handle_destination(state, ctx, interaction, first_string(interaction)).await
        }
        Component::Backpack(page) => {
            backpack::handle_page(state, ctx, interaction, page).await
        }
        // Only used as a modal ID.
        Component::CharacterCreator(_) => Ok(()),
    }
}

async fn handle_modal(
    state: &AppState,
    ctx: &Context,
    interaction: &ModalInteraction,
) -> Result<(), AppError> {
    match Component::parse(&interaction.data.custom_id) {
        Some(Component::CharacterCreator(language)) => {
            character::handle_creator_submit(state, ctx, interaction, &language).await
        }
        _ => Ok(()),
    }
}

fn first_string(interaction: &ComponentInteraction) -> Option<String> {
    match &interaction.data.kind {
        ComponentInteractionDataKind::StringSelect { values } => values.first().cloned(),
        _ => None,
    }
}

fn first_channel(interaction: &ComponentInteraction) -> Option<ChannelId> {
    match &interaction.data.kind {
        ComponentInteractionDataKind::ChannelSelect { values } => values.first().copied(),
        _ => None,
    }
}

fn first_role(interaction: &ComponentInteraction) -> Option<RoleId> {
    match &interaction.data.kind {
        ComponentInteractionDataKind::RoleSelect { values } => values.first().copied(),
        _ => None,
    }
}

/// Value typed into a modal text input, empty when the field is missing.
pub fn input_value(interaction: &ModalInteraction, custom_id: &str) -> String {
    interaction
        .data
        .components
        .iter()
        .flat_map(|row| row.components.iter())
        .find_map(|component| match component {
            ActionRowComponent::InputText(input) if input.custom_id == custom_id => {
                input.value.clone()
            }
            _ => None,
        })
        .unwrap_or_default()
}
