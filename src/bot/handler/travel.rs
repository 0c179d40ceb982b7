//! Starting a journey to a connected town.
//!
//! Each journey gets a private thread the traveler is added to. The scheduler
//! posts encounters and the arrival there and deletes the thread afterwards.

use chrono::Utc;
use serenity::all::{
    ChannelId, ChannelType, ComponentInteraction, Context, CreateActionRow, CreateEmbed,
    CreateInteractionResponseMessage, CreateMessage, CreateSelectMenu, CreateSelectMenuKind,
    CreateSelectMenuOption, CreateThread, EditInteractionResponse,
};

use crate::{
    bot::{
        component::Component,
        handler::town::reject_traveler,
        reply::{self, MENU_COLOR},
    },
    error::{domain::DomainError, AppError},
    model::{
        character::Character,
        location::SpecialLocation,
        settings::ChannelKind,
        town::{Connection, Town},
        translation::Translator,
        travel::Travel,
    },
    service::town_action::TownActionService,
    state::AppState,
    util::text::{component_slug, format_duration, placeholders},
};

const MAX_DESTINATIONS: usize = 25;

pub async fn handle_travel_menu(
    state: &AppState,
    ctx: &Context,
    interaction: &ComponentInteraction,
) -> Result<(), AppError> {
    if reject_traveler(state, ctx, interaction).await? {
        return Ok(());
    }

    let (character, town) = TownActionService::new(&state.characters, &state.towns)
        .character_in_town(interaction.user.id.get())
        .await?;

    let message = travel_menu(state.translations.as_ref(), &character, &town);
    interaction
        .create_response(&ctx.http, reply::menu(true, message))
        .await?;

    Ok(())
}

/// Opens the travel thread and registers the journey.
pub async fn handle_destination(
    state: &AppState,
    ctx: &Context,
    interaction: &ComponentInteraction,
    destination: Option<String>,
) -> Result<(), AppError> {
    let (Some(destination), Some(guild_id)) = (destination, interaction.guild_id) else {
        return Err(AppError::BadRequest("Travel needs a destination on a server".to_string()));
    };
    if reject_traveler(state, ctx, interaction).await? {
        return Ok(());
    }

    let (character, town) = TownActionService::new(&state.characters, &state.towns)
        .character_in_town(interaction.user.id.get())
        .await?;
    let connection = town
        .find_connection(&destination)
        .cloned()
        .ok_or_else(|| DomainError::UnknownTown(destination.clone()))?;
    let target = connection.destination()?;

    interaction.defer(&ctx.http).await?;

    let settings = state.settings.get(guild_id.get()).await?;
    let parent = match (settings.system_announcement.kind, settings.system_announcement.channel_id) {
        (ChannelKind::Channel, Some(channel_id)) if channel_id != 0 => ChannelId::new(channel_id),
        _ => interaction.channel_id,
    };

    let thread = parent
        .create_thread(
            &ctx.http,
            CreateThread::new(format!("{} - {}", town.name, target.town))
                .kind(ChannelType::PrivateThread)
                .invitable(false),
        )
        .await?;
    thread.id.add_thread_member(&ctx.http, interaction.user.id).await?;

    let now = Utc::now();
    let agility = character.skilled_stats().agility;
    let travel = Travel::new(
        character.discord_client_id,
        character.language.clone(),
        town.name.clone(),
        connection.clone(),
        thread.id.get(),
        now,
        connection.travel_duration(agility),
    );

    let t = state.translations.as_ref();
    let language = &character.language;
    let embed = CreateEmbed::new()
        .title(t.translate(language, "town.menu.travel.started"))
        .description(t.translate_with(
            language,
            "town.menu.travel.started.description",
            &placeholders([
                ("start", town.name.clone()),
                ("destination", target.town.clone()),
                ("distance", format!("({})", connection.distance_label())),
                ("eta", connection.eta(now, agility)),
                ("thread", format!("<#{}>", thread.id)),
            ]),
        ))
        .color(MENU_COLOR);

    thread
        .id
        .send_message(&ctx.http, CreateMessage::new().embed(embed.clone()))
        .await?;
    state.travels.add(travel);

    tracing::info!(
        "User {} travels from {} to {}",
        interaction.user.id,
        town.name,
        connection.name
    );

    interaction
        .edit_response(
            &ctx.http,
            EditInteractionResponse::new()
                .content("")
                .embed(embed)
                .components(Vec::new()),
        )
        .await?;

    Ok(())
}

/// Select label of a road: destination, distance and travel time.
pub fn destination_label(connection: &Connection, agility: i32) -> String {
    let name = match connection.destination() {
        Ok(location) if location.special == SpecialLocation::Port => {
            format!("{} {}", location.town, SpecialLocation::Port.emoji())
        }
        Ok(location) => location.town,
        Err(_) => connection.name.clone(),
    };

    format!(
        "{} ({}) - {}",
        name,
        connection.distance_label(),
        format_duration(connection.travel_duration_secs(agility))
    )
}

pub fn travel_menu(
    translator: &impl Translator,
    character: &Character,
    town: &Town,
) -> CreateInteractionResponseMessage {
    let language = &character.language;
    let agility = character.skilled_stats().agility;

    let embed = CreateEmbed::new()
        .title(translator.translate(language, "town.menu.travel"))
        .description(translator.translate(language, "town.menu.travel.description"))
        .color(MENU_COLOR);

    let options: Vec<CreateSelectMenuOption> = town
        .connections
        .iter()
        .take(MAX_DESTINATIONS)
        .map(|connection| {
            CreateSelectMenuOption::new(
                destination_label(connection, agility),
                component_slug(&connection.name),
            )
        })
        .collect();

    let mut components = Vec::new();
    if !options.is_empty() {
        components.push(CreateActionRow::SelectMenu(CreateSelectMenu::new(
            Component::TravelSelect.id(),
            CreateSelectMenuKind::String { options },
        )));
    }
    components.push(CreateActionRow::Buttons(vec![reply::button(
        Component::TownMenu,
        translator.translate(language, "town.menu.open"),
        "🏰",
    )]));

    CreateInteractionResponseMessage::new()
        .content("")
        .embed(embed)
        .components(components)
}
