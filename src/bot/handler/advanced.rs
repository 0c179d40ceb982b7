//! Advanced server settings: system announcements, guild roles and chat rooms.
//!
//! Each menu is an ephemeral embed. Changing a setting saves it and redraws
//! the menu in place.

use serenity::all::{
    ButtonStyle, Channel, ChannelId, ChannelType, ComponentInteraction, Context, CreateActionRow,
    CreateButton, CreateEmbed, CreateInteractionResponse, CreateInteractionResponseMessage,
    CreateSelectMenu, CreateSelectMenuKind, CreateSelectMenuOption, EditRole, GuildId, RoleId,
};

use crate::{
    bot::{
        component::Component,
        reply::{self, SETTINGS_COLOR},
    },
    error::AppError,
    model::{
        guild::Guild,
        settings::{ChannelKind, ChatRoom, ChatRoomType, ServerSettings},
        translation::Translator,
    },
    state::AppState,
    util::text::placeholders,
};

/// Wide blank used to line up the announcement table; Discord trims normal spaces.
const SPACER: &str = "\u{1CBC}\u{1CBC}";
const ENABLED: &str = "✅";
const DISABLED: &str = "⚫";

/// Channels announcements and chat rooms can be bound to.
const MESSAGE_CHANNEL_TYPES: [ChannelType; 3] = [
    ChannelType::Text,
    ChannelType::PublicThread,
    ChannelType::NewsThread,
];

pub async fn handle_system_announcement(
    state: &AppState,
    ctx: &Context,
    interaction: &ComponentInteraction,
) -> Result<(), AppError> {
    let Some(settings) = guild_settings(state, interaction).await? else {
        return Ok(());
    };

    respond(ctx, interaction, false, announcement_menu(state.translations.as_ref(), &settings)).await
}

pub async fn handle_deactivate_announcements(
    state: &AppState,
    ctx: &Context,
    interaction: &ComponentInteraction,
) -> Result<(), AppError> {
    let Some(mut settings) = guild_settings(state, interaction).await? else {
        return Ok(());
    };

    settings.system_announcement.kind = ChannelKind::None;
    settings.system_announcement.channel_id = None;
    state.settings.put(settings.clone()).await?;

    tracing::info!("Guild {} deactivated system announcements", settings.guild_id);

    respond(ctx, interaction, true, announcement_menu(state.translations.as_ref(), &settings)).await
}

/// Binds announcements to a channel after checking the bot can post there.
pub async fn handle_announcement_channel(
    state: &AppState,
    ctx: &Context,
    interaction: &ComponentInteraction,
    channel_id: Option<ChannelId>,
) -> Result<(), AppError> {
    let (Some(mut settings), Some(channel_id)) = (guild_settings(state, interaction).await?, channel_id)
    else {
        return Ok(());
    };

    let Some(kind) = channel_kind(ctx, channel_id).await? else {
        return Ok(());
    };
    send_test_message(ctx, channel_id).await?;

    settings.system_announcement.kind = kind;
    settings.system_announcement.channel_id = Some(channel_id.get());
    state.settings.put(settings.clone()).await?;

    tracing::info!(
        "Guild {} announces in {} {}",
        settings.guild_id,
        kind,
        channel_id
    );

    respond(ctx, interaction, true, announcement_menu(state.translations.as_ref(), &settings)).await
}

pub async fn handle_roles(
    state: &AppState,
    ctx: &Context,
    interaction: &ComponentInteraction,
) -> Result<(), AppError> {
    let Some(settings) = guild_settings(state, interaction).await? else {
        return Ok(());
    };

    let menu = roles_menu(state.translations.as_ref(), &settings, |role_id| {
        role_mention(ctx, settings.guild_id, role_id)
    });
    respond(ctx, interaction, false, menu).await
}

/// Shows the role of one in-game guild with options to create or pick another.
pub async fn handle_role_guild_select(
    state: &AppState,
    ctx: &Context,
    interaction: &ComponentInteraction,
    guild: Option<String>,
) -> Result<(), AppError> {
    let (Some(settings), Some(guild)) = (guild_settings(state, interaction).await?, guild) else {
        return Ok(());
    };
    let guild: Guild = guild.parse()?;

    let t = state.translations.as_ref();
    let language = &settings.language;
    let guild_name = t.translate(language, &guild.translation_key());
    let role = reply::mention_check(
        settings
            .guild_role(guild)
            .and_then(|role_id| role_mention(ctx, settings.guild_id, role_id)),
    );

    let embed = CreateEmbed::new()
        .title(t.translate_with(
            language,
            "modals.advancedSetup.roles.selected.title",
            &placeholders([("guild", guild_name.clone())]),
        ))
        .description(t.translate_with(
            language,
            "modals.advancedSetup.roles.selected.description",
            &placeholders([("guild", guild_name), ("role", role)]),
        ))
        .color(SETTINGS_COLOR);

    let components = vec![
        CreateActionRow::Buttons(vec![reply::button(
            Component::RolesCreate(guild),
            t.translate(language, "modals.advancedSetup.roles.selected.create"),
            "✅",
        )]),
        CreateActionRow::SelectMenu(
            CreateSelectMenu::new(
                Component::RolesRole(guild).id(),
                CreateSelectMenuKind::Role {
                    default_roles: None,
                },
            )
            .placeholder(t.translate(language, "modals.advancedSetup.roles.selected.role.placeholder")),
        ),
    ];

    respond(ctx, interaction, true, (embed, components)).await
}

/// Creates a new Discord role in the guild's colour and assigns it.
pub async fn handle_role_create(
    state: &AppState,
    ctx: &Context,
    interaction: &ComponentInteraction,
    guild: Guild,
) -> Result<(), AppError> {
    let (Some(mut settings), Some(guild_id)) =
        (guild_settings(state, interaction).await?, interaction.guild_id)
    else {
        return Ok(());
    };
    let t = state.translations.as_ref();
    let language = settings.language.clone();

    let created = guild_id
        .create_role(
            &ctx.http,
            EditRole::new()
                .name(t.translate(&language, &guild.translation_key()))
                .colour(guild.color()),
        )
        .await;

    let role = match created {
        Ok(role) => role,
        Err(e) => {
            let err = AppError::from(e);
            if err.missing_permission().is_some() {
                return Err(err);
            }
            tracing::error!("Failed to create role for {} in guild {}: {:?}", guild, guild_id, err);

            let embed = CreateEmbed::new()
                .title(t.translate(&language, "modals.errors.advancedSetup.roles.selected.create.title"))
                .description(t.translate(
                    &language,
                    "modals.errors.advancedSetup.roles.selected.create.description",
                ))
                .color(reply::ERROR_COLOR);
            interaction
                .create_response(
                    &ctx.http,
                    CreateInteractionResponse::Message(
                        CreateInteractionResponseMessage::new()
                            .embed(embed)
                            .ephemeral(true),
                    ),
                )
                .await?;
            return Ok(());
        }
    };

    settings.set_guild_role(guild, role.id.get());
    state.settings.put(settings.clone()).await?;

    tracing::info!("Created role {} for {} in guild {}", role.id, guild, guild_id);

    let menu = roles_menu(t, &settings, |role_id| {
        (role_id == role.id.get())
            .then(|| format!("<@&{}>", role_id))
            .or_else(|| role_mention(ctx, settings.guild_id, role_id))
    });
    respond(ctx, interaction, true, menu).await
}

pub async fn handle_role_select(
    state: &AppState,
    ctx: &Context,
    interaction: &ComponentInteraction,
    guild: Guild,
    role_id: Option<RoleId>,
) -> Result<(), AppError> {
    let (Some(mut settings), Some(role_id)) = (guild_settings(state, interaction).await?, role_id)
    else {
        return Ok(());
    };

    settings.set_guild_role(guild, role_id.get());
    state.settings.put(settings.clone()).await?;

    tracing::info!("Guild {} hands out role {} for {}", settings.guild_id, role_id, guild);

    let menu = roles_menu(state.translations.as_ref(), &settings, |role_id| {
        role_mention(ctx, settings.guild_id, role_id)
    });
    respond(ctx, interaction, true, menu).await
}

pub async fn handle_chat_rooms(
    state: &AppState,
    ctx: &Context,
    interaction: &ComponentInteraction,
) -> Result<(), AppError> {
    let Some(settings) = guild_settings(state, interaction).await? else {
        return Ok(());
    };

    respond(ctx, interaction, false, chat_rooms_menu(state.translations.as_ref(), &settings)).await
}

/// Asks for the channel a chat room should use.
pub async fn handle_chat_room_select(
    state: &AppState,
    ctx: &Context,
    interaction: &ComponentInteraction,
    room_type: Option<String>,
) -> Result<(), AppError> {
    let (Some(settings), Some(room_type)) = (guild_settings(state, interaction).await?, room_type)
    else {
        return Ok(());
    };
    let room_type: ChatRoomType = room_type.parse()?;

    let t = state.translations.as_ref();
    let (embed, mut components) = chat_rooms_menu(t, &settings);
    components.push(CreateActionRow::SelectMenu(
        CreateSelectMenu::new(
            Component::ChatRoomChannel(room_type).id(),
            CreateSelectMenuKind::Channel {
                channel_types: Some(MESSAGE_CHANNEL_TYPES.to_vec()),
                default_channels: None,
            },
        )
        .placeholder(t.translate_with(
            &settings.language,
            "modals.advancedSetup.chatrooms.selected.placeholder",
            &placeholders([(
                "chatroom",
                t.translate(&settings.language, &room_type.translation_key()),
            )]),
        )),
    ));

    respond(ctx, interaction, true, (embed, components)).await
}

pub async fn handle_chat_room_channel(
    state: &AppState,
    ctx: &Context,
    interaction: &ComponentInteraction,
    room_type: ChatRoomType,
    channel_id: Option<ChannelId>,
) -> Result<(), AppError> {
    let (Some(mut settings), Some(channel_id)) = (guild_settings(state, interaction).await?, channel_id)
    else {
        return Ok(());
    };

    let Some(location) = channel_kind(ctx, channel_id).await? else {
        return Ok(());
    };
    send_test_message(ctx, channel_id).await?;

    settings.set_chat_room(ChatRoom {
        room_type,
        location,
        channel_id: Some(channel_id.get()),
    });
    state.settings.put(settings.clone()).await?;

    tracing::info!(
        "Guild {} bound chat room {} to {}",
        settings.guild_id,
        room_type,
        channel_id
    );

    respond(ctx, interaction, true, chat_rooms_menu(state.translations.as_ref(), &settings)).await
}

/// Emoji row marking which of deactivated, thread and channel is active.
pub fn announcement_marks(kind: ChannelKind) -> String {
    let marks = [ChannelKind::None, ChannelKind::Thread, ChannelKind::Channel]
        .map(|column| if column == kind { ENABLED } else { DISABLED });

    format!("{0}{1}{0}|{0}{2}{0}|{0}{3}{0}", SPACER, marks[0], marks[1], marks[2])
}

pub fn announcement_menu(
    translator: &impl Translator,
    settings: &ServerSettings,
) -> (CreateEmbed, Vec<CreateActionRow>) {
    let language = &settings.language;
    let announcement = settings.system_announcement;
    let channel = announcement
        .target()
        .map(|channel_id| format!("{}<#{}>", SPACER, channel_id))
        .unwrap_or_default();

    let description = format!(
        "*{}*\n\n{}{}{}|{}{}{}|{}{}\n**{}**: [{}]{}\n\n*{}*",
        translator.translate(language, "modals.advancedSetup.system-announcement.description.before"),
        SPACER.repeat(4),
        translator.translate(language, "keywords.deactivated"),
        SPACER,
        SPACER,
        translator.translate(language, "keywords.thread"),
        SPACER,
        SPACER,
        translator.translate(language, "keywords.channel"),
        translator.translate(language, "modals.advancedSetup.system-announcement.channel"),
        announcement_marks(announcement.kind),
        channel,
        translator.translate(language, "modals.advancedSetup.system-announcement.description.after"),
    );

    let embed = CreateEmbed::new()
        .title(translator.translate(language, "modals.advancedSetup.system-announcement.title"))
        .description(description)
        .color(SETTINGS_COLOR);

    let components = vec![
        CreateActionRow::Buttons(vec![CreateButton::new(
            Component::SystemAnnouncementDeactivate.id(),
        )
        .label(translator.translate(language, "keywords.deactivate"))
        .style(ButtonStyle::Danger)
        .disabled(announcement.kind == ChannelKind::None)]),
        CreateActionRow::SelectMenu(CreateSelectMenu::new(
            Component::SystemAnnouncementChannel.id(),
            CreateSelectMenuKind::Channel {
                channel_types: Some(MESSAGE_CHANNEL_TYPES.to_vec()),
                default_channels: None,
            },
        )),
    ];

    (embed, components)
}

/// Lists every in-game guild with its configured role.
///
/// `mention` renders a stored role ID, `None` when the role no longer exists.
pub fn roles_menu(
    translator: &impl Translator,
    settings: &ServerSettings,
    mention: impl Fn(u64) -> Option<String>,
) -> (CreateEmbed, Vec<CreateActionRow>) {
    let language = &settings.language;

    let lines: Vec<String> = Guild::ALL
        .iter()
        .map(|guild| {
            format!(
                "**{}**: {}",
                translator.translate(language, &guild.translation_key()),
                reply::mention_check(settings.guild_role(*guild).and_then(&mention))
            )
        })
        .collect();

    let embed = CreateEmbed::new()
        .title(translator.translate(language, "modals.advancedSetup.roles.title"))
        .description(format!(
            "*{}*\n\n{}\n\n*{}*",
            translator.translate(language, "modals.advancedSetup.roles.description.before"),
            lines.join("\n"),
            translator.translate(language, "modals.advancedSetup.roles.description.after"),
        ))
        .color(SETTINGS_COLOR);

    let options = Guild::ALL
        .iter()
        .map(|guild| {
            CreateSelectMenuOption::new(
                translator.translate(language, &guild.translation_key()),
                guild.name().to_lowercase(),
            )
        })
        .collect();

    let components = vec![CreateActionRow::SelectMenu(CreateSelectMenu::new(
        Component::RolesSelect.id(),
        CreateSelectMenuKind::String { options },
    ))];

    (embed, components)
}

/// Lists every chat room with the channel it is bound to.
pub fn chat_rooms_menu(
    translator: &impl Translator,
    settings: &ServerSettings,
) -> (CreateEmbed, Vec<CreateActionRow>) {
    let language = &settings.language;

    let lines: Vec<String> = ChatRoomType::ALL
        .iter()
        .map(|room_type| {
            let channel = settings
                .chat_room(*room_type)
                .filter(|room| room.is_configured())
                .and_then(|room| room.channel_id)
                .map(|channel_id| format!("<#{}>", channel_id));

            format!(
                "**{}**: {}",
                translator.translate(language, &room_type.translation_key()),
                reply::mention_check(channel)
            )
        })
        .collect();

    let embed = CreateEmbed::new()
        .title(translator.translate(language, "modals.advancedSetup.chatrooms.title"))
        .description(format!(
            "*{}*\n\n{}\n\n*{}*",
            translator.translate(language, "modals.advancedSetup.chatrooms.description.before"),
            lines.join("\n"),
            translator.translate(language, "modals.advancedSetup.chatrooms.description.after"),
        ))
        .color(SETTINGS_COLOR);

    let options = ChatRoomType::ALL
        .iter()
        .map(|room_type| {
            CreateSelectMenuOption::new(
                translator.translate(language, &room_type.translation_key()),
                room_type.name().to_lowercase(),
            )
        })
        .collect();

    let components = vec![CreateActionRow::SelectMenu(CreateSelectMenu::new(
        Component::ChatRoomsSelect.id(),
        CreateSelectMenuKind::String { options },
    ))];

    (embed, components)
}

async fn guild_settings(
    state: &AppState,
    interaction: &ComponentInteraction,
) -> Result<Option<ServerSettings>, AppError> {
    match interaction.guild_id {
        Some(guild_id) => Ok(Some(state.settings.get(guild_id.get()).await?)),
        None => Ok(None),
    }
}

/// Opens a menu as a new ephemeral message or redraws the one clicked in.
async fn respond(
    ctx: &Context,
    interaction: &ComponentInteraction,
    update: bool,
    (embed, components): (CreateEmbed, Vec<CreateActionRow>),
) -> Result<(), AppError> {
    let message = CreateInteractionResponseMessage::new()
        .embed(embed)
        .components(components);

    interaction
        .create_response(&ctx.http, reply::menu(update, message))
        .await?;

    Ok(())
}

/// Whether a selected channel is a plain channel or a thread, `None` for other kinds.
async fn channel_kind(ctx: &Context, channel_id: ChannelId) -> Result<Option<ChannelKind>, AppError> {
    let Channel::Guild(channel) = channel_id.to_channel(&ctx.http).await? else {
        return Ok(None);
    };

    Ok(match channel.kind {
        ChannelType::Text => Some(ChannelKind::Channel),
        ChannelType::PublicThread | ChannelType::NewsThread => Some(ChannelKind::Thread),
        _ => None,
    })
}

/// Posts and removes a message so missing permissions surface during setup.
async fn send_test_message(ctx: &Context, channel_id: ChannelId) -> Result<(), AppError> {
    let message = channel_id.say(&ctx.http, "Test message").await?;
    message.delete(&ctx.http).await?;

    Ok(())
}

/// Mention of a stored role, `None` once the role was deleted from the server.
fn role_mention(ctx: &Context, guild_id: u64, role_id: u64) -> Option<String> {
    if guild_id == 0 || role_id == 0 {
        return None;
    }

    let exists = ctx
        .cache
        .guild(GuildId::new(guild_id))
        .map(|guild| guild.roles.contains_key(&RoleId::new(role_id)));

    match exists {
        Some(false) => None,
        _ => Some(format!("<@&{}>", role_id)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{settings::SystemAnnouncement, translation::KeyTranslator};

    #[test]
    fn marks_active_announcement_column() {
        let marks = announcement_marks(ChannelKind::Thread);
        let columns: Vec<&str> = marks.split('|').map(|column| column.trim_matches('\u{1CBC}')).collect();

        assert_eq!(columns, [DISABLED, ENABLED, DISABLED]);
        assert!(announcement_marks(ChannelKind::None).starts_with(&format!("{}{}", SPACER, ENABLED)));
    }

    #[test]
    fn disables_deactivate_without_channel() {
        let mut settings = ServerSettings::new(10);
        let (embed, rows) = announcement_menu(&KeyTranslator, &settings);
        let rows = serde_json::to_value(&rows).unwrap();
        let embed = serde_json::to_value(&embed).unwrap();

        assert_eq!(rows[0]["components"][0]["disabled"], true);
        assert!(!embed["description"].as_str().unwrap().contains("<#"));

        settings.system_announcement = SystemAnnouncement {
            kind: ChannelKind::Channel,
            channel_id: Some(42),
        };
        let (embed, rows) = announcement_menu(&KeyTranslator, &settings);
        let rows = serde_json::to_value(&rows).unwrap();
        let embed = serde_json::to_value(&embed).unwrap();

        assert_eq!(rows[0]["components"][0]["disabled"], false);
        assert!(embed["description"].as_str().unwrap().contains("<#42>"));
    }

    #[test]
    fn lists_configured_roles() {
        let mut settings = ServerSettings::new(10);
        settings.set_guild_role(Guild::MerchantsGuild, 77);
        settings.set_guild_role(Guild::HerbologiesGuild, 88);

        let (embed, rows) = roles_menu(&KeyTranslator, &settings, |role_id| {
            (role_id == 77).then(|| format!("<@&{}>", role_id))
        });
        let embed = serde_json::to_value(&embed).unwrap();
        let description = embed["description"].as_str().unwrap();

        assert!(description.contains("**guilds.merchants_guild**: ✅ [ <@&77> ]"));
        assert!(description.contains("**guilds.herbologies_guild**: ❌"));
        assert!(description.contains("**guilds.adventurers_guild**: ❌"));

        let rows = serde_json::to_value(&rows).unwrap();
        assert_eq!(rows[0]["components"][0]["custom_id"], "ff-setup-advanced-roles-select");
        assert_eq!(
            rows[0]["components"][0]["options"].as_array().unwrap().len(),
            Guild::ALL.len()
        );
    }

    #[test]
    fn lists_bound_chat_rooms() {
        let mut settings = ServerSettings::new(10);
        settings.set_chat_room(ChatRoom {
            room_type: ChatRoomType::Global,
            location: ChannelKind::Channel,
            channel_id: Some(5),
        });
        settings.set_chat_room(ChatRoom {
            room_type: ChatRoomType::Town,
            location: ChannelKind::None,
            channel_id: Some(6),
        });

        let (embed, _) = chat_rooms_menu(&KeyTranslator, &settings);
        let embed = serde_json::to_value(&embed).unwrap();
        let description = embed["description"].as_str().unwrap();

        assert!(description.contains("**chatroom.global**: ✅ [ <#5> ]"));
        assert!(description.contains("**chatroom.town**: ❌"));
    }
}
