//! `/setup` panels: server language, start panel and world statistics.

use serenity::all::{
    ButtonStyle, CommandInteraction, ComponentInteraction, Context, CreateActionRow, CreateButton,
    CreateEmbed, CreateInteractionResponse, CreateInteractionResponseFollowup,
    CreateInteractionResponseMessage, CreateMessage, CreateSelectMenu, CreateSelectMenuKind,
    CreateSelectMenuOption,
};

use crate::{
    bot::{
        component::Component,
        handler::server_language,
        reply::{self, MENU_COLOR, START_PANEL_COLOR},
    },
    cache::translation::TranslationCache,
    error::AppError,
    model::{town::CAPITAL, translation::Translator},
    state::AppState,
};

/// Discord shows at most 25 options in a select menu.
const MAX_SELECT_OPTIONS: usize = 25;

const WELCOME_DESCRIPTION: &str = "Please select your language below to start the setup process.\n\n\
If you want to change your language later,\n\
you can do so by using the `/setup panels` command again.";

/// Asks for the server language; choosing one posts the start panel.
pub async fn handle_setup_panels(
    state: &AppState,
    ctx: &Context,
    command: &CommandInteraction,
) -> Result<(), AppError> {
    let message = CreateInteractionResponseMessage::new()
        .embed(
            CreateEmbed::new()
                .title("Welcome to Fantasy Frontiers!")
                .description(WELCOME_DESCRIPTION)
                .color(MENU_COLOR),
        )
        .components(vec![language_select(
            &state.translations,
            Component::SetupLanguage,
            None,
        )])
        .ephemeral(true);

    command
        .create_response(&ctx.http, CreateInteractionResponse::Message(message))
        .await?;

    Ok(())
}

pub async fn handle_setup_advanced(
    state: &AppState,
    ctx: &Context,
    command: &CommandInteraction,
) -> Result<(), AppError> {
    let language = server_language(state, command.guild_id).await?;
    let (embed, components) = advanced_panel(state.translations.as_ref(), &language);

    command
        .create_response(
            &ctx.http,
            CreateInteractionResponse::Message(
                CreateInteractionResponseMessage::new()
                    .embed(embed)
                    .components(components)
                    .ephemeral(true),
            ),
        )
        .await?;

    Ok(())
}

/// Stores the server language and posts the start panel into the channel.
pub async fn handle_language(
    state: &AppState,
    ctx: &Context,
    interaction: &ComponentInteraction,
    language: Option<String>,
) -> Result<(), AppError> {
    let Some(guild_id) = interaction.guild_id else {
        return Ok(());
    };
    let language = language
        .filter(|language| state.translations.language(language).is_some())
        .ok_or_else(|| AppError::BadRequest("Unknown language".to_string()))?;

    let mut settings = state.settings.get(guild_id.get()).await?;
    settings.language = language.clone();
    state.settings.put(settings).await?;

    tracing::info!("Guild {} now plays in {}", guild_id, language);

    interaction
        .create_response(
            &ctx.http,
            CreateInteractionResponse::UpdateMessage(
                CreateInteractionResponseMessage::new()
                    .content("Setting up language...")
                    .embeds(Vec::new())
                    .components(Vec::new()),
            ),
        )
        .await?;

    let translations = state.translations.as_ref();
    let (embed, components) = start_panel(translations, &language);
    interaction
        .channel_id
        .send_message(&ctx.http, CreateMessage::new().embed(embed).components(components))
        .await?;

    let (embed, components) = advanced_panel(translations, &language);
    interaction
        .create_followup(
            &ctx.http,
            CreateInteractionResponseFollowup::new()
                .embed(embed)
                .components(components)
                .ephemeral(true),
        )
        .await?;

    Ok(())
}

pub async fn handle_world_statistics(
    state: &AppState,
    ctx: &Context,
    interaction: &ComponentInteraction,
) -> Result<(), AppError> {
    let language = server_language(state, interaction.guild_id).await?;
    let t = state.translations.as_ref();

    let field = |key: &str, value: String| (t.translate(&language, key), format!("```{}```", value), true);
    let embed = CreateEmbed::new()
        .title(format!("📜 {}", t.translate(&language, "modals.worldStats.title")))
        .fields(vec![
            field("modals.worldStats.fields.guilds", ctx.cache.guild_count().to_string()),
            field("modals.worldStats.fields.towns", state.towns.len().to_string()),
            field("modals.worldStats.fields.capital", CAPITAL.to_string()),
            field(
                "modals.worldStats.fields.characters.created",
                state.characters.total_created().to_string(),
            ),
        ]);

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

    Ok(())
}

/// Select menu listing every loaded language by its own name.
pub fn language_select(
    translations: &TranslationCache,
    component: Component,
    placeholder: Option<String>,
) -> CreateActionRow {
    let options = translations
        .languages()
        .into_iter()
        .take(MAX_SELECT_OPTIONS)
        .map(|language| {
            CreateSelectMenuOption::new(translations.translate(&language, "translation.name"), language)
        })
        .collect();

    let mut menu = CreateSelectMenu::new(component.id(), CreateSelectMenuKind::String { options });
    if let Some(placeholder) = placeholder {
        menu = menu.placeholder(placeholder);
    }

    CreateActionRow::SelectMenu(menu)
}

/// Public panel players start their journey from.
pub fn start_panel(translator: &impl Translator, language: &str) -> (CreateEmbed, Vec<CreateActionRow>) {
    let embed = CreateEmbed::new()
        .title(translator.translate(language, "modals.startPanel.title"))
        .description(translator.translate(language, "modals.startPanel.description"))
        .color(START_PANEL_COLOR);

    let buttons = vec![
        reply::button(
            Component::StartJourney,
            translator.translate(language, "modals.startPanel.start-button"),
            "🎯",
        )
        .style(ButtonStyle::Success),
        reply::button(
            Component::WorldStatistics,
            translator.translate(language, "modals.worldStats.title"),
            "📜",
        ),
    ];

    (embed, reply::button_rows(buttons))
}

/// Entry point to the announcement, role and chat room settings.
pub fn advanced_panel(translator: &impl Translator, language: &str) -> (CreateEmbed, Vec<CreateActionRow>) {
    let embed = CreateEmbed::new()
        .title(translator.translate(language, "modals.advancedSetup.title"))
        .description(translator.translate(language, "modals.advancedSetup.description"))
        .color(MENU_COLOR);

    let buttons: Vec<CreateButton> = vec![
        reply::button(
            Component::SystemAnnouncement,
            translator.translate(language, "modals.advancedSetup.buttons.system-announcement"),
            "📑",
        ),
        reply::button(
            Component::Roles,
            translator.translate(language, "modals.advancedSetup.roles.title"),
            "🫅",
        ),
        reply::button(
            Component::ChatRooms,
            translator.translate(language, "modals.advancedSetup.chatrooms.title"),
            "💬",
        ),
    ];

    (embed, reply::button_rows(buttons))
}
