//! Shared building blocks for interaction responses.

use serenity::all::{
    ButtonStyle, Context, CreateActionRow, CreateButton, CreateEmbed,
    CreateInteractionResponse, CreateInteractionResponseMessage, EditInteractionResponse,
    Interaction, ReactionType,
};

use crate::{
    bot::component::Component,
    error::{domain::DomainError, AppError},
    model::{character::DEFAULT_LANGUAGE, translation::Translator},
    state::AppState,
};

pub const MENU_COLOR: u32 = 0x57F287;
pub const START_PANEL_COLOR: u32 = 0x00AA00;
pub const SETTINGS_COLOR: u32 = 0x2b2d31;
pub const BACKPACK_COLOR: u32 = 0xccae62;
pub const ERROR_COLOR: u32 = 0xFF3333;

/// Discord allows five buttons per row and five rows per message.
const BUTTONS_PER_ROW: usize = 5;
const MAX_ROWS: usize = 5;

/// Rendered as a check with the mention, or a cross when nothing is configured.
pub fn mention_check(mention: Option<String>) -> String {
    match mention {
        Some(mention) => format!("✅ [ {} ]", mention),
        None => "❌".to_string(),
    }
}

pub fn emoji(emoji: &str) -> ReactionType {
    ReactionType::Unicode(emoji.to_string())
}

pub fn button(component: Component, label: impl Into<String>, icon: &str) -> CreateButton {
    CreateButton::new(component.id())
        .label(label)
        .style(ButtonStyle::Secondary)
        .emoji(emoji(icon))
}

/// Splits buttons into action rows, dropping whatever does not fit into a message.
pub fn button_rows(buttons: Vec<CreateButton>) -> Vec<CreateActionRow> {
    buttons
        .chunks(BUTTONS_PER_ROW)
        .take(MAX_ROWS)
        .map(|row| CreateActionRow::Buttons(row.to_vec()))
        .collect()
}

/// Either a new ephemeral message or an update of the message the component is on.
pub fn menu(update: bool, message: CreateInteractionResponseMessage) -> CreateInteractionResponse {
    if update {
        CreateInteractionResponse::UpdateMessage(message)
    } else {
        CreateInteractionResponse::Message(message.ephemeral(true))
    }
}

pub fn ephemeral_text(content: impl Into<String>) -> CreateInteractionResponse {
    CreateInteractionResponse::Message(
        CreateInteractionResponseMessage::new()
            .content(content)
            .ephemeral(true),
    )
}

pub fn error_embed(description: impl Into<String>) -> CreateEmbed {
    CreateEmbed::new()
        .description(description)
        .color(ERROR_COLOR)
}

/// Embed shown when the bot lacks a Discord permission for what was requested.
pub fn permission_embed(translator: &impl Translator, language: &str, permission: &str) -> CreateEmbed {
    CreateEmbed::new()
        .title(format!(
            "{} :x:",
            translator.translate(language, "modals.errors.permissionCheck.title")
        ))
        .description(format!(
            "{}\n```{}```",
            translator.translate(language, "modals.errors.permissionCheck.description"),
            permission
        ))
        .color(ERROR_COLOR)
}

/// Message key explaining a rejected request to the user.
///
/// `None` for failures the user cannot act on; those get a generic message.
pub fn error_message_key(err: &AppError) -> Option<&'static str> {
    match err {
        AppError::DomainErr(DomainError::NoCharacter) => Some("modals.errors.charSetup.noCharacter"),
        AppError::DomainErr(DomainError::AlreadyChoseSkill) => {
            Some("modals.errors.charSetup.alreadyChoseSkill")
        }
        AppError::DomainErr(DomainError::CharacterExists) => {
            Some("modals.errors.charSetup.characterExists")
        }
        AppError::DomainErr(DomainError::InvalidName(_)) => {
            Some("modals.charSetup.character.error.noFirstOrLastName")
        }
        AppError::DomainErr(_) | AppError::BadRequest(_) => {
            Some("modals.errors.unavailable")
        }
        _ => None,
    }
}

/// Tells the user why an interaction failed.
///
/// Answers with a new message when the interaction is still open and
/// edits the original response otherwise.
pub async fn report_error(ctx: &Context, state: &AppState, interaction: &Interaction, err: AppError) {
    let language = match interaction_guild(interaction) {
        Some(guild_id) => match state.settings.get(guild_id).await {
            Ok(settings) => settings.language,
            Err(e) => {
                tracing::error!("Failed to load settings of guild {}: {:?}", guild_id, e);
                DEFAULT_LANGUAGE.to_string()
            }
        },
        None => DEFAULT_LANGUAGE.to_string(),
    };

    let embed = error_report_embed(state.translations.as_ref(), &language, &err);

    if let Err(e) = respond_with_embed(ctx, interaction, embed).await {
        tracing::error!("Failed to report interaction error: {:?}", e);
    }
}

/// Embed explaining a failed interaction; logs the error at a matching level.
///
/// Missing permissions get the permission embed, rejected requests a translated
/// reason and everything else a generic message.
pub fn error_report_embed(translator: &impl Translator, language: &str, err: &AppError) -> CreateEmbed {
    if let Some(permission) = err.missing_permission() {
        tracing::warn!("Missing permission {}: {}", permission, err);
        return permission_embed(translator, language, &permission);
    }

    match error_message_key(err) {
        Some(key) => {
            tracing::debug!("Rejected interaction: {}", err);
            error_embed(translator.translate(language, key))
        }
        None => {
            tracing::error!("Failed to handle interaction: {:?}", err);
            error_embed(translator.translate(language, "modals.errors.unexpected"))
        }
    }
}

fn interaction_guild(interaction: &Interaction) -> Option<u64> {
    let guild_id = match interaction {
        Interaction::Command(command) => command.guild_id,
        Interaction::Component(component) => component.guild_id,
        Interaction::Modal(modal) => modal.guild_id,
        _ => None,
    };
    guild_id.map(|id| id.get())
}

async fn respond_with_embed(
    ctx: &Context,
    interaction: &Interaction,
    embed: CreateEmbed,
) -> Result<(), serenity::Error> {
    let response = CreateInteractionResponse::Message(
        CreateInteractionResponseMessage::new()
            .embed(embed.clone())
            .ephemeral(true),
    );
    let edit = EditInteractionResponse::new()
        .content("")
        .embed(embed)
        .components(Vec::new());

    match interaction {
        Interaction::Command(command) => {
            if command.create_response(&ctx.http, response).await.is_err() {
                command.edit_response(&ctx.http, edit).await?;
            }
        }
        Interaction::Component(component) => {
            if component.create_response(&ctx.http, response).await.is_err() {
                component.edit_response(&ctx.http, edit).await?;
            }
        }
        Interaction::Modal(modal) => {
            if modal.create_response(&ctx.http, response).await.is_err() {
                modal.edit_response(&ctx.http, edit).await?;
            }
        }
        _ => {}
    }

    Ok(())
}
