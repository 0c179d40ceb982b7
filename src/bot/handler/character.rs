//! Character creation: language, name modal and starter skill.
//!
//! A player without a character picks a language first, then names the
//! character in a modal. The first skill is chosen right after creation;
//! players who leave before choosing are asked again on their next start.

use serenity::all::{
    ChannelId, ComponentInteraction, Context, CreateActionRow, CreateEmbed, CreateInputText,
    CreateInteractionResponse, CreateInteractionResponseMessage, CreateModal, CreateSelectMenu,
    CreateSelectMenuKind, CreateSelectMenuOption, GuildId, InputTextStyle, ModalInteraction,
    User,
};

use crate::{
    bot::{
        component::{Component, FIRST_NAME_INPUT, LAST_NAME_INPUT},
        handler::{interaction::input_value, server_language},
        reply::{self, MENU_COLOR},
    },
    error::{domain::DomainError, AppError},
    model::{
        character::{Character, DEFAULT_LANGUAGE, MAX_NAME_LENGTH},
        skill::{Skill, STARTER_SKILL_SET},
        translation::Translator,
    },
    service::character::CharacterService,
    state::AppState,
    util::text::placeholders,
};

/// Discord limits select option descriptions to 100 characters.
const MAX_OPTION_DESCRIPTION: usize = 100;

/// Continues an existing character's journey or starts the creator.
pub async fn handle_start_journey(
    state: &AppState,
    ctx: &Context,
    interaction: &ComponentInteraction,
) -> Result<(), AppError> {
    if let Some(character) = state.characters.get(interaction.user.id.get()).await? {
        let message = journey(state.translations.as_ref(), &character, None);
        interaction
            .create_response(&ctx.http, reply::menu(false, message))
            .await?;
        return Ok(());
    }

    let language = server_language(state, interaction.guild_id).await?;
    let t = state.translations.as_ref();

    let embed = CreateEmbed::new()
        .title(t.translate(&language, "modals.charSetup.language.title"))
        .description(t.translate(&language, "modals.charSetup.language.description"))
        .color(MENU_COLOR);

    let mut components = vec![CreateActionRow::Buttons(vec![reply::button(
        Component::KeepLanguage,
        t.translate_with(
            &language,
            "modals.charSetup.language.buttons.keep",
            &placeholders([("languageName", t.translate(&language, "translation.name"))]),
        ),
        "👌",
    )])];

    let options: Vec<CreateSelectMenuOption> = state
        .translations
        .languages()
        .into_iter()
        .filter(|other| *other != language)
        .take(25)
        .map(|other| CreateSelectMenuOption::new(t.translate(&other, "translation.name"), other))
        .collect();
    if !options.is_empty() {
        components.push(CreateActionRow::SelectMenu(
            CreateSelectMenu::new(
                Component::CharacterLanguage.id(),
                CreateSelectMenuKind::String { options },
            )
            .placeholder(t.translate(&language, "modals.charSetup.language.selectLanguage")),
        ));
    }

    interaction
        .create_response(
            &ctx.http,
            reply::menu(
                false,
                CreateInteractionResponseMessage::new()
                    .embed(embed)
                    .components(components),
            ),
        )
        .await?;

    Ok(())
}

/// Opens the creator in the server's language.
pub async fn handle_keep_language(
    state: &AppState,
    ctx: &Context,
    interaction: &ComponentInteraction,
) -> Result<(), AppError> {
    let language = server_language(state, interaction.guild_id).await?;
    open_creator(state, ctx, interaction, language).await
}

pub async fn handle_language_select(
    state: &AppState,
    ctx: &Context,
    interaction: &ComponentInteraction,
    language: Option<String>,
) -> Result<(), AppError> {
    let language = language
        .filter(|language| state.translations.language(language).is_some())
        .ok_or_else(|| AppError::BadRequest("Unknown language".to_string()))?;

    open_creator(state, ctx, interaction, language).await
}

/// Creates the character from the submitted names and announces it.
pub async fn handle_creator_submit(
    state: &AppState,
    ctx: &Context,
    interaction: &ModalInteraction,
    language: &str,
) -> Result<(), AppError> {
    let language = if state.translations.language(language).is_some() {
        language
    } else {
        DEFAULT_LANGUAGE
    };

    let character = CharacterService::new(&state.characters)
        .create_new_character(
            interaction.user.id.get(),
            language,
            &input_value(interaction, FIRST_NAME_INPUT),
            &input_value(interaction, LAST_NAME_INPUT),
        )
        .await?;

    announce_character(state, ctx, interaction.guild_id, &interaction.user, &character).await;

    let message = journey(state.translations.as_ref(), &character, None);
    interaction
        .create_response(&ctx.http, reply::menu(false, message))
        .await?;

    Ok(())
}

pub async fn handle_starter_skill(
    state: &AppState,
    ctx: &Context,
    interaction: &ComponentInteraction,
    skill: Option<String>,
) -> Result<(), AppError> {
    let Some(skill) = skill else {
        return Ok(());
    };

    let (character, skill) = CharacterService::new(&state.characters)
        .choose_starter_skill(interaction.user.id.get(), &skill)
        .await?;

    tracing::info!(
        "User {} chose starter skill {}",
        interaction.user.id,
        skill.name
    );

    let message = journey(state.translations.as_ref(), &character, Some(skill));
    interaction
        .create_response(&ctx.http, reply::menu(true, message))
        .await?;

    Ok(())
}

/// Where a character stands in the setup: choosing a skill, or ready to explore.
///
/// `chosen` adds the confirmation for a skill picked with this interaction.
pub fn journey(
    translator: &impl Translator,
    character: &Character,
    chosen: Option<&Skill>,
) -> CreateInteractionResponseMessage {
    let language = &character.language;

    if character.skills.is_empty() {
        let options = STARTER_SKILL_SET
            .iter()
            .map(|(skill, level)| {
                let description: String = skill
                    .formatted_description(translator, language)
                    .chars()
                    .take(MAX_OPTION_DESCRIPTION)
                    .collect();
                CreateSelectMenuOption::new(
                    skill.formatted_name(translator, language, skill.level_to_experience(*level)),
                    skill.name,
                )
                .description(description)
            })
            .collect();

        let embed = CreateEmbed::new()
            .title(translator.translate(language, "modals.charSetup.starterSkill.title"))
            .description(translator.translate(language, "modals.charSetup.starterSkill.description"))
            .color(MENU_COLOR);

        return CreateInteractionResponseMessage::new()
            .embed(embed)
            .components(vec![CreateActionRow::SelectMenu(
                CreateSelectMenu::new(
                    Component::StarterSkill.id(),
                    CreateSelectMenuKind::String { options },
                )
                .placeholder(translator.translate(language, "modals.charSetup.starterSkill.selectSkill")),
            )]);
    }

    let mut description = translator.translate_with(
        language,
        "modals.charSetup.character.welcome",
        &placeholders([
            ("firstName", character.first_name.clone()),
            ("lastName", character.last_name.clone()),
        ]),
    );
    if let Some(skill) = chosen {
        let experience = character.skill_experience(skill).unwrap_or_default();
        description.push_str("\n\n");
        description.push_str(&translator.translate_with(
            language,
            "modals.charSetup.character.skillChosen",
            &placeholders([("skill", skill.formatted_name(translator, language, experience))]),
        ));
    }

    CreateInteractionResponseMessage::new()
        .embed(CreateEmbed::new().description(description).color(MENU_COLOR))
        .components(reply::button_rows(vec![reply::button(
            Component::TownMenu,
            translator.translate(language, "town.menu.open"),
            "🏰",
        )]))
}

pub fn creator_modal(translator: &impl Translator, language: &str) -> CreateModal {
    let input = |id: &str, key: &str| {
        CreateActionRow::InputText(
            CreateInputText::new(InputTextStyle::Short, translator.translate(language, key), id)
                .placeholder(translator.translate(language, &format!("{}.placeholder", key)))
                .min_length(1)
                .max_length(MAX_NAME_LENGTH as u16)
                .required(true),
        )
    };

    CreateModal::new(
        Component::CharacterCreator(language.to_string()).id(),
        translator.translate(language, "modals.charSetup.character.title"),
    )
    .components(vec![
        input(FIRST_NAME_INPUT, "modals.charSetup.character.firstName"),
        input(LAST_NAME_INPUT, "modals.charSetup.character.lastName"),
    ])
}

async fn open_creator(
    state: &AppState,
    ctx: &Context,
    interaction: &ComponentInteraction,
    language: String,
) -> Result<(), AppError> {
    if state.characters.get(interaction.user.id.get()).await?.is_some() {
        return Err(DomainError::CharacterExists.into());
    }

    interaction
        .create_response(
            &ctx.http,
            CreateInteractionResponse::Modal(creator_modal(state.translations.as_ref(), &language)),
        )
        .await?;

    Ok(())
}

/// Posts the new character into the server's announcement channel, if one is set.
///
/// Failures only get logged; the character exists either way.
async fn announce_character(
    state: &AppState,
    ctx: &Context,
    guild_id: Option<GuildId>,
    user: &User,
    character: &Character,
) {
    let Some(guild_id) = guild_id else {
        return;
    };

    let settings = match state.settings.get(guild_id.get()).await {
        Ok(settings) => settings,
        Err(e) => {
            tracing::error!("Failed to load settings of guild {}: {:?}", guild_id, e);
            return;
        }
    };
    let Some(channel_id) = settings.system_announcement.target().filter(|id| *id != 0) else {
        return;
    };

    let message = state.translations.translate_with(
        &settings.language,
        "system.announcement.character.created",
        &placeholders([
            ("user", format!("<@{}>", user.id)),
            ("firstName", character.first_name.clone()),
            ("lastName", character.last_name.clone()),
        ]),
    );

    if let Err(e) = ChannelId::new(channel_id).say(&ctx.http, message).await {
        tracing::warn!(
            "Failed to announce character in guild {} channel {}: {:?}",
            guild_id,
            channel_id,
            e
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{skill::SWIFT_FEET, translation::KeyTranslator};

    #[test]
    fn asks_for_starter_skill_first() {
        let character = Character::new(1, DEFAULT_LANGUAGE, "Ada", "Stone");
        let message = serde_json::to_value(journey(&KeyTranslator, &character, None)).unwrap();
        let menu = &message["components"][0]["components"][0];

        assert_eq!(menu["custom_id"], "ff-char-starter-skill-select");
        let values: Vec<&str> = menu["options"]
            .as_array()
            .unwrap()
            .iter()
            .filter_map(|option| option["value"].as_str())
            .collect();
        assert_eq!(values, ["MANA_CONTROL", "SWIFT_FEET", "IRON_SKIN", "MEGALUCK"]);
    }

    #[test]
    fn offers_town_once_skill_is_chosen() {
        let mut character = Character::new(1, DEFAULT_LANGUAGE, "Ada", "Stone");
        character.set_skill(&SWIFT_FEET, SWIFT_FEET.level_to_experience(1));

        let message =
            serde_json::to_value(journey(&KeyTranslator, &character, Some(&SWIFT_FEET))).unwrap();
        let description = message["embeds"][0]["description"].as_str().unwrap();

        assert!(description.starts_with("modals.charSetup.character.welcome"));
        assert!(description.ends_with("modals.charSetup.character.skillChosen"));
        assert_eq!(
            message["components"][0]["components"][0]["custom_id"],
            "ff-town-menu"
        );
    }

    #[test]
    fn modal_carries_language_and_name_limits() {
        let modal = serde_json::to_value(creator_modal(&KeyTranslator, "de-DE")).unwrap();

        assert_eq!(modal["custom_id"], "ff-character-creator-de-DE");
        let first = &modal["components"][0]["components"][0];
        assert_eq!(first["custom_id"], FIRST_NAME_INPUT);
        assert_eq!(first["min_length"], 1);
        assert_eq!(first["max_length"], MAX_NAME_LENGTH);
        assert_eq!(
            modal["components"][1]["components"][0]["custom_id"],
            LAST_NAME_INPUT
        );
    }
}
