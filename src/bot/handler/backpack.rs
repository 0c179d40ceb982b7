//! `/backpack`: paged inventory listing.

use serenity::all::{
    CommandInteraction, ComponentInteraction, Context, CreateActionRow, CreateEmbed,
    CreateInteractionResponseMessage,
};

use crate::{
    bot::{
        component::Component,
        handler::server_language,
        reply::{self, BACKPACK_COLOR},
    },
    error::{domain::DomainError, AppError},
    model::{character::Character, translation::Translator},
    state::AppState,
    util::text::placeholders,
};

pub const ITEMS_PER_PAGE: usize = 15;

pub async fn handle_command(
    state: &AppState,
    ctx: &Context,
    command: &CommandInteraction,
) -> Result<(), AppError> {
    let Some(character) = state.characters.get(command.user.id.get()).await? else {
        let language = server_language(state, command.guild_id).await?;
        let message = state
            .translations
            .translate(&language, "modals.errors.charSetup.noCharacter");
        command
            .create_response(&ctx.http, reply::ephemeral_text(message))
            .await?;
        return Ok(());
    };

    let response = match backpack_page(state.translations.as_ref(), &character, 1) {
        Some(message) => reply::menu(false, message),
        None => invalid_page(state, &character),
    };
    command.create_response(&ctx.http, response).await?;

    Ok(())
}

pub async fn handle_page(
    state: &AppState,
    ctx: &Context,
    interaction: &ComponentInteraction,
    page: usize,
) -> Result<(), AppError> {
    let character = state
        .characters
        .get(interaction.user.id.get())
        .await?
        .ok_or(DomainError::NoCharacter)?;

    let response = match backpack_page(state.translations.as_ref(), &character, page) {
        Some(message) => reply::menu(true, message),
        None => invalid_page(state, &character),
    };
    interaction.create_response(&ctx.http, response).await?;

    Ok(())
}

fn invalid_page(state: &AppState, character: &Character) -> serenity::all::CreateInteractionResponse {
    reply::ephemeral_text(
        state
            .translations
            .translate(&character.language, "modals.errors.backpack.invalidPage"),
    )
}

/// Number of pages the backpack spans; an empty backpack still has one.
pub fn page_count(items: usize) -> usize {
    items.div_ceil(ITEMS_PER_PAGE).max(1)
}

/// One page of the backpack, `None` when `page` is outside `1..=page_count`.
pub fn backpack_page(
    translator: &impl Translator,
    character: &Character,
    page: usize,
) -> Option<CreateInteractionResponseMessage> {
    let language = &character.language;
    let items = character.inventory.distinct_items();
    let max_page = page_count(items.len());

    if page == 0 || page > max_page {
        return None;
    }

    let lines: Vec<String> = items
        .iter()
        .enumerate()
        .skip((page - 1) * ITEMS_PER_PAGE)
        .take(ITEMS_PER_PAGE)
        .map(|(index, stack)| {
            format!(
                "*{}.* {} **x{}**",
                index + 1,
                translator.translate(language, &stack.item.name_key()),
                stack.amount
            )
        })
        .collect();

    let description = if lines.is_empty() {
        translator.translate(language, "backpack.empty")
    } else {
        lines.join("\n")
    };

    let embed = CreateEmbed::new()
        .title(translator.translate_with(
            language,
            "backpack.title",
            &placeholders([
                ("page", page.to_string()),
                ("maxPage", max_page.to_string()),
            ]),
        ))
        .description(description)
        .color(BACKPACK_COLOR);

    let buttons = CreateActionRow::Buttons(vec![
        reply::button(
            Component::Backpack(page - 1),
            translator.translate(language, "backpack.previous"),
            "◀️",
        )
        .disabled(page <= 1),
        reply::button(
            Component::Backpack(page + 1),
            translator.translate(language, "backpack.next"),
            "▶️",
        )
        .disabled(page >= max_page),
    ]);

    Some(
        CreateInteractionResponseMessage::new()
            .embed(embed)
            .components(vec![buttons]),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{character::DEFAULT_LANGUAGE, item::Item, translation::KeyTranslator};

    fn description(message: CreateInteractionResponseMessage) -> (String, Vec<bool>) {
        let json = serde_json::to_value(message).unwrap();
        let disabled = json["components"][0]["components"]
            .as_array()
            .unwrap()
            .iter()
            .map(|button| button["disabled"].as_bool().unwrap_or(false))
            .collect();
        (
            json["embeds"][0]["description"].as_str().unwrap().to_string(),
            disabled,
        )
    }

    #[test]
    fn counts_pages() {
        assert_eq!(page_count(0), 1);
        assert_eq!(page_count(15), 1);
        assert_eq!(page_count(16), 2);
    }

    #[test]
    fn shows_empty_backpack() {
        let character = Character::new(1, DEFAULT_LANGUAGE, "Ada", "Stone");
        let page = backpack_page(&KeyTranslator, &character, 1).unwrap();

        assert_eq!(description(page), ("backpack.empty".to_string(), vec![true, true]));
        assert!(backpack_page(&KeyTranslator, &character, 2).is_none());
        assert!(backpack_page(&KeyTranslator, &character, 0).is_none());
    }

    #[test]
    fn numbers_items_across_pages() {
        let mut character = Character::new(1, DEFAULT_LANGUAGE, "Ada", "Stone");
        character.inventory.add_item(Item::Pebble, 3);
        character.inventory.add_item(Item::MeadowHerb, 2);

        let (text, disabled) = description(backpack_page(&KeyTranslator, &character, 1).unwrap());
        let lines: Vec<&str> = text.lines().collect();

        assert_eq!(lines.len(), 2);
        assert!(lines[0].starts_with("*1.* "));
        assert!(lines[1].starts_with("*2.* "));
        assert_eq!(disabled, [true, true]);
    }
}
