//! Town menu: walking between locations and the actions offered there.
//!
//! The menu is one ephemeral message redrawn on every click. Results of an
//! action (harvest, sale, guild join) are shown as the message content above
//! the embed.

use serenity::all::{
    ComponentInteraction, Context, CreateEmbed, CreateInteractionResponseMessage, GuildId, Http,
    RoleId, UserId,
};
use std::sync::Arc;

use crate::{
    bot::{
        component::Component,
        reply::{self, MENU_COLOR},
    },
    cache::server_settings::ServerSettingsCache,
    error::{domain::DomainError, AppError},
    model::{
        character::Character,
        guild::Guild,
        inventory::Sale,
        item::ItemStack,
        location::{LocationAction, SpecialLocation},
        settings::GuildRole,
        town::Town,
        translation::Translator,
    },
    service::town_action::{GuildJoin, TownActionService},
    state::AppState,
    util::text::placeholders,
};

pub async fn handle_town_menu(
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

    show(state, ctx, interaction, &character, &town, None).await
}

pub async fn handle_walk(
    state: &AppState,
    ctx: &Context,
    interaction: &ComponentInteraction,
    destination: SpecialLocation,
) -> Result<(), AppError> {
    if reject_traveler(state, ctx, interaction).await? {
        return Ok(());
    }

    let (character, town) = TownActionService::new(&state.characters, &state.towns)
        .walk(interaction.user.id.get(), destination)
        .await?;

    show(state, ctx, interaction, &character, &town, None).await
}

pub async fn handle_action(
    state: &AppState,
    ctx: &Context,
    interaction: &ComponentInteraction,
    action: LocationAction,
) -> Result<(), AppError> {
    if reject_traveler(state, ctx, interaction).await? {
        return Ok(());
    }

    let service = TownActionService::new(&state.characters, &state.towns);
    let user_id = interaction.user.id.get();
    let t = state.translations.as_ref();

    let (character, notice) = match action {
        LocationAction::JoinGuild => {
            let (character, joined) = service.join_guild(user_id).await?;
            let notice = match joined {
                GuildJoin::Joined(guild) => {
                    assign_guild_roles(
                        state.settings.clone(),
                        ctx.http.clone(),
                        interaction.user.id,
                        guild,
                    );
                    guild_notice(t, &character.language, "town.menu.joined.guild", guild)
                }
                GuildJoin::AlreadyMember(guild) => guild_notice(
                    t,
                    &character.language,
                    "modals.errors.already.joined.guild",
                    guild,
                ),
            };
            (character, Some(notice))
        }
        LocationAction::HarvestGarden => {
            let (character, harvested) = service.harvest(user_id).await?;
            let notice = harvest_notice(t, &character.language, &harvested);
            (character, Some(notice))
        }
        LocationAction::Sell => {
            let (character, sale) = service.sell_all(user_id).await?;
            let notice = sale_notice(t, &character.language, &sale);
            (character, Some(notice))
        }
        LocationAction::QuestBoard | LocationAction::Buy => {
            let (character, _) = service.character_in_town(user_id).await?;
            (character, None)
        }
    };

    let town = state
        .towns
        .get(&character.location.town)
        .ok_or_else(|| DomainError::UnknownTown(character.location.town.clone()))?;

    show(state, ctx, interaction, &character, &town, notice).await
}

/// Town embed with a button per reachable location and per local action.
pub fn town_menu(
    translator: &impl Translator,
    character: &Character,
    town: &Town,
    notice: Option<String>,
) -> CreateInteractionResponseMessage {
    let language = &character.language;
    let special = character.location.special;

    let description = format!(
        "*{}*\n\n{}\n{}",
        translator.translate(language, &town.description_key()),
        translator.translate_with(
            language,
            "town.menu.location",
            &placeholders([("location", translator.translate(language, &special.translation_key()))]),
        ),
        translator.translate(language, "town.menu.description"),
    );

    let embed = CreateEmbed::new()
        .title(translator.translate_with(
            language,
            "town.menu.title",
            &placeholders([("town", town.name.clone())]),
        ))
        .description(description)
        .color(MENU_COLOR);

    let walks = special.travel_locations(&town.features).into_iter().map(|destination| {
        reply::button(
            Component::Walk(destination),
            translator.translate(language, &destination.translation_key()),
            destination.emoji(),
        )
    });
    let actions = LocationAction::actions_for(special).into_iter().map(|action| {
        reply::button(
            Component::Action(action),
            translator.translate(language, &action.translation_key()),
            action.emoji(),
        )
        .disabled(!action.is_enabled(character, special))
    });
    let travel = reply::button(
        Component::Travel,
        translator.translate(language, "town.menu.travel"),
        "🧭",
    );

    let buttons = walks.chain(actions).chain(std::iter::once(travel)).collect();

    CreateInteractionResponseMessage::new()
        .content(notice.unwrap_or_default())
        .embed(embed)
        .components(reply::button_rows(buttons))
}

pub fn harvest_notice(translator: &impl Translator, language: &str, harvested: &[ItemStack]) -> String {
    if harvested.is_empty() {
        return translator.translate(language, "town.menu.no.harvest");
    }

    let lines: Vec<String> = harvested
        .iter()
        .map(|stack| {
            format!(
                "- {} **x{}**",
                translator.translate(language, &stack.item.name_key()),
                stack.amount
            )
        })
        .collect();

    format!(
        "{}\n{}",
        translator.translate(language, "town.menu.harvested"),
        lines.join("\n")
    )
}

pub fn sale_notice(translator: &impl Translator, language: &str, sale: &Sale) -> String {
    let sold: Vec<String> = sale
        .sold
        .iter()
        .map(|stack| {
            format!(
                "**{}x** {}",
                stack.amount,
                translator.translate(language, &stack.item.name_key())
            )
        })
        .collect();

    translator.translate_with(
        language,
        "town.menu.sell.all",
        &placeholders([("amount", sold.join(", "))]),
    )
}

fn guild_notice(translator: &impl Translator, language: &str, key: &str, guild: Guild) -> String {
    translator.translate_with(
        language,
        key,
        &placeholders([("guild", translator.translate(language, &guild.translation_key()))]),
    )
}

/// Answers with the journey in progress instead of the menu.
///
/// Returns `true` when the user is traveling and the interaction was answered.
pub async fn reject_traveler(
    state: &AppState,
    ctx: &Context,
    interaction: &ComponentInteraction,
) -> Result<bool, AppError> {
    let Some(travel) = state.travels.get(interaction.user.id.get()) else {
        return Ok(false);
    };

    let message = state.translations.translate_with(
        &travel.language,
        "town.menu.travel.already_traveling",
        &placeholders([("destination", travel.destination().town)]),
    );
    interaction
        .create_response(&ctx.http, reply::ephemeral_text(message))
        .await?;

    Ok(true)
}

async fn show(
    state: &AppState,
    ctx: &Context,
    interaction: &ComponentInteraction,
    character: &Character,
    town: &Town,
    notice: Option<String>,
) -> Result<(), AppError> {
    let message = town_menu(state.translations.as_ref(), character, town, notice);
    interaction
        .create_response(&ctx.http, reply::menu(true, message))
        .await?;

    Ok(())
}

/// Hands out the guild's Discord role on every server that configured one.
///
/// Runs in the background; servers the user is not a member of reject the
/// request, which is expected and only logged at debug level.
fn assign_guild_roles(
    settings: Arc<ServerSettingsCache>,
    http: Arc<Http>,
    user_id: UserId,
    guild: Guild,
) {
    tokio::spawn(async move {
        let roles = match settings.guild_roles_for(guild).await {
            Ok(roles) => roles,
            Err(e) => {
                tracing::error!("Failed to load roles for {}: {:?}", guild, e);
                return;
            }
        };

        for (guild_id, role_id) in assignable_roles(&roles) {
            if let Err(e) = http
                .add_member_role(guild_id, user_id, role_id, Some("Joined in-game guild"))
                .await
            {
                tracing::debug!(
                    "Failed to add role {} to user {} on guild {}: {:?}",
                    role_id,
                    user_id,
                    guild_id,
                    e
                );
            }
        }
    });
}

/// Server and role pairs to hand out, skipping incomplete mappings.
pub fn assignable_roles(roles: &[GuildRole]) -> Vec<(GuildId, RoleId)> {
    roles
        .iter()
        .filter(|role| role.guild_id != 0 && role.role_id != 0)
        .map(|role| (GuildId::new(role.guild_id), RoleId::new(role.role_id)))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{
        character::DEFAULT_LANGUAGE,
        item::Item,
        location::Location,
        translation::KeyTranslator,
    };

    fn custom_ids(message: &CreateInteractionResponseMessage) -> Vec<(String, bool)> {
        let json = serde_json::to_value(message).unwrap();
        json["components"]
            .as_array()
            .unwrap()
            .iter()
            .flat_map(|row| row["components"].as_array().unwrap().clone())
            .map(|button| {
                (
                    button["custom_id"].as_str().unwrap().to_string(),
                    button["disabled"].as_bool().unwrap_or(false),
                )
            })
            .collect()
    }

    #[test]
    fn offers_walks_actions_and_travel() {
        let mut town = Town::new("Lakevale");
        town.features.walls = true;
        town.features.herb_garden = true;
        let mut character = Character::new(1, DEFAULT_LANGUAGE, "Ada", "Stone");
        character.location = Location::new("Lakevale", SpecialLocation::Marketplace);

        let ids = custom_ids(&town_menu(&KeyTranslator, &character, &town, None));

        assert_eq!(ids.first().unwrap().0, "ff-town-menu-walk-OUTSIDE");
        assert!(ids.contains(&("ff-town-menu-walk-HERB_GARDEN".to_string(), false)));
        assert!(ids.contains(&("ff-town-menu-action-BUY".to_string(), true)));
        assert!(ids.contains(&("ff-town-menu-action-SELL".to_string(), true)));
        assert_eq!(ids.last().unwrap().0, "ff-town-menu-travel");
    }

    #[test]
    fn shows_notice_as_content() {
        let town = Town::new("Lakevale");
        let character = Character::new(1, DEFAULT_LANGUAGE, "Ada", "Stone");

        let message = town_menu(&KeyTranslator, &character, &town, Some("Done".to_string()));
        let json = serde_json::to_value(&message).unwrap();

        assert_eq!(json["content"], "Done");
        assert_eq!(json["embeds"][0]["title"], "town.menu.title");
    }

    #[test]
    fn assigns_only_complete_role_mappings() {
        let role = |guild_id, role_id| GuildRole {
            guild_id,
            ingame_guild: Guild::MerchantsGuild,
            role_id,
        };

        assert_eq!(
            assignable_roles(&[role(1, 11), role(2, 0), role(0, 31), role(4, 41)]),
            [
                (GuildId::new(1), RoleId::new(11)),
                (GuildId::new(4), RoleId::new(41)),
            ]
        );
    }

    #[test]
    fn lists_harvested_items() {
        let harvested = vec![
            ItemStack::new(Item::MeadowHerb, 2).unwrap(),
            ItemStack::new(Item::Sunpetal, 1).unwrap(),
        ];

        assert_eq!(
            harvest_notice(&KeyTranslator, "en-US", &harvested),
            "town.menu.harvested\n- item.MEADOW_HERB.name **x2**\n- item.SUNPETAL.name **x1**"
        );
        assert_eq!(harvest_notice(&KeyTranslator, "en-US", &[]), "town.menu.no.harvest");
    }
}
