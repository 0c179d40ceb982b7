//! Walking around a town and the actions offered at its locations.

use rand::Rng;

use crate::{
    cache::{character::CharacterCache, town::TownCache},
    error::{domain::DomainError, AppError},
    model::{
        character::Character,
        guild::Guild,
        inventory::{Inventory, Sale},
        item::{Item, ItemStack},
        location::{Location, LocationAction, SpecialLocation},
        town::Town,
    },
};

/// Result of clicking the join button in a guild hall.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GuildJoin {
    Joined(Guild),
    AlreadyMember(Guild),
}

pub struct TownActionService<'a> {
    characters: &'a CharacterCache,
    towns: &'a TownCache,
}

impl<'a> TownActionService<'a> {
    /// Creates a new TownActionService instance.
    ///
    /// # Arguments
    /// - `characters` - Cache characters are loaded from and saved through
    /// - `towns` - Cache of the world map
    pub fn new(characters: &'a CharacterCache, towns: &'a TownCache) -> Self {
        Self { characters, towns }
    }

    /// Loads a character together with the town it stands in.
    pub async fn character_in_town(
        &self,
        discord_client_id: u64,
    ) -> Result<(Character, Town), AppError> {
        let character = self
            .characters
            .get(discord_client_id)
            .await?
            .ok_or(DomainError::NoCharacter)?;

        let town = self
            .towns
            .get(&character.location.town)
            .ok_or_else(|| DomainError::UnknownTown(character.location.town.clone()))?;

        Ok((character, town))
    }

    /// Moves a character to another location of the same town.
    ///
    /// # Returns
    /// - `Ok((Character, Town))` - Character at its new location and the town
    /// - `Err(AppError::DomainErr(UnknownLocation))` - `destination` is not reachable on foot
    /// - `Err(AppError::DomainErr(NoCharacter | UnknownTown))` - Nothing to walk with
    pub async fn walk(
        &self,
        discord_client_id: u64,
        destination: SpecialLocation,
    ) -> Result<(Character, Town), AppError> {
        let (mut character, town) = self.character_in_town(discord_client_id).await?;

        if !character
            .location
            .special
            .travel_locations(&town.features)
            .contains(&destination)
        {
            let target = Location::new(town.name.clone(), destination);
            return Err(DomainError::UnknownLocation(target.to_string()).into());
        }

        character.location = Location::new(town.name.clone(), destination);
        self.characters.put(character.clone()).await?;

        Ok((character, town))
    }

    /// Joins the guild whose hall the character stands in.
    ///
    /// # Returns
    /// - `Ok((Character, GuildJoin))` - Updated character and whether it was already a member
    /// - `Err(AppError::DomainErr(UnknownGuild))` - The character is not in a guild hall
    pub async fn join_guild(
        &self,
        discord_client_id: u64,
    ) -> Result<(Character, GuildJoin), AppError> {
        let (mut character, _) = self.character_in_town(discord_client_id).await?;

        let guild = character
            .location
            .special
            .guild()
            .ok_or_else(|| DomainError::UnknownGuild(character.location.to_string()))?;

        if !character.join_guild(guild) {
            return Ok((character, GuildJoin::AlreadyMember(guild)));
        }

        self.characters.put(character.clone()).await?;
        tracing::info!("User {} joined {}", discord_client_id, guild);

        Ok((character, GuildJoin::Joined(guild)))
    }

    /// Harvests herbs growing in the town's climate.
    ///
    /// # Returns
    /// - `Ok((Character, Vec<ItemStack>))` - Updated character and what went into its
    ///   inventory, empty when nothing grows here or the inventory is full
    /// - `Err(AppError::BadRequest)` - The character cannot harvest here
    pub async fn harvest(
        &self,
        discord_client_id: u64,
    ) -> Result<(Character, Vec<ItemStack>), AppError> {
        let (mut character, town) = self.character_in_town(discord_client_id).await?;
        ensure_enabled(LocationAction::HarvestGarden, &character)?;

        let harvested = roll_harvest(&town, &mut character.inventory, &mut rand::rng());

        if !harvested.is_empty() {
            self.characters.put(character.clone()).await?;
        }

        Ok((character, harvested))
    }

    /// Sells every non-coin item in the character's inventory.
    pub async fn sell_all(&self, discord_client_id: u64) -> Result<(Character, Sale), AppError> {
        let (mut character, _) = self.character_in_town(discord_client_id).await?;
        ensure_enabled(LocationAction::Sell, &character)?;

        let sale = character.inventory.sell_all();
        self.characters.put(character.clone()).await?;

        tracing::debug!(
            "User {} sold {} kinds of items for {} bronze",
            discord_client_id,
            sale.sold.len(),
            sale.value
        );

        Ok((character, sale))
    }
}

fn ensure_enabled(action: LocationAction, character: &Character) -> Result<(), AppError> {
    let special = character.location.special;
    if LocationAction::actions_for(special).contains(&action)
        && action.is_enabled(character, special)
    {
        return Ok(());
    }

    Err(AppError::BadRequest(format!(
        "{} is not available at {}",
        action, character.location
    )))
}

/// Picks one or two herb kinds at random and adds one to three of each.
///
/// Returns what actually fit into the inventory, merged per item.
pub fn roll_harvest(town: &Town, inventory: &mut Inventory, rng: &mut impl Rng) -> Vec<ItemStack> {
    let possible: Vec<Item> = Item::harvestables(town);
    if possible.is_empty() {
        return Vec::new();
    }

    let kinds = rng.random_range(1..=2);
    let mut harvested: Vec<ItemStack> = Vec::new();

    for _ in 0..kinds {
        let item = possible[rng.random_range(0..possible.len())];
        let amount = rng.random_range(1..=3);
        let kept = amount - inventory.add_item(item, amount);
        if kept == 0 {
            continue;
        }

        match harvested.iter_mut().find(|stack| stack.item == item) {
            Some(stack) => stack.amount += kept,
            None => harvested.push(ItemStack { item, amount: kept }),
        }
    }

    harvested
}

#[cfg(test)]
mod tests {
    use rand::{rngs::StdRng, SeedableRng};

    use super::*;
    use test_utils::builder::TestBuilder;

    fn garden_town() -> Town {
        let mut town = Town::new("Brookfield");
        town.features.herb_garden = true;
        town.features.walls = true;
        town.features.herbologists_guild = true;
        town.temperature = 15;
        town.humidity = 50;
        town
    }

    async fn setup(
        db: &sea_orm::DatabaseConnection,
        location: Location,
    ) -> Result<(CharacterCache, TownCache), AppError> {
        let characters = CharacterCache::new(db.clone());
        let towns = TownCache::new();
        towns.put(garden_town());

        let mut character = Character::new(1, "en-US", "Ada", "Stone");
        character.location = location;
        characters.put(character).await?;

        Ok((characters, towns))
    }

    #[test]
    fn rolls_harvest_in_matching_climate() {
        let mut rng = StdRng::seed_from_u64(3);
        let town = garden_town();

        for _ in 0..50 {
            let mut inventory = Inventory::default();
            let harvested = roll_harvest(&town, &mut inventory, &mut rng);

            assert!(!harvested.is_empty());
            for stack in &harvested {
                assert!(matches!(
                    stack.item,
                    Item::MeadowHerb | Item::Sunpetal | Item::Moonleaf
                ));
                assert!((1..=6).contains(&stack.amount));
                assert_eq!(inventory.item_amount(stack.item), stack.amount as u64);
            }
        }
    }

    #[test]
    fn harvests_nothing_in_hostile_climate_or_full_inventory() {
        let mut rng = StdRng::seed_from_u64(3);

        let mut desert = garden_town();
        desert.temperature = 45;
        desert.humidity = 5;
        assert!(roll_harvest(&desert, &mut Inventory::default(), &mut rng).is_empty());

        let mut full = Inventory::new(1);
        full.add_item(Item::Pebble, 1);
        assert!(roll_harvest(&garden_town(), &mut full, &mut rng).is_empty());
    }

    #[tokio::test]
    async fn walks_only_to_reachable_locations() -> Result<(), AppError> {
        let test = TestBuilder::new()
            .with_character_tables()
            .build()
            .await
            .unwrap();
        let db = test.db.as_ref().unwrap();
        let (characters, towns) = setup(db, Location::town_center("Brookfield")).await?;
        let service = TownActionService::new(&characters, &towns);

        let (character, _) = service.walk(1, SpecialLocation::HerbGarden).await?;
        assert_eq!(character.location.to_string(), "Brookfield:HERB_GARDEN");

        let result = service.walk(1, SpecialLocation::Outside).await;
        assert!(matches!(
            result,
            Err(AppError::DomainErr(DomainError::UnknownLocation(_)))
        ));

        let result = service.walk(1, SpecialLocation::Port).await;
        assert!(result.is_err());

        Ok(())
    }

    #[tokio::test]
    async fn joins_guild_in_hall() -> Result<(), AppError> {
        let test = TestBuilder::new()
            .with_character_tables()
            .build()
            .await
            .unwrap();
        let db = test.db.as_ref().unwrap();
        let (characters, towns) = setup(
            db,
            Location::new("Brookfield", SpecialLocation::HerbGuild),
        )
        .await?;
        let service = TownActionService::new(&characters, &towns);

        let (character, join) = service.join_guild(1).await?;
        assert_eq!(join, GuildJoin::Joined(Guild::HerbologiesGuild));
        assert!(character.is_in_guild(Guild::HerbologiesGuild));

        let (_, join) = service.join_guild(1).await?;
        assert_eq!(join, GuildJoin::AlreadyMember(Guild::HerbologiesGuild));

        Ok(())
    }

    #[tokio::test]
    async fn refuses_join_outside_hall() -> Result<(), AppError> {
        let test = TestBuilder::new()
            .with_character_tables()
            .build()
            .await
            .unwrap();
        let db = test.db.as_ref().unwrap();
        let (characters, towns) = setup(db, Location::town_center("Brookfield")).await?;
        let service = TownActionService::new(&characters, &towns);

        let result = service.join_guild(1).await;
        assert!(matches!(
            result,
            Err(AppError::DomainErr(DomainError::UnknownGuild(_)))
        ));

        Ok(())
    }

    #[tokio::test]
    async fn harvest_requires_membership() -> Result<(), AppError> {
        let test = TestBuilder::new()
            .with_character_tables()
            .build()
            .await
            .unwrap();
        let db = test.db.as_ref().unwrap();
        let (characters, towns) = setup(
            db,
            Location::new("Brookfield", SpecialLocation::HerbGarden),
        )
        .await?;
        let service = TownActionService::new(&characters, &towns);

        assert!(matches!(
            service.harvest(1).await,
            Err(AppError::BadRequest(_))
        ));

        let mut character = characters.get(1).await?.unwrap();
        character.join_guild(Guild::HerbologiesGuild);
        characters.put(character).await?;

        let (character, harvested) = service.harvest(1).await?;
        assert!(!harvested.is_empty());
        assert!(!character.inventory.is_empty());

        Ok(())
    }

    #[tokio::test]
    async fn sells_everything_but_coins() -> Result<(), AppError> {
        let test = TestBuilder::new()
            .with_character_tables()
            .build()
            .await
            .unwrap();
        let db = test.db.as_ref().unwrap();
        let (characters, towns) = setup(db, Location::town_center("Brookfield")).await?;
        let service = TownActionService::new(&characters, &towns);

        assert!(service.sell_all(1).await.is_err());

        let mut character = characters.get(1).await?.unwrap();
        character.inventory.add_item(Item::Moonleaf, 3);
        characters.put(character).await?;

        let (character, sale) = service.sell_all(1).await?;
        assert_eq!(sale.value, 15);
        assert!(!character.inventory.has_sellables());
        assert_eq!(character.inventory.item_amount(Item::BronzeCoin), 15);

        Ok(())
    }
}
