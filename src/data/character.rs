//! Character data repository.
//!
//! A character spans four tables: the `characters` row with name, location and
//! base stats, its `character_skills` and `character_guilds` rows, and the
//! inventory document handled by [`InventoryRepository`]. Saving replaces the
//! skill and guild rows wholesale; saves and deletes run in one transaction.

use migration::OnConflict;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    PaginatorTrait, QueryFilter, TransactionTrait,
};

use crate::{data::inventory::InventoryRepository, model::character::Character};

/// Repository providing database operations for player characters.
pub struct CharacterRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> CharacterRepository<'a> {
    /// Creates a new CharacterRepository instance.
    ///
    /// # Arguments
    /// - `db` - Reference to the database connection
    ///
    /// # Returns
    /// - `CharacterRepository` - New repository instance
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Loads a character with skills, guild memberships and inventory.
    ///
    /// # Arguments
    /// - `discord_client_id` - Discord ID of the owning user
    ///
    /// # Returns
    /// - `Ok(Some(Character))` - The character was found
    /// - `Ok(None)` - The user has no character
    /// - `Err(DbErr)` - Database error or a stored value that fails to parse
    pub async fn find(&self, discord_client_id: u64) -> Result<Option<Character>, DbErr> {
        let id = discord_client_id.to_string();

        let Some(entity) = entity::prelude::Character::find_by_id(id.clone())
            .one(self.db)
            .await?
        else {
            return Ok(None);
        };

        let skills = entity::prelude::CharacterSkill::find()
            .filter(entity::character_skill::Column::DiscordClientId.eq(id.as_str()))
            .all(self.db)
            .await?;

        let guilds = entity::prelude::CharacterGuild::find()
            .filter(entity::character_guild::Column::DiscordClientId.eq(id.as_str()))
            .all(self.db)
            .await?;

        let inventory = entity::prelude::Inventory::find_by_id(id).one(self.db).await?;

        Character::from_entities(entity, skills, guilds, inventory).map(Some)
    }

    /// Inserts or updates a character together with all of its satellite rows.
    ///
    /// # Arguments
    /// - `character` - The character to persist
    ///
    /// # Returns
    /// - `Ok(())` - Character, skills, guilds and inventory were written
    /// - `Err(DbErr)` - Database error during any of the writes, nothing is changed
    pub async fn save(&self, character: &Character) -> Result<(), DbErr> {
        let id = character.discord_client_id.to_string();
        let stats = character.stats;
        let txn = self.db.begin().await?;

        entity::prelude::Character::insert(entity::character::ActiveModel {
            discord_client_id: ActiveValue::Set(id.clone()),
            language: ActiveValue::Set(character.language.clone()),
            first_name: ActiveValue::Set(character.first_name.clone()),
            last_name: ActiveValue::Set(character.last_name.clone()),
            noble_title: ActiveValue::Set(character.noble_title.map(|t| t.to_string())),
            money: ActiveValue::Set(character.money),
            location: ActiveValue::Set(character.location.to_string()),
            health_points: ActiveValue::Set(stats.health_points),
            mana_points: ActiveValue::Set(stats.mana_points),
            strength: ActiveValue::Set(stats.strength),
            vitality: ActiveValue::Set(stats.vitality),
            dexterity: ActiveValue::Set(stats.dexterity),
            agility: ActiveValue::Set(stats.agility),
            intelligence: ActiveValue::Set(stats.intelligence),
            magic: ActiveValue::Set(stats.magic),
            charisma: ActiveValue::Set(stats.charisma),
            reputation: ActiveValue::Set(stats.reputation),
            luck: ActiveValue::Set(stats.luck),
        })
        .on_conflict(
            OnConflict::column(entity::character::Column::DiscordClientId)
                .update_columns([
                    entity::character::Column::Language,
                    entity::character::Column::FirstName,
                    entity::character::Column::LastName,
                    entity::character::Column::NobleTitle,
                    entity::character::Column::Money,
                    entity::character::Column::Location,
                    entity::character::Column::HealthPoints,
                    entity::character::Column::ManaPoints,
                    entity::character::Column::Strength,
                    entity::character::Column::Vitality,
                    entity::character::Column::Dexterity,
                    entity::character::Column::Agility,
                    entity::character::Column::Intelligence,
                    entity::character::Column::Magic,
                    entity::character::Column::Charisma,
                    entity::character::Column::Reputation,
                    entity::character::Column::Luck,
                ])
                .to_owned(),
        )
        .exec(&txn)
        .await?;

        // Replace skill and guild rows
        entity::prelude::CharacterSkill::delete_many()
            .filter(entity::character_skill::Column::DiscordClientId.eq(id.as_str()))
            .exec(&txn)
            .await?;

        entity::prelude::CharacterGuild::delete_many()
            .filter(entity::character_guild::Column::DiscordClientId.eq(id.as_str()))
            .exec(&txn)
            .await?;

        for (skill, experience) in &character.skills {
            entity::character_skill::ActiveModel {
                discord_client_id: ActiveValue::Set(id.clone()),
                skill_name: ActiveValue::Set(skill.name.to_string()),
                experience: ActiveValue::Set(*experience),
            }
            .insert(&txn)
            .await?;
        }

        for card in &character.guild_cards {
            entity::character_guild::ActiveModel {
                discord_client_id: ActiveValue::Set(id.clone()),
                guild_name: ActiveValue::Set(card.guild.to_string()),
                experience: ActiveValue::Set(card.xp),
            }
            .insert(&txn)
            .await?;
        }

        InventoryRepository::new(&txn)
            .save(character.discord_client_id, &character.inventory)
            .await?;

        txn.commit().await
    }

    /// Counts all stored characters.
    pub async fn count(&self) -> Result<u64, DbErr> {
        entity::prelude::Character::find().count(self.db).await
    }

    /// Deletes a character and everything stored alongside it.
    ///
    /// # Returns
    /// - `Ok(true)` - The character existed and was deleted
    /// - `Ok(false)` - No character existed for this id
    /// - `Err(DbErr)` - Database error during deletion
    pub async fn delete(&self, discord_client_id: u64) -> Result<bool, DbErr> {
        let id = discord_client_id.to_string();
        let txn = self.db.begin().await?;

        entity::prelude::CharacterSkill::delete_many()
            .filter(entity::character_skill::Column::DiscordClientId.eq(id.as_str()))
            .exec(&txn)
            .await?;

        entity::prelude::CharacterGuild::delete_many()
            .filter(entity::character_guild::Column::DiscordClientId.eq(id.as_str()))
            .exec(&txn)
            .await?;

        InventoryRepository::new(&txn)
            .delete(discord_client_id)
            .await?;

        let result = entity::prelude::Character::delete_by_id(id)
            .exec(&txn)
            .await?;
        txn.commit().await?;

        Ok(result.rows_affected > 0)
    }
}
