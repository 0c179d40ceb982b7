//! Character factory for creating test character rows.

use crate::factory::helpers::next_id;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test characters with customizable fields.
///
/// Skills and guild memberships are inserted into their own tables after the
/// character row.
///
/// # Example
///
/// ```rust,ignore
/// use test_utils::factory::character::CharacterFactory;
///
/// let character = CharacterFactory::new(&db)
///     .discord_client_id("123456789")
///     .location("Lakevale:PORT")
///     .skill("SWIFT_FEET", 4)
///     .build()
///     .await?;
/// ```
pub struct CharacterFactory<'a> {
    db: &'a DatabaseConnection,
    discord_client_id: String,
    language: String,
    first_name: String,
    last_name: String,
    money: i64,
    location: String,
    agility: i32,
    skills: Vec<(String, i64)>,
    guilds: Vec<(String, i64)>,
}

impl<'a> CharacterFactory<'a> {
    /// Creates a new CharacterFactory with default values.
    ///
    /// Defaults:
    /// - discord_client_id: auto-incremented number
    /// - language: `"en-US"`
    /// - first_name / last_name: `"First {id}"` / `"Last {id}"`
    /// - money: `0`
    /// - location: `"MistMeadow"`
    /// - agility: `1`
    ///
    /// # Arguments
    /// - `db` - Database connection for inserting the entity
    ///
    /// # Returns
    /// - `CharacterFactory` - New factory instance with defaults
    pub fn new(db: &'a DatabaseConnection) -> Self {
        let id = next_id();
        Self {
            db,
            discord_client_id: id.to_string(),
            language: "en-US".to_string(),
            first_name: format!("First {}", id),
            last_name: format!("Last {}", id),
            money: 0,
            location: "MistMeadow".to_string(),
            agility: 1,
            skills: Vec::new(),
            guilds: Vec::new(),
        }
    }

    /// Sets the Discord ID of the owning user.
    pub fn discord_client_id(mut self, discord_client_id: impl Into<String>) -> Self {
        self.discord_client_id = discord_client_id.into();
        self
    }

    pub fn language(mut self, language: impl Into<String>) -> Self {
        self.language = language.into();
        self
    }

    pub fn name(mut self, first_name: impl Into<String>, last_name: impl Into<String>) -> Self {
        self.first_name = first_name.into();
        self.last_name = last_name.into();
        self
    }

    pub fn money(mut self, money: i64) -> Self {
        self.money = money;
        self
    }

    /// Sets the location string, e.g. `"Lakevale"` or `"Wharfwind:PORT"`.
    pub fn location(mut self, location: impl Into<String>) -> Self {
        self.location = location.into();
        self
    }

    pub fn agility(mut self, agility: i32) -> Self {
        self.agility = agility;
        self
    }

    /// Adds a learned skill by name with its experience.
    pub fn skill(mut self, name: impl Into<String>, experience: i64) -> Self {
        self.skills.push((name.into(), experience));
        self
    }

    /// Adds a guild membership by guild name with its experience.
    pub fn guild(mut self, name: impl Into<String>, experience: i64) -> Self {
        self.guilds.push((name.into(), experience));
        self
    }

    /// Builds and inserts the character with its skills and guilds.
    ///
    /// # Returns
    /// - `Ok(entity::character::Model)` - Created character row
    /// - `Err(DbErr)` - Database error during insert
    pub async fn build(self) -> Result<entity::character::Model, DbErr> {
        let character = entity::character::ActiveModel {
            discord_client_id: ActiveValue::Set(self.discord_client_id.clone()),
            language: ActiveValue::Set(self.language),
            first_name: ActiveValue::Set(self.first_name),
            last_name: ActiveValue::Set(self.last_name),
            noble_title: ActiveValue::Set(None),
            money: ActiveValue::Set(self.money),
            location: ActiveValue::Set(self.location),
            health_points: ActiveValue::Set(20),
            mana_points: ActiveValue::Set(20),
            strength: ActiveValue::Set(1),
            vitality: ActiveValue::Set(1),
            dexterity: ActiveValue::Set(1),
            agility: ActiveValue::Set(self.agility),
            intelligence: ActiveValue::Set(1),
            magic: ActiveValue::Set(1),
            charisma: ActiveValue::Set(1),
            reputation: ActiveValue::Set(0),
            luck: ActiveValue::Set(1),
        }
        .insert(self.db)
        .await?;

        for (skill_name, experience) in self.skills {
            entity::character_skill::ActiveModel {
                discord_client_id: ActiveValue::Set(self.discord_client_id.clone()),
                skill_name: ActiveValue::Set(skill_name),
                experience: ActiveValue::Set(experience),
            }
            .insert(self.db)
            .await?;
        }

        for (guild_name, experience) in self.guilds {
            entity::character_guild::ActiveModel {
                discord_client_id: ActiveValue::Set(self.discord_client_id.clone()),
                guild_name: ActiveValue::Set(guild_name),
                experience: ActiveValue::Set(experience),
            }
            .insert(self.db)
            .await?;
        }

        Ok(character)
    }
}

/// Creates a character with default values.
///
/// Shorthand for `CharacterFactory::new(db).build().await`.
///
/// # Arguments
/// - `db` - Database connection
///
/// # Returns
/// - `Ok(entity::character::Model)` - Created character row
/// - `Err(DbErr)` - Database error during insert
pub async fn create_character(db: &DatabaseConnection) -> Result<entity::character::Model, DbErr> {
    CharacterFactory::new(db).build().await
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::builder::TestBuilder;
    use entity::prelude::*;
    use sea_orm::{ColumnTrait, EntityTrait, QueryFilter};

    #[tokio::test]
    async fn creates_character_with_defaults() -> Result<(), DbErr> {
        let test = TestBuilder::new()
            .with_character_tables()
            .build()
            .await
            .unwrap();
        let db = test.db.as_ref().unwrap();

        let character = create_character(db).await?;

        assert!(!character.discord_client_id.is_empty());
        assert_eq!(character.location, "MistMeadow");
        assert_eq!(character.language, "en-US");

        Ok(())
    }

    #[tokio::test]
    async fn creates_character_with_skills_and_guilds() -> Result<(), DbErr> {
        let test = TestBuilder::new()
            .with_character_tables()
            .build()
            .await
            .unwrap();
        let db = test.db.as_ref().unwrap();

        let character = CharacterFactory::new(db)
            .skill("MEGALUCK", 4)
            .guild("MERCHANTS_GUILD", 0)
            .build()
            .await?;

        let skills = CharacterSkill::find()
            .filter(
                entity::character_skill::Column::DiscordClientId
                    .eq(character.discord_client_id.as_str()),
            )
            .all(db)
            .await?;
        let guilds = CharacterGuild::find().all(db).await?;

        assert_eq!(skills.len(), 1);
        assert_eq!(skills[0].skill_name, "MEGALUCK");
        assert_eq!(guilds.len(), 1);

        Ok(())
    }
}
