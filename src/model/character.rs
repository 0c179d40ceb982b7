//! Player characters.
//!
//! A character belongs to exactly one Discord user and is stored across the
//! `characters`, `character_skills`, `character_guilds` and `inventories`
//! tables. The repository reassembles it through [`Character::from_entities`].

use sea_orm::DbErr;

use crate::{
    model::{
        guild::{Guild, GuildCard},
        inventory::Inventory,
        location::Location,
        noble_title::NobleTitle,
        skill::{skill_by_name, Skill},
        stats::Stats,
        town::DEFAULT_TOWN,
    },
    util::parse::parse_snowflake,
};

/// Language new characters use until the player picks another one.
pub const DEFAULT_LANGUAGE: &str = "en-US";

/// Longest first or last name accepted by the character creator.
pub const MAX_NAME_LENGTH: usize = 32;

#[derive(Debug, Clone, PartialEq)]
pub struct Character {
    /// Discord ID of the owning user.
    pub discord_client_id: u64,
    pub language: String,
    pub first_name: String,
    pub last_name: String,
    pub noble_title: Option<NobleTitle>,
    /// Coins held outside the backpack, in bronze.
    pub money: i64,
    pub inventory: Inventory,
    pub stats: Stats,
    /// Learned skills with their experience.
    pub skills: Vec<(&'static Skill, i64)>,
    pub location: Location,
    pub guild_cards: Vec<GuildCard>,
}

impl Character {
    /// A fresh character standing in the marketplace of the starting town.
    pub fn new(
        discord_client_id: u64,
        language: impl Into<String>,
        first_name: impl Into<String>,
        last_name: impl Into<String>,
    ) -> Self {
        Self {
            discord_client_id,
            language: language.into(),
            first_name: first_name.into(),
            last_name: last_name.into(),
            noble_title: None,
            money: 0,
            inventory: Inventory::default(),
            stats: Stats::default(),
            skills: Vec::new(),
            location: Location::town_center(DEFAULT_TOWN),
            guild_cards: Vec::new(),
        }
    }

    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }

    /// Base stats with every learned skill applied in learning order.
    pub fn skilled_stats(&self) -> Stats {
        self.skills
            .iter()
            .fold(self.stats, |stats, (skill, experience)| {
                skill.apply(stats, *experience)
            })
    }

    pub fn skill_experience(&self, skill: &Skill) -> Option<i64> {
        self.skills
            .iter()
            .find(|(learned, _)| *learned == skill)
            .map(|(_, experience)| *experience)
    }

    /// Learns a skill or overwrites its experience when already known.
    pub fn set_skill(&mut self, skill: &'static Skill, experience: i64) {
        match self.skills.iter_mut().find(|(learned, _)| *learned == skill) {
            Some((_, current)) => *current = experience,
            None => self.skills.push((skill, experience)),
        }
    }

    pub fn is_in_guild(&self, guild: Guild) -> bool {
        self.guild_cards.iter().any(|card| card.guild == guild)
    }

    /// Adds a membership card. Returns `false` when already a member.
    pub fn join_guild(&mut self, guild: Guild) -> bool {
        if self.is_in_guild(guild) {
            return false;
        }
        self.guild_cards.push(GuildCard::new(guild));
        true
    }

    pub fn guild_card(&self, guild: Guild) -> Option<&GuildCard> {
        self.guild_cards.iter().find(|card| card.guild == guild)
    }

    /// Rebuilds a character from its stored rows.
    ///
    /// # Arguments
    /// - `entity` - Row of the `characters` table
    /// - `skills` - The character's rows of `character_skills`
    /// - `guilds` - The character's rows of `character_guilds`
    /// - `inventory` - The character's inventory row, empty inventory when absent
    ///
    /// # Returns
    /// - `Ok(Character)` - The assembled character
    /// - `Err(DbErr::Custom)` - A stored id, skill, guild, title or location failed to parse
    pub fn from_entities(
        entity: entity::character::Model,
        skills: Vec<entity::character_skill::Model>,
        guilds: Vec<entity::character_guild::Model>,
        inventory: Option<entity::inventory::Model>,
    ) -> Result<Self, DbErr> {
        let corrupt = |e: &dyn std::fmt::Display| DbErr::Custom(e.to_string());

        let noble_title = entity
            .noble_title
            .as_deref()
            .map(str::parse::<NobleTitle>)
            .transpose()
            .map_err(|e| corrupt(&e))?;

        let inventory = match inventory {
            Some(row) => Inventory::from_json(&row.inventory).map_err(|e| corrupt(&e))?,
            None => Inventory::default(),
        };

        let skills = skills
            .into_iter()
            .map(|row| skill_by_name(&row.skill_name).map(|skill| (skill, row.experience)))
            .collect::<Result<Vec<_>, _>>()
            .map_err(|e| corrupt(&e))?;

        let guild_cards = guilds
            .into_iter()
            .map(|row| {
                row.guild_name.parse::<Guild>().map(|guild| GuildCard {
                    guild,
                    xp: row.experience,
                })
            })
            .collect::<Result<Vec<_>, _>>()
            .map_err(|e| corrupt(&e))?;

        Ok(Self {
            discord_client_id: parse_snowflake(&entity.discord_client_id, "discord_client_id")?,
            language: entity.language,
            first_name: entity.first_name,
            last_name: entity.last_name,
            noble_title,
            money: entity.money,
            inventory,
            stats: Stats {
                health_points: entity.health_points,
                mana_points: entity.mana_points,
                strength: entity.strength,
                vitality: entity.vitality,
                dexterity: entity.dexterity,
                agility: entity.agility,
                intelligence: entity.intelligence,
                magic: entity.magic,
                charisma: entity.charisma,
                reputation: entity.reputation,
                luck: entity.luck,
            },
            skills,
            location: entity.location.parse().map_err(|e| corrupt(&e))?,
            guild_cards,
        })
    }
}

/// Checks a first or last name typed into the character creator.
pub fn is_valid_name(name: &str) -> bool {
    let length = name.trim().chars().count();
    (1..=MAX_NAME_LENGTH).contains(&length)
}
