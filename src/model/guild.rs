//! In-game guilds and the rank ladder members climb with guild experience.

use std::{fmt, str::FromStr};

use crate::error::domain::DomainError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Guild {
    MerchantsGuild,
    AdventurersGuild,
    BlacksmithsGuild,
    HerbologiesGuild,
}

impl Guild {
    pub const ALL: [Guild; 4] = [
        Guild::MerchantsGuild,
        Guild::AdventurersGuild,
        Guild::BlacksmithsGuild,
        Guild::HerbologiesGuild,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Guild::MerchantsGuild => "MERCHANTS_GUILD",
            Guild::AdventurersGuild => "ADVENTURERS_GUILD",
            Guild::BlacksmithsGuild => "BLACKSMITHS_GUILD",
            Guild::HerbologiesGuild => "HERBOLOGIES_GUILD",
        }
    }

    /// Colour used for the Discord role created for this guild.
    pub fn color(&self) -> u32 {
        match self {
            Guild::MerchantsGuild => 0xF1C40F,
            Guild::AdventurersGuild => 0xE67E22,
            Guild::BlacksmithsGuild => 0x95A5A6,
            Guild::HerbologiesGuild => 0x2ECC71,
        }
    }

    pub fn translation_key(&self) -> String {
        format!("guilds.{}", self.name().to_lowercase())
    }
}

impl fmt::Display for Guild {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Guild {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|guild| guild.name().eq_ignore_ascii_case(s))
            .ok_or_else(|| DomainError::UnknownGuild(s.to_string()))
    }
}

/// Ranks ordered from lowest to highest.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum GuildRank {
    G,
    F,
    E,
    D,
    C,
    B,
    A,
    S,
    SS,
}

impl GuildRank {
    pub const ALL: [GuildRank; 9] = [
        GuildRank::G,
        GuildRank::F,
        GuildRank::E,
        GuildRank::D,
        GuildRank::C,
        GuildRank::B,
        GuildRank::A,
        GuildRank::S,
        GuildRank::SS,
    ];

    pub fn xp_needed(&self) -> i64 {
        match self {
            GuildRank::G => 0,
            GuildRank::F => 100,
            GuildRank::E => 500,
            GuildRank::D => 1200,
            GuildRank::C => 2500,
            GuildRank::B => 5000,
            GuildRank::A => 10000,
            GuildRank::S => 25000,
            GuildRank::SS => 100000,
        }
    }
}

/// Membership of a character in a guild.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GuildCard {
    pub guild: Guild,
    pub xp: i64,
}

impl GuildCard {
    pub fn new(guild: Guild) -> Self {
        Self { guild, xp: 0 }
    }

    /// Highest rank whose experience threshold has been reached.
    pub fn rank(&self) -> GuildRank {
        GuildRank::ALL
            .into_iter()
            .rev()
            .find(|rank| self.xp >= rank.xp_needed())
            .unwrap_or(GuildRank::G)
    }
}
