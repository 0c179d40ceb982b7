//! Where a character stands: a town plus a spot inside it.
//!
//! Locations are stored as `Town` for the marketplace and `Town:SPECIAL`
//! everywhere else. Walking between spots of a town is instant; moving
//! between towns goes through [`crate::model::travel::Travel`].

use std::{fmt, str::FromStr};

use crate::{
    error::domain::DomainError,
    model::{character::Character, guild::Guild, town::Features},
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SpecialLocation {
    Outside,
    Gate,
    Marketplace,
    Tavern,
    Blacksmith,
    HerbGarden,
    Temple,
    Port,
    Castle,
    MerchantsGuild,
    AdventurersGuild,
    BlacksmithsGuild,
    HerbGuild,
}

impl SpecialLocation {
    pub const ALL: [SpecialLocation; 13] = [
        SpecialLocation::Outside,
        SpecialLocation::Gate,
        SpecialLocation::Marketplace,
        SpecialLocation::Tavern,
        SpecialLocation::Blacksmith,
        SpecialLocation::HerbGarden,
        SpecialLocation::Temple,
        SpecialLocation::Port,
        SpecialLocation::Castle,
        SpecialLocation::MerchantsGuild,
        SpecialLocation::AdventurersGuild,
        SpecialLocation::BlacksmithsGuild,
        SpecialLocation::HerbGuild,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            SpecialLocation::Outside => "OUTSIDE",
            SpecialLocation::Gate => "GATE",
            SpecialLocation::Marketplace => "MARKETPLACE",
            SpecialLocation::Tavern => "TAVERN",
            SpecialLocation::Blacksmith => "BLACKSMITH",
            SpecialLocation::HerbGarden => "HERB_GARDEN",
            SpecialLocation::Temple => "TEMPLE",
            SpecialLocation::Port => "PORT",
            SpecialLocation::Castle => "CASTLE",
            SpecialLocation::MerchantsGuild => "MERCHANTS_GUILD",
            SpecialLocation::AdventurersGuild => "ADVENTURERS_GUILD",
            SpecialLocation::BlacksmithsGuild => "BLACKSMITHS_GUILD",
            SpecialLocation::HerbGuild => "HERB_GUILD",
        }
    }

    pub fn emoji(&self) -> &'static str {
        match self {
            SpecialLocation::Outside => "🌲",
            SpecialLocation::Gate => "🚪",
            SpecialLocation::Marketplace => "🏪",
            SpecialLocation::Tavern => "🍺",
            SpecialLocation::Blacksmith => "🔥",
            SpecialLocation::HerbGarden => "🌿",
            SpecialLocation::Temple => "⛪",
            SpecialLocation::Port => "⚓",
            SpecialLocation::Castle => "🏰",
            SpecialLocation::MerchantsGuild => "💰",
            SpecialLocation::AdventurersGuild => "🗺",
            SpecialLocation::BlacksmithsGuild => "🔨",
            SpecialLocation::HerbGuild => "🧪",
        }
    }

    pub fn translation_key(&self) -> String {
        format!("location.{}", self.name().to_lowercase())
    }

    /// Whether a town with these features has this spot.
    pub fn is_present(&self, features: &Features) -> bool {
        match self {
            SpecialLocation::Outside | SpecialLocation::Marketplace => true,
            SpecialLocation::Gate => features.walls,
            SpecialLocation::Tavern => features.shanty,
            SpecialLocation::Blacksmith => features.blacksmith,
            SpecialLocation::HerbGarden => features.herb_garden,
            SpecialLocation::Temple => features.temple,
            SpecialLocation::Port => features.port,
            SpecialLocation::Castle => features.capital,
            SpecialLocation::MerchantsGuild => features.merchants_guild,
            SpecialLocation::AdventurersGuild => features.adventurers_guild,
            SpecialLocation::BlacksmithsGuild => features.blacksmiths_guild,
            SpecialLocation::HerbGuild => features.herbologists_guild,
        }
    }

    /// The in-game guild whose hall this is, if any.
    pub fn guild(&self) -> Option<Guild> {
        match self {
            SpecialLocation::MerchantsGuild => Some(Guild::MerchantsGuild),
            SpecialLocation::AdventurersGuild => Some(Guild::AdventurersGuild),
            SpecialLocation::BlacksmithsGuild => Some(Guild::BlacksmithsGuild),
            SpecialLocation::HerbGuild => Some(Guild::HerbologiesGuild),
            _ => None,
        }
    }

    /// Spots reachable on foot from here.
    pub fn travel_locations(&self, features: &Features) -> Vec<SpecialLocation> {
        let gate_or_marketplace = if features.walls {
            SpecialLocation::Gate
        } else {
            SpecialLocation::Marketplace
        };

        match self {
            SpecialLocation::Outside | SpecialLocation::Port => vec![gate_or_marketplace],
            SpecialLocation::Gate => vec![SpecialLocation::Outside, SpecialLocation::Marketplace],
            SpecialLocation::Marketplace => std::iter::once(SpecialLocation::Outside)
                .chain(Self::ALL.into_iter().filter(|location| {
                    !matches!(
                        location,
                        SpecialLocation::Outside | SpecialLocation::Marketplace
                    ) && location.is_present(features)
                }))
                .collect(),
            _ => vec![SpecialLocation::Marketplace],
        }
    }
}

impl fmt::Display for SpecialLocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for SpecialLocation {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|location| location.name().eq_ignore_ascii_case(s))
            .ok_or_else(|| DomainError::UnknownLocation(s.to_string()))
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Location {
    pub town: String,
    pub special: SpecialLocation,
}

impl Location {
    pub fn new(town: impl Into<String>, special: SpecialLocation) -> Self {
        Self {
            town: town.into(),
            special,
        }
    }

    /// The marketplace of a town, where arrivals and new characters start.
    pub fn town_center(town: impl Into<String>) -> Self {
        Self::new(town, SpecialLocation::Marketplace)
    }
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.special {
            SpecialLocation::Marketplace => f.write_str(&self.town),
            special => write!(f, "{}:{}", self.town, special),
        }
    }
}

impl FromStr for Location {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (town, special) = match s.split_once(':') {
            Some((town, special)) => (town.trim(), special.trim().parse()?),
            None => (s.trim(), SpecialLocation::Marketplace),
        };

        if town.is_empty() {
            return Err(DomainError::UnknownLocation(s.to_string()));
        }

        Ok(Self::new(town, special))
    }
}

/// Things a character can do at a spot, shown as buttons in the town menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LocationAction {
    QuestBoard,
    JoinGuild,
    HarvestGarden,
    Buy,
    Sell,
}

impl LocationAction {
    pub const ALL: [LocationAction; 5] = [
        LocationAction::QuestBoard,
        LocationAction::JoinGuild,
        LocationAction::HarvestGarden,
        LocationAction::Buy,
        LocationAction::Sell,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            LocationAction::QuestBoard => "QUEST_BOARD",
            LocationAction::JoinGuild => "JOIN_GUILD",
            LocationAction::HarvestGarden => "HARVEST_GARDEN",
            LocationAction::Buy => "BUY",
            LocationAction::Sell => "SELL",
        }
    }

    pub fn emoji(&self) -> &'static str {
        match self {
            LocationAction::QuestBoard => "📖",
            LocationAction::JoinGuild => "📜",
            LocationAction::HarvestGarden => "🌾",
            LocationAction::Buy => "🛒",
            LocationAction::Sell => "🪙",
        }
    }

    pub fn translation_key(&self) -> String {
        format!("town.menu.action.{}", self.name().to_lowercase())
    }

    fn locations(&self) -> &'static [SpecialLocation] {
        const GUILD_HALLS: &[SpecialLocation] = &[
            SpecialLocation::AdventurersGuild,
            SpecialLocation::BlacksmithsGuild,
            SpecialLocation::HerbGuild,
            SpecialLocation::MerchantsGuild,
        ];

        match self {
            LocationAction::QuestBoard | LocationAction::JoinGuild => GUILD_HALLS,
            LocationAction::HarvestGarden => &[SpecialLocation::HerbGarden],
            LocationAction::Buy | LocationAction::Sell => &[SpecialLocation::Marketplace],
        }
    }

    /// Actions offered at a spot, enabled or not.
    pub fn actions_for(special: SpecialLocation) -> Vec<LocationAction> {
        Self::ALL
            .into_iter()
            .filter(|action| action.locations().contains(&special))
            .collect()
    }

    /// Whether the button is clickable for this character at this spot.
    pub fn is_enabled(&self, character: &Character, special: SpecialLocation) -> bool {
        match self {
            LocationAction::QuestBoard => special
                .guild()
                .is_some_and(|guild| character.is_in_guild(guild)),
            LocationAction::JoinGuild => special
                .guild()
                .is_some_and(|guild| !character.is_in_guild(guild)),
            LocationAction::HarvestGarden => character.is_in_guild(Guild::HerbologiesGuild),
            LocationAction::Buy => false,
            LocationAction::Sell => character.inventory.has_sellables(),
        }
    }
}

impl fmt::Display for LocationAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for LocationAction {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|action| action.name() == s)
            .ok_or_else(|| DomainError::UnknownLocation(s.to_string()))
    }
}
