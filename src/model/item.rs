//! Items, their value and how many fit in one inventory slot.

use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

use crate::{error::domain::DomainError, model::town::Town};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Item {
    Pebble,
    MeadowHerb,
    Sunpetal,
    Moonleaf,

    BronzeCoin,
    SilverCoin,
    GoldCoin,
    PlatinumCoin,

    DebugItem,
}

/// Climate a town must have for an item to grow in its herb garden.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HarvestConditions {
    pub min_temperature: i32,
    pub max_temperature: i32,
    pub min_humidity: i32,
    pub max_humidity: i32,
}

impl Default for HarvestConditions {
    fn default() -> Self {
        Self {
            min_temperature: 10,
            max_temperature: 30,
            min_humidity: 30,
            max_humidity: 60,
        }
    }
}

impl HarvestConditions {
    pub fn is_lootable(&self, town: &Town) -> bool {
        (self.min_temperature..=self.max_temperature).contains(&town.temperature)
            && (self.min_humidity..=self.max_humidity).contains(&town.humidity)
    }
}

impl Item {
    pub const ALL: [Item; 9] = [
        Item::Pebble,
        Item::MeadowHerb,
        Item::Sunpetal,
        Item::Moonleaf,
        Item::BronzeCoin,
        Item::SilverCoin,
        Item::GoldCoin,
        Item::PlatinumCoin,
        Item::DebugItem,
    ];

    /// Coins from the most to the least valuable, used when paying out.
    pub const COINS: [Item; 4] = [
        Item::PlatinumCoin,
        Item::GoldCoin,
        Item::SilverCoin,
        Item::BronzeCoin,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Item::Pebble => "PEBBLE",
            Item::MeadowHerb => "MEADOW_HERB",
            Item::Sunpetal => "SUNPETAL",
            Item::Moonleaf => "MOONLEAF",
            Item::BronzeCoin => "BRONZE_COIN",
            Item::SilverCoin => "SILVER_COIN",
            Item::GoldCoin => "GOLD_COIN",
            Item::PlatinumCoin => "PLATINUM_COIN",
            Item::DebugItem => "DEBUG_ITEM",
        }
    }

    /// Value of one item in bronze coins.
    pub fn worth(&self) -> f64 {
        match self {
            Item::Pebble => 0.01,
            Item::MeadowHerb => 0.5,
            Item::Sunpetal => 2.0,
            Item::Moonleaf => 5.0,
            Item::BronzeCoin => 1.0,
            Item::SilverCoin => 1_000.0,
            Item::GoldCoin => 1_000_000.0,
            Item::PlatinumCoin => 1_000_000_000.0,
            Item::DebugItem => 0.0,
        }
    }

    pub fn max_stack(&self) -> u32 {
        match self {
            Item::SilverCoin | Item::GoldCoin => 999,
            Item::PlatinumCoin => i32::MAX as u32,
            Item::DebugItem => 1,
            _ => 99,
        }
    }

    pub fn is_coin(&self) -> bool {
        Self::COINS.contains(self)
    }

    pub fn harvest_conditions(&self) -> Option<HarvestConditions> {
        match self {
            Item::MeadowHerb | Item::Sunpetal => Some(HarvestConditions::default()),
            Item::Moonleaf => Some(HarvestConditions {
                min_temperature: 5,
                max_temperature: 20,
                min_humidity: 40,
                max_humidity: 80,
            }),
            _ => None,
        }
    }

    /// Items that can be harvested in the given town's climate.
    pub fn harvestables(town: &Town) -> Vec<Item> {
        Self::ALL
            .into_iter()
            .filter(|item| {
                item.harvest_conditions()
                    .is_some_and(|conditions| conditions.is_lootable(town))
            })
            .collect()
    }

    pub fn name_key(&self) -> String {
        format!("item.{}.name", self.name())
    }

    pub fn description_key(&self) -> String {
        format!("item.{}.description", self.name())
    }
}

impl fmt::Display for Item {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Item {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|item| item.name().eq_ignore_ascii_case(s))
            .ok_or_else(|| DomainError::UnknownItem(s.to_string()))
    }
}

/// A pile of one item occupying a single inventory slot.
///
/// Deserializing goes through [`ItemStack::new`], so stored stacks obey the
/// same `1..=max_stack` bound as new ones.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "StoredItemStack")]
pub struct ItemStack {
    pub item: Item,
    pub amount: u32,
}

#[derive(Deserialize)]
struct StoredItemStack {
    item: Item,
    amount: u32,
}

impl TryFrom<StoredItemStack> for ItemStack {
    type Error = DomainError;

    fn try_from(stored: StoredItemStack) -> Result<Self, Self::Error> {
        ItemStack::new(stored.item, stored.amount)
    }
}

impl ItemStack {
    /// Creates a stack, rejecting amounts outside `1..=max_stack`.
    pub fn new(item: Item, amount: u32) -> Result<Self, DomainError> {
        if amount == 0 || amount > item.max_stack() {
            return Err(DomainError::InvalidStackAmount {
                item: item.name().to_string(),
                amount: amount as i64,
                max: item.max_stack() as i32,
            });
        }
        Ok(Self { item, amount })
    }

    /// Adds `amount`, filling this stack first.
    ///
    /// Returns this stack followed by any additional stacks needed to hold the
    /// rest: full stacks, then the remainder.
    pub fn add(&mut self, amount: u32) -> Vec<ItemStack> {
        let max = self.item.max_stack() as u64;
        let total = self.amount as u64 + amount as u64;

        self.amount = total.min(max) as u32;
        let mut rest = total - self.amount as u64;

        let mut stacks = vec![*self];
        while rest > 0 {
            let chunk = rest.min(max);
            stacks.push(ItemStack {
                item: self.item,
                amount: chunk as u32,
            });
            rest -= chunk;
        }
        stacks
    }

    /// Removes `amount` if the stack holds enough; otherwise leaves it unchanged.
    pub fn remove(&mut self, amount: u32) -> bool {
        if amount > self.amount {
            return false;
        }
        self.amount -= amount;
        true
    }

    /// Removes as much as possible and returns how many could not be removed.
    pub fn remove_with_remaining(&mut self, amount: u32) -> u32 {
        let removed = amount.min(self.amount);
        self.amount -= removed;
        amount - removed
    }

    /// Value of the whole stack in bronze coins.
    pub fn worth(&self) -> f64 {
        self.item.worth() * self.amount as f64
    }
}
