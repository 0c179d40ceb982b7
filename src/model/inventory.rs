//! Slot-limited backpack holding item stacks.
//!
//! Each stack occupies one slot; adding items tops up existing stacks before
//! opening new slots, and whatever does not fit is reported back as overflow.

use serde::{Deserialize, Serialize};

use crate::model::item::{Item, ItemStack};

pub const DEFAULT_CAPACITY: usize = 36;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Inventory {
    pub capacity: usize,
    #[serde(default)]
    stacks: Vec<ItemStack>,
}

/// Result of selling every non-coin item.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Sale {
    /// Sold items merged per item.
    pub sold: Vec<ItemStack>,
    /// Proceeds in bronze coins.
    pub value: u64,
    /// Coins that did not fit into the inventory and were lost.
    pub lost_coins: u64,
}

impl Default for Inventory {
    fn default() -> Self {
        Self::new(DEFAULT_CAPACITY)
    }
}

impl Inventory {
    pub fn new(capacity: usize) -> Self {
        Self {
            capacity,
            stacks: Vec::new(),
        }
    }

    /// Adds items and returns the amount that did not fit.
    pub fn add_item(&mut self, item: Item, amount: u32) -> u32 {
        let max = item.max_stack();
        let mut remaining = amount;

        for stack in self
            .stacks
            .iter_mut()
            .filter(|stack| stack.item == item && stack.amount < max)
        {
            if remaining == 0 {
                break;
            }
            let to_add = (max - stack.amount).min(remaining);
            stack.amount += to_add;
            remaining -= to_add;
        }

        while remaining > 0 && self.stacks.len() < self.capacity {
            let to_add = max.min(remaining);
            self.stacks.push(ItemStack {
                item,
                amount: to_add,
            });
            remaining -= to_add;
        }

        remaining
    }

    /// Removes `amount` across all stacks of `item`.
    ///
    /// Returns false and leaves the inventory untouched if it holds fewer.
    pub fn remove_item(&mut self, item: Item, amount: u32) -> bool {
        if self.item_amount(item) < amount as u64 {
            return false;
        }

        let mut remaining = amount;
        for stack in self.stacks.iter_mut().rev().filter(|s| s.item == item) {
            remaining = stack.remove_with_remaining(remaining);
            if remaining == 0 {
                break;
            }
        }
        self.stacks.retain(|stack| stack.amount > 0);

        true
    }

    pub fn has_item(&self, item: Item, amount: u32) -> bool {
        self.item_amount(item) >= amount as u64
    }

    /// Total amount of `item` across all stacks.
    pub fn item_amount(&self, item: Item) -> u64 {
        self.stacks
            .iter()
            .filter(|stack| stack.item == item)
            .map(|stack| stack.amount as u64)
            .sum()
    }

    pub fn stacks(&self) -> &[ItemStack] {
        &self.stacks
    }

    /// One entry per item with the summed amount, in first-seen order.
    ///
    /// Amounts may exceed the item's stack size since these are display totals.
    pub fn distinct_items(&self) -> Vec<ItemStack> {
        let mut distinct: Vec<ItemStack> = Vec::new();
        for stack in &self.stacks {
            match distinct.iter_mut().find(|d| d.item == stack.item) {
                Some(existing) => existing.amount = existing.amount.saturating_add(stack.amount),
                None => distinct.push(*stack),
            }
        }
        distinct
    }

    /// Number of unused slots.
    pub fn free_space(&self) -> usize {
        self.capacity.saturating_sub(self.stacks.len())
    }

    pub fn is_empty(&self) -> bool {
        self.stacks.is_empty()
    }

    pub fn clear(&mut self) {
        self.stacks.clear();
    }

    pub fn has_sellables(&self) -> bool {
        self.stacks.iter().any(|stack| !stack.item.is_coin())
    }

    /// Value of every coin held, in bronze.
    pub fn coin_value(&self) -> u64 {
        self.stacks
            .iter()
            .filter(|stack| stack.item.is_coin())
            .map(|stack| stack.worth() as u64)
            .sum()
    }

    /// Sells every non-coin item and pays the proceeds out as coins.
    ///
    /// Fractions of a bronze coin are dropped. Proceeds are paid in the largest
    /// denominations first.
    pub fn sell_all(&mut self) -> Sale {
        let sold: Vec<ItemStack> = self
            .distinct_items()
            .into_iter()
            .filter(|stack| !stack.item.is_coin())
            .collect();

        if sold.is_empty() {
            return Sale::default();
        }

        let value = sold.iter().map(ItemStack::worth).sum::<f64>().floor() as u64;
        self.stacks.retain(|stack| stack.item.is_coin());

        let mut lost_coins = 0;
        let mut remaining = value;
        for coin in Item::COINS {
            let worth = coin.worth() as u64;
            let count = remaining / worth;
            if count == 0 {
                continue;
            }
            remaining -= count * worth;

            let mut to_pay = count;
            while to_pay > 0 {
                let batch = to_pay.min(u32::MAX as u64) as u32;
                lost_coins += self.add_item(coin, batch) as u64;
                to_pay -= batch as u64;
            }
        }

        Sale {
            sold,
            value,
            lost_coins,
        }
    }

    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }

    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn merges_distinct_items() {
        let mut inventory = Inventory::default();
        assert_eq!(inventory.distinct_items().len(), 0);

        inventory.add_item(Item::Pebble, Item::Pebble.max_stack());
        assert_eq!(inventory.distinct_items().len(), 1);

        inventory.add_item(Item::Pebble, 32);
        let distinct = inventory.distinct_items();
        assert_eq!(distinct.len(), 1);
        assert_eq!(distinct[0].amount, Item::Pebble.max_stack() + 32);
        assert_eq!(inventory.stacks().len(), 2);
    }

    #[test]
    fn counts_items_across_stacks() {
        let mut inventory = Inventory::default();
        assert_eq!(inventory.item_amount(Item::Pebble), 0);

        inventory.add_item(Item::Pebble, Item::Pebble.max_stack());
        assert_eq!(inventory.item_amount(Item::Pebble), 99);

        inventory.add_item(Item::Pebble, 32);
        assert_eq!(inventory.item_amount(Item::Pebble), 99 + 32);
        assert!(inventory.has_item(Item::Pebble, 131));
        assert!(!inventory.has_item(Item::Pebble, 132));
    }

    #[test]
    fn overflows_when_capacity_is_reached() {
        let mut inventory = Inventory::default();
        let item = Item::DebugItem;

        let overflow = inventory.add_item(item, inventory.capacity as u32 * item.max_stack());
        assert_eq!(overflow, 0);
        assert_eq!(inventory.free_space(), 0);

        assert_eq!(inventory.add_item(item, 1), 1);
    }

    #[test]
    fn tops_up_existing_stacks_before_opening_slots() {
        let mut inventory = Inventory::new(2);
        inventory.add_item(Item::Pebble, 90);
        inventory.add_item(Item::BronzeCoin, 5);

        let overflow = inventory.add_item(Item::Pebble, 20);
        assert_eq!(overflow, 11);
        assert_eq!(inventory.item_amount(Item::Pebble), 99);
        assert_eq!(inventory.free_space(), 0);
    }

    #[test]
    fn removes_items_across_stacks() {
        let mut inventory = Inventory::default();
        inventory.add_item(Item::Pebble, 120);

        assert!(!inventory.remove_item(Item::Pebble, 121));
        assert_eq!(inventory.item_amount(Item::Pebble), 120);

        assert!(inventory.remove_item(Item::Pebble, 30));
        assert_eq!(inventory.item_amount(Item::Pebble), 90);
        assert_eq!(inventory.stacks().len(), 1);

        assert!(inventory.remove_item(Item::Pebble, 90));
        assert!(inventory.is_empty());
        assert!(!inventory.remove_item(Item::Sunpetal, 1));
    }

    #[test]
    fn sells_everything_except_coins() {
        let mut inventory = Inventory::default();
        inventory.add_item(Item::Moonleaf, 99);
        inventory.add_item(Item::Moonleaf, 99);
        inventory.add_item(Item::Moonleaf, 50);
        inventory.add_item(Item::Pebble, 150);
        inventory.add_item(Item::BronzeCoin, 2);

        let sale = inventory.sell_all();

        // 248 * 5.0 + 150 * 0.01 = 1241.5
        assert_eq!(sale.value, 1241);
        assert_eq!(sale.lost_coins, 0);
        assert_eq!(sale.sold.len(), 2);
        assert!(!inventory.has_sellables());
        assert_eq!(inventory.item_amount(Item::SilverCoin), 1);
        assert_eq!(inventory.item_amount(Item::BronzeCoin), 2 + 241);
        assert_eq!(inventory.coin_value(), 1243);
    }

    #[test]
    fn selling_nothing_changes_nothing() {
        let mut inventory = Inventory::default();
        inventory.add_item(Item::GoldCoin, 1);

        assert_eq!(inventory.sell_all(), Sale::default());
        assert_eq!(inventory.item_amount(Item::GoldCoin), 1);
    }

    #[test]
    fn serializes_to_json() {
        let mut inventory = Inventory::default();
        inventory.add_item(Item::Pebble, 10);

        let json = inventory.to_json().unwrap();
        let restored = Inventory::from_json(&json).unwrap();
        assert_eq!(restored, inventory);
        assert_eq!(restored.capacity, DEFAULT_CAPACITY);
    }

    #[test]
    fn rejects_stored_stacks_outside_bounds() {
        let oversized = r#"{"capacity":36,"stacks":[{"item":"PEBBLE","amount":500}]}"#;
        let empty = r#"{"capacity":36,"stacks":[{"item":"DEBUG_ITEM","amount":0}]}"#;

        assert!(Inventory::from_json(oversized).is_err());
        assert!(Inventory::from_json(empty).is_err());

        let full = r#"{"capacity":36,"stacks":[{"item":"PEBBLE","amount":99}]}"#;
        assert_eq!(Inventory::from_json(full).unwrap().item_amount(Item::Pebble), 99);
    }
}
