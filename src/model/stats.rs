use serde::{Deserialize, Serialize};

/// Base attributes of a character before skill modifiers are applied.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Stats {
    pub health_points: i32,
    pub mana_points: i32,
    pub strength: i32,
    pub vitality: i32,
    pub dexterity: i32,
    pub agility: i32,
    pub intelligence: i32,
    pub magic: i32,
    pub charisma: i32,
    pub reputation: i32,
    pub luck: i32,
}

impl Default for Stats {
    fn default() -> Self {
        Self {
            health_points: 20,
            mana_points: 20,
            strength: 1,
            vitality: 1,
            dexterity: 1,
            agility: 1,
            intelligence: 1,
            magic: 1,
            charisma: 1,
            reputation: 0,
            luck: 1,
        }
    }
}
