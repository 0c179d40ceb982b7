//! Journeys between towns and the random encounters along the road.

use chrono::{DateTime, Duration, Utc};
use rand::Rng;

use crate::{
    model::{
        inventory::Inventory,
        item::Item,
        location::Location,
        town::Connection,
        translation::Translator,
    },
    util::text::placeholders,
};

/// Quiet period after an encounter before the next one can happen.
pub const ENCOUNTER_COOLDOWN_SECS: i64 = 30;

/// Chance per tick of an encounter, in percent.
const ENCOUNTER_CHANCE: u32 = 1;

#[derive(Debug, Clone, PartialEq)]
pub struct Travel {
    pub character_id: u64,
    /// Language messages in the travel thread are written in.
    pub language: String,
    pub start_town: String,
    pub connection: Connection,
    pub thread_id: u64,
    pub start: DateTime<Utc>,
    pub end: DateTime<Utc>,
    /// Time of the last encounter, `None` until the first one.
    pub last_interruption: Option<DateTime<Utc>>,
}

impl Travel {
    pub fn new(
        character_id: u64,
        language: impl Into<String>,
        start_town: impl Into<String>,
        connection: Connection,
        thread_id: u64,
        start: DateTime<Utc>,
        duration: Duration,
    ) -> Self {
        Self {
            character_id,
            language: language.into(),
            start_town: start_town.into(),
            connection,
            thread_id,
            start,
            end: start + duration,
            last_interruption: None,
        }
    }

    pub fn has_arrived(&self, now: DateTime<Utc>) -> bool {
        now >= self.end
    }

    /// Where the character ends up, the destination's marketplace if the
    /// connection name fails to parse.
    pub fn destination(&self) -> Location {
        self.connection
            .destination()
            .unwrap_or_else(|_| Location::town_center(self.connection.name.clone()))
    }

    /// Rolls for something happening on the road.
    ///
    /// Records the interruption when an encounter is returned.
    pub fn roll_encounter(&mut self, now: DateTime<Utc>, rng: &mut impl Rng) -> Option<Encounter> {
        if self
            .last_interruption
            .is_some_and(|last| now - last < Duration::seconds(ENCOUNTER_COOLDOWN_SECS))
        {
            return None;
        }
        if rng.random_range(0..100) >= ENCOUNTER_CHANCE {
            return None;
        }

        self.last_interruption = Some(now);

        let item = if rng.random_range(0..100) < 80 {
            Item::Pebble
        } else {
            Item::BronzeCoin
        };

        Some(Encounter {
            item,
            amount: rng.random_range(1..=10),
        })
    }
}

/// Items found lying on the road.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Encounter {
    pub item: Item,
    pub amount: u32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EncounterOutcome {
    Found,
    /// Some of the found items did not fit and were left behind.
    NotEnoughSpace { dropped: u32 },
}

impl Encounter {
    /// Puts the found items into the inventory.
    pub fn collect(&self, inventory: &mut Inventory) -> EncounterOutcome {
        match inventory.add_item(self.item, self.amount) {
            0 => EncounterOutcome::Found,
            dropped => EncounterOutcome::NotEnoughSpace { dropped },
        }
    }

    /// Message posted to the travel thread.
    pub fn message(
        &self,
        outcome: EncounterOutcome,
        translator: &impl Translator,
        language: &str,
    ) -> String {
        let item = translator.translate(language, &self.item.name_key());

        match outcome {
            EncounterOutcome::Found => translator.translate_with(
                language,
                "travel.found.item",
                &placeholders([
                    ("item", item),
                    (
                        "desc",
                        translator.translate(language, &self.item.description_key()),
                    ),
                    ("amount", self.amount.to_string()),
                ]),
            ),
            EncounterOutcome::NotEnoughSpace { dropped } => translator.translate_with(
                language,
                "travel.found.not_enough_space",
                &placeholders([
                    ("item", item),
                    ("amount", self.amount.to_string()),
                    ("dropAmount", dropped.to_string()),
                ]),
            ),
        }
    }
}

#[cfg(test)]
mod tests {
    use rand::{rngs::StdRng, SeedableRng};

    use super::*;
    use crate::model::translation::KeyTranslator;

    fn travel(start: DateTime<Utc>) -> Travel {
        Travel::new(
            1,
            "en-US",
            "Lakevale",
            Connection::new("Brookfield", 950),
            99,
            start,
            Duration::seconds(158),
        )
    }

    #[test]
    fn arrives_after_duration() {
        let start = DateTime::from_timestamp(1_700_000_000, 0).unwrap();
        let travel = travel(start);

        assert_eq!(travel.end, start + Duration::seconds(158));
        assert!(!travel.has_arrived(start + Duration::seconds(157)));
        assert!(travel.has_arrived(start + Duration::seconds(158)));
        assert_eq!(travel.destination(), Location::town_center("Brookfield"));
    }

    #[test]
    fn can_meet_encounter_on_first_tick() {
        let start = DateTime::from_timestamp(1_700_000_000, 0).unwrap();
        let mut rng = StdRng::seed_from_u64(3);

        let found = (0..2_000)
            .filter(|_| travel(start).roll_encounter(start, &mut rng).is_some())
            .count();

        assert!(found > 0);
    }

    #[test]
    fn no_encounter_during_cooldown() {
        let start = DateTime::from_timestamp(1_700_000_000, 0).unwrap();
        let mut travel = travel(start);
        travel.last_interruption = Some(start);
        let mut rng = StdRng::seed_from_u64(7);

        for second in 0..ENCOUNTER_COOLDOWN_SECS {
            assert!(travel
                .roll_encounter(start + Duration::seconds(second), &mut rng)
                .is_none());
        }
    }

    #[test]
    fn encounters_are_rare_and_spaced() {
        let start = DateTime::from_timestamp(1_700_000_000, 0).unwrap();
        let mut travel = travel(start);
        let mut rng = StdRng::seed_from_u64(42);
        let mut last: Option<DateTime<Utc>> = None;
        let mut count = 0;

        for second in 0..20_000 {
            let now = start + Duration::seconds(second);
            if let Some(encounter) = travel.roll_encounter(now, &mut rng) {
                assert!((1..=10).contains(&encounter.amount));
                assert!(matches!(encounter.item, Item::Pebble | Item::BronzeCoin));
                if let Some(last) = last {
                    assert!(now - last >= Duration::seconds(ENCOUNTER_COOLDOWN_SECS));
                }
                assert_eq!(travel.last_interruption, Some(now));
                last = Some(now);
                count += 1;
            }
        }

        assert!(count > 0);
        assert!(count < 1_000);
    }

    #[test]
    fn collects_into_inventory() {
        let encounter = Encounter {
            item: Item::Pebble,
            amount: 5,
        };

        let mut inventory = Inventory::default();
        assert_eq!(encounter.collect(&mut inventory), EncounterOutcome::Found);
        assert_eq!(inventory.item_amount(Item::Pebble), 5);

        let mut full = Inventory::new(1);
        full.add_item(Item::Pebble, 97);
        assert_eq!(
            encounter.collect(&mut full),
            EncounterOutcome::NotEnoughSpace { dropped: 3 }
        );
    }

    #[test]
    fn renders_messages() {
        let encounter = Encounter {
            item: Item::BronzeCoin,
            amount: 2,
        };

        assert_eq!(
            encounter.message(EncounterOutcome::Found, &KeyTranslator, "en-US"),
            "travel.found.item"
        );
        assert_eq!(
            encounter.message(
                EncounterOutcome::NotEnoughSpace { dropped: 1 },
                &KeyTranslator,
                "en-US"
            ),
            "travel.found.not_enough_space"
        );
    }
}
