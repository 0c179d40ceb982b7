//! Journeys in progress.
//!
//! The manager only tracks travels; the scheduler job drives it once per
//! second through [`TravelManager::tick`] and performs the Discord side effects
//! for the events it returns.

use std::sync::Arc;

use chrono::{DateTime, Utc};
use rand::Rng;

use crate::{
    cache::SnapshotMap,
    model::travel::{Encounter, Travel},
};

/// Something that happened to a travel during a tick.
#[derive(Debug, Clone, PartialEq)]
pub enum TravelEvent {
    /// The travel ended and was removed from the manager.
    Arrived(Travel),
    /// Items were found on the road.
    Encounter { travel: Travel, encounter: Encounter },
}

/// Travels keyed by the traveling character's Discord ID.
#[derive(Default)]
pub struct TravelManager {
    travels: SnapshotMap<u64, Travel>,
}

impl TravelManager {
    pub fn new() -> Self {
        Self::default()
    }

    /// Starts tracking a travel, replacing any previous travel of the character.
    pub fn add(&self, travel: Travel) {
        tracing::debug!(
            "User {} started travelling from {} to {}",
            travel.character_id,
            travel.start_town,
            travel.connection.name
        );
        self.travels.insert(travel.character_id, travel);
    }

    pub fn remove(&self, character_id: u64) -> Option<Travel> {
        self.travels.remove(&character_id)
    }

    pub fn get(&self, character_id: u64) -> Option<Travel> {
        self.travels.get(&character_id)
    }

    pub fn get_all(&self) -> Vec<Travel> {
        self.travels.snapshot().values().cloned().collect()
    }

    pub fn is_traveling(&self, character_id: u64) -> bool {
        self.travels.contains(&character_id)
    }

    pub fn len(&self) -> usize {
        self.travels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Advances every travel to `now`.
    ///
    /// Finished travels are removed and reported as [`TravelEvent::Arrived`].
    /// The others roll for an encounter, which updates their last interruption.
    pub fn tick(&self, now: DateTime<Utc>, rng: &mut impl Rng) -> Vec<TravelEvent> {
        self.travels.update(|travels| {
            let arrived: Vec<u64> = travels
                .values()
                .filter(|travel| travel.has_arrived(now))
                .map(|travel| travel.character_id)
                .collect();

            let mut events: Vec<TravelEvent> = arrived
                .into_iter()
                .filter_map(|id| travels.remove(&id))
                .map(TravelEvent::Arrived)
                .collect();

            for travel in travels.values_mut() {
                if let Some(encounter) = travel.roll_encounter(now, rng) {
                    events.push(TravelEvent::Encounter {
                        travel: travel.clone(),
                        encounter,
                    });
                }
            }

            events
        })
    }

    /// Removes and returns every travel, used on shutdown to clean up threads.
    pub fn stop(&self) -> Vec<Travel> {
        let travels: Arc<_> = self.travels.snapshot();
        self.travels.clear();
        travels.values().cloned().collect()
    }
}
