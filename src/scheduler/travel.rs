use chrono::Utc;
use serenity::{all::ChannelId, http::Http};
use std::{sync::Arc, time::Duration};
use tokio::sync::{Mutex, OwnedMutexGuard};
use tokio_cron_scheduler::{Job, JobScheduler};

use crate::{
    error::AppError,
    model::{
        location::Location,
        translation::Translator,
        travel::{Encounter, EncounterOutcome, Travel},
    },
    service::travel::TravelEvent,
    state::AppState,
    util::text::placeholders,
};

/// Time the arrival message stays readable before the travel thread is deleted.
const THREAD_DELETE_DELAY: Duration = Duration::from_secs(10);

/// Lets a single tick run at a time.
#[derive(Clone, Default)]
struct TickGate(Arc<Mutex<()>>);

impl TickGate {
    /// `None` while another tick holds the gate.
    fn try_enter(&self) -> Option<OwnedMutexGuard<()>> {
        self.0.clone().try_lock_owned().ok()
    }
}

/// Starts the travel scheduler
///
/// Runs every second: finished journeys move their character to the
/// destination, the others may run into an encounter. Messages go to the
/// travel's private thread. A tick is skipped while the previous one is still
/// running, so character updates of two ticks never interleave.
///
/// # Arguments
/// - `state`: Shared caches holding the travels and characters
/// - `discord_http`: Discord HTTP client for posting into travel threads
///
/// # Returns
/// - `Ok(JobScheduler)` - The running scheduler, kept alive by the caller
/// - `Err(AppError)` - The job could not be created or the scheduler not started
pub async fn start_scheduler(
    state: AppState,
    discord_http: Arc<Http>,
) -> Result<JobScheduler, AppError> {
    let scheduler = JobScheduler::new().await?;
    let gate = TickGate::default();

    let job = Job::new_async("* * * * * *", move |_uuid, _lock| {
        let state = state.clone();
        let http = discord_http.clone();
        let gate = gate.clone();

        Box::pin(async move {
            let Some(_guard) = gate.try_enter() else {
                tracing::debug!("Previous travel tick still running, skipping");
                return;
            };

            if let Err(e) = process_travels(&state, http).await {
                tracing::error!("Error processing travels: {}", e);
            }
        })
    })?;

    scheduler.add(job).await?;
    scheduler.start().await?;

    tracing::info!("Travel scheduler started");

    Ok(scheduler)
}

/// Advances every travel by one tick and posts what happened.
async fn process_travels(state: &AppState, http: Arc<Http>) -> Result<(), AppError> {
    let events = state.travels.tick(Utc::now(), &mut rand::rng());

    for event in events {
        let result = match event {
            TravelEvent::Arrived(travel) => arrive(state, http.clone(), travel).await,
            TravelEvent::Encounter { travel, encounter } => {
                report_encounter(state, &http, &travel, encounter).await
            }
        };

        if let Err(e) = result {
            tracing::error!("Failed to process travel event: {:?}", e);
        }
    }

    Ok(())
}

/// Moves the traveler into the destination and saves the character.
///
/// # Returns
/// - `Ok(Location)` - The destination, also when the character no longer exists
/// - `Err(AppError)` - Loading or saving the character failed
pub async fn complete_arrival(state: &AppState, travel: &Travel) -> Result<Location, AppError> {
    let destination = travel.destination();

    match state.characters.get(travel.character_id).await? {
        Some(mut character) => {
            character.location = destination.clone();
            state.characters.put(character).await?;
            tracing::info!("User {} arrived at {}", travel.character_id, destination);
        }
        None => tracing::warn!(
            "Character {} arrived at {} but no longer exists",
            travel.character_id,
            destination
        ),
    }

    Ok(destination)
}

/// Puts the items of an encounter into the traveler's inventory and saves it.
///
/// Returns `None` when the character no longer exists.
pub async fn collect_encounter(
    state: &AppState,
    travel: &Travel,
    encounter: Encounter,
) -> Result<Option<EncounterOutcome>, AppError> {
    let Some(mut character) = state.characters.get(travel.character_id).await? else {
        return Ok(None);
    };

    let outcome = encounter.collect(&mut character.inventory);
    state.characters.put(character).await?;

    tracing::debug!(
        "User {} found {}x {} on the road",
        travel.character_id,
        encounter.amount,
        encounter.item
    );

    Ok(Some(outcome))
}

/// Announces the arrival and schedules the thread for deletion.
async fn arrive(state: &AppState, http: Arc<Http>, travel: Travel) -> Result<(), AppError> {
    let destination = complete_arrival(state, &travel).await?;

    let Some(thread) = thread_of(&travel) else {
        return Ok(());
    };

    let message = state.translations.translate_with(
        &travel.language,
        "travel.arrived",
        &placeholders([("destination", destination.town)]),
    );
    thread.say(&http, message).await?;

    tokio::spawn(async move {
        tokio::time::sleep(THREAD_DELETE_DELAY).await;
        if let Err(e) = thread.delete(&http).await {
            tracing::warn!("Failed to delete travel thread {}: {:?}", thread, e);
        }
    });

    Ok(())
}

async fn report_encounter(
    state: &AppState,
    http: &Arc<Http>,
    travel: &Travel,
    encounter: Encounter,
) -> Result<(), AppError> {
    let Some(outcome) = collect_encounter(state, travel, encounter).await? else {
        return Ok(());
    };

    if let Some(thread) = thread_of(travel) {
        let message = encounter.message(outcome, state.translations.as_ref(), &travel.language);
        thread.say(http, message).await?;
    }

    Ok(())
}

/// Ends every journey and deletes their threads, used on shutdown.
///
/// Characters stay in the town they left.
pub async fn stop_travels(state: &AppState, http: &Http) {
    let travels = state.travels.stop();
    if travels.is_empty() {
        return;
    }

    tracing::info!("Cancelling {} travels", travels.len());

    for thread in travels.iter().filter_map(thread_of) {
        if let Err(e) = thread.delete(http).await {
            tracing::warn!("Failed to delete travel thread {}: {:?}", thread, e);
        }
    }
}

fn thread_of(travel: &Travel) -> Option<ChannelId> {
    (travel.thread_id != 0).then(|| ChannelId::new(travel.thread_id))
}

#[cfg(test)]
mod tests {
    use chrono::{DateTime, Duration as ChronoDuration};
    use rand::{rngs::StdRng, SeedableRng};
    use test_utils::builder::TestBuilder;

    use super::*;
    use crate::{
        data::character::CharacterRepository,
        model::{
            character::Character, item::Item, location::SpecialLocation, town::Connection,
        },
    };

    fn travel(start: DateTime<Utc>) -> Travel {
        Travel::new(
            3,
            "en-US",
            "Lakevale",
            Connection::new("Wharfwind:PORT", 760),
            0,
            start,
            ChronoDuration::seconds(60),
        )
    }

    #[test]
    fn skips_tick_while_previous_runs() {
        let gate = TickGate::default();

        let running = gate.try_enter();
        assert!(running.is_some());
        assert!(gate.clone().try_enter().is_none());

        drop(running);
        assert!(gate.try_enter().is_some());
    }

    #[tokio::test]
    async fn arrival_moves_and_saves_character() -> Result<(), AppError> {
        let test = TestBuilder::new()
            .with_character_tables()
            .build()
            .await
            .unwrap();
        let db = test.db.as_ref().unwrap();
        let state = AppState::new(db.clone());

        let mut character = Character::new(3, "en-US", "Ada", "Stone");
        character.location = Location::town_center("Lakevale");
        state.characters.create(character).await?;

        let start = DateTime::from_timestamp(1_700_000_000, 0).unwrap();
        state.travels.add(travel(start));

        let events = state
            .travels
            .tick(start + ChronoDuration::seconds(60), &mut StdRng::seed_from_u64(5));
        let arrived = events
            .into_iter()
            .find_map(|event| match event {
                TravelEvent::Arrived(travel) => Some(travel),
                TravelEvent::Encounter { .. } => None,
            })
            .unwrap();
        assert!(!state.travels.is_traveling(3));

        let destination = complete_arrival(&state, &arrived).await?;
        assert_eq!(destination, Location::new("Wharfwind", SpecialLocation::Port));

        let stored = CharacterRepository::new(db).find(3).await?.unwrap();
        assert_eq!(stored.location, destination);

        Ok(())
    }

    #[tokio::test]
    async fn arrival_of_deleted_character_is_ignored() -> Result<(), AppError> {
        let test = TestBuilder::new()
            .with_character_tables()
            .build()
            .await
            .unwrap();
        let db = test.db.as_ref().unwrap();
        let state = AppState::new(db.clone());

        let travel = travel(Utc::now());
        complete_arrival(&state, &travel).await?;

        assert!(CharacterRepository::new(db).find(3).await?.is_none());

        Ok(())
    }

    #[tokio::test]
    async fn encounter_items_are_saved() -> Result<(), AppError> {
        let test = TestBuilder::new()
            .with_character_tables()
            .build()
            .await
            .unwrap();
        let db = test.db.as_ref().unwrap();
        let state = AppState::new(db.clone());

        state
            .characters
            .create(Character::new(3, "en-US", "Ada", "Stone"))
            .await?;

        let encounter = Encounter {
            item: Item::Pebble,
            amount: 4,
        };
        let outcome = collect_encounter(&state, &travel(Utc::now()), encounter).await?;
        assert_eq!(outcome, Some(EncounterOutcome::Found));

        let stored = CharacterRepository::new(db).find(3).await?.unwrap();
        assert_eq!(stored.inventory.item_amount(Item::Pebble), 4);

        Ok(())
    }
}
