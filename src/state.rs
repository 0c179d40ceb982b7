//! Application state shared by the Discord handlers and the travel scheduler.
//!
//! The state is created once during startup. Every cache sits behind an `Arc` so
//! the bot handler and the scheduler job hold clones of the same caches.

use std::sync::Arc;

use sea_orm::DatabaseConnection;

use crate::{
    cache::{
        character::CharacterCache, server_settings::ServerSettingsCache, town::TownCache,
        translation::TranslationCache,
    },
    service::travel::TravelManager,
};

#[derive(Clone)]
pub struct AppState {
    /// Database connection pool, clones share the pool.
    pub db: DatabaseConnection,

    /// World map, loaded completely at startup.
    pub towns: Arc<TownCache>,

    /// Messages of every language, loaded completely at startup.
    pub translations: Arc<TranslationCache>,

    /// Per-server settings, loaded on first use.
    pub settings: Arc<ServerSettingsCache>,

    /// Characters, loaded on first use.
    pub characters: Arc<CharacterCache>,

    /// Journeys in progress. Not persisted; a restart ends every journey.
    pub travels: Arc<TravelManager>,
}

impl AppState {
    /// Creates the state with empty caches.
    ///
    /// # Arguments
    /// - `db` - Database connection pool
    pub fn new(db: DatabaseConnection) -> Self {
        Self {
            towns: Arc::new(TownCache::new()),
            translations: Arc::new(TranslationCache::new()),
            settings: Arc::new(ServerSettingsCache::new(db.clone())),
            characters: Arc::new(CharacterCache::new(db.clone())),
            travels: Arc::new(TravelManager::new()),
            db,
        }
    }
}
