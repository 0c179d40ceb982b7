//! Cache of loaded characters and the creation counter shown in world statistics.

use std::sync::atomic::{AtomicU64, Ordering};

use sea_orm::{DatabaseConnection, DbErr};

use crate::{
    cache::SnapshotMap, data::character::CharacterRepository, model::character::Character,
};

/// Characters keyed by Discord user ID.
///
/// Absence is cached too, so looking up a user without a character does not
/// hit the database on every button click.
pub struct CharacterCache {
    db: DatabaseConnection,
    characters: SnapshotMap<u64, Option<Character>>,
    total_created: AtomicU64,
}

impl CharacterCache {
    pub fn new(db: DatabaseConnection) -> Self {
        Self {
            db,
            characters: SnapshotMap::default(),
            total_created: AtomicU64::new(0),
        }
    }

    /// Character of a user, loading it on first access.
    ///
    /// # Returns
    /// - `Ok(Some(Character))` - The user has a character
    /// - `Ok(None)` - The user has not created a character yet
    /// - `Err(DbErr)` - Database error while loading
    pub async fn get(&self, discord_client_id: u64) -> Result<Option<Character>, DbErr> {
        if let Some(cached) = self.characters.get(&discord_client_id) {
            return Ok(cached);
        }

        let character = CharacterRepository::new(&self.db)
            .find(discord_client_id)
            .await?;

        self.characters
            .insert(discord_client_id, character.clone());

        Ok(character)
    }

    /// Saves a character and caches the saved state.
    pub async fn put(&self, character: Character) -> Result<(), DbErr> {
        CharacterRepository::new(&self.db).save(&character).await?;

        self.characters
            .insert(character.discord_client_id, Some(character));

        Ok(())
    }

    /// Saves a newly created character and counts it.
    pub async fn create(&self, character: Character) -> Result<(), DbErr> {
        self.put(character).await?;
        self.total_created.fetch_add(1, Ordering::Relaxed);

        Ok(())
    }

    /// Initialises the creation counter from the number of stored characters.
    pub async fn load_statistics(&self) -> Result<u64, DbErr> {
        let count = CharacterRepository::new(&self.db).count().await?;
        self.total_created.store(count, Ordering::Relaxed);

        Ok(count)
    }

    pub fn total_created(&self) -> u64 {
        self.total_created.load(Ordering::Relaxed)
    }
}
