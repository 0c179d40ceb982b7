//! Cache of the static world map.

use sea_orm::{DatabaseConnection, DbErr};

use crate::{cache::SnapshotMap, data::town::TownRepository, model::town::Town};

/// Towns keyed by name, loaded once at startup.
#[derive(Default)]
pub struct TownCache {
    towns: SnapshotMap<String, Town>,
}

impl TownCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replaces the cache with every town stored in the database.
    ///
    /// # Returns
    /// - `Ok(usize)` - Number of towns loaded
    /// - `Err(DbErr)` - Database error during query
    pub async fn load_all(&self, db: &DatabaseConnection) -> Result<usize, DbErr> {
        let towns = TownRepository::new(db).get_all().await?;
        let count = towns.len();

        self.towns.replace(
            towns
                .into_iter()
                .map(|town| (town.name.clone(), town))
                .collect(),
        );

        Ok(count)
    }

    pub fn get(&self, name: &str) -> Option<Town> {
        self.towns.get(name)
    }

    pub fn put(&self, town: Town) {
        self.towns.insert(town.name.clone(), town);
    }

    pub fn remove(&self, name: &str) -> Option<Town> {
        self.towns.remove(name)
    }

    pub fn clear(&self) {
        self.towns.clear();
    }

    pub fn len(&self) -> usize {
        self.towns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Sum of the population of every town.
    pub fn total_population(&self) -> i64 {
        self.towns
            .snapshot()
            .values()
            .map(|town| town.population as i64)
            .sum()
    }
}
