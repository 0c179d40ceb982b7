//! Town data repository.
//!
//! Towns are static world data imported by the `migrate` command and read once
//! into the town cache at startup.

use migration::OnConflict;
use sea_orm::{ActiveValue, DatabaseConnection, DbErr, EntityTrait, QueryOrder};

use crate::model::town::Town;

pub struct TownRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> TownRepository<'a> {
    /// Creates a new TownRepository instance.
    ///
    /// # Arguments
    /// - `db` - Reference to the database connection
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Gets every town with its outgoing connections, ordered by name.
    ///
    /// # Returns
    /// - `Ok(Vec<Town>)` - All stored towns, empty before the first import
    /// - `Err(DbErr)` - Database error during query
    pub async fn get_all(&self) -> Result<Vec<Town>, DbErr> {
        let towns = entity::prelude::Town::find()
            .order_by_asc(entity::town::Column::Name)
            .find_with_related(entity::prelude::Connection)
            .all(self.db)
            .await?;

        Ok(towns
            .into_iter()
            .map(|(town, connections)| Town::from_entity(town, connections))
            .collect())
    }

    /// Inserts or updates towns and their connections.
    ///
    /// Connections of an existing town that are not listed anymore are kept;
    /// distances of listed ones are overwritten.
    ///
    /// # Arguments
    /// - `towns` - Towns to write
    ///
    /// # Returns
    /// - `Ok(usize)` - Number of towns written
    /// - `Err(DbErr)` - Database error during upsert
    pub async fn upsert_many(&self, towns: &[Town]) -> Result<usize, DbErr> {
        for town in towns {
            entity::prelude::Town::insert(entity::town::ActiveModel {
                name: ActiveValue::Set(town.name.clone()),
                x: ActiveValue::Set(town.coords.x),
                y: ActiveValue::Set(town.coords.y),
                town_type: ActiveValue::Set(town.town_type.clone()),
                population: ActiveValue::Set(town.population),
                temperature: ActiveValue::Set(town.temperature),
                humidity: ActiveValue::Set(town.humidity),
                capital: ActiveValue::Set(town.features.capital),
                citadel: ActiveValue::Set(town.features.citadel),
                plaza: ActiveValue::Set(town.features.plaza),
                port: ActiveValue::Set(town.features.port),
                shanty: ActiveValue::Set(town.features.shanty),
                temple: ActiveValue::Set(town.features.temple),
                walls: ActiveValue::Set(town.features.walls),
                blacksmith: ActiveValue::Set(town.features.blacksmith),
                herb_garden: ActiveValue::Set(town.features.herb_garden),
                merchants_guild: ActiveValue::Set(town.features.merchants_guild),
                adventurers_guild: ActiveValue::Set(town.features.adventurers_guild),
                blacksmiths_guild: ActiveValue::Set(town.features.blacksmiths_guild),
                herbologists_guild: ActiveValue::Set(town.features.herbologists_guild),
            })
            .on_conflict(
                OnConflict::column(entity::town::Column::Name)
                    .update_columns([
                        entity::town::Column::X,
                        entity::town::Column::Y,
                        entity::town::Column::TownType,
                        entity::town::Column::Population,
                        entity::town::Column::Temperature,
                        entity::town::Column::Humidity,
                        entity::town::Column::Capital,
                        entity::town::Column::Citadel,
                        entity::town::Column::Plaza,
                        entity::town::Column::Port,
                        entity::town::Column::Shanty,
                        entity::town::Column::Temple,
                        entity::town::Column::Walls,
                        entity::town::Column::Blacksmith,
                        entity::town::Column::HerbGarden,
                        entity::town::Column::MerchantsGuild,
                        entity::town::Column::AdventurersGuild,
                        entity::town::Column::BlacksmithsGuild,
                        entity::town::Column::HerbologistsGuild,
                    ])
                    .to_owned(),
            )
            .exec(self.db)
            .await?;

            for connection in &town.connections {
                entity::prelude::Connection::insert(entity::connection::ActiveModel {
                    town_name: ActiveValue::Set(town.name.clone()),
                    destination: ActiveValue::Set(connection.name.clone()),
                    distance: ActiveValue::Set(connection.distance as i32),
                })
                .on_conflict(
                    OnConflict::columns([
                        entity::connection::Column::TownName,
                        entity::connection::Column::Destination,
                    ])
                    .update_column(entity::connection::Column::Distance)
                    .to_owned(),
                )
                .exec(self.db)
                .await?;
            }
        }

        Ok(towns.len())
    }
}
