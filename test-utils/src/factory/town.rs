//! Town factory for creating test towns and connections.

use crate::factory::helpers::next_id;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test towns with customizable fields.
///
/// Towns default to a generic settlement without any features.
pub struct TownFactory<'a> {
    db: &'a DatabaseConnection,
    name: String,
    temperature: i32,
    humidity: i32,
    walls: bool,
    port: bool,
    herb_garden: bool,
    herbologists_guild: bool,
}

impl<'a> TownFactory<'a> {
    /// Creates a new TownFactory with default values.
    ///
    /// Defaults:
    /// - name: `"Town {id}"`
    /// - temperature: `15`, humidity: `50`
    /// - every feature `false`
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self {
            db,
            name: format!("Town {}", next_id()),
            temperature: 15,
            humidity: 50,
            walls: false,
            port: false,
            herb_garden: false,
            herbologists_guild: false,
        }
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    pub fn climate(mut self, temperature: i32, humidity: i32) -> Self {
        self.temperature = temperature;
        self.humidity = humidity;
        self
    }

    pub fn walls(mut self, walls: bool) -> Self {
        self.walls = walls;
        self
    }

    pub fn port(mut self, port: bool) -> Self {
        self.port = port;
        self
    }

    pub fn herb_garden(mut self, herb_garden: bool) -> Self {
        self.herb_garden = herb_garden;
        self
    }

    pub fn herbologists_guild(mut self, herbologists_guild: bool) -> Self {
        self.herbologists_guild = herbologists_guild;
        self
    }

    /// Builds and inserts the town entity into the database.
    ///
    /// # Returns
    /// - `Ok(entity::town::Model)` - Created town row
    /// - `Err(DbErr)` - Database error during insert
    pub async fn build(self) -> Result<entity::town::Model, DbErr> {
        entity::town::ActiveModel {
            name: ActiveValue::Set(self.name),
            x: ActiveValue::Set(0.0),
            y: ActiveValue::Set(0.0),
            town_type: ActiveValue::Set("Generic".to_string()),
            population: ActiveValue::Set(100),
            temperature: ActiveValue::Set(self.temperature),
            humidity: ActiveValue::Set(self.humidity),
            capital: ActiveValue::Set(false),
            citadel: ActiveValue::Set(false),
            plaza: ActiveValue::Set(false),
            port: ActiveValue::Set(self.port),
            shanty: ActiveValue::Set(false),
            temple: ActiveValue::Set(false),
            walls: ActiveValue::Set(self.walls),
            blacksmith: ActiveValue::Set(false),
            herb_garden: ActiveValue::Set(self.herb_garden),
            merchants_guild: ActiveValue::Set(false),
            adventurers_guild: ActiveValue::Set(false),
            blacksmiths_guild: ActiveValue::Set(false),
            herbologists_guild: ActiveValue::Set(self.herbologists_guild),
        }
        .insert(self.db)
        .await
    }
}

/// Creates a town with default values.
pub async fn create_town(db: &DatabaseConnection) -> Result<entity::town::Model, DbErr> {
    TownFactory::new(db).build().await
}

/// Creates a one-way connection from an existing town.
///
/// # Arguments
/// - `db` - Database connection
/// - `town_name` - Name of the town the road starts in
/// - `destination` - Location string of the destination
/// - `distance` - Road length
///
/// # Returns
/// - `Ok(entity::connection::Model)` - Created connection row
/// - `Err(DbErr)` - Database error during insert, e.g. unknown `town_name`
pub async fn create_connection(
    db: &DatabaseConnection,
    town_name: &str,
    destination: &str,
    distance: i32,
) -> Result<entity::connection::Model, DbErr> {
    entity::connection::ActiveModel {
        town_name: ActiveValue::Set(town_name.to_string()),
        destination: ActiveValue::Set(destination.to_string()),
        distance: ActiveValue::Set(distance),
    }
    .insert(db)
    .await
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::builder::TestBuilder;

    #[tokio::test]
    async fn creates_unique_towns() -> Result<(), DbErr> {
        let test = TestBuilder::new().with_town_tables().build().await.unwrap();
        let db = test.db.as_ref().unwrap();

        let first = create_town(db).await?;
        let second = create_town(db).await?;

        assert_ne!(first.name, second.name);
        assert!(!first.walls);

        Ok(())
    }

    #[tokio::test]
    async fn creates_connection_between_towns() -> Result<(), DbErr> {
        let test = TestBuilder::new().with_town_tables().build().await.unwrap();
        let db = test.db.as_ref().unwrap();

        let town = TownFactory::new(db).name("Lakevale").build().await?;
        let connection = create_connection(db, &town.name, "Brookfield", 950).await?;

        assert_eq!(connection.town_name, "Lakevale");
        assert_eq!(connection.distance, 950);

        Ok(())
    }
}
