//! Inventory data repository.
//!
//! Inventories are stored as one JSON document per character in the
//! `inventories` table, keyed by the owner's Discord ID.

use migration::OnConflict;
use sea_orm::{ActiveValue, ConnectionTrait, DatabaseConnection, DbErr, EntityTrait};

use crate::model::inventory::Inventory;

/// Works on a plain connection or inside a transaction opened by the caller.
pub struct InventoryRepository<'a, C = DatabaseConnection> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> InventoryRepository<'a, C> {
    /// Creates a new InventoryRepository instance.
    ///
    /// # Arguments
    /// - `db` - Reference to the database connection or transaction
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Loads the inventory of a character.
    ///
    /// # Returns
    /// - `Ok(Some(Inventory))` - Stored inventory
    /// - `Ok(None)` - Nothing stored for this id
    /// - `Err(DbErr)` - Database error or a document that is not valid inventory JSON
    pub async fn load(&self, id: u64) -> Result<Option<Inventory>, DbErr> {
        let entity = entity::prelude::Inventory::find_by_id(id.to_string())
            .one(self.db)
            .await?;

        entity
            .map(|row| Inventory::from_json(&row.inventory))
            .transpose()
            .map_err(|e| DbErr::Custom(format!("Failed to parse inventory {}: {}", id, e)))
    }

    /// Inserts or replaces the inventory of a character.
    pub async fn save(&self, id: u64, inventory: &Inventory) -> Result<(), DbErr> {
        let json = inventory
            .to_json()
            .map_err(|e| DbErr::Custom(format!("Failed to serialize inventory {}: {}", id, e)))?;

        entity::prelude::Inventory::insert(entity::inventory::ActiveModel {
            id: ActiveValue::Set(id.to_string()),
            inventory: ActiveValue::Set(json),
        })
        .on_conflict(
            OnConflict::column(entity::inventory::Column::Id)
                .update_column(entity::inventory::Column::Inventory)
                .to_owned(),
        )
        .exec(self.db)
        .await?;

        Ok(())
    }

    /// Deletes the inventory of a character, succeeding when none exists.
    pub async fn delete(&self, id: u64) -> Result<(), DbErr> {
        entity::prelude::Inventory::delete_by_id(id.to_string())
            .exec(self.db)
            .await?;

        Ok(())
    }
}
