//! Server settings factory for creating test configuration rows.

use crate::factory::helpers::next_id;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test server settings.
pub struct ServerSettingsFactory<'a> {
    db: &'a DatabaseConnection,
    guild_id: String,
    language: String,
    system_announcement_type: String,
    system_announcement_channel_id: Option<String>,
}

impl<'a> ServerSettingsFactory<'a> {
    /// Creates a new ServerSettingsFactory with default values.
    ///
    /// Defaults:
    /// - guild_id: auto-incremented number
    /// - language: `"en-US"`
    /// - system announcements turned off
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self {
            db,
            guild_id: next_id().to_string(),
            language: "en-US".to_string(),
            system_announcement_type: "NONE".to_string(),
            system_announcement_channel_id: None,
        }
    }

    pub fn guild_id(mut self, guild_id: impl Into<String>) -> Self {
        self.guild_id = guild_id.into();
        self
    }

    pub fn language(mut self, language: impl Into<String>) -> Self {
        self.language = language.into();
        self
    }

    /// Sends system announcements to the given channel.
    pub fn announcement_channel(mut self, channel_id: impl Into<String>) -> Self {
        self.system_announcement_type = "CHANNEL".to_string();
        self.system_announcement_channel_id = Some(channel_id.into());
        self
    }

    /// Builds and inserts the settings row.
    ///
    /// # Returns
    /// - `Ok(entity::server_settings::Model)` - Created settings row
    /// - `Err(DbErr)` - Database error during insert
    pub async fn build(self) -> Result<entity::server_settings::Model, DbErr> {
        entity::server_settings::ActiveModel {
            guild_id: ActiveValue::Set(self.guild_id),
            language: ActiveValue::Set(self.language),
            system_announcement_type: ActiveValue::Set(self.system_announcement_type),
            system_announcement_channel_id: ActiveValue::Set(self.system_announcement_channel_id),
        }
        .insert(self.db)
        .await
    }
}

/// Creates server settings with default values.
pub async fn create_server_settings(
    db: &DatabaseConnection,
) -> Result<entity::server_settings::Model, DbErr> {
    ServerSettingsFactory::new(db).build().await
}

/// Creates a guild role mapping with a generated role id.
///
/// # Arguments
/// - `db` - Database connection
/// - `guild_id` - Discord ID of the server
/// - `ingame_guild` - In-game guild name, e.g. `"MERCHANTS_GUILD"`
///
/// # Returns
/// - `Ok(entity::guild_role::Model)` - Created mapping
/// - `Err(DbErr)` - Database error during insert
pub async fn create_guild_role(
    db: &DatabaseConnection,
    guild_id: &str,
    ingame_guild: &str,
) -> Result<entity::guild_role::Model, DbErr> {
    entity::guild_role::ActiveModel {
        guild_id: ActiveValue::Set(guild_id.to_string()),
        ingame_guild: ActiveValue::Set(ingame_guild.to_string()),
        role_id: ActiveValue::Set(next_id().to_string()),
    }
    .insert(db)
    .await
}
