//! Server settings data repository.
//!
//! Settings of a Discord server live in `server_settings` with two satellite
//! tables: `guild_roles` mapping in-game guilds to Discord roles and
//! `discord_chat_rooms` mapping chat room types to channels.

use migration::OnConflict;
use sea_orm::{ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait, QueryFilter};

use crate::model::{
    guild::Guild,
    settings::{ChatRoom, GuildRole, ServerSettings},
};

/// Repository providing database operations for per-server configuration.
pub struct ServerSettingsRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> ServerSettingsRepository<'a> {
    /// Creates a new ServerSettingsRepository instance.
    ///
    /// # Arguments
    /// - `db` - Reference to the database connection
    ///
    /// # Returns
    /// - `ServerSettingsRepository` - New repository instance
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Loads the settings of a server including guild roles and chat rooms.
    ///
    /// # Arguments
    /// - `guild_id` - Discord ID of the server
    ///
    /// # Returns
    /// - `Ok(Some(ServerSettings))` - The server has been set up
    /// - `Ok(None)` - No settings stored for this server
    /// - `Err(DbErr)` - Database error or a stored value that fails to parse
    pub async fn find(&self, guild_id: u64) -> Result<Option<ServerSettings>, DbErr> {
        let id = guild_id.to_string();

        let Some(entity) = entity::prelude::ServerSettings::find_by_id(id.clone())
            .one(self.db)
            .await?
        else {
            return Ok(None);
        };

        let guild_roles = entity::prelude::GuildRole::find()
            .filter(entity::guild_role::Column::GuildId.eq(id.as_str()))
            .all(self.db)
            .await?;

        let chat_rooms = entity::prelude::ChatRoom::find()
            .filter(entity::chat_room::Column::GuildId.eq(id.as_str()))
            .all(self.db)
            .await?;

        ServerSettings::from_entities(entity, guild_roles, chat_rooms).map(Some)
    }

    /// Inserts or updates the language and system announcement of a server.
    ///
    /// Guild roles and chat rooms are written through their own setters.
    ///
    /// # Arguments
    /// - `settings` - Settings to persist
    ///
    /// # Returns
    /// - `Ok(())` - Settings row written
    /// - `Err(DbErr)` - Database error during upsert
    pub async fn upsert(&self, settings: &ServerSettings) -> Result<(), DbErr> {
        entity::prelude::ServerSettings::insert(entity::server_settings::ActiveModel {
            guild_id: ActiveValue::Set(settings.guild_id.to_string()),
            language: ActiveValue::Set(settings.language.clone()),
            system_announcement_type: ActiveValue::Set(
                settings.system_announcement.kind.to_string(),
            ),
            system_announcement_channel_id: ActiveValue::Set(
                settings
                    .system_announcement
                    .channel_id
                    .map(|id| id.to_string()),
            ),
        })
        .on_conflict(
            OnConflict::column(entity::server_settings::Column::GuildId)
                .update_columns([
                    entity::server_settings::Column::Language,
                    entity::server_settings::Column::SystemAnnouncementType,
                    entity::server_settings::Column::SystemAnnouncementChannelId,
                ])
                .to_owned(),
        )
        .exec(self.db)
        .await?;

        Ok(())
    }

    /// Maps an in-game guild to a Discord role on a server.
    ///
    /// # Arguments
    /// - `guild_id` - Discord ID of the server
    /// - `guild` - In-game guild
    /// - `role_id` - Discord role granted to members of `guild`
    pub async fn set_guild_role(
        &self,
        guild_id: u64,
        guild: Guild,
        role_id: u64,
    ) -> Result<(), DbErr> {
        entity::prelude::GuildRole::insert(entity::guild_role::ActiveModel {
            guild_id: ActiveValue::Set(guild_id.to_string()),
            ingame_guild: ActiveValue::Set(guild.to_string()),
            role_id: ActiveValue::Set(role_id.to_string()),
        })
        .on_conflict(
            OnConflict::columns([
                entity::guild_role::Column::GuildId,
                entity::guild_role::Column::IngameGuild,
            ])
            .update_column(entity::guild_role::Column::RoleId)
            .to_owned(),
        )
        .exec(self.db)
        .await?;

        Ok(())
    }

    /// Gets the role configured for an in-game guild on every server.
    ///
    /// Used when a character joins a guild to hand out roles across all
    /// servers the player is on.
    ///
    /// # Arguments
    /// - `guild` - In-game guild
    ///
    /// # Returns
    /// - `Ok(Vec<GuildRole>)` - One entry per server with a role for `guild`
    /// - `Err(DbErr)` - Database error or a stored id that fails to parse
    pub async fn guild_roles_for(&self, guild: Guild) -> Result<Vec<GuildRole>, DbErr> {
        let entities = entity::prelude::GuildRole::find()
            .filter(entity::guild_role::Column::IngameGuild.eq(guild.name()))
            .all(self.db)
            .await?;

        entities.into_iter().map(GuildRole::from_entity).collect()
    }

    /// Inserts or updates the chat room of a given type on a server.
    ///
    /// # Arguments
    /// - `guild_id` - Discord ID of the server
    /// - `room` - Chat room type, location kind and channel
    pub async fn set_chat_room(&self, guild_id: u64, room: &ChatRoom) -> Result<(), DbErr> {
        entity::prelude::ChatRoom::insert(entity::chat_room::ActiveModel {
            guild_id: ActiveValue::Set(guild_id.to_string()),
            room_type: ActiveValue::Set(room.room_type.to_string()),
            location_type: ActiveValue::Set(room.location.to_string()),
            channel_id: ActiveValue::Set(room.channel_id.map(|id| id.to_string())),
        })
        .on_conflict(
            OnConflict::columns([
                entity::chat_room::Column::GuildId,
                entity::chat_room::Column::RoomType,
            ])
            .update_columns([
                entity::chat_room::Column::LocationType,
                entity::chat_room::Column::ChannelId,
            ])
            .to_owned(),
        )
        .exec(self.db)
        .await?;

        Ok(())
    }
}
