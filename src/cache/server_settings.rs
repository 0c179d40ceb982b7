//! Cache of per-server settings.

use sea_orm::{DatabaseConnection, DbErr};

use crate::{
    cache::SnapshotMap,
    data::server_settings::ServerSettingsRepository,
    model::{
        guild::Guild,
        settings::{GuildRole, ServerSettings},
    },
};

/// Settings keyed by Discord server ID, loaded on first access.
pub struct ServerSettingsCache {
    db: DatabaseConnection,
    settings: SnapshotMap<u64, ServerSettings>,
}

impl ServerSettingsCache {
    pub fn new(db: DatabaseConnection) -> Self {
        Self {
            db,
            settings: SnapshotMap::default(),
        }
    }

    /// Settings of a server, defaults when it was never set up.
    ///
    /// # Arguments
    /// - `guild_id` - Discord ID of the server
    ///
    /// # Returns
    /// - `Ok(ServerSettings)` - Cached, stored or default settings
    /// - `Err(DbErr)` - Database error while loading uncached settings
    pub async fn get(&self, guild_id: u64) -> Result<ServerSettings, DbErr> {
        if let Some(settings) = self.settings.get(&guild_id) {
            return Ok(settings);
        }

        let settings = ServerSettingsRepository::new(&self.db)
            .find(guild_id)
            .await?
            .unwrap_or_else(|| ServerSettings::new(guild_id));

        self.settings.insert(guild_id, settings.clone());

        Ok(settings)
    }

    /// Persists settings with their guild roles and chat rooms, then caches them.
    pub async fn put(&self, settings: ServerSettings) -> Result<(), DbErr> {
        let repo = ServerSettingsRepository::new(&self.db);

        repo.upsert(&settings).await?;
        for role in &settings.guild_roles {
            repo.set_guild_role(settings.guild_id, role.ingame_guild, role.role_id)
                .await?;
        }
        for room in &settings.chat_rooms {
            repo.set_chat_room(settings.guild_id, room).await?;
        }

        self.settings.insert(settings.guild_id, settings);

        Ok(())
    }

    /// Role of an in-game guild on every server that configured one.
    ///
    /// Reads from the database since servers the bot has not seen since the
    /// last restart are not cached.
    pub async fn guild_roles_for(&self, guild: Guild) -> Result<Vec<GuildRole>, DbErr> {
        ServerSettingsRepository::new(&self.db)
            .guild_roles_for(guild)
            .await
    }

    pub fn invalidate(&self, guild_id: u64) {
        self.settings.remove(&guild_id);
    }
}
