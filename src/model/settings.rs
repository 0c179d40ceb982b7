//! Per-server configuration made through `/setup`.

use std::{fmt, str::FromStr};

use sea_orm::DbErr;

use crate::{
    error::domain::DomainError,
    model::{character::DEFAULT_LANGUAGE, guild::Guild},
    util::parse::parse_snowflake,
};

/// Where a kind of message is posted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ChannelKind {
    #[default]
    None,
    Channel,
    Thread,
}

impl ChannelKind {
    pub const ALL: [ChannelKind; 3] = [ChannelKind::None, ChannelKind::Channel, ChannelKind::Thread];

    pub fn name(&self) -> &'static str {
        match self {
            ChannelKind::None => "NONE",
            ChannelKind::Channel => "CHANNEL",
            ChannelKind::Thread => "THREAD",
        }
    }
}

impl fmt::Display for ChannelKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for ChannelKind {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|kind| kind.name() == s)
            .ok_or_else(|| DomainError::UnknownSetting(s.to_string()))
    }
}

/// Channel receiving announcements such as newly created characters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SystemAnnouncement {
    pub kind: ChannelKind,
    pub channel_id: Option<u64>,
}

impl SystemAnnouncement {
    /// The channel to post into, if announcements are turned on.
    pub fn target(&self) -> Option<u64> {
        match self.kind {
            ChannelKind::None => None,
            _ => self.channel_id,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum ChatRoomType {
    System,
    Global,
    Town,
    MerchantsGuild,
    AdventurersGuild,
    BlacksmithsGuild,
    HerbologiesGuild,
}

impl ChatRoomType {
    pub const ALL: [ChatRoomType; 7] = [
        ChatRoomType::System,
        ChatRoomType::Global,
        ChatRoomType::Town,
        ChatRoomType::MerchantsGuild,
        ChatRoomType::AdventurersGuild,
        ChatRoomType::BlacksmithsGuild,
        ChatRoomType::HerbologiesGuild,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            ChatRoomType::System => "SYSTEM",
            ChatRoomType::Global => "GLOBAL",
            ChatRoomType::Town => "TOWN",
            ChatRoomType::MerchantsGuild => "MERCHANTS_GUILD",
            ChatRoomType::AdventurersGuild => "ADVENTURERS_GUILD",
            ChatRoomType::BlacksmithsGuild => "BLACKSMITHS_GUILD",
            ChatRoomType::HerbologiesGuild => "HERBOLOGIES_GUILD",
        }
    }

    pub fn translation_key(&self) -> String {
        format!("chatroom.{}", self.name().to_lowercase())
    }
}

impl fmt::Display for ChatRoomType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for ChatRoomType {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|room| room.name().eq_ignore_ascii_case(s))
            .ok_or_else(|| DomainError::UnknownSetting(s.to_string()))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ChatRoom {
    pub room_type: ChatRoomType,
    pub location: ChannelKind,
    pub channel_id: Option<u64>,
}

impl ChatRoom {
    pub fn is_configured(&self) -> bool {
        self.location != ChannelKind::None && self.channel_id.is_some()
    }
}

/// Discord role handed out to members of an in-game guild.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GuildRole {
    pub guild_id: u64,
    pub ingame_guild: Guild,
    pub role_id: u64,
}

impl GuildRole {
    pub fn from_entity(entity: entity::guild_role::Model) -> Result<Self, DbErr> {
        Ok(Self {
            guild_id: parse_snowflake(&entity.guild_id, "guild_id")?,
            ingame_guild: entity
                .ingame_guild
                .parse()
                .map_err(|e: DomainError| DbErr::Custom(e.to_string()))?,
            role_id: parse_snowflake(&entity.role_id, "role_id")?,
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerSettings {
    pub guild_id: u64,
    pub language: String,
    pub system_announcement: SystemAnnouncement,
    pub guild_roles: Vec<GuildRole>,
    pub chat_rooms: Vec<ChatRoom>,
}

impl ServerSettings {
    /// Settings of a server that never ran `/setup`.
    pub fn new(guild_id: u64) -> Self {
        Self {
            guild_id,
            language: DEFAULT_LANGUAGE.to_string(),
            system_announcement: SystemAnnouncement::default(),
            guild_roles: Vec::new(),
            chat_rooms: Vec::new(),
        }
    }

    pub fn guild_role(&self, guild: Guild) -> Option<u64> {
        self.guild_roles
            .iter()
            .find(|role| role.ingame_guild == guild)
            .map(|role| role.role_id)
    }

    pub fn set_guild_role(&mut self, guild: Guild, role_id: u64) {
        self.guild_roles.retain(|role| role.ingame_guild != guild);
        self.guild_roles.push(GuildRole {
            guild_id: self.guild_id,
            ingame_guild: guild,
            role_id,
        });
    }

    pub fn chat_room(&self, room_type: ChatRoomType) -> Option<&ChatRoom> {
        self.chat_rooms.iter().find(|room| room.room_type == room_type)
    }

    pub fn set_chat_room(&mut self, room: ChatRoom) {
        self.chat_rooms.retain(|r| r.room_type != room.room_type);
        self.chat_rooms.push(room);
    }

    /// Rebuilds settings from the `server_settings` row and its satellite rows.
    ///
    /// # Returns
    /// - `Ok(ServerSettings)` - The assembled settings
    /// - `Err(DbErr::Custom)` - A stored id or enum value failed to parse
    pub fn from_entities(
        entity: entity::server_settings::Model,
        guild_roles: Vec<entity::guild_role::Model>,
        chat_rooms: Vec<entity::chat_room::Model>,
    ) -> Result<Self, DbErr> {
        let corrupt = |e: DomainError| DbErr::Custom(e.to_string());

        let channel_id = entity
            .system_announcement_channel_id
            .as_deref()
            .map(|id| parse_snowflake(id, "system_announcement_channel_id"))
            .transpose()?;

        let chat_rooms = chat_rooms
            .into_iter()
            .map(|row| -> Result<ChatRoom, DbErr> {
                Ok(ChatRoom {
                    room_type: row.room_type.parse().map_err(corrupt)?,
                    location: row.location_type.parse().map_err(corrupt)?,
                    channel_id: row
                        .channel_id
                        .as_deref()
                        .map(|id| parse_snowflake(id, "channel_id"))
                        .transpose()?,
                })
            })
            .collect::<Result<Vec<_>, DbErr>>()?;

        Ok(Self {
            guild_id: parse_snowflake(&entity.guild_id, "guild_id")?,
            language: entity.language,
            system_announcement: SystemAnnouncement {
                kind: entity.system_announcement_type.parse().map_err(corrupt)?,
                channel_id,
            },
            guild_roles: guild_roles
                .into_iter()
                .map(GuildRole::from_entity)
                .collect::<Result<Vec<_>, _>>()?,
            chat_rooms,
        })
    }
}
