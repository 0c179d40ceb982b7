use crate::{
    data::server_settings::ServerSettingsRepository,
    model::{
        guild::Guild,
        settings::{ChannelKind, ChatRoom, ChatRoomType, ServerSettings, SystemAnnouncement},
    },
};
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

mod find;
mod guild_roles_for;
mod set_chat_room;
mod set_guild_role;
mod upsert;
