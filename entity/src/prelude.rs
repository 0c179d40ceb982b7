pub use super::character::Entity as Character;
pub use super::character_guild::Entity as CharacterGuild;
pub use super::character_skill::Entity as CharacterSkill;
pub use super::chat_room::Entity as ChatRoom;
pub use super::connection::Entity as Connection;
pub use super::guild_role::Entity as GuildRole;
pub use super::inventory::Entity as Inventory;
pub use super::server_settings::Entity as ServerSettings;
pub use super::town::Entity as Town;
pub use super::translation::Entity as Translation;
