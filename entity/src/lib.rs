//! SeaORM entity models for the Fantasy Frontiers database.
//!
//! One module per table. Discord snowflakes are stored as strings and parsed
//! back into `u64` at the repository boundary.

pub mod prelude;

pub mod character;
pub mod character_guild;
pub mod character_skill;
pub mod chat_room;
pub mod connection;
pub mod guild_role;
pub mod inventory;
pub mod server_settings;
pub mod town;
pub mod translation;
