pub use sea_orm_migration::prelude::*;

mod m20260105_000001_create_town_table;
mod m20260105_000002_create_connection_table;
mod m20260105_000003_create_character_table;
mod m20260105_000004_create_character_skill_table;
mod m20260105_000005_create_character_guild_table;
mod m20260105_000006_create_inventory_table;
mod m20260106_000007_create_server_settings_table;
mod m20260106_000008_create_guild_role_table;
mod m20260106_000009_create_chat_room_table;
mod m20260106_000010_create_translation_table;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20260105_000001_create_town_table::Migration),
            Box::new(m20260105_000002_create_connection_table::Migration),
            Box::new(m20260105_000003_create_character_table::Migration),
            Box::new(m20260105_000004_create_character_skill_table::Migration),
            Box::new(m20260105_000005_create_character_guild_table::Migration),
            Box::new(m20260105_000006_create_inventory_table::Migration),
            Box::new(m20260106_000007_create_server_settings_table::Migration),
            Box::new(m20260106_000008_create_guild_role_table::Migration),
            Box::new(m20260106_000009_create_chat_room_table::Migration),
            Box::new(m20260106_000010_create_translation_table::Migration),
        ]
    }
}
