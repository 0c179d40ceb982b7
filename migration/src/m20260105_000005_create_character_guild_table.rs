use sea_orm_migration::{prelude::*, schema::*};

use super::m20260105_000003_create_character_table::Character;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(CharacterGuild::Table)
                    .if_not_exists()
                    .col(string_len(CharacterGuild::DiscordClientId, 24))
                    .col(string_len(CharacterGuild::GuildName, 32))
                    .col(big_integer(CharacterGuild::Experience).default(0))
                    .primary_key(
                        Index::create()
                            .col(CharacterGuild::DiscordClientId)
                            .col(CharacterGuild::GuildName),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_character_guild_discord_client_id")
                            .from(CharacterGuild::Table, CharacterGuild::DiscordClientId)
                            .to(Character::Table, Character::DiscordClientId)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(CharacterGuild::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum CharacterGuild {
    #[sea_orm(iden = "character_guilds")]
    Table,
    DiscordClientId,
    GuildName,
    Experience,
}
