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
                    .table(CharacterSkill::Table)
                    .if_not_exists()
                    .col(string_len(CharacterSkill::DiscordClientId, 24))
                    .col(string_len(CharacterSkill::SkillName, 32))
                    .col(big_integer(CharacterSkill::Experience).default(0))
                    .primary_key(
                        Index::create()
                            .col(CharacterSkill::DiscordClientId)
                            .col(CharacterSkill::SkillName),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_character_skill_discord_client_id")
                            .from(CharacterSkill::Table, CharacterSkill::DiscordClientId)
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
            .drop_table(Table::drop().table(CharacterSkill::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum CharacterSkill {
    #[sea_orm(iden = "character_skills")]
    Table,
    DiscordClientId,
    SkillName,
    Experience,
}
