use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Character::Table)
                    .if_not_exists()
                    .col(string_len(Character::DiscordClientId, 24).primary_key())
                    .col(string_len(Character::Language, 8).default("en-US"))
                    .col(string_len(Character::FirstName, 32))
                    .col(string_len(Character::LastName, 32))
                    .col(string_len_null(Character::NobleTitle, 16))
                    .col(big_integer(Character::Money).default(0))
                    .col(string_len(Character::Location, 96).default("MistMeadow"))
                    .col(integer(Character::HealthPoints).default(20))
                    .col(integer(Character::ManaPoints).default(20))
                    .col(integer(Character::Strength).default(1))
                    .col(integer(Character::Vitality).default(1))
                    .col(integer(Character::Dexterity).default(1))
                    .col(integer(Character::Agility).default(1))
                    .col(integer(Character::Intelligence).default(1))
                    .col(integer(Character::Magic).default(1))
                    .col(integer(Character::Charisma).default(1))
                    .col(integer(Character::Reputation).default(0))
                    .col(integer(Character::Luck).default(1))
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Character::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Character {
    #[sea_orm(iden = "characters")]
    Table,
    DiscordClientId,
    Language,
    FirstName,
    LastName,
    NobleTitle,
    Money,
    Location,
    HealthPoints,
    ManaPoints,
    Strength,
    Vitality,
    Dexterity,
    Agility,
    Intelligence,
    Magic,
    Charisma,
    Reputation,
    Luck,
}
