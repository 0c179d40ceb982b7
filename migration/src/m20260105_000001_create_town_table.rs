use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Town::Table)
                    .if_not_exists()
                    .col(string_len(Town::Name, 64).primary_key())
                    .col(double(Town::X))
                    .col(double(Town::Y))
                    .col(string(Town::TownType).default("Generic"))
                    .col(integer(Town::Population))
                    .col(integer(Town::Temperature).default(15))
                    .col(integer(Town::Humidity).default(50))
                    .col(boolean(Town::Capital).default(false))
                    .col(boolean(Town::Citadel).default(false))
                    .col(boolean(Town::Plaza).default(false))
                    .col(boolean(Town::Port).default(false))
                    .col(boolean(Town::Shanty).default(false))
                    .col(boolean(Town::Temple).default(false))
                    .col(boolean(Town::Walls).default(false))
                    .col(boolean(Town::Blacksmith).default(false))
                    .col(boolean(Town::HerbGarden).default(false))
                    .col(boolean(Town::MerchantsGuild).default(false))
                    .col(boolean(Town::AdventurersGuild).default(false))
                    .col(boolean(Town::BlacksmithsGuild).default(false))
                    .col(boolean(Town::HerbologistsGuild).default(false))
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Town::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Town {
    #[sea_orm(iden = "towns")]
    Table,
    Name,
    X,
    Y,
    TownType,
    Population,
    Temperature,
    Humidity,
    Capital,
    Citadel,
    Plaza,
    Port,
    Shanty,
    Temple,
    Walls,
    Blacksmith,
    HerbGarden,
    MerchantsGuild,
    AdventurersGuild,
    BlacksmithsGuild,
    HerbologistsGuild,
}
