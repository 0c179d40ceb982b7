use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(ServerSettings::Table)
                    .if_not_exists()
                    .col(string_len(ServerSettings::GuildId, 24).primary_key())
                    .col(string_len(ServerSettings::Language, 8).default("en-US"))
                    .col(string_len(ServerSettings::SystemAnnouncementType, 16).default("NONE"))
                    .col(string_len_null(ServerSettings::SystemAnnouncementChannelId, 24))
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(ServerSettings::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum ServerSettings {
    #[sea_orm(iden = "server_settings")]
    Table,
    GuildId,
    Language,
    SystemAnnouncementType,
    SystemAnnouncementChannelId,
}
