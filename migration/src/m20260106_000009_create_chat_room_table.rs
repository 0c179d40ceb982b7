use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(ChatRoom::Table)
                    .if_not_exists()
                    .col(string_len(ChatRoom::GuildId, 24))
                    .col(string_len(ChatRoom::RoomType, 32))
                    .col(string_len(ChatRoom::LocationType, 16).default("NONE"))
                    .col(string_len_null(ChatRoom::ChannelId, 24))
                    .primary_key(
                        Index::create()
                            .col(ChatRoom::GuildId)
                            .col(ChatRoom::RoomType),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(ChatRoom::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum ChatRoom {
    #[sea_orm(iden = "discord_chat_rooms")]
    Table,
    GuildId,
    RoomType,
    LocationType,
    ChannelId,
}
