use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(GuildRole::Table)
                    .if_not_exists()
                    .col(string_len(GuildRole::GuildId, 24))
                    .col(string_len(GuildRole::IngameGuild, 32))
                    .col(string_len(GuildRole::RoleId, 24))
                    .primary_key(
                        Index::create()
                            .col(GuildRole::GuildId)
                            .col(GuildRole::IngameGuild),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(GuildRole::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum GuildRole {
    #[sea_orm(iden = "guild_roles")]
    Table,
    GuildId,
    IngameGuild,
    RoleId,
}
