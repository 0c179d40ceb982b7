use sea_orm_migration::{prelude::*, schema::*};

use super::m20260105_000001_create_town_table::Town;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Connection::Table)
                    .if_not_exists()
                    .col(string_len(Connection::TownName, 64))
                    .col(string_len(Connection::Destination, 96))
                    .col(integer(Connection::Distance))
                    .primary_key(
                        Index::create()
                            .col(Connection::TownName)
                            .col(Connection::Destination),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_connection_town_name")
                            .from(Connection::Table, Connection::TownName)
                            .to(Town::Table, Town::Name)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Connection::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Connection {
    #[sea_orm(iden = "connections")]
    Table,
    TownName,
    Destination,
    Distance,
}
