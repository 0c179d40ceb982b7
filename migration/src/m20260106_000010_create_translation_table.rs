use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Translation::Table)
                    .if_not_exists()
                    .col(string_len(Translation::LanguageCode, 8))
                    .col(string_len(Translation::MessageKey, 128))
                    .col(text(Translation::Message))
                    .primary_key(
                        Index::create()
                            .col(Translation::LanguageCode)
                            .col(Translation::MessageKey),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Translation::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Translation {
    #[sea_orm(iden = "translations")]
    Table,
    LanguageCode,
    MessageKey,
    Message,
}
