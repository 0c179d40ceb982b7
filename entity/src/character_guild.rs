use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "character_guilds")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub discord_client_id: String,
    #[sea_orm(primary_key, auto_increment = false)]
    pub guild_name: String,
    pub experience: i64,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
