use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "characters")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub discord_client_id: String,
    pub language: String,
    pub first_name: String,
    pub last_name: String,
    pub noble_title: Option<String>,
    pub money: i64,
    pub location: String,
    pub health_points: i32,
    pub mana_points: i32,
    pub strength: i32,
    pub vitality: i32,
    pub dexterity: i32,
    pub agility: i32,
    pub intelligence: i32,
    pub magic: i32,
    pub charisma: i32,
    pub reputation: i32,
    pub luck: i32,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
