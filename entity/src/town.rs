use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "towns")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub name: String,
    pub x: f64,
    pub y: f64,
    pub town_type: String,
    pub population: i32,
    pub temperature: i32,
    pub humidity: i32,
    pub capital: bool,
    pub citadel: bool,
    pub plaza: bool,
    pub port: bool,
    pub shanty: bool,
    pub temple: bool,
    pub walls: bool,
    pub blacksmith: bool,
    pub herb_garden: bool,
    pub merchants_guild: bool,
    pub adventurers_guild: bool,
    pub blacksmiths_guild: bool,
    pub herbologists_guild: bool,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::connection::Entity")]
    Connection,
}

impl Related<super::connection::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Connection.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
