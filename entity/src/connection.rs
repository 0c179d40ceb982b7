use sea_orm::entity::prelude::*;

/// A one-way route from `town_name` to `destination`.
///
/// `destination` is a location string, either a bare town name or
/// `Town:SPECIAL` (e.g. `Wharfwind:PORT`).
#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "connections")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub town_name: String,
    #[sea_orm(primary_key, auto_increment = false)]
    pub destination: String,
    pub distance: i32,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::town::Entity",
        from = "Column::TownName",
        to = "super::town::Column::Name",
        on_update = "Cascade",
        on_delete = "Cascade"
    )]
    Town,
}

impl Related<super::town::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Town.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
