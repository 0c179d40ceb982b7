use crate::{
    data::inventory::InventoryRepository,
    model::{inventory::Inventory, item::Item},
};
use sea_orm::DbErr;
use test_utils::builder::TestBuilder;

mod delete;
mod load;
mod save;
