use crate::{
    data::town::TownRepository,
    model::town::{Connection, Town},
};
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

mod get_all;
mod upsert_many;
