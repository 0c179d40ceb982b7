use crate::{
    data::character::CharacterRepository,
    model::{
        character::Character,
        guild::Guild,
        item::Item,
        location::{Location, SpecialLocation},
        skill::{IRON_SKIN, SWIFT_FEET},
    },
};
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

mod count;
mod delete;
mod find;
mod save;
