use crate::{data::translation::TranslationRepository, model::translation::Translation};
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

mod count;
mod get_all;
mod upsert_many;

fn translation(language_code: &str, message_key: &str, message: &str) -> Translation {
    Translation {
        language_code: language_code.to_string(),
        message_key: message_key.to_string(),
        message: message.to_string(),
    }
}
