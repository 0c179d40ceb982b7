//! Translation factory for creating translated messages.

use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Creates a translated message.
///
/// # Arguments
/// - `db` - Database connection
/// - `language_code` - Language, e.g. `"en-US"`
/// - `message_key` - Key the message is looked up by
/// - `message` - Translated text, may contain `%placeholder%` markers
///
/// # Returns
/// - `Ok(entity::translation::Model)` - Created translation row
/// - `Err(DbErr)` - Database error during insert
pub async fn create_translation(
    db: &DatabaseConnection,
    language_code: &str,
    message_key: &str,
    message: &str,
) -> Result<entity::translation::Model, DbErr> {
    entity::translation::ActiveModel {
        language_code: ActiveValue::Set(language_code.to_string()),
        message_key: ActiveValue::Set(message_key.to_string()),
        message: ActiveValue::Set(message.to_string()),
    }
    .insert(db)
    .await
}
