//! Translation data repository.

use migration::OnConflict;
use sea_orm::{ActiveValue, DatabaseConnection, DbErr, EntityTrait, PaginatorTrait};

use crate::model::translation::Translation;

pub struct TranslationRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> TranslationRepository<'a> {
    /// Creates a new TranslationRepository instance.
    ///
    /// # Arguments
    /// - `db` - Reference to the database connection
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Gets every stored message of every language.
    pub async fn get_all(&self) -> Result<Vec<Translation>, DbErr> {
        let entities = entity::prelude::Translation::find().all(self.db).await?;

        Ok(entities.into_iter().map(Translation::from_entity).collect())
    }

    /// Inserts or overwrites messages by `(language_code, message_key)`.
    ///
    /// # Returns
    /// - `Ok(usize)` - Number of messages written
    /// - `Err(DbErr)` - Database error during upsert
    pub async fn upsert_many(&self, translations: &[Translation]) -> Result<usize, DbErr> {
        for translation in translations {
            entity::prelude::Translation::insert(entity::translation::ActiveModel {
                language_code: ActiveValue::Set(translation.language_code.clone()),
                message_key: ActiveValue::Set(translation.message_key.clone()),
                message: ActiveValue::Set(translation.message.clone()),
            })
            .on_conflict(
                OnConflict::columns([
                    entity::translation::Column::LanguageCode,
                    entity::translation::Column::MessageKey,
                ])
                .update_column(entity::translation::Column::Message)
                .to_owned(),
            )
            .exec(self.db)
            .await?;
        }

        Ok(translations.len())
    }

    pub async fn count(&self) -> Result<u64, DbErr> {
        entity::prelude::Translation::find().count(self.db).await
    }
}
