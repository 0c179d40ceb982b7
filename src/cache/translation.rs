//! Cache of translated messages.
//!
//! Messages are grouped per language. Lookups fall back to the default
//! language and then to the key itself, so a missing translation shows up in
//! chat as its key instead of failing the interaction.

use std::{collections::HashMap, sync::Arc};

use sea_orm::{DatabaseConnection, DbErr};

use crate::{
    cache::SnapshotMap,
    data::translation::TranslationRepository,
    model::{
        character::DEFAULT_LANGUAGE,
        translation::{Translation, Translator},
    },
    util::text::format_placeholders,
};

/// Messages keyed by message key.
pub type Messages = HashMap<String, String>;

#[derive(Default)]
pub struct TranslationCache {
    languages: SnapshotMap<String, Arc<Messages>>,
}

impl TranslationCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replaces the cache with every stored message.
    ///
    /// # Returns
    /// - `Ok(usize)` - Number of messages loaded
    /// - `Err(DbErr)` - Database error during query
    pub async fn load_all(&self, db: &DatabaseConnection) -> Result<usize, DbErr> {
        let translations = TranslationRepository::new(db).get_all().await?;
        let count = translations.len();

        self.replace_all(translations);

        Ok(count)
    }

    /// Replaces the cache with the given messages.
    pub fn replace_all(&self, translations: Vec<Translation>) {
        let mut grouped: HashMap<String, Messages> = HashMap::new();
        for translation in translations {
            grouped
                .entry(translation.language_code)
                .or_default()
                .insert(translation.message_key, translation.message);
        }

        self.languages.replace(
            grouped
                .into_iter()
                .map(|(language, messages)| (language, Arc::new(messages)))
                .collect(),
        );
    }

    /// All messages of one language.
    pub fn language(&self, language: &str) -> Option<Arc<Messages>> {
        self.languages.get(language)
    }

    /// Language codes with at least one message, sorted.
    pub fn languages(&self) -> Vec<String> {
        let mut languages: Vec<String> = self.languages.snapshot().keys().cloned().collect();
        languages.sort();
        languages
    }

    /// Looks up a message and fills in its placeholders.
    pub fn get(&self, language: &str, key: &str, placeholders: &HashMap<&str, String>) -> String {
        format_placeholders(&self.translate(language, key), placeholders)
    }

    fn lookup(&self, language: &str, key: &str) -> Option<String> {
        self.language(language)
            .and_then(|messages| messages.get(key).cloned())
    }

    pub fn contains(&self, language: &str, key: &str) -> bool {
        self.lookup(language, key).is_some()
    }

    pub fn put(&self, translation: Translation) {
        self.languages.update(|languages| {
            let messages = languages.entry(translation.language_code).or_default();
            Arc::make_mut(messages).insert(translation.message_key, translation.message);
        });
    }

    pub fn remove(&self, language: &str, key: &str) -> Option<String> {
        self.languages.update(|languages| {
            languages
                .get_mut(language)
                .and_then(|messages| Arc::make_mut(messages).remove(key))
        })
    }

    pub fn clear(&self) {
        self.languages.clear();
    }
}

impl Translator for TranslationCache {
    fn translate(&self, language: &str, key: &str) -> String {
        self.lookup(language, key)
            .or_else(|| self.lookup(DEFAULT_LANGUAGE, key))
            .unwrap_or_else(|| key.to_string())
    }
}
