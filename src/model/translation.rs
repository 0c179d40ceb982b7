use std::collections::HashMap;

/// A single translated message as stored in the `translations` table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Translation {
    pub language_code: String,
    pub message_key: String,
    pub message: String,
}

impl Translation {
    pub fn from_entity(entity: entity::translation::Model) -> Self {
        Self {
            language_code: entity.language_code,
            message_key: entity.message_key,
            message: entity.message,
        }
    }
}

/// Lookup of translated messages by language and key.
///
/// Implementations fall back to the key itself when no message exists, so
/// callers can always render something.
pub trait Translator {
    fn translate(&self, language: &str, key: &str) -> String;

    fn translate_with(
        &self,
        language: &str,
        key: &str,
        placeholders: &HashMap<&str, String>,
    ) -> String {
        crate::util::text::format_placeholders(&self.translate(language, key), placeholders)
    }
}

/// Identity translator returning keys unchanged; used where no cache is loaded.
pub struct KeyTranslator;

impl Translator for KeyTranslator {
    fn translate(&self, _language: &str, key: &str) -> String {
        key.to_string()
    }
}
