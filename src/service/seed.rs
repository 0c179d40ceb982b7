//! Imports the bundled world data and messages into the database.
//!
//! Run by the `migrate` command. Every import is an upsert, so running it
//! again after editing the resources updates existing rows in place.

use std::collections::HashMap;

use sea_orm::DatabaseConnection;

use crate::{
    data::{town::TownRepository, translation::TranslationRepository},
    error::AppError,
    model::{town::Town, translation::Translation},
};

const TOWNS_JSON: &str = include_str!("../../resources/towns.json");

/// Bundled message files as `(language code, flat key to message JSON object)`.
const TRANSLATIONS_JSON: [(&str, &str); 2] = [
    (
        "en-US",
        include_str!("../../resources/translations/en-US.json"),
    ),
    (
        "de-DE",
        include_str!("../../resources/translations/de-DE.json"),
    ),
];

/// Number of rows written by [`SeedService::import_all`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SeedReport {
    pub towns: usize,
    pub translations: usize,
}

pub struct SeedService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> SeedService<'a> {
    /// Creates a new SeedService instance.
    ///
    /// # Arguments
    /// - `db` - Reference to the database connection
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Imports the bundled towns and translations.
    ///
    /// # Returns
    /// - `Ok(SeedReport)` - Rows written per table
    /// - `Err(AppError::SerdeErr)` - A bundled resource is not valid JSON
    /// - `Err(AppError::DbErr)` - Database error during upsert
    pub async fn import_all(&self) -> Result<SeedReport, AppError> {
        let towns = self.import_towns(&bundled_towns()?).await?;
        let translations = self
            .import_translations(&bundled_translations()?)
            .await?;

        tracing::info!(
            "Imported {} towns and {} translations",
            towns,
            translations
        );

        Ok(SeedReport {
            towns,
            translations,
        })
    }

    pub async fn import_towns(&self, towns: &[Town]) -> Result<usize, AppError> {
        Ok(TownRepository::new(self.db).upsert_many(towns).await?)
    }

    pub async fn import_translations(
        &self,
        translations: &[Translation],
    ) -> Result<usize, AppError> {
        Ok(TranslationRepository::new(self.db)
            .upsert_many(translations)
            .await?)
    }
}

/// Parses the world map shipped with the binary.
pub fn bundled_towns() -> Result<Vec<Town>, serde_json::Error> {
    serde_json::from_str(TOWNS_JSON)
}

/// Parses every bundled message file.
pub fn bundled_translations() -> Result<Vec<Translation>, serde_json::Error> {
    let mut translations = Vec::new();

    for (language_code, json) in TRANSLATIONS_JSON {
        translations.extend(parse_messages(language_code, json)?);
    }

    Ok(translations)
}

fn parse_messages(language_code: &str, json: &str) -> Result<Vec<Translation>, serde_json::Error> {
    let messages: HashMap<String, String> = serde_json::from_str(json)?;

    Ok(messages
        .into_iter()
        .map(|(message_key, message)| Translation {
            language_code: language_code.to_string(),
            message_key,
            message,
        })
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{
        location::SpecialLocation,
        town::{CAPITAL, DEFAULT_TOWN},
    };
    use test_utils::builder::TestBuilder;

    #[test]
    fn bundled_towns_are_connected() {
        let towns = bundled_towns().unwrap();
        assert_eq!(towns.len(), 12);

        let names: Vec<&str> = towns.iter().map(|t| t.name.as_str()).collect();
        assert!(names.contains(&CAPITAL));
        assert!(names.contains(&DEFAULT_TOWN));

        for town in &towns {
            assert!(!town.connections.is_empty(), "{} has no roads", town.name);
            for connection in &town.connections {
                let destination = connection.destination().unwrap();
                assert!(
                    names.contains(&destination.town.as_str()),
                    "{} leads to unknown {}",
                    town.name,
                    connection.name
                );
            }
        }
    }

    #[test]
    fn port_connections_lead_to_ports() {
        let towns = bundled_towns().unwrap();

        for connection in towns.iter().flat_map(|t| &t.connections) {
            let destination = connection.destination().unwrap();
            if destination.special != SpecialLocation::Port {
                continue;
            }
            let target = towns.iter().find(|t| t.name == destination.town).unwrap();
            assert!(target.features.port, "{} has no port", target.name);
        }
    }

    #[test]
    fn every_language_has_a_name() {
        let translations = bundled_translations().unwrap();

        for (language_code, _) in TRANSLATIONS_JSON {
            assert!(translations
                .iter()
                .any(|t| t.language_code == language_code && t.message_key == "translation.name"));
        }
    }

    #[test]
    fn parses_flat_message_objects() {
        let parsed = parse_messages("en-US", r#"{"backpack.next": "Next"}"#).unwrap();
        assert_eq!(
            parsed,
            vec![Translation {
                language_code: "en-US".to_string(),
                message_key: "backpack.next".to_string(),
                message: "Next".to_string(),
            }]
        );

        assert!(parse_messages("en-US", r#"{"nested": {"key": "x"}}"#).is_err());
    }

    #[tokio::test]
    async fn imports_bundled_data_twice() -> Result<(), AppError> {
        let test = TestBuilder::new()
            .with_town_tables()
            .with_table(entity::prelude::Translation)
            .build()
            .await
            .unwrap();
        let db = test.db.as_ref().unwrap();

        let service = SeedService::new(db);
        let first = service.import_all().await?;
        assert_eq!(first.towns, 12);

        service.import_all().await?;

        let towns = TownRepository::new(db).get_all().await?;
        assert_eq!(towns.len(), 12);
        let translations = TranslationRepository::new(db).count().await?;
        assert_eq!(translations as usize, first.translations);

        Ok(())
    }
}
