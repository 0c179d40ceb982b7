//! Character creation and the first-time setup flow.

use crate::{
    cache::character::CharacterCache,
    error::{domain::DomainError, AppError},
    model::{
        character::{is_valid_name, Character},
        skill::{starter_skill, Skill},
    },
};

pub struct CharacterService<'a> {
    characters: &'a CharacterCache,
}

impl<'a> CharacterService<'a> {
    /// Creates a new CharacterService instance.
    ///
    /// # Arguments
    /// - `characters` - Cache the service reads and writes characters through
    pub fn new(characters: &'a CharacterCache) -> Self {
        Self { characters }
    }

    /// Creates a character with default stats in the starting town.
    ///
    /// Names are trimmed and must be 1 to 32 characters long.
    ///
    /// # Arguments
    /// - `discord_client_id` - Discord ID of the user creating the character
    /// - `language` - Language chosen during setup
    /// - `first_name` / `last_name` - Values typed into the creator modal
    ///
    /// # Returns
    /// - `Ok(Character)` - The stored character
    /// - `Err(AppError::DomainErr(InvalidName))` - A name is empty or too long
    /// - `Err(AppError::DomainErr(CharacterExists))` - The user already has a character
    /// - `Err(AppError::DbErr)` - Database error while loading or saving
    pub async fn create_new_character(
        &self,
        discord_client_id: u64,
        language: &str,
        first_name: &str,
        last_name: &str,
    ) -> Result<Character, AppError> {
        for name in [first_name, last_name] {
            if !is_valid_name(name) {
                return Err(DomainError::InvalidName(name.to_string()).into());
            }
        }

        if self.characters.get(discord_client_id).await?.is_some() {
            return Err(DomainError::CharacterExists.into());
        }

        let character = Character::new(
            discord_client_id,
            language,
            first_name.trim(),
            last_name.trim(),
        );
        self.characters.create(character.clone()).await?;

        tracing::info!(
            "Created character {} for user {}",
            character.full_name(),
            discord_client_id
        );

        Ok(character)
    }

    /// Teaches a freshly created character one skill of the starter set.
    ///
    /// # Arguments
    /// - `discord_client_id` - Discord ID of the owning user
    /// - `skill_name` - Name of a skill from the starter set
    ///
    /// # Returns
    /// - `Ok((Character, &Skill))` - Updated character and the learned skill
    /// - `Err(AppError::DomainErr(NoCharacter))` - The user has no character
    /// - `Err(AppError::DomainErr(AlreadyChoseSkill))` - The character already knows a skill
    /// - `Err(AppError::DomainErr(UnknownSkill))` - `skill_name` is not a starter skill
    pub async fn choose_starter_skill(
        &self,
        discord_client_id: u64,
        skill_name: &str,
    ) -> Result<(Character, &'static Skill), AppError> {
        let mut character = self
            .characters
            .get(discord_client_id)
            .await?
            .ok_or(DomainError::NoCharacter)?;

        if !character.skills.is_empty() {
            return Err(DomainError::AlreadyChoseSkill.into());
        }

        let (skill, level) = starter_skill(skill_name)
            .ok_or_else(|| DomainError::UnknownSkill(skill_name.to_string()))?;

        character.set_skill(skill, skill.level_to_experience(level));
        self.characters.put(character.clone()).await?;

        Ok((character, skill))
    }

    /// Changes the language messages are shown in for this character.
    pub async fn set_language(
        &self,
        discord_client_id: u64,
        language: &str,
    ) -> Result<Character, AppError> {
        let mut character = self
            .characters
            .get(discord_client_id)
            .await?
            .ok_or(DomainError::NoCharacter)?;

        character.language = language.to_string();
        self.characters.put(character.clone()).await?;

        Ok(character)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{location::Location, skill::SWIFT_FEET, town::DEFAULT_TOWN};
    use test_utils::builder::TestBuilder;

    #[tokio::test]
    async fn creates_character_once() -> Result<(), AppError> {
        let test = TestBuilder::new()
            .with_character_tables()
            .build()
            .await
            .unwrap();
        let db = test.db.as_ref().unwrap();

        let cache = CharacterCache::new(db.clone());
        let service = CharacterService::new(&cache);

        let character = service
            .create_new_character(1, "de-DE", " Ada ", "Stone")
            .await?;
        assert_eq!(character.first_name, "Ada");
        assert_eq!(character.language, "de-DE");
        assert_eq!(character.location, Location::town_center(DEFAULT_TOWN));
        assert_eq!(cache.total_created(), 1);

        let again = service.create_new_character(1, "en-US", "Bob", "Stone").await;
        assert!(matches!(
            again,
            Err(AppError::DomainErr(DomainError::CharacterExists))
        ));

        Ok(())
    }

    #[tokio::test]
    async fn rejects_invalid_names() -> Result<(), AppError> {
        let test = TestBuilder::new()
            .with_character_tables()
            .build()
            .await
            .unwrap();
        let db = test.db.as_ref().unwrap();

        let cache = CharacterCache::new(db.clone());
        let service = CharacterService::new(&cache);

        let result = service.create_new_character(1, "en-US", "", "Stone").await;
        assert!(matches!(
            result,
            Err(AppError::DomainErr(DomainError::InvalidName(_)))
        ));

        let long = "x".repeat(33);
        let result = service.create_new_character(1, "en-US", "Ada", &long).await;
        assert!(matches!(
            result,
            Err(AppError::DomainErr(DomainError::InvalidName(_)))
        ));
        assert!(cache.get(1).await?.is_none());

        Ok(())
    }

    #[tokio::test]
    async fn chooses_starter_skill_once() -> Result<(), AppError> {
        let test = TestBuilder::new()
            .with_character_tables()
            .build()
            .await
            .unwrap();
        let db = test.db.as_ref().unwrap();

        let cache = CharacterCache::new(db.clone());
        let service = CharacterService::new(&cache);

        let missing = service.choose_starter_skill(1, "SWIFT_FEET").await;
        assert!(matches!(
            missing,
            Err(AppError::DomainErr(DomainError::NoCharacter))
        ));

        service
            .create_new_character(1, "en-US", "Ada", "Stone")
            .await?;

        let unknown = service.choose_starter_skill(1, "FIREBALL").await;
        assert!(matches!(
            unknown,
            Err(AppError::DomainErr(DomainError::UnknownSkill(_)))
        ));

        let (character, skill) = service.choose_starter_skill(1, "SWIFT_FEET").await?;
        assert_eq!(skill, &SWIFT_FEET);
        assert_eq!(SWIFT_FEET.experience_to_level(character.skill_experience(&SWIFT_FEET).unwrap()), 1);
        assert_eq!(character.skilled_stats().agility, 6);

        let twice = service.choose_starter_skill(1, "MEGALUCK").await;
        assert!(matches!(
            twice,
            Err(AppError::DomainErr(DomainError::AlreadyChoseSkill))
        ));

        Ok(())
    }

    #[tokio::test]
    async fn changes_language() -> Result<(), AppError> {
        let test = TestBuilder::new()
            .with_character_tables()
            .build()
            .await
            .unwrap();
        let db = test.db.as_ref().unwrap();

        let cache = CharacterCache::new(db.clone());
        let service = CharacterService::new(&cache);
        service
            .create_new_character(1, "en-US", "Ada", "Stone")
            .await?;

        service.set_language(1, "de-DE").await?;

        let fresh = CharacterCache::new(db.clone());
        assert_eq!(fresh.get(1).await?.map(|c| c.language), Some("de-DE".to_string()));

        Ok(())
    }
}
