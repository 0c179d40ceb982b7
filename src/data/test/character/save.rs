use super::*;

/// Tests saving a new character and reading it back.
///
/// Expected: Ok with character, skills, guilds and inventory persisted
#[tokio::test]
async fn saves_new_character() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_character_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let mut character = Character::new(42, "de-DE", "Ada", "Stone");
    character.set_skill(&IRON_SKIN, 5);
    character.join_guild(Guild::MerchantsGuild);
    character.inventory.add_item(Item::Moonleaf, 3);
    character.money = 250;

    let repo = CharacterRepository::new(db);
    repo.save(&character).await?;

    let stored = repo.find(42).await?.unwrap();
    assert_eq!(stored, character);

    Ok(())
}

/// Tests that saving again overwrites fields and replaces skill and guild rows.
///
/// Expected: Ok with the second state persisted and no stale rows left
#[tokio::test]
async fn overwrites_existing_character() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_character_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = CharacterRepository::new(db);

    let mut character = Character::new(7, "en-US", "Ada", "Stone");
    character.set_skill(&IRON_SKIN, 5);
    character.join_guild(Guild::MerchantsGuild);
    repo.save(&character).await?;

    character.skills.clear();
    character.set_skill(&SWIFT_FEET, 1);
    character.guild_cards.clear();
    character.location = Location::new("Lakevale", SpecialLocation::Gate);
    character.inventory.add_item(Item::Pebble, 2);
    repo.save(&character).await?;

    let stored = repo.find(7).await?.unwrap();
    assert_eq!(stored.skills.len(), 1);
    assert_eq!(stored.skill_experience(&SWIFT_FEET), Some(1));
    assert!(stored.guild_cards.is_empty());
    assert_eq!(stored.location.to_string(), "Lakevale:GATE");
    assert_eq!(stored.inventory.item_amount(Item::Pebble), 2);
    assert_eq!(repo.count().await?, 1);

    Ok(())
}

/// Tests that a failing write leaves no partial character behind.
///
/// The inventory table is missing, so the last write of the save fails.
///
/// Expected: Err with neither the character row nor its skill rows stored
#[tokio::test]
async fn rolls_back_when_a_write_fails() -> Result<(), DbErr> {
    use sea_orm::{EntityTrait, PaginatorTrait};

    let test = TestBuilder::new()
        .with_table(entity::prelude::Character)
        .with_table(entity::prelude::CharacterSkill)
        .with_table(entity::prelude::CharacterGuild)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let mut character = Character::new(9, "en-US", "Ada", "Stone");
    character.set_skill(&IRON_SKIN, 5);
    character.join_guild(Guild::MerchantsGuild);

    let repo = CharacterRepository::new(db);
    assert!(repo.save(&character).await.is_err());

    assert_eq!(entity::prelude::Character::find().count(db).await?, 0);
    assert_eq!(entity::prelude::CharacterSkill::find().count(db).await?, 0);
    assert_eq!(entity::prelude::CharacterGuild::find().count(db).await?, 0);

    Ok(())
}
