use super::*;

/// Tests deleting a character with satellite rows.
///
/// Expected: Ok(true) and nothing left to load
#[tokio::test]
async fn deletes_character() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_character_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let mut character = Character::new(9, "en-US", "Ada", "Stone");
    character.set_skill(&IRON_SKIN, 5);
    character.join_guild(Guild::AdventurersGuild);

    let repo = CharacterRepository::new(db);
    repo.save(&character).await?;

    assert!(repo.delete(9).await?);
    assert!(repo.find(9).await?.is_none());
    assert_eq!(repo.count().await?, 0);

    Ok(())
}

/// Tests deleting a character that does not exist.
///
/// Expected: Ok(false)
#[tokio::test]
async fn returns_false_for_unknown_character() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_character_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = CharacterRepository::new(db);

    assert!(!repo.delete(404).await?);

    Ok(())
}
