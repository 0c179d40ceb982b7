use super::*;

/// Tests loading a character with skills and guild memberships.
///
/// Expected: Ok(Some) with every satellite row mapped into the model
#[tokio::test]
async fn finds_character_with_skills_and_guilds() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_character_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let row = factory::character::CharacterFactory::new(db)
        .name("Ada", "Stone")
        .location("Wharfwind:PORT")
        .skill("SWIFT_FEET", 16)
        .guild("HERBOLOGIES_GUILD", 120)
        .build()
        .await?;
    let id: u64 = row.discord_client_id.parse().unwrap();

    let repo = CharacterRepository::new(db);
    let character = repo.find(id).await?.unwrap();

    assert_eq!(character.discord_client_id, id);
    assert_eq!(character.full_name(), "Ada Stone");
    assert_eq!(
        character.location,
        Location::new("Wharfwind", SpecialLocation::Port)
    );
    assert_eq!(character.skill_experience(&SWIFT_FEET), Some(16));
    assert_eq!(character.guild_card(Guild::HerbologiesGuild).map(|c| c.xp), Some(120));
    assert!(character.inventory.is_empty());

    Ok(())
}

/// Tests loading a user without a character.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_for_unknown_user() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_character_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = CharacterRepository::new(db);

    assert!(repo.find(404).await?.is_none());

    Ok(())
}

/// Tests loading a character whose stored skill name is unknown.
///
/// Expected: Err(DbErr::Custom)
#[tokio::test]
async fn fails_on_unknown_skill() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_character_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let row = factory::character::CharacterFactory::new(db)
        .skill("FIREBALL", 1)
        .build()
        .await?;

    let repo = CharacterRepository::new(db);
    let result = repo.find(row.discord_client_id.parse().unwrap()).await;

    assert!(matches!(result, Err(DbErr::Custom(_))));

    Ok(())
}
