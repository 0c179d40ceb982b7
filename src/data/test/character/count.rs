use super::*;

/// Tests counting stored characters.
///
/// Expected: Ok with 0 for an empty table, then the number of created rows
#[tokio::test]
async fn counts_characters() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_character_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = CharacterRepository::new(db);
    assert_eq!(repo.count().await?, 0);

    factory::create_character(db).await?;
    factory::create_character(db).await?;
    factory::create_character(db).await?;

    assert_eq!(repo.count().await?, 3);

    Ok(())
}
