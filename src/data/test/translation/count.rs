use super::*;

/// Tests counting messages across languages.
///
/// Expected: Ok with the number of rows
#[tokio::test]
async fn counts_translations() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Translation)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = TranslationRepository::new(db);
    assert_eq!(repo.count().await?, 0);

    factory::create_translation(db, "en-US", "a", "A").await?;
    factory::create_translation(db, "de-DE", "a", "A").await?;

    assert_eq!(repo.count().await?, 2);

    Ok(())
}
