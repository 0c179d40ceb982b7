use super::*;

/// Tests loading messages of all languages.
///
/// Expected: Ok with every stored row
#[tokio::test]
async fn gets_all_translations() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Translation)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::create_translation(db, "en-US", "backpack.next", "Next").await?;
    factory::create_translation(db, "de-DE", "backpack.next", "Weiter").await?;

    let repo = TranslationRepository::new(db);
    let mut all = repo.get_all().await?;
    all.sort_by(|a, b| a.language_code.cmp(&b.language_code));

    assert_eq!(
        all,
        vec![
            translation("de-DE", "backpack.next", "Weiter"),
            translation("en-US", "backpack.next", "Next"),
        ]
    );

    Ok(())
}
