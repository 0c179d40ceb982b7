use super::*;

/// Tests importing messages and overwriting one of them.
///
/// Expected: Ok with the overwritten message and no duplicates
#[tokio::test]
async fn upserts_translations() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Translation)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = TranslationRepository::new(db);
    let written = repo
        .upsert_many(&[
            translation("en-US", "travel.arrived", "Arrived"),
            translation("en-US", "backpack.next", "Next"),
        ])
        .await?;
    assert_eq!(written, 2);

    repo.upsert_many(&[translation(
        "en-US",
        "travel.arrived",
        "You arrived at %destination%",
    )])
    .await?;

    let all = repo.get_all().await?;
    assert_eq!(all.len(), 2);
    assert!(all.contains(&translation(
        "en-US",
        "travel.arrived",
        "You arrived at %destination%"
    )));

    Ok(())
}
