use super::*;

/// Tests loading towns together with their connections.
///
/// Expected: Ok with towns ordered by name and connections attached to their town
#[tokio::test]
async fn gets_towns_with_connections() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_town_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    factory::town::TownFactory::new(db)
        .name("Lakevale")
        .walls(true)
        .build()
        .await?;
    factory::town::TownFactory::new(db)
        .name("Brookfield")
        .build()
        .await?;
    factory::create_connection(db, "Lakevale", "Brookfield", 950).await?;
    factory::create_connection(db, "Lakevale", "Rillrun", 567).await?;
    factory::create_connection(db, "Brookfield", "Lakevale", 950).await?;

    let repo = TownRepository::new(db);
    let towns = repo.get_all().await?;

    assert_eq!(towns.len(), 2);
    assert_eq!(towns[0].name, "Brookfield");
    assert_eq!(towns[0].connections, vec![Connection::new("Lakevale", 950)]);

    let lakevale = &towns[1];
    assert!(lakevale.features.walls);
    assert_eq!(lakevale.connections.len(), 2);
    assert_eq!(
        lakevale.find_connection("rillrun").map(|c| c.distance),
        Some(567)
    );

    Ok(())
}

/// Tests loading towns from an empty table.
///
/// Expected: Ok with an empty list
#[tokio::test]
async fn returns_empty_before_import() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_town_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = TownRepository::new(db);

    assert!(repo.get_all().await?.is_empty());

    Ok(())
}
