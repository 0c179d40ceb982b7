use super::*;

fn port_town() -> Town {
    let mut town = Town::new("Wharfwind");
    town.features.port = true;
    town.temperature = 8;
    town.connections.push(Connection::new("Port Drizzle", 1284));
    town.connections.push(Connection::new("Port Drizzle:PORT", 1438));
    town
}

/// Tests importing new towns.
///
/// Expected: Ok with every town and connection stored
#[tokio::test]
async fn inserts_towns() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_town_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = TownRepository::new(db);
    let written = repo
        .upsert_many(&[port_town(), Town::new("Port Drizzle")])
        .await?;

    assert_eq!(written, 2);

    let towns = repo.get_all().await?;
    assert_eq!(towns.len(), 2);
    assert_eq!(towns[1], port_town());

    Ok(())
}

/// Tests importing the same towns twice with changed values.
///
/// Expected: Ok with updated fields and no duplicate connections
#[tokio::test]
async fn updates_existing_towns() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_town_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = TownRepository::new(db);
    repo.upsert_many(&[port_town()]).await?;

    let mut changed = port_town();
    changed.population = 9081;
    changed.connections[0].distance = 1300;
    repo.upsert_many(&[changed.clone()]).await?;

    let towns = repo.get_all().await?;
    assert_eq!(towns, vec![changed]);

    Ok(())
}
