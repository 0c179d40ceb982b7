use super::*;

/// Tests deleting a stored inventory and deleting a missing one.
///
/// Expected: Ok in both cases, nothing left to load
#[tokio::test]
async fn deletes_inventory() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Inventory)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = InventoryRepository::new(db);
    repo.save(3, &Inventory::default()).await?;

    repo.delete(3).await?;
    repo.delete(3).await?;

    assert!(repo.load(3).await?.is_none());

    Ok(())
}
