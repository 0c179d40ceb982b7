use super::*;

/// Tests saving an inventory twice.
///
/// Expected: Ok with the latest contents stored
#[tokio::test]
async fn saves_and_overwrites_inventory() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Inventory)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = InventoryRepository::new(db);

    let mut inventory = Inventory::default();
    inventory.add_item(Item::Sunpetal, 150);
    repo.save(5, &inventory).await?;

    let stored = repo.load(5).await?.unwrap();
    assert_eq!(stored.item_amount(Item::Sunpetal), 150);
    assert_eq!(stored.stacks().len(), 2);

    inventory.clear();
    inventory.add_item(Item::GoldCoin, 1);
    repo.save(5, &inventory).await?;

    let stored = repo.load(5).await?.unwrap();
    assert_eq!(stored, inventory);

    Ok(())
}
