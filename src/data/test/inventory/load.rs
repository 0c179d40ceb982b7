use super::*;

/// Tests loading an inventory that was never saved.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_when_missing() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Inventory)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = InventoryRepository::new(db);

    assert!(repo.load(1).await?.is_none());

    Ok(())
}

/// Tests loading a stored document that is not inventory JSON.
///
/// Expected: Err(DbErr::Custom)
#[tokio::test]
async fn fails_on_corrupt_document() -> Result<(), DbErr> {
    use sea_orm::{ActiveModelTrait, ActiveValue};

    let test = TestBuilder::new()
        .with_table(entity::prelude::Inventory)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    entity::inventory::ActiveModel {
        id: ActiveValue::Set("1".to_string()),
        inventory: ActiveValue::Set("not json".to_string()),
    }
    .insert(db)
    .await?;

    let repo = InventoryRepository::new(db);

    assert!(matches!(repo.load(1).await, Err(DbErr::Custom(_))));

    Ok(())
}

/// Tests loading a stored stack larger than the item allows.
///
/// Expected: Err(DbErr::Custom)
#[tokio::test]
async fn fails_on_oversized_stack() -> Result<(), DbErr> {
    use sea_orm::{ActiveModelTrait, ActiveValue};

    let test = TestBuilder::new()
        .with_table(entity::prelude::Inventory)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    entity::inventory::ActiveModel {
        id: ActiveValue::Set("1".to_string()),
        inventory: ActiveValue::Set(
            r#"{"capacity":36,"stacks":[{"item":"PEBBLE","amount":500}]}"#.to_string(),
        ),
    }
    .insert(db)
    .await?;

    let repo = InventoryRepository::new(db);

    assert!(matches!(repo.load(1).await, Err(DbErr::Custom(_))));

    Ok(())
}
