//! Tests for InventoryService.

use entity::sea_orm_active_enums::InventoryCategory;
use skinvault::{error::Error, model::account::InventoryDto, service::inventory::InventoryService};
use skinvault_test_utils::prelude::*;

/// Expect items grouped by category in acquisition order
#[tokio::test]
async fn groups_items_by_category() -> Result<(), TestError> {
    let test = TestBuilder::new().with_account_tables().build().await?;
    let user = test.user().insert_user("alice").await?;
    test.inventory()
        .insert_item(user.id, InventoryCategory::Skins, "Vandal")
        .await?;
    test.inventory()
        .insert_item(user.id, InventoryCategory::Titles, "Rookie")
        .await?;
    test.inventory()
        .insert_item(user.id, InventoryCategory::Skins, "Classic Pistol")
        .await?;

    let inventory = InventoryService::new(&test.db)
        .get_inventory(user.id)
        .await
        .unwrap();

    assert_eq!(inventory.skins, vec!["Vandal", "Classic Pistol"]);
    assert_eq!(inventory.titles, vec!["Rookie"]);
    assert!(inventory.agents.is_empty());

    Ok(())
}

/// Expect empty lists for a user with no items
#[tokio::test]
async fn unknown_user_has_empty_inventory() -> Result<(), TestError> {
    let test = TestBuilder::new().with_account_tables().build().await?;

    let inventory = InventoryService::new(&test.db).get_inventory(42).await.unwrap();

    assert_eq!(inventory, InventoryDto::default());

    Ok(())
}

/// Expect a grant to add the item once and report duplicates
#[tokio::test]
async fn grants_item_once() -> Result<(), TestError> {
    let test = TestBuilder::new().with_account_tables().build().await?;
    let user = test.user().insert_user("alice").await?;
    let inventory_service = InventoryService::new(&test.db);

    let first = inventory_service
        .grant_item(user.id, InventoryCategory::Agents, "Sage")
        .await
        .unwrap();
    let second = inventory_service
        .grant_item(user.id, InventoryCategory::Agents, "Sage")
        .await
        .unwrap();

    assert!(first);
    assert!(!second);
    let inventory = inventory_service.get_inventory(user.id).await.unwrap();
    assert_eq!(inventory.agents, vec!["Sage"]);

    // The same name in another category is a different item
    assert!(inventory_service
        .grant_item(user.id, InventoryCategory::Titles, "Sage")
        .await
        .unwrap());

    Ok(())
}

#[tokio::test]
async fn grant_requires_user() -> Result<(), TestError> {
    let test = TestBuilder::new().with_account_tables().build().await?;

    let result = InventoryService::new(&test.db)
        .grant_item(42, InventoryCategory::Agents, "Sage")
        .await;

    assert!(matches!(result, Err(Error::NotFound(_))));

    Ok(())
}
