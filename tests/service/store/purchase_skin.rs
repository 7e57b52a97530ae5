//! Tests for StoreService::purchase_skin.

use entity::sea_orm_active_enums::InventoryCategory;
use skinvault::{
    error::{purchase::PurchaseError, Error},
    service::{inventory::InventoryService, store::StoreService},
};
use skinvault_test_utils::prelude::*;

async fn setup(valorant_points: i32) -> Result<(TestContext, i32), TestError> {
    let test = TestBuilder::new()
        .with_account_tables()
        .with_catalog_tables()
        .with_mock_skin("Ion Sheriff", Some(1775))
        .with_mock_skin("Mystery Ghost", None)
        .build()
        .await?;
    let (user, _, _) = test
        .user()
        .insert_user_with_wallet("alice", valorant_points)
        .await?;

    Ok((test, user.id))
}

/// Expect the price to be debited and the skin added to the inventory
#[tokio::test]
async fn debits_wallet_and_adds_skin() -> Result<(), TestError> {
    let (test, user_id) = setup(2000).await?;
    let store_service = StoreService::new(&test.db);

    let receipt = store_service
        .purchase_skin(user_id, "Ion Sheriff")
        .await
        .unwrap();

    assert_eq!(receipt.skins_added, vec!["Ion Sheriff"]);
    assert_eq!(receipt.vp_spent, 1775);
    assert_eq!(receipt.vp_remaining, 225);
    assert_eq!(receipt.message, "Purchased Ion Sheriff for 1775 VP");

    let wallet = store_service.get_wallet(user_id).await.unwrap();
    assert_eq!(wallet.valorant_points, 225);

    let inventory = InventoryService::new(&test.db)
        .get_inventory(user_id)
        .await
        .unwrap();
    assert_eq!(inventory.skins, vec!["Ion Sheriff"]);

    Ok(())
}

/// Expect AlreadyOwned on a second purchase, with no further debit
#[tokio::test]
async fn rejects_owned_skin() -> Result<(), TestError> {
    let (test, user_id) = setup(5000).await?;
    let store_service = StoreService::new(&test.db);

    store_service
        .purchase_skin(user_id, "Ion Sheriff")
        .await
        .unwrap();
    let result = store_service.purchase_skin(user_id, "Ion Sheriff").await;

    assert!(matches!(
        result,
        Err(Error::PurchaseError(PurchaseError::AlreadyOwned(name))) if name == "Ion Sheriff"
    ));
    let wallet = store_service.get_wallet(user_id).await.unwrap();
    assert_eq!(wallet.valorant_points, 3225);

    Ok(())
}

/// Expect PriceNotFound for unknown and unpriced skins
#[tokio::test]
async fn rejects_unpriced_skin() -> Result<(), TestError> {
    let (test, user_id) = setup(5000).await?;
    let store_service = StoreService::new(&test.db);

    let unknown = store_service.purchase_skin(user_id, "Nonexistent Skin").await;
    assert!(matches!(
        unknown,
        Err(Error::PurchaseError(PurchaseError::PriceNotFound(_)))
    ));

    let unpriced = store_service.purchase_skin(user_id, "Mystery Ghost").await;
    assert!(matches!(
        unpriced,
        Err(Error::PurchaseError(PurchaseError::PriceNotFound(_)))
    ));

    // Names match exactly
    let wrong_case = store_service.purchase_skin(user_id, "ion sheriff").await;
    assert!(matches!(
        wrong_case,
        Err(Error::PurchaseError(PurchaseError::PriceNotFound(_)))
    ));

    Ok(())
}

/// Expect the price check to run before the wallet check
#[tokio::test]
async fn checks_price_before_wallet() -> Result<(), TestError> {
    let (test, _) = setup(0).await?;
    let store_service = StoreService::new(&test.db);

    let unknown_skin = store_service.purchase_skin(999, "Nonexistent Skin").await;
    assert!(matches!(
        unknown_skin,
        Err(Error::PurchaseError(PurchaseError::PriceNotFound(_)))
    ));

    let no_wallet = store_service.purchase_skin(999, "Ion Sheriff").await;
    assert!(matches!(
        no_wallet,
        Err(Error::PurchaseError(PurchaseError::WalletNotFound(999)))
    ));

    Ok(())
}

/// Expect InsufficientFunds to leave the wallet and inventory untouched
#[tokio::test]
async fn rejects_insufficient_funds() -> Result<(), TestError> {
    let (test, user_id) = setup(1000).await?;
    let store_service = StoreService::new(&test.db);

    let result = store_service.purchase_skin(user_id, "Ion Sheriff").await;

    assert!(matches!(
        result,
        Err(Error::PurchaseError(PurchaseError::InsufficientFunds {
            required: 1775,
            available: 1000,
        }))
    ));
    let wallet = store_service.get_wallet(user_id).await.unwrap();
    assert_eq!(wallet.valorant_points, 1000);
    let inventory = InventoryService::new(&test.db)
        .get_inventory(user_id)
        .await
        .unwrap();
    assert!(inventory.category(InventoryCategory::Skins).is_empty());

    Ok(())
}

/// Expect a balance equal to the price to be spent down to zero
#[tokio::test]
async fn allows_exact_balance() -> Result<(), TestError> {
    let (test, user_id) = setup(1775).await?;

    let receipt = StoreService::new(&test.db)
        .purchase_skin(user_id, "Ion Sheriff")
        .await
        .unwrap();

    assert_eq!(receipt.vp_remaining, 0);

    Ok(())
}
