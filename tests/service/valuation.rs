//! Tests for ValuationService::account_value.

use entity::sea_orm_active_enums::InventoryCategory;
use skinvault::{
    model::store::{AccountValue, SkinValue},
    service::valuation::ValuationService,
};
use skinvault_test_utils::prelude::*;

/// Expect owned skins priced from the catalog, with unknown skins counted as zero
#[tokio::test]
async fn values_owned_skins() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_account_tables()
        .with_catalog_tables()
        .with_mock_bundle("Prime", vec![("Prime Vandal", Some(1775))])
        .build()
        .await?;
    let user = test.user().insert_user("alice").await?;
    test.inventory()
        .insert_item(user.id, InventoryCategory::Skins, "Prime Vandal")
        .await?;
    test.inventory()
        .insert_item(user.id, InventoryCategory::Skins, "Unknown Skin")
        .await?;
    test.inventory()
        .insert_item(user.id, InventoryCategory::Agents, "Jett")
        .await?;

    let value = ValuationService::new(&test.db)
        .account_value(user.id)
        .await
        .unwrap();

    assert_eq!(
        value,
        AccountValue {
            total_value_vp: 1775,
            skins: vec![
                SkinValue {
                    skin_name: "Prime Vandal".to_string(),
                    bundle_name: Some("Prime".to_string()),
                    value_vp: Some(1775),
                },
                SkinValue {
                    skin_name: "Unknown Skin".to_string(),
                    bundle_name: None,
                    value_vp: None,
                },
            ],
        }
    );

    Ok(())
}

/// Expect standalone skins to be valued without a bundle name
#[tokio::test]
async fn values_standalone_skins() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_account_tables()
        .with_catalog_tables()
        .with_mock_skin("Ion Sheriff", Some(1775))
        .with_mock_skin("Spectrum Phantom", Some(2675))
        .build()
        .await?;
    let user = test.user().insert_user("alice").await?;
    for skin in ["Ion Sheriff", "Spectrum Phantom"] {
        test.inventory()
            .insert_item(user.id, InventoryCategory::Skins, skin)
            .await?;
    }

    let value = ValuationService::new(&test.db)
        .account_value(user.id)
        .await
        .unwrap();

    assert_eq!(value.total_value_vp, 4450);
    assert!(value.skins.iter().all(|skin| skin.bundle_name.is_none()));

    Ok(())
}

/// Expect an empty valuation for a user without skins
#[tokio::test]
async fn empty_inventory_is_worth_nothing() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_account_tables()
        .with_catalog_tables()
        .build()
        .await?;

    let value = ValuationService::new(&test.db).account_value(1).await.unwrap();

    assert_eq!(value, AccountValue::default());

    Ok(())
}
