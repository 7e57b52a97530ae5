//! Tests for StoreService listings and wallet lookup.

use skinvault::{
    model::{
        account::WalletDto,
        catalog::{BundleSeed, SkinSeed},
        store::{BundleListing, SkinListing},
    },
    service::{catalog::CatalogService, store::StoreService},
};
use skinvault_test_utils::prelude::*;

/// Expect skins ordered by name, unpriced ones included
#[tokio::test]
async fn lists_skins_by_name() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_catalog_tables()
        .with_mock_skin("Spectrum Phantom", Some(2675))
        .with_mock_skin("Ion Sheriff", Some(1775))
        .with_mock_skin("Mystery Ghost", None)
        .build()
        .await?;

    let skins = StoreService::new(&test.db).list_skins().await.unwrap();

    assert_eq!(
        skins,
        vec![
            SkinListing {
                name: "Ion Sheriff".to_string(),
                value_vp: Some(1775),
                tier: None,
                bundle_name: None,
            },
            SkinListing {
                name: "Mystery Ghost".to_string(),
                value_vp: None,
                tier: None,
                bundle_name: None,
            },
            SkinListing {
                name: "Spectrum Phantom".to_string(),
                value_vp: Some(2675),
                tier: None,
                bundle_name: None,
            },
        ]
    );

    Ok(())
}

/// Expect each listing to carry the seeded tier and its owning bundle
#[tokio::test]
async fn lists_tier_and_bundle() -> Result<(), TestError> {
    let test = TestBuilder::new().with_catalog_tables().build().await?;
    let catalog_service = CatalogService::new(&test.db);
    catalog_service
        .seed_bundles(vec![BundleSeed {
            name: "Prime".to_string(),
            skins: vec![SkinSeed::new("Prime Vandal", "gun", 1775).with_tier("Premium")],
        }])
        .await
        .unwrap();
    catalog_service
        .seed_skins(vec![SkinSeed::new("Elderflame Operator", "gun", 2475).with_tier("Ultra")])
        .await
        .unwrap();

    let skins = StoreService::new(&test.db).list_skins().await.unwrap();

    assert_eq!(
        skins,
        vec![
            SkinListing {
                name: "Elderflame Operator".to_string(),
                value_vp: Some(2475),
                tier: Some("Ultra".to_string()),
                bundle_name: None,
            },
            SkinListing {
                name: "Prime Vandal".to_string(),
                value_vp: Some(1775),
                tier: Some("Premium".to_string()),
                bundle_name: Some("Prime".to_string()),
            },
        ]
    );

    Ok(())
}

/// Expect bundle totals to skip unpriced members while still counting them
#[tokio::test]
async fn lists_bundles_with_totals() -> Result<(), TestError> {
    let test = TestBuilder::new().with_catalog_tables().build().await?;
    let (bundle, _) = test
        .catalog()
        .insert_bundle(
            "Oni",
            vec![
                ("Oni Phantom", Some(1775)),
                ("Oni Claw", Some(3550)),
                ("Oni Buddy", None),
            ],
        )
        .await?;

    let bundles = StoreService::new(&test.db).list_bundles().await.unwrap();

    assert_eq!(
        bundles,
        vec![BundleListing {
            id: bundle.id,
            name: "Oni".to_string(),
            skin_count: 3,
            total_price: 5325,
        }]
    );

    Ok(())
}

/// Expect zero balances for a user without a wallet
#[tokio::test]
async fn missing_wallet_reads_as_zero() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_account_tables()
        .with_mock_user("alice")
        .build()
        .await?;

    let store_service = StoreService::new(&test.db);

    assert_eq!(store_service.get_wallet(999).await.unwrap(), WalletDto::default());

    Ok(())
}
