//! Tests for PublicProfileService::get_public_profile.

use entity::sea_orm_active_enums::{InventoryCategory, Rank};
use skinvault::{
    model::account::{InventoryDto, ProfileDto},
    service::public::PublicProfileService,
};
use skinvault_test_utils::prelude::*;

/// Expect the public view of an existing user
#[tokio::test]
async fn returns_public_view() -> Result<(), TestError> {
    let test = TestBuilder::new().with_account_tables().build().await?;
    let user = test.user().insert_user("alice").await?;
    test.inventory()
        .insert_item(user.id, InventoryCategory::Cards, "Default Card")
        .await?;

    let profile = PublicProfileService::new(&test.db)
        .get_public_profile(&user.id.to_string())
        .await
        .unwrap()
        .expect("profile should be public");

    assert_eq!(profile.username, "alice");
    assert_eq!(profile.details.name, "alice");
    assert_eq!(profile.inventory.cards, vec!["Default Card"]);
    assert!(profile.match_history.is_empty());

    Ok(())
}

/// Expect None only when the link parameter is not a user ID
#[tokio::test]
async fn malformed_ids_return_none() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_account_tables()
        .with_mock_user("alice")
        .build()
        .await?;
    let public_service = PublicProfileService::new(&test.db);

    for raw in ["", "abc", "1.5", "1a"] {
        let profile = public_service.get_public_profile(raw).await.unwrap();
        assert!(profile.is_none(), "expected no profile for {:?}", raw);
    }

    Ok(())
}

/// Expect the zero-value view for a well-formed ID with no account behind it
#[tokio::test]
async fn unknown_id_returns_default_view() -> Result<(), TestError> {
    let test = TestBuilder::new().with_account_tables().build().await?;
    let public_service = PublicProfileService::new(&test.db);

    for raw in ["42", " 7 ", "-1"] {
        let profile = public_service
            .get_public_profile(raw)
            .await
            .unwrap()
            .expect("numeric IDs always have a view");

        assert_eq!(profile.username, "");
        assert_eq!(profile.details, ProfileDto::default());
        assert_eq!(profile.details.level, 1);
        assert_eq!(profile.details.rank, Rank::Unranked);
        assert_eq!(profile.inventory, InventoryDto::default());
        assert!(profile.match_history.is_empty());
    }

    Ok(())
}
