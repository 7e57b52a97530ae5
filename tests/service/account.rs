//! Tests for AccountService::get_dashboard.

use chrono::NaiveDate;
use entity::sea_orm_active_enums::{InventoryCategory, MatchResult, Rank};
use skinvault::{
    error::Error,
    model::account::ProfileUpdate,
    service::{account::AccountService, profile::ProfileService},
};
use skinvault_test_utils::prelude::*;

/// Expect every section of the account in one snapshot
#[tokio::test]
async fn assembles_dashboard() -> Result<(), TestError> {
    let test = TestBuilder::new().with_account_tables().build().await?;
    let (user, _, _) = test.user().insert_user_with_wallet("alice", 1500).await?;
    test.inventory()
        .insert_item(user.id, InventoryCategory::Skins, "Vandal")
        .await?;
    let date = NaiveDate::from_ymd_opt(2023, 6, 1).expect("valid date");
    test.inventory()
        .insert_match(user.id, date, MatchResult::Win, "13-7")
        .await?;

    let dashboard = AccountService::new(&test.db)
        .get_dashboard(user.id)
        .await
        .unwrap();

    assert_eq!(dashboard.user_id, user.id);
    assert_eq!(dashboard.username, "alice");
    assert_eq!(dashboard.email, user.email);
    assert_eq!(dashboard.profile.name, "alice");
    assert_eq!(dashboard.wallet.valorant_points, 1500);
    assert_eq!(dashboard.inventory.skins, vec!["Vandal"]);
    assert_eq!(dashboard.match_history.len(), 1);
    assert_eq!(dashboard.match_history[0].score, "13-7");
    assert!(!dashboard.is_ranked);

    Ok(())
}

/// Expect the account to count as ranked once it holds any rank
#[tokio::test]
async fn reports_ranked_status() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_account_tables()
        .with_mock_user("alice")
        .build()
        .await?;

    ProfileService::new(&test.db)
        .update_profile(
            1,
            ProfileUpdate {
                rank: Some(Rank::Iron),
                ..Default::default()
            },
        )
        .await
        .unwrap();

    let dashboard = AccountService::new(&test.db).get_dashboard(1).await.unwrap();

    assert!(dashboard.is_ranked);

    Ok(())
}

#[tokio::test]
async fn unknown_user_is_not_found() -> Result<(), TestError> {
    let test = TestBuilder::new().with_account_tables().build().await?;

    let result = AccountService::new(&test.db).get_dashboard(42).await;

    assert!(matches!(result, Err(Error::NotFound(_))));

    Ok(())
}
