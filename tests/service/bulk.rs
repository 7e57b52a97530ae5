//! Tests for BulkService.

use entity::sea_orm_active_enums::Region;
use skinvault::{
    error::validation::ValidationError,
    model::bulk::{CredentialRow, RegistrationRow, RowStatus},
    service::{auth::AuthService, bulk::BulkService, profile::ProfileService},
};
use skinvault_test_utils::prelude::*;

use crate::util::{register_user, TEST_PASSWORD};

fn registration_row(username: &str, email: &str) -> RegistrationRow {
    RegistrationRow {
        username: username.to_string(),
        email: email.to_string(),
        password: TEST_PASSWORD.to_string(),
        name: format!("{} Player", username),
        region: "KR".to_string(),
        country: "Korea".to_string(),
    }
}

/// Expect each row to be reported in order, rejected rows included
#[tokio::test]
async fn registers_rows_in_order() -> Result<(), TestError> {
    let test = TestBuilder::new().with_account_tables().build().await?;

    let statuses = BulkService::new(&test.db)
        .register_rows(vec![
            registration_row("alice", "alice@example.com"),
            registration_row("bob", "ALICE@example.com"),
            registration_row("", "carol@example.com"),
            registration_row("dave", "dave@example.com"),
        ])
        .await
        .unwrap();

    assert_eq!(
        statuses,
        vec![
            RowStatus {
                username: "alice".to_string(),
                success: true,
                status: "Registered with user ID 1".to_string(),
            },
            RowStatus {
                username: "bob".to_string(),
                success: false,
                status: "Username or email already exists".to_string(),
            },
            RowStatus {
                username: String::new(),
                success: false,
                status: "username is required".to_string(),
            },
            RowStatus {
                username: "dave".to_string(),
                success: true,
                status: "Registered with user ID 2".to_string(),
            },
        ]
    );

    Ok(())
}

/// Expect an unknown region to fail only its own row, and regions to match in any case
#[tokio::test]
async fn coerces_region_per_row() -> Result<(), TestError> {
    let test = TestBuilder::new().with_account_tables().build().await?;

    // Rows arrive untyped from a file, so a bad region must not break deserialization
    let rows: Vec<RegistrationRow> = serde_json::from_str(
        r#"[
            {"username":"alice","email":"alice@example.com","password":"pw","name":"Alice","region":"Mars","country":"Canada"},
            {"username":"bob","email":"bob@example.com","password":"pw","name":"Bob","region":"eu","country":"France"}
        ]"#,
    )
    .expect("rows should deserialize");

    let statuses = BulkService::new(&test.db).register_rows(rows).await.unwrap();

    assert_eq!(
        statuses,
        vec![
            RowStatus {
                username: "alice".to_string(),
                success: false,
                status: ValidationError::InvalidRegion("Mars".to_string()).to_string(),
            },
            RowStatus {
                username: "bob".to_string(),
                success: true,
                status: "Registered with user ID 1".to_string(),
            },
        ]
    );

    let profile = ProfileService::new(&test.db).get_profile(1).await.unwrap();
    assert_eq!(profile.region, Some(Region::Eu));

    Ok(())
}

/// Expect credential checks to report each row without verifying any email
#[tokio::test]
async fn verifies_rows_without_side_effects() -> Result<(), TestError> {
    let test = TestBuilder::new().with_account_tables().build().await?;
    register_user(&test.db, "alice").await;
    let bulk_service = BulkService::new(&test.db);

    let statuses = bulk_service
        .verify_rows(vec![
            CredentialRow {
                username: "alice".to_string(),
                password: TEST_PASSWORD.to_string(),
            },
            CredentialRow {
                username: "alice".to_string(),
                password: "wrong".to_string(),
            },
            CredentialRow {
                username: "nobody".to_string(),
                password: TEST_PASSWORD.to_string(),
            },
        ])
        .await
        .unwrap();

    let summary: Vec<(bool, &str)> = statuses
        .iter()
        .map(|s| (s.success, s.status.as_str()))
        .collect();
    assert_eq!(
        summary,
        vec![
            (true, "Valid, email not verified"),
            (false, "Credentials do not match"),
            (false, "Credentials do not match"),
        ]
    );

    // The email is still unverified, so a real login verifies it now
    let credentials = AuthService::new(&test.db)
        .authenticate("alice", TEST_PASSWORD)
        .await
        .unwrap()
        .expect("credentials should match");
    assert!(!credentials.email_verified);

    Ok(())
}

/// Expect one export per user in registration order
#[tokio::test]
async fn exports_every_account() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_account_tables()
        .with_mock_user("alice")
        .with_mock_user("bob")
        .build()
        .await?;

    let exports = BulkService::new(&test.db).export_accounts().await.unwrap();

    let usernames: Vec<&str> = exports.iter().map(|e| e.username.as_str()).collect();
    assert_eq!(usernames, vec!["alice", "bob"]);
    assert_eq!(exports[1].email, "bob@skinvault.test");

    Ok(())
}
