//! Tests for AuthService::login.

use chrono::NaiveDate;
use entity::sea_orm_active_enums::{BanKind, ModerationStatus};
use sea_orm::EntityTrait;
use skinvault::{
    error::{auth::AuthError, Error},
    model::account::LoginOutcome,
    service::{auth::AuthService, profile::ProfileService},
};
use skinvault_test_utils::prelude::*;

use crate::util::{register_user, TEST_PASSWORD};

async fn moderate(
    test: &TestContext,
    user_id: i32,
    status: ModerationStatus,
    ban_kind: BanKind,
    suspension_end: Option<chrono::NaiveDateTime>,
) -> Result<(), TestError> {
    let user = entity::prelude::AccountUser::find_by_id(user_id)
        .one(&test.db)
        .await?
        .expect("user should exist");
    test.user()
        .set_moderation(user, status, ban_kind, suspension_end)
        .await?;

    Ok(())
}

/// Expect the first login to verify the email and the second to authenticate
#[tokio::test]
async fn verifies_email_before_authenticating() -> Result<(), TestError> {
    let test = TestBuilder::new().with_account_tables().build().await?;
    let user_id = register_user(&test.db, "alice").await;

    let auth_service = AuthService::new(&test.db);

    let first = auth_service.login("alice", TEST_PASSWORD).await.unwrap();
    assert_eq!(first, LoginOutcome::EmailVerified(user_id));

    let profile = ProfileService::new(&test.db).get_profile(user_id).await.unwrap();
    assert!(profile.email_verified);

    let second = auth_service.login("alice", TEST_PASSWORD).await.unwrap();
    assert_eq!(second, LoginOutcome::Authenticated(user_id));

    Ok(())
}

/// Expect InvalidCredentials for a wrong password
#[tokio::test]
async fn rejects_wrong_password() -> Result<(), TestError> {
    let test = TestBuilder::new().with_account_tables().build().await?;
    register_user(&test.db, "alice").await;

    let result = AuthService::new(&test.db).login("alice", "guess").await;

    assert!(matches!(
        result,
        Err(Error::AuthError(AuthError::InvalidCredentials))
    ));

    Ok(())
}

/// Expect a ban to be reported before the email is verified, leaving it unverified
#[tokio::test]
async fn ban_precedes_verification() -> Result<(), TestError> {
    let test = TestBuilder::new().with_account_tables().build().await?;
    let user_id = register_user(&test.db, "alice").await;
    moderate(
        &test,
        user_id,
        ModerationStatus::Banned,
        BanKind::Permanent,
        None,
    )
    .await?;

    let result = AuthService::new(&test.db).login("alice", TEST_PASSWORD).await;

    assert!(matches!(
        result,
        Err(Error::AuthError(AuthError::PermanentlyBanned))
    ));
    let profile = ProfileService::new(&test.db).get_profile(user_id).await.unwrap();
    assert!(!profile.email_verified);

    Ok(())
}

/// Expect temporary bans and suspensions to report their end time
#[tokio::test]
async fn reports_temporary_restrictions() -> Result<(), TestError> {
    let test = TestBuilder::new().with_account_tables().build().await?;
    let banned_id = register_user(&test.db, "alice").await;
    let suspended_id = register_user(&test.db, "bob").await;
    let until = NaiveDate::from_ymd_opt(2030, 1, 1)
        .and_then(|d| d.and_hms_opt(12, 0, 0))
        .expect("valid timestamp");

    moderate(
        &test,
        banned_id,
        ModerationStatus::Banned,
        BanKind::Temporary,
        Some(until),
    )
    .await?;
    moderate(
        &test,
        suspended_id,
        ModerationStatus::Suspended,
        BanKind::NoBan,
        Some(until),
    )
    .await?;

    let auth_service = AuthService::new(&test.db);

    let banned = auth_service.login("alice", TEST_PASSWORD).await;
    assert!(matches!(
        banned,
        Err(Error::AuthError(AuthError::TemporarilyBanned { until: Some(t) })) if t == until
    ));

    let suspended = auth_service.login("bob", TEST_PASSWORD).await;
    assert!(matches!(
        suspended,
        Err(Error::AuthError(AuthError::Suspended { until: Some(t) })) if t == until
    ));

    Ok(())
}

#[tokio::test]
async fn rejects_locked_account() -> Result<(), TestError> {
    let test = TestBuilder::new().with_account_tables().build().await?;
    let user_id = register_user(&test.db, "alice").await;
    moderate(&test, user_id, ModerationStatus::Locked, BanKind::NoBan, None).await?;

    let result = AuthService::new(&test.db).login("alice", TEST_PASSWORD).await;

    assert!(matches!(result, Err(Error::AuthError(AuthError::Locked))));

    Ok(())
}
