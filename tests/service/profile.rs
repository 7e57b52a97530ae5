//! Tests for ProfileService.

use entity::sea_orm_active_enums::{Rank, Region};
use skinvault::{
    error::{validation::ValidationError, Error},
    model::account::{ProfileDto, ProfileForm, ProfileUpdate},
    service::profile::ProfileService,
};
use skinvault_test_utils::prelude::*;

/// Expect the zero-value profile for a user without one
#[tokio::test]
async fn missing_profile_reads_as_default() -> Result<(), TestError> {
    let test = TestBuilder::new().with_account_tables().build().await?;

    let profile = ProfileService::new(&test.db).get_profile(42).await.unwrap();

    assert_eq!(profile, ProfileDto::default());

    Ok(())
}

/// Expect only the provided fields to change
#[tokio::test]
async fn updates_provided_fields() -> Result<(), TestError> {
    let test = TestBuilder::new().with_account_tables().build().await?;
    let user = test.user().insert_user("alice").await?;

    let profile = ProfileService::new(&test.db)
        .update_profile(
            user.id,
            ProfileUpdate {
                level: Some(30),
                rank: Some(Rank::Gold),
                ..Default::default()
            },
        )
        .await
        .unwrap();

    assert_eq!(profile.level, 30);
    assert_eq!(profile.rank, Rank::Gold);
    assert_eq!(profile.name, "alice");
    assert_eq!(profile.region, Some(Region::Eu));

    Ok(())
}

/// Expect invalid levels and blank names to be rejected
#[tokio::test]
async fn rejects_invalid_update() -> Result<(), TestError> {
    let test = TestBuilder::new().with_account_tables().build().await?;
    let user = test.user().insert_user("alice").await?;
    let profile_service = ProfileService::new(&test.db);

    let zero_level = profile_service
        .update_profile(
            user.id,
            ProfileUpdate {
                level: Some(0),
                ..Default::default()
            },
        )
        .await;
    assert!(matches!(
        zero_level,
        Err(Error::ValidationError(ValidationError::InvalidLevel(_)))
    ));

    let blank_name = profile_service
        .update_profile(
            user.id,
            ProfileUpdate {
                name: Some("  ".to_string()),
                ..Default::default()
            },
        )
        .await;
    assert!(matches!(
        blank_name,
        Err(Error::ValidationError(ValidationError::MissingField("name")))
    ));

    Ok(())
}

/// Expect NotFound when updating a user without a profile
#[tokio::test]
async fn update_requires_profile() -> Result<(), TestError> {
    let test = TestBuilder::new().with_account_tables().build().await?;

    let result = ProfileService::new(&test.db)
        .update_profile(
            42,
            ProfileUpdate {
                level: Some(2),
                ..Default::default()
            },
        )
        .await;

    assert!(matches!(result, Err(Error::NotFound(_))));

    Ok(())
}

/// Expect form values to be coerced case-insensitively before being applied
#[tokio::test]
async fn applies_form() -> Result<(), TestError> {
    let test = TestBuilder::new().with_account_tables().build().await?;
    let user = test.user().insert_user("alice").await?;
    let profile_service = ProfileService::new(&test.db);

    let profile = profile_service
        .update_profile_form(
            user.id,
            ProfileForm {
                name: Some("Alice Liddell".to_string()),
                region: Some("latam".to_string()),
                level: Some(" 12 ".to_string()),
                rank: Some("diamond".to_string()),
                episode: Some("Episode 7".to_string()),
                ..Default::default()
            },
        )
        .await
        .unwrap();

    assert_eq!(profile.name, "Alice Liddell");
    assert_eq!(profile.region, Some(Region::Latam));
    assert_eq!(profile.level, 12);
    assert_eq!(profile.rank, Rank::Diamond);
    assert_eq!(profile.episode, Some("Episode 7".to_string()));

    let rejected = profile_service
        .update_profile_form(
            user.id,
            ProfileForm {
                level: Some("abc".to_string()),
                ..Default::default()
            },
        )
        .await;
    assert!(matches!(
        rejected,
        Err(Error::ValidationError(ValidationError::InvalidLevel(_)))
    ));

    // A rejected form leaves the stored profile as it was
    let unchanged = profile_service.get_profile(user.id).await.unwrap();
    assert_eq!(unchanged.level, 12);

    Ok(())
}

#[tokio::test]
async fn marks_email_verified() -> Result<(), TestError> {
    let test = TestBuilder::new().with_account_tables().build().await?;
    let user = test.user().insert_user("alice").await?;
    let profile_service = ProfileService::new(&test.db);

    profile_service.mark_email_verified(user.id).await.unwrap();

    assert!(profile_service.get_profile(user.id).await.unwrap().email_verified);
    assert!(matches!(
        profile_service.mark_email_verified(42).await,
        Err(Error::NotFound(_))
    ));

    Ok(())
}
