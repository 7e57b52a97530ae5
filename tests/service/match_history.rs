//! Tests for MatchHistoryService.

use chrono::{NaiveDate, Utc};
use entity::sea_orm_active_enums::MatchResult;
use skinvault::{
    error::{validation::ValidationError, Error},
    service::match_history::{MatchHistoryService, DEFAULT_MATCH_LINK},
};
use skinvault_test_utils::prelude::*;

/// Expect a match logged today with the default link
#[tokio::test]
async fn adds_match_with_default_link() -> Result<(), TestError> {
    let test = TestBuilder::new().with_account_tables().build().await?;
    let user = test.user().insert_user("alice").await?;

    let record = MatchHistoryService::new(&test.db)
        .add_match(user.id, MatchResult::Win, "13-7", Some("  "))
        .await
        .unwrap();

    assert_eq!(record.date, Utc::now().date_naive());
    assert_eq!(record.result, MatchResult::Win);
    assert_eq!(record.score, "13-7");
    assert_eq!(record.link, DEFAULT_MATCH_LINK);

    Ok(())
}

/// Expect a blank score to be rejected
#[tokio::test]
async fn rejects_blank_score() -> Result<(), TestError> {
    let test = TestBuilder::new().with_account_tables().build().await?;
    let user = test.user().insert_user("alice").await?;

    let result = MatchHistoryService::new(&test.db)
        .add_match(user.id, MatchResult::Loss, "   ", None)
        .await;

    assert!(matches!(
        result,
        Err(Error::ValidationError(ValidationError::MissingField("score")))
    ));

    Ok(())
}

/// Expect NotFound for an unknown user
#[tokio::test]
async fn rejects_unknown_user() -> Result<(), TestError> {
    let test = TestBuilder::new().with_account_tables().build().await?;

    let result = MatchHistoryService::new(&test.db)
        .add_match(42, MatchResult::Draw, "12-12", None)
        .await;

    assert!(matches!(result, Err(Error::NotFound(_))));

    Ok(())
}

/// Expect matches newest first
#[tokio::test]
async fn lists_newest_first() -> Result<(), TestError> {
    let test = TestBuilder::new().with_account_tables().build().await?;
    let user = test.user().insert_user("alice").await?;
    let older = NaiveDate::from_ymd_opt(2023, 5, 28).expect("valid date");
    let newer = NaiveDate::from_ymd_opt(2023, 6, 1).expect("valid date");
    test.inventory()
        .insert_match(user.id, older, MatchResult::Loss, "8-13")
        .await?;
    test.inventory()
        .insert_match(user.id, newer, MatchResult::Win, "13-7")
        .await?;

    let matches = MatchHistoryService::new(&test.db)
        .list_matches(user.id)
        .await
        .unwrap();

    let dates: Vec<NaiveDate> = matches.iter().map(|m| m.date).collect();
    assert_eq!(dates, vec![newer, older]);

    Ok(())
}

#[test]
fn parses_result_case_insensitively() {
    assert_eq!(MatchHistoryService::parse_result("win").ok(), Some(MatchResult::Win));
    assert_eq!(MatchHistoryService::parse_result("LOSS").ok(), Some(MatchResult::Loss));
    assert!(matches!(
        MatchHistoryService::parse_result("forfeit"),
        Err(Error::ValidationError(ValidationError::InvalidMatchResult(_)))
    ));
}
