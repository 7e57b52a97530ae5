use chrono::Utc;
use entity::sea_orm_active_enums::MatchResult;
use sea_orm::DatabaseConnection;

use crate::{
    data::{match_history::MatchHistoryRepository, user::UserRepository},
    error::Error,
    model::account::MatchDto,
    util::parse::{parse_match_result, required},
};

/// Link stored when a match is logged without one.
pub const DEFAULT_MATCH_LINK: &str = "#";

pub struct MatchHistoryService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> MatchHistoryService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Logs a match played today
    ///
    /// The score is free text but must not be blank. A missing or blank link is stored as
    /// [`DEFAULT_MATCH_LINK`].
    pub async fn add_match(
        &self,
        user_id: i32,
        result: MatchResult,
        score: &str,
        link: Option<&str>,
    ) -> Result<MatchDto, Error> {
        let score = required("score", score)?;
        let link = link
            .map(str::trim)
            .filter(|l| !l.is_empty())
            .unwrap_or(DEFAULT_MATCH_LINK)
            .to_string();

        if UserRepository::new(self.db).get(user_id).await?.is_none() {
            return Err(Error::NotFound(format!("User ID {}", user_id)));
        }

        let record = MatchHistoryRepository::new(self.db)
            .create(user_id, Utc::now().date_naive(), result, score, link)
            .await?;

        Ok(record.into())
    }

    /// A user's matches, newest first
    pub async fn list_matches(&self, user_id: i32) -> Result<Vec<MatchDto>, Error> {
        let records = MatchHistoryRepository::new(self.db)
            .get_by_user(user_id)
            .await?;

        Ok(records.into_iter().map(MatchDto::from).collect())
    }

    /// Coerces a result submitted by a UI, e.g. `"win"` or `"Loss"`
    pub fn parse_result(raw: &str) -> Result<MatchResult, Error> {
        Ok(parse_match_result(raw)?)
    }
}
