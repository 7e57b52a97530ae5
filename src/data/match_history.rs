use chrono::{NaiveDate, Utc};
use entity::sea_orm_active_enums::MatchResult;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait, QueryFilter,
    QueryOrder,
};

use crate::model::db::MatchRecordModel;

pub struct MatchHistoryRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> MatchHistoryRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    pub async fn create(
        &self,
        user_id: i32,
        match_date: NaiveDate,
        result: MatchResult,
        score: String,
        link: String,
    ) -> Result<MatchRecordModel, DbErr> {
        let record = entity::match_record::ActiveModel {
            user_id: ActiveValue::Set(user_id),
            match_date: ActiveValue::Set(match_date),
            result: ActiveValue::Set(result),
            score: ActiveValue::Set(score),
            link: ActiveValue::Set(link),
            created_at: ActiveValue::Set(Utc::now().naive_utc()),
            ..Default::default()
        };

        record.insert(self.db).await
    }

    /// A user's matches, newest date first and latest insert first within a date
    pub async fn get_by_user(&self, user_id: i32) -> Result<Vec<MatchRecordModel>, DbErr> {
        entity::prelude::MatchRecord::find()
            .filter(entity::match_record::Column::UserId.eq(user_id))
            .order_by_desc(entity::match_record::Column::MatchDate)
            .order_by_desc(entity::match_record::Column::Id)
            .all(self.db)
            .await
    }
}
