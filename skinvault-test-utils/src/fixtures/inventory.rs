use chrono::{NaiveDate, Utc};
use entity::sea_orm_active_enums::{InventoryCategory, MatchResult};
use sea_orm::{ActiveValue, EntityTrait};

use crate::{
    error::TestError,
    model::{InventoryItemModel, MatchRecordModel},
    TestContext,
};

impl TestContext {
    pub fn inventory<'a>(&'a self) -> InventoryFixtures<'a> {
        InventoryFixtures { setup: self }
    }
}

pub struct InventoryFixtures<'a> {
    setup: &'a TestContext,
}

impl<'a> InventoryFixtures<'a> {
    pub async fn insert_item(
        &self,
        user_id: i32,
        category: InventoryCategory,
        item_name: &str,
    ) -> Result<InventoryItemModel, TestError> {
        Ok(
            entity::prelude::InventoryItem::insert(entity::inventory_item::ActiveModel {
                user_id: ActiveValue::Set(user_id),
                category: ActiveValue::Set(category),
                item_name: ActiveValue::Set(item_name.to_string()),
                acquired_at: ActiveValue::Set(Utc::now().naive_utc()),
                ..Default::default()
            })
            .exec_with_returning(&self.setup.db)
            .await?,
        )
    }

    pub async fn insert_match(
        &self,
        user_id: i32,
        match_date: NaiveDate,
        result: MatchResult,
        score: &str,
    ) -> Result<MatchRecordModel, TestError> {
        Ok(
            entity::prelude::MatchRecord::insert(entity::match_record::ActiveModel {
                user_id: ActiveValue::Set(user_id),
                match_date: ActiveValue::Set(match_date),
                result: ActiveValue::Set(result),
                score: ActiveValue::Set(score.to_string()),
                link: ActiveValue::Set("#".to_string()),
                created_at: ActiveValue::Set(Utc::now().naive_utc()),
                ..Default::default()
            })
            .exec_with_returning(&self.setup.db)
            .await?,
        )
    }
}
