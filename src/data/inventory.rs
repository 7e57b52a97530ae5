use chrono::Utc;
use entity::sea_orm_active_enums::InventoryCategory;
use sea_orm::{
    ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait, PaginatorTrait, QueryFilter,
    QueryOrder, QuerySelect,
};

use crate::model::db::InventoryItemModel;

pub struct InventoryRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> InventoryRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// All items owned by a user in acquisition order
    pub async fn get_by_user(&self, user_id: i32) -> Result<Vec<InventoryItemModel>, DbErr> {
        entity::prelude::InventoryItem::find()
            .filter(entity::inventory_item::Column::UserId.eq(user_id))
            .order_by_asc(entity::inventory_item::Column::Id)
            .all(self.db)
            .await
    }

    /// Names of the items a user owns in one category, in acquisition order
    pub async fn get_names(
        &self,
        user_id: i32,
        category: InventoryCategory,
    ) -> Result<Vec<String>, DbErr> {
        entity::prelude::InventoryItem::find()
            .select_only()
            .column(entity::inventory_item::Column::ItemName)
            .filter(entity::inventory_item::Column::UserId.eq(user_id))
            .filter(entity::inventory_item::Column::Category.eq(category))
            .order_by_asc(entity::inventory_item::Column::Id)
            .into_tuple::<String>()
            .all(self.db)
            .await
    }

    pub async fn owns(
        &self,
        user_id: i32,
        category: InventoryCategory,
        item_name: &str,
    ) -> Result<bool, DbErr> {
        let count = entity::prelude::InventoryItem::find()
            .filter(entity::inventory_item::Column::UserId.eq(user_id))
            .filter(entity::inventory_item::Column::Category.eq(category))
            .filter(entity::inventory_item::Column::ItemName.eq(item_name))
            .count(self.db)
            .await?;

        Ok(count > 0)
    }

    /// Inserts items for a user
    ///
    /// # Notes
    /// - Callers filter out items the user already owns; the unique index on
    ///   (user_id, category, item_name) rejects the whole batch otherwise
    pub async fn create_many(
        &self,
        user_id: i32,
        items: Vec<(InventoryCategory, String)>,
    ) -> Result<Vec<InventoryItemModel>, DbErr> {
        if items.is_empty() {
            return Ok(Vec::new());
        }

        let now = Utc::now().naive_utc();
        let items = items
            .into_iter()
            .map(|(category, item_name)| entity::inventory_item::ActiveModel {
                user_id: ActiveValue::Set(user_id),
                category: ActiveValue::Set(category),
                item_name: ActiveValue::Set(item_name),
                acquired_at: ActiveValue::Set(now),
                ..Default::default()
            });

        entity::prelude::InventoryItem::insert_many(items)
            .exec_with_returning(self.db)
            .await
    }
}
