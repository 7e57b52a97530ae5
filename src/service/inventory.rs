use entity::sea_orm_active_enums::InventoryCategory;
use sea_orm::DatabaseConnection;

use crate::{
    data::{inventory::InventoryRepository, user::UserRepository},
    error::Error,
    model::account::InventoryDto,
    util::parse::required,
};

pub struct InventoryService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> InventoryService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// All owned items grouped by category; empty lists for unknown users
    pub async fn get_inventory(&self, user_id: i32) -> Result<InventoryDto, Error> {
        let items = InventoryRepository::new(self.db).get_by_user(user_id).await?;

        Ok(items.into())
    }

    /// Credits an item outside of a purchase
    ///
    /// # Returns
    /// - `Ok(true)` - The item was added
    /// - `Ok(false)` - The user already owned the item
    /// - `Err(Error::NotFound)` - The user does not exist
    pub async fn grant_item(
        &self,
        user_id: i32,
        category: InventoryCategory,
        item_name: &str,
    ) -> Result<bool, Error> {
        let item_name = required("item name", item_name)?;

        if UserRepository::new(self.db).get(user_id).await?.is_none() {
            return Err(Error::NotFound(format!("User ID {}", user_id)));
        }

        let inventory_repo = InventoryRepository::new(self.db);
        if inventory_repo.owns(user_id, category, &item_name).await? {
            return Ok(false);
        }

        inventory_repo
            .create_many(user_id, vec![(category, item_name)])
            .await?;

        Ok(true)
    }
}
