use std::collections::HashMap;

use entity::sea_orm_active_enums::InventoryCategory;
use sea_orm::DatabaseConnection;

use crate::{
    data::{catalog::CatalogRepository, inventory::InventoryRepository},
    error::Error,
    model::store::{AccountValue, SkinValue},
};

pub struct ValuationService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> ValuationService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Values every owned skin at its catalog price
    ///
    /// One entry per owned skin in inventory order. Skins missing from the catalog, or listed
    /// without a price, count as 0 VP and are reported with no price.
    pub async fn account_value(&self, user_id: i32) -> Result<AccountValue, Error> {
        let owned = InventoryRepository::new(self.db)
            .get_names(user_id, InventoryCategory::Skins)
            .await?;

        let catalog: HashMap<String, (Option<i32>, Option<String>)> =
            CatalogRepository::new(self.db)
                .find_skins_by_names(&owned)
                .await?
                .into_iter()
                .map(|(skin, bundle)| (skin.name, (skin.value_vp, bundle.map(|b| b.name))))
                .collect();

        let skins: Vec<SkinValue> = owned
            .into_iter()
            .map(|skin_name| {
                let (value_vp, bundle_name) = catalog.get(&skin_name).cloned().unwrap_or_default();
                SkinValue {
                    skin_name,
                    bundle_name,
                    value_vp,
                }
            })
            .collect();

        let total_value_vp = skins
            .iter()
            .filter_map(|skin| skin.value_vp)
            .map(i64::from)
            .sum();

        Ok(AccountValue {
            total_value_vp,
            skins,
        })
    }
}
