use entity::sea_orm_active_enums::Rank;
use sea_orm::DatabaseConnection;

use crate::{
    data::user::UserRepository,
    error::Error,
    model::account::DashboardDto,
    service::{
        inventory::InventoryService, match_history::MatchHistoryService,
        profile::ProfileService, store::StoreService,
    },
};

pub struct AccountService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> AccountService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Profile, wallet, inventory and match history of one user
    ///
    /// # Returns
    /// - `Ok(DashboardDto)` - Aggregated account data
    /// - `Err(Error::NotFound)` - The user does not exist
    pub async fn get_dashboard(&self, user_id: i32) -> Result<DashboardDto, Error> {
        let user = UserRepository::new(self.db)
            .get(user_id)
            .await?
            .ok_or_else(|| Error::NotFound(format!("User ID {}", user_id)))?;

        let profile = ProfileService::new(self.db).get_profile(user_id).await?;
        let wallet = StoreService::new(self.db).get_wallet(user_id).await?;
        let inventory = InventoryService::new(self.db).get_inventory(user_id).await?;
        let match_history = MatchHistoryService::new(self.db)
            .list_matches(user_id)
            .await?;

        Ok(DashboardDto {
            user_id: user.id,
            username: user.username,
            email: user.email,
            is_ranked: profile.rank != Rank::Unranked,
            profile,
            wallet,
            inventory,
            match_history,
        })
    }
}
