use sea_orm::DatabaseConnection;

use crate::{
    data::{
        inventory::InventoryRepository, match_history::MatchHistoryRepository,
        profile::ProfileRepository, user::UserRepository,
    },
    error::Error,
    model::{
        account::{InventoryDto, MatchDto, ProfileDto},
        public::PublicProfile,
    },
};

/// Read-only account view served to unauthenticated visitors of a profile link.
pub struct PublicProfileService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> PublicProfileService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Looks up the account behind a raw link parameter
    ///
    /// Returns `Ok(None)` only when the parameter is not a user ID. A well-formed ID with no
    /// account behind it gets the zero-value view: no username, the default profile and empty
    /// inventory and match history.
    pub async fn get_public_profile(&self, raw_user_id: &str) -> Result<Option<PublicProfile>, Error> {
        let Ok(user_id) = raw_user_id.trim().parse::<i32>() else {
            return Ok(None);
        };

        let username = UserRepository::new(self.db)
            .get(user_id)
            .await?
            .map(|user| user.username)
            .unwrap_or_default();

        let details = ProfileRepository::new(self.db)
            .get(user_id)
            .await?
            .map(ProfileDto::from)
            .unwrap_or_default();
        let inventory: InventoryDto = InventoryRepository::new(self.db)
            .get_by_user(user_id)
            .await?
            .into();
        let match_history = MatchHistoryRepository::new(self.db)
            .get_by_user(user_id)
            .await?
            .into_iter()
            .map(MatchDto::from)
            .collect();

        Ok(Some(PublicProfile {
            username,
            details,
            inventory,
            match_history,
        }))
    }
}
