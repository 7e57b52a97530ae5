use chrono::NaiveDate;
use entity::sea_orm_active_enums::{Rank, Region};
use migration::Expr;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait,
    IntoActiveModel, QueryFilter,
};

use crate::model::{account::ProfileUpdate, db::ProfileModel};

pub struct ProfileRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> ProfileRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Creates a level 1, unranked, unverified profile
    pub async fn create(
        &self,
        user_id: i32,
        name: String,
        region: Region,
        country: String,
        registration_date: NaiveDate,
    ) -> Result<ProfileModel, DbErr> {
        let profile = entity::account_profile::ActiveModel {
            user_id: ActiveValue::Set(user_id),
            name: ActiveValue::Set(name),
            region: ActiveValue::Set(region),
            country: ActiveValue::Set(country),
            level: ActiveValue::Set(1),
            rank: ActiveValue::Set(Rank::Unranked),
            episode: ActiveValue::Set(None),
            act: ActiveValue::Set(None),
            registration_date: ActiveValue::Set(registration_date),
            phone_verified: ActiveValue::Set(false),
            email_verified: ActiveValue::Set(false),
        };

        profile.insert(self.db).await
    }

    pub async fn get(&self, user_id: i32) -> Result<Option<ProfileModel>, DbErr> {
        entity::prelude::AccountProfile::find_by_id(user_id)
            .one(self.db)
            .await
    }

    /// Writes every `Some` field of `update`
    ///
    /// Returns `Ok(None)` if the user has no profile row.
    pub async fn update(
        &self,
        user_id: i32,
        update: ProfileUpdate,
    ) -> Result<Option<ProfileModel>, DbErr> {
        let profile = match self.get(user_id).await? {
            Some(profile) => profile,
            None => return Ok(None),
        };

        let mut profile_am = profile.into_active_model();
        if let Some(name) = update.name {
            profile_am.name = ActiveValue::Set(name);
        }
        if let Some(region) = update.region {
            profile_am.region = ActiveValue::Set(region);
        }
        if let Some(country) = update.country {
            profile_am.country = ActiveValue::Set(country);
        }
        if let Some(level) = update.level {
            profile_am.level = ActiveValue::Set(level);
        }
        if let Some(rank) = update.rank {
            profile_am.rank = ActiveValue::Set(rank);
        }
        if let Some(episode) = update.episode {
            profile_am.episode = ActiveValue::Set(Some(episode));
        }
        if let Some(act) = update.act {
            profile_am.act = ActiveValue::Set(Some(act));
        }
        if let Some(phone_verified) = update.phone_verified {
            profile_am.phone_verified = ActiveValue::Set(phone_verified);
        }
        if let Some(email_verified) = update.email_verified {
            profile_am.email_verified = ActiveValue::Set(email_verified);
        }

        if !profile_am.is_changed() {
            return self.get(user_id).await;
        }

        let profile = profile_am.update(self.db).await?;

        Ok(Some(profile))
    }

    /// Marks the email as verified, returning the number of rows affected
    pub async fn set_email_verified(&self, user_id: i32) -> Result<u64, DbErr> {
        let result = entity::prelude::AccountProfile::update_many()
            .col_expr(
                entity::account_profile::Column::EmailVerified,
                Expr::value(true),
            )
            .filter(entity::account_profile::Column::UserId.eq(user_id))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected)
    }
}
