use chrono::{NaiveDateTime, Utc};
use entity::sea_orm_active_enums::{BanKind, ModerationStatus, Rank, Region};
use sea_orm::{ActiveModelTrait, ActiveValue, EntityTrait};

use crate::{
    constant::{TEST_COUNTRY, TEST_EMAIL_DOMAIN, TEST_PASSWORD_HASH},
    error::TestError,
    model::{ProfileModel, UserModel, WalletModel},
    TestContext,
};

impl TestContext {
    pub fn user<'a>(&'a self) -> UserFixtures<'a> {
        UserFixtures { setup: self }
    }
}

pub struct UserFixtures<'a> {
    setup: &'a TestContext,
}

impl<'a> UserFixtures<'a> {
    /// Insert an active user with an unverified profile and an empty wallet.
    pub async fn insert_user(&self, username: &str) -> Result<UserModel, TestError> {
        let (user, _, _) = self.insert_user_with_wallet(username, 0).await?;

        Ok(user)
    }

    /// Insert an active user with an unverified profile and `valorant_points` VP.
    pub async fn insert_user_with_wallet(
        &self,
        username: &str,
        valorant_points: i32,
    ) -> Result<(UserModel, ProfileModel, WalletModel), TestError> {
        let now = Utc::now().naive_utc();

        let user = entity::prelude::AccountUser::insert(entity::account_user::ActiveModel {
            username: ActiveValue::Set(username.to_string()),
            email: ActiveValue::Set(format!("{}@{}", username.to_lowercase(), TEST_EMAIL_DOMAIN)),
            password_hash: ActiveValue::Set(TEST_PASSWORD_HASH.to_string()),
            status: ActiveValue::Set(ModerationStatus::Active),
            ban_kind: ActiveValue::Set(BanKind::NoBan),
            ban_reason: ActiveValue::Set(None),
            suspension_end: ActiveValue::Set(None),
            created_at: ActiveValue::Set(now),
            ..Default::default()
        })
        .exec_with_returning(&self.setup.db)
        .await?;

        let profile =
            entity::prelude::AccountProfile::insert(entity::account_profile::ActiveModel {
                user_id: ActiveValue::Set(user.id),
                name: ActiveValue::Set(username.to_string()),
                region: ActiveValue::Set(Region::Eu),
                country: ActiveValue::Set(TEST_COUNTRY.to_string()),
                level: ActiveValue::Set(1),
                rank: ActiveValue::Set(Rank::Unranked),
                episode: ActiveValue::Set(None),
                act: ActiveValue::Set(None),
                registration_date: ActiveValue::Set(now.date()),
                phone_verified: ActiveValue::Set(false),
                email_verified: ActiveValue::Set(false),
            })
            .exec_with_returning(&self.setup.db)
            .await?;

        let wallet = entity::prelude::AccountWallet::insert(entity::account_wallet::ActiveModel {
            user_id: ActiveValue::Set(user.id),
            valorant_points: ActiveValue::Set(valorant_points),
            radiant_points: ActiveValue::Set(0),
            kingdom_points: ActiveValue::Set(0),
            updated_at: ActiveValue::Set(now),
        })
        .exec_with_returning(&self.setup.db)
        .await?;

        Ok((user, profile, wallet))
    }

    /// Overwrite the moderation columns of an existing user.
    pub async fn set_moderation(
        &self,
        user: UserModel,
        status: ModerationStatus,
        ban_kind: BanKind,
        suspension_end: Option<NaiveDateTime>,
    ) -> Result<UserModel, TestError> {
        let mut active: entity::account_user::ActiveModel = user.into();
        active.status = ActiveValue::Set(status);
        active.ban_kind = ActiveValue::Set(ban_kind);
        active.suspension_end = ActiveValue::Set(suspension_end);

        Ok(active.update(&self.setup.db).await?)
    }
}
