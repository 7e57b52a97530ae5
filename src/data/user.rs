use chrono::Utc;
use entity::sea_orm_active_enums::{BanKind, ModerationStatus};
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, Condition, ConnectionTrait, DbErr, EntityTrait,
    PaginatorTrait, QueryFilter, QueryOrder,
};

use crate::model::db::{ProfileModel, UserModel};

pub struct UserRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> UserRepository<'a, C> {
    /// Creates a new instance of [`UserRepository`]
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Creates an active, unbanned user
    ///
    /// Fails with a unique constraint violation if the username or email is taken.
    pub async fn create(
        &self,
        username: String,
        email: String,
        password_hash: String,
    ) -> Result<UserModel, DbErr> {
        let user = entity::account_user::ActiveModel {
            username: ActiveValue::Set(username),
            email: ActiveValue::Set(email),
            password_hash: ActiveValue::Set(password_hash),
            status: ActiveValue::Set(ModerationStatus::Active),
            ban_kind: ActiveValue::Set(BanKind::NoBan),
            ban_reason: ActiveValue::Set(None),
            suspension_end: ActiveValue::Set(None),
            created_at: ActiveValue::Set(Utc::now().naive_utc()),
            ..Default::default()
        };

        user.insert(self.db).await
    }

    pub async fn get(&self, user_id: i32) -> Result<Option<UserModel>, DbErr> {
        entity::prelude::AccountUser::find_by_id(user_id)
            .one(self.db)
            .await
    }

    /// Finds a user by exact username together with their profile, if any
    pub async fn find_by_username(
        &self,
        username: &str,
    ) -> Result<Option<(UserModel, Option<ProfileModel>)>, DbErr> {
        entity::prelude::AccountUser::find()
            .filter(entity::account_user::Column::Username.eq(username))
            .find_also_related(entity::account_profile::Entity)
            .one(self.db)
            .await
    }

    /// Returns true if either the username or the email is already registered
    pub async fn identity_taken(&self, username: &str, email: &str) -> Result<bool, DbErr> {
        let count = entity::prelude::AccountUser::find()
            .filter(
                Condition::any()
                    .add(entity::account_user::Column::Username.eq(username))
                    .add(entity::account_user::Column::Email.eq(email)),
            )
            .count(self.db)
            .await?;

        Ok(count > 0)
    }

    /// All users in registration order
    pub async fn all(&self) -> Result<Vec<UserModel>, DbErr> {
        entity::prelude::AccountUser::find()
            .order_by_asc(entity::account_user::Column::Id)
            .all(self.db)
            .await
    }
}
