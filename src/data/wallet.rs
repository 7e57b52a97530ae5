use chrono::Utc;
use migration::Expr;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait,
    IntoActiveModel, QueryFilter,
};

use crate::model::{account::WalletDto, db::WalletModel};

pub struct WalletRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> WalletRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    pub async fn create(&self, user_id: i32, balances: WalletDto) -> Result<WalletModel, DbErr> {
        let wallet = entity::account_wallet::ActiveModel {
            user_id: ActiveValue::Set(user_id),
            valorant_points: ActiveValue::Set(balances.valorant_points),
            radiant_points: ActiveValue::Set(balances.radiant_points),
            kingdom_points: ActiveValue::Set(balances.kingdom_points),
            updated_at: ActiveValue::Set(Utc::now().naive_utc()),
        };

        wallet.insert(self.db).await
    }

    pub async fn get(&self, user_id: i32) -> Result<Option<WalletModel>, DbErr> {
        entity::prelude::AccountWallet::find_by_id(user_id)
            .one(self.db)
            .await
    }

    /// Sets the VP balance to `new_balance` only if it still equals `expected`
    ///
    /// Returns false when the balance moved since it was read, in which case nothing is written.
    ///
    /// # Notes
    /// - Pass the transaction that read `expected` so the debit commits with the rest of the
    ///   purchase
    pub async fn compare_and_set_vp(
        &self,
        user_id: i32,
        expected: i32,
        new_balance: i32,
    ) -> Result<bool, DbErr> {
        let result = entity::prelude::AccountWallet::update_many()
            .col_expr(
                entity::account_wallet::Column::ValorantPoints,
                Expr::value(new_balance),
            )
            .col_expr(
                entity::account_wallet::Column::UpdatedAt,
                Expr::value(Utc::now().naive_utc()),
            )
            .filter(entity::account_wallet::Column::UserId.eq(user_id))
            .filter(entity::account_wallet::Column::ValorantPoints.eq(expected))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected == 1)
    }

    /// Overwrites all three balances
    ///
    /// Returns `Ok(None)` if the user has no wallet.
    pub async fn set_balances(
        &self,
        user_id: i32,
        balances: WalletDto,
    ) -> Result<Option<WalletModel>, DbErr> {
        let wallet = match self.get(user_id).await? {
            Some(wallet) => wallet,
            None => return Ok(None),
        };

        let mut wallet_am = wallet.into_active_model();
        wallet_am.valorant_points = ActiveValue::Set(balances.valorant_points);
        wallet_am.radiant_points = ActiveValue::Set(balances.radiant_points);
        wallet_am.kingdom_points = ActiveValue::Set(balances.kingdom_points);
        wallet_am.updated_at = ActiveValue::Set(Utc::now().naive_utc());

        let wallet = wallet_am.update(self.db).await?;

        Ok(Some(wallet))
    }
}
