use sea_orm_migration::{prelude::*, schema::*};

use crate::m20251020_000001_account_user::AccountUser;

static FK_ACCOUNT_WALLET_USER_ID: &str = "fk-account_wallet-user_id";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(AccountWallet::Table)
                    .if_not_exists()
                    .col(integer(AccountWallet::UserId))
                    .col(integer(AccountWallet::ValorantPoints))
                    .col(integer(AccountWallet::RadiantPoints))
                    .col(integer(AccountWallet::KingdomPoints))
                    .col(timestamp(AccountWallet::UpdatedAt))
                    .primary_key(Index::create().col(AccountWallet::UserId))
                    .foreign_key(
                        ForeignKey::create()
                            .name(FK_ACCOUNT_WALLET_USER_ID)
                            .from(AccountWallet::Table, AccountWallet::UserId)
                            .to(AccountUser::Table, AccountUser::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(AccountWallet::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
enum AccountWallet {
    Table,
    UserId,
    ValorantPoints,
    RadiantPoints,
    KingdomPoints,
    UpdatedAt,
}
