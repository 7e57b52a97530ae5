use sea_orm_migration::{prelude::*, schema::*};

use crate::m20251020_000001_account_user::AccountUser;

static FK_ACCOUNT_PROFILE_USER_ID: &str = "fk-account_profile-user_id";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(AccountProfile::Table)
                    .if_not_exists()
                    .col(integer(AccountProfile::UserId))
                    .col(string(AccountProfile::Name))
                    .col(string(AccountProfile::Region))
                    .col(string(AccountProfile::Country))
                    .col(integer(AccountProfile::Level))
                    .col(string(AccountProfile::Rank))
                    .col(string_null(AccountProfile::Episode))
                    .col(string_null(AccountProfile::Act))
                    .col(date(AccountProfile::RegistrationDate))
                    .col(boolean(AccountProfile::PhoneVerified))
                    .col(boolean(AccountProfile::EmailVerified))
                    .primary_key(Index::create().col(AccountProfile::UserId))
                    .foreign_key(
                        ForeignKey::create()
                            .name(FK_ACCOUNT_PROFILE_USER_ID)
                            .from(AccountProfile::Table, AccountProfile::UserId)
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
            .drop_table(Table::drop().table(AccountProfile::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
enum AccountProfile {
    Table,
    UserId,
    Name,
    Region,
    Country,
    Level,
    Rank,
    Episode,
    Act,
    RegistrationDate,
    PhoneVerified,
    EmailVerified,
}
