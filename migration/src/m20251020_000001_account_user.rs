use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(AccountUser::Table)
                    .if_not_exists()
                    .col(pk_auto(AccountUser::Id))
                    .col(string_uniq(AccountUser::Username))
                    .col(string_uniq(AccountUser::Email))
                    .col(string(AccountUser::PasswordHash))
                    .col(string(AccountUser::Status))
                    .col(string(AccountUser::BanKind))
                    .col(string_null(AccountUser::BanReason))
                    .col(timestamp_null(AccountUser::SuspensionEnd))
                    .col(timestamp(AccountUser::CreatedAt))
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(AccountUser::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
pub enum AccountUser {
    Table,
    Id,
    Username,
    Email,
    PasswordHash,
    Status,
    BanKind,
    BanReason,
    SuspensionEnd,
    CreatedAt,
}
