use sea_orm_migration::{prelude::*, schema::*};

use crate::m20251020_000001_account_user::AccountUser;

static IDX_MATCH_RECORD_USER_ID: &str = "idx-match_record-user_id";
static FK_MATCH_RECORD_USER_ID: &str = "fk-match_record-user_id";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(MatchRecord::Table)
                    .if_not_exists()
                    .col(pk_auto(MatchRecord::Id))
                    .col(integer(MatchRecord::UserId))
                    .col(date(MatchRecord::MatchDate))
                    .col(string(MatchRecord::Result))
                    .col(string(MatchRecord::Score))
                    .col(string(MatchRecord::Link))
                    .col(timestamp(MatchRecord::CreatedAt))
                    .foreign_key(
                        ForeignKey::create()
                            .name(FK_MATCH_RECORD_USER_ID)
                            .from(MatchRecord::Table, MatchRecord::UserId)
                            .to(AccountUser::Table, AccountUser::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(IDX_MATCH_RECORD_USER_ID)
                    .table(MatchRecord::Table)
                    .col(MatchRecord::UserId)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_index(
                Index::drop()
                    .name(IDX_MATCH_RECORD_USER_ID)
                    .table(MatchRecord::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(MatchRecord::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
enum MatchRecord {
    Table,
    Id,
    UserId,
    MatchDate,
    Result,
    Score,
    Link,
    CreatedAt,
}
