use sea_orm_migration::{prelude::*, schema::*};

use crate::m20251020_000001_account_user::AccountUser;

static IDX_INVENTORY_ITEM_USER_CATEGORY_NAME: &str = "idx-inventory_item-user_id-category-item_name";
static FK_INVENTORY_ITEM_USER_ID: &str = "fk-inventory_item-user_id";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(InventoryItem::Table)
                    .if_not_exists()
                    .col(pk_auto(InventoryItem::Id))
                    .col(integer(InventoryItem::UserId))
                    .col(string(InventoryItem::Category))
                    .col(string(InventoryItem::ItemName))
                    .col(timestamp(InventoryItem::AcquiredAt))
                    .foreign_key(
                        ForeignKey::create()
                            .name(FK_INVENTORY_ITEM_USER_ID)
                            .from(InventoryItem::Table, InventoryItem::UserId)
                            .to(AccountUser::Table, AccountUser::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        // Each category is a set per user
        manager
            .create_index(
                Index::create()
                    .name(IDX_INVENTORY_ITEM_USER_CATEGORY_NAME)
                    .table(InventoryItem::Table)
                    .col(InventoryItem::UserId)
                    .col(InventoryItem::Category)
                    .col(InventoryItem::ItemName)
                    .unique()
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_index(
                Index::drop()
                    .name(IDX_INVENTORY_ITEM_USER_CATEGORY_NAME)
                    .table(InventoryItem::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(InventoryItem::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
enum InventoryItem {
    Table,
    Id,
    UserId,
    Category,
    ItemName,
    AcquiredAt,
}
