use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(CatalogBundle::Table)
                    .if_not_exists()
                    .col(pk_auto(CatalogBundle::Id))
                    .col(string_uniq(CatalogBundle::Name))
                    .col(timestamp(CatalogBundle::CreatedAt))
                    .col(timestamp(CatalogBundle::UpdatedAt))
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(CatalogBundle::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
pub enum CatalogBundle {
    Table,
    Id,
    Name,
    CreatedAt,
    UpdatedAt,
}
