use sea_orm_migration::{prelude::*, schema::*};

use crate::m20251020_000006_catalog_bundle::CatalogBundle;

static IDX_CATALOG_SKIN_BUNDLE_ID: &str = "idx-catalog_skin-bundle_id";
static FK_CATALOG_SKIN_BUNDLE_ID: &str = "fk-catalog_skin-bundle_id";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(CatalogSkin::Table)
                    .if_not_exists()
                    .col(pk_auto(CatalogSkin::Id))
                    .col(string_uniq(CatalogSkin::Name))
                    .col(integer_null(CatalogSkin::ValueVp))
                    .col(string_null(CatalogSkin::SkinType))
                    .col(string_null(CatalogSkin::Tier))
                    .col(string_null(CatalogSkin::ImageUrl))
                    .col(integer_null(CatalogSkin::BundleId))
                    .col(timestamp(CatalogSkin::UpdatedAt))
                    .foreign_key(
                        ForeignKey::create()
                            .name(FK_CATALOG_SKIN_BUNDLE_ID)
                            .from(CatalogSkin::Table, CatalogSkin::BundleId)
                            .to(CatalogBundle::Table, CatalogBundle::Id)
                            .on_delete(ForeignKeyAction::SetNull),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(IDX_CATALOG_SKIN_BUNDLE_ID)
                    .table(CatalogSkin::Table)
                    .col(CatalogSkin::BundleId)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_index(
                Index::drop()
                    .name(IDX_CATALOG_SKIN_BUNDLE_ID)
                    .table(CatalogSkin::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(CatalogSkin::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
enum CatalogSkin {
    Table,
    Id,
    Name,
    ValueVp,
    SkinType,
    Tier,
    ImageUrl,
    BundleId,
    UpdatedAt,
}
