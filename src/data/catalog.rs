use std::collections::HashSet;

use chrono::Utc;
use migration::{Expr, OnConflict};
use sea_orm::{
    ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait, QueryFilter, QueryOrder,
};

use crate::model::{
    catalog::SkinSeed,
    db::{BundleModel, SkinModel},
};

pub struct CatalogRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> CatalogRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Inserts a bundle or touches `updated_at` of the existing bundle with the same name
    pub async fn upsert_bundle(&self, name: &str) -> Result<BundleModel, DbErr> {
        let now = Utc::now().naive_utc();
        let bundle = entity::catalog_bundle::ActiveModel {
            name: ActiveValue::Set(name.to_string()),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        };

        entity::prelude::CatalogBundle::insert(bundle)
            .on_conflict(
                OnConflict::column(entity::catalog_bundle::Column::Name)
                    .update_column(entity::catalog_bundle::Column::UpdatedAt)
                    .to_owned(),
            )
            .exec_with_returning(self.db)
            .await
    }

    /// Upserts skins by name, attaching them to `bundle_id`
    ///
    /// # Notes
    /// - A skin already in the catalog takes the new price, type, tier, image and bundle
    /// - Repeated names within `skins` keep the first occurrence
    pub async fn upsert_skins(
        &self,
        skins: Vec<SkinSeed>,
        bundle_id: Option<i32>,
    ) -> Result<Vec<SkinModel>, DbErr> {
        let mut seen = HashSet::new();
        let skins: Vec<SkinSeed> = skins
            .into_iter()
            .filter(|skin| seen.insert(skin.name.clone()))
            .collect();

        if skins.is_empty() {
            return Ok(Vec::new());
        }

        let now = Utc::now().naive_utc();
        let skins = skins.into_iter().map(|skin| entity::catalog_skin::ActiveModel {
            name: ActiveValue::Set(skin.name),
            value_vp: ActiveValue::Set(skin.value_vp),
            skin_type: ActiveValue::Set(skin.skin_type),
            tier: ActiveValue::Set(skin.tier),
            image_url: ActiveValue::Set(skin.image_url),
            bundle_id: ActiveValue::Set(bundle_id),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        });

        entity::prelude::CatalogSkin::insert_many(skins)
            .on_conflict(
                OnConflict::column(entity::catalog_skin::Column::Name)
                    .update_columns([
                        entity::catalog_skin::Column::ValueVp,
                        entity::catalog_skin::Column::SkinType,
                        entity::catalog_skin::Column::Tier,
                        entity::catalog_skin::Column::ImageUrl,
                        entity::catalog_skin::Column::BundleId,
                        entity::catalog_skin::Column::UpdatedAt,
                    ])
                    .to_owned(),
            )
            .exec_with_returning(self.db)
            .await
    }

    /// Removes every skin not in `keep` from a bundle, leaving the skins in the catalog
    pub async fn detach_bundle_skins(&self, bundle_id: i32, keep: &[i32]) -> Result<u64, DbErr> {
        let result = entity::prelude::CatalogSkin::update_many()
            .col_expr(
                entity::catalog_skin::Column::BundleId,
                Expr::value(Option::<i32>::None),
            )
            .filter(entity::catalog_skin::Column::BundleId.eq(bundle_id))
            .filter(entity::catalog_skin::Column::Id.is_not_in(keep.iter().copied()))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected)
    }

    pub async fn find_skin_by_name(&self, name: &str) -> Result<Option<SkinModel>, DbErr> {
        entity::prelude::CatalogSkin::find()
            .filter(entity::catalog_skin::Column::Name.eq(name))
            .one(self.db)
            .await
    }

    /// Catalog skins matching any of `names`, each with its bundle if it has one
    pub async fn find_skins_by_names(
        &self,
        names: &[String],
    ) -> Result<Vec<(SkinModel, Option<BundleModel>)>, DbErr> {
        if names.is_empty() {
            return Ok(Vec::new());
        }

        entity::prelude::CatalogSkin::find()
            .filter(entity::catalog_skin::Column::Name.is_in(names.iter().cloned()))
            .find_also_related(entity::catalog_bundle::Entity)
            .all(self.db)
            .await
    }

    pub async fn get_bundle(&self, bundle_id: i32) -> Result<Option<BundleModel>, DbErr> {
        entity::prelude::CatalogBundle::find_by_id(bundle_id)
            .one(self.db)
            .await
    }

    /// Member skins of a bundle in insertion order
    pub async fn get_bundle_skins(&self, bundle_id: i32) -> Result<Vec<SkinModel>, DbErr> {
        entity::prelude::CatalogSkin::find()
            .filter(entity::catalog_skin::Column::BundleId.eq(bundle_id))
            .order_by_asc(entity::catalog_skin::Column::Id)
            .all(self.db)
            .await
    }

    /// Every catalog skin ordered by name, each with its bundle if it has one
    pub async fn list_skins(&self) -> Result<Vec<(SkinModel, Option<BundleModel>)>, DbErr> {
        entity::prelude::CatalogSkin::find()
            .find_also_related(entity::catalog_bundle::Entity)
            .order_by_asc(entity::catalog_skin::Column::Name)
            .all(self.db)
            .await
    }

    /// Every bundle in creation order with its member skins
    pub async fn list_bundles_with_skins(&self) -> Result<Vec<(BundleModel, Vec<SkinModel>)>, DbErr> {
        entity::prelude::CatalogBundle::find()
            .find_with_related(entity::catalog_skin::Entity)
            .order_by_asc(entity::catalog_bundle::Column::Id)
            .all(self.db)
            .await
    }
}
