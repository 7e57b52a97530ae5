use chrono::Utc;
use sea_orm::{ActiveValue, EntityTrait};

use crate::{
    error::TestError,
    model::{BundleModel, SkinModel},
    TestContext,
};

impl TestContext {
    pub fn catalog<'a>(&'a self) -> CatalogFixtures<'a> {
        CatalogFixtures { setup: self }
    }
}

pub struct CatalogFixtures<'a> {
    setup: &'a TestContext,
}

impl<'a> CatalogFixtures<'a> {
    /// Insert a bundle and one skin per `(name, value_vp)` pair, in order.
    pub async fn insert_bundle(
        &self,
        name: &str,
        skins: Vec<(&str, Option<i32>)>,
    ) -> Result<(BundleModel, Vec<SkinModel>), TestError> {
        let now = Utc::now().naive_utc();

        let bundle = entity::prelude::CatalogBundle::insert(entity::catalog_bundle::ActiveModel {
            name: ActiveValue::Set(name.to_string()),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        })
        .exec_with_returning(&self.setup.db)
        .await?;

        let mut skin_models = Vec::new();
        for (skin, value_vp) in skins {
            skin_models.push(self.insert_skin(skin, value_vp, Some(bundle.id)).await?);
        }

        Ok((bundle, skin_models))
    }

    pub async fn insert_skin(
        &self,
        name: &str,
        value_vp: Option<i32>,
        bundle_id: Option<i32>,
    ) -> Result<SkinModel, TestError> {
        Ok(
            entity::prelude::CatalogSkin::insert(entity::catalog_skin::ActiveModel {
                name: ActiveValue::Set(name.to_string()),
                value_vp: ActiveValue::Set(value_vp),
                skin_type: ActiveValue::Set(None),
                tier: ActiveValue::Set(None),
                image_url: ActiveValue::Set(None),
                bundle_id: ActiveValue::Set(bundle_id),
                updated_at: ActiveValue::Set(Utc::now().naive_utc()),
                ..Default::default()
            })
            .exec_with_returning(&self.setup.db)
            .await?,
        )
    }
}
