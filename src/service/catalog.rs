use sea_orm::{DatabaseConnection, TransactionTrait};

use crate::{
    data::catalog::CatalogRepository,
    error::{validation::ValidationError, Error},
    model::{
        catalog::{BundleSeed, SkinSeed},
        store::BundleListing,
    },
    service::store::bundle_listing,
    util::parse::required,
};

pub struct CatalogService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> CatalogService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Upserts bundles by name together with their skins
    ///
    /// Seeding the same bundle again updates it in place, so the catalog never holds two
    /// bundles with one name. Skins already in a bundle but absent from the seed stay in it.
    pub async fn seed_bundles(&self, bundles: Vec<BundleSeed>) -> Result<Vec<BundleListing>, Error> {
        let mut listings = Vec::with_capacity(bundles.len());

        for seed in bundles {
            let name = required("bundle name", &seed.name)?;
            let skins = validate_skins(seed.skins)?;

            let txn = self.db.begin().await?;
            let catalog_repo = CatalogRepository::new(&txn);

            let bundle = catalog_repo.upsert_bundle(&name).await?;
            catalog_repo.upsert_skins(skins, Some(bundle.id)).await?;
            let members = catalog_repo.get_bundle_skins(bundle.id).await?;

            txn.commit().await?;

            listings.push(bundle_listing(bundle, &members));
        }

        tracing::info!("Seeded {} bundles", listings.len());

        Ok(listings)
    }

    /// Makes `skins` the complete member list of the named bundle
    ///
    /// The bundle is created if missing. Former members not in `skins` are detached from the
    /// bundle but remain purchasable on their own.
    pub async fn replace_bundle_contents(
        &self,
        name: &str,
        skins: Vec<SkinSeed>,
    ) -> Result<BundleListing, Error> {
        let name = required("bundle name", name)?;
        let skins = validate_skins(skins)?;

        let txn = self.db.begin().await?;
        let catalog_repo = CatalogRepository::new(&txn);

        let bundle = catalog_repo.upsert_bundle(&name).await?;
        let members = catalog_repo.upsert_skins(skins, Some(bundle.id)).await?;
        let keep: Vec<i32> = members.iter().map(|skin| skin.id).collect();
        let detached = catalog_repo.detach_bundle_skins(bundle.id, &keep).await?;
        let members = catalog_repo.get_bundle_skins(bundle.id).await?;

        txn.commit().await?;

        tracing::info!(
            "Replaced contents of bundle {:?}: {} skins, {} detached",
            name,
            members.len(),
            detached
        );

        Ok(bundle_listing(bundle, &members))
    }

    /// Upserts skins sold outside any bundle, returning how many were written
    pub async fn seed_skins(&self, skins: Vec<SkinSeed>) -> Result<usize, Error> {
        let skins = validate_skins(skins)?;

        let written = CatalogRepository::new(self.db)
            .upsert_skins(skins, None)
            .await?;

        tracing::info!("Seeded {} standalone skins", written.len());

        Ok(written.len())
    }
}

fn validate_skins(skins: Vec<SkinSeed>) -> Result<Vec<SkinSeed>, Error> {
    skins
        .into_iter()
        .map(|mut skin| {
            skin.name = required("skin name", &skin.name)?;
            if let Some(price) = skin.value_vp.filter(|p| *p < 0) {
                return Err(ValidationError::InvalidPrice {
                    skin: skin.name,
                    price,
                }
                .into());
            }
            Ok(skin)
        })
        .collect()
}
