use std::collections::HashSet;

use entity::sea_orm_active_enums::InventoryCategory;
use sea_orm::{ConnectionTrait, DatabaseConnection, TransactionTrait};

use crate::{
    data::{catalog::CatalogRepository, inventory::InventoryRepository, wallet::WalletRepository},
    error::{purchase::PurchaseError, Error},
    model::{
        account::WalletDto,
        db::{BundleModel, SkinModel},
        store::{BundleListing, PurchaseReceipt, SkinListing},
    },
    service::retry::RetryContext,
};

/// Catalog rows resolved by an earlier purchase attempt.
///
/// Only the wallet and inventory are contended, so a retried purchase reuses the catalog lookup.
#[derive(Clone, Default)]
pub struct PurchaseCache {
    skin: Option<SkinModel>,
    bundle: Option<(BundleModel, Vec<SkinModel>)>,
}

pub struct StoreService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> StoreService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Every catalog skin ordered by name
    pub async fn list_skins(&self) -> Result<Vec<SkinListing>, Error> {
        let skins = CatalogRepository::new(self.db).list_skins().await?;

        Ok(skins
            .into_iter()
            .map(|(skin, bundle)| SkinListing {
                name: skin.name,
                value_vp: skin.value_vp,
                tier: skin.tier,
                bundle_name: bundle.map(|b| b.name),
            })
            .collect())
    }

    pub async fn list_bundles(&self) -> Result<Vec<BundleListing>, Error> {
        let bundles = CatalogRepository::new(self.db)
            .list_bundles_with_skins()
            .await?;

        Ok(bundles
            .into_iter()
            .map(|(bundle, skins)| bundle_listing(bundle, &skins))
            .collect())
    }

    /// Current balances, all zero if the user has no wallet
    pub async fn get_wallet(&self, user_id: i32) -> Result<WalletDto, Error> {
        let wallet = WalletRepository::new(self.db).get(user_id).await?;

        Ok(wallet.map(WalletDto::from).unwrap_or_default())
    }

    /// Buys one skin by exact name
    ///
    /// # Returns
    /// - `Ok(PurchaseReceipt)` - VP debited and the skin added to the inventory
    /// - `Err(Error::PurchaseError)` - In check order: `PriceNotFound`, `WalletNotFound`,
    ///   `AlreadyOwned`, `InsufficientFunds`
    /// - `Err(Error::ConcurrentUpdate)` - The wallet kept changing across every retry
    pub async fn purchase_skin(
        &self,
        user_id: i32,
        skin_name: &str,
    ) -> Result<PurchaseReceipt, Error> {
        let mut ctx: RetryContext<PurchaseCache> = RetryContext::new();
        let description = format!("purchase of skin {:?} for user ID {}", skin_name, user_id);
        let db = self.db.clone();
        let skin_name = skin_name.to_string();

        let receipt = ctx
            .execute_with_retry(&description, |cache| {
                let db = db.clone();
                let skin_name = skin_name.clone();

                Box::pin(async move {
                    let txn = db.begin().await?;
                    let receipt = buy_skin(&txn, user_id, &skin_name, cache).await?;
                    txn.commit().await?;

                    Ok(receipt)
                })
            })
            .await?;

        tracing::info!(
            "User ID {} bought {:?} for {} VP",
            user_id,
            skin_name,
            receipt.vp_spent
        );

        Ok(receipt)
    }

    /// Buys every skin of a bundle the user does not own yet
    ///
    /// Owned members are skipped and not charged for.
    ///
    /// # Returns
    /// - `Ok(PurchaseReceipt)` - VP debited and the missing skins added to the inventory
    /// - `Err(Error::PurchaseError)` - In check order: `BundleNotFound`, `AllOwned`,
    ///   `WalletNotFound`, `InsufficientFunds`
    /// - `Err(Error::ConcurrentUpdate)` - The wallet kept changing across every retry
    pub async fn purchase_bundle(
        &self,
        user_id: i32,
        bundle_id: i32,
    ) -> Result<PurchaseReceipt, Error> {
        let mut ctx: RetryContext<PurchaseCache> = RetryContext::new();
        let description = format!("purchase of bundle ID {} for user ID {}", bundle_id, user_id);
        let db = self.db.clone();

        let receipt = ctx
            .execute_with_retry(&description, |cache| {
                let db = db.clone();

                Box::pin(async move {
                    let txn = db.begin().await?;
                    let receipt = buy_bundle(&txn, user_id, bundle_id, cache).await?;
                    txn.commit().await?;

                    Ok(receipt)
                })
            })
            .await?;

        tracing::info!(
            "User ID {} bought {} skins from bundle ID {} for {} VP",
            user_id,
            receipt.skins_added.len(),
            bundle_id,
            receipt.vp_spent
        );

        Ok(receipt)
    }
}

pub(crate) fn bundle_listing(bundle: BundleModel, skins: &[SkinModel]) -> BundleListing {
    BundleListing {
        id: bundle.id,
        name: bundle.name,
        skin_count: skins.len(),
        total_price: skins.iter().filter_map(|s| s.value_vp).map(i64::from).sum(),
    }
}

/// A skin purchase that passed every check against the balance it was read with.
struct SkinQuote {
    skin: SkinModel,
    price: i32,
    balance: i32,
}

async fn buy_skin<C: ConnectionTrait>(
    db: &C,
    user_id: i32,
    skin_name: &str,
    cache: &mut PurchaseCache,
) -> Result<PurchaseReceipt, Error> {
    let quote = quote_skin(db, user_id, skin_name, cache).await?;

    settle_skin(db, user_id, quote).await
}

/// Runs the purchase checks in order and reads the balance to debit against
async fn quote_skin<C: ConnectionTrait>(
    db: &C,
    user_id: i32,
    skin_name: &str,
    cache: &mut PurchaseCache,
) -> Result<SkinQuote, Error> {
    let skin = match &cache.skin {
        Some(skin) => skin.clone(),
        None => {
            let skin = CatalogRepository::new(db)
                .find_skin_by_name(skin_name)
                .await?
                .ok_or_else(|| PurchaseError::PriceNotFound(skin_name.to_string()))?;
            cache.skin = Some(skin.clone());
            skin
        }
    };
    let price = skin
        .value_vp
        .ok_or_else(|| PurchaseError::PriceNotFound(skin_name.to_string()))?;

    let wallet = WalletRepository::new(db)
        .get(user_id)
        .await?
        .ok_or(PurchaseError::WalletNotFound(user_id))?;

    if InventoryRepository::new(db)
        .owns(user_id, InventoryCategory::Skins, &skin.name)
        .await?
    {
        return Err(PurchaseError::AlreadyOwned(skin.name).into());
    }

    Ok(SkinQuote {
        skin,
        price,
        balance: wallet.valorant_points,
    })
}

/// Debits the quoted price and credits the skin
///
/// Fails with `ConcurrentUpdate` if the balance moved since the quote was taken.
async fn settle_skin<C: ConnectionTrait>(
    db: &C,
    user_id: i32,
    quote: SkinQuote,
) -> Result<PurchaseReceipt, Error> {
    let SkinQuote {
        skin,
        price,
        balance,
    } = quote;

    let vp_remaining = debit(db, user_id, balance, i64::from(price)).await?;

    InventoryRepository::new(db)
        .create_many(user_id, vec![(InventoryCategory::Skins, skin.name.clone())])
        .await?;

    Ok(PurchaseReceipt {
        message: format!("Purchased {} for {} VP", skin.name, price),
        skins_added: vec![skin.name],
        vp_spent: i64::from(price),
        vp_remaining,
    })
}

async fn buy_bundle<C: ConnectionTrait>(
    db: &C,
    user_id: i32,
    bundle_id: i32,
    cache: &mut PurchaseCache,
) -> Result<PurchaseReceipt, Error> {
    let (bundle, members) = match &cache.bundle {
        Some(cached) => cached.clone(),
        None => {
            let catalog_repo = CatalogRepository::new(db);
            let bundle = catalog_repo
                .get_bundle(bundle_id)
                .await?
                .ok_or(PurchaseError::BundleNotFound(bundle_id))?;
            let members = catalog_repo.get_bundle_skins(bundle_id).await?;
            if members.is_empty() {
                return Err(PurchaseError::BundleNotFound(bundle_id).into());
            }
            cache.bundle = Some((bundle.clone(), members.clone()));
            (bundle, members)
        }
    };

    let inventory_repo = InventoryRepository::new(db);
    let owned: HashSet<String> = inventory_repo
        .get_names(user_id, InventoryCategory::Skins)
        .await?
        .into_iter()
        .collect();

    let to_buy: Vec<SkinModel> = members
        .into_iter()
        .filter(|skin| !owned.contains(&skin.name))
        .collect();
    if to_buy.is_empty() {
        return Err(PurchaseError::AllOwned(bundle.name).into());
    }

    let total: i64 = to_buy
        .iter()
        .map(|skin| i64::from(skin.value_vp.unwrap_or(0)))
        .sum();

    let wallet = WalletRepository::new(db)
        .get(user_id)
        .await?
        .ok_or(PurchaseError::WalletNotFound(user_id))?;

    let vp_remaining = debit(db, user_id, wallet.valorant_points, total).await?;

    let skins_added: Vec<String> = to_buy.into_iter().map(|skin| skin.name).collect();
    inventory_repo
        .create_many(
            user_id,
            skins_added
                .iter()
                .map(|name| (InventoryCategory::Skins, name.clone()))
                .collect(),
        )
        .await?;

    Ok(PurchaseReceipt {
        message: format!(
            "Purchased {} skins from the {} bundle for {} VP",
            skins_added.len(),
            bundle.name,
            total
        ),
        skins_added,
        vp_spent: total,
        vp_remaining,
    })
}

/// Debits `amount` from a balance read earlier in the same transaction, returning the new
/// balance.
async fn debit<C: ConnectionTrait>(
    db: &C,
    user_id: i32,
    balance: i32,
    amount: i64,
) -> Result<i32, Error> {
    if i64::from(balance) < amount {
        return Err(PurchaseError::InsufficientFunds {
            required: amount,
            available: balance,
        }
        .into());
    }

    let new_balance = i32::try_from(i64::from(balance) - amount)
        .map_err(|e| Error::InternalError(format!("VP balance out of range: {}", e)))?;

    if !WalletRepository::new(db)
        .compare_and_set_vp(user_id, balance, new_balance)
        .await?
    {
        return Err(Error::ConcurrentUpdate(format!("wallet of user ID {}", user_id)));
    }

    Ok(new_balance)
}
