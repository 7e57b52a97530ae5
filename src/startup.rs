use sea_orm::{DatabaseConnection, TransactionTrait};

use crate::{
    config::Config,
    data::{
        inventory::InventoryRepository, match_history::MatchHistoryRepository,
        profile::ProfileRepository, user::UserRepository, wallet::WalletRepository,
    },
    error::Error,
    service::{
        auth::{insert_account, AuthService},
        catalog::CatalogService,
        match_history::DEFAULT_MATCH_LINK,
    },
    util::defaults::{
        default_bundles, default_skins, demo_inventory, demo_matches, demo_profile,
        demo_registration, DEMO_USERNAME, DEMO_WALLET,
    },
};

pub async fn connect_to_database(config: &Config) -> Result<DatabaseConnection, Error> {
    use migration::{Migrator, MigratorTrait};
    use sea_orm::{ConnectOptions, Database};

    let mut opt = ConnectOptions::new(&config.database_url);
    opt.sqlx_logging(false);

    let db = Database::connect(opt).await?;

    Migrator::up(&db, None).await?;

    Ok(db)
}

/// Installs the default bundles and standalone skins
pub async fn seed_catalog(db: &DatabaseConnection) -> Result<(), Error> {
    let catalog_service = CatalogService::new(db);

    catalog_service.seed_bundles(default_bundles()).await?;
    catalog_service.seed_skins(default_skins()).await?;

    Ok(())
}

/// Creates the demo account unless it already exists
///
/// Returns the new user ID, or `None` if the account was already present. The account and
/// its demo profile, wallet, items and matches are written in one transaction.
pub async fn seed_demo_user(db: &DatabaseConnection) -> Result<Option<i32>, Error> {
    if UserRepository::new(db)
        .find_by_username(DEMO_USERNAME)
        .await?
        .is_some()
    {
        return Ok(None);
    }

    let account = AuthService::new(db)
        .prepare_account(demo_registration())
        .await?;

    let txn = db.begin().await?;

    let user = insert_account(&txn, account).await?;
    let user_id = user.id;

    ProfileRepository::new(&txn)
        .update(user_id, demo_profile())
        .await?
        .ok_or_else(|| Error::NotFound(format!("Profile for user ID {}", user_id)))?;
    WalletRepository::new(&txn)
        .set_balances(user_id, DEMO_WALLET)
        .await?
        .ok_or_else(|| Error::NotFound(format!("Wallet for user ID {}", user_id)))?;
    InventoryRepository::new(&txn)
        .create_many(
            user_id,
            demo_inventory()
                .into_iter()
                .map(|(category, item)| (category, item.to_string()))
                .collect(),
        )
        .await?;

    let match_repo = MatchHistoryRepository::new(&txn);
    for (date, result, score) in demo_matches() {
        match_repo
            .create(
                user_id,
                date,
                result,
                score.to_string(),
                DEFAULT_MATCH_LINK.to_string(),
            )
            .await?;
    }

    txn.commit().await?;

    tracing::info!("Created demo account with user ID {}", user_id);

    Ok(Some(user_id))
}
