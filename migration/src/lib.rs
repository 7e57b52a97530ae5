pub use sea_orm_migration::prelude::*;

mod m20251020_000001_account_user;
mod m20251020_000002_account_profile;
mod m20251020_000003_account_wallet;
mod m20251020_000004_inventory_item;
mod m20251020_000005_match_record;
mod m20251020_000006_catalog_bundle;
mod m20251020_000007_catalog_skin;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20251020_000001_account_user::Migration),
            Box::new(m20251020_000002_account_profile::Migration),
            Box::new(m20251020_000003_account_wallet::Migration),
            Box::new(m20251020_000004_inventory_item::Migration),
            Box::new(m20251020_000005_match_record::Migration),
            Box::new(m20251020_000006_catalog_bundle::Migration),
            Box::new(m20251020_000007_catalog_skin::Migration),
        ]
    }
}
