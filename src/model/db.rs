//! Database model type aliases.
//!
//! Short names for the SeaORM models generated in the `entity` crate, so repository and
//! service signatures don't have to spell out the entity module paths.

/// Credential row: identity, password hash and moderation state.
pub type UserModel = entity::account_user::Model;

/// Mutable account attributes, 1:1 with [`UserModel`].
pub type ProfileModel = entity::account_profile::Model;

/// Point balances, 1:1 with [`UserModel`].
pub type WalletModel = entity::account_wallet::Model;

/// One owned item in one inventory category.
pub type InventoryItemModel = entity::inventory_item::Model;

/// One logged match.
pub type MatchRecordModel = entity::match_record::Model;

/// Named group of catalog skins.
pub type BundleModel = entity::catalog_bundle::Model;

/// Purchasable skin with an optional VP price.
pub type SkinModel = entity::catalog_skin::Model;
